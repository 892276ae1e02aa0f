//! Database migrations for the coupons module

use sea_orm_migration::prelude::*;

mod m20241210_000001_create_coupons;
mod m20241210_000002_unique_coupon_name;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241210_000001_create_coupons::Migration),
            Box::new(m20241210_000002_unique_coupon_name::Migration),
        ]
    }
}

#[derive(DeriveIden)]
enum Coupons {
    Table,
    Id,
    Name,
    Percent,
    IsActive,
    Created,
    LastUpdated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_names_are_unique_and_ordered() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "m20241210_000001_create_coupons",
                "m20241210_000002_unique_coupon_name",
            ]
        );
    }
}
