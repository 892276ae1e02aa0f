//! SeaORM entity for the coupons table

use sea_orm::entity::prelude::*;

/// Coupons table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
    /// Auto-incremented primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique (case-insensitive) through `idx_coupons_name_lower`
    pub name: String,

    pub percent: i32,

    pub is_active: bool,

    /// Creation timestamp
    pub created: DateTimeUtc,

    /// Last update timestamp
    pub last_updated: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
