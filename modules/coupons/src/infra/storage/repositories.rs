//! SeaORM repository implementations

use crate::contract::{Coupon, NewCoupon};
use crate::domain::repository::{CouponRepository, CouponStore, Staged, StoreError};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func},
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};
use std::sync::Arc;

use super::entity;

/// Coupon store backed by a SeaORM connection pool
pub struct SeaOrmCouponStore {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCouponStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl CouponStore for SeaOrmCouponStore {
    fn repository(&self) -> Box<dyn CouponRepository> {
        Box::new(SeaOrmCouponRepository {
            db: self.db.clone(),
            staged: Vec::new(),
        })
    }
}

/// Per-request unit of work; `persist` runs staged changes in one transaction
pub struct SeaOrmCouponRepository {
    db: Arc<DatabaseConnection>,
    staged: Vec<Staged>,
}

#[async_trait]
impl CouponRepository for SeaOrmCouponRepository {
    async fn get_all(&self) -> Result<Vec<Coupon>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Coupon>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    // Both sides go through SQL `lower()`, the same folding as the unique index.
    async fn get_by_name(&self, name: &str) -> Result<Option<Coupon>> {
        let result = entity::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::Column::Name)))
                    .eq(Func::lower(Expr::val(name))),
            )
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    fn create(&mut self, coupon: NewCoupon) {
        self.staged.push(Staged::Insert(coupon));
    }

    fn update(&mut self, coupon: Coupon) {
        self.staged.push(Staged::Update(coupon));
    }

    fn remove(&mut self, coupon: Coupon) {
        self.staged.push(Staged::Remove(coupon));
    }

    async fn persist(&mut self) -> Result<Vec<Coupon>> {
        let staged = std::mem::take(&mut self.staged);
        if staged.is_empty() {
            return Ok(Vec::new());
        }

        // Dropping the transaction on an early return rolls everything back.
        let txn = self.db.begin().await?;
        let mut inserted = Vec::new();

        for change in staged {
            match change {
                Staged::Insert(coupon) => {
                    let active: entity::ActiveModel = (&coupon).into();
                    let model = entity::Entity::insert(active)
                        .exec_with_returning(&txn)
                        .await
                        .map_err(|e| classify(e, &coupon.name, None))?;
                    inserted.push(model.into());
                }
                Staged::Update(coupon) => {
                    let active: entity::ActiveModel = (&coupon).into();
                    entity::Entity::update(active)
                        .exec(&txn)
                        .await
                        .map_err(|e| classify(e, &coupon.name, Some(coupon.id)))?;
                }
                Staged::Remove(coupon) => {
                    let result = entity::Entity::delete_by_id(coupon.id).exec(&txn).await?;
                    if result.rows_affected == 0 {
                        return Err(StoreError::Missing { id: coupon.id }.into());
                    }
                }
            }
        }

        txn.commit().await?;
        tracing::debug!(inserted = inserted.len(), "Staged coupon changes committed");
        Ok(inserted)
    }
}

fn classify(error: DbErr, name: &str, id: Option<i32>) -> anyhow::Error {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = error.sql_err() {
        return StoreError::DuplicateName {
            name: name.to_string(),
        }
        .into();
    }
    match (error, id) {
        (DbErr::RecordNotUpdated, Some(id)) => StoreError::Missing { id }.into(),
        (error, _) => error.into(),
    }
}
