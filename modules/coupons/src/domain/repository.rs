//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage (SeaORM) and infra/memory (in-process).

use crate::contract::{Coupon, NewCoupon};
use anyhow::Result;
use async_trait::async_trait;

/// Shared coupon storage handing out per-request units of work
pub trait CouponStore: Send + Sync {
    /// Open a fresh repository with nothing staged
    fn repository(&self) -> Box<dyn CouponRepository>;
}

/// Unit of work over the coupons table.
///
/// Reads run immediately. `create`, `update` and `remove` only stage changes;
/// nothing reaches storage until `persist` commits them together.
#[async_trait]
pub trait CouponRepository: Send + Sync {
    /// All coupons ordered by id
    async fn get_all(&self) -> Result<Vec<Coupon>>;

    /// Find a coupon by identifier
    async fn get_by_id(&self, id: i32) -> Result<Option<Coupon>>;

    /// Find a coupon by name, ignoring case
    async fn get_by_name(&self, name: &str) -> Result<Option<Coupon>>;

    /// Stage an insert
    fn create(&mut self, coupon: NewCoupon);

    /// Stage an in-place update
    fn update(&mut self, coupon: Coupon);

    /// Stage a delete
    fn remove(&mut self, coupon: Coupon);

    /// Commit staged changes atomically.
    ///
    /// Returns the inserted coupons, with their assigned ids, in staging order.
    async fn persist(&mut self) -> Result<Vec<Coupon>>;
}

/// Storage-level failures the domain reacts to
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The case-insensitive name index rejected a write
    #[error("coupon name '{name}' violates the unique name index")]
    DuplicateName { name: String },

    /// A staged update or remove targets a row that no longer exists
    #[error("coupon {id} no longer exists")]
    Missing { id: i32 },
}

/// A staged change waiting for `persist`
#[derive(Debug, Clone)]
pub enum Staged {
    Insert(NewCoupon),
    Update(Coupon),
    Remove(Coupon),
}
