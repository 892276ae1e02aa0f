//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with coupons.
//! NO HTTP - direct function calls for performance.

use super::{
    error::CouponsError,
    model::{Coupon, CouponCreate, CouponUpdate},
};
use async_trait::async_trait;

/// Coupons API for inter-module communication
#[async_trait]
pub trait CouponsApi: Send + Sync {
    /// List every coupon
    async fn list_coupons(&self) -> Result<Vec<Coupon>, CouponsError>;

    /// Get a coupon by id
    async fn get_coupon(&self, id: i32) -> Result<Coupon, CouponsError>;

    /// Create a coupon with a unique name
    async fn create_coupon(&self, input: CouponCreate) -> Result<Coupon, CouponsError>;

    /// Overwrite name, percent and active flag of an existing coupon
    async fn update_coupon(&self, input: CouponUpdate) -> Result<Coupon, CouponsError>;

    /// Hard delete a coupon
    async fn delete_coupon(&self, id: i32) -> Result<(), CouponsError>;
}
