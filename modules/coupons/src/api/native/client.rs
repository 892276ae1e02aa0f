//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Coupon, CouponCreate, CouponUpdate, CouponsApi, CouponsError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CouponsApi for NativeClient {
    async fn list_coupons(&self) -> Result<Vec<Coupon>, CouponsError> {
        self.service.list_coupons().await
    }

    async fn get_coupon(&self, id: i32) -> Result<Coupon, CouponsError> {
        self.service.get_coupon(id).await
    }

    async fn create_coupon(&self, input: CouponCreate) -> Result<Coupon, CouponsError> {
        self.service.create_coupon(input).await
    }

    async fn update_coupon(&self, input: CouponUpdate) -> Result<Coupon, CouponsError> {
        self.service.update_coupon(input).await
    }

    async fn delete_coupon(&self, id: i32) -> Result<(), CouponsError> {
        self.service.delete_coupon(id).await
    }
}
