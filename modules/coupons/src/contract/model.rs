//! Contract models for the coupons module
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};

/// Persisted coupon record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    /// Storage-assigned identifier, immutable after creation
    pub id: i32,
    /// Discount code, unique across all coupons (case-insensitive)
    pub name: String,
    /// Discount percentage in 1..=100
    pub percent: i32,
    /// Whether the coupon can currently be redeemed
    pub is_active: bool,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last update timestamp, absent until the first update
    pub last_updated: Option<DateTime<Utc>>,
}

/// Coupon staged for insertion; the id is assigned when it is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCoupon {
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
    pub created: DateTime<Utc>,
}

impl NewCoupon {
    /// Attach a storage-assigned id
    pub fn into_coupon(self, id: i32) -> Coupon {
        Coupon {
            id,
            name: self.name,
            percent: self.percent,
            is_active: self.is_active,
            created: self.created,
            last_updated: None,
        }
    }
}

/// Input for creating a coupon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponCreate {
    pub name: String,
    pub percent: i32,
}

/// Input for updating an existing coupon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponUpdate {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}
