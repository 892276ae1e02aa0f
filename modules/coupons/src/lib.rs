//! Coupons Module
//!
//! CRUD management of discount coupons: validation, case-insensitive name
//! uniqueness, and a REST API under `/api/coupons` that wraps every response
//! in a uniform envelope.

// Public exports
pub mod contract;
pub use contract::{Coupon, CouponCreate, CouponUpdate, CouponsApi, CouponsError};

pub mod config;
pub use config::{Config, StorageKind};

pub mod module;
pub use module::CouponsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
