//! Infrastructure layer - storage backends

pub mod memory;
pub mod storage;

pub use memory::InMemoryCouponStore;
pub use storage::SeaOrmCouponStore;
