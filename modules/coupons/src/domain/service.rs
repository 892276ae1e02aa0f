//! Domain service - business logic orchestration

use super::repository::{CouponStore, StoreError};
use super::validation::{self, Violation};
use crate::contract::{Coupon, CouponCreate, CouponUpdate, CouponsError, NewCoupon};
use chrono::Utc;
use std::sync::Arc;

/// Domain service for coupon management
pub struct Service {
    store: Arc<dyn CouponStore>,
}

impl Service {
    /// Create a new service instance
    pub fn new(store: Arc<dyn CouponStore>) -> Self {
        Self { store }
    }

    /// List all coupons
    pub async fn list_coupons(&self) -> Result<Vec<Coupon>, CouponsError> {
        tracing::info!("Looking for all coupons");

        let coupons = self
            .store
            .repository()
            .get_all()
            .await
            .map_err(map_store_error)?;

        tracing::info!(count = coupons.len(), "Coupons retrieved");
        Ok(coupons)
    }

    /// Get a coupon by id
    pub async fn get_coupon(&self, id: i32) -> Result<Coupon, CouponsError> {
        tracing::info!(coupon_id = id, "Looking for coupon");

        let coupon = self
            .store
            .repository()
            .get_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| {
                tracing::error!(coupon_id = id, "Coupon not found");
                CouponsError::NotFound { id }
            })?;

        tracing::info!(coupon_id = id, "Coupon retrieved");
        Ok(coupon)
    }

    /// Create a coupon after validation and a case-insensitive name check
    pub async fn create_coupon(&self, input: CouponCreate) -> Result<Coupon, CouponsError> {
        tracing::debug!("Validating coupon data");
        reject_first(validation::validate_create(&input))?;

        let mut repo = self.store.repository();

        // Fast path only; the unique name index decides under concurrent creates.
        if repo
            .get_by_name(&input.name)
            .await
            .map_err(map_store_error)?
            .is_some()
        {
            tracing::error!(name = %input.name, "Coupon name already exists");
            return Err(CouponsError::Conflict { name: input.name });
        }

        tracing::info!(name = %input.name, "Creating new coupon");
        repo.create(NewCoupon {
            name: input.name,
            percent: input.percent,
            is_active: false,
            created: Utc::now(),
        });

        let coupon = repo
            .persist()
            .await
            .map_err(map_store_error)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                tracing::error!("Persist returned no inserted coupon");
                CouponsError::Internal
            })?;

        tracing::info!(coupon_id = coupon.id, "Coupon has been created");
        Ok(coupon)
    }

    /// Overwrite name, percent and active flag of an existing coupon.
    ///
    /// The new name is not checked against other coupons here; a collision
    /// is only caught by the storage name index.
    pub async fn update_coupon(&self, input: CouponUpdate) -> Result<Coupon, CouponsError> {
        tracing::debug!(coupon_id = input.id, "Validating coupon data");
        reject_first(validation::validate_update(&input))?;

        let mut repo = self.store.repository();
        let mut coupon = repo
            .get_by_id(input.id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| {
                tracing::error!(coupon_id = input.id, "Coupon not found");
                CouponsError::NotFound { id: input.id }
            })?;

        tracing::info!(coupon_id = coupon.id, "Updating coupon");
        coupon.name = input.name;
        coupon.percent = input.percent;
        coupon.is_active = input.is_active;
        coupon.last_updated = Some(Utc::now());

        repo.update(coupon.clone());
        repo.persist().await.map_err(map_store_error)?;

        tracing::info!(coupon_id = coupon.id, "Coupon has been updated");
        Ok(coupon)
    }

    /// Hard delete a coupon
    pub async fn delete_coupon(&self, id: i32) -> Result<(), CouponsError> {
        tracing::info!(coupon_id = id, "Looking for coupon to delete");

        let mut repo = self.store.repository();
        let coupon = repo
            .get_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| {
                tracing::error!(coupon_id = id, "Coupon does not exist");
                CouponsError::NotFound { id }
            })?;

        repo.remove(coupon);
        repo.persist().await.map_err(map_store_error)?;

        tracing::info!(coupon_id = id, "Coupon has been deleted");
        Ok(())
    }
}

/// Only the first violation is exposed to callers.
fn reject_first(violations: Vec<Violation>) -> Result<(), CouponsError> {
    match violations.into_iter().next() {
        Some(violation) => {
            tracing::error!(field = violation.field, "Coupon validation failed");
            Err(CouponsError::Validation {
                message: violation.message,
            })
        }
        None => Ok(()),
    }
}

fn map_store_error(error: anyhow::Error) -> CouponsError {
    match error.downcast_ref::<StoreError>() {
        Some(StoreError::DuplicateName { name }) => {
            tracing::error!(name = %name, "Coupon name rejected by unique index");
            CouponsError::Conflict { name: name.clone() }
        }
        Some(StoreError::Missing { id }) => CouponsError::NotFound { id: *id },
        None => {
            tracing::error!(error = ?error, "Coupon storage failure");
            CouponsError::Internal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_first_keeps_only_first_message() {
        let violations = vec![
            Violation {
                field: "Name",
                message: "first".to_string(),
            },
            Violation {
                field: "Percent",
                message: "second".to_string(),
            },
        ];

        assert_eq!(
            reject_first(violations),
            Err(CouponsError::Validation {
                message: "first".to_string()
            })
        );
        assert_eq!(reject_first(Vec::new()), Ok(()));
    }

    #[test]
    fn test_map_store_error() {
        let dup = anyhow::Error::new(StoreError::DuplicateName {
            name: "Summer".to_string(),
        });
        assert_eq!(
            map_store_error(dup),
            CouponsError::Conflict {
                name: "Summer".to_string()
            }
        );

        let missing = anyhow::Error::new(StoreError::Missing { id: 4 });
        assert_eq!(map_store_error(missing), CouponsError::NotFound { id: 4 });

        let other = anyhow::anyhow!("connection reset");
        assert_eq!(map_store_error(other), CouponsError::Internal);
    }
}
