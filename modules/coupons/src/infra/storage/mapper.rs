//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{Coupon, NewCoupon};
use sea_orm::ActiveValue::{NotSet, Set};

impl From<entity::Model> for Coupon {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            percent: entity.percent,
            is_active: entity.is_active,
            created: entity.created,
            last_updated: entity.last_updated,
        }
    }
}

impl From<&NewCoupon> for entity::ActiveModel {
    fn from(model: &NewCoupon) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            percent: Set(model.percent),
            is_active: Set(model.is_active),
            created: Set(model.created),
            last_updated: Set(None),
        }
    }
}

/// `created` is left untouched so an update can never rewrite it.
impl From<&Coupon> for entity::ActiveModel {
    fn from(model: &Coupon) -> Self {
        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
            percent: Set(model.percent),
            is_active: Set(model.is_active),
            created: NotSet,
            last_updated: Set(model.last_updated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_update_model_does_not_touch_created() {
        let coupon = Coupon {
            id: 3,
            name: "WINTER".to_string(),
            percent: 15,
            is_active: true,
            created: Utc::now(),
            last_updated: Some(Utc::now()),
        };

        let active: entity::ActiveModel = (&coupon).into();
        assert_eq!(active.id, Set(3));
        assert_eq!(active.created, NotSet);
        assert_eq!(active.last_updated, Set(coupon.last_updated));
    }

    #[test]
    fn test_insert_model_leaves_id_to_storage() {
        let new = NewCoupon {
            name: "SPRING".to_string(),
            percent: 5,
            is_active: false,
            created: Utc::now(),
        };

        let active: entity::ActiveModel = (&new).into();
        assert_eq!(active.id, NotSet);
        assert_eq!(active.name, Set("SPRING".to_string()));
        assert_eq!(active.last_updated, Set(None));
    }
}
