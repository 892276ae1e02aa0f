//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract;

impl From<contract::Coupon> for CouponDto {
    fn from(coupon: contract::Coupon) -> Self {
        Self {
            id: coupon.id,
            name: coupon.name,
            percent: coupon.percent,
            is_active: coupon.is_active,
            created: coupon.created,
            last_updated: coupon.last_updated,
        }
    }
}

impl From<contract::Coupon> for CouponResponseDto {
    fn from(coupon: contract::Coupon) -> Self {
        Self {
            id: coupon.id,
            name: coupon.name,
            percent: coupon.percent,
            is_active: coupon.is_active,
            created: Some(coupon.created),
        }
    }
}

impl From<CouponCreateRequestDto> for contract::CouponCreate {
    fn from(req: CouponCreateRequestDto) -> Self {
        Self {
            name: req.name,
            percent: req.percent,
        }
    }
}

impl From<CouponUpdateRequestDto> for contract::CouponUpdate {
    fn from(req: CouponUpdateRequestDto) -> Self {
        Self {
            id: req.id,
            name: req.name,
            percent: req.percent,
            is_active: req.is_active,
        }
    }
}
