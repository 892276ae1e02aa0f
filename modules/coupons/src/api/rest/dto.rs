//! REST DTOs with serde derives for HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Envelope =====

/// Uniform response wrapper used by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub is_success: bool,

    /// Payload, `null` on failure
    pub result: Option<T>,

    /// HTTP status code mirrored into the body
    #[schema(example = 200)]
    pub status_code: u16,

    /// Error messages, empty on success
    pub error_messages: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(status_code: u16, result: T) -> Self {
        Self {
            is_success: true,
            result: Some(result),
            status_code,
            error_messages: Vec::new(),
        }
    }

    pub fn failure(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            result: None,
            status_code,
            error_messages: vec![message.into()],
        }
    }
}

// ===== Coupon DTOs =====

/// Full coupon record as returned by list, get and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    pub id: i32,

    #[schema(example = "SUMMER")]
    pub name: String,

    /// Discount percentage (1-100)
    #[schema(example = 20)]
    pub percent: i32,

    pub is_active: bool,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Last update timestamp, `null` until the first update
    pub last_updated: Option<DateTime<Utc>>,
}

/// Coupon returned by the create endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CouponResponseDto {
    pub id: i32,

    #[schema(example = "SUMMER")]
    pub name: String,

    #[schema(example = 20)]
    pub percent: i32,

    pub is_active: bool,

    pub created: Option<DateTime<Utc>>,
}

/// Create coupon request
///
/// Missing fields default to zero values and are reported by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CouponCreateRequestDto {
    #[schema(example = "SUMMER")]
    pub name: String,

    #[schema(example = 20)]
    pub percent: i32,
}

/// Update coupon request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CouponUpdateRequestDto {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "SUMMER")]
    pub name: String,

    #[schema(example = 25)]
    pub percent: i32,

    pub is_active: bool,
}

// Note: Conversion implementations live in mapper.rs
