//! Route registration

use super::{dto::*, error::ApiError, handlers};
use crate::domain::Service;
use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    response::Response,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Mount point of the coupons API
pub const BASE_PATH: &str = "/api/coupons";

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            BASE_PATH,
            get(list_coupons_handler)
                .post(create_coupon_handler)
                .put(update_coupon_handler),
        )
        .route(
            &format!("{}/{{id}}", BASE_PATH),
            get(get_coupon_handler).delete(delete_coupon_handler),
        )
        // Add service as extension for handlers
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_coupons_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<ApiResponse<Vec<CouponDto>>>, ApiError> {
    handlers::list_coupons(service).await
}

async fn get_coupon_handler(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CouponDto>>, ApiError> {
    handlers::get_coupon(service, id).await
}

async fn create_coupon_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<CouponCreateRequestDto>, JsonRejection>,
) -> Result<Response, ApiError> {
    handlers::create_coupon(service, json).await
}

async fn update_coupon_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<CouponUpdateRequestDto>, JsonRejection>,
) -> Result<Json<ApiResponse<CouponDto>>, ApiError> {
    handlers::update_coupon(service, json).await
}

async fn delete_coupon_handler(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    handlers::delete_coupon(service, id).await
}
