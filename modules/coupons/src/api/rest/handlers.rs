//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, ApiError},
    routes::BASE_PATH,
};
use crate::contract::CouponsError;
use crate::domain::Service;
use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// List all coupons
pub async fn list_coupons(
    service: Arc<Service>,
) -> Result<Json<ApiResponse<Vec<CouponDto>>>, ApiError> {
    let coupons = service.list_coupons().await.map_err(map_domain_error)?;

    let items: Vec<CouponDto> = coupons.into_iter().map(|c| c.into()).collect();
    Ok(Json(ApiResponse::success(StatusCode::OK.as_u16(), items)))
}

/// Get a coupon by id
pub async fn get_coupon(
    service: Arc<Service>,
    raw_id: String,
) -> Result<Json<ApiResponse<CouponDto>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let coupon = service.get_coupon(id).await.map_err(map_domain_error)?;

    Ok(Json(ApiResponse::success(StatusCode::OK.as_u16(), coupon.into())))
}

/// Create a coupon; responds 201 with a Location pointing at the new record
pub async fn create_coupon(
    service: Arc<Service>,
    payload: Result<Json<CouponCreateRequestDto>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload.map_err(reject_body)?;

    let coupon = service
        .create_coupon(req.into())
        .await
        .map_err(map_domain_error)?;

    let location = format!("{}/{}", BASE_PATH, coupon.id);
    let body: ApiResponse<CouponResponseDto> =
        ApiResponse::success(StatusCode::CREATED.as_u16(), coupon.into());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response())
}

/// Update an existing coupon
pub async fn update_coupon(
    service: Arc<Service>,
    payload: Result<Json<CouponUpdateRequestDto>, JsonRejection>,
) -> Result<Json<ApiResponse<CouponDto>>, ApiError> {
    let Json(req) = payload.map_err(reject_body)?;

    let coupon = service
        .update_coupon(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ApiResponse::success(StatusCode::OK.as_u16(), coupon.into())))
}

/// Delete a coupon
pub async fn delete_coupon(service: Arc<Service>, raw_id: String) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;

    service.delete_coupon(id).await.map_err(|e| match e {
        CouponsError::NotFound { id } => {
            ApiError::not_found(format!("The coupon with identifier '{}' does not exist", id))
        }
        other => map_domain_error(other),
    })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Non-integer ids never match a coupon route.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| {
        tracing::debug!(raw_id = raw, "Coupon id is not an integer");
        ApiError::not_found(format!("Coupon with identifier '{}' not found.", raw))
    })
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    tracing::warn!(error = %rejection, "Rejected coupon request body");
    ApiError::bad_request(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Ok(42));
        assert_eq!(parse_id("-1"), Ok(-1));
        assert_eq!(
            parse_id("abc"),
            Err(ApiError::not_found("Coupon with identifier 'abc' not found."))
        );
    }
}
