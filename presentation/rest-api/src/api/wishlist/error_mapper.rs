use poem::http::StatusCode;
use poem::{Endpoint, EndpointExt, Response};
use poem_openapi::error::{ContentTypeError, ParseParamError, ParseRequestPayloadError};
use poem_openapi::payload::Json;
use poem_openapi::types::ToJSON;

use business::domain::wishlist::errors::WishlistError;

use super::messages;
use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            WishlistError::InvalidUserId
            | WishlistError::InvalidProductId
            | WishlistError::InvalidRequest => {
                (StatusCode::BAD_REQUEST, messages::VALIDATION_ERROR)
            }
            WishlistError::NotFound => (StatusCode::NOT_FOUND, messages::WISHLIST_NOT_FOUND),
            WishlistError::ItemNotFound => (StatusCode::NOT_FOUND, messages::ITEM_NOT_IN_WISHLIST),
            WishlistError::ProductNotFound => (StatusCode::NOT_FOUND, messages::PRODUCT_NOT_FOUND),
            WishlistError::DuplicateItem => (StatusCode::BAD_REQUEST, messages::DUPLICATE_ITEM),
            WishlistError::ProductOutOfStock => {
                (StatusCode::BAD_REQUEST, messages::PRODUCT_OUT_OF_STOCK)
            }
            WishlistError::UpstreamUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                messages::UPSTREAM_SERVICE_ERROR,
            ),
            WishlistError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                messages::INTERNAL_SERVER_ERROR,
            ),
        };

        (
            status,
            Json(ErrorResponse::new(status, message, self.to_string())),
        )
    }
}

/// Gives requests rejected by the OpenAPI layer (missing parameters, undecodable
/// bodies) the same error envelope as the handlers return.
pub fn with_request_error_envelope<E>(endpoint: E) -> impl Endpoint<Output = Response>
where
    E: Endpoint + 'static,
{
    endpoint
        .catch_error(|err: ParseParamError| async move {
            let error = match err.name {
                "userId" => WishlistError::InvalidUserId,
                "productId" => WishlistError::InvalidProductId,
                _ => WishlistError::InvalidRequest,
            };
            rejected(error, &err.reason)
        })
        .catch_error(|err: ParseRequestPayloadError| async move {
            rejected(WishlistError::InvalidRequest, &err.reason)
        })
        .catch_error(|err: ContentTypeError| async move {
            rejected(WishlistError::InvalidRequest, &err.to_string())
        })
}

fn rejected(error: WishlistError, reason: &str) -> Response {
    tracing::warn!(error = %error, reason, "Request rejected before reaching a handler");
    let (status, Json(body)) = error.into_error_response();
    Response::builder()
        .status(status)
        .content_type("application/json; charset=utf-8")
        .body(body.to_json_string())
}
