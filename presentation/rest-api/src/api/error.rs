use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Body of every failed request.
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Human readable description
    pub message: String,
    /// Code-style error identifier, e.g. `wishlist.item_not_found`
    pub error: String,
    /// HTTP status code, repeated in the body
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            error: error.into(),
            status_code: status.as_u16(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
