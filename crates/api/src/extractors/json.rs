//! JSON body extractor with API-shaped rejections.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON extractor that reports malformed bodies as a 400 validation
/// error in the standard error envelope, instead of axum's default 422.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
