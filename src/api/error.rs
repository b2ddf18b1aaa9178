// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::StoreError;

pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(e) if e.is_constraint_violation() => StatusCode::BAD_REQUEST,
            ApiError::Store(e) => {
                error!("Store operation failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UnknownVariant;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound("User").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failures_map_to_500() {
        let error = StoreError::from(UnknownVariant {
            kind: "account type",
            value: "ADMIN".into(),
        });
        let response = ApiError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn query_errors_pass_through_unchanged() {
        let error = ApiError::from(StoreError::from(diesel::result::Error::NotFound));
        assert_eq!(error.to_string(), "database error: Record not found");
    }
}
