// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::pooled_connection::deadpool::PoolError;
use thiserror::Error;

use crate::models::user::UnknownVariant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure surfaced by a repository. Storage errors pass through unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Query(#[from] DieselError),

    #[error("database connection error: {0}")]
    Pool(#[from] PoolError),

    #[error("invalid stored data: {0}")]
    InvalidData(#[from] UnknownVariant),
}

impl StoreError {
    /// Whether the store refused the write because of its schema constraints
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Query(DieselError::DatabaseError(
                DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation,
                _
            ))
        )
    }
}
