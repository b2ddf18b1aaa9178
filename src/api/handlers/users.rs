// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info};

use crate::api::error::{ApiError, ApiResult};
use crate::models::{DeleteStatus, NewUser, UpdateStatus, UpdateUser, User};
use crate::repository::Repositories;

/// GET /api/users
pub async fn find_all_users(State(repos): State<Repositories>) -> ApiResult<Vec<User>> {
    Ok(Json(repos.users.find_all_users().await?))
}

/// GET /api/users/:uid
pub async fn find_user_by_id(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
) -> ApiResult<User> {
    debug!("Getting user {}", uid);

    repos
        .users
        .find_user_by_id(&uid)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("User"))
}

/// POST /api/users
pub async fn create_user(
    State(repos): State<Repositories>,
    Json(user): Json<NewUser>,
) -> ApiResult<User> {
    let user = repos.users.create_user(user).await?;
    info!("Created user {} ({})", user.id, user.username);
    Ok(Json(user))
}

/// PUT /api/users/:uid
pub async fn update_user(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
    Json(user): Json<UpdateUser>,
) -> ApiResult<UpdateStatus> {
    Ok(Json(repos.users.update_user(&uid, user).await?))
}

/// DELETE /api/users/:uid
pub async fn delete_user(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
) -> ApiResult<DeleteStatus> {
    Ok(Json(repos.users.delete_user(&uid).await?))
}

/// DELETE /api/users
pub async fn delete_all_users(State(repos): State<Repositories>) -> ApiResult<DeleteStatus> {
    let status = repos.users.delete_all_users().await?;
    info!("Deleted all users ({} removed)", status.deleted_count);
    Ok(Json(status))
}
