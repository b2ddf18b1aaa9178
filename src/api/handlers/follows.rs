// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::api::error::ApiResult;
use crate::models::{DeleteStatus, Follow};
use crate::repository::Repositories;

/// Get the users that a user is following
pub async fn find_following(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Follow>> {
    debug!("Getting following for user {}", uid);
    Ok(Json(repos.follows.find_following(&uid).await?))
}

/// Get the users that follow a user
pub async fn find_followers(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Follow>> {
    debug!("Getting followers for user {}", uid);
    Ok(Json(repos.follows.find_followers(&uid).await?))
}

pub async fn user_follows_user(
    State(repos): State<Repositories>,
    Path((uid, fid)): Path<(String, String)>,
) -> ApiResult<Follow> {
    Ok(Json(repos.follows.user_follows_user(&uid, &fid).await?))
}

pub async fn user_unfollows_user(
    State(repos): State<Repositories>,
    Path((uid, fid)): Path<(String, String)>,
) -> ApiResult<DeleteStatus> {
    Ok(Json(repos.follows.user_unfollows_user(&uid, &fid).await?))
}
