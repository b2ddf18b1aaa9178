// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::error::{ApiError, ApiResult};
use crate::models::{CountResponse, DeleteStatus, Like};
use crate::repository::Repositories;

/// GET /api/tuits/:tid/likes
pub async fn find_users_that_liked_tuit(
    State(repos): State<Repositories>,
    Path(tid): Path<String>,
) -> ApiResult<Vec<Like>> {
    Ok(Json(repos.likes.find_users_that_liked_tuit(&tid).await?))
}

/// GET /api/users/:uid/likes
pub async fn find_tuits_liked_by_user(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Like>> {
    Ok(Json(repos.likes.find_tuits_liked_by_user(&uid).await?))
}

/// GET /api/users/:uid/likes/:tid
pub async fn find_user_likes_tuit(
    State(repos): State<Repositories>,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<Like> {
    repos
        .likes
        .find_user_likes_tuit(&uid, &tid)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Like"))
}

/// GET /api/tuits/:tid/likes/count
pub async fn count_likes(
    State(repos): State<Repositories>,
    Path(tid): Path<String>,
) -> ApiResult<CountResponse> {
    let count = repos.likes.count_likes(&tid).await?;
    Ok(Json(CountResponse { count }))
}

/// POST /api/users/:uid/likes/:tid
pub async fn user_likes_tuit(
    State(repos): State<Repositories>,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<Like> {
    Ok(Json(repos.likes.user_likes_tuit(&uid, &tid).await?))
}

/// DELETE /api/users/:uid/unlikes/:tid
pub async fn user_unlikes_tuit(
    State(repos): State<Repositories>,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<DeleteStatus> {
    Ok(Json(repos.likes.user_unlikes_tuit(&uid, &tid).await?))
}
