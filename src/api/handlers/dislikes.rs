// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::error::{ApiError, ApiResult};
use crate::models::{CountResponse, DeleteStatus, Dislike};
use crate::repository::Repositories;

/// GET /api/tuits/:tid/dislikes
pub async fn find_users_that_disliked_tuit(
    State(repos): State<Repositories>,
    Path(tid): Path<String>,
) -> ApiResult<Vec<Dislike>> {
    Ok(Json(repos.dislikes.find_users_that_disliked_tuit(&tid).await?))
}

/// GET /api/users/:uid/dislikes
pub async fn find_tuits_disliked_by_user(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Dislike>> {
    Ok(Json(repos.dislikes.find_tuits_disliked_by_user(&uid).await?))
}

/// GET /api/users/:uid/dislikes/:tid
pub async fn find_user_dislikes_tuit(
    State(repos): State<Repositories>,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<Dislike> {
    repos
        .dislikes
        .find_user_dislikes_tuit(&uid, &tid)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Dislike"))
}

/// GET /api/tuits/:tid/dislikes/count
pub async fn count_dislikes(
    State(repos): State<Repositories>,
    Path(tid): Path<String>,
) -> ApiResult<CountResponse> {
    let count = repos.dislikes.count_dislikes(&tid).await?;
    Ok(Json(CountResponse { count }))
}

/// POST /api/users/:uid/dislikes/:tid
pub async fn user_dislikes_tuit(
    State(repos): State<Repositories>,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<Dislike> {
    Ok(Json(repos.dislikes.user_dislikes_tuit(&uid, &tid).await?))
}

/// DELETE /api/users/:uid/undislikes/:tid
pub async fn user_undislikes_tuit(
    State(repos): State<Repositories>,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<DeleteStatus> {
    Ok(Json(repos.dislikes.user_undislikes_tuit(&uid, &tid).await?))
}
