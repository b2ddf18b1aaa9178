// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::api::error::{ApiError, ApiResult};
use crate::models::{DeleteStatus, NewTuit, Tuit, UpdateStatus, UpdateTuit};
use crate::repository::Repositories;

/// GET /api/tuits
pub async fn find_all_tuits(State(repos): State<Repositories>) -> ApiResult<Vec<Tuit>> {
    Ok(Json(repos.tuits.find_all_tuits().await?))
}

/// GET /api/users/:uid/tuits
pub async fn find_tuits_by_user(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Tuit>> {
    Ok(Json(repos.tuits.find_tuits_by_user(&uid).await?))
}

/// GET /api/tuits/:tid
pub async fn find_tuit_by_id(
    State(repos): State<Repositories>,
    Path(tid): Path<String>,
) -> ApiResult<Tuit> {
    repos
        .tuits
        .find_tuit_by_id(&tid)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Tuit"))
}

/// POST /api/users/:uid/tuits
pub async fn create_tuit(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
    Json(tuit): Json<NewTuit>,
) -> ApiResult<Tuit> {
    let tuit = repos.tuits.create_tuit(&uid, tuit).await?;
    debug!("User {} posted tuit {}", uid, tuit.id);
    Ok(Json(tuit))
}

/// PUT /api/tuits/:tid
pub async fn update_tuit(
    State(repos): State<Repositories>,
    Path(tid): Path<String>,
    Json(tuit): Json<UpdateTuit>,
) -> ApiResult<UpdateStatus> {
    Ok(Json(repos.tuits.update_tuit(&tid, tuit).await?))
}

/// DELETE /api/tuits/:tid
pub async fn delete_tuit(
    State(repos): State<Repositories>,
    Path(tid): Path<String>,
) -> ApiResult<DeleteStatus> {
    Ok(Json(repos.tuits.delete_tuit(&tid).await?))
}
