// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::error::ApiResult;
use crate::models::{Bookmark, DeleteStatus};
use crate::repository::Repositories;

pub async fn find_bookmarks(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Bookmark>> {
    Ok(Json(repos.bookmarks.find_bookmarks(&uid).await?))
}

pub async fn user_bookmarks_tuit(
    State(repos): State<Repositories>,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<Bookmark> {
    Ok(Json(repos.bookmarks.user_bookmarks_tuit(&uid, &tid).await?))
}

pub async fn user_unbookmarks_tuit(
    State(repos): State<Repositories>,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<DeleteStatus> {
    Ok(Json(repos.bookmarks.user_unbookmarks_tuit(&uid, &tid).await?))
}
