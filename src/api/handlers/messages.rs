// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::api::error::ApiResult;
use crate::models::{DeleteStatus, Message, NewMessage};
use crate::repository::Repositories;

/// Messages sent by a user
pub async fn find_messages_sent(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Message>> {
    Ok(Json(repos.messages.find_messages_sent(&uid).await?))
}

/// Messages received by a user
pub async fn find_messages_received(
    State(repos): State<Repositories>,
    Path(uid): Path<String>,
) -> ApiResult<Vec<Message>> {
    Ok(Json(repos.messages.find_messages_received(&uid).await?))
}

/// POST /api/users/:uid/message/:rid
pub async fn send_message(
    State(repos): State<Repositories>,
    Path((uid, rid)): Path<(String, String)>,
    Json(message): Json<NewMessage>,
) -> ApiResult<Message> {
    let message = repos.messages.send_message(&uid, &rid, message).await?;
    debug!("User {} sent message {} to {}", uid, message.id, rid);
    Ok(Json(message))
}

/// DELETE /api/users/:uid/message/:mid, a no-op unless `uid` sent the message
pub async fn delete_message(
    State(repos): State<Repositories>,
    Path((uid, mid)): Path<(String, String)>,
) -> ApiResult<DeleteStatus> {
    Ok(Json(repos.messages.delete_message(&mid, &uid).await?))
}
