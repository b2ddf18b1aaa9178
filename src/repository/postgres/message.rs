// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::rows::MessageRow;
use super::PgStore;
use crate::error::StoreResult;
use crate::models::{DeleteStatus, Message, NewMessage};
use crate::repository::{new_id, MessageRepository};
use crate::schema::messages;

#[async_trait]
impl MessageRepository for PgStore {
    async fn find_messages_sent(&self, uid: &str) -> StoreResult<Vec<Message>> {
        let mut conn = self.connection().await?;

        let rows = messages::table
            .filter(messages::sender.eq(uid))
            .select(MessageRow::as_select())
            .order_by(messages::sent_on.asc())
            .load::<MessageRow>(&mut conn)
            .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn find_messages_received(&self, uid: &str) -> StoreResult<Vec<Message>> {
        let mut conn = self.connection().await?;

        let rows = messages::table
            .filter(messages::recipient.eq(uid))
            .select(MessageRow::as_select())
            .order_by(messages::sent_on.asc())
            .load::<MessageRow>(&mut conn)
            .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn send_message(&self, uid: &str, rid: &str, message: NewMessage) -> StoreResult<Message> {
        let mut conn = self.connection().await?;

        let row = diesel::insert_into(messages::table)
            .values(MessageRow::from_new(
                new_id(),
                uid.to_string(),
                rid.to_string(),
                message,
            ))
            .returning(MessageRow::as_returning())
            .get_result::<MessageRow>(&mut conn)
            .await?;

        Ok(row.into())
    }

    async fn delete_message(&self, mid: &str, uid: &str) -> StoreResult<DeleteStatus> {
        let mut conn = self.connection().await?;

        // Scoped to the sender: anyone else matches nothing
        let deleted = diesel::delete(
            messages::table
                .filter(messages::id.eq(mid))
                .filter(messages::sender.eq(uid)),
        )
        .execute(&mut conn)
        .await?;

        Ok(DeleteStatus::new(deleted as u64))
    }
}
