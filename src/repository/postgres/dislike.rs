// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::rows::{joined_user, DislikeRow, TuitRow, UserRow};
use super::PgStore;
use crate::error::StoreResult;
use crate::models::{DeleteStatus, Dislike};
use crate::repository::{new_id, DislikeRepository};
use crate::schema::{dislikes, tuits, users};

#[async_trait]
impl DislikeRepository for PgStore {
    async fn find_users_that_disliked_tuit(&self, tid: &str) -> StoreResult<Vec<Dislike>> {
        let mut conn = self.connection().await?;

        let rows = dislikes::table
            .left_join(users::table.on(users::id.eq(dislikes::disliked_by)))
            .filter(dislikes::tuit.eq(tid))
            .select((DislikeRow::as_select(), Option::<UserRow>::as_select()))
            .load::<(DislikeRow, Option<UserRow>)>(&mut conn)
            .await?;

        rows.into_iter()
            .map(|(dislike, user)| -> StoreResult<Dislike> {
                Ok(dislike.into_dislike(None, joined_user(user)?))
            })
            .collect()
    }

    async fn find_tuits_disliked_by_user(&self, uid: &str) -> StoreResult<Vec<Dislike>> {
        let mut conn = self.connection().await?;

        // Two levels: the disliked tuit and that tuit's author
        let rows = dislikes::table
            .left_join(tuits::table.on(tuits::id.eq(dislikes::tuit)))
            .left_join(users::table.on(users::id.eq(tuits::posted_by)))
            .filter(dislikes::disliked_by.eq(uid))
            .select((
                DislikeRow::as_select(),
                Option::<TuitRow>::as_select(),
                Option::<UserRow>::as_select(),
            ))
            .load::<(DislikeRow, Option<TuitRow>, Option<UserRow>)>(&mut conn)
            .await?;

        rows.into_iter()
            .map(|(dislike, tuit, author)| -> StoreResult<Dislike> {
                let author = joined_user(author)?;
                let tuit = tuit.map(|row| row.into_tuit(author));
                Ok(dislike.into_dislike(tuit, None))
            })
            .collect()
    }

    async fn find_user_dislikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Option<Dislike>> {
        let mut conn = self.connection().await?;

        let row = dislikes::table
            .filter(dislikes::disliked_by.eq(uid))
            .filter(dislikes::tuit.eq(tid))
            .select(DislikeRow::as_select())
            .first::<DislikeRow>(&mut conn)
            .await
            .optional()?;

        Ok(row.map(|dislike| dislike.into_dislike(None, None)))
    }

    async fn count_dislikes(&self, tid: &str) -> StoreResult<u64> {
        let mut conn = self.connection().await?;

        let count = dislikes::table
            .filter(dislikes::tuit.eq(tid))
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        Ok(count as u64)
    }

    async fn user_dislikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Dislike> {
        let mut conn = self.connection().await?;

        let row = diesel::insert_into(dislikes::table)
            .values(DislikeRow {
                id: new_id(),
                tuit: tid.to_string(),
                disliked_by: uid.to_string(),
            })
            .returning(DislikeRow::as_returning())
            .get_result::<DislikeRow>(&mut conn)
            .await?;

        Ok(row.into_dislike(None, None))
    }

    async fn user_undislikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<DeleteStatus> {
        let mut conn = self.connection().await?;

        let deleted = diesel::delete(
            dislikes::table
                .filter(dislikes::disliked_by.eq(uid))
                .filter(dislikes::tuit.eq(tid)),
        )
        .execute(&mut conn)
        .await?;

        Ok(DeleteStatus::new(deleted as u64))
    }
}
