// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::rows::{joined_user, LikeRow, TuitRow, UserRow};
use super::PgStore;
use crate::error::StoreResult;
use crate::models::{DeleteStatus, Like};
use crate::repository::{new_id, LikeRepository};
use crate::schema::{likes, tuits, users};

#[async_trait]
impl LikeRepository for PgStore {
    async fn find_users_that_liked_tuit(&self, tid: &str) -> StoreResult<Vec<Like>> {
        let mut conn = self.connection().await?;

        let rows = likes::table
            .left_join(users::table.on(users::id.eq(likes::liked_by)))
            .filter(likes::tuit.eq(tid))
            .select((LikeRow::as_select(), Option::<UserRow>::as_select()))
            .load::<(LikeRow, Option<UserRow>)>(&mut conn)
            .await?;

        rows.into_iter()
            .map(|(like, user)| -> StoreResult<Like> {
                Ok(like.into_like(None, joined_user(user)?))
            })
            .collect()
    }

    async fn find_tuits_liked_by_user(&self, uid: &str) -> StoreResult<Vec<Like>> {
        let mut conn = self.connection().await?;

        let rows = likes::table
            .left_join(tuits::table.on(tuits::id.eq(likes::tuit)))
            .filter(likes::liked_by.eq(uid))
            .select((LikeRow::as_select(), Option::<TuitRow>::as_select()))
            .load::<(LikeRow, Option<TuitRow>)>(&mut conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(like, tuit)| like.into_like(tuit.map(|row| row.into_tuit(None)), None))
            .collect())
    }

    async fn find_user_likes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Option<Like>> {
        let mut conn = self.connection().await?;

        let row = likes::table
            .filter(likes::liked_by.eq(uid))
            .filter(likes::tuit.eq(tid))
            .select(LikeRow::as_select())
            .first::<LikeRow>(&mut conn)
            .await
            .optional()?;

        Ok(row.map(|like| like.into_like(None, None)))
    }

    async fn count_likes(&self, tid: &str) -> StoreResult<u64> {
        let mut conn = self.connection().await?;

        let count = likes::table
            .filter(likes::tuit.eq(tid))
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        Ok(count as u64)
    }

    async fn user_likes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Like> {
        let mut conn = self.connection().await?;

        let row = diesel::insert_into(likes::table)
            .values(LikeRow {
                id: new_id(),
                tuit: tid.to_string(),
                liked_by: uid.to_string(),
            })
            .returning(LikeRow::as_returning())
            .get_result::<LikeRow>(&mut conn)
            .await?;

        Ok(row.into_like(None, None))
    }

    async fn user_unlikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<DeleteStatus> {
        let mut conn = self.connection().await?;

        let deleted = diesel::delete(
            likes::table
                .filter(likes::liked_by.eq(uid))
                .filter(likes::tuit.eq(tid)),
        )
        .execute(&mut conn)
        .await?;

        Ok(DeleteStatus::new(deleted as u64))
    }
}
