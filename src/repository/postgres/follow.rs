// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use super::rows::{joined_user, FollowRow, UserRow};
use super::PgStore;
use crate::error::StoreResult;
use crate::models::{DeleteStatus, Follow};
use crate::repository::{new_id, FollowRepository};
use crate::schema::{follows, users};

#[async_trait]
impl FollowRepository for PgStore {
    async fn find_following(&self, uid: &str) -> StoreResult<Vec<Follow>> {
        let mut conn = self.connection().await?;

        let rows = follows::table
            .left_join(users::table.on(users::id.eq(follows::user_followed)))
            .filter(follows::user_following.eq(uid))
            .select((FollowRow::as_select(), Option::<UserRow>::as_select()))
            .load::<(FollowRow, Option<UserRow>)>(&mut conn)
            .await?;

        rows.into_iter()
            .map(|(follow, followed)| -> StoreResult<Follow> {
                Ok(follow.into_follow(joined_user(followed)?, None))
            })
            .collect()
    }

    async fn find_followers(&self, uid: &str) -> StoreResult<Vec<Follow>> {
        let mut conn = self.connection().await?;

        let rows = follows::table
            .left_join(users::table.on(users::id.eq(follows::user_following)))
            .filter(follows::user_followed.eq(uid))
            .select((FollowRow::as_select(), Option::<UserRow>::as_select()))
            .load::<(FollowRow, Option<UserRow>)>(&mut conn)
            .await?;

        rows.into_iter()
            .map(|(follow, following)| -> StoreResult<Follow> {
                Ok(follow.into_follow(None, joined_user(following)?))
            })
            .collect()
    }

    async fn user_follows_user(&self, uid: &str, fid: &str) -> StoreResult<Follow> {
        let mut conn = self.connection().await?;

        let row = diesel::insert_into(follows::table)
            .values(FollowRow {
                id: new_id(),
                user_followed: fid.to_string(),
                user_following: uid.to_string(),
            })
            .returning(FollowRow::as_returning())
            .get_result::<FollowRow>(&mut conn)
            .await?;
        debug!("User {} now follows {}", uid, fid);

        Ok(row.into_follow(None, None))
    }

    async fn user_unfollows_user(&self, uid: &str, fid: &str) -> StoreResult<DeleteStatus> {
        let mut conn = self.connection().await?;

        let deleted = diesel::delete(
            follows::table
                .filter(follows::user_following.eq(uid))
                .filter(follows::user_followed.eq(fid)),
        )
        .execute(&mut conn)
        .await?;

        Ok(DeleteStatus::new(deleted as u64))
    }
}
