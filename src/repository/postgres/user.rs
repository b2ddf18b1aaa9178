// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use super::rows::{UserChangeset, UserRow};
use super::PgStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{DeleteStatus, NewUser, UpdateStatus, UpdateUser, User};
use crate::repository::{new_id, UserRepository};
use crate::schema::users;

#[async_trait]
impl UserRepository for PgStore {
    async fn find_all_users(&self) -> StoreResult<Vec<User>> {
        let mut conn = self.connection().await?;

        let rows = users::table
            .select(UserRow::as_select())
            .load::<UserRow>(&mut conn)
            .await?;

        Ok(rows.into_iter().map(User::try_from).collect::<Result<_, _>>()?)
    }

    async fn find_user_by_id(&self, uid: &str) -> StoreResult<Option<User>> {
        let mut conn = self.connection().await?;

        let row = users::table
            .find(uid)
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()?;

        Ok(row.map(User::try_from).transpose()?)
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut conn = self.connection().await?;

        let row = diesel::insert_into(users::table)
            .values(UserRow::from_new(new_id(), user))
            .returning(UserRow::as_returning())
            .get_result::<UserRow>(&mut conn)
            .await?;
        debug!("Created user {} ({})", row.id, row.username);

        Ok(User::try_from(row)?)
    }

    async fn update_user(&self, uid: &str, user: UpdateUser) -> StoreResult<UpdateStatus> {
        let mut conn = self.connection().await?;

        // Lock the row and compare in memory so unchanged writes report modified 0
        conn.transaction::<_, StoreError, _>(|conn| {
            async move {
                let current = users::table
                    .find(uid)
                    .select(UserRow::as_select())
                    .for_update()
                    .get_result::<UserRow>(conn)
                    .await
                    .optional()?;
                let Some(current) = current else {
                    return Ok(UpdateStatus::new(0, 0));
                };

                let mut stored = User::try_from(current)?;
                if !user.apply_to(&mut stored) {
                    return Ok(UpdateStatus::new(1, 0));
                }

                diesel::update(users::table.find(uid))
                    .set(UserChangeset::from(user))
                    .execute(conn)
                    .await?;
                Ok(UpdateStatus::new(1, 1))
            }
            .scope_boxed()
        })
        .await
    }

    async fn delete_user(&self, uid: &str) -> StoreResult<DeleteStatus> {
        let mut conn = self.connection().await?;

        let deleted = diesel::delete(users::table.find(uid))
            .execute(&mut conn)
            .await?;

        Ok(DeleteStatus::new(deleted as u64))
    }

    async fn delete_all_users(&self) -> StoreResult<DeleteStatus> {
        let mut conn = self.connection().await?;

        let deleted = diesel::delete(users::table).execute(&mut conn).await?;
        debug!("Deleted all {} users", deleted);

        Ok(DeleteStatus::new(deleted as u64))
    }
}
