// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use super::rows::{joined_user, TuitChangeset, TuitRow, UserRow};
use super::PgStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{DeleteStatus, NewTuit, Tuit, UpdateStatus, UpdateTuit};
use crate::repository::{new_id, TuitRepository};
use crate::schema::{tuits, users};

#[async_trait]
impl TuitRepository for PgStore {
    async fn find_all_tuits(&self) -> StoreResult<Vec<Tuit>> {
        let mut conn = self.connection().await?;

        let rows = tuits::table
            .select(TuitRow::as_select())
            .order_by(tuits::posted_on.asc())
            .load::<TuitRow>(&mut conn)
            .await?;

        Ok(rows.into_iter().map(|row| row.into_tuit(None)).collect())
    }

    async fn find_tuits_by_user(&self, uid: &str) -> StoreResult<Vec<Tuit>> {
        let mut conn = self.connection().await?;

        let rows = tuits::table
            .filter(tuits::posted_by.eq(uid))
            .select(TuitRow::as_select())
            .order_by(tuits::posted_on.asc())
            .load::<TuitRow>(&mut conn)
            .await?;

        Ok(rows.into_iter().map(|row| row.into_tuit(None)).collect())
    }

    async fn find_tuit_by_id(&self, tid: &str) -> StoreResult<Option<Tuit>> {
        let mut conn = self.connection().await?;

        let row = tuits::table
            .left_join(users::table.on(users::id.eq(tuits::posted_by)))
            .filter(tuits::id.eq(tid))
            .select((TuitRow::as_select(), Option::<UserRow>::as_select()))
            .first::<(TuitRow, Option<UserRow>)>(&mut conn)
            .await
            .optional()?;

        match row {
            Some((tuit, author)) => Ok(Some(tuit.into_tuit(joined_user(author)?))),
            None => Ok(None),
        }
    }

    async fn create_tuit(&self, uid: &str, tuit: NewTuit) -> StoreResult<Tuit> {
        let mut conn = self.connection().await?;

        let row = diesel::insert_into(tuits::table)
            .values(TuitRow::from_new(new_id(), uid.to_string(), tuit))
            .returning(TuitRow::as_returning())
            .get_result::<TuitRow>(&mut conn)
            .await?;

        Ok(row.into_tuit(None))
    }

    async fn update_tuit(&self, tid: &str, tuit: UpdateTuit) -> StoreResult<UpdateStatus> {
        let mut conn = self.connection().await?;

        conn.transaction::<_, StoreError, _>(|conn| {
            async move {
                let current = tuits::table
                    .find(tid)
                    .select(TuitRow::as_select())
                    .for_update()
                    .get_result::<TuitRow>(conn)
                    .await
                    .optional()?;
                let Some(current) = current else {
                    return Ok(UpdateStatus::new(0, 0));
                };

                let mut stored = current.into_tuit(None);
                if !tuit.apply_to(&mut stored) {
                    return Ok(UpdateStatus::new(1, 0));
                }

                diesel::update(tuits::table.find(tid))
                    .set(TuitChangeset::from(tuit))
                    .execute(conn)
                    .await?;
                Ok(UpdateStatus::new(1, 1))
            }
            .scope_boxed()
        })
        .await
    }

    async fn delete_tuit(&self, tid: &str) -> StoreResult<DeleteStatus> {
        let mut conn = self.connection().await?;

        let deleted = diesel::delete(tuits::table.find(tid))
            .execute(&mut conn)
            .await?;

        Ok(DeleteStatus::new(deleted as u64))
    }
}
