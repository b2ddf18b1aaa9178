// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::rows::{BookmarkRow, TuitRow};
use super::PgStore;
use crate::error::StoreResult;
use crate::models::{Bookmark, DeleteStatus};
use crate::repository::{new_id, BookmarkRepository};
use crate::schema::{bookmarks, tuits};

#[async_trait]
impl BookmarkRepository for PgStore {
    async fn find_bookmarks(&self, uid: &str) -> StoreResult<Vec<Bookmark>> {
        let mut conn = self.connection().await?;

        let rows = bookmarks::table
            .left_join(tuits::table.on(tuits::id.eq(bookmarks::bookmarked_tuit)))
            .filter(bookmarks::bookmarked_by.eq(uid))
            .select((BookmarkRow::as_select(), Option::<TuitRow>::as_select()))
            .load::<(BookmarkRow, Option<TuitRow>)>(&mut conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(bookmark, tuit)| bookmark.into_bookmark(tuit.map(|row| row.into_tuit(None))))
            .collect())
    }

    async fn user_bookmarks_tuit(&self, uid: &str, tid: &str) -> StoreResult<Bookmark> {
        let mut conn = self.connection().await?;

        let row = diesel::insert_into(bookmarks::table)
            .values(BookmarkRow {
                id: new_id(),
                bookmarked_tuit: tid.to_string(),
                bookmarked_by: uid.to_string(),
            })
            .returning(BookmarkRow::as_returning())
            .get_result::<BookmarkRow>(&mut conn)
            .await?;

        Ok(row.into_bookmark(None))
    }

    async fn user_unbookmarks_tuit(&self, uid: &str, tid: &str) -> StoreResult<DeleteStatus> {
        let mut conn = self.connection().await?;

        let deleted = diesel::delete(
            bookmarks::table
                .filter(bookmarks::bookmarked_by.eq(uid))
                .filter(bookmarks::bookmarked_tuit.eq(tid)),
        )
        .execute(&mut conn)
        .await?;

        Ok(DeleteStatus::new(deleted as u64))
    }
}
