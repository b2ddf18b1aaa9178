// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

//! PostgreSQL store. References are resolved with left joins so an edge whose
//! target row is gone still comes back, carrying the bare id.

mod bookmark;
mod dislike;
mod follow;
mod like;
mod message;
mod rows;
mod tuit;
mod user;

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use super::HealthCheck;
use crate::db::{Database, DbConnection};
use crate::error::StoreResult;

/// Store backed by the PostgreSQL connection pool
#[derive(Clone)]
pub struct PgStore {
    db: Database,
}

impl PgStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get a database connection from the pool
    async fn connection(&self) -> StoreResult<DbConnection> {
        Ok(self.db.get_connection().await?)
    }
}

#[async_trait]
impl HealthCheck for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.connection().await?;
        diesel::sql_query("SELECT 1").execute(&mut conn).await?;
        Ok(())
    }
}
