// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

//! Repository contracts, one per entity.
//!
//! Every operation issues its query against the backing store and hands the
//! store's answer back untouched: absence is `None` or an empty list, writes
//! report an [`UpdateStatus`] or [`DeleteStatus`], and storage failures come
//! back as [`StoreError`](crate::error::StoreError). Edge creation never
//! checks for an existing edge, and edge deletion removes every edge that
//! matches both references.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::StoreResult;
use crate::models::{
    Bookmark, DeleteStatus, Dislike, Follow, Like, Message, NewMessage, NewTuit, NewUser, Tuit,
    UpdateStatus, UpdateTuit, UpdateUser, User,
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Generate a fresh record identifier
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all_users(&self) -> StoreResult<Vec<User>>;
    async fn find_user_by_id(&self, uid: &str) -> StoreResult<Option<User>>;
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;
    async fn update_user(&self, uid: &str, user: UpdateUser) -> StoreResult<UpdateStatus>;
    async fn delete_user(&self, uid: &str) -> StoreResult<DeleteStatus>;
    async fn delete_all_users(&self) -> StoreResult<DeleteStatus>;
}

#[async_trait]
pub trait TuitRepository: Send + Sync {
    async fn find_all_tuits(&self) -> StoreResult<Vec<Tuit>>;
    async fn find_tuits_by_user(&self, uid: &str) -> StoreResult<Vec<Tuit>>;
    /// Looks up a tuit with its author resolved
    async fn find_tuit_by_id(&self, tid: &str) -> StoreResult<Option<Tuit>>;
    async fn create_tuit(&self, uid: &str, tuit: NewTuit) -> StoreResult<Tuit>;
    async fn update_tuit(&self, tid: &str, tuit: UpdateTuit) -> StoreResult<UpdateStatus>;
    async fn delete_tuit(&self, tid: &str) -> StoreResult<DeleteStatus>;
}

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Likes on a tuit, each with the liking user resolved
    async fn find_users_that_liked_tuit(&self, tid: &str) -> StoreResult<Vec<Like>>;
    /// Likes by a user, each with the liked tuit resolved
    async fn find_tuits_liked_by_user(&self, uid: &str) -> StoreResult<Vec<Like>>;
    async fn find_user_likes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Option<Like>>;
    async fn count_likes(&self, tid: &str) -> StoreResult<u64>;
    async fn user_likes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Like>;
    async fn user_unlikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<DeleteStatus>;
}

#[async_trait]
pub trait DislikeRepository: Send + Sync {
    async fn find_users_that_disliked_tuit(&self, tid: &str) -> StoreResult<Vec<Dislike>>;
    /// Dislikes by a user, each with the tuit and the tuit's author resolved
    async fn find_tuits_disliked_by_user(&self, uid: &str) -> StoreResult<Vec<Dislike>>;
    async fn find_user_dislikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Option<Dislike>>;
    async fn count_dislikes(&self, tid: &str) -> StoreResult<u64>;
    async fn user_dislikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Dislike>;
    async fn user_undislikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<DeleteStatus>;
}

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Users that `uid` follows, resolved on `user_followed`
    async fn find_following(&self, uid: &str) -> StoreResult<Vec<Follow>>;
    /// Users following `uid`, resolved on `user_following`
    async fn find_followers(&self, uid: &str) -> StoreResult<Vec<Follow>>;
    async fn user_follows_user(&self, uid: &str, fid: &str) -> StoreResult<Follow>;
    async fn user_unfollows_user(&self, uid: &str, fid: &str) -> StoreResult<DeleteStatus>;
}

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    async fn find_bookmarks(&self, uid: &str) -> StoreResult<Vec<Bookmark>>;
    async fn user_bookmarks_tuit(&self, uid: &str, tid: &str) -> StoreResult<Bookmark>;
    async fn user_unbookmarks_tuit(&self, uid: &str, tid: &str) -> StoreResult<DeleteStatus>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn find_messages_sent(&self, uid: &str) -> StoreResult<Vec<Message>>;
    async fn find_messages_received(&self, uid: &str) -> StoreResult<Vec<Message>>;
    async fn send_message(&self, uid: &str, rid: &str, message: NewMessage) -> StoreResult<Message>;
    /// Deletes message `mid` only if `uid` sent it; otherwise nothing is removed
    async fn delete_message(&self, mid: &str, uid: &str) -> StoreResult<DeleteStatus>;
}

/// Store health check behind `/health`
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> StoreResult<()>;
}

/// The full set of repositories, constructed once at startup and shared by
/// every request
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub tuits: Arc<dyn TuitRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub dislikes: Arc<dyn DislikeRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub bookmarks: Arc<dyn BookmarkRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub health: Arc<dyn HealthCheck>,
}

impl Repositories {
    /// Use a single store for every entity
    pub fn from_store<S>(store: S) -> Self
    where
        S: UserRepository
            + TuitRepository
            + LikeRepository
            + DislikeRepository
            + FollowRepository
            + BookmarkRepository
            + MessageRepository
            + HealthCheck
            + 'static,
    {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            tuits: store.clone(),
            likes: store.clone(),
            dislikes: store.clone(),
            follows: store.clone(),
            bookmarks: store.clone(),
            messages: store.clone(),
            health: store,
        }
    }
}
