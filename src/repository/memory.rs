// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

//! In-process store. Collections are kept in insertion order and references
//! are resolved by looking the id up in the referenced collection.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{
    new_id, BookmarkRepository, DislikeRepository, FollowRepository, HealthCheck, LikeRepository,
    MessageRepository, TuitRepository, UserRepository,
};
use crate::error::StoreResult;
use crate::models::{
    Bookmark, DeleteStatus, Dislike, Follow, Like, Message, NewMessage, NewTuit, NewUser,
    Reference, Tuit, UpdateStatus, UpdateTuit, UpdateUser, User,
};

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    tuits: Vec<Tuit>,
    likes: Vec<Like>,
    dislikes: Vec<Dislike>,
    follows: Vec<Follow>,
    bookmarks: Vec<Bookmark>,
    messages: Vec<Message>,
}

impl Collections {
    fn user(&self, uid: &str) -> Option<User> {
        self.users.iter().find(|user| user.id == uid).cloned()
    }

    fn tuit(&self, tid: &str) -> Option<Tuit> {
        self.tuits.iter().find(|tuit| tuit.id == tid).cloned()
    }

    fn resolve_user(&self, reference: &Reference<User>) -> Reference<User> {
        let id = reference.id();
        Reference::resolve(id, self.user(id))
    }

    fn resolve_tuit(&self, reference: &Reference<Tuit>) -> Reference<Tuit> {
        let id = reference.id();
        Reference::resolve(id, self.tuit(id))
    }

    /// Resolve a tuit and, one level further, its author
    fn resolve_tuit_with_author(&self, reference: &Reference<Tuit>) -> Reference<Tuit> {
        let id = reference.id();
        let tuit = self.tuit(id).map(|mut tuit| {
            tuit.posted_by = self.resolve_user(&tuit.posted_by);
            tuit
        });
        Reference::resolve(id, tuit)
    }
}

/// Removes every element matching `predicate`, returning how many went
fn remove_where<T>(items: &mut Vec<T>, predicate: impl Fn(&T) -> bool) -> u64 {
    let before = items.len();
    items.retain(|item| !predicate(item));
    (before - items.len()) as u64
}

/// Store backed by process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_all_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.collections.read().await.users.clone())
    }

    async fn find_user_by_id(&self, uid: &str) -> StoreResult<Option<User>> {
        Ok(self.collections.read().await.user(uid))
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let user = user.into_user(new_id());
        debug!("Creating user {} ({})", user.id, user.username);
        self.collections.write().await.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, uid: &str, user: UpdateUser) -> StoreResult<UpdateStatus> {
        let mut collections = self.collections.write().await;
        let status = match collections.users.iter_mut().find(|stored| stored.id == uid) {
            Some(stored) => UpdateStatus::new(1, u64::from(user.apply_to(stored))),
            None => UpdateStatus::new(0, 0),
        };
        Ok(status)
    }

    async fn delete_user(&self, uid: &str) -> StoreResult<DeleteStatus> {
        let mut collections = self.collections.write().await;
        let deleted = remove_where(&mut collections.users, |user| user.id == uid);
        Ok(DeleteStatus::new(deleted))
    }

    async fn delete_all_users(&self) -> StoreResult<DeleteStatus> {
        let mut collections = self.collections.write().await;
        let deleted = collections.users.len() as u64;
        collections.users.clear();
        Ok(DeleteStatus::new(deleted))
    }
}

#[async_trait]
impl TuitRepository for MemoryStore {
    async fn find_all_tuits(&self) -> StoreResult<Vec<Tuit>> {
        Ok(self.collections.read().await.tuits.clone())
    }

    async fn find_tuits_by_user(&self, uid: &str) -> StoreResult<Vec<Tuit>> {
        let collections = self.collections.read().await;
        Ok(collections
            .tuits
            .iter()
            .filter(|tuit| tuit.posted_by.id() == uid)
            .cloned()
            .collect())
    }

    async fn find_tuit_by_id(&self, tid: &str) -> StoreResult<Option<Tuit>> {
        let collections = self.collections.read().await;
        Ok(collections.tuit(tid).map(|mut tuit| {
            tuit.posted_by = collections.resolve_user(&tuit.posted_by);
            tuit
        }))
    }

    async fn create_tuit(&self, uid: &str, tuit: NewTuit) -> StoreResult<Tuit> {
        let tuit = tuit.into_tuit(new_id(), uid.to_string());
        self.collections.write().await.tuits.push(tuit.clone());
        Ok(tuit)
    }

    async fn update_tuit(&self, tid: &str, tuit: UpdateTuit) -> StoreResult<UpdateStatus> {
        let mut collections = self.collections.write().await;
        let status = match collections.tuits.iter_mut().find(|stored| stored.id == tid) {
            Some(stored) => UpdateStatus::new(1, u64::from(tuit.apply_to(stored))),
            None => UpdateStatus::new(0, 0),
        };
        Ok(status)
    }

    async fn delete_tuit(&self, tid: &str) -> StoreResult<DeleteStatus> {
        let mut collections = self.collections.write().await;
        let deleted = remove_where(&mut collections.tuits, |tuit| tuit.id == tid);
        Ok(DeleteStatus::new(deleted))
    }
}

#[async_trait]
impl LikeRepository for MemoryStore {
    async fn find_users_that_liked_tuit(&self, tid: &str) -> StoreResult<Vec<Like>> {
        let collections = self.collections.read().await;
        Ok(collections
            .likes
            .iter()
            .filter(|like| like.tuit.id() == tid)
            .map(|like| Like {
                liked_by: collections.resolve_user(&like.liked_by),
                ..like.clone()
            })
            .collect())
    }

    async fn find_tuits_liked_by_user(&self, uid: &str) -> StoreResult<Vec<Like>> {
        let collections = self.collections.read().await;
        Ok(collections
            .likes
            .iter()
            .filter(|like| like.liked_by.id() == uid)
            .map(|like| Like {
                tuit: collections.resolve_tuit(&like.tuit),
                ..like.clone()
            })
            .collect())
    }

    async fn find_user_likes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Option<Like>> {
        let collections = self.collections.read().await;
        Ok(collections
            .likes
            .iter()
            .find(|like| like.liked_by.id() == uid && like.tuit.id() == tid)
            .cloned())
    }

    async fn count_likes(&self, tid: &str) -> StoreResult<u64> {
        let collections = self.collections.read().await;
        Ok(collections.likes.iter().filter(|like| like.tuit.id() == tid).count() as u64)
    }

    async fn user_likes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Like> {
        let like = Like::new(new_id(), uid.to_string(), tid.to_string());
        self.collections.write().await.likes.push(like.clone());
        Ok(like)
    }

    async fn user_unlikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<DeleteStatus> {
        let mut collections = self.collections.write().await;
        let deleted = remove_where(&mut collections.likes, |like| {
            like.liked_by.id() == uid && like.tuit.id() == tid
        });
        Ok(DeleteStatus::new(deleted))
    }
}

#[async_trait]
impl DislikeRepository for MemoryStore {
    async fn find_users_that_disliked_tuit(&self, tid: &str) -> StoreResult<Vec<Dislike>> {
        let collections = self.collections.read().await;
        Ok(collections
            .dislikes
            .iter()
            .filter(|dislike| dislike.tuit.id() == tid)
            .map(|dislike| Dislike {
                disliked_by: collections.resolve_user(&dislike.disliked_by),
                ..dislike.clone()
            })
            .collect())
    }

    async fn find_tuits_disliked_by_user(&self, uid: &str) -> StoreResult<Vec<Dislike>> {
        let collections = self.collections.read().await;
        Ok(collections
            .dislikes
            .iter()
            .filter(|dislike| dislike.disliked_by.id() == uid)
            .map(|dislike| Dislike {
                tuit: collections.resolve_tuit_with_author(&dislike.tuit),
                ..dislike.clone()
            })
            .collect())
    }

    async fn find_user_dislikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Option<Dislike>> {
        let collections = self.collections.read().await;
        Ok(collections
            .dislikes
            .iter()
            .find(|dislike| dislike.disliked_by.id() == uid && dislike.tuit.id() == tid)
            .cloned())
    }

    async fn count_dislikes(&self, tid: &str) -> StoreResult<u64> {
        let collections = self.collections.read().await;
        Ok(collections
            .dislikes
            .iter()
            .filter(|dislike| dislike.tuit.id() == tid)
            .count() as u64)
    }

    async fn user_dislikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<Dislike> {
        let dislike = Dislike::new(new_id(), uid.to_string(), tid.to_string());
        self.collections.write().await.dislikes.push(dislike.clone());
        Ok(dislike)
    }

    async fn user_undislikes_tuit(&self, uid: &str, tid: &str) -> StoreResult<DeleteStatus> {
        let mut collections = self.collections.write().await;
        let deleted = remove_where(&mut collections.dislikes, |dislike| {
            dislike.disliked_by.id() == uid && dislike.tuit.id() == tid
        });
        Ok(DeleteStatus::new(deleted))
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn find_following(&self, uid: &str) -> StoreResult<Vec<Follow>> {
        let collections = self.collections.read().await;
        Ok(collections
            .follows
            .iter()
            .filter(|follow| follow.user_following.id() == uid)
            .map(|follow| Follow {
                user_followed: collections.resolve_user(&follow.user_followed),
                ..follow.clone()
            })
            .collect())
    }

    async fn find_followers(&self, uid: &str) -> StoreResult<Vec<Follow>> {
        let collections = self.collections.read().await;
        Ok(collections
            .follows
            .iter()
            .filter(|follow| follow.user_followed.id() == uid)
            .map(|follow| Follow {
                user_following: collections.resolve_user(&follow.user_following),
                ..follow.clone()
            })
            .collect())
    }

    async fn user_follows_user(&self, uid: &str, fid: &str) -> StoreResult<Follow> {
        let follow = Follow::new(new_id(), uid.to_string(), fid.to_string());
        self.collections.write().await.follows.push(follow.clone());
        Ok(follow)
    }

    async fn user_unfollows_user(&self, uid: &str, fid: &str) -> StoreResult<DeleteStatus> {
        let mut collections = self.collections.write().await;
        let deleted = remove_where(&mut collections.follows, |follow| {
            follow.user_following.id() == uid && follow.user_followed.id() == fid
        });
        Ok(DeleteStatus::new(deleted))
    }
}

#[async_trait]
impl BookmarkRepository for MemoryStore {
    async fn find_bookmarks(&self, uid: &str) -> StoreResult<Vec<Bookmark>> {
        let collections = self.collections.read().await;
        Ok(collections
            .bookmarks
            .iter()
            .filter(|bookmark| bookmark.bookmarked_by.id() == uid)
            .map(|bookmark| Bookmark {
                bookmarked_tuit: collections.resolve_tuit(&bookmark.bookmarked_tuit),
                ..bookmark.clone()
            })
            .collect())
    }

    async fn user_bookmarks_tuit(&self, uid: &str, tid: &str) -> StoreResult<Bookmark> {
        let bookmark = Bookmark::new(new_id(), uid.to_string(), tid.to_string());
        self.collections.write().await.bookmarks.push(bookmark.clone());
        Ok(bookmark)
    }

    async fn user_unbookmarks_tuit(&self, uid: &str, tid: &str) -> StoreResult<DeleteStatus> {
        let mut collections = self.collections.write().await;
        let deleted = remove_where(&mut collections.bookmarks, |bookmark| {
            bookmark.bookmarked_by.id() == uid && bookmark.bookmarked_tuit.id() == tid
        });
        Ok(DeleteStatus::new(deleted))
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn find_messages_sent(&self, uid: &str) -> StoreResult<Vec<Message>> {
        let collections = self.collections.read().await;
        Ok(collections
            .messages
            .iter()
            .filter(|message| message.from.id() == uid)
            .cloned()
            .collect())
    }

    async fn find_messages_received(&self, uid: &str) -> StoreResult<Vec<Message>> {
        let collections = self.collections.read().await;
        Ok(collections
            .messages
            .iter()
            .filter(|message| message.to.id() == uid)
            .cloned()
            .collect())
    }

    async fn send_message(&self, uid: &str, rid: &str, message: NewMessage) -> StoreResult<Message> {
        let message = message.into_message(new_id(), uid.to_string(), rid.to_string());
        self.collections.write().await.messages.push(message.clone());
        Ok(message)
    }

    async fn delete_message(&self, mid: &str, uid: &str) -> StoreResult<DeleteStatus> {
        let mut collections = self.collections.write().await;
        let deleted = remove_where(&mut collections.messages, |message| {
            message.id == mid && message.from.id() == uid
        });
        Ok(DeleteStatus::new(deleted))
    }
}
