// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

//! Runs the PostgreSQL store against a live database:
//! `DATABASE_URL=postgres://... cargo test --test postgres -- --ignored`

use tuiter::config::{DatabaseConfig, StoreBackend};
use tuiter::db::Database;
use tuiter::models::{NewTuit, NewUser, UpdateStatus, UpdateTuit, UpdateUser};
use tuiter::repository::{
    DislikeRepository, FollowRepository, LikeRepository, PgStore, TuitRepository, UserRepository,
};

async fn store() -> Option<PgStore> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let config = DatabaseConfig {
        backend: StoreBackend::Postgres,
        url,
        max_connections: 2,
    };
    Some(PgStore::new(Database::new(&config).await.unwrap()))
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn update_reports_modification_and_clears_nulls() {
    let Some(store) = store().await else { return };
    let user = store.create_user(NewUser::new("pg_alice", "p", "pg_alice@tuiter.com")).await.unwrap();

    let patch = UpdateUser { biography: Some(Some("bio".into())), ..Default::default() };
    assert_eq!(store.update_user(&user.id, patch.clone()).await.unwrap(), UpdateStatus::new(1, 1));
    assert_eq!(store.update_user(&user.id, patch).await.unwrap(), UpdateStatus::new(1, 0));

    let clear = UpdateUser { biography: Some(None), ..Default::default() };
    assert_eq!(store.update_user(&user.id, clear).await.unwrap(), UpdateStatus::new(1, 1));
    let loaded = store.find_user_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(loaded.biography, None);

    // No fields: matched without a SET clause
    assert_eq!(
        store.update_user(&user.id, UpdateUser::default()).await.unwrap(),
        UpdateStatus::new(1, 0)
    );
    assert_eq!(
        store.update_user("missing", UpdateUser::default()).await.unwrap(),
        UpdateStatus::new(0, 0)
    );

    store.delete_user(&user.id).await.unwrap();
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn tuit_update_compares_stored_text() {
    let Some(store) = store().await else { return };
    let user = store.create_user(NewUser::new("pg_bob", "p", "pg_bob@tuiter.com")).await.unwrap();
    let tuit = store.create_tuit(&user.id, NewTuit::new("first")).await.unwrap();

    let edit = UpdateTuit { tuit: Some("edited".into()), posted_on: None };
    assert_eq!(store.update_tuit(&tuit.id, edit.clone()).await.unwrap(), UpdateStatus::new(1, 1));
    assert_eq!(store.update_tuit(&tuit.id, edit).await.unwrap(), UpdateStatus::new(1, 0));

    store.delete_tuit(&tuit.id).await.unwrap();
    store.delete_user(&user.id).await.unwrap();
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn dislikes_resolve_tuit_and_author_while_likes_stop_at_tuit() {
    let Some(store) = store().await else { return };
    let author = store.create_user(NewUser::new("pg_carol", "p", "pg_carol@tuiter.com")).await.unwrap();
    let reader = store.create_user(NewUser::new("pg_dave", "p", "pg_dave@tuiter.com")).await.unwrap();
    let tuit = store.create_tuit(&author.id, NewTuit::new("hot take")).await.unwrap();

    store.user_dislikes_tuit(&reader.id, &tuit.id).await.unwrap();
    store.user_likes_tuit(&reader.id, &tuit.id).await.unwrap();

    let disliked = store.find_tuits_disliked_by_user(&reader.id).await.unwrap();
    assert_eq!(disliked.len(), 1);
    let resolved = disliked[0].tuit.resolved().unwrap();
    assert_eq!(resolved.posted_by.resolved().unwrap().username, "pg_carol");
    assert_eq!(store.count_dislikes(&tuit.id).await.unwrap(), 1);

    let liked = store.find_tuits_liked_by_user(&reader.id).await.unwrap();
    let resolved = liked[0].tuit.resolved().unwrap();
    assert!(!resolved.posted_by.is_resolved());

    // Deleting the tuit leaves the dislike with a bare id
    store.delete_tuit(&tuit.id).await.unwrap();
    let disliked = store.find_tuits_disliked_by_user(&reader.id).await.unwrap();
    assert_eq!(disliked[0].tuit.id(), tuit.id);
    assert!(!disliked[0].tuit.is_resolved());

    assert_eq!(store.user_undislikes_tuit(&reader.id, &tuit.id).await.unwrap().deleted_count, 1);
    store.user_unlikes_tuit(&reader.id, &tuit.id).await.unwrap();
    store.delete_user(&author.id).await.unwrap();
    store.delete_user(&reader.id).await.unwrap();
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn following_joins_the_followed_user() {
    let Some(store) = store().await else { return };
    let alice = store.create_user(NewUser::new("pg_erin", "p", "pg_erin@tuiter.com")).await.unwrap();
    let bob = store.create_user(NewUser::new("pg_frank", "p", "pg_frank@tuiter.com")).await.unwrap();

    store.user_follows_user(&alice.id, &bob.id).await.unwrap();
    store.user_follows_user(&alice.id, &bob.id).await.unwrap();

    let following = store.find_following(&alice.id).await.unwrap();
    assert_eq!(following.len(), 2);
    assert_eq!(following[0].user_followed.resolved().unwrap().username, "pg_frank");

    assert_eq!(store.user_unfollows_user(&alice.id, &bob.id).await.unwrap().deleted_count, 2);
    store.delete_user(&alice.id).await.unwrap();
    store.delete_user(&bob.id).await.unwrap();
}
