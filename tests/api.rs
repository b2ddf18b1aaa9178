// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tracing_test::traced_test;

use tuiter::api::{router, AppState};
use tuiter::repository::{MemoryStore, Repositories};

fn app() -> Router {
    let repos = Repositories::from_store(MemoryStore::new());
    router(AppState::new(repos).unwrap(), false)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn create_user(app: &Router, username: &str) -> String {
    let (status, user) = send(
        app,
        Method::POST,
        "/api/users",
        Some(json!({
            "username": username,
            "password": format!("{username}123"),
            "email": format!("{username}@tuiter.com"),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    user["id"].as_str().unwrap().to_string()
}

async fn create_tuit(app: &Router, uid: &str, text: &str) -> String {
    let (status, tuit) = send(
        app,
        Method::POST,
        &format!("/api/users/{uid}/tuits"),
        Some(json!({ "tuit": text })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    tuit["id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[traced_test]
async fn like_scenario_resolves_both_sides() {
    let app = app();
    let alice = create_user(&app, "alice").await;
    let bob = create_user(&app, "bob").await;
    let tid = create_tuit(&app, &alice, "hello").await;

    let (status, like) = send(&app, Method::POST, &format!("/api/users/{bob}/likes/{tid}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(like["tuit"], json!(tid));
    assert_eq!(like["likedBy"], json!(bob));

    let (_, likes) = send(&app, Method::GET, &format!("/api/tuits/{tid}/likes"), None).await;
    let likes = likes.as_array().unwrap();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0]["likedBy"]["username"], "bob");
    assert_eq!(likes[0]["tuit"], json!(tid));

    let (_, liked) = send(&app, Method::GET, &format!("/api/users/{bob}/likes"), None).await;
    let liked = liked.as_array().unwrap();
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0]["tuit"]["tuit"], "hello");
    // Likes resolve the tuit only; its author stays a bare id
    assert_eq!(liked[0]["tuit"]["postedBy"], json!(alice));

    let (_, count) = send(&app, Method::GET, &format!("/api/tuits/{tid}/likes/count"), None).await;
    assert_eq!(count, json!({ "count": 1 }));

    let (status, found) = send(&app, Method::GET, &format!("/api/users/{bob}/likes/{tid}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"], like["id"]);

    let (status, _) = send(&app, Method::GET, &format!("/api/users/{alice}/likes/{tid}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_likes_are_kept_and_removed_together() {
    let app = app();
    let uid = create_user(&app, "carol").await;
    let tid = create_tuit(&app, &uid, "twice").await;

    for _ in 0..2 {
        let (status, _) = send(&app, Method::POST, &format!("/api/users/{uid}/likes/{tid}"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, likes) = send(&app, Method::GET, &format!("/api/tuits/{tid}/likes"), None).await;
    assert_eq!(likes.as_array().unwrap().len(), 2);

    let (_, status) = send(&app, Method::DELETE, &format!("/api/users/{uid}/unlikes/{tid}"), None).await;
    assert_eq!(status, json!({ "acknowledged": true, "deletedCount": 2 }));

    let (_, likes) = send(&app, Method::GET, &format!("/api/tuits/{tid}/likes"), None).await;
    assert_eq!(likes, json!([]));
}

#[tokio::test]
async fn dislikes_mirror_likes() {
    let app = app();
    let uid = create_user(&app, "dave").await;
    let tid = create_tuit(&app, &uid, "meh").await;

    let (status, _) = send(&app, Method::POST, &format!("/api/users/{uid}/dislikes/{tid}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, count) = send(&app, Method::GET, &format!("/api/tuits/{tid}/dislikes/count"), None).await;
    assert_eq!(count["count"], 1);

    let (_, disliked) = send(&app, Method::GET, &format!("/api/users/{uid}/dislikes"), None).await;
    assert_eq!(disliked[0]["tuit"]["postedBy"]["username"], "dave");

    let (_, status) = send(&app, Method::DELETE, &format!("/api/users/{uid}/undislikes/{tid}"), None).await;
    assert_eq!(status["deletedCount"], 1);

    let (status, _) = send(&app, Method::GET, &format!("/api/users/{uid}/dislikes/{tid}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn following_lists_resolve_the_other_user() {
    let app = app();
    let alice = create_user(&app, "alice").await;
    let bob = create_user(&app, "bob").await;

    // alice follows bob, twice
    for _ in 0..2 {
        let (status, follow) =
            send(&app, Method::POST, &format!("/api/users/{alice}/follows/{bob}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(follow["userFollowing"], json!(alice));
        assert_eq!(follow["userFollowed"], json!(bob));
    }

    let (_, following) = send(&app, Method::GET, &format!("/api/users/{alice}/following"), None).await;
    let following = following.as_array().unwrap();
    assert_eq!(following.len(), 2);
    assert_eq!(following[0]["userFollowed"]["username"], "bob");
    assert_eq!(following[0]["userFollowing"], json!(alice));

    let (_, followers) = send(&app, Method::GET, &format!("/api/users/{bob}/followers"), None).await;
    assert_eq!(followers[0]["userFollowing"]["username"], "alice");

    let (_, status) = send(&app, Method::DELETE, &format!("/api/users/{alice}/unfollows/{bob}"), None).await;
    assert_eq!(status["deletedCount"], 2);

    let (_, following) = send(&app, Method::GET, &format!("/api/users/{alice}/following"), None).await;
    assert_eq!(following, json!([]));
}

#[tokio::test]
async fn bookmarks_resolve_the_tuit() {
    let app = app();
    let uid = create_user(&app, "erin").await;
    let tid = create_tuit(&app, &uid, "save me").await;

    let (status, _) = send(&app, Method::POST, &format!("/api/users/{uid}/bookmarks/{tid}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, bookmarks) = send(&app, Method::GET, &format!("/api/users/{uid}/bookmarks"), None).await;
    assert_eq!(bookmarks[0]["bookmarkedTuit"]["tuit"], "save me");
    assert_eq!(bookmarks[0]["bookmarkedBy"], json!(uid));

    let (_, status) = send(&app, Method::DELETE, &format!("/api/users/{uid}/unbookmarks/{tid}"), None).await;
    assert_eq!(status["deletedCount"], 1);
}

#[tokio::test]
async fn only_the_sender_can_delete_a_message() {
    let app = app();
    let alice = create_user(&app, "alice").await;
    let bob = create_user(&app, "bob").await;

    let (status, message) = send(
        &app,
        Method::POST,
        &format!("/api/users/{alice}/message/{bob}"),
        Some(json!({ "message": "hi bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message["from"], json!(alice));
    assert_eq!(message["to"], json!(bob));
    let mid = message["id"].as_str().unwrap().to_string();

    let (_, received) = send(&app, Method::GET, &format!("/api/users/{bob}/receivedmessage"), None).await;
    assert_eq!(received[0]["message"], "hi bob");

    let (_, status) = send(&app, Method::DELETE, &format!("/api/users/{bob}/message/{mid}"), None).await;
    assert_eq!(status["deletedCount"], 0);

    let (_, sent) = send(&app, Method::GET, &format!("/api/users/{alice}/sentmessage"), None).await;
    assert_eq!(sent.as_array().unwrap().len(), 1);

    let (_, status) = send(&app, Method::DELETE, &format!("/api/users/{alice}/message/{mid}"), None).await;
    assert_eq!(status["deletedCount"], 1);

    let (_, sent) = send(&app, Method::GET, &format!("/api/users/{alice}/sentmessage"), None).await;
    assert_eq!(sent, json!([]));
}

#[tokio::test]
async fn user_update_writes_only_present_fields() {
    let app = app();
    let uid = create_user(&app, "frank").await;

    let (_, status) = send(
        &app,
        Method::PUT,
        &format!("/api/users/{uid}"),
        Some(json!({ "biography": "hello there" })),
    )
    .await;
    assert_eq!(status["matchedCount"], 1);

    let (_, user) = send(&app, Method::GET, &format!("/api/users/{uid}"), None).await;
    assert_eq!(user["biography"], "hello there");
    assert_eq!(user["username"], "frank");
    assert_eq!(user["email"], "frank@tuiter.com");

    let (_, status) = send(&app, Method::PUT, "/api/users/missing", Some(json!({ "biography": "x" }))).await;
    assert_eq!(status["matchedCount"], 0);
}

#[tokio::test]
async fn user_update_with_null_clears_the_field() {
    let app = app();
    let uid = create_user(&app, "kate").await;

    let (_, status) = send(&app, Method::PUT, &format!("/api/users/{uid}"), Some(json!({ "biography": "bio" }))).await;
    assert_eq!(status["modifiedCount"], 1);

    let (_, status) = send(&app, Method::PUT, &format!("/api/users/{uid}"), Some(json!({ "biography": null }))).await;
    assert_eq!(status, json!({ "acknowledged": true, "matchedCount": 1, "modifiedCount": 1 }));

    let (_, user) = send(&app, Method::GET, &format!("/api/users/{uid}"), None).await;
    assert_eq!(user["biography"], Value::Null);
    assert_eq!(user["username"], "kate");

    // Required fields ignore null rather than clearing
    let (_, status) = send(&app, Method::PUT, &format!("/api/users/{uid}"), Some(json!({ "email": null }))).await;
    assert_eq!(status["modifiedCount"], 0);
    let (_, user) = send(&app, Method::GET, &format!("/api/users/{uid}"), None).await;
    assert_eq!(user["email"], "kate@tuiter.com");
}

#[tokio::test]
async fn tuit_lifecycle() {
    let app = app();
    let uid = create_user(&app, "gina").await;
    let tid = create_tuit(&app, &uid, "first").await;

    let (_, tuit) = send(&app, Method::GET, &format!("/api/tuits/{tid}"), None).await;
    assert_eq!(tuit["postedBy"]["username"], "gina");

    let (_, status) = send(&app, Method::PUT, &format!("/api/tuits/{tid}"), Some(json!({ "tuit": "edited" }))).await;
    assert_eq!(status["modifiedCount"], 1);

    let (_, tuits) = send(&app, Method::GET, &format!("/api/users/{uid}/tuits"), None).await;
    assert_eq!(tuits[0]["tuit"], "edited");

    let (_, status) = send(&app, Method::DELETE, &format!("/api/tuits/{tid}"), None).await;
    assert_eq!(status["deletedCount"], 1);

    let (status, body) = send(&app, Method::GET, &format!("/api/tuits/{tid}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Tuit not found");

    let (_, tuits) = send(&app, Method::GET, "/api/tuits", None).await;
    assert_eq!(tuits, json!([]));
}

#[tokio::test]
async fn deleted_user_is_not_found_and_delete_all_empties_the_list() {
    let app = app();
    let uid = create_user(&app, "hank").await;
    create_user(&app, "ivy").await;

    let (_, status) = send(&app, Method::DELETE, &format!("/api/users/{uid}"), None).await;
    assert_eq!(status["deletedCount"], 1);

    let (status, body) = send(&app, Method::GET, &format!("/api/users/{uid}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (_, status) = send(&app, Method::DELETE, "/api/users", None).await;
    assert_eq!(status["deletedCount"], 1);

    let (_, users) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn invalid_account_type_is_rejected() {
    let app = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({
            "username": "jack",
            "password": "jack123",
            "email": "jack@tuiter.com",
            "accountType": "ADMIN",
        })),
    )
    .await;
    assert!(status.is_client_error());

    let (_, users) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn health_and_metrics_are_served() {
    let app = app();

    let (status, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("route=\"/health\""));
}
