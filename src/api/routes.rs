// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{bookmarks, dislikes, follows, health, likes, messages, tuits, users};
use super::metrics::track_requests;
use super::AppState;

/// Build the route table over the shared application state
pub fn router(state: AppState, enable_cors: bool) -> Router {
    let app = Router::new()
        // General routes
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::get_metrics))

        // User routes
        .route(
            "/api/users",
            get(users::find_all_users)
                .post(users::create_user)
                .delete(users::delete_all_users),
        )
        .route(
            "/api/users/:uid",
            get(users::find_user_by_id)
                .put(users::update_user)
                .delete(users::delete_user),
        )

        // Tuit routes
        .route("/api/tuits", get(tuits::find_all_tuits))
        .route(
            "/api/tuits/:tid",
            get(tuits::find_tuit_by_id)
                .put(tuits::update_tuit)
                .delete(tuits::delete_tuit),
        )
        .route(
            "/api/users/:uid/tuits",
            get(tuits::find_tuits_by_user).post(tuits::create_tuit),
        )

        // Like routes
        .route("/api/tuits/:tid/likes", get(likes::find_users_that_liked_tuit))
        .route("/api/tuits/:tid/likes/count", get(likes::count_likes))
        .route("/api/users/:uid/likes", get(likes::find_tuits_liked_by_user))
        .route(
            "/api/users/:uid/likes/:tid",
            get(likes::find_user_likes_tuit).post(likes::user_likes_tuit),
        )
        .route("/api/users/:uid/unlikes/:tid", delete(likes::user_unlikes_tuit))

        // Dislike routes
        .route("/api/tuits/:tid/dislikes", get(dislikes::find_users_that_disliked_tuit))
        .route("/api/tuits/:tid/dislikes/count", get(dislikes::count_dislikes))
        .route("/api/users/:uid/dislikes", get(dislikes::find_tuits_disliked_by_user))
        .route(
            "/api/users/:uid/dislikes/:tid",
            get(dislikes::find_user_dislikes_tuit).post(dislikes::user_dislikes_tuit),
        )
        .route("/api/users/:uid/undislikes/:tid", delete(dislikes::user_undislikes_tuit))

        // Follow routes
        .route("/api/users/:uid/following", get(follows::find_following))
        .route("/api/users/:uid/followers", get(follows::find_followers))
        .route("/api/users/:uid/follows/:fid", post(follows::user_follows_user))
        .route("/api/users/:uid/unfollows/:fid", delete(follows::user_unfollows_user))

        // Bookmark routes
        .route("/api/users/:uid/bookmarks", get(bookmarks::find_bookmarks))
        .route("/api/users/:uid/bookmarks/:tid", post(bookmarks::user_bookmarks_tuit))
        .route("/api/users/:uid/unbookmarks/:tid", delete(bookmarks::user_unbookmarks_tuit))

        // Message routes; the second segment is the recipient on POST and the message on DELETE
        .route("/api/users/:uid/sentmessage", get(messages::find_messages_sent))
        .route("/api/users/:uid/receivedmessage", get(messages::find_messages_received))
        .route(
            "/api/users/:uid/message/:id",
            post(messages::send_message).delete(messages::delete_message),
        )

        // Add middleware and state
        .route_layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}
