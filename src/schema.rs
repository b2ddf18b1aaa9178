// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

// Import diesel table macros
use diesel::table;
use diesel::allow_tables_to_appear_in_same_query;

table! {
    users (id) {
        id -> Varchar,
        username -> Varchar,
        password -> Varchar,
        email -> Varchar,
        first_name -> Nullable<Varchar>,
        last_name -> Nullable<Varchar>,
        profile_photo -> Nullable<Varchar>,
        header_image -> Nullable<Varchar>,
        biography -> Nullable<Text>,
        date_of_birth -> Nullable<Date>,
        account_type -> Nullable<Varchar>,
        marital_status -> Nullable<Varchar>,
        latitude -> Nullable<Double>,
        longitude -> Nullable<Double>,
    }
}

table! {
    tuits (id) {
        id -> Varchar,
        tuit -> Text,
        posted_by -> Varchar,
        posted_on -> Timestamptz,
    }
}

table! {
    likes (id) {
        id -> Varchar,
        tuit -> Varchar,
        liked_by -> Varchar,
    }
}

table! {
    dislikes (id) {
        id -> Varchar,
        tuit -> Varchar,
        disliked_by -> Varchar,
    }
}

table! {
    follows (id) {
        id -> Varchar,
        user_followed -> Varchar,
        user_following -> Varchar,
    }
}

table! {
    bookmarks (id) {
        id -> Varchar,
        bookmarked_tuit -> Varchar,
        bookmarked_by -> Varchar,
    }
}

table! {
    messages (id) {
        id -> Varchar,
        message -> Text,
        sender -> Varchar,
        recipient -> Varchar,
        sent_on -> Timestamptz,
    }
}

// References are joined explicitly with `.on(...)`, so no `joinable!` entries
allow_tables_to_appear_in_same_query!(
    users,
    tuits,
    likes,
    dislikes,
    follows,
    bookmarks,
    messages,
);
