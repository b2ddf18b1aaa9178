// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

//! Diesel row types and their conversion into the entity model.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::models::user::UnknownVariant;
use crate::models::{
    AccountType, Bookmark, Dislike, Follow, Like, Location, MaritalStatus, Message, NewMessage,
    NewTuit, NewUser, Reference, Tuit, UpdateTuit, UpdateUser, User,
};
use crate::schema::{bookmarks, dislikes, follows, likes, messages, tuits, users};

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_photo: Option<String>,
    pub header_image: Option<String>,
    pub biography: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub account_type: Option<String>,
    pub marital_status: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl UserRow {
    pub fn from_new(id: String, user: NewUser) -> Self {
        Self {
            id,
            username: user.username,
            password: user.password,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_photo: user.profile_photo,
            header_image: user.header_image,
            biography: user.biography,
            date_of_birth: user.date_of_birth,
            account_type: user.account_type.map(|value| value.as_str().to_string()),
            marital_status: user.marital_status.map(|value| value.as_str().to_string()),
            latitude: user.location.map(|location| location.latitude),
            longitude: user.location.map(|location| location.longitude),
        }
    }
}

impl TryFrom<UserRow> for User {
    type Error = UnknownVariant;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let location = match (row.latitude, row.longitude) {
            (Some(latitude), Some(longitude)) => Some(Location { latitude, longitude }),
            _ => None,
        };

        Ok(User {
            id: row.id,
            username: row.username,
            password: row.password,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            profile_photo: row.profile_photo,
            header_image: row.header_image,
            biography: row.biography,
            date_of_birth: row.date_of_birth,
            account_type: row
                .account_type
                .as_deref()
                .map(str::parse::<AccountType>)
                .transpose()?,
            marital_status: row
                .marital_status
                .as_deref()
                .map(str::parse::<MaritalStatus>)
                .transpose()?,
            location,
        })
    }
}

/// Convert an optionally joined user row
pub fn joined_user(row: Option<UserRow>) -> Result<Option<User>, UnknownVariant> {
    row.map(User::try_from).transpose()
}

/// Only the `Some` fields become part of the `SET` clause; `Some(None)` writes `NULL`
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserChangeset {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
    pub profile_photo: Option<Option<String>>,
    pub header_image: Option<Option<String>>,
    pub biography: Option<Option<String>>,
    pub date_of_birth: Option<Option<NaiveDate>>,
    pub account_type: Option<Option<String>>,
    pub marital_status: Option<Option<String>>,
    pub latitude: Option<Option<f64>>,
    pub longitude: Option<Option<f64>>,
}

impl From<UpdateUser> for UserChangeset {
    fn from(user: UpdateUser) -> Self {
        Self {
            username: user.username,
            password: user.password,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_photo: user.profile_photo,
            header_image: user.header_image,
            biography: user.biography,
            date_of_birth: user.date_of_birth,
            account_type: user
                .account_type
                .map(|value| value.map(|value| value.as_str().to_string())),
            marital_status: user
                .marital_status
                .map(|value| value.map(|value| value.as_str().to_string())),
            latitude: user
                .location
                .map(|location| location.map(|location| location.latitude)),
            longitude: user
                .location
                .map(|location| location.map(|location| location.longitude)),
        }
    }
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = tuits)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TuitRow {
    pub id: String,
    pub tuit: String,
    pub posted_by: String,
    pub posted_on: DateTime<Utc>,
}

impl TuitRow {
    pub fn from_new(id: String, posted_by: String, tuit: NewTuit) -> Self {
        Self {
            id,
            tuit: tuit.tuit,
            posted_by,
            posted_on: tuit.posted_on.unwrap_or_else(Utc::now),
        }
    }

    pub fn into_tuit(self, author: Option<User>) -> Tuit {
        Tuit {
            id: self.id,
            tuit: self.tuit,
            posted_by: Reference::resolve(self.posted_by, author),
            posted_on: self.posted_on,
        }
    }
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = tuits)]
pub struct TuitChangeset {
    pub tuit: Option<String>,
    pub posted_on: Option<DateTime<Utc>>,
}

impl From<UpdateTuit> for TuitChangeset {
    fn from(tuit: UpdateTuit) -> Self {
        Self {
            tuit: tuit.tuit,
            posted_on: tuit.posted_on,
        }
    }
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = likes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LikeRow {
    pub id: String,
    pub tuit: String,
    pub liked_by: String,
}

impl LikeRow {
    pub fn into_like(self, tuit: Option<Tuit>, liked_by: Option<User>) -> Like {
        Like {
            id: self.id,
            tuit: Reference::resolve(self.tuit, tuit),
            liked_by: Reference::resolve(self.liked_by, liked_by),
        }
    }
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = dislikes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DislikeRow {
    pub id: String,
    pub tuit: String,
    pub disliked_by: String,
}

impl DislikeRow {
    pub fn into_dislike(self, tuit: Option<Tuit>, disliked_by: Option<User>) -> Dislike {
        Dislike {
            id: self.id,
            tuit: Reference::resolve(self.tuit, tuit),
            disliked_by: Reference::resolve(self.disliked_by, disliked_by),
        }
    }
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = follows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FollowRow {
    pub id: String,
    pub user_followed: String,
    pub user_following: String,
}

impl FollowRow {
    pub fn into_follow(self, followed: Option<User>, following: Option<User>) -> Follow {
        Follow {
            id: self.id,
            user_followed: Reference::resolve(self.user_followed, followed),
            user_following: Reference::resolve(self.user_following, following),
        }
    }
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = bookmarks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookmarkRow {
    pub id: String,
    pub bookmarked_tuit: String,
    pub bookmarked_by: String,
}

impl BookmarkRow {
    pub fn into_bookmark(self, tuit: Option<Tuit>) -> Bookmark {
        Bookmark {
            id: self.id,
            bookmarked_tuit: Reference::resolve(self.bookmarked_tuit, tuit),
            bookmarked_by: Reference::Id(self.bookmarked_by),
        }
    }
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    pub id: String,
    pub message: String,
    pub sender: String,
    pub recipient: String,
    pub sent_on: DateTime<Utc>,
}

impl MessageRow {
    pub fn from_new(id: String, sender: String, recipient: String, message: NewMessage) -> Self {
        Self {
            id,
            message: message.message,
            sender,
            recipient,
            sent_on: message.sent_on.unwrap_or_else(Utc::now),
        }
    }
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: row.id,
            message: row.message,
            from: Reference::Id(row.sender),
            to: Reference::Id(row.recipient),
            sent_on: row.sent_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_row_round_trips_enums_and_location() {
        let mut new_user = NewUser::new("alice", "p", "a@x.com");
        new_user.account_type = Some(AccountType::Professional);
        new_user.marital_status = Some(MaritalStatus::Single);
        new_user.location = Some(Location { latitude: 42.3, longitude: -71.1 });

        let row = UserRow::from_new("u1".into(), new_user);
        assert_eq!(row.account_type.as_deref(), Some("PROFESSIONAL"));
        assert_eq!(row.latitude, Some(42.3));

        let user = User::try_from(row).unwrap();
        assert_eq!(user.account_type, Some(AccountType::Professional));
        assert_eq!(user.marital_status, Some(MaritalStatus::Single));
        assert_eq!(user.location, Some(Location { latitude: 42.3, longitude: -71.1 }));
    }

    #[test]
    fn unknown_stored_enum_is_reported() {
        let mut row = UserRow::from_new("u1".into(), NewUser::new("alice", "p", "a@x.com"));
        row.marital_status = Some("DIVORCED".into());
        assert!(User::try_from(row).is_err());
    }

    #[test]
    fn changeset_carries_only_present_fields() {
        let changeset = UserChangeset::from(UpdateUser {
            biography: Some(Some(String::new())),
            ..Default::default()
        });
        assert_eq!(changeset.biography, Some(Some(String::new())));
        assert!(changeset.username.is_none());
        assert!(changeset.latitude.is_none());
    }

    #[test]
    fn changeset_clears_nulled_location() {
        let changeset = UserChangeset::from(UpdateUser {
            location: Some(None),
            account_type: Some(None),
            ..Default::default()
        });
        assert_eq!(changeset.latitude, Some(None));
        assert_eq!(changeset.longitude, Some(None));
        assert_eq!(changeset.account_type, Some(None));
        assert!(changeset.biography.is_none());
    }
}
