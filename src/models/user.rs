// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::reference::Identified;

/// Raised when a stored enum column holds a value outside its closed set
#[derive(Debug, Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Personal,
    Academic,
    Professional,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Personal => "PERSONAL",
            AccountType::Academic => "ACADEMIC",
            AccountType::Professional => "PROFESSIONAL",
        }
    }
}

impl FromStr for AccountType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PERSONAL" => Ok(AccountType::Personal),
            "ACADEMIC" => Ok(AccountType::Academic),
            "PROFESSIONAL" => Ok(AccountType::Professional),
            other => Err(UnknownVariant {
                kind: "account type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaritalStatus {
    Married,
    Single,
    Widowed,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Married => "MARRIED",
            MaritalStatus::Single => "SINGLE",
            MaritalStatus::Widowed => "WIDOWED",
        }
    }
}

impl FromStr for MaritalStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "MARRIED" => Ok(MaritalStatus::Married),
            "SINGLE" => Ok(MaritalStatus::Single),
            "WIDOWED" => Ok(MaritalStatus::Widowed),
            other => Err(UnknownVariant {
                kind: "marital status",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
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
    pub account_type: Option<AccountType>,
    pub marital_status: Option<MaritalStatus>,
    pub location: Option<Location>,
}

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for creating a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub header_image: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Attach a generated id, producing the stored record
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            profile_photo: self.profile_photo,
            header_image: self.header_image,
            biography: self.biography,
            date_of_birth: self.date_of_birth,
            account_type: self.account_type,
            marital_status: self.marital_status,
            location: self.location,
        }
    }
}

/// Reads a field that may be absent, `null`, or set. Absent stays `None`
/// through `#[serde(default)]`; `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Field-set update for a user: present fields are written, absent ones are left alone.
/// Optional fields carry a second `Option` so an explicit `null` clears them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub header_image: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub biography: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<Option<AccountType>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<Option<MaritalStatus>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<Location>>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        *self == UpdateUser::default()
    }

    /// Write the present fields into `user`, returning whether anything changed
    pub fn apply_to(&self, user: &mut User) -> bool {
        let before = user.clone();

        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(password) = &self.password {
            user.password = password.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(first_name) = &self.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(profile_photo) = &self.profile_photo {
            user.profile_photo = profile_photo.clone();
        }
        if let Some(header_image) = &self.header_image {
            user.header_image = header_image.clone();
        }
        if let Some(biography) = &self.biography {
            user.biography = biography.clone();
        }
        if let Some(date_of_birth) = self.date_of_birth {
            user.date_of_birth = date_of_birth;
        }
        if let Some(account_type) = self.account_type {
            user.account_type = account_type;
        }
        if let Some(marital_status) = self.marital_status {
            user.marital_status = marital_status;
        }
        if let Some(location) = self.location {
            user.location = location;
        }

        *user != before
    }
}
