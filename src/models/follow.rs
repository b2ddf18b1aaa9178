// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use super::reference::{Identified, Reference};
use super::user::User;

/// `user_following` follows `user_followed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    pub id: String,
    pub user_followed: Reference<User>,
    pub user_following: Reference<User>,
}

impl Follow {
    pub fn new(id: String, follower: String, followed: String) -> Self {
        Self {
            id,
            user_followed: Reference::Id(followed),
            user_following: Reference::Id(follower),
        }
    }
}

impl Identified for Follow {
    fn id(&self) -> &str {
        &self.id
    }
}
