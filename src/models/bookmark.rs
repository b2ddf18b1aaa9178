// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use super::reference::{Identified, Reference};
use super::tuit::Tuit;
use super::user::User;

/// A tuit saved by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub bookmarked_tuit: Reference<Tuit>,
    pub bookmarked_by: Reference<User>,
}

impl Bookmark {
    pub fn new(id: String, bookmarked_by: String, tuit: String) -> Self {
        Self {
            id,
            bookmarked_tuit: Reference::Id(tuit),
            bookmarked_by: Reference::Id(bookmarked_by),
        }
    }
}

impl Identified for Bookmark {
    fn id(&self) -> &str {
        &self.id
    }
}
