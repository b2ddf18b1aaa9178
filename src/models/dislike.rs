// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use super::reference::{Identified, Reference};
use super::tuit::Tuit;
use super::user::User;

/// A user disliking a tuit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dislike {
    pub id: String,
    pub tuit: Reference<Tuit>,
    pub disliked_by: Reference<User>,
}

impl Dislike {
    pub fn new(id: String, disliked_by: String, tuit: String) -> Self {
        Self {
            id,
            tuit: Reference::Id(tuit),
            disliked_by: Reference::Id(disliked_by),
        }
    }
}

impl Identified for Dislike {
    fn id(&self) -> &str {
        &self.id
    }
}
