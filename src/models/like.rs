// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use super::reference::{Identified, Reference};
use super::tuit::Tuit;
use super::user::User;

/// A user liking a tuit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: String,
    pub tuit: Reference<Tuit>,
    pub liked_by: Reference<User>,
}

impl Like {
    pub fn new(id: String, liked_by: String, tuit: String) -> Self {
        Self {
            id,
            tuit: Reference::Id(tuit),
            liked_by: Reference::Id(liked_by),
        }
    }
}

impl Identified for Like {
    fn id(&self) -> &str {
        &self.id
    }
}
