// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::{Identified, Reference};
use super::user::User;

/// A post authored by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tuit {
    pub id: String,
    pub tuit: String,
    pub posted_by: Reference<User>,
    pub posted_on: DateTime<Utc>,
}

impl Identified for Tuit {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for posting a tuit; the author comes from the route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTuit {
    pub tuit: String,
    #[serde(default)]
    pub posted_on: Option<DateTime<Utc>>,
}

impl NewTuit {
    pub fn new(tuit: impl Into<String>) -> Self {
        Self {
            tuit: tuit.into(),
            posted_on: None,
        }
    }

    pub fn into_tuit(self, id: String, posted_by: String) -> Tuit {
        Tuit {
            id,
            tuit: self.tuit,
            posted_by: Reference::Id(posted_by),
            posted_on: self.posted_on.unwrap_or_else(Utc::now),
        }
    }
}

/// Field-set update for a tuit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTuit {
    pub tuit: Option<String>,
    pub posted_on: Option<DateTime<Utc>>,
}

impl UpdateTuit {
    pub fn apply_to(&self, tuit: &mut Tuit) -> bool {
        let mut changed = false;
        if let Some(text) = &self.tuit {
            changed |= tuit.tuit != *text;
            tuit.tuit = text.clone();
        }
        if let Some(posted_on) = self.posted_on {
            changed |= tuit.posted_on != posted_on;
            tuit.posted_on = posted_on;
        }
        changed
    }
}
