// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::{Identified, Reference};
use super::user::User;

/// A direct message between two users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub message: String,
    pub from: Reference<User>,
    pub to: Reference<User>,
    pub sent_on: DateTime<Utc>,
}

impl Identified for Message {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for sending a message; sender and recipient come from the route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub message: String,
    #[serde(default)]
    pub sent_on: Option<DateTime<Utc>>,
}

impl NewMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sent_on: None,
        }
    }

    pub fn into_message(self, id: String, from: String, to: String) -> Message {
        Message {
            id,
            message: self.message,
            from: Reference::Id(from),
            to: Reference::Id(to),
            sent_on: self.sent_on.unwrap_or_else(Utc::now),
        }
    }
}
