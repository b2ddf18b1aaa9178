// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

pub mod bookmarks;
pub mod dislikes;
pub mod follows;
pub mod health;
pub mod likes;
pub mod messages;
pub mod tuits;
pub mod users;
