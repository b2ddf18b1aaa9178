// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

pub mod bookmark;
pub mod dislike;
pub mod follow;
pub mod like;
pub mod message;
pub mod reference;
pub mod status;
pub mod tuit;
pub mod user;

pub use bookmark::Bookmark;
pub use dislike::Dislike;
pub use follow::Follow;
pub use like::Like;
pub use message::{Message, NewMessage};
pub use reference::{Identified, Reference};
pub use status::{CountResponse, DeleteStatus, UpdateStatus};
pub use tuit::{NewTuit, Tuit, UpdateTuit};
pub use user::{AccountType, Location, MaritalStatus, NewUser, UpdateUser, User};
