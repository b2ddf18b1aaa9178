// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;
