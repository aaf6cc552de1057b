// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Blocking client for the OMDb ratings API.
//!
//! One request per title: `GET {base}/?apiKey={key}&t={title}`. The
//! response's `Ratings` array is returned as-is, in response order.

pub mod client;
pub mod error;
pub mod models;

pub use crate::client::{Client, Config};
pub use crate::error::OmdbError;
pub use crate::models::{Rating, RatingsResponse};

/// Result type for OMDb operations
pub type Result<T> = std::result::Result<T, OmdbError>;
