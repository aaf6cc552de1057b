// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Movie rating enrichment.
//!
//! One run reads a title list from a remote file, looks up each title's
//! critic ratings in order, folds them into a fixed three-column record,
//! and uploads the resulting document under a fixed key.
//!
//! # Architecture
//!
//! - **ports**: the three collaborators the pipeline drives
//!   ([`TitleSource`], [`RatingLookup`], [`ArtifactSink`])
//! - **adapters**: port implementations for the `sftp`, `omdb` and
//!   `s3sink` clients
//! - **fold**: maps rating sources onto record fields
//! - **pipeline**: the run itself; stops at the first failure
//!
//! # Documents
//!
//! Input: `{"movies": ["Title A", "Title B"]}`
//!
//! Output: `{"movies": [{"name": "Title A", "imdb": "...",
//! "rottenTomatoes": "...", "metacritic": "..."}]}`

mod adapters;
mod error;
pub mod fold;
pub mod model;
pub mod pipeline;
pub mod ports;

pub use error::{BoxError, PipelineError};
pub use fold::fold_ratings;
pub use model::{MovieRating, RatingDocument, RatingEntry, TitleList};
pub use pipeline::{CONTENT_TYPE, OUTPUT_KEY, Pipeline, decode_titles, encode_document, rate_title};
pub use ports::{ArtifactSink, RatingLookup, TitleSource};

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
