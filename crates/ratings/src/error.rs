// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Boxed collaborator error carried as the cause of a stage failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A run failure. Each variant names the stage that failed and keeps the
/// collaborator's error as its source.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input {path} unavailable")]
    SourceUnavailable {
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("cannot decode title list")]
    Decode(#[source] serde_json::Error),

    #[error("rating lookup failed for {title:?}")]
    Lookup {
        title: String,
        #[source]
        source: BoxError,
    },

    #[error("cannot encode rating document")]
    Encode(#[source] serde_json::Error),

    #[error("upload to {key} failed")]
    Upload {
        key: String,
        #[source]
        source: BoxError,
    },
}

impl PipelineError {
    /// Short name of the failing stage, for structured logs
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::SourceUnavailable { .. } => "open",
            PipelineError::Decode(_) => "decode",
            PipelineError::Lookup { .. } => "lookup",
            PipelineError::Encode(_) => "encode",
            PipelineError::Upload { .. } => "upload",
        }
    }
}
