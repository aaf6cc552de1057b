// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

// Request URLs carry the API key, so reqwest errors are stored without them.
#[derive(Error, Debug)]
pub enum OmdbError {
    #[error("invalid OMDb base URL {url:?}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("OMDb request failed")]
    Http(#[source] reqwest::Error),

    #[error("OMDb returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("OMDb has no match for {title:?}: {message}")]
    NotFound { title: String, message: String },

    #[error("OMDb response for {title:?} has no Ratings")]
    MissingRatings { title: String },

    #[error("failed to decode OMDb response")]
    Decode(#[from] serde_json::Error),
}

impl OmdbError {
    pub(crate) fn http(err: reqwest::Error) -> Self {
        OmdbError::Http(err.without_url())
    }
}
