// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// One critic rating, e.g. `{"Source": "Rotten Tomatoes", "Value": "14%"}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// The subset of an OMDb title response this client reads.
///
/// A failed search comes back with a success status and
/// `{"Response": "False", "Error": "..."}` instead of `Ratings`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RatingsResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub ratings: Option<Vec<Rating>>,
}

impl RatingsResponse {
    /// True when the service reported that the lookup did not match.
    pub fn is_failure(&self) -> bool {
        self.response
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("false"))
    }
}
