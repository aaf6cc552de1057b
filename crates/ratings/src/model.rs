// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Input document: titles in the order they will be looked up.
/// Titles are used verbatim, with no trimming or normalization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TitleList {
    pub movies: Vec<String>,
}

/// One (source, value) pair returned for a title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingEntry {
    pub source: String,
    pub value: String,
}

impl RatingEntry {
    pub fn new(source: impl Into<String>, value: impl Into<String>) -> Self {
        RatingEntry {
            source: source.into(),
            value: value.into(),
        }
    }
}

impl From<omdb::Rating> for RatingEntry {
    fn from(rating: omdb::Rating) -> Self {
        RatingEntry {
            source: rating.source,
            value: rating.value,
        }
    }
}

/// One output row. Missing sources are empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovieRating {
    pub name: String,
    pub imdb: String,
    pub rotten_tomatoes: String,
    pub metacritic: String,
}

/// Output document: one record per input title, same order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingDocument {
    pub movies: Vec<MovieRating>,
}

impl RatingDocument {
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
