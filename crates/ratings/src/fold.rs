// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Folding a title's rating entries into one [`MovieRating`].

use crate::model::{MovieRating, RatingEntry};

pub const IMDB: &str = "Internet Movie Database";
pub const ROTTEN_TOMATOES: &str = "Rotten Tomatoes";
pub const METACRITIC: &str = "Metacritic";

type Setter = fn(&mut MovieRating, String);

fn set_imdb(record: &mut MovieRating, value: String) {
    record.imdb = value;
}

fn set_rotten_tomatoes(record: &mut MovieRating, value: String) {
    record.rotten_tomatoes = value;
}

fn set_metacritic(record: &mut MovieRating, value: String) {
    record.metacritic = value;
}

/// Recognized source names and the record field each one fills.
const RECOGNIZED_SOURCES: &[(&str, Setter)] = &[
    (IMDB, set_imdb),
    (ROTTEN_TOMATOES, set_rotten_tomatoes),
    (METACRITIC, set_metacritic),
];

fn setter_for(source: &str) -> Option<Setter> {
    RECOGNIZED_SOURCES
        .iter()
        .find(|(name, _)| *name == source)
        .map(|(_, set)| *set)
}

/// Build the record for `title` from its rating entries.
///
/// Unrecognized sources are ignored. When a recognized source repeats, the
/// last occurrence wins.
pub fn fold_ratings<I>(title: &str, entries: I) -> MovieRating
where
    I: IntoIterator<Item = RatingEntry>,
{
    let mut record = MovieRating {
        name: title.to_string(),
        ..MovieRating::default()
    };
    for entry in entries {
        if let Some(set) = setter_for(&entry.source) {
            set(&mut record, entry.value);
        }
    }
    record
}
