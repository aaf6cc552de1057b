// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The collaborators a [`Pipeline`](crate::Pipeline) drives.
//!
//! All calls are blocking. Implementations own their connection settings;
//! the pipeline only passes paths, titles, keys and bytes.

use crate::model::RatingEntry;
use std::io::Read;

/// Opens the input document by path.
pub trait TitleSource {
    /// Released (closed) when dropped.
    type Reader: Read;
    type Error: std::error::Error + Send + Sync + 'static;

    fn open(&mut self, path: &str) -> Result<Self::Reader, Self::Error>;
}

/// Looks up the rating entries for one title.
pub trait RatingLookup {
    type Error: std::error::Error + Send + Sync + 'static;

    fn lookup(&mut self, title: &str) -> Result<Vec<RatingEntry>, Self::Error>;
}

/// Stores a finished document, replacing whatever was at `key`.
pub trait ArtifactSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn put(&mut self, key: &str, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: TitleSource + ?Sized> TitleSource for &mut T {
    type Reader = T::Reader;
    type Error = T::Error;

    fn open(&mut self, path: &str) -> Result<Self::Reader, Self::Error> {
        (**self).open(path)
    }
}

impl<T: RatingLookup + ?Sized> RatingLookup for &mut T {
    type Error = T::Error;

    fn lookup(&mut self, title: &str) -> Result<Vec<RatingEntry>, Self::Error> {
        (**self).lookup(title)
    }
}

impl<T: ArtifactSink + ?Sized> ArtifactSink for &mut T {
    type Error = T::Error;

    fn put(&mut self, key: &str, data: &[u8]) -> Result<(), Self::Error> {
        (**self).put(key, data)
    }
}
