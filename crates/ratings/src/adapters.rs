// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

// Port implementations for the concrete clients.

use crate::model::RatingEntry;
use crate::pipeline::CONTENT_TYPE;
use crate::ports::{ArtifactSink, RatingLookup, TitleSource};

impl TitleSource for sftp::Session {
    type Reader = sftp::RemoteFile;
    type Error = sftp::SftpError;

    fn open(&mut self, path: &str) -> Result<Self::Reader, Self::Error> {
        sftp::Session::open(self, path)
    }
}

impl RatingLookup for omdb::Client {
    type Error = omdb::OmdbError;

    fn lookup(&mut self, title: &str) -> Result<Vec<RatingEntry>, Self::Error> {
        let ratings = self.ratings(title)?;
        Ok(ratings.into_iter().map(RatingEntry::from).collect())
    }
}

impl ArtifactSink for s3sink::S3Sink {
    type Error = s3sink::SinkError;

    fn put(&mut self, key: &str, data: &[u8]) -> Result<(), Self::Error> {
        s3sink::S3Sink::put(self, key, data, CONTENT_TYPE)
    }
}
