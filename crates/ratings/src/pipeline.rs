// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::Result;
use crate::error::PipelineError;
use crate::fold::fold_ratings;
use crate::model::{MovieRating, RatingDocument, TitleList};
use crate::ports::{ArtifactSink, RatingLookup, TitleSource};
use diagnostics::*;
use std::io::Read;

/// Object key every run writes to
pub const OUTPUT_KEY: &str = "omdb.ratings";

/// Content type of the uploaded document
pub const CONTENT_TYPE: &str = "application/json";

/// A single enrichment run over one input file.
///
/// Stages run strictly in order (open, decode, lookup each title, encode,
/// upload) and the first failure ends the run. Nothing is uploaded
/// unless every title was rated.
pub struct Pipeline<S, L, K> {
    source: S,
    lookup: L,
    sink: K,
    input_path: String,
}

impl<S, L, K> Pipeline<S, L, K>
where
    S: TitleSource,
    L: RatingLookup,
    K: ArtifactSink,
{
    pub fn new(source: S, lookup: L, sink: K, input_path: impl Into<String>) -> Self {
        Pipeline {
            source,
            lookup,
            sink,
            input_path: input_path.into(),
        }
    }

    pub fn input_path(&self) -> &str {
        &self.input_path
    }

    /// Run the job end to end and return the uploaded document.
    pub fn run(&mut self) -> Result<RatingDocument> {
        info!("processing {path}", path: self.input_path);

        let titles = self.read_titles()?;
        let count = titles.len();
        info!("decoded {count} titles", count: count);

        let document = self.rate_titles(titles)?;
        let encoded = encode_document(&document)?;

        info!("uploading {size} bytes to {key}", size: encoded.len(), key: OUTPUT_KEY);
        self.sink
            .put(OUTPUT_KEY, &encoded)
            .map_err(|e| PipelineError::Upload {
                key: OUTPUT_KEY.to_string(),
                source: Box::new(e),
            })?;

        info!("uploaded {count} ratings to {key}", count: count, key: OUTPUT_KEY);
        Ok(document)
    }

    /// Decompose into the collaborators
    pub fn into_parts(self) -> (S, L, K) {
        (self.source, self.lookup, self.sink)
    }

    fn read_titles(&mut self) -> Result<Vec<String>> {
        let unavailable = |path: &str, source: crate::BoxError| PipelineError::SourceUnavailable {
            path: path.to_string(),
            source,
        };

        debug!("opening {path}", path: self.input_path);
        let mut reader = self
            .source
            .open(&self.input_path)
            .map_err(|e| unavailable(&self.input_path, Box::new(e)))?;

        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|e| unavailable(&self.input_path, Box::new(e)))?;
        drop(reader);

        decode_titles(&buf)
    }

    fn rate_titles(&mut self, titles: Vec<String>) -> Result<RatingDocument> {
        let mut movies = Vec::with_capacity(titles.len());
        for title in &titles {
            movies.push(rate_title(&mut self.lookup, title)?);
        }
        Ok(RatingDocument { movies })
    }
}

/// Look up one title and fold the answer into its record.
pub fn rate_title<L: RatingLookup>(lookup: &mut L, title: &str) -> Result<MovieRating> {
    debug!("looking up {title}", title: title);
    let entries = lookup.lookup(title).map_err(|e| PipelineError::Lookup {
        title: title.to_string(),
        source: Box::new(e),
    })?;
    Ok(fold_ratings(title, entries))
}

/// Parse the buffered input document into its ordered titles.
pub fn decode_titles(bytes: &[u8]) -> Result<Vec<String>> {
    let list: TitleList = serde_json::from_slice(bytes).map_err(PipelineError::Decode)?;
    Ok(list.movies)
}

/// Serialize the document as newline-terminated JSON.
pub fn encode_document(document: &RatingDocument) -> Result<Vec<u8>> {
    let mut encoded = serde_json::to_vec(document).map_err(PipelineError::Encode)?;
    encoded.push(b'\n');
    Ok(encoded)
}
