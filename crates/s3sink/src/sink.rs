// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::Result;
use crate::error::SinkError;
use diagnostics::*;
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::region::Region;

/// Target bucket for uploads
#[derive(Debug, Clone)]
pub struct Config {
    pub region: String,
    pub bucket: String,
    /// Custom endpoint (e.g. a local object store). Implies path-style URLs.
    pub endpoint: Option<String>,
}

/// Uploads whole objects to one bucket
pub struct S3Sink {
    bucket: Bucket,
}

impl S3Sink {
    /// Open the bucket using the default AWS credential chain
    /// (environment, profile, instance metadata).
    pub fn new(config: &Config) -> Result<Self> {
        let creds = Credentials::default()?;
        Self::with_credentials(config, creds)
    }

    pub fn with_credentials(config: &Config, creds: Credentials) -> Result<Self> {
        let region = region(config)?;
        let bucket = Bucket::new(&config.bucket, region, creds).map_err(|source| {
            SinkError::Bucket {
                bucket: config.bucket.clone(),
                source,
            }
        })?;

        let bucket = if config.endpoint.is_some() {
            bucket.with_path_style()
        } else {
            bucket
        };

        Ok(S3Sink { bucket })
    }

    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }

    /// Store `data` under `key`, replacing any existing object.
    pub fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<()> {
        let size = data.len();
        debug!("putting {size} bytes at {key}", size: size, key: key);

        let response = self
            .bucket
            .put_object_with_content_type(key, data, content_type)
            .map_err(|source| SinkError::Put {
                key: key.to_string(),
                source,
            })?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            return Err(SinkError::Status {
                key: key.to_string(),
                status,
                body: String::from_utf8_lossy(response.as_slice()).into_owned(),
            });
        }
        Ok(())
    }
}

fn region(config: &Config) -> Result<Region> {
    match &config.endpoint {
        Some(endpoint) => Ok(Region::Custom {
            region: config.region.clone(),
            endpoint: endpoint.clone(),
        }),
        None => config
            .region
            .parse::<Region>()
            .map_err(|err| SinkError::Region {
                region: config.region.clone(),
                message: err.to_string(),
            }),
    }
}
