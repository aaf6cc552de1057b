// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use s3::creds::error::CredentialsError;
use s3::error::S3Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("no AWS credentials available")]
    Credentials(#[from] CredentialsError),

    #[error("invalid region {region:?}: {message}")]
    Region { region: String, message: String },

    #[error("cannot open bucket {bucket}")]
    Bucket {
        bucket: String,
        #[source]
        source: S3Error,
    },

    #[error("upload of {key} failed")]
    Put {
        key: String,
        #[source]
        source: S3Error,
    },

    #[error("upload of {key} rejected with HTTP {status}: {body}")]
    Status {
        key: String,
        status: u16,
        body: String,
    },
}
