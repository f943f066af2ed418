// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;

/// Archive sink: one bucket, one object per put. The AWS SDK is async,
/// so the sink owns a current-thread runtime and blocks on each call.
pub struct S3Sink {
    client: aws_sdk_s3::Client,
    bucket: String,
    rt: tokio::runtime::Runtime,
}

impl S3Sink {
    pub fn new(region: &str, bucket: &str) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Start storage runtime")?;
        let config = rt.block_on(
            aws_config::from_env()
                .region(Region::new(region.to_string()))
                .load(),
        );
        Ok(Self {
            client: aws_sdk_s3::Client::new(&config),
            bucket: bucket.to_string(),
            rt,
        })
    }

    pub fn put_object(&self, key: &str, body: Vec<u8>) -> Result<()> {
        self.rt
            .block_on(
                self.client
                    .put_object()
                    .bucket(&self.bucket)
                    .key(key)
                    .body(ByteStream::from(body))
                    .send(),
            )
            .with_context(|| format!("Upload s3://{}/{}", self.bucket, key))?;
        Ok(())
    }
}
