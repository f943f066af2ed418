// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

pub const DEFAULT_BUCKET: &str = "t212-to-digrin";

/// Runtime configuration, read once at startup and passed into the
/// client and sink constructors. Nothing else reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
    pub bucket: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("T212_API_KEY").context("T212_API_KEY is not set")?;
        let region = std::env::var("AWS_REGION").context("AWS_REGION is not set")?;
        let bucket =
            std::env::var("TRADECLIP_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.to_string());
        Ok(Self {
            api_key,
            region,
            bucket,
        })
    }
}
