// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::transform::{decode, encode, transform};

/// Offline re-run of the transform against a raw export already on
/// disk. The pipeline is pure, so this reproduces exactly what `run`
/// would have uploaded.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let out = m.get_one::<String>("out").unwrap().trim();

    let raw = std::fs::read(path).with_context(|| format!("Read raw export {}", path))?;
    let records = decode(&raw)?;
    let total = records.len();
    let kept = transform(records);
    let encoded = encode(&kept)?;
    std::fs::write(out, encoded).with_context(|| format!("Write transformed CSV {}", out))?;

    println!("Transformed {}: kept {} of {} rows -> {}", path, kept.len(), total, out);
    Ok(())
}
