// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::checkpoint;
use crate::config::Config;
use crate::models::PendingExport;
use crate::storage::S3Sink;
use crate::t212::{ExportClient, LIVE_BASE_URL};
use crate::transform;
use crate::utils::{default_month, month_bounds, parse_month};

const RAW_PREFIX: &str = "t212";
const TRANSFORMED_PREFIX: &str = "digrin";

/// The whole monthly pipeline: request export, await completion,
/// download, archive the raw CSV, then archive the transformed CSV.
/// Any failure aborts the run; the checkpoint survives for the next
/// attempt, the raw upload is never rolled back.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let config = Config::from_env()?;
    let month = match m.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => default_month(),
    };
    let (from, to) = month_bounds(&month)?;
    println!("Exporting {} ({} to {})", month, from, to);

    let client = ExportClient::new(LIVE_BASE_URL, &config.api_key)?;

    let report_id = match checkpoint::load()? {
        Some(pending) if pending.month == month => {
            println!("Resuming pending export {}", pending.report_id);
            pending.report_id
        }
        _ => {
            let report_id = client.request_export(from, to)?;
            checkpoint::save(&PendingExport {
                month: month.clone(),
                report_id,
            })?;
            println!("Created export {}", report_id);
            report_id
        }
    };

    let link = client.await_download_link(report_id)?;
    let raw = client.download(&link)?;
    println!("Downloaded {} bytes", raw.len());

    let sink = S3Sink::new(&config.region, &config.bucket)?;
    let raw_key = format!("{}/{}.csv", RAW_PREFIX, month);
    sink.put_object(&raw_key, raw.clone())?;
    println!("Archived raw export as {}", raw_key);

    let records = transform::decode(&raw)?;
    let kept = transform::transform(records);
    let transformed = transform::encode(&kept)?;
    let transformed_key = format!("{}/{}.csv", TRANSFORMED_PREFIX, month);
    sink.put_object(&transformed_key, transformed)?;
    println!("Archived transformed export as {}", transformed_key);

    checkpoint::clear()?;
    println!("Done: {} ({} rows kept)", month, kept.len());
    Ok(())
}
