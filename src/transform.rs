// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;

use crate::models::{TransactionRecord, CSV_HEADERS};
use crate::tickers::{ALLOWED_ACTIONS, TICKER_BLACKLIST, TICKER_RENAMES};

/// Parse a raw export CSV. A numeric cell that is present but not a
/// valid decimal fails the whole decode; blank numeric cells are fine.
pub fn decode(raw: &[u8]) -> Result<Vec<TransactionRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(raw);
    let mut records = Vec::new();
    for (i, result) in rdr.deserialize::<TransactionRecord>().enumerate() {
        // +2: one for the header row, one for 1-based line numbers
        let record = result.with_context(|| format!("Parse CSV line {}", i + 2))?;
        records.push(record);
    }
    Ok(records)
}

/// Filter and remap the decoded rows for the downstream tracker:
/// drop blacklisted tickers, keep only market buys and sells, then
/// rewrite tickers through the rename table. Step order is fixed.
pub fn transform(records: Vec<TransactionRecord>) -> Vec<TransactionRecord> {
    records
        .into_iter()
        .filter(|r| !TICKER_BLACKLIST.contains(r.ticker.as_str()))
        .filter(|r| ALLOWED_ACTIONS.contains(&r.action.as_str()))
        .map(|mut r| {
            if let Some(renamed) = TICKER_RENAMES.get(r.ticker.as_str()) {
                r.ticker = (*renamed).to_string();
            }
            r
        })
        .collect()
}

/// Serialize rows back to CSV with the same header names and column
/// order as the raw export.
pub fn encode(records: &[TransactionRecord]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    if records.is_empty() {
        // serialize() writes the header row; without rows it has to be spelled out
        wtr.write_record(CSV_HEADERS)?;
    }
    for record in records {
        wtr.serialize(record)?;
    }
    let out = wtr
        .into_inner()
        .map_err(|e| anyhow!("Flush CSV writer: {}", e))?;
    Ok(out)
}
