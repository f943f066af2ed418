// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config::Config;
use crate::t212::{ExportClient, LIVE_BASE_URL};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let config = Config::from_env()?;
    let client = ExportClient::new(LIVE_BASE_URL, &config.api_key)?;
    let reports = client.fetch_exports()?;

    if !maybe_print_json(json_flag, jsonl_flag, &reports)? {
        let rows: Vec<Vec<String>> = reports
            .iter()
            .map(|r| {
                vec![
                    r.report_id.to_string(),
                    r.time_from.clone().unwrap_or_default(),
                    r.time_to.clone().unwrap_or_default(),
                    r.status.clone(),
                    r.download_link.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "From", "To", "Status", "Download link"], rows)
        );
    }
    Ok(())
}
