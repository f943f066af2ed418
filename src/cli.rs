// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("tradeclip")
        .about("Monthly Trading 212 history export, transform, and S3 archive")
        .subcommand(
            Command::new("run")
                .about("Request, await, download, transform and archive one month's export")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_name("YYYY-MM")
                        .help("Reporting month (defaults to the previous calendar month)"),
                ),
        )
        .subcommand(
            Command::new("transform")
                .about("Re-run the transform on a previously downloaded raw export")
                .arg(
                    Arg::new("path")
                        .long("path")
                        .required(true)
                        .value_name("FILE")
                        .help("Raw export CSV to read"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .required(true)
                        .value_name("FILE")
                        .help("Where to write the transformed CSV"),
                ),
        )
        .subcommand(
            Command::new("status")
                .about("List export jobs visible to the configured API key")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as pretty JSON"),
                )
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .help("Print as JSON lines"),
                ),
        )
}
