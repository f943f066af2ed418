// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tradeclip::{cli, commands};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("run", sub)) => commands::run::handle(sub)?,
        Some(("transform", sub)) => commands::transform::handle(sub)?,
        Some(("status", sub)) => commands::status::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
