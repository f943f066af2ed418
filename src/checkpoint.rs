// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::PendingExport;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Tradeclip", "tradeclip"));

/// Where the pending-export checkpoint lives. Written after an export
/// job is created, cleared after both artifacts are uploaded, so a
/// restarted run resumes polling instead of requesting a duplicate.
pub fn state_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("pending_export.json"))
}

pub fn load() -> Result<Option<PendingExport>> {
    load_from(&state_path()?)
}

pub fn save(pending: &PendingExport) -> Result<()> {
    save_to(&state_path()?, pending)
}

pub fn clear() -> Result<()> {
    clear_at(&state_path()?)
}

pub fn load_from(path: &Path) -> Result<Option<PendingExport>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read checkpoint {}", path.display()))?;
    let pending = serde_json::from_str(&raw)
        .with_context(|| format!("Parse checkpoint {}", path.display()))?;
    Ok(Some(pending))
}

pub fn save_to(path: &Path, pending: &PendingExport) -> Result<()> {
    let raw = serde_json::to_string_pretty(pending)?;
    fs::write(path, raw).with_context(|| format!("Write checkpoint {}", path.display()))?;
    Ok(())
}

pub fn clear_at(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("Remove checkpoint {}", path.display()))?;
    }
    Ok(())
}
