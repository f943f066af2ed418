// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tempfile::tempdir;
use tradeclip::checkpoint::{clear_at, load_from, save_to};
use tradeclip::models::PendingExport;

#[test]
fn checkpoint_roundtrips_a_pending_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pending_export.json");

    assert_eq!(load_from(&path).unwrap(), None);

    let pending = PendingExport {
        month: "2025-03".to_string(),
        report_id: 1594033,
    };
    save_to(&path, &pending).unwrap();
    assert_eq!(load_from(&path).unwrap(), Some(pending.clone()));

    // overwriting with a newer month wins
    let newer = PendingExport {
        month: "2025-04".to_string(),
        report_id: 1600001,
    };
    save_to(&path, &newer).unwrap();
    assert_eq!(load_from(&path).unwrap(), Some(newer));

    clear_at(&path).unwrap();
    assert_eq!(load_from(&path).unwrap(), None);
}

#[test]
fn clearing_a_missing_checkpoint_is_not_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pending_export.json");
    clear_at(&path).unwrap();
}

#[test]
fn a_corrupt_checkpoint_is_an_error_not_a_silent_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pending_export.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(load_from(&path).is_err());
}
