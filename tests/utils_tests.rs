// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use tradeclip::utils::{default_month, month_bounds, parse_month};

#[test]
fn month_bounds_are_half_open_utc_month_edges() {
    let (from, to) = month_bounds("2025-03").unwrap();
    assert_eq!(from, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    assert_eq!(to, Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap());
}

#[test]
fn month_bounds_roll_over_the_year_end() {
    let (from, to) = month_bounds("2025-12").unwrap();
    assert_eq!(from, Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap());
    assert_eq!(to, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn invalid_months_are_rejected() {
    assert!(parse_month("2025-13").is_err());
    assert!(parse_month("garbage").is_err());
    assert!(month_bounds("2025-00").is_err());
}

#[test]
fn valid_month_passes_through_unchanged() {
    assert_eq!(parse_month("2025-03").unwrap(), "2025-03");
}

#[test]
fn default_month_looks_like_a_year_month() {
    let m = default_month();
    assert_eq!(m.len(), 7);
    assert_eq!(m.as_bytes()[4], b'-');
    assert!(month_bounds(&m).is_ok());
}
