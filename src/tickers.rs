// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Only actual trades make it into the transformed output.
pub const ALLOWED_ACTIONS: [&str; 2] = ["Market buy", "Market sell"];

pub static TICKER_BLACKLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "VNTRF", // stock split broke the price history
        "BRK.A", // not available in digrin
    ])
});

/// Bare symbols the export uses, mapped to the exchange-suffixed
/// symbols digrin expects.
pub static TICKER_RENAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("VWCE", "VWCE.DE"),
        ("VUAA", "VUAA.DE"),
        ("SXRV", "SXRV.DE"),
        ("ZPRV", "ZPRV.DE"),
        ("ZPRX", "ZPRX.DE"),
        ("MC", "MC.PA"),
        ("ASML", "ASML.AS"),
        ("CSPX", "CSPX.L"),
        ("EISU", "EISU.L"),
        ("IITU", "IITU.L"),
        ("IUHC", "IUHC.L"),
        ("NDIA", "NDIA.L"),
    ])
});
