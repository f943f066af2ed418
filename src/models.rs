// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataIncluded {
    pub include_dividends: bool,
    pub include_interest: bool,
    pub include_orders: bool,
    pub include_transactions: bool,
}

impl DataIncluded {
    pub fn all() -> Self {
        Self {
            include_dividends: true,
            include_interest: true,
            include_orders: true,
            include_transactions: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub data_included: DataIncluded,
    pub time_from: DateTime<Utc>,
    pub time_to: DateTime<Utc>,
}

impl ExportRequest {
    /// Request every data category for the half-open interval [from, to).
    pub fn full(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            data_included: DataIncluded::all(),
            time_from: from,
            time_to: to,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedExport {
    pub report_id: i64,
}

/// One entry of the server-side export job list. Snapshots only; the
/// status string is an open set upstream (Queued, Processing, Running,
/// Canceled, Failed, Finished).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportJob {
    pub report_id: i64,
    pub time_from: Option<String>,
    pub time_to: Option<String>,
    pub data_included: Option<DataIncluded>,
    pub status: String,
    pub download_link: Option<String>,
}

/// Export CSV header, in column order. Must stay in sync with the
/// serde renames on [`TransactionRecord`].
pub const CSV_HEADERS: [&str; 24] = [
    "Action",
    "Time",
    "ISIN",
    "Ticker",
    "Name",
    "Notes",
    "ID",
    "No. of shares",
    "Price / share",
    "Currency (Price / share)",
    "Exchange rate",
    "Currency (Result)",
    "Total",
    "Currency (Total)",
    "Withholding tax",
    "Currency (Withholding tax)",
    "Currency conversion from amount",
    "Currency (Currency conversion from amount)",
    "Currency conversion to amount",
    "Currency (Currency conversion to amount)",
    "Currency conversion fee",
    "Currency (Currency conversion fee)",
    "French transaction tax",
    "Currency (French transaction tax)",
];

/// One row of the exported history CSV. Column names and order must
/// survive a decode/encode round trip untouched, so every field keeps
/// its original header. Numeric cells are blank on non-trade rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "ISIN")]
    pub isin: String,
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "No. of shares", with = "rust_decimal::serde::str_option")]
    pub no_of_shares: Option<Decimal>,
    #[serde(rename = "Price / share", with = "rust_decimal::serde::str_option")]
    pub price_per_share: Option<Decimal>,
    #[serde(rename = "Currency (Price / share)")]
    pub currency_price_per_share: String,
    #[serde(rename = "Exchange rate")]
    pub exchange_rate: String,
    #[serde(rename = "Currency (Result)")]
    pub currency_result: String,
    #[serde(rename = "Total", with = "rust_decimal::serde::str_option")]
    pub total: Option<Decimal>,
    #[serde(rename = "Currency (Total)")]
    pub currency_total: String,
    #[serde(rename = "Withholding tax", with = "rust_decimal::serde::str_option")]
    pub withholding_tax: Option<Decimal>,
    #[serde(rename = "Currency (Withholding tax)")]
    pub currency_withholding_tax: String,
    #[serde(
        rename = "Currency conversion from amount",
        with = "rust_decimal::serde::str_option"
    )]
    pub conversion_from_amount: Option<Decimal>,
    #[serde(rename = "Currency (Currency conversion from amount)")]
    pub currency_conversion_from_amount: String,
    #[serde(
        rename = "Currency conversion to amount",
        with = "rust_decimal::serde::str_option"
    )]
    pub conversion_to_amount: Option<Decimal>,
    #[serde(rename = "Currency (Currency conversion to amount)")]
    pub currency_conversion_to_amount: String,
    #[serde(rename = "Currency conversion fee", with = "rust_decimal::serde::str_option")]
    pub conversion_fee: Option<Decimal>,
    #[serde(rename = "Currency (Currency conversion fee)")]
    pub currency_conversion_fee: String,
    #[serde(rename = "French transaction tax", with = "rust_decimal::serde::str_option")]
    pub french_transaction_tax: Option<Decimal>,
    #[serde(rename = "Currency (French transaction tax)")]
    pub currency_french_transaction_tax: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingExport {
    pub month: String, // YYYY-MM
    pub report_id: i64,
}
