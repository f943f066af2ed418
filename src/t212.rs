// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;
use thiserror::Error;

use crate::models::{CreatedExport, ExportJob, ExportRequest};
use crate::utils::http_client;

pub const LIVE_BASE_URL: &str = "https://live.trading212.com/api/v0";

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
const DEFAULT_MAX_ATTEMPTS: u32 = 90;

const STATUS_FINISHED: &str = "Finished";
const STATUS_FAILED: &str = "Failed";
const STATUS_CANCELED: &str = "Canceled";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export request not accepted after {attempts} attempts")]
    RequestTimeout { attempts: u32 },

    #[error("export {report_id} not finished after {attempts} polls")]
    PollTimeout { report_id: i64, attempts: u32 },

    #[error("export {report_id} ended in status '{status}'")]
    ExportFailed { report_id: i64, status: String },

    #[error("export {report_id} finished without a download link")]
    MissingDownloadLink { report_id: i64 },

    #[error("artifact download failed with status {status}")]
    DownloadFailed { status: reqwest::StatusCode },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    Ready(String),
    NotReady,
}

/// Client for the history-export API: create an export job, poll the
/// job list until it finishes, download the artifact. Both loops run
/// on a fixed interval and give up after `max_attempts`.
pub struct ExportClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    poll_interval: Duration,
    max_attempts: u32,
}

impl ExportClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            http: http_client()?,
            base_url: base_url.into(),
            api_key: api_key.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    pub fn with_polling(mut self, interval: Duration, max_attempts: u32) -> Self {
        self.poll_interval = interval;
        self.max_attempts = max_attempts;
        self
    }

    fn exports_url(&self) -> String {
        format!("{}/history/exports", self.base_url)
    }

    /// Create an export job covering [from, to). All four data
    /// categories are always requested. A non-2xx response means the
    /// server is not accepting the request yet and is retried on the
    /// poll interval; transport errors abort immediately.
    pub fn request_export(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<i64, ExportError> {
        let payload = ExportRequest::full(from, to);
        for attempt in 1..=self.max_attempts {
            let response = self
                .http
                .post(self.exports_url())
                .header(AUTHORIZATION, &self.api_key)
                .json(&payload)
                .send()?;
            if response.status().is_success() {
                let created: CreatedExport = response.json()?;
                return Ok(created.report_id);
            }
            println!(
                "  export request rejected ({}), attempt {}/{}",
                response.status(),
                attempt,
                self.max_attempts
            );
            if attempt < self.max_attempts {
                std::thread::sleep(self.poll_interval);
            }
        }
        Err(ExportError::RequestTimeout {
            attempts: self.max_attempts,
        })
    }

    /// Fetch every export job visible to the credential. A non-2xx
    /// response reads as an empty list, which the polling loop treats
    /// as not ready yet.
    pub fn fetch_exports(&self) -> Result<Vec<ExportJob>, ExportError> {
        let response = self
            .http
            .get(self.exports_url())
            .header(AUTHORIZATION, &self.api_key)
            .send()?;
        if !response.status().is_success() {
            println!("  export list unavailable ({})", response.status());
            return Ok(Vec::new());
        }
        Ok(response.json()?)
    }

    /// Poll the job list until the export is finished and return its
    /// pre-signed download link.
    pub fn await_download_link(&self, report_id: i64) -> Result<String, ExportError> {
        for attempt in 1..=self.max_attempts {
            let reports = self.fetch_exports()?;
            match evaluate_reports(&reports, report_id)? {
                PollOutcome::Ready(link) => return Ok(link),
                PollOutcome::NotReady => {
                    println!(
                        "  export {} not ready, attempt {}/{}",
                        report_id, attempt, self.max_attempts
                    );
                }
            }
            if attempt < self.max_attempts {
                std::thread::sleep(self.poll_interval);
            }
        }
        Err(ExportError::PollTimeout {
            report_id,
            attempts: self.max_attempts,
        })
    }

    /// Single unauthenticated fetch of the pre-signed link. The link is
    /// time-boxed, so a non-2xx response is fatal rather than retried.
    pub fn download(&self, link: &str) -> Result<Vec<u8>, ExportError> {
        let response = self.http.get(link).send()?;
        if !response.status().is_success() {
            return Err(ExportError::DownloadFailed {
                status: response.status(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}

/// Scan one job-list snapshot for the target export. New exports are
/// appended to the list, so the scan runs from the end and the first
/// match wins.
pub fn evaluate_reports(
    reports: &[ExportJob],
    report_id: i64,
) -> Result<PollOutcome, ExportError> {
    let Some(report) = reports.iter().rev().find(|r| r.report_id == report_id) else {
        return Ok(PollOutcome::NotReady);
    };
    match report.status.as_str() {
        STATUS_FINISHED => match &report.download_link {
            Some(link) => Ok(PollOutcome::Ready(link.clone())),
            None => Err(ExportError::MissingDownloadLink { report_id }),
        },
        STATUS_FAILED | STATUS_CANCELED => Err(ExportError::ExportFailed {
            report_id,
            status: report.status.clone(),
        }),
        _ => Ok(PollOutcome::NotReady),
    }
}
