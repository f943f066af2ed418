// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use mockito::{Matcher, Server};
use serde_json::json;
use tradeclip::models::ExportJob;
use tradeclip::t212::{evaluate_reports, ExportClient, ExportError, PollOutcome};

fn job(report_id: i64, status: &str, link: Option<&str>) -> ExportJob {
    ExportJob {
        report_id,
        time_from: Some("2025-03-01T00:00:00Z".to_string()),
        time_to: Some("2025-04-01T00:00:00Z".to_string()),
        data_included: None,
        status: status.to_string(),
        download_link: link.map(|s| s.to_string()),
    }
}

fn fast_client(server: &Server) -> ExportClient {
    ExportClient::new(server.url(), "test-key")
        .unwrap()
        .with_polling(Duration::ZERO, 3)
}

#[test]
fn evaluate_finds_finished_job_scanning_from_the_end() {
    let reports = vec![job(5, "Processing", None), job(7, "Finished", Some("L"))];
    let outcome = evaluate_reports(&reports, 7).unwrap();
    assert_eq!(outcome, PollOutcome::Ready("L".to_string()));
}

#[test]
fn evaluate_prefers_the_newest_entry_on_duplicate_ids() {
    // a retried request can leave two jobs with the same id; the
    // newest one sits at the end of the list
    let reports = vec![
        job(7, "Processing", None),
        job(6, "Finished", Some("other")),
        job(7, "Finished", Some("latest")),
    ];
    let outcome = evaluate_reports(&reports, 7).unwrap();
    assert_eq!(outcome, PollOutcome::Ready("latest".to_string()));
}

#[test]
fn evaluate_reports_not_ready_when_job_is_absent_or_unfinished() {
    assert_eq!(evaluate_reports(&[], 7).unwrap(), PollOutcome::NotReady);
    let queued = vec![job(7, "Queued", None)];
    assert_eq!(evaluate_reports(&queued, 7).unwrap(), PollOutcome::NotReady);
    let processing = vec![job(7, "Processing", None)];
    assert_eq!(
        evaluate_reports(&processing, 7).unwrap(),
        PollOutcome::NotReady
    );
}

#[test]
fn evaluate_fails_on_terminal_failure_statuses() {
    let failed = vec![job(7, "Failed", None)];
    assert!(matches!(
        evaluate_reports(&failed, 7),
        Err(ExportError::ExportFailed { report_id: 7, .. })
    ));
    let canceled = vec![job(7, "Canceled", None)];
    assert!(matches!(
        evaluate_reports(&canceled, 7),
        Err(ExportError::ExportFailed { report_id: 7, .. })
    ));
}

#[test]
fn evaluate_rejects_finished_job_without_a_link() {
    let reports = vec![job(7, "Finished", None)];
    assert!(matches!(
        evaluate_reports(&reports, 7),
        Err(ExportError::MissingDownloadLink { report_id: 7 })
    ));
}

#[test]
fn request_export_sends_all_categories_and_returns_the_report_id() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/history/exports")
        .match_header("authorization", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "dataIncluded": {
                "includeDividends": true,
                "includeInterest": true,
                "includeOrders": true,
                "includeTransactions": true,
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"reportId":1594033}"#)
        .expect(1)
        .create();

    let client = fast_client(&server);
    let from = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
    let report_id = client.request_export(from, to).unwrap();
    assert_eq!(report_id, 1594033);
    mock.assert();
}

#[test]
fn request_export_retries_rejections_then_times_out() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/history/exports")
        .with_status(429)
        .expect(3)
        .create();

    let client = fast_client(&server);
    let from = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
    let err = client.request_export(from, to).unwrap_err();
    assert!(matches!(err, ExportError::RequestTimeout { attempts: 3 }));
    mock.assert();
}

#[test]
fn polling_stops_after_a_single_fetch_when_already_finished() {
    let mut server = Server::new();
    let body = json!([
        {"reportId": 5, "status": "Processing"},
        {"reportId": 7, "status": "Finished", "downloadLink": "L"},
    ]);
    let mock = server
        .mock("GET", "/history/exports")
        .match_header("authorization", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create();

    let client = fast_client(&server);
    let link = client.await_download_link(7).unwrap();
    assert_eq!(link, "L");
    mock.assert();
}

#[test]
fn polling_fetches_exactly_up_to_the_attempt_cap_then_times_out() {
    let mut server = Server::new();
    let body = json!([{"reportId": 7, "status": "Processing"}]);
    let mock = server
        .mock("GET", "/history/exports")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(3)
        .create();

    let client = fast_client(&server);
    let err = client.await_download_link(7).unwrap_err();
    assert!(matches!(
        err,
        ExportError::PollTimeout {
            report_id: 7,
            attempts: 3
        }
    ));
    mock.assert();
}

#[test]
fn polling_treats_a_rejected_list_fetch_as_not_ready() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/history/exports")
        .with_status(503)
        .expect(3)
        .create();

    let client = fast_client(&server);
    let err = client.await_download_link(7).unwrap_err();
    assert!(matches!(err, ExportError::PollTimeout { .. }));
    mock.assert();
}

#[test]
fn download_returns_the_artifact_bytes() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/from_2025-03-01_to_2025-04-01.csv")
        .with_status(200)
        .with_body("Action,Time\nMarket buy,2025-03-03\n")
        .expect(1)
        .create();

    let client = fast_client(&server);
    let link = format!("{}/from_2025-03-01_to_2025-04-01.csv", server.url());
    let raw = client.download(&link).unwrap();
    assert_eq!(raw, b"Action,Time\nMarket buy,2025-03-03\n".to_vec());
    mock.assert();
}

#[test]
fn download_of_an_expired_link_is_fatal() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/expired.csv")
        .with_status(403)
        .create();

    let client = fast_client(&server);
    let link = format!("{}/expired.csv", server.url());
    let err = client.download(&link).unwrap_err();
    assert!(matches!(err, ExportError::DownloadFailed { status } if status.as_u16() == 403));
}
