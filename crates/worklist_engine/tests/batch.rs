use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use worklist_core::{ItemStatus, Remark};
use worklist_engine::{BatchRunner, SimulatedProcessor, SimulatedSettings, Timestamper};

const STAMP: &str = "2026-08-08 12:00:00";

fn fixed_clock() -> Timestamper {
    Arc::new(|| STAMP.to_string())
}

fn fast_settings() -> SimulatedSettings {
    SimulatedSettings {
        delay: Duration::from_millis(10),
        timeout: Duration::from_secs(1),
    }
}

fn runner(settings: SimulatedSettings) -> BatchRunner {
    BatchRunner::new(Arc::new(
        SimulatedProcessor::new(settings).with_clock(fixed_clock()),
    ))
}

fn items(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn every_input_yields_one_record_in_order() {
    let input = items(&["https://example.com", "not a url", "https://example.org"]);
    let report = runner(fast_settings()).run(&input).await;

    assert_eq!(report.records.len(), 3);
    assert_eq!(
        report.records.iter().map(|r| r.index).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    // The invalid middle item fails for validation reasons; its neighbours
    // never do.
    assert_eq!(report.records[1].status, ItemStatus::Failure);
    assert_eq!(report.records[1].remark, Remark::InvalidInput);
    assert_ne!(report.records[0].remark, Remark::InvalidInput);
    assert_ne!(report.records[2].remark, Remark::InvalidInput);

    assert_eq!(report.stats.total, 3);
    assert_eq!(report.stats.success, 2);
    assert_eq!(report.stats.failure, 1);
}

#[tokio::test]
async fn all_success_batch_counts_and_rate() {
    let input = items(&["https://a.example", "https://b.example", "https://c.example"]);
    let report = runner(fast_settings()).run(&input).await;

    assert!(report
        .records
        .iter()
        .all(|r| r.status == ItemStatus::Success));
    assert_eq!(report.stats.success, 3);
    assert_eq!(report.stats.failure, 0);
    assert_eq!(report.stats.success_rate(), 100.0);
}

#[tokio::test]
async fn success_detail_is_the_canned_completion_string() {
    let input = items(&["https://example.com"]);
    let report = runner(fast_settings()).run(&input).await;

    assert_eq!(
        report.records[0].detail,
        "processing complete: https://example.com"
    );
    assert_eq!(report.records[0].completed_at, STAMP);
}

#[tokio::test]
async fn empty_input_yields_an_empty_report() {
    let report = runner(fast_settings()).run(&[]).await;
    assert!(report.records.is_empty());
    assert_eq!(report.stats.total, 0);
    assert_eq!(report.stats.success_rate(), 0.0);
}

#[tokio::test]
async fn item_exceeding_the_deadline_fails_with_timeout() {
    let settings = SimulatedSettings {
        delay: Duration::from_millis(100),
        timeout: Duration::from_millis(10),
    };
    let report = runner(settings)
        .run(&items(&["https://example.com", "https://example.org"]))
        .await;

    // The deadline is per item; a timed-out item never skips its successor.
    assert_eq!(report.records.len(), 2);
    for record in &report.records {
        assert_eq!(record.status, ItemStatus::Failure);
        assert_eq!(record.remark, Remark::Timeout);
        assert!(record.detail.contains("timed out after"));
    }
}

#[tokio::test]
async fn validation_failure_records_cover_empty_and_schemeless_input() {
    let input = items(&["", "example.com"]);
    let report = runner(fast_settings()).run(&input).await;

    for record in &report.records {
        assert_eq!(record.status, ItemStatus::Failure);
        assert_eq!(record.remark, Remark::InvalidInput);
    }
    assert_eq!(report.records[0].detail, "input is empty");
}
