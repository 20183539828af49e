//! End-to-end batch runs against the file-backed store.

use std::sync::Arc;

use strata_core::calendars::WeekendCalendar;
use strata_core::types::{Date, SettlementQuote};
use strata_curves::assembler::OutlierPolicy;
use strata_pipeline::config::PipelineConfig;
use strata_pipeline::driver::Pipeline;
use strata_pipeline::feed::StaticFeed;
use strata_store::{JsonlStore, SurfaceStore};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn date(day: u32) -> Date {
    Date::from_ymd(2024, 6, day).unwrap()
}

fn quote(refdate: Date, code: &str, settlement: f64) -> SettlementQuote {
    SettlementQuote {
        reference_date: refdate,
        commodity: "DI1".into(),
        contract: code.parse().unwrap(),
        previous_settlement: settlement,
        settlement,
        change: 0.0,
    }
}

fn table(refdate: Date, bump: f64) -> Vec<SettlementQuote> {
    vec![
        quote(refdate, "F25", 95_000.0),
        quote(refdate, "F26", 86_000.0),
        quote(refdate, "F27", 76_500.0 - bump),
    ]
}

fn config(policy: OutlierPolicy) -> PipelineConfig {
    PipelineConfig {
        epoch: date(14), // Friday before the test week
        outlier_policy: policy,
        ..PipelineConfig::default()
    }
}

#[tokio::test]
async fn test_batch_survives_process_restart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.jsonl");

    // First run covers only Monday the 17th
    let mut feed = StaticFeed::new();
    feed.insert(date(17), table(date(17), 0.0));
    let pipeline = Pipeline::new(
        feed,
        JsonlStore::new(&path),
        Arc::new(WeekendCalendar),
        config(OutlierPolicy::None),
    );
    let summary = pipeline.run(date(18)).await.unwrap();
    assert_eq!(summary.appended, 1);
    drop(pipeline);

    // A new process picks up at the durable checkpoint, not the epoch
    let mut feed = StaticFeed::new();
    feed.insert(date(18), table(date(18), 200.0));
    feed.insert(date(19), table(date(19), 400.0));
    let pipeline = Pipeline::new(
        feed,
        JsonlStore::new(&path),
        Arc::new(WeekendCalendar),
        config(OutlierPolicy::None),
    );
    let summary = pipeline.run(date(20)).await.unwrap();
    assert_eq!(summary.scanned, 2);
    assert_eq!(summary.appended, 2);
    assert_eq!(summary.checkpoint, Some(date(19)));

    let rows = JsonlStore::new(&path).load().await.unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows
        .windows(2)
        .all(|w| w[0].reference_date < w[1].reference_date));
}

#[tokio::test]
async fn test_dropped_tail_row_stays_dropped_across_restart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.jsonl");

    // Rising prices mean falling rates: Wednesday holds the long-end
    // minimum and the outlier pass drops the newest row of the batch
    let week_feed = || {
        let mut feed = StaticFeed::new();
        for (i, day) in (17..=19).enumerate() {
            feed.insert(date(day), table(date(day), -(i as f64) * 200.0));
        }
        feed
    };

    let pipeline = Pipeline::new(
        week_feed(),
        JsonlStore::new(&path),
        Arc::new(WeekendCalendar),
        config(OutlierPolicy::DropLongEndMinimum),
    );
    let first = pipeline.run(date(20)).await.unwrap();
    assert_eq!(first.appended, 2);
    assert_eq!(first.checkpoint, Some(date(19)));
    drop(pipeline);

    // A restarted process must not re-enter the dropped Wednesday
    let pipeline = Pipeline::new(
        week_feed(),
        JsonlStore::new(&path),
        Arc::new(WeekendCalendar),
        config(OutlierPolicy::DropLongEndMinimum),
    );
    let second = pipeline.run(date(20)).await.unwrap();
    assert_eq!(second.scanned, 0);
    assert_eq!(second.appended, 0);

    let rows = JsonlStore::new(&path).load().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.reference_date != date(19)));
}

#[tokio::test]
async fn test_toml_config_drives_the_run() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.jsonl");

    let cfg = PipelineConfig::from_toml(
        r#"
        commodity = "DI1"
        epoch = "2024-06-14"
        outlier_policy = "drop_long_end_minimum"
        "#,
    )
    .unwrap();

    let mut feed = StaticFeed::new();
    for (i, day) in (17..=19).enumerate() {
        feed.insert(date(day), table(date(day), i as f64 * 200.0));
    }
    let pipeline = Pipeline::new(
        feed,
        JsonlStore::new(&path),
        Arc::new(WeekendCalendar),
        cfg,
    );
    let summary = pipeline.run(date(20)).await.unwrap();

    // Monday holds the long-end minimum and is dropped by the policy
    assert_eq!(summary.appended, 2);
    let rows = JsonlStore::new(&path).load().await.unwrap();
    assert_eq!(rows[0].reference_date, date(18));
    assert_eq!(rows[1].reference_date, date(19));
}
