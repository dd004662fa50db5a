use chrono::{Duration, NaiveDate, TimeZone, Utc};
use leadgrid::analytics::{
    CardMetric, Timeframe, calculate_analytics, card_chart_data, chart_data, date_range,
    percentage_change, period_labels,
};
use leadgrid::models::CallRecord;
use std::env;
use std::fs;

mod common;
use common::ts;

/// Saturday, 2025-10-18 12:00 UTC
fn now() -> chrono::DateTime<Utc> {
    ts(2025, 10, 18, 12, 0)
}

fn calls() -> Vec<CallRecord> {
    vec![
        CallRecord::new("c1", ts(2025, 10, 17, 10, 0), 5.0, 1.0),
        CallRecord::new("c2", ts(2025, 10, 15, 9, 30), 10.0, 3.0),
        // previous week
        CallRecord::new("c3", ts(2025, 10, 10, 16, 0), 5.0, 2.0),
    ]
}

#[test]
fn test_date_ranges() {
    let n = now().naive_utc();

    let daily = date_range(Timeframe::Daily, n);
    assert_eq!(daily.start, ts(2025, 10, 17, 12, 0).naive_utc());
    assert_eq!(daily.end, n);

    let weekly = date_range(Timeframe::Weekly, n);
    assert_eq!(weekly.start, ts(2025, 10, 11, 12, 0).naive_utc());

    let monthly = date_range(Timeframe::Monthly, n);
    let sep19 = NaiveDate::from_ymd_opt(2025, 9, 19).unwrap();
    assert_eq!(monthly.start, sep19.and_hms_opt(0, 0, 0).unwrap());
    let oct18 = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
    assert_eq!(monthly.end, oct18.and_hms_milli_opt(23, 59, 59, 999).unwrap());

    let prev = weekly.previous();
    assert_eq!(prev.end, weekly.start);
    assert_eq!(prev.start, ts(2025, 10, 4, 12, 0).naive_utc());
}

#[test]
fn test_percentage_change() {
    assert_eq!(percentage_change(5.0, 0.0), 0.0);
    assert_eq!(percentage_change(150.0, 100.0), 50.0);
    assert_eq!(percentage_change(50.0, 100.0), -50.0);
}

#[test]
fn test_weekly_summary_against_previous_week() {
    let s = calculate_analytics(&calls(), Timeframe::Weekly, &now());

    assert_eq!(s.total_minutes.value, 15.0);
    assert_eq!(s.total_minutes.change, 200.0);
    assert_eq!(s.total_calls.value, 2.0);
    assert_eq!(s.total_calls.change, 100.0);
    assert_eq!(s.total_spent.value, 4.0);
    assert_eq!(s.average_cost.value, 2.0);
    assert_eq!(s.average_cost.change, 0.0);
}

#[test]
fn test_empty_history() {
    let s = calculate_analytics(&[], Timeframe::Daily, &now());
    assert_eq!(s.total_calls.value, 0.0);
    assert_eq!(s.average_cost.value, 0.0);
    assert_eq!(s.total_calls.change, 0.0);
}

#[test]
fn test_period_labels() {
    let n = now().naive_utc();

    let daily = period_labels(Timeframe::Daily, n);
    assert_eq!(daily.len(), 24);
    assert_eq!(daily.first().unwrap(), "1PM");
    assert_eq!(daily.last().unwrap(), "12PM");

    let weekly = period_labels(Timeframe::Weekly, n);
    assert_eq!(weekly, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);

    let monthly = period_labels(Timeframe::Monthly, n);
    assert_eq!(monthly.len(), 30);
    assert_eq!(monthly.first().unwrap(), "Sep 19");
    assert_eq!(monthly.last().unwrap(), "Oct 18");
}

#[test]
fn test_weekly_chart_counts_per_day() {
    let points = chart_data(&calls(), Timeframe::Weekly, &now());
    assert_eq!(points.len(), 7);

    let count = |label: &str| points.iter().find(|p| p.name == label).unwrap().calls;
    assert_eq!(count("Fri"), 1);
    assert_eq!(count("Wed"), 1);
    assert_eq!(count("Mon"), 0);
}

#[test]
fn test_card_chart_padding() {
    let monthly = card_chart_data(&calls(), CardMetric::Calls, Timeframe::Monthly, &now());
    assert_eq!(monthly, vec![0.0, 0.0, 3.0]);

    // c1 and c2 share ISO week 42, c3 is before the range
    let weekly = card_chart_data(&calls(), CardMetric::Minutes, Timeframe::Weekly, &now());
    assert_eq!(weekly, vec![0.0, 0.0, 0.0, 15.0]);

    // nothing in the last 24 hours
    let daily = card_chart_data(&calls(), CardMetric::Spent, Timeframe::Daily, &now());
    assert_eq!(daily, vec![0.0; 7]);
}

#[test]
fn test_card_chart_ignores_calls_outside_range() {
    let history = vec![
        CallRecord::new("recent", now() - Duration::hours(1), 4.0, 2.5),
        CallRecord::new("old", now() - Duration::days(365), 9.0, 7.0),
    ];

    let daily = card_chart_data(&history, CardMetric::Calls, Timeframe::Daily, &now());
    assert_eq!(daily, vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

    let spent = card_chart_data(&history, CardMetric::Spent, Timeframe::Monthly, &now());
    assert_eq!(spent, vec![0.0, 0.0, 2.5]);
}

#[test]
fn test_other_time_zone_shifts_buckets() {
    let tz = chrono::FixedOffset::east_opt(3 * 3600).unwrap();
    let local_now = tz.with_ymd_and_hms(2025, 10, 18, 15, 0, 0).unwrap();
    // 22:30 UTC on the 17th is already the 18th at UTC+3
    let late = vec![CallRecord::new("x", ts(2025, 10, 17, 22, 30), 1.0, 1.0)];

    let points = chart_data(&late, Timeframe::Weekly, &local_now);
    assert_eq!(points.iter().find(|p| p.name == "Sat").unwrap().calls, 1);
}

#[test]
fn test_load_calls_from_json() {
    let mut path = env::temp_dir();
    path.push("leadgrid_calls_load.json");
    fs::write(
        &path,
        r#"[{"id":"a","started_at":"2025-10-17T10:00:00Z","duration_minutes":2.5,"cost":0.4},
            {"started_at":"2025-10-16T08:00:00Z"}]"#,
    )
    .unwrap();

    let calls = CallRecord::load_json(&path).unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].duration_minutes, 2.5);
    assert_eq!(calls[1].cost, 0.0);
    assert_eq!(calls[1].id, "");
}
