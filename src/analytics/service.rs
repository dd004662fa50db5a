use super::timeframe::{DateRange, Timeframe, bucket_label, date_range, percentage_change, period_labels};
use crate::models::CallRecord;
use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde::Serialize;
use std::collections::BTreeMap;

/// A total and its change versus the previous period, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricValue {
    pub value: f64,
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub timeframe: Timeframe,
    pub total_minutes: MetricValue,
    pub total_calls: MetricValue,
    pub total_spent: MetricValue,
    pub average_cost: MetricValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub calls: u64,
}

/// The series behind the small per-card charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMetric {
    Minutes,
    Calls,
    Spent,
    AverageCost,
}

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    minutes: f64,
    calls: f64,
    spent: f64,
}

impl Totals {
    fn add(&mut self, call: &CallRecord) {
        self.minutes += call.duration_minutes;
        self.calls += 1.0;
        self.spent += call.cost;
    }

    fn average_cost(&self) -> f64 {
        if self.calls == 0.0 {
            0.0
        } else {
            self.spent / self.calls
        }
    }

    fn metric(&self, metric: CardMetric) -> f64 {
        match metric {
            CardMetric::Minutes => self.minutes,
            CardMetric::Calls => self.calls,
            CardMetric::Spent => self.spent,
            CardMetric::AverageCost => self.average_cost(),
        }
    }
}

/// Call start times as wall-clock values in the zone of `now`.
fn local_times<'a, Tz: TimeZone>(
    calls: &'a [CallRecord],
    now: &DateTime<Tz>,
) -> impl Iterator<Item = (&'a CallRecord, NaiveDateTime)> {
    let tz = now.timezone();
    calls
        .iter()
        .map(move |c| (c, c.started_at.with_timezone(&tz).naive_local()))
}

fn totals_in<Tz: TimeZone>(calls: &[CallRecord], range: &DateRange, now: &DateTime<Tz>) -> Totals {
    let mut totals = Totals::default();
    for (call, at) in local_times(calls, now) {
        if range.contains(&at) {
            totals.add(call);
        }
    }
    totals
}

pub fn calculate_analytics<Tz: TimeZone>(
    calls: &[CallRecord],
    timeframe: Timeframe,
    now: &DateTime<Tz>,
) -> AnalyticsSummary {
    let range = date_range(timeframe, now.naive_local());
    let current = totals_in(calls, &range, now);
    let previous = totals_in(calls, &range.previous(), now);

    let metric = |m: CardMetric| MetricValue {
        value: current.metric(m),
        change: percentage_change(current.metric(m), previous.metric(m)),
    };

    AnalyticsSummary {
        timeframe,
        total_minutes: metric(CardMetric::Minutes),
        total_calls: metric(CardMetric::Calls),
        total_spent: metric(CardMetric::Spent),
        average_cost: metric(CardMetric::AverageCost),
    }
}

/// Calls per label over the current period. Every label is present, in
/// chronological order; calls sharing a label land in the same point.
pub fn chart_data<Tz: TimeZone>(
    calls: &[CallRecord],
    timeframe: Timeframe,
    now: &DateTime<Tz>,
) -> Vec<ChartPoint> {
    let naive_now = now.naive_local();
    let range = date_range(timeframe, naive_now);

    let mut points: Vec<ChartPoint> = Vec::new();
    for label in period_labels(timeframe, naive_now) {
        if !points.iter().any(|p| p.name == label) {
            points.push(ChartPoint { name: label, calls: 0 });
        }
    }

    for (_, at) in local_times(calls, now) {
        if !range.contains(&at) {
            continue;
        }
        let label = bucket_label(at, timeframe);
        if let Some(point) = points.iter_mut().find(|p| p.name == label) {
            point.calls += 1;
        }
    }

    points
}

fn card_bucket(t: NaiveDateTime, timeframe: Timeframe) -> String {
    let fmt = match timeframe {
        Timeframe::Daily => "%Y-%m-%d",
        Timeframe::Weekly => "%G-W%V",
        Timeframe::Monthly => "%Y-%m",
    };
    t.format(fmt).to_string()
}

fn min_card_points(timeframe: Timeframe) -> usize {
    match timeframe {
        Timeframe::Daily => 7,
        Timeframe::Weekly => 4,
        Timeframe::Monthly => 3,
    }
}

/// One value per day, ISO week or month for the calls inside the
/// timeframe's date range, oldest first. Short series are left-padded with
/// zeros.
pub fn card_chart_data<Tz: TimeZone>(
    calls: &[CallRecord],
    metric: CardMetric,
    timeframe: Timeframe,
    now: &DateTime<Tz>,
) -> Vec<f64> {
    let range = date_range(timeframe, now.naive_local());
    let mut buckets: BTreeMap<String, Totals> = BTreeMap::new();
    for (call, at) in local_times(calls, now).filter(|(_, at)| range.contains(at)) {
        buckets
            .entry(card_bucket(at, timeframe))
            .or_default()
            .add(call);
    }

    let values: Vec<f64> = buckets.values().map(|t| t.metric(metric)).collect();
    let min = min_card_points(timeframe);
    if values.len() >= min {
        return values;
    }

    let mut padded = vec![0.0; min - values.len()];
    padded.extend(values);
    padded
}
