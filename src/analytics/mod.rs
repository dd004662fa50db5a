//! Call-history analytics: totals per timeframe, change versus the previous
//! period and per-bucket chart series.

mod service;
mod timeframe;

pub use service::{
    AnalyticsSummary, CardMetric, ChartPoint, MetricValue, calculate_analytics, card_chart_data,
    chart_data,
};
pub use timeframe::{
    DateRange, Timeframe, bucket_label, date_range, percentage_change, period_labels,
};
