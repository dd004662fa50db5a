use chrono::{Duration, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Daily,
    Weekly,
    Monthly,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Daily => "daily",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
        }
    }

    /// chrono format of the chart labels.
    fn label_format(&self) -> &'static str {
        match self {
            Timeframe::Daily => "%-I%p",   // 1AM, 4PM
            Timeframe::Weekly => "%a",     // Mon, Tue
            Timeframe::Monthly => "%b %-d", // Jan 1
        }
    }
}

/// Inclusive window of wall-clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn contains(&self, t: &NaiveDateTime) -> bool {
        *t >= self.start && *t <= self.end
    }

    pub fn length(&self) -> Duration {
        self.end - self.start
    }

    /// Same-length window ending where this one starts.
    pub fn previous(&self) -> DateRange {
        let len = self.length();
        DateRange {
            start: self.start - len,
            end: self.end - len,
        }
    }
}

/// Daily: the last 24 hours. Weekly: the last 7 days. Monthly: 30 whole
/// days, from midnight 29 days ago to the end of today.
pub fn date_range(timeframe: Timeframe, now: NaiveDateTime) -> DateRange {
    match timeframe {
        Timeframe::Daily => DateRange {
            start: now - Duration::hours(24),
            end: now,
        },
        Timeframe::Weekly => DateRange {
            start: now - Duration::days(7),
            end: now,
        },
        Timeframe::Monthly => {
            let today = now.date();
            let end_of_day =
                NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
            DateRange {
                start: (today - Duration::days(29)).and_time(NaiveTime::MIN),
                end: today.and_time(end_of_day),
            }
        }
    }
}

/// Chart labels, oldest first: 24 hours, 7 weekdays or 30 days.
pub fn period_labels(timeframe: Timeframe, now: NaiveDateTime) -> Vec<String> {
    let (count, step) = match timeframe {
        Timeframe::Daily => (24, Duration::hours(1)),
        Timeframe::Weekly => (7, Duration::days(1)),
        Timeframe::Monthly => (30, Duration::days(1)),
    };
    (0..count)
        .rev()
        .map(|i| bucket_label(now - step * i, timeframe))
        .collect()
}

pub fn bucket_label(t: NaiveDateTime, timeframe: Timeframe) -> String {
    t.format(timeframe.label_format()).to_string()
}

/// Percentage delta; 0 when there is nothing to compare against.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}
