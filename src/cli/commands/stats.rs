use crate::analytics::{AnalyticsSummary, MetricValue, calculate_analytics, chart_data};
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::CallRecord;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{money, percent_change};
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use chrono::Local;

const BAR_WIDTH: u64 = 40;

fn metric_row(label: &str, metric: &MetricValue, value: String) -> Vec<String> {
    vec![label.to_string(), value, percent_change(metric.change)]
}

fn summary_table(summary: &AnalyticsSummary) -> String {
    let mut table = Table::new(vec![
        Column::new("Metric", 20),
        Column::new("Value", 16),
        Column::new("Change", 10),
    ]);
    table.add_row(metric_row(
        "Total minutes",
        &summary.total_minutes,
        format!("{:.1}", summary.total_minutes.value),
    ));
    table.add_row(metric_row(
        "Number of calls",
        &summary.total_calls,
        format!("{}", summary.total_calls.value),
    ));
    table.add_row(metric_row(
        "Total spent",
        &summary.total_spent,
        money(summary.total_spent.value),
    ));
    table.add_row(metric_row(
        "Average cost",
        &summary.average_cost,
        money(summary.average_cost.value),
    ));
    table.render()
}

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Stats {
        calls,
        timeframe,
        json,
    } = cmd
    {
        let records = CallRecord::load_json(&expand_tilde(calls))?;
        let now = Local::now();
        let summary = calculate_analytics(&records, *timeframe, &now);

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        header(format!("Call analytics ({})", timeframe.as_str()));
        print!("{}", summary_table(&summary));

        let points = chart_data(&records, *timeframe, &now);
        let peak = points.iter().map(|p| p.calls).max().unwrap_or(0);
        if peak == 0 {
            info("No calls in this period.");
            return Ok(());
        }

        println!();
        let label_w = points.iter().map(|p| p.name.len()).max().unwrap_or(0);
        for p in &points {
            let bar = "█".repeat((p.calls * BAR_WIDTH / peak) as usize);
            println!("{:>w$} | {} {}", p.name, bar, p.calls, w = label_w);
        }
    }
    Ok(())
}
