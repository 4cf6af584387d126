//! Chart Specs
//!
//! The four chart slots on the page and the Chart.js configs fed to them.

use leptos_chartjs::{ChartConfig, ChartData, ChartKind, ChartSlotKey, Colors, Dataset};
use serde_json::json;

use crate::models::{AggregatePoint, DailyTotals};

const GREEN: &str = "#4ade80";
const BLUE: &str = "#60a5fa";
const RED: &str = "#f87171";
const YELLOW: &str = "#facc15";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    DailyBar,
    DailyPie,
    TrendLine,
    MonthlyBar,
}

impl ChartSlotKey for ChartSlot {
    fn canvas_id(&self) -> &'static str {
        match self {
            ChartSlot::DailyBar => "dailyBarChart",
            ChartSlot::DailyPie => "dailyPieChart",
            ChartSlot::TrendLine => "trendChart",
            ChartSlot::MonthlyBar => "monthlyChart",
        }
    }
}

/// Calories and the three macros side by side
pub fn daily_bar(totals: &DailyTotals) -> ChartConfig {
    let data = ChartData {
        labels: labels(&["Calories", "Protein", "Fat", "Carbs"]),
        datasets: vec![Dataset::new(vec![totals.calories, totals.protein, totals.fat, totals.carbs])
            .label("Daily Intake")
            .background(Colors::per_point(&[GREEN, BLUE, RED, YELLOW]))
            .border_width(1)],
    };
    ChartConfig::new(ChartKind::Bar, data).with_options(json!({
        "responsive": true,
        "plugins": {
            "legend": { "display": false },
            "title": { "display": false }
        },
        "scales": { "y": { "beginAtZero": true } }
    }))
}

/// Macro split only
pub fn daily_pie(totals: &DailyTotals) -> ChartConfig {
    let data = ChartData {
        labels: labels(&["Protein", "Fat", "Carbs"]),
        datasets: vec![Dataset::new(vec![totals.protein, totals.fat, totals.carbs])
            .background(Colors::per_point(&[BLUE, RED, YELLOW]))],
    };
    ChartConfig::new(ChartKind::Pie, data).with_options(json!({
        "responsive": true,
        "plugins": { "legend": { "position": "bottom" } }
    }))
}

pub fn trend_line(points: &[AggregatePoint]) -> ChartConfig {
    let (labels, values) = series(points);
    let data = ChartData {
        labels,
        datasets: vec![Dataset::new(values)
            .label("Calories")
            .border(Colors::single(GREEN))
            .fill(false)],
    };
    ChartConfig::new(ChartKind::Line, data).with_options(legend_options())
}

pub fn monthly_bar(points: &[AggregatePoint]) -> ChartConfig {
    let (labels, values) = series(points);
    let data = ChartData {
        labels,
        datasets: vec![Dataset::new(values)
            .label("Monthly Calories")
            .background(Colors::single(BLUE))],
    };
    ChartConfig::new(ChartKind::Bar, data).with_options(legend_options())
}

fn legend_options() -> serde_json::Value {
    json!({
        "responsive": true,
        "plugins": { "legend": { "display": true } }
    })
}

/// Labels and values in server order
fn series(points: &[AggregatePoint]) -> (Vec<String>, Vec<f64>) {
    points
        .iter()
        .map(|point| (point.log_date.clone(), point.t_calories))
        .unzip()
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
