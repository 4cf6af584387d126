//! Chart.js configuration model
//!
//! Serializes to the `{ type, data, options }` object Chart.js expects.

use serde::Serialize;

/// Chart type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

/// One color for the whole dataset, or one per data point
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerPoint(Vec<String>),
}

impl Colors {
    pub fn single(color: &str) -> Self {
        Colors::Single(color.to_string())
    }

    pub fn per_point(colors: &[&str]) -> Self {
        Colors::PerPoint(colors.iter().map(|c| c.to_string()).collect())
    }
}

/// A single data series
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl Dataset {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data, ..Default::default() }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn background(mut self, colors: Colors) -> Self {
        self.background_color = Some(colors);
        self
    }

    pub fn border(mut self, colors: Colors) -> Self {
        self.border_color = Some(colors);
        self
    }

    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// The part of a chart that gets swapped on every update
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Full chart configuration, used only when the instance is first built
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: serde_json::Value,
}

impl ChartConfig {
    pub fn new(kind: ChartKind, data: ChartData) -> Self {
        Self {
            kind,
            data,
            options: serde_json::json!({ "responsive": true }),
        }
    }

    pub fn with_options(mut self, options: serde_json::Value) -> Self {
        self.options = options;
        self
    }
}
