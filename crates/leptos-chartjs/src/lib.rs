//! Leptos Chart.js Utilities
//!
//! Persistent Chart.js instances for Leptos views.
//! Each slot owns exactly one chart for the life of the page; later renders
//! replace the data in place and redraw instead of building a new chart.

mod backend;
mod canvas;
mod config;
mod slots;

pub use backend::{ChartBackend, ChartError, ChartJs, JsChart};
pub use canvas::ChartCanvas;
pub use config::{ChartConfig, ChartData, ChartKind, Colors, Dataset};
pub use slots::{ChartSlotKey, ChartSlots};
