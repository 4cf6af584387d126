//! Frontend Models
//!
//! Data structures matching the nutrition API payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar dates on the wire and in the date picker
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A logged food item (per-serving values, multiplied by `quantity`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u32,
    /// The server sends the raw `food_name` column
    #[serde(alias = "food_name")]
    pub name: String,
    pub quantity: f64,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub log_date: String,
}

impl LogEntry {
    /// This entry's share of the day: per-serving values times quantity
    pub fn contribution(&self) -> DailyTotals {
        DailyTotals {
            calories: self.calories * self.quantity,
            protein: self.protein * self.quantity,
            fat: self.fat * self.quantity,
            carbs: self.carbs * self.quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl DailyTotals {
    fn add(self, other: DailyTotals) -> DailyTotals {
        DailyTotals {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
        }
    }

    /// Equal within floating point noise
    pub fn approx_eq(&self, other: &DailyTotals) -> bool {
        const EPSILON: f64 = 1e-6;
        (self.calories - other.calories).abs() < EPSILON
            && (self.protein - other.protein).abs() < EPSILON
            && (self.fat - other.fat).abs() < EPSILON
            && (self.carbs - other.carbs).abs() < EPSILON
    }
}

/// Response of `GET /api/logs/by-date`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyLog {
    #[serde(default)]
    pub date: Option<String>,
    pub entries: Vec<LogEntry>,
    pub totals: DailyTotals,
}

impl DailyLog {
    /// Client-side Σ(value × quantity); only used to cross-check the server
    pub fn summed_totals(&self) -> DailyTotals {
        self.entries
            .iter()
            .map(LogEntry::contribution)
            .fold(DailyTotals::default(), DailyTotals::add)
    }
}

/// A candidate food from search (per serving)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// One day (week window) or one month (month window) of calories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatePoint {
    /// `YYYY-MM-DD` for week, `YYYY-MM` for month; never re-parsed
    pub log_date: String,
    pub t_calories: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateWindow {
    Week,
    Month,
}

impl AggregateWindow {
    pub fn as_param(&self) -> &'static str {
        match self {
            AggregateWindow::Week => "week",
            AggregateWindow::Month => "month",
        }
    }
}

/// Body of `POST /api/log`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLogEntry {
    pub name: String,
    pub quantity: f64,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub log_date: NaiveDate,
}

impl NewLogEntry {
    pub fn from_search_result(food: &SearchResult, quantity: f64, log_date: NaiveDate) -> Self {
        Self {
            name: food.name.clone(),
            quantity,
            calories: food.calories,
            protein: food.protein,
            fat: food.fat,
            carbs: food.carbs,
            log_date,
        }
    }
}

/// Daily targets used for progress bars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Goals {
    pub const DEFAULT: Goals = Goals {
        calories: 2000.0,
        protein: 150.0,
        fat: 65.0,
        carbs: 250.0,
    };
}

impl Default for Goals {
    fn default() -> Self {
        Goals::DEFAULT
    }
}
