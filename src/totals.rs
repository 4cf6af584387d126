//! Daily Totals Rendering
//!
//! Turns the server's totals into rounded displays and goal progress.
//! Totals are never re-summed here.

use crate::models::{DailyTotals, Goals};
use crate::view::round_display;

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    pub label: &'static str,
    pub unit: &'static str,
    pub current: i64,
    pub goal: i64,
    /// Bar width in percent, 0..=100
    pub width_percent: u32,
}

impl ProgressBar {
    fn new(label: &'static str, unit: &'static str, value: f64, goal: f64) -> Self {
        Self {
            label,
            unit,
            current: round_display(value),
            goal: round_display(goal),
            width_percent: progress_percent(value, goal),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TotalsView {
    pub calories: i64,
    pub protein: i64,
    pub fat: i64,
    pub carbs: i64,
    pub progress: Vec<ProgressBar>,
}

impl TotalsView {
    pub fn new(totals: &DailyTotals, goals: &Goals) -> Self {
        Self {
            calories: round_display(totals.calories),
            protein: round_display(totals.protein),
            fat: round_display(totals.fat),
            carbs: round_display(totals.carbs),
            progress: vec![
                ProgressBar::new("Calories", "kcal", totals.calories, goals.calories),
                ProgressBar::new("Protein", "g", totals.protein, goals.protein),
                ProgressBar::new("Fat", "g", totals.fat, goals.fat),
                ProgressBar::new("Carbs", "g", totals.carbs, goals.carbs),
            ],
        }
    }
}

impl Default for TotalsView {
    fn default() -> Self {
        TotalsView::new(&DailyTotals::default(), &Goals::DEFAULT)
    }
}

/// `min(100, round(100 * value / goal))`, never below zero
pub fn progress_percent(value: f64, goal: f64) -> u32 {
    if goal <= 0.0 || !value.is_finite() {
        return 0;
    }
    (100.0 * value / goal).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_are_rounded_not_resummed() {
        let totals = DailyTotals {
            calories: 400.4,
            protein: 20.5,
            fat: 9.6,
            carbs: 40.0,
        };
        let view = TotalsView::new(&totals, &Goals::DEFAULT);
        assert_eq!((view.calories, view.protein, view.fat, view.carbs), (400, 21, 10, 40));
    }

    #[test]
    fn test_progress_percent_clamps() {
        assert_eq!(progress_percent(1000.0, 2000.0), 50);
        assert_eq!(progress_percent(2500.0, 2000.0), 100);
        assert_eq!(progress_percent(20.0, 150.0), 13);
        assert_eq!(progress_percent(0.0, 65.0), 0);
        assert_eq!(progress_percent(-5.0, 65.0), 0);
        assert_eq!(progress_percent(10.0, 0.0), 0);
    }

    #[test]
    fn test_progress_bars_follow_goals() {
        let totals = DailyTotals {
            calories: 400.0,
            protein: 20.0,
            fat: 10.0,
            carbs: 40.0,
        };
        let view = TotalsView::new(&totals, &Goals::DEFAULT);
        let widths: Vec<u32> = view.progress.iter().map(|bar| bar.width_percent).collect();
        assert_eq!(widths, vec![20, 13, 15, 16]);
        assert_eq!(view.progress[0].goal, 2000);
        assert_eq!(view.progress[3].current, 40);
    }
}
