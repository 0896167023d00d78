//! Typed series extraction from wire points.
//!
//! Points with a missing or unparseable date are skipped; the rest of the
//! series still charts.

use ilars_core::models::series::{DailyLogPoint, ScorePoint, StepsPoint};

use crate::normalize::{SeriesPoint, parse_point_date};

/// Which metric of the daily log to extract as a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyMetric {
    StoolCount,
    Bloating,
    ImpactScore,
    TotalFoodServings,
}

/// LARS or EQ-5D-5L history points → series.
pub fn score_series(points: &[ScorePoint]) -> Vec<SeriesPoint> {
    points
        .iter()
        .filter_map(|p| {
            Some(SeriesPoint {
                date: parse_point_date(p.date.as_deref()?)?,
                value: p.value()?,
            })
        })
        .collect()
}

/// Wearable step counts → series.
pub fn steps_series(points: &[StepsPoint]) -> Vec<SeriesPoint> {
    points
        .iter()
        .filter_map(|p| {
            Some(SeriesPoint {
                date: parse_point_date(p.date.as_deref()?)?,
                value: p.steps,
            })
        })
        .collect()
}

/// One metric of the daily log → series.
pub fn daily_series(points: &[DailyLogPoint], metric: DailyMetric) -> Vec<SeriesPoint> {
    points
        .iter()
        .filter_map(|p| {
            let value = match metric {
                DailyMetric::StoolCount => p.stool_count,
                DailyMetric::Bloating => p.bloating,
                DailyMetric::ImpactScore => p.impact_score,
                DailyMetric::TotalFoodServings => total_food_servings(p),
            };
            Some(SeriesPoint {
                date: parse_point_date(p.date.as_deref()?)?,
                value,
            })
        })
        .collect()
}

/// Sum of all food serving counts logged for one day.
pub fn total_food_servings(point: &DailyLogPoint) -> f64 {
    point.food.values().sum()
}
