//! Food-group and drink aggregates for the doctor dashboard.
//!
//! A key absent from a logged day's map counts as zero servings — within a
//! submitted day the key set is complete, so this only covers partial legacy
//! rows. Whole missing days are handled by alignment, not here.

use ilars_core::models::series::DailyLogPoint;

use crate::normalize::{SeriesPoint, parse_point_date};

/// Food groups plotted against the LARS score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodGroup {
    Vegetables,
    Fruits,
    Grains,
}

impl FoodGroup {
    /// The daily-log food keys summed into this group.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            FoodGroup::Vegetables => &["vegetables_all_types", "root_vegetables"],
            FoodGroup::Fruits => &["fruits_with_skin", "berries_any"],
            FoodGroup::Grains => &["whole_grains", "whole_grain_bread"],
        }
    }
}

/// Per-day serving totals for one food group.
pub fn food_group_series(points: &[DailyLogPoint], group: FoodGroup) -> Vec<SeriesPoint> {
    points
        .iter()
        .filter_map(|p| {
            let value = group
                .keys()
                .iter()
                .map(|key| p.food.get(*key).copied().unwrap_or(0.0))
                .sum();
            Some(SeriesPoint {
                date: parse_point_date(p.date.as_deref()?)?,
                value,
            })
        })
        .collect()
}

/// Per-day serving counts for one drink key (e.g., "water", "coffee").
pub fn drink_series(points: &[DailyLogPoint], key: &str) -> Vec<SeriesPoint> {
    points
        .iter()
        .filter_map(|p| {
            Some(SeriesPoint {
                date: parse_point_date(p.date.as_deref()?)?,
                value: p.drink.get(key).copied().unwrap_or(0.0),
            })
        })
        .collect()
}
