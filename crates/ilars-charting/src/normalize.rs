//! Calendar-date axis alignment.

use std::collections::HashMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One measurement on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeriesPoint {
    pub date: Date,
    pub value: f64,
}

/// The result of aligning N series: one shared ascending date axis and, per
/// input series, an array of the axis length with `None` where that series
/// has no measurement for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Aligned {
    pub axis: Vec<Date>,
    pub series: Vec<Vec<Option<f64>>>,
}

/// Reduce a backend date string to a calendar day. Accepts plain
/// `YYYY-MM-DD` or a timestamp with a `T…` suffix; anything the backend
/// should not have sent yields `None` and the point is skipped.
pub fn parse_point_date(raw: &str) -> Option<Date> {
    let day = raw.split('T').next().unwrap_or(raw);
    day.parse().ok()
}

/// Align series onto the ascending union of their calendar dates.
///
/// Days are deduplicated by calendar date; if a series has several points on
/// the same day, the last one wins. No series → empty axis; an empty series
/// aligns to all-`None`. Missing days stay `None` so the renderer draws a
/// gap rather than interpolating across days with no data.
pub fn align(series: &[Vec<SeriesPoint>]) -> Aligned {
    let by_day: Vec<HashMap<Date, f64>> = series
        .iter()
        .map(|s| s.iter().map(|p| (p.date, p.value)).collect())
        .collect();

    let mut axis: Vec<Date> = by_day.iter().flat_map(|m| m.keys().copied()).collect();
    axis.sort();
    axis.dedup();

    let series = by_day
        .iter()
        .map(|m| axis.iter().map(|day| m.get(day).copied()).collect())
        .collect();

    Aligned { axis, series }
}
