use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One dated score as it arrives over the wire. The date is kept as the raw
/// string because some backend endpoints return plain `YYYY-MM-DD` and others
/// a full timestamp with a `T…` suffix; charting reduces it to a calendar day.
///
/// Older LARS history rows carry `total_score` instead of `score` — use
/// [`ScorePoint::value`] rather than reading either field directly.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScorePoint {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub total_score: Option<f64>,
}

impl ScorePoint {
    /// The score of this point, preferring `score` over the legacy
    /// `total_score` field.
    pub fn value(&self) -> Option<f64> {
        self.score.or(self.total_score)
    }
}

/// One day of the daily questionnaire log as returned for doctor charts.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyLogPoint {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub food: HashMap<String, f64>,
    #[serde(default)]
    pub drink: HashMap<String, f64>,
    #[serde(default)]
    pub stool_count: f64,
    #[serde(default)]
    pub bloating: f64,
    #[serde(default)]
    pub impact_score: f64,
}

/// One day of wearable step data.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StepsPoint {
    #[serde(default)]
    pub date: Option<String>,
    pub steps: f64,
}

/// Envelope of `GET /getLarsData` and the analogous EQ-5D-5L history
/// endpoint: `{"status": "ok", "data": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartDataResponse {
    pub status: String,
    #[serde(default)]
    pub data: Vec<ScorePoint>,
}
