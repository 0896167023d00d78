use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Answers to the EQ-5D-5L questionnaire: five 0–4 dimension levels plus the
/// 0–100 visual analogue scale. There is no client-computed index value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Eq5d5lAnswer {
    pub mobility: u8,
    pub self_care: u8,
    pub usual_activities: u8,
    pub pain_discomfort: u8,
    pub anxiety_depression: u8,
    pub health_vas: u8,
}

/// Body of `POST /sendEq5d5l`. Flat — the backend keeps no separate raw view
/// for this questionnaire. Field names are contractual.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Eq5d5lSubmission {
    pub mobility: u8,
    pub self_care: u8,
    pub usual_activities: u8,
    pub pain_discomfort: u8,
    pub anxiety_depression: u8,
    pub health_vas: u8,
    pub entry_date: jiff::civil::Date,
}
