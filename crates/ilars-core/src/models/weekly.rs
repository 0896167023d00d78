use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Answers to the five weekly LARS questions, as option indices into the
/// rendered option lists (3 options each, except bowel frequency with 4).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeeklyAnswer {
    pub flatus: u8,
    pub liquid: u8,
    pub frequency: u8,
    pub repeat: u8,
    pub urgency: u8,
}

/// Body of `POST /sendWeekly`. Field names are contractual.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeeklySubmission {
    pub flatus_control: u8,
    pub liquid_stool_leakage: u8,
    pub bowel_frequency: u8,
    pub repeat_bowel_opening: u8,
    pub urgency_to_toilet: u8,
    pub entry_date: jiff::civil::Date,
    pub raw_data: WeeklyRawData,
}

/// Audit view persisted alongside the top-level weekly fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeeklyRawData {
    pub total_score: u8,
}
