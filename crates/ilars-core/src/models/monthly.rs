use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Answers to the monthly quality-of-life questionnaire: five 1–4 impact
/// ratings and two 0–10 ratings (control, satisfaction).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthlyAnswer {
    pub avoid_travel: u8,
    pub avoid_social: u8,
    pub embarrassed: u8,
    pub worry_notice: u8,
    pub depressed: u8,
    pub control: u8,
    pub satisfaction: u8,
}

/// Body of `POST /sendMonthly`. Field names are contractual.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthlySubmission {
    pub entry_date: jiff::civil::Date,
    pub qol_score: u8,
    pub raw_data: MonthlyRawData,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthlyRawData {
    pub avoid_travel: u8,
    pub avoid_social: u8,
    pub embarrassed: u8,
    pub worry_notice: u8,
    pub depressed: u8,
    pub control: u8,
    pub satisfaction: u8,
}
