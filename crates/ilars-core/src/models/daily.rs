use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The fixed food item keys of the daily questionnaire. `food_consumption`
/// in a daily submission carries exactly these keys.
pub const FOOD_KEYS: [&str; 10] = [
    "vegetables_all_types",
    "root_vegetables",
    "whole_grains",
    "whole_grain_bread",
    "nuts_and_seeds",
    "legumes",
    "fruits_with_skin",
    "berries_any",
    "soft_fruits_without_skin",
    "muesli_and_bran_cereals",
];

/// The fixed drink item keys of the daily questionnaire.
pub const DRINK_KEYS: [&str; 8] = [
    "water",
    "coffee",
    "tea",
    "alcohol",
    "carbonated_drinks",
    "juices",
    "dairy_drinks",
    "energy_drinks",
];

/// Yes/no answer, stored by the backend as the literal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum YesNo {
    Yes,
    No,
}

/// Leakage kind for the daily leakage question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Leakage {
    None,
    Liquid,
    Solid,
}

/// Answers to the daily questionnaire. Serving counts are keyed by
/// [`FOOD_KEYS`]/[`DRINK_KEYS`]; keys the form left untouched may be absent
/// and default to 0 when the submission is built.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyAnswer {
    pub stool_count: u32,
    pub pads_used: u32,
    pub urgency: YesNo,
    pub night_stools: YesNo,
    pub leakage: Leakage,
    pub incomplete_evacuation: YesNo,
    pub bloating: u8,
    pub impact_score: u8,
    pub activity_interfere: u8,
    pub bristol_scale: u8,
    pub food_servings: HashMap<String, u8>,
    pub drink_servings: HashMap<String, u8>,
}

/// Body of `POST /sendDaily`. Field names are contractual.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailySubmission {
    pub entry_date: jiff::civil::Date,
    pub bristol_scale: u8,
    pub food_consumption: HashMap<String, u8>,
    pub drink_consumption: HashMap<String, u8>,
    pub raw_data: DailyRawData,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyRawData {
    pub stool_count: u32,
    pub pads_used: u32,
    pub urgency: YesNo,
    pub night_stools: YesNo,
    pub leakage: Leakage,
    pub incomplete_evacuation: YesNo,
    pub bloating: u8,
    pub impact_score: u8,
    pub activity_interfere: u8,
}
