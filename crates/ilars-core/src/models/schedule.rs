use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The four questionnaire types the app can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionnaireType {
    Daily,
    Weekly,
    Monthly,
    Eq5d5l,
}

/// Response of `GET /getNextQuestionnaire`: which questionnaire the patient
/// should fill next, if any.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NextQuestionnaire {
    pub status: String,
    #[serde(default)]
    pub questionnaire_type: Option<QuestionnaireType>,
    #[serde(default)]
    pub is_today_filled: bool,
    #[serde(default)]
    pub reason: Option<String>,
}
