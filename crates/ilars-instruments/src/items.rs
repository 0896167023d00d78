use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// How an item is answered and which values it accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ItemKind {
    /// One of a fixed option list; the answer is the option index. The labels
    /// are i18n keys resolved by the rendering layer.
    Options { option_label_keys: Vec<String> },
    /// A non-negative count with an upper bound (e.g., stools per day).
    Count { max: u32 },
    /// An integer rating on an inclusive scale (e.g., 0–10 slider).
    Scale { min: u8, max: u8 },
    /// Bristol stool form, 1–7.
    Bristol,
}

impl ItemKind {
    /// Inclusive valid range for answers to an item of this kind.
    pub fn range(&self) -> (f64, f64) {
        match self {
            ItemKind::Options { option_label_keys } => {
                (0.0, option_label_keys.len().saturating_sub(1) as f64)
            }
            ItemKind::Count { max } => (0.0, f64::from(*max)),
            ItemKind::Scale { min, max } => (f64::from(*min), f64::from(*max)),
            ItemKind::Bristol => (1.0, 7.0),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let (min, max) = self.range();
        value >= min && value <= max && value.fract() == 0.0
    }
}

/// One question of a questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub label_key: String,
    pub kind: ItemKind,
}

/// An answer to a single item, provided by the form for validation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemValue {
    pub item_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_id: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub message: String,
}
