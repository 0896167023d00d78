use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("{questionnaire}: option index {index} for '{item}' exceeds {max}")]
    InvalidIndex {
        questionnaire: &'static str,
        item: &'static str,
        index: u8,
        max: u8,
    },

    #[error("{questionnaire}: '{item}' value {value} is outside [{min}, {max}]")]
    OutOfRange {
        questionnaire: &'static str,
        item: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("{questionnaire}: unknown item '{item}'")]
    UnknownItem {
        questionnaire: &'static str,
        item: String,
    },
}
