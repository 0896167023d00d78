//! LARS and QoL scoring.
//!
//! The LARS weight table is fixed by the validated instrument and must be
//! identical across implementations. Out-of-range option indices are loud
//! errors — the engine never produces a silent wrong total.

use ilars_core::models::weekly::WeeklyAnswer;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;

/// Per-question option weights for the five LARS questions, in form order:
/// flatus control, liquid stool leakage, bowel frequency, repeat bowel
/// opening, urgency. Totals span 0–42.
pub const LARS_SCORE_TABLE: [&[u8]; 5] = [
    &[0, 4, 7],
    &[0, 3, 3],
    &[4, 2, 0, 5],
    &[0, 9, 11],
    &[0, 11, 16],
];

/// Maximum attainable LARS total.
pub const LARS_MAX: u8 = 42;

fn weight(row: usize, item: &'static str, index: u8) -> Result<u8, InstrumentError> {
    let options = LARS_SCORE_TABLE[row];
    options
        .get(usize::from(index))
        .copied()
        .ok_or(InstrumentError::InvalidIndex {
            questionnaire: "weekly",
            item,
            index,
            max: (options.len() - 1) as u8,
        })
}

/// Total LARS score for one weekly answer set.
pub fn lars_total(answer: &WeeklyAnswer) -> Result<u8, InstrumentError> {
    Ok(weight(0, "flatus_control", answer.flatus)?
        + weight(1, "liquid_stool_leakage", answer.liquid)?
        + weight(2, "bowel_frequency", answer.frequency)?
        + weight(3, "repeat_bowel_opening", answer.repeat)?
        + weight(4, "urgency_to_toilet", answer.urgency)?)
}

/// Monthly QoL composite: round-half-up mean of the two 0–10 ratings.
pub fn qol_score(control: u8, satisfaction: u8) -> Result<u8, InstrumentError> {
    for (item, value) in [("control", control), ("satisfaction", satisfaction)] {
        if value > 10 {
            return Err(InstrumentError::OutOfRange {
                questionnaire: "monthly",
                item,
                value: u32::from(value),
                min: 0,
                max: 10,
            });
        }
    }
    // Integer round-half-up: halves only occur on odd sums.
    Ok((control + satisfaction + 1) / 2)
}

/// Clinical interpretation bands for a LARS total.
/// 0–20: no LARS, 21–29: minor LARS, 30–42: major LARS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LarsSeverity {
    NoLars,
    Minor,
    Major,
}

impl LarsSeverity {
    pub fn from_total(total: u8) -> Self {
        match total {
            0..=20 => LarsSeverity::NoLars,
            21..=29 => LarsSeverity::Minor,
            _ => LarsSeverity::Major,
        }
    }
}
