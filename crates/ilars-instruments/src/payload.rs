//! Submission payload builders.
//!
//! Each builder takes a fully-populated answer set plus the caller-supplied
//! local calendar date and produces the exact backend body for that
//! questionnaire type. Required keys are never omitted; derived fields
//! (`raw_data`, per-type scores) are always present even where they duplicate
//! top-level fields, because the backend persists both views.

use std::collections::HashMap;

use ilars_core::models::daily::{DRINK_KEYS, DailyAnswer, DailyRawData, DailySubmission, FOOD_KEYS};
use ilars_core::models::eq5d5l::{Eq5d5lAnswer, Eq5d5lSubmission};
use ilars_core::models::monthly::{MonthlyAnswer, MonthlyRawData, MonthlySubmission};
use ilars_core::models::weekly::{WeeklyAnswer, WeeklyRawData, WeeklySubmission};
use jiff::civil::Date;

use crate::error::InstrumentError;
use crate::scoring;

/// Build the `POST /sendWeekly` body, computing the LARS total.
pub fn weekly_submission(
    answer: &WeeklyAnswer,
    entry_date: Date,
) -> Result<WeeklySubmission, InstrumentError> {
    let total_score = scoring::lars_total(answer)?;
    Ok(WeeklySubmission {
        flatus_control: answer.flatus,
        liquid_stool_leakage: answer.liquid,
        bowel_frequency: answer.frequency,
        repeat_bowel_opening: answer.repeat,
        urgency_to_toilet: answer.urgency,
        entry_date,
        raw_data: WeeklyRawData { total_score },
    })
}

/// Build the `POST /sendDaily` body. The food and drink maps are completed
/// to exactly the fixed key sets; keys the form never touched default to 0.
pub fn daily_submission(
    answer: &DailyAnswer,
    entry_date: Date,
) -> Result<DailySubmission, InstrumentError> {
    if !(1..=7).contains(&answer.bristol_scale) {
        return Err(InstrumentError::OutOfRange {
            questionnaire: "daily",
            item: "bristol_scale",
            value: u32::from(answer.bristol_scale),
            min: 1,
            max: 7,
        });
    }
    for (item, value) in [
        ("bloating", answer.bloating),
        ("impact_score", answer.impact_score),
        ("activity_interfere", answer.activity_interfere),
    ] {
        if value > 10 {
            return Err(InstrumentError::OutOfRange {
                questionnaire: "daily",
                item,
                value: u32::from(value),
                min: 0,
                max: 10,
            });
        }
    }
    for (item, value) in [
        ("stool_count", answer.stool_count),
        ("pads_used", answer.pads_used),
    ] {
        if value > 100 {
            return Err(InstrumentError::OutOfRange {
                questionnaire: "daily",
                item,
                value,
                min: 0,
                max: 100,
            });
        }
    }

    Ok(DailySubmission {
        entry_date,
        bristol_scale: answer.bristol_scale,
        food_consumption: consumption(&FOOD_KEYS, &answer.food_servings)?,
        drink_consumption: consumption(&DRINK_KEYS, &answer.drink_servings)?,
        raw_data: DailyRawData {
            stool_count: answer.stool_count,
            pads_used: answer.pads_used,
            urgency: answer.urgency,
            night_stools: answer.night_stools,
            leakage: answer.leakage,
            incomplete_evacuation: answer.incomplete_evacuation,
            bloating: answer.bloating,
            impact_score: answer.impact_score,
            activity_interfere: answer.activity_interfere,
        },
    })
}

/// Build the `POST /sendMonthly` body, computing the QoL composite.
pub fn monthly_submission(
    answer: &MonthlyAnswer,
    entry_date: Date,
) -> Result<MonthlySubmission, InstrumentError> {
    for (item, value) in [
        ("avoid_travel", answer.avoid_travel),
        ("avoid_social", answer.avoid_social),
        ("embarrassed", answer.embarrassed),
        ("worry_notice", answer.worry_notice),
        ("depressed", answer.depressed),
    ] {
        if !(1..=4).contains(&value) {
            return Err(InstrumentError::OutOfRange {
                questionnaire: "monthly",
                item,
                value: u32::from(value),
                min: 1,
                max: 4,
            });
        }
    }
    let qol_score = scoring::qol_score(answer.control, answer.satisfaction)?;

    Ok(MonthlySubmission {
        entry_date,
        qol_score,
        raw_data: MonthlyRawData {
            avoid_travel: answer.avoid_travel,
            avoid_social: answer.avoid_social,
            embarrassed: answer.embarrassed,
            worry_notice: answer.worry_notice,
            depressed: answer.depressed,
            control: answer.control,
            satisfaction: answer.satisfaction,
        },
    })
}

/// Build the `POST /sendEq5d5l` body. Dimension levels and the VAS pass
/// through unscored.
pub fn eq5d5l_submission(
    answer: &Eq5d5lAnswer,
    entry_date: Date,
) -> Result<Eq5d5lSubmission, InstrumentError> {
    for (item, level) in [
        ("mobility", answer.mobility),
        ("self_care", answer.self_care),
        ("usual_activities", answer.usual_activities),
        ("pain_discomfort", answer.pain_discomfort),
        ("anxiety_depression", answer.anxiety_depression),
    ] {
        if level > 4 {
            return Err(InstrumentError::InvalidIndex {
                questionnaire: "eq5d5l",
                item,
                index: level,
                max: 4,
            });
        }
    }
    if answer.health_vas > 100 {
        return Err(InstrumentError::OutOfRange {
            questionnaire: "eq5d5l",
            item: "health_vas",
            value: u32::from(answer.health_vas),
            min: 0,
            max: 100,
        });
    }

    Ok(Eq5d5lSubmission {
        mobility: answer.mobility,
        self_care: answer.self_care,
        usual_activities: answer.usual_activities,
        pain_discomfort: answer.pain_discomfort,
        anxiety_depression: answer.anxiety_depression,
        health_vas: answer.health_vas,
        entry_date,
    })
}

fn consumption(
    keys: &[&'static str],
    answered: &HashMap<String, u8>,
) -> Result<HashMap<String, u8>, InstrumentError> {
    if let Some(unknown) = answered.keys().find(|k| !keys.contains(&k.as_str())) {
        return Err(InstrumentError::UnknownItem {
            questionnaire: "daily",
            item: unknown.clone(),
        });
    }

    let mut out = HashMap::with_capacity(keys.len());
    for &key in keys {
        let value = answered.get(key).copied().unwrap_or(0);
        if value > 10 {
            return Err(InstrumentError::OutOfRange {
                questionnaire: "daily",
                item: key,
                value: u32::from(value),
                min: 0,
                max: 10,
            });
        }
        out.insert(key.to_string(), value);
    }
    Ok(out)
}
