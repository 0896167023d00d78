use std::collections::HashMap;

use ilars_core::models::daily::{DRINK_KEYS, DailyAnswer, FOOD_KEYS, Leakage, YesNo};
use ilars_core::models::eq5d5l::Eq5d5lAnswer;
use ilars_core::models::monthly::MonthlyAnswer;
use ilars_core::models::weekly::WeeklyAnswer;
use ilars_instruments::error::InstrumentError;
use ilars_instruments::payload::{
    daily_submission, eq5d5l_submission, monthly_submission, weekly_submission,
};
use jiff::civil::date;

fn daily_answer() -> DailyAnswer {
    DailyAnswer {
        stool_count: 3,
        pads_used: 1,
        urgency: YesNo::Yes,
        night_stools: YesNo::No,
        leakage: Leakage::Liquid,
        incomplete_evacuation: YesNo::No,
        bloating: 4,
        impact_score: 6,
        activity_interfere: 0,
        bristol_scale: 5,
        food_servings: HashMap::from([
            ("vegetables_all_types".to_string(), 2),
            ("berries_any".to_string(), 1),
        ]),
        drink_servings: HashMap::from([("water".to_string(), 8), ("coffee".to_string(), 2)]),
    }
}

#[test]
fn weekly_submission_carries_score_in_raw_data() {
    let answer = WeeklyAnswer {
        flatus: 1,
        liquid: 0,
        frequency: 2,
        repeat: 1,
        urgency: 2,
    };
    let body = weekly_submission(&answer, date(2026, 8, 25)).unwrap();

    // 4 + 0 + 0 + 9 + 16
    assert_eq!(body.raw_data.total_score, 29);
    assert_eq!(body.flatus_control, 1);
    assert_eq!(body.bowel_frequency, 2);

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["entry_date"], "2026-08-25");
    assert_eq!(json["urgency_to_toilet"], 2);
    assert_eq!(json["raw_data"]["total_score"], 29);
}

#[test]
fn weekly_submission_refuses_bad_index() {
    let answer = WeeklyAnswer {
        flatus: 0,
        liquid: 3,
        frequency: 0,
        repeat: 0,
        urgency: 0,
    };
    assert!(weekly_submission(&answer, date(2026, 8, 25)).is_err());
}

#[test]
fn daily_submission_completes_the_fixed_key_sets() {
    let body = daily_submission(&daily_answer(), date(2026, 8, 25)).unwrap();

    assert_eq!(body.food_consumption.len(), FOOD_KEYS.len());
    for key in FOOD_KEYS {
        assert!(body.food_consumption.contains_key(key), "missing {key}");
    }
    assert_eq!(body.food_consumption["vegetables_all_types"], 2);
    assert_eq!(body.food_consumption["legumes"], 0);

    assert_eq!(body.drink_consumption.len(), DRINK_KEYS.len());
    assert_eq!(body.drink_consumption["water"], 8);
    assert_eq!(body.drink_consumption["tea"], 0);
}

#[test]
fn daily_submission_serializes_categoricals_as_backend_strings() {
    let body = daily_submission(&daily_answer(), date(2026, 8, 25)).unwrap();
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(json["raw_data"]["urgency"], "Yes");
    assert_eq!(json["raw_data"]["night_stools"], "No");
    assert_eq!(json["raw_data"]["leakage"], "Liquid");
    assert_eq!(json["raw_data"]["incomplete_evacuation"], "No");
    assert_eq!(json["bristol_scale"], 5);
    assert_eq!(json["entry_date"], "2026-08-25");
}

#[test]
fn daily_submission_rejects_unknown_food_key() {
    let mut answer = daily_answer();
    answer.food_servings.insert("pizza".to_string(), 1);
    assert!(matches!(
        daily_submission(&answer, date(2026, 8, 25)).unwrap_err(),
        InstrumentError::UnknownItem { .. }
    ));
}

#[test]
fn daily_submission_rejects_out_of_range_values() {
    let mut answer = daily_answer();
    answer.food_servings.insert("water".to_string(), 1);
    // "water" is a drink key, not a food key.
    assert!(daily_submission(&answer, date(2026, 8, 25)).is_err());

    let mut answer = daily_answer();
    answer.drink_servings.insert("coffee".to_string(), 11);
    assert!(daily_submission(&answer, date(2026, 8, 25)).is_err());

    let mut answer = daily_answer();
    answer.bristol_scale = 0;
    assert!(daily_submission(&answer, date(2026, 8, 25)).is_err());

    let mut answer = daily_answer();
    answer.bloating = 11;
    assert!(daily_submission(&answer, date(2026, 8, 25)).is_err());
}

#[test]
fn monthly_submission_computes_qol() {
    let answer = MonthlyAnswer {
        avoid_travel: 2,
        avoid_social: 1,
        embarrassed: 4,
        worry_notice: 3,
        depressed: 1,
        control: 3,
        satisfaction: 4,
    };
    let body = monthly_submission(&answer, date(2026, 8, 25)).unwrap();
    assert_eq!(body.qol_score, 4);

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["qol_score"], 4);
    assert_eq!(json["raw_data"]["worry_notice"], 3);
    assert_eq!(json["raw_data"]["control"], 3);
    assert_eq!(json["raw_data"]["satisfaction"], 4);
}

#[test]
fn monthly_submission_rejects_impact_rating_outside_one_to_four() {
    let answer = MonthlyAnswer {
        avoid_travel: 0,
        avoid_social: 1,
        embarrassed: 1,
        worry_notice: 1,
        depressed: 1,
        control: 5,
        satisfaction: 5,
    };
    assert!(matches!(
        monthly_submission(&answer, date(2026, 8, 25)).unwrap_err(),
        InstrumentError::OutOfRange {
            item: "avoid_travel",
            ..
        }
    ));
}

#[test]
fn eq5d5l_submission_passes_levels_through_unscored() {
    let answer = Eq5d5lAnswer {
        mobility: 0,
        self_care: 1,
        usual_activities: 2,
        pain_discomfort: 3,
        anxiety_depression: 4,
        health_vas: 75,
    };
    let body = eq5d5l_submission(&answer, date(2026, 8, 25)).unwrap();

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["mobility"], 0);
    assert_eq!(json["anxiety_depression"], 4);
    assert_eq!(json["health_vas"], 75);
    assert_eq!(json["entry_date"], "2026-08-25");
    // Flat body: no raw_data and no derived score.
    assert!(json.get("raw_data").is_none());
}

#[test]
fn eq5d5l_submission_validates_levels_and_vas() {
    let mut answer = Eq5d5lAnswer {
        mobility: 5,
        self_care: 0,
        usual_activities: 0,
        pain_discomfort: 0,
        anxiety_depression: 0,
        health_vas: 50,
    };
    assert!(matches!(
        eq5d5l_submission(&answer, date(2026, 8, 25)).unwrap_err(),
        InstrumentError::InvalidIndex {
            item: "mobility",
            index: 5,
            max: 4,
            ..
        }
    ));

    answer.mobility = 0;
    answer.health_vas = 101;
    assert!(eq5d5l_submission(&answer, date(2026, 8, 25)).is_err());
}
