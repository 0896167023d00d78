use crate::Questionnaire;
use crate::items::{Item, ItemKind};

/// LARS weekly questionnaire: five questions answered as option indices.
/// Four questions have three options, bowel frequency has four.
pub struct Weekly;

impl Questionnaire for Weekly {
    fn id(&self) -> &str {
        "weekly"
    }

    fn name(&self) -> &str {
        "LARS Weekly"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let never_to_weekly = [
                "app.lars_no_never",
                "app.lars_yes_less_once_week",
                "app.lars_yes_at_least_once_week",
            ];

            vec![
                options("flatus_control", "app.flatus_control", &never_to_weekly),
                options(
                    "liquid_stool_leakage",
                    "app.liquid_stool_leakage",
                    &never_to_weekly,
                ),
                options(
                    "bowel_frequency",
                    "app.bowel_frequency",
                    &[
                        "app.lars_more_7_times_day",
                        "app.lars_4_7_times_day",
                        "app.lars_1_3_times_day",
                        "app.lars_less_once_day",
                    ],
                ),
                options(
                    "repeat_bowel_opening",
                    "app.repeat_bowel_opening",
                    &never_to_weekly,
                ),
                options("urgency_to_toilet", "app.urgency_to_toilet", &never_to_weekly),
            ]
        });
        &ITEMS
    }
}

fn options(id: &str, label_key: &str, option_label_keys: &[&str]) -> Item {
    Item {
        id: id.to_string(),
        label_key: label_key.to_string(),
        kind: ItemKind::Options {
            option_label_keys: option_label_keys.iter().map(|k| k.to_string()).collect(),
        },
    }
}
