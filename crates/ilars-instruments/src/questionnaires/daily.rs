use ilars_core::models::daily::{DRINK_KEYS, FOOD_KEYS};

use crate::Questionnaire;
use crate::items::{Item, ItemKind};

/// Daily bowel-function questionnaire: counts, yes/no questions, 0–10
/// severity sliders, the Bristol scale, and per-item food/drink servings.
pub struct Daily;

impl Questionnaire for Daily {
    fn id(&self) -> &str {
        "daily"
    }

    fn name(&self) -> &str {
        "Daily Log"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let yes_no = ItemKind::Options {
                option_label_keys: vec!["app.yes".to_string(), "app.no".to_string()],
            };
            let slider = ItemKind::Scale { min: 0, max: 10 };

            let mut items = vec![
                item("stool_count", "app.stool_per_day", ItemKind::Count { max: 100 }),
                item("pads_used", "app.pads_used", ItemKind::Count { max: 100 }),
                item("urgency", "app.urgent_need", yes_no.clone()),
                item("night_stools", "app.stools_at_night", yes_no.clone()),
                item(
                    "leakage",
                    "app.leakage",
                    ItemKind::Options {
                        option_label_keys: vec![
                            "app.none".to_string(),
                            "app.liquid".to_string(),
                            "app.solid".to_string(),
                        ],
                    },
                ),
                item("incomplete_evacuation", "app.incomplete_evacuation", yes_no),
                item("bloating", "app.bloating", slider.clone()),
                item("impact_score", "app.impact_score", slider.clone()),
                item("activity_interfere", "app.activity_interference", slider),
                item("bristol_scale", "app.bristol_scale", ItemKind::Bristol),
            ];

            for key in FOOD_KEYS {
                items.push(item(key, &format!("app.food_{key}"), ItemKind::Count { max: 10 }));
            }
            for key in DRINK_KEYS {
                items.push(item(key, &format!("app.drink_{key}"), ItemKind::Count { max: 10 }));
            }

            items
        });
        &ITEMS
    }
}

fn item(id: &str, label_key: &str, kind: ItemKind) -> Item {
    Item {
        id: id.to_string(),
        label_key: label_key.to_string(),
        kind,
    }
}
