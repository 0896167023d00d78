use crate::Questionnaire;
use crate::items::{Item, ItemKind};

/// EQ-5D-5L: five 5-level dimensions plus the 0–100 health VAS.
/// Unscored client-side; levels and VAS are forwarded as-is.
pub struct Eq5d5l;

impl Questionnaire for Eq5d5l {
    fn id(&self) -> &str {
        "eq5d5l"
    }

    fn name(&self) -> &str {
        "EQ-5D-5L"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let dimensions = [
                ("mobility", "app.eq_mobility", "mob"),
                ("self_care", "app.eq_self_care", "sc"),
                ("usual_activities", "app.eq_usual_activities", "ua"),
                ("pain_discomfort", "app.eq_pain_discomfort", "pain"),
                ("anxiety_depression", "app.eq_anxiety_depression", "anx"),
            ];

            let mut items: Vec<Item> = dimensions
                .iter()
                .map(|(id, label_key, prefix)| Item {
                    id: id.to_string(),
                    label_key: label_key.to_string(),
                    kind: ItemKind::Options {
                        option_label_keys: level_keys(prefix),
                    },
                })
                .collect();

            items.push(Item {
                id: "health_vas".to_string(),
                label_key: "app.eq_health_today".to_string(),
                kind: ItemKind::Scale { min: 0, max: 100 },
            });

            items
        });
        &ITEMS
    }
}

/// The five level labels share a naming scheme per dimension, except that
/// mobility/self-care/usual-activities grade "no problems" → "unable" while
/// pain and anxiety grade "none" → "extreme".
fn level_keys(prefix: &str) -> Vec<String> {
    let levels: [&str; 5] = match prefix {
        "pain" | "anx" => ["none", "slight", "moderate", "severe", "extreme"],
        _ => ["no_problems", "slight", "moderate", "severe", "unable"],
    };
    levels
        .iter()
        .map(|level| format!("app.eq_{prefix}_{level}"))
        .collect()
}
