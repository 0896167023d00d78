use crate::Questionnaire;
use crate::items::{Item, ItemKind};

/// Monthly quality-of-life questionnaire: five 1–4 impact ratings plus the
/// two 0–10 ratings the QoL composite is derived from.
pub struct Monthly;

impl Questionnaire for Monthly {
    fn id(&self) -> &str {
        "monthly"
    }

    fn name(&self) -> &str {
        "Monthly QoL"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let impact = ItemKind::Scale { min: 1, max: 4 };
            let rating = ItemKind::Scale { min: 0, max: 10 };

            vec![
                item("avoid_travel", "app.avoid_traveling", impact.clone()),
                item("avoid_social", "app.avoid_social", impact.clone()),
                item("embarrassed", "app.feel_embarrassed", impact.clone()),
                item("worry_notice", "app.worry_others_notice", impact.clone()),
                item("depressed", "app.feel_depressed", impact),
                item("control", "app.feel_in_control", rating.clone()),
                item("satisfaction", "app.satisfaction", rating),
            ]
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
