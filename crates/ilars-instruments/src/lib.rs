//! ilars-instruments
//!
//! Questionnaire definitions, scoring, and payload building. Pure data and
//! arithmetic — no HTTP, no DOM, no global translation table. Option labels
//! are carried as i18n keys for the rendering layer to resolve.

pub mod error;
pub mod items;
pub mod payload;
pub mod questionnaires;
pub mod scoring;

use items::{Item, ItemValue, ValidationError};

/// Trait implemented by each patient questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier, matching the backend's questionnaire_type
    /// (e.g., "weekly", "eq5d5l").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "LARS Weekly").
    fn name(&self) -> &str;

    /// The items (questions) of this questionnaire, in form order.
    fn items(&self) -> &[Item];

    /// Validate a set of item answers against this questionnaire's ranges.
    fn validate_items(&self, values: &[ItemValue]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in values {
            if let Some(item) = self.items().iter().find(|i| i.id == entry.item_id)
                && !item.kind.contains(entry.value)
            {
                let (min, max) = item.kind.range();
                errors.push(ValidationError {
                    item_id: entry.item_id.clone(),
                    value: entry.value,
                    min,
                    max,
                    message: format!(
                        "{}: {} answer {} is outside range [{}, {}]",
                        self.name(),
                        item.id,
                        entry.value,
                        min,
                        max,
                    ),
                });
            }
        }
        errors
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::daily::Daily),
        Box::new(questionnaires::weekly::Weekly),
        Box::new(questionnaires::monthly::Monthly),
        Box::new(questionnaires::eq5d5l::Eq5d5l),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
