use std::sync::{Arc, LazyLock};

use mizan_core::models::module::AssessmentModule;

use crate::ModuleDefinition;

/// Anxiety disorders: generalized anxiety, panic and social anxiety.
pub struct Anxiety;

impl ModuleDefinition for Anxiety {
    fn id(&self) -> &str {
        "anxiety"
    }

    fn module(&self) -> Option<Arc<AssessmentModule>> {
        static MODULE: LazyLock<Option<Arc<AssessmentModule>>> = LazyLock::new(|| {
            super::parse_builtin("anxiety", include_str!("../../content/anxiety_module.json"))
        });
        MODULE.clone()
    }

    fn hero_images(&self) -> &[(&str, &str)] {
        &[
            ("module", "/images/heroes/hero_anxiety_calm-garden_1x.webp"),
            ("gad", "/images/heroes/hero_anxiety_calm-garden_1x.webp"),
            ("panic", "/images/heroes/hero_anxiety_calm-garden_1x.webp"),
            ("social_anxiety", "/images/heroes/hero_anxiety_calm-garden_1x.webp"),
        ]
    }
}
