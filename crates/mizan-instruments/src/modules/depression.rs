use std::sync::{Arc, LazyLock};

use mizan_core::models::module::AssessmentModule;

use crate::ModuleDefinition;

/// Depressive disorders: major depressive disorder (with the suicidal
/// ideation crisis trigger on A9) and persistent depressive disorder.
pub struct Depression;

impl ModuleDefinition for Depression {
    fn id(&self) -> &str {
        "depression"
    }

    fn module(&self) -> Option<Arc<AssessmentModule>> {
        static MODULE: LazyLock<Option<Arc<AssessmentModule>>> = LazyLock::new(|| {
            super::parse_builtin(
                "depression",
                include_str!("../../content/depression_module.json"),
            )
        });
        MODULE.clone()
    }

    fn hero_images(&self) -> &[(&str, &str)] {
        &[
            ("module", "/images/heroes/hero_depression_sunrise_1x.webp"),
            ("mdd", "/images/heroes/hero_depression_sunrise_1x.webp"),
            ("pdd", "/images/heroes/hero_depression_olive-tree_1x.webp"),
        ]
    }
}
