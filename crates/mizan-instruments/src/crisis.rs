//! Crisis trigger detection.
//!
//! Only `>=`, `>` and `==` are meaningful for a trigger. Any other
//! condition, including a valid `<` comparison, never fires.

use mizan_core::condition::{Comparator, Condition};
use mizan_core::models::question::CrisisTrigger;
use mizan_core::models::response::ResponseValue;

use crate::intensity::intensity;

/// Whether `value` satisfies the trigger's `show_modal_if` rule.
pub fn check_trigger(trigger: &CrisisTrigger, value: &ResponseValue) -> bool {
    match &trigger.show_modal_if {
        Condition::Compare {
            op: op @ (Comparator::Gte | Comparator::Gt | Comparator::Eq),
            threshold,
        } => op.apply(intensity(Some(value)), *threshold as f64),
        _ => false,
    }
}

/// Whether `condition` is a form [`check_trigger`] can ever satisfy.
pub fn is_supported(condition: &Condition) -> bool {
    matches!(
        condition,
        Condition::Compare {
            op: Comparator::Gte | Comparator::Gt | Comparator::Eq,
            ..
        }
    )
}
