//! Whether the current answer is enough to move past a question.
//!
//! The flow itself does not enforce this; drivers use it to gate their
//! "next" and "finish" actions.

use mizan_core::models::question::{Question, ResponseType};
use mizan_core::models::response::{CompositeValue, ResponseValue};

pub fn is_response_complete(question: &Question, value: Option<&ResponseValue>) -> bool {
    if !question.required {
        return true;
    }

    match value {
        None => false,
        Some(ResponseValue::Selection(selected)) => !selected.is_empty(),
        Some(ResponseValue::Composite(composite)) => {
            composite_complete(question.response_type, composite)
        }
        Some(ResponseValue::Number(_) | ResponseValue::Label(_)) => true,
    }
}

/// A composite needs its gate, and the dependent sub-answer when the gate
/// opens the second stage for this response type.
fn composite_complete(response_type: ResponseType, composite: &CompositeValue) -> bool {
    if composite.gate_label().is_none() {
        return false;
    }
    if !composite.gate_open() {
        return true;
    }

    match (response_type, composite) {
        (ResponseType::YesNoDuration, CompositeValue::YesNoThenDuration { duration, .. }) => {
            duration.is_some()
        }
        (ResponseType::YesNoDuration, _) => false,
        (ResponseType::YesNoFrequency, CompositeValue::YesNoThenFrequency { frequency, .. }) => {
            frequency.is_some()
        }
        (ResponseType::YesNoFrequency, _) => false,
        (_, CompositeValue::ChangedThenDirection { direction, .. }) => direction.is_some(),
        _ => true,
    }
}
