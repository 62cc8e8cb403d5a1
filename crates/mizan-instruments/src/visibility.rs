//! Conditional question visibility.
//!
//! A question with no `conditional` is always shown. Otherwise it is shown
//! only while the answer it depends on satisfies `show_if`. Visibility is a
//! pure function of the response list and must be recomputed after every
//! response change: a later answer can hide or reveal any question.

use mizan_core::condition::Condition;
use mizan_core::models::module::Disorder;
use mizan_core::models::question::Question;
use mizan_core::models::response::{QuestionResponse, ResponseValue, find_response};

use crate::intensity::intensity;

pub fn is_visible(question: &Question, responses: &[QuestionResponse]) -> bool {
    let Some(conditional) = &question.conditional else {
        return true;
    };

    // Dependency not answered (or not a question at all): stay hidden.
    let Some(dependency) = find_response(responses, &conditional.depends_on) else {
        return false;
    };

    condition_holds(&conditional.show_if, &dependency.value)
}

/// Questions of `disorder` currently in the active sequence, in authoring
/// order.
///
/// A question whose dependency is not an earlier question of the same
/// disorder is never shown, even if a response with that id exists.
pub fn visible_questions<'a>(
    disorder: &'a Disorder,
    responses: &[QuestionResponse],
) -> Vec<&'a Question> {
    disorder
        .questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            dependency_precedes(disorder, *index, question) && is_visible(question, responses)
        })
        .map(|(_, question)| question)
        .collect()
}

fn dependency_precedes(disorder: &Disorder, index: usize, question: &Question) -> bool {
    match &question.conditional {
        None => true,
        Some(conditional) => disorder.questions[..index]
            .iter()
            .any(|q| q.id == conditional.depends_on),
    }
}

fn condition_holds(condition: &Condition, value: &ResponseValue) -> bool {
    match condition {
        Condition::Compare { .. } => condition.matches_intensity(intensity(Some(value))),
        Condition::Exact(expected) => raw_label(value) == Some(expected.as_str()),
        Condition::Invalid(_) => false,
    }
}

/// Label an exact-match condition compares against. Composites expose their
/// gate; numbers and selections have no label.
fn raw_label(value: &ResponseValue) -> Option<&str> {
    match value {
        ResponseValue::Label(label) => Some(label),
        ResponseValue::Composite(composite) => composite.gate_label(),
        ResponseValue::Number(_) | ResponseValue::Selection(_) => None,
    }
}
