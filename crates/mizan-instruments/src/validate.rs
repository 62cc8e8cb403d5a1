//! Strict content validation.
//!
//! The engine tolerates malformed content at runtime (hidden questions,
//! conditions that never hold). This pass reports those problems instead,
//! for content authoring and tests.

use std::collections::HashSet;

use mizan_core::models::module::{AssessmentModule, Disorder};
use mizan_core::models::question::{Question, ResponseType};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::crisis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IssueKind {
    DuplicateQuestionId,
    /// `depends_on` names no question of the disorder.
    DanglingDependency,
    /// `depends_on` names a later question (or the question itself).
    ForwardDependency,
    InvalidCondition,
    UnsupportedCrisisCondition,
    UnknownResponseType,
    MissingScale,
    MissingOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub module_id: String,
    pub disorder_id: String,
    pub question_id: Option<String>,
    pub kind: IssueKind,
    pub message: String,
}

/// Report every content problem in `module`. An empty list means the
/// module behaves exactly as authored.
pub fn validate_module(module: &AssessmentModule) -> Vec<ValidationError> {
    module
        .disorders
        .iter()
        .flat_map(|d| validate_disorder(module, d))
        .collect()
}

fn validate_disorder(module: &AssessmentModule, disorder: &Disorder) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    let mut report = |question: &Question, kind: IssueKind, detail: String| {
        errors.push(ValidationError {
            module_id: module.id().to_string(),
            disorder_id: disorder.id.clone(),
            question_id: Some(question.id.clone()),
            kind,
            message: format!("{}/{}/{}: {detail}", module.id(), disorder.id, question.id),
        });
    };

    for (index, question) in disorder.questions.iter().enumerate() {
        if !seen.insert(question.id.as_str()) {
            report(question, IssueKind::DuplicateQuestionId, "duplicate question id".to_string());
        }

        if let Some(conditional) = &question.conditional {
            let earlier = disorder.questions[..index]
                .iter()
                .any(|q| q.id == conditional.depends_on);
            if !earlier {
                let exists = disorder.questions.iter().any(|q| q.id == conditional.depends_on);
                let kind = if exists {
                    IssueKind::ForwardDependency
                } else {
                    IssueKind::DanglingDependency
                };
                report(
                    question,
                    kind,
                    format!(
                        "depends on '{}', which is not an earlier question",
                        conditional.depends_on
                    ),
                );
            }
            if !conditional.show_if.is_valid() {
                report(
                    question,
                    IssueKind::InvalidCondition,
                    format!("unparsable show_if '{}'", conditional.show_if),
                );
            }
        }

        if let Some(trigger) = &question.crisis_trigger
            && !crisis::is_supported(&trigger.show_modal_if)
        {
            report(
                question,
                IssueKind::UnsupportedCrisisCondition,
                format!(
                    "show_modal_if '{}' can never fire (expected >=, > or ==)",
                    trigger.show_modal_if
                ),
            );
        }

        match question.response_type {
            ResponseType::Unknown => report(
                question,
                IssueKind::UnknownResponseType,
                "unrecognized response_type".to_string(),
            ),
            ResponseType::MultiSelect if question.options.is_empty() => report(
                question,
                IssueKind::MissingOptions,
                "multi_select question has no options".to_string(),
            ),
            rt if rt.needs_module_scale() && module.scale(rt).is_none() => report(
                question,
                IssueKind::MissingScale,
                format!("no response scale '{}' in module", rt.key()),
            ),
            _ => {}
        }
    }

    errors
}
