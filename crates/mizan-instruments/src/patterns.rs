//! Per-criterion and per-disorder pattern aggregation.

use std::collections::BTreeMap;

use mizan_core::models::module::{AssessmentModule, Disorder};
use mizan_core::models::question::Question;
use mizan_core::models::response::{QuestionResponse, find_response};
use mizan_core::models::results::PatternScore;

use crate::intensity::{intensity, is_present};
use crate::visibility::visible_questions;

/// Score one disorder against the recorded responses.
///
/// Only visible questions take part. Criterion averages use answered
/// questions only; an unanswered question neither lowers an average nor
/// counts as a symptom, but it does count toward `max_symptoms`.
pub fn score_disorder(disorder: &Disorder, responses: &[QuestionResponse]) -> PatternScore {
    let visible = visible_questions(disorder, responses);

    let mut by_criterion: BTreeMap<&str, Vec<&Question>> = BTreeMap::new();
    for question in &visible {
        by_criterion
            .entry(question.criterion.as_str())
            .or_default()
            .push(question);
    }

    let criterion_scores = by_criterion
        .into_iter()
        .map(|(criterion, questions)| {
            (
                criterion.to_string(),
                criterion_average(&questions, responses),
            )
        })
        .collect();

    let total_symptoms = visible
        .iter()
        .filter_map(|q| find_response(responses, &q.id))
        .filter(|r| is_present(Some(&r.value)))
        .count();
    let max_symptoms = visible.len();

    PatternScore {
        disorder_id: disorder.id.clone(),
        disorder_name: disorder.name.clone(),
        disorder_name_en: disorder.name_en.clone(),
        criterion_scores,
        total_symptoms,
        max_symptoms,
        percentage: percentage(total_symptoms, max_symptoms),
    }
}

/// Score every disorder of `module` against the same response list.
///
/// Responses are shared at module level, so completing one disorder also
/// yields (usually zero) scores for its unanswered siblings.
pub fn score_module(module: &AssessmentModule, responses: &[QuestionResponse]) -> Vec<PatternScore> {
    module
        .disorders
        .iter()
        .map(|d| score_disorder(d, responses))
        .collect()
}

/// `round(part / whole * 100)`, 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

fn criterion_average(questions: &[&Question], responses: &[QuestionResponse]) -> f64 {
    let answered: Vec<f64> = questions
        .iter()
        .filter_map(|q| find_response(responses, &q.id))
        .map(|r| intensity(Some(&r.value)))
        .collect();

    if answered.is_empty() {
        return 0.0;
    }
    answered.iter().sum::<f64>() / answered.len() as f64
}
