use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-disorder aggregate of the recorded answers. Not a diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternScore {
    pub disorder_id: String,
    pub disorder_name: String,
    pub disorder_name_en: String,
    /// Average intensity per criterion label, in label order.
    pub criterion_scores: BTreeMap<String, f64>,
    /// Visible questions whose answer counts as a present symptom.
    pub total_symptoms: usize,
    /// Visible questions, answered or not.
    pub max_symptoms: usize,
    /// `round(total_symptoms / max_symptoms * 100)`, or 0 with no questions.
    pub percentage: u32,
}

/// Snapshot produced when an assessment completes. Not kept in sync with
/// later session changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResults {
    pub module_id: String,
    pub module_title: String,
    pub completed_at: jiff::Timestamp,
    pub pattern_scores: Vec<PatternScore>,
    pub total_questions: usize,
    pub total_responses: usize,
}
