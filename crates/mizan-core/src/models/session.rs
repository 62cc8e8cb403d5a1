use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::response::{QuestionResponse, ResponseValue};

/// Mutable state of the single in-progress assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSession {
    /// Correlates log lines of one session. Never shown to the user.
    pub id: Uuid,
    pub module_id: String,
    pub disorder_id: String,
    pub started_at: jiff::Timestamp,
    pub responses: Vec<QuestionResponse>,
    /// Index into the currently visible question list.
    pub current_question_index: usize,
    pub completed: bool,
}

impl AssessmentSession {
    pub fn new(module_id: impl Into<String>, disorder_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            module_id: module_id.into(),
            disorder_id: disorder_id.into(),
            started_at: jiff::Timestamp::now(),
            responses: Vec::new(),
            current_question_index: 0,
            completed: false,
        }
    }

    pub fn response(&self, question_id: &str) -> Option<&QuestionResponse> {
        super::response::find_response(&self.responses, question_id)
    }

    /// Replace the response for `question_id`, or append a new one.
    pub fn upsert_response(&mut self, question_id: &str, value: ResponseValue) {
        let response = QuestionResponse {
            question_id: question_id.to_string(),
            value,
            timestamp: jiff::Timestamp::now(),
        };
        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == question_id)
        {
            Some(existing) => *existing = response,
            None => self.responses.push(response),
        }
    }
}
