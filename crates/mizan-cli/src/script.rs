//! Answers read from a JSON file, for unattended runs.
//!
//! ```json
//! {
//!   "mood": "low",
//!   "acknowledge_crisis": true,
//!   "answers": {
//!     "mdd_a1": "often",
//!     "mdd_a3": { "changed": "changed", "direction": "decrease" },
//!     "mdd_b1": 2
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use mizan_core::models::module::AssessmentModule;
use mizan_core::models::mood::MoodLevel;
use mizan_core::models::question::Question;
use mizan_core::models::response::ResponseValue;
use serde::Deserialize;

use crate::runner::{Answer, AnswerSource};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerScript {
    #[serde(default)]
    pub mood: Option<MoodLevel>,
    /// Whether to continue past a crisis interrupt. Without it the run
    /// ends at the interrupt.
    #[serde(default)]
    pub acknowledge_crisis: bool,
    #[serde(default)]
    pub answers: HashMap<String, ResponseValue>,
}

impl AnswerScript {
    pub fn from_json(json: &str) -> eyre::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
        Self::from_json(&contents)
    }
}

impl AnswerSource for AnswerScript {
    fn mood(&mut self) -> eyre::Result<Option<MoodLevel>> {
        Ok(self.mood)
    }

    fn answer(&mut self, question: &Question, _module: &AssessmentModule) -> eyre::Result<Answer> {
        match self.answers.get(&question.id) {
            Some(value) => Ok(Answer::Value(value.clone())),
            None if question.required => {
                eyre::bail!("no scripted answer for required question {}", question.id)
            }
            None => Ok(Answer::Skip),
        }
    }

    fn incomplete(&mut self, question: &Question) -> eyre::Result<()> {
        eyre::bail!("scripted answer for {} is incomplete", question.id)
    }

    fn acknowledge_crisis(&mut self, modal_type: &str) -> eyre::Result<bool> {
        tracing::info!(modal_type, acknowledged = self.acknowledge_crisis, "scripted crisis response");
        Ok(self.acknowledge_crisis)
    }
}
