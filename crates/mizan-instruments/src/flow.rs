//! Question-by-question session state machine.
//!
//! [`AssessmentFlow`] owns the single in-progress session: the question
//! cursor, the recorded responses, the crisis interrupt state and the
//! results snapshot. Drivers hold it by value and call its narrow mutation
//! API; nothing here is global.
//!
//! ```text
//! Idle --start--> InProgress --complete--> Completed
//!   ^                 |                        |
//!   +------exit-------+-----------exit---------+
//! ```

use std::sync::Arc;

use mizan_audit::{SafetyAction, SafetyEvent, SafetySink, TracingSink};
use mizan_core::models::module::{AssessmentModule, Disorder};
use mizan_core::models::mood::MoodLevel;
use mizan_core::models::question::Question;
use mizan_core::models::response::ResponseValue;
use mizan_core::models::results::{AssessmentResults, PatternScore};
use mizan_core::models::session::AssessmentSession;
use tracing::{debug, info, warn};

use crate::completeness::is_response_complete;
use crate::crisis::check_trigger;
use crate::patterns::{percentage, score_module};
use crate::visibility::visible_questions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    InProgress,
    Completed,
}

/// Crisis interrupt state of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CrisisState {
    #[default]
    Clear,
    /// Interrupt raised and not yet acknowledged. Forward navigation is
    /// suspended.
    Pending {
        question_id: String,
        modal_type: String,
    },
    /// Acknowledged. No further interrupts fire this session.
    Acknowledged,
}

/// What happened to a recorded response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// No session is active; nothing was recorded.
    NoSession,
    Recorded,
    /// Recorded, and a crisis interrupt is now pending.
    CrisisInterrupt { modal_type: String },
}

pub struct AssessmentFlow<S: SafetySink = TracingSink> {
    module: Option<Arc<AssessmentModule>>,
    session: Option<AssessmentSession>,
    results: Option<AssessmentResults>,
    crisis: CrisisState,
    mood: Option<MoodLevel>,
    sink: S,
}

impl Default for AssessmentFlow<TracingSink> {
    fn default() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl AssessmentFlow<TracingSink> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SafetySink> AssessmentFlow<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            module: None,
            session: None,
            results: None,
            crisis: CrisisState::Clear,
            mood: None,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // Transitions

    /// Begin `disorder_id` of `module`, discarding any existing session and
    /// results.
    pub fn start(&mut self, module: Arc<AssessmentModule>, disorder_id: &str) {
        if module.disorder(disorder_id).is_none() {
            warn!(
                module_id = %module.id(),
                disorder_id,
                "starting assessment for unknown disorder"
            );
        }

        let session = AssessmentSession::new(module.id(), disorder_id);
        info!(
            session_id = %session.id,
            module_id = %session.module_id,
            disorder_id,
            "assessment started"
        );

        self.module = Some(module);
        self.session = Some(session);
        self.results = None;
        self.crisis = CrisisState::Clear;
    }

    /// Record (or replace) the answer to `question_id`. The cursor does not
    /// move.
    pub fn record_response(&mut self, question_id: &str, value: ResponseValue) -> RecordOutcome {
        let Some(session) = self.session.as_mut() else {
            debug!(question_id, "response ignored: no active session");
            return RecordOutcome::NoSession;
        };

        let trigger = self
            .module
            .as_deref()
            .and_then(|m| m.disorder(&session.disorder_id))
            .and_then(|d| d.question(question_id))
            .and_then(|q| q.crisis_trigger.as_ref());
        let fired = trigger.is_some_and(|t| check_trigger(t, &value));

        session.upsert_response(question_id, value);
        debug!(
            session_id = %session.id,
            question_id,
            responses = session.responses.len(),
            "response recorded"
        );

        let Some(trigger) = trigger.filter(|_| fired) else {
            return RecordOutcome::Recorded;
        };

        // Acknowledgment is sticky; a pending interrupt is reported again.
        match &self.crisis {
            CrisisState::Acknowledged => return RecordOutcome::Recorded,
            CrisisState::Pending { modal_type, .. } => {
                return RecordOutcome::CrisisInterrupt {
                    modal_type: modal_type.clone(),
                };
            }
            CrisisState::Clear => {}
        }

        let event = SafetyEvent::new(
            SafetyAction::CrisisTriggered,
            session.id,
            &session.module_id,
            &session.disorder_id,
        )
        .with_question(question_id)
        .with_modal_type(&trigger.modal_type);
        self.sink.record(event);

        self.crisis = CrisisState::Pending {
            question_id: question_id.to_string(),
            modal_type: trigger.modal_type.clone(),
        };
        RecordOutcome::CrisisInterrupt {
            modal_type: trigger.modal_type.clone(),
        }
    }

    /// Advance to the next visible question. Returns whether the cursor
    /// moved; at the last question callers should `complete()` instead.
    pub fn next(&mut self) -> bool {
        if self.crisis_pending() {
            warn!("next ignored: crisis interrupt awaiting acknowledgment");
            return false;
        }

        let total = self.total_questions();
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let next_index = session.current_question_index + 1;
        if next_index >= total {
            return false;
        }
        session.current_question_index = next_index;
        debug!(session_id = %session.id, index = next_index, "moved to next question");
        true
    }

    /// Step back one question. Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.current_question_index == 0 {
            return false;
        }
        session.current_question_index -= 1;
        debug!(
            session_id = %session.id,
            index = session.current_question_index,
            "moved to previous question"
        );
        true
    }

    /// Score the whole module and snapshot the results.
    ///
    /// Returns `None` without touching any state when no session is active
    /// or a crisis interrupt is still pending.
    pub fn complete(&mut self) -> Option<&AssessmentResults> {
        if self.crisis_pending() {
            warn!("complete ignored: crisis interrupt awaiting acknowledgment");
            return None;
        }
        let (Some(session), Some(module)) = (self.session.as_mut(), self.module.as_deref()) else {
            debug!("complete ignored: no active session");
            return None;
        };

        let results = AssessmentResults {
            module_id: session.module_id.clone(),
            module_title: module.module.title.clone(),
            completed_at: jiff::Timestamp::now(),
            pattern_scores: score_module(module, &session.responses),
            total_questions: module.total_questions(),
            total_responses: session.responses.len(),
        };
        session.completed = true;

        info!(
            session_id = %session.id,
            module_id = %results.module_id,
            responses = results.total_responses,
            "assessment completed"
        );
        Some(self.results.insert(results))
    }

    /// Discard the session and any results. Always succeeds.
    pub fn exit(&mut self) {
        if let Some(session) = &self.session {
            if self.crisis != CrisisState::Clear {
                let acknowledged = self.crisis == CrisisState::Acknowledged;
                let event = SafetyEvent::new(
                    SafetyAction::ExitedAfterCrisis,
                    session.id,
                    &session.module_id,
                    &session.disorder_id,
                )
                .with_details(serde_json::json!({ "acknowledged": acknowledged }));
                self.sink.record(event);
            }
            info!(session_id = %session.id, "assessment exited");
        }

        self.module = None;
        self.session = None;
        self.results = None;
        self.crisis = CrisisState::Clear;
        self.mood = None;
    }

    /// Acknowledge a pending crisis interrupt. Returns `false` when none
    /// was pending.
    pub fn acknowledge_crisis(&mut self) -> bool {
        let CrisisState::Pending { question_id, modal_type } = &self.crisis else {
            return false;
        };
        if let Some(session) = &self.session {
            let event = SafetyEvent::new(
                SafetyAction::CrisisAcknowledged,
                session.id,
                &session.module_id,
                &session.disorder_id,
            )
            .with_question(question_id)
            .with_modal_type(modal_type);
            self.sink.record(event);
        }
        self.crisis = CrisisState::Acknowledged;
        true
    }

    pub fn set_mood(&mut self, mood: Option<MoodLevel>) {
        self.mood = mood;
    }

    // Reads

    pub fn mood(&self) -> Option<MoodLevel> {
        self.mood
    }

    pub fn state(&self) -> FlowState {
        match &self.session {
            None => FlowState::Idle,
            Some(s) if s.completed => FlowState::Completed,
            Some(_) => FlowState::InProgress,
        }
    }

    pub fn session(&self) -> Option<&AssessmentSession> {
        self.session.as_ref()
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    pub fn module(&self) -> Option<&AssessmentModule> {
        self.module.as_deref()
    }

    pub fn disorder(&self) -> Option<&Disorder> {
        let session = self.session.as_ref()?;
        self.module.as_deref()?.disorder(&session.disorder_id)
    }

    pub fn crisis(&self) -> &CrisisState {
        &self.crisis
    }

    pub fn crisis_pending(&self) -> bool {
        matches!(self.crisis, CrisisState::Pending { .. })
    }

    /// Whether the low-profile help affordance should stay on screen.
    pub fn show_help_affordance(&self) -> bool {
        self.session.is_some() && self.crisis == CrisisState::Acknowledged
    }

    /// The active question sequence, recomputed from the current responses.
    pub fn visible_questions(&self) -> Vec<&Question> {
        match (self.disorder(), &self.session) {
            (Some(disorder), Some(session)) => visible_questions(disorder, &session.responses),
            _ => Vec::new(),
        }
    }

    pub fn total_questions(&self) -> usize {
        self.visible_questions().len()
    }

    pub fn current_question_index(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |s| s.current_question_index)
    }

    /// Question under the cursor. `None` when the cursor has fallen past the
    /// visible list.
    pub fn current_question(&self) -> Option<&Question> {
        self.visible_questions()
            .get(self.current_question_index())
            .copied()
    }

    pub fn current_response(&self) -> Option<&ResponseValue> {
        let question = self.current_question()?;
        self.session
            .as_ref()?
            .response(&question.id)
            .map(|r| &r.value)
    }

    /// Whether the current answer satisfies its question's required flag.
    pub fn current_response_complete(&self) -> bool {
        self.current_question()
            .is_some_and(|q| is_response_complete(q, self.current_response()))
    }

    pub fn is_last_question(&self) -> bool {
        let total = self.total_questions();
        total > 0 && self.current_question_index() == total - 1
    }

    pub fn can_go_back(&self) -> bool {
        self.current_question_index() > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.session.is_some() && self.current_question_index() + 1 < self.total_questions()
    }

    /// `round(cursor / visible * 100)`, 0 with no visible questions.
    pub fn progress(&self) -> u32 {
        percentage(self.current_question_index(), self.total_questions())
    }

    /// Live pattern scores for the session's module, without completing.
    pub fn pattern_scores(&self) -> Vec<PatternScore> {
        match (self.module.as_deref(), &self.session) {
            (Some(module), Some(session)) => score_module(module, &session.responses),
            _ => Vec::new(),
        }
    }
}
