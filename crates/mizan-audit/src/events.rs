use serde::Serialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyAction {
    /// A crisis trigger fired and the interrupt was raised.
    CrisisTriggered,
    /// The user acknowledged the interrupt.
    CrisisAcknowledged,
    /// The user left the assessment while the interrupt was pending or
    /// after acknowledging it.
    ExitedAfterCrisis,
}

impl SafetyAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CrisisTriggered => "crisis_triggered",
            Self::CrisisAcknowledged => "crisis_acknowledged",
            Self::ExitedAfterCrisis => "exited_after_crisis",
        }
    }
}

/// A structured safety event.
///
/// Carries identifiers only. Response values must never be attached.
#[derive(Debug, Clone, Serialize)]
pub struct SafetyEvent {
    pub action: SafetyAction,
    pub session_id: Uuid,
    pub module_id: String,
    pub disorder_id: String,
    pub question_id: Option<String>,
    pub modal_type: Option<String>,
    pub occurred_at: jiff::Timestamp,
    pub details: Option<serde_json::Value>,
}

impl SafetyEvent {
    pub fn new(
        action: SafetyAction,
        session_id: Uuid,
        module_id: impl Into<String>,
        disorder_id: impl Into<String>,
    ) -> Self {
        Self {
            action,
            session_id,
            module_id: module_id.into(),
            disorder_id: disorder_id.into(),
            question_id: None,
            modal_type: None,
            occurred_at: jiff::Timestamp::now(),
            details: None,
        }
    }

    pub fn with_question(mut self, question_id: impl Into<String>) -> Self {
        self.question_id = Some(question_id.into());
        self
    }

    pub fn with_modal_type(mut self, modal_type: impl Into<String>) -> Self {
        self.modal_type = Some(modal_type.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        info!(
            safety.action = self.action.as_str(),
            safety.session_id = %self.session_id,
            safety.module_id = %self.module_id,
            safety.disorder_id = %self.disorder_id,
            safety.question_id = self.question_id.as_deref().unwrap_or(""),
            safety.modal_type = self.modal_type.as_deref().unwrap_or(""),
            "safety event"
        );
    }
}

/// Destination for safety events.
pub trait SafetySink: Send {
    fn record(&mut self, event: SafetyEvent);
}

/// Logs every event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SafetySink for TracingSink {
    fn record(&mut self, event: SafetyEvent) {
        event.emit();
    }
}

/// Keeps events in memory. Used by tests and by drivers that display a
/// session's safety history.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<SafetyEvent>,
}

impl SafetySink for MemorySink {
    fn record(&mut self, event: SafetyEvent) {
        event.emit();
        self.events.push(event);
    }
}
