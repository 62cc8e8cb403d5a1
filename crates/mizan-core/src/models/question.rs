use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::condition::Condition;

/// Selects which response scale a question uses. Unrecognized tags
/// deserialize as [`ResponseType::Unknown`] instead of failing the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    #[serde(rename = "frequency_5point")]
    Frequency5Point,
    YesNo,
    MultiSelect,
    Duration,
    ImpairmentScale,
    SleepChange,
    TimeConsumed,
    InsightLevel,
    SymptomDuration,
    TraumaDuration,
    YesNoFrequency,
    YesNoDuration,
    WeightAppetiteChange,
    #[serde(other)]
    Unknown,
}

impl ResponseType {
    /// Key of this type in a module's `response_scales` map.
    pub fn key(self) -> &'static str {
        match self {
            Self::Frequency5Point => "frequency_5point",
            Self::YesNo => "yes_no",
            Self::MultiSelect => "multi_select",
            Self::Duration => "duration",
            Self::ImpairmentScale => "impairment_scale",
            Self::SleepChange => "sleep_change",
            Self::TimeConsumed => "time_consumed",
            Self::InsightLevel => "insight_level",
            Self::SymptomDuration => "symptom_duration",
            Self::TraumaDuration => "trauma_duration",
            Self::YesNoFrequency => "yes_no_frequency",
            Self::YesNoDuration => "yes_no_duration",
            Self::WeightAppetiteChange => "weight_appetite_change",
            Self::Unknown => "unknown",
        }
    }

    /// Types answered in two stages.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            Self::YesNoFrequency | Self::YesNoDuration | Self::WeightAppetiteChange
        )
    }

    /// Types whose options come from the module's scale table rather than
    /// a built-in default.
    pub fn needs_module_scale(self) -> bool {
        matches!(
            self,
            Self::ImpairmentScale
                | Self::SleepChange
                | Self::TimeConsumed
                | Self::InsightLevel
                | Self::SymptomDuration
                | Self::TraumaDuration
                | Self::YesNoFrequency
                | Self::YesNoDuration
                | Self::WeightAppetiteChange
        )
    }
}

/// Show a question only when an earlier answer satisfies `show_if`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionConditional {
    pub depends_on: String,
    #[ts(type = "string")]
    pub show_if: Condition,
}

/// Safety interrupt raised when an answer satisfies `show_modal_if`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrisisTrigger {
    #[ts(type = "string")]
    pub show_modal_if: Condition,
    pub modal_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

/// One assessable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    /// DSM-5-TR criterion label (e.g. "A", "C1").
    pub criterion: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[ts(type = "string")]
    pub response_type: ResponseType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<QuestionConditional>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crisis_trigger: Option<CrisisTrigger>,
}
