use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The five-point frequency scale used by `frequency_5point` questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    Never,
    Rarely,
    Sometimes,
    Often,
    Always,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Self::Never,
        Self::Rarely,
        Self::Sometimes,
        Self::Often,
        Self::Always,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Rarely => "rarely",
            Self::Sometimes => "sometimes",
            Self::Often => "often",
            Self::Always => "always",
        }
    }

    /// Position on the 0–4 scale.
    pub fn score(self) -> u8 {
        self as u8
    }
}

/// Duration buckets offered by `duration` questions.
pub const DURATION_LABELS: [&str; 5] = [
    "less_2_weeks",
    "2_4_weeks",
    "1_3_months",
    "3_6_months",
    "6_months_plus",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// Gate of a `weight_appetite_change` style question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChangeState {
    Changed,
    NoChange,
}

impl ChangeState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Changed => "changed",
            Self::NoChange => "no_change",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Direction {
    Increase,
    Decrease,
}

/// A two-stage answer: a gating sub-answer followed, when the gate opens,
/// by a dependent sub-answer.
///
/// On the wire this is a flat object whose keys identify the family
/// (`{"occurrence": "yes", "duration": 2}`, `{"changed": "changed",
/// "direction": "increase"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CompositeWire", into = "CompositeWire")]
pub enum CompositeValue {
    YesNoThenDuration {
        occurrence: Option<YesNo>,
        duration: Option<u32>,
    },
    YesNoThenFrequency {
        occurrence: Option<YesNo>,
        frequency: Option<u32>,
    },
    ChangedThenDirection {
        changed: Option<ChangeState>,
        direction: Option<Direction>,
    },
}

impl CompositeValue {
    /// Label of the first declared sub-field (`occurrence` or `changed`),
    /// if it has been answered.
    pub fn gate_label(&self) -> Option<&'static str> {
        match self {
            Self::YesNoThenDuration { occurrence, .. }
            | Self::YesNoThenFrequency { occurrence, .. } => occurrence.map(YesNo::label),
            Self::ChangedThenDirection { changed, .. } => changed.map(ChangeState::label),
        }
    }

    /// Whether the gating answer opens the second stage.
    pub fn gate_open(&self) -> bool {
        match self {
            Self::YesNoThenDuration { occurrence, .. }
            | Self::YesNoThenFrequency { occurrence, .. } => *occurrence == Some(YesNo::Yes),
            Self::ChangedThenDirection { changed, .. } => *changed == Some(ChangeState::Changed),
        }
    }
}

/// Flat serialized form of [`CompositeValue`]. Unknown sub-field labels
/// deserialize as unanswered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CompositeWire {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    occurrence: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    frequency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    changed: Option<ChangeState>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    direction: Option<Direction>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl From<CompositeWire> for CompositeValue {
    fn from(wire: CompositeWire) -> Self {
        if wire.changed.is_some() || wire.direction.is_some() {
            Self::ChangedThenDirection {
                changed: wire.changed,
                direction: wire.direction,
            }
        } else if wire.frequency.is_some() {
            Self::YesNoThenFrequency {
                occurrence: wire.occurrence,
                frequency: wire.frequency,
            }
        } else {
            Self::YesNoThenDuration {
                occurrence: wire.occurrence,
                duration: wire.duration,
            }
        }
    }
}

impl From<CompositeValue> for CompositeWire {
    fn from(value: CompositeValue) -> Self {
        match value {
            CompositeValue::YesNoThenDuration { occurrence, duration } => Self {
                occurrence,
                duration,
                ..Default::default()
            },
            CompositeValue::YesNoThenFrequency { occurrence, frequency } => Self {
                occurrence,
                frequency,
                ..Default::default()
            },
            CompositeValue::ChangedThenDirection { changed, direction } => Self {
                changed,
                direction,
                ..Default::default()
            },
        }
    }
}

/// The answer to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// Numeric option code (impairment scales, sleep change, ...).
    Number(f64),
    /// Frequency, yes/no, duration or change label.
    Label(String),
    /// Selected option values of a multi-select question.
    Selection(Vec<String>),
    Composite(CompositeValue),
}

impl ResponseValue {
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    pub fn frequency(frequency: Frequency) -> Self {
        Self::Label(frequency.label().to_string())
    }

    pub fn yes_no(answer: YesNo) -> Self {
        Self::Label(answer.label().to_string())
    }
}

impl From<Frequency> for ResponseValue {
    fn from(frequency: Frequency) -> Self {
        Self::frequency(frequency)
    }
}

impl From<CompositeValue> for ResponseValue {
    fn from(value: CompositeValue) -> Self {
        Self::Composite(value)
    }
}

/// A recorded answer. Replaced wholesale when the question is re-answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionResponse {
    pub question_id: String,
    #[ts(type = "string | number | Array<string> | { occurrence?: string, duration?: number, frequency?: number, changed?: string, direction?: string }")]
    pub value: ResponseValue,
    pub timestamp: jiff::Timestamp,
}

/// Look up the recorded response for `question_id`.
pub fn find_response<'a>(
    responses: &'a [QuestionResponse],
    question_id: &str,
) -> Option<&'a QuestionResponse> {
    responses.iter().find(|r| r.question_id == question_id)
}
