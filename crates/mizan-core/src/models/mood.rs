use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Optional check-in recorded before an assessment. Session-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum MoodLevel {
    VeryLow,
    Low,
    Moderate,
    Good,
    Great,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        Self::VeryLow,
        Self::Low,
        Self::Moderate,
        Self::Good,
        Self::Great,
    ];

    pub fn label_ar(self) -> &'static str {
        match self {
            Self::VeryLow => "منخفض جداً",
            Self::Low => "منخفض",
            Self::Moderate => "متوسط",
            Self::Good => "جيد",
            Self::Great => "ممتاز",
        }
    }
}
