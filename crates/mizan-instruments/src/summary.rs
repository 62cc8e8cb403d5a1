//! Canned, non-diagnostic guidance selected from pattern percentages.

use mizan_core::models::results::PatternScore;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Band of a single percentage, as shown on a result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatternLevel {
    Low,
    Moderate,
    Elevated,
}

impl PatternLevel {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            0..30 => Self::Low,
            30..60 => Self::Moderate,
            _ => Self::Elevated,
        }
    }

    pub fn label_ar(self) -> &'static str {
        match self {
            Self::Low => "نمط منخفض",
            Self::Moderate => "نمط متوسط",
            Self::Elevated => "نمط مرتفع",
        }
    }

    /// Result card sentence about `disorder_name` at this level.
    pub fn description(self, disorder_name: &str) -> String {
        match self {
            Self::Low => format!("إجاباتك لا تُظهر نمطاً واضحاً من أعراض {disorder_name}."),
            Self::Moderate => {
                format!("إجاباتك تُظهر بعض الأعراض المرتبطة بـ{disorder_name}، وقد يكون من المفيد متابعتها.")
            }
            Self::Elevated => {
                format!("إجاباتك تُظهر عدداً ملحوظاً من الأعراض المرتبطة بـ{disorder_name}.")
            }
        }
    }

    /// Guidance shown when this is the highest level across a module.
    pub fn guidance(self) -> &'static str {
        match self {
            Self::Low => {
                "تظهر استجاباتك أنماطاً منخفضة من الأعراض في هذه الفئة. إذا كنت تشعر بضيق، فقد يكون من المفيد التحدث مع متخصص."
            }
            Self::Moderate => {
                "تظهر استجاباتك بعض الأنماط التي قد تستحق الانتباه. التحدث مع متخصص يمكن أن يساعدك على فهم مشاعرك بشكل أفضل."
            }
            Self::Elevated => {
                "تظهر استجاباتك أنماطاً ملحوظة من الأعراض. نوصي بشدة بالتحدث مع متخصص في الصحة النفسية للحصول على التقييم والدعم المناسبين."
            }
        }
    }
}

/// Level of the highest percentage across `scores`. No scores reads as low.
pub fn overall_level(scores: &[PatternScore]) -> PatternLevel {
    scores
        .iter()
        .map(|s| PatternLevel::from_percentage(s.percentage))
        .max()
        .unwrap_or(PatternLevel::Low)
}

/// Guidance text for a module's results.
pub fn summary_text(scores: &[PatternScore]) -> &'static str {
    overall_level(scores).guidance()
}

/// Feedback per disorder id, shown on its result card whatever the level.
static DISORDER_FEEDBACK: &[(&str, &str)] = &[
    (
        "gad",
        "القلق المستمر الذي يصعب التحكم فيه قد يؤثر على النوم والتركيز. تقنيات التنفس والاسترخاء قد تساعد، والمتخصص يمكنه تقديم دعم أعمق.",
    ),
    (
        "panic",
        "نوبات الهلع مخيفة لكنها ليست خطيرة بحد ذاتها. فهم ما يحدث في جسمك أثناء النوبة خطوة أولى مهمة.",
    ),
    (
        "social_anxiety",
        "الخوف من تقييم الآخرين شائع، وهناك أساليب علاجية فعالة تساعد على التعامل معه تدريجياً.",
    ),
    (
        "mdd",
        "انخفاض المزاج وفقدان الاهتمام لفترة طويلة يستحقان الانتباه. التحدث مع شخص تثق به أو مع متخصص قد يخفف العبء.",
    ),
    (
        "pdd",
        "المزاج المنخفض الممتد لفترات طويلة قد يبدو جزءاً من الشخصية، لكنه نمط يمكن التعامل معه بالدعم المناسب.",
    ),
];

/// Feedback text for `disorder_id`. Ids are matched after replacing
/// anything but lowercase ascii letters and `_` with `_`.
pub fn disorder_feedback(disorder_id: &str) -> Option<&'static str> {
    let key: String = disorder_id
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c == '_' { c } else { '_' })
        .collect();
    DISORDER_FEEDBACK
        .iter()
        .find(|(id, _)| *id == key)
        .map(|(_, text)| *text)
}

/// Disclaimer shown with every result.
pub const DISCLAIMER: &str = "هذه الأداة ليست أداة تشخيصية. النتائج تعكس أنماطاً في إجاباتك فقط ولا تغني عن تقييم متخصص في الصحة النفسية.";
