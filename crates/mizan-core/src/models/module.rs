use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::question::{Question, ResponseType};
use crate::error::CoreError;

/// Short educational text shown before a disorder's questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EducationalIntro {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub key_points: Vec<String>,
}

/// A named cluster of questions sharing a clinical theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Disorder {
    pub id: String,
    /// Arabic display name.
    pub name: String,
    /// Reference (English) name.
    pub name_en: String,
    #[serde(default)]
    pub educational_intro: EducationalIntro,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Disorder {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// Display metadata of a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModuleInfo {
    pub id: String,
    pub title: String,
    pub title_en: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

/// One selectable option of a response scale. Values are labels or
/// numeric codes depending on the scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleOption {
    pub value: serde_json::Value,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One stage of a two-stage scale (`occurrence`, `duration`, `changed`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScalePart {
    pub id: String,
    #[serde(default)]
    pub options: Vec<ScaleOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseScale {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ScaleOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<ScalePart>,
}

impl ResponseScale {
    pub fn part(&self, id: &str) -> Option<&ScalePart> {
        self.parts.iter().find(|p| p.id == id)
    }
}

/// A top-level assessment category. Loaded wholesale from static content
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentModule {
    pub module: ModuleInfo,
    #[serde(default)]
    pub disorders: Vec<Disorder>,
    #[serde(default)]
    pub response_scales: BTreeMap<String, ResponseScale>,
}

impl AssessmentModule {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn id(&self) -> &str {
        &self.module.id
    }

    pub fn require_disorder(&self, id: &str) -> Result<&Disorder, CoreError> {
        self.disorder(id).ok_or_else(|| CoreError::UnknownDisorder {
            module_id: self.module.id.clone(),
            disorder_id: id.to_string(),
        })
    }

    pub fn disorder(&self, id: &str) -> Option<&Disorder> {
        self.disorders.iter().find(|d| d.id == id)
    }

    pub fn scale(&self, response_type: ResponseType) -> Option<&ResponseScale> {
        self.response_scales.get(response_type.key())
    }

    /// Question count across every disorder, visible or not.
    pub fn total_questions(&self) -> usize {
        self.disorders.iter().map(|d| d.questions.len()).sum()
    }
}
