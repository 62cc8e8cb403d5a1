//! Template context for a completed assessment.

use mizan_core::models::mood::MoodLevel;
use mizan_core::models::results::{AssessmentResults, PatternScore};
use mizan_instruments::resources::{
    CRISIS_RESOURCES, CrisisResource, EducationalResource, resources_for_disorder,
};
use mizan_instruments::summary::{DISCLAIMER, PatternLevel, disorder_feedback, overall_level};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CriterionRow {
    pub criterion: String,
    /// Average intensity, 0 to 4.
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternRow {
    pub disorder_id: String,
    pub name: String,
    pub name_en: String,
    pub percentage: u32,
    pub level: PatternLevel,
    pub level_label: &'static str,
    pub description: String,
    pub feedback: Option<&'static str>,
    pub total_symptoms: usize,
    pub max_symptoms: usize,
    pub criteria: Vec<CriterionRow>,
    pub resources: Vec<&'static EducationalResource>,
}

impl PatternRow {
    pub fn new(module_id: &str, score: &PatternScore) -> Self {
        let level = PatternLevel::from_percentage(score.percentage);
        Self {
            disorder_id: score.disorder_id.clone(),
            name: score.disorder_name.clone(),
            name_en: score.disorder_name_en.clone(),
            percentage: score.percentage,
            level,
            level_label: level.label_ar(),
            description: level.description(&score.disorder_name),
            feedback: disorder_feedback(&score.disorder_id),
            total_symptoms: score.total_symptoms,
            max_symptoms: score.max_symptoms,
            criteria: score
                .criterion_scores
                .iter()
                .map(|(criterion, score)| CriterionRow {
                    criterion: criterion.clone(),
                    score: *score,
                })
                .collect(),
            resources: resources_for_disorder(module_id, &score.disorder_id),
        }
    }
}

/// Everything a report template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub module_id: String,
    pub module_title: String,
    pub completed_at: String,
    pub total_questions: usize,
    pub total_responses: usize,
    pub patterns: Vec<PatternRow>,
    pub overall_level: PatternLevel,
    pub overall_label: &'static str,
    pub summary: &'static str,
    pub disclaimer: &'static str,
    /// Arabic label of the mood check-in, if one was given.
    pub mood: Option<&'static str>,
    /// A crisis interrupt was raised during the session.
    pub crisis_raised: bool,
    pub crisis_resources: Vec<&'static CrisisResource>,
}

impl ReportContext {
    pub fn new(results: &AssessmentResults) -> Self {
        let level = overall_level(&results.pattern_scores);
        Self {
            module_id: results.module_id.clone(),
            module_title: results.module_title.clone(),
            completed_at: results.completed_at.strftime("%Y-%m-%d %H:%M UTC").to_string(),
            total_questions: results.total_questions,
            total_responses: results.total_responses,
            patterns: results
                .pattern_scores
                .iter()
                .map(|score| PatternRow::new(&results.module_id, score))
                .collect(),
            overall_level: level,
            overall_label: level.label_ar(),
            summary: level.guidance(),
            disclaimer: DISCLAIMER,
            mood: None,
            crisis_raised: false,
            crisis_resources: CRISIS_RESOURCES.iter().collect(),
        }
    }

    pub fn with_mood(mut self, mood: Option<MoodLevel>) -> Self {
        self.mood = mood.map(MoodLevel::label_ar);
        self
    }

    /// Mark that a crisis interrupt was raised, so the helplines are
    /// introduced with a direct appeal.
    pub fn with_crisis_raised(mut self, raised: bool) -> Self {
        self.crisis_raised = raised;
        self
    }
}
