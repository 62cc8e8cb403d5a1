#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use mizan_core::condition::Condition;
use mizan_core::models::module::{AssessmentModule, Disorder, EducationalIntro, ModuleInfo};
use mizan_core::models::question::{CrisisTrigger, Question, QuestionConditional, ResponseType};
use mizan_core::models::response::{QuestionResponse, ResponseValue};

pub fn question(id: &str, criterion: &str, response_type: ResponseType) -> Question {
    Question {
        id: id.to_string(),
        criterion: criterion.to_string(),
        text: format!("question {id}"),
        help_text: None,
        response_type,
        required: true,
        conditional: None,
        options: Vec::new(),
        crisis_trigger: None,
    }
}

pub fn frequency_question(id: &str, criterion: &str) -> Question {
    question(id, criterion, ResponseType::Frequency5Point)
}

pub fn depends_on(mut question: Question, dependency: &str, show_if: &str) -> Question {
    question.conditional = Some(QuestionConditional {
        depends_on: dependency.to_string(),
        show_if: Condition::parse(show_if),
    });
    question
}

pub fn with_trigger(mut question: Question, show_modal_if: &str) -> Question {
    question.crisis_trigger = Some(CrisisTrigger {
        show_modal_if: Condition::parse(show_modal_if),
        modal_type: "suicidal_ideation".to_string(),
    });
    question
}

pub fn disorder(id: &str, questions: Vec<Question>) -> Disorder {
    Disorder {
        id: id.to_string(),
        name: format!("اضطراب {id}"),
        name_en: format!("Disorder {id}"),
        educational_intro: EducationalIntro::default(),
        questions,
    }
}

pub fn module(id: &str, disorders: Vec<Disorder>) -> AssessmentModule {
    AssessmentModule {
        module: ModuleInfo {
            id: id.to_string(),
            title: format!("وحدة {id}"),
            title_en: format!("Module {id}"),
            description: String::new(),
            icon: String::new(),
            color: String::new(),
        },
        disorders,
        response_scales: BTreeMap::new(),
    }
}

pub fn response(question_id: &str, value: ResponseValue) -> QuestionResponse {
    QuestionResponse {
        question_id: question_id.to_string(),
        value,
        timestamp: jiff::Timestamp::now(),
    }
}

pub fn label(value: &str) -> ResponseValue {
    ResponseValue::label(value)
}

/// Module "depression" with disorder "mdd": Q1 (criterion A) and Q2
/// (criterion A, shown when Q1 >= 2).
pub fn depression_fixture() -> Arc<AssessmentModule> {
    Arc::new(module(
        "depression",
        vec![disorder(
            "mdd",
            vec![
                frequency_question("Q1", "A"),
                depends_on(frequency_question("Q2", "A"), "Q1", ">=2"),
            ],
        )],
    ))
}
