use std::collections::BTreeMap;

use mizan_core::models::mood::MoodLevel;
use mizan_core::models::results::{AssessmentResults, PatternScore};
use mizan_export::error::ExportError;
use mizan_export::render::{render_report, render_template};
use mizan_export::report::ReportContext;
use mizan_instruments::summary::{DISCLAIMER, PatternLevel, disorder_feedback};

fn score(id: &str, name_en: &str, total: usize, max: usize, percentage: u32) -> PatternScore {
    PatternScore {
        disorder_id: id.to_string(),
        disorder_name: format!("نمط {id}"),
        disorder_name_en: name_en.to_string(),
        criterion_scores: BTreeMap::from([("A".to_string(), 3.0), ("B".to_string(), 1.5)]),
        total_symptoms: total,
        max_symptoms: max,
        percentage,
    }
}

fn results() -> AssessmentResults {
    AssessmentResults {
        module_id: "depression".to_string(),
        module_title: "الاضطرابات الاكتئابية".to_string(),
        completed_at: "2026-03-01T10:30:00Z".parse().expect("timestamp"),
        pattern_scores: vec![
            score("mdd", "Major Depressive Disorder", 7, 10, 70),
            score("pdd", "Persistent Depressive Disorder", 0, 5, 0),
        ],
        total_questions: 18,
        total_responses: 10,
    }
}

#[test]
fn context_summarizes_results() {
    let report = ReportContext::new(&results());
    assert_eq!(report.overall_level, PatternLevel::Elevated);
    assert_eq!(report.summary, PatternLevel::Elevated.guidance());
    assert_eq!(report.completed_at, "2026-03-01 10:30 UTC");
    assert_eq!(report.patterns.len(), 2);
    assert_eq!(report.patterns[1].level, PatternLevel::Low);
    assert_eq!(report.patterns[0].criteria[1].criterion, "B");
    assert_eq!(report.crisis_resources.len(), 2);
    assert!(!report.crisis_raised);
    assert!(report.mood.is_none());
}

#[test]
fn default_report_lists_every_pattern() {
    let rendered = render_report(&ReportContext::new(&results())).expect("renders");
    assert!(rendered.starts_with("الاضطرابات الاكتئابية"));
    assert!(rendered.contains("Major Depressive Disorder"));
    assert!(rendered.contains("Persistent Depressive Disorder"));
    assert!(rendered.contains("70%"));
    assert!(rendered.contains("10 من 18"));
    assert!(rendered.contains(PatternLevel::Elevated.guidance()));
    assert!(rendered.contains(DISCLAIMER));
}

#[test]
fn helplines_are_always_listed() {
    let plain = render_report(&ReportContext::new(&results())).expect("renders");
    assert!(plain.contains("04-6575555"));
    assert!(plain.contains("920033360"));
    assert!(plain.contains("إذا كنت بحاجة إلى دعم فوري"));
    assert!(!plain.contains("أشرت إلى أفكار مقلقة"));

    let report = ReportContext::new(&results()).with_crisis_raised(true);
    let rendered = render_report(&report).expect("renders");
    assert!(rendered.contains("920033360"));
    assert!(rendered.contains("أشرت إلى أفكار مقلقة"));
    assert!(!rendered.contains("إذا كنت بحاجة إلى دعم فوري"));
}

#[test]
fn pattern_rows_carry_result_copy() {
    let report = ReportContext::new(&results());
    let mdd = &report.patterns[0];
    assert_eq!(mdd.description, PatternLevel::Elevated.description("نمط mdd"));
    assert_eq!(mdd.feedback, disorder_feedback("mdd"));
    assert_eq!(mdd.resources.len(), 1);

    let rendered = render_report(&report).expect("renders");
    assert!(rendered.contains(&mdd.description));
    assert!(rendered.contains(disorder_feedback("pdd").expect("pdd feedback")));
    assert!(rendered.contains("https://www.who.int/"));
}

#[test]
fn mood_is_shown_when_given() {
    let report = ReportContext::new(&results()).with_mood(Some(MoodLevel::Low));
    let rendered = render_report(&report).expect("renders");
    assert!(rendered.contains("المزاج عند البدء: منخفض"));
}

#[test]
fn empty_results_read_as_low() {
    let mut empty = results();
    empty.pattern_scores.clear();
    let report = ReportContext::new(&empty);
    assert_eq!(report.overall_level, PatternLevel::Low);
    assert!(render_report(&report).is_ok());
}

#[test]
fn custom_template() {
    let report = ReportContext::new(&results());
    let rendered = render_template(
        "brief.txt",
        "{{ module_id }}:{% for p in patterns %} {{ p.disorder_id }}={{ p.percentage }}{% endfor %}",
        &report,
    )
    .expect("renders");
    assert_eq!(rendered, "depression: mdd=70 pdd=0");
}

#[test]
fn malformed_template_is_a_parse_error() {
    let report = ReportContext::new(&results());
    let err = render_template("bad.txt", "{% for p in patterns %}", &report).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn unknown_variable_is_a_render_error() {
    let report = ReportContext::new(&results());
    let err = render_template("bad.txt", "{{ nothing_here }}", &report).unwrap_err();
    assert!(matches!(err, ExportError::TemplateRender(_)));
}
