use std::io::Cursor;
use std::sync::Arc;

use mizan_audit::{MemorySink, SafetyAction};
use mizan_cli::prompt::Prompt;
use mizan_cli::runner::{RunOutcome, run_assessment};
use mizan_cli::script::AnswerScript;
use mizan_core::models::mood::MoodLevel;
use mizan_core::models::module::AssessmentModule;
use mizan_core::models::response::{CompositeValue, DURATION_LABELS, ResponseValue, YesNo};
use mizan_instruments::flow::{AssessmentFlow, FlowState};
use mizan_instruments::load_module;

fn flow() -> AssessmentFlow<MemorySink> {
    AssessmentFlow::with_sink(MemorySink::default())
}

const CALM_MDD: &str = r#"{
  "mood": "good",
  "answers": {
    "mdd_a1": "never", "mdd_a2": "never",
    "mdd_a3": { "changed": "no_change" },
    "mdd_a4": 0,
    "mdd_a5": "never", "mdd_a6": "never", "mdd_a7": "never", "mdd_a8": "never",
    "mdd_a9": "never"
  }
}"#;

const HEAVY_MDD: &str = r#"{
  "acknowledge_crisis": true,
  "answers": {
    "mdd_a1": "often", "mdd_a2": "often",
    "mdd_a3": { "changed": "changed", "direction": "decrease" },
    "mdd_a4": 3,
    "mdd_a5": "sometimes", "mdd_a6": "often", "mdd_a7": "sometimes", "mdd_a8": "often",
    "mdd_a9": "rarely",
    "mdd_a_duration": { "occurrence": "yes", "duration": 3 },
    "mdd_b1": 3
  }
}"#;

fn completed(outcome: RunOutcome) -> (mizan_core::models::results::AssessmentResults, bool, Option<MoodLevel>) {
    match outcome {
        RunOutcome::Completed {
            results,
            crisis_acknowledged,
            mood,
        } => (results, crisis_acknowledged, mood),
        RunOutcome::Exited => panic!("run exited"),
    }
}

#[test]
fn scripted_calm_run_scores_low() {
    let module = load_module("depression").expect("depression");
    let mut script = AnswerScript::from_json(CALM_MDD).expect("script");
    let mut flow = flow();
    let mut out = Vec::new();

    let outcome =
        run_assessment(&mut flow, module, "mdd", None, &mut script, &mut out).expect("runs");
    let (results, crisis, mood) = completed(outcome);

    assert!(!crisis);
    assert_eq!(mood, Some(MoodLevel::Good));
    assert_eq!(results.total_responses, 9);
    let mdd = &results.pattern_scores[0];
    assert_eq!(mdd.max_symptoms, 9);
    assert_eq!(mdd.percentage, 0);
    assert_eq!(flow.state(), FlowState::Completed);
    assert!(flow.sink().events.is_empty());
}

#[test]
fn scripted_run_through_acknowledged_crisis() {
    let module = load_module("depression").expect("depression");
    let mut script = AnswerScript::from_json(HEAVY_MDD).expect("script");
    let mut flow = flow();
    let mut out = Vec::new();

    let outcome =
        run_assessment(&mut flow, module, "mdd", None, &mut script, &mut out).expect("runs");
    let (results, crisis, _) = completed(outcome);

    assert!(crisis);
    let mdd = &results.pattern_scores[0];
    // 12 visible, the optional C1 left unanswered; A9 at "rarely" is not a symptom.
    assert_eq!(mdd.max_symptoms, 12);
    assert_eq!(mdd.total_symptoms, 10);
    assert_eq!(mdd.percentage, 83);
    assert_eq!(results.pattern_scores[1].disorder_id, "pdd");

    let actions: Vec<_> = flow.sink().events.iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![SafetyAction::CrisisTriggered, SafetyAction::CrisisAcknowledged]
    );
    let transcript = String::from_utf8(out).expect("utf8");
    assert!(transcript.contains("04-6575555"));
}

#[test]
fn declining_to_continue_acknowledges_then_exits() {
    let module = load_module("depression").expect("depression");
    let json = HEAVY_MDD.replace("\"acknowledge_crisis\": true", "\"acknowledge_crisis\": false");
    let mut script = AnswerScript::from_json(&json).expect("script");
    let mut flow = flow();

    let outcome = run_assessment(&mut flow, module, "mdd", None, &mut script, &mut Vec::new())
        .expect("runs");

    assert!(matches!(outcome, RunOutcome::Exited));
    assert_eq!(flow.state(), FlowState::Idle);
    let actions: Vec<_> = flow.sink().events.iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            SafetyAction::CrisisTriggered,
            SafetyAction::CrisisAcknowledged,
            SafetyAction::ExitedAfterCrisis
        ]
    );
    let exit = flow.sink().events.last().expect("exit event");
    assert_eq!(exit.details, Some(serde_json::json!({ "acknowledged": true })));
}

#[test]
fn missing_required_answer_fails() {
    let module = load_module("depression").expect("depression");
    let mut script = AnswerScript::from_json(r#"{ "answers": { "mdd_a1": "never" } }"#)
        .expect("script");
    let err = run_assessment(&mut flow(), module, "mdd", None, &mut script, &mut Vec::new())
        .unwrap_err();
    assert!(err.to_string().contains("mdd_a2"));
}

#[test]
fn half_answered_composite_fails() {
    let module = load_module("depression").expect("depression");
    let json = CALM_MDD.replace(r#"{ "changed": "no_change" }"#, r#"{ "changed": "changed" }"#);
    let mut script = AnswerScript::from_json(&json).expect("script");
    let err = run_assessment(&mut flow(), module, "mdd", None, &mut script, &mut Vec::new())
        .unwrap_err();
    assert!(err.to_string().contains("mdd_a3 is incomplete"));
}

#[test]
fn unknown_disorder_fails_before_starting() {
    let module = load_module("depression").expect("depression");
    let mut script = AnswerScript::default();
    let mut flow = flow();
    let result = run_assessment(&mut flow, module, "gad", None, &mut script, &mut Vec::new());
    assert!(result.is_err());
    assert_eq!(flow.state(), FlowState::Idle);
}

#[test]
fn preset_mood_wins_over_script() {
    let module = load_module("depression").expect("depression");
    let mut script = AnswerScript::from_json(CALM_MDD).expect("script");
    let outcome = run_assessment(
        &mut flow(),
        module,
        "mdd",
        Some(MoodLevel::VeryLow),
        &mut script,
        &mut Vec::new(),
    )
    .expect("runs");
    let (_, _, mood) = completed(outcome);
    assert_eq!(mood, Some(MoodLevel::VeryLow));
}

fn prompt(lines: &[&str]) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
    let mut input = lines.join("\n");
    input.push('\n');
    Prompt::new(Cursor::new(input.into_bytes()), Vec::new())
}

#[test]
fn interactive_panic_run() {
    let module = load_module("anxiety").expect("anxiety");
    // mood skipped; A1 yes then weekly; A2 two symptoms; B1 often; B2 no
    let mut prompt = prompt(&["", "1", "3", "1,3", "4", "2"]);
    let mut flow = flow();

    let outcome = run_assessment(&mut flow, module, "panic", None, &mut prompt, &mut Vec::new())
        .expect("runs");
    let (results, _, mood) = completed(outcome);
    assert!(mood.is_none());

    let session = flow.session().expect("session");
    assert_eq!(
        session.response("panic_a1").map(|r| &r.value),
        Some(&ResponseValue::Composite(CompositeValue::YesNoThenFrequency {
            occurrence: Some(YesNo::Yes),
            frequency: Some(3),
        }))
    );
    assert_eq!(
        session.response("panic_a2").map(|r| &r.value),
        Some(&ResponseValue::Selection(vec![
            "palpitations".to_string(),
            "trembling".to_string()
        ]))
    );

    let panic = results
        .pattern_scores
        .iter()
        .find(|s| s.disorder_id == "panic")
        .expect("panic score");
    assert_eq!(panic.max_symptoms, 4);
    assert_eq!(panic.total_symptoms, 3);
    assert_eq!(panic.percentage, 75);
}

#[test]
fn interactive_no_hides_follow_ups() {
    let module = load_module("anxiety").expect("anxiety");
    let mut prompt = prompt(&["2", "2"]);
    let outcome = run_assessment(&mut flow(), module, "panic", None, &mut prompt, &mut Vec::new())
        .expect("runs");
    let (results, _, mood) = completed(outcome);

    assert_eq!(mood, Some(MoodLevel::Low));
    let panic = &results.pattern_scores[1];
    assert_eq!(panic.disorder_id, "panic");
    assert_eq!(panic.max_symptoms, 1);
    assert_eq!(panic.percentage, 0);
}

#[test]
fn interactive_reprompts_on_bad_and_missing_input() {
    let module = load_module("anxiety").expect("anxiety");
    // B2: invalid "9", skipped while required, then "yes"
    let mut prompt = prompt(&["", "1", "1", "2", "5", "9", "", "1"]);
    let mut flow = flow();
    let outcome = run_assessment(&mut flow, module, "panic", None, &mut prompt, &mut Vec::new())
        .expect("runs");
    assert!(matches!(outcome, RunOutcome::Completed { .. }));

    let session = flow.session().expect("session");
    assert_eq!(
        session.response("panic_b2").map(|r| &r.value),
        Some(&ResponseValue::label("yes"))
    );
}

#[test]
fn interactive_back_then_quit() {
    let module = load_module("anxiety").expect("anxiety");
    let mut prompt = prompt(&["", "2", "b", "q"]);
    let mut flow = flow();
    let outcome = run_assessment(&mut flow, module, "gad", None, &mut prompt, &mut Vec::new())
        .expect("runs");
    assert!(matches!(outcome, RunOutcome::Exited));
    assert_eq!(flow.state(), FlowState::Idle);
}

#[test]
fn duration_question_offers_built_in_buckets() {
    let module = AssessmentModule::from_json(
        r#"{
          "module": { "id": "custom", "title": "مخصص", "title_en": "Custom" },
          "disorders": [{
            "id": "x", "name": "س", "name_en": "X",
            "questions": [{
              "id": "x_since", "criterion": "A", "text": "منذ متى؟",
              "response_type": "duration", "required": true
            }]
          }]
        }"#,
    )
    .expect("module");
    // mood skipped; free text is rejected; option 3 picks the third bucket
    let mut prompt = prompt(&["", "a while", "3"]);
    let mut flow = flow();

    let outcome =
        run_assessment(&mut flow, Arc::new(module), "x", None, &mut prompt, &mut Vec::new())
            .expect("runs");
    assert!(matches!(outcome, RunOutcome::Completed { .. }));
    let session = flow.session().expect("session");
    assert_eq!(
        session.response("x_since").map(|r| &r.value),
        Some(&ResponseValue::label(DURATION_LABELS[2]))
    );
}

#[test]
fn end_of_input_exits() {
    let module = load_module("anxiety").expect("anxiety");
    let mut prompt = Prompt::new(Cursor::new(Vec::new()), Vec::new());
    let outcome = run_assessment(&mut flow(), module, "gad", None, &mut prompt, &mut Vec::new())
        .expect("runs");
    assert!(matches!(outcome, RunOutcome::Exited));
}

#[test]
fn interactive_crisis_needs_explicit_continue() {
    let module = load_module("depression").expect("depression");
    let mut lines = vec!["", "1", "1", "2", "1", "1", "1", "1", "1"];
    // A9 "rarely", then decline to continue
    lines.extend(["2", "لا"]);
    let mut prompt = prompt(&lines);
    let mut flow = flow();
    let mut out = Vec::new();

    let outcome =
        run_assessment(&mut flow, module, "mdd", None, &mut prompt, &mut out).expect("runs");
    assert!(matches!(outcome, RunOutcome::Exited));
    assert_eq!(flow.sink().events.len(), 3);
    assert!(String::from_utf8(out).expect("utf8").contains("920033360"));
}
