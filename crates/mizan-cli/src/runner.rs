//! Drives one disorder questionnaire through [`AssessmentFlow`].

use std::io::Write;
use std::sync::Arc;

use mizan_audit::SafetySink;
use mizan_core::models::module::AssessmentModule;
use mizan_core::models::mood::MoodLevel;
use mizan_core::models::question::Question;
use mizan_core::models::response::ResponseValue;
use mizan_core::models::results::AssessmentResults;
use mizan_instruments::flow::{AssessmentFlow, RecordOutcome};
use mizan_instruments::resources::CRISIS_RESOURCES;

/// What the user did at a question.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Value(ResponseValue),
    /// Leave the question unanswered.
    Skip,
    Back,
    Quit,
}

/// A supplier of answers: a person at a terminal or a script.
pub trait AnswerSource {
    fn mood(&mut self) -> eyre::Result<Option<MoodLevel>>;

    fn answer(&mut self, question: &Question, module: &AssessmentModule) -> eyre::Result<Answer>;

    /// Called when a required question is still unanswered or only half
    /// answered. Returning an error ends the run.
    fn incomplete(&mut self, question: &Question) -> eyre::Result<()>;

    /// Asked after the helplines are shown. `false` leaves the assessment
    /// once the interrupt is acknowledged.
    fn acknowledge_crisis(&mut self, modal_type: &str) -> eyre::Result<bool>;
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    Completed {
        results: AssessmentResults,
        /// A crisis interrupt was raised and acknowledged during the run.
        crisis_acknowledged: bool,
        mood: Option<MoodLevel>,
    },
    Exited,
}

/// Run `disorder_id` of `module` to completion or exit. A `preset_mood`
/// skips the source's mood check-in.
pub fn run_assessment<K, S, W>(
    flow: &mut AssessmentFlow<K>,
    module: Arc<AssessmentModule>,
    disorder_id: &str,
    preset_mood: Option<MoodLevel>,
    source: &mut S,
    out: &mut W,
) -> eyre::Result<RunOutcome>
where
    K: SafetySink,
    S: AnswerSource,
    W: Write,
{
    let disorder = module.require_disorder(disorder_id)?;
    writeln!(out, "{} ({})", disorder.name, disorder.name_en)?;
    let intro = &disorder.educational_intro;
    if !intro.title.is_empty() {
        writeln!(out, "\n{}\n{}", intro.title, intro.body)?;
        for point in &intro.key_points {
            writeln!(out, "  • {point}")?;
        }
    }

    let mood = match preset_mood {
        Some(mood) => Some(mood),
        None => source.mood()?,
    };
    flow.set_mood(mood);
    flow.start(Arc::clone(&module), disorder_id);

    while let Some(question) = flow.current_question().cloned() {
        writeln!(
            out,
            "\n[{}/{}] {}",
            flow.current_question_index() + 1,
            flow.total_questions(),
            question.text
        )?;
        if let Some(help) = &question.help_text {
            writeln!(out, "{help}")?;
        }

        match source.answer(&question, &module)? {
            Answer::Quit => {
                flow.exit();
                return Ok(RunOutcome::Exited);
            }
            Answer::Back => {
                flow.previous();
                continue;
            }
            Answer::Skip => {}
            Answer::Value(value) => {
                if let RecordOutcome::CrisisInterrupt { modal_type } =
                    flow.record_response(&question.id, value)
                {
                    write_crisis_resources(out)?;
                    let carry_on = source.acknowledge_crisis(&modal_type)?;
                    // The helplines were shown either way.
                    flow.acknowledge_crisis();
                    if !carry_on {
                        flow.exit();
                        return Ok(RunOutcome::Exited);
                    }
                }
            }
        }

        if !flow.current_response_complete() {
            source.incomplete(&question)?;
            continue;
        }
        if flow.is_last_question() {
            break;
        }
        flow.next();
    }

    let crisis_acknowledged = flow.show_help_affordance();
    let mood = flow.mood();
    let results = flow
        .complete()
        .cloned()
        .ok_or_else(|| eyre::eyre!("assessment could not be completed"))?;
    Ok(RunOutcome::Completed {
        results,
        crisis_acknowledged,
        mood,
    })
}

pub fn write_crisis_resources<W: Write>(out: &mut W) -> eyre::Result<()> {
    writeln!(out, "\nنحن هنا من أجلك. إذا كنت تفكر في إيذاء نفسك، تواصل الآن مع:")?;
    for resource in CRISIS_RESOURCES {
        writeln!(
            out,
            "  - {} ({}): {}، {}",
            resource.organization, resource.country, resource.phone, resource.availability
        )?;
    }
    Ok(())
}
