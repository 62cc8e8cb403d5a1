//! Interactive terminal answers.
//!
//! Options are numbered from 1. At any question `b` goes back, `q` quits
//! and an empty line skips.

use std::io::{BufRead, Write};

use mizan_core::models::module::AssessmentModule;
use mizan_core::models::mood::MoodLevel;
use mizan_core::models::question::{Question, ResponseType};
use mizan_core::models::response::{CompositeValue, DURATION_LABELS, Frequency, ResponseValue};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::runner::{Answer, AnswerSource};

struct Choice {
    value: Value,
    label: String,
}

enum Input {
    Picked(Vec<Value>),
    Command(Answer),
}

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> eyre::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show(&mut self, choices: &[Choice]) -> eyre::Result<()> {
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, choice.label)?;
        }
        Ok(())
    }

    /// Read option numbers until the input is valid or a command is given.
    fn pick(&mut self, choices: &[Choice], multiple: bool) -> eyre::Result<Input> {
        self.show(choices)?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(Input::Command(Answer::Quit));
            };
            match line.as_str() {
                "q" => return Ok(Input::Command(Answer::Quit)),
                "b" => return Ok(Input::Command(Answer::Back)),
                "" => return Ok(Input::Command(Answer::Skip)),
                _ => {}
            }
            if choices.is_empty() {
                return Ok(Input::Picked(vec![Value::String(line)]));
            }
            match parse_picks(&line, choices.len(), multiple) {
                Some(indices) => {
                    let values = indices.into_iter().map(|i| choices[i].value.clone()).collect();
                    return Ok(Input::Picked(values));
                }
                None => writeln!(self.output, "اختيار غير صالح، حاول مرة أخرى.")?,
            }
        }
    }

    fn composite(&mut self, question: &Question, module: &AssessmentModule) -> eyre::Result<Answer> {
        let scale = module.scale(question.response_type).ok_or_else(|| {
            eyre::eyre!(
                "module '{}' has no '{}' scale for question {}",
                module.id(),
                question.response_type.key(),
                question.id
            )
        })?;
        let [gate_part, detail_part] = scale.parts.as_slice() else {
            eyre::bail!("scale '{}' must have two parts", question.response_type.key());
        };

        let gate = match self.pick(&scale_choices(&gate_part.options), false)? {
            Input::Command(answer) => return Ok(answer),
            Input::Picked(values) => values.into_iter().next(),
        };
        let mut composite = build_composite(question.response_type, gate.as_ref(), None);
        if composite.gate_open() {
            writeln!(self.output)?;
            match self.pick(&scale_choices(&detail_part.options), false)? {
                Input::Picked(values) => {
                    composite =
                        build_composite(question.response_type, gate.as_ref(), values.first());
                }
                // Keep the gate answer; completeness gating asks again.
                Input::Command(Answer::Skip) => {}
                Input::Command(answer) => return Ok(answer),
            }
        }
        Ok(Answer::Value(ResponseValue::Composite(composite)))
    }
}

impl<R: BufRead, W: Write> AnswerSource for Prompt<R, W> {
    fn mood(&mut self) -> eyre::Result<Option<MoodLevel>> {
        writeln!(self.output, "كيف تشعر اليوم؟ (اترك السطر فارغاً للتخطي)")?;
        let choices: Vec<Choice> = MoodLevel::ALL
            .iter()
            .map(|mood| Choice {
                value: serde_json::to_value(mood).unwrap_or(Value::Null),
                label: mood.label_ar().to_string(),
            })
            .collect();
        match self.pick(&choices, false)? {
            Input::Picked(values) => Ok(values.first().and_then(parse)),
            Input::Command(_) => Ok(None),
        }
    }

    fn answer(&mut self, question: &Question, module: &AssessmentModule) -> eyre::Result<Answer> {
        if question.response_type.is_composite() {
            return self.composite(question, module);
        }

        let multiple = question.response_type == ResponseType::MultiSelect;
        if multiple {
            writeln!(self.output, "(يمكن اختيار أكثر من إجابة، مفصولة بفواصل)")?;
        }
        let choices = question_choices(question, module);
        let values = match self.pick(&choices, multiple)? {
            Input::Command(answer) => return Ok(answer),
            Input::Picked(values) => values,
        };

        let value = if multiple {
            ResponseValue::Selection(
                values
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
            )
        } else {
            values
                .into_iter()
                .next()
                .and_then(|v| parse(&v))
                .ok_or_else(|| eyre::eyre!("option of question {} is not a response value", question.id))?
        };
        Ok(Answer::Value(value))
    }

    fn incomplete(&mut self, _question: &Question) -> eyre::Result<()> {
        writeln!(self.output, "هذا السؤال يحتاج إلى إجابة للمتابعة.")?;
        Ok(())
    }

    fn acknowledge_crisis(&mut self, _modal_type: &str) -> eyre::Result<bool> {
        writeln!(self.output, "اكتب 'متابعة' للاستمرار في التقييم، أو أي شيء آخر للخروج.")?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        Ok(matches!(line.as_str(), "متابعة" | "c" | "continue"))
    }
}

/// Options of a single-stage question: its own options, the module scale,
/// or the built-in frequency, yes/no and duration labels.
fn question_choices(question: &Question, module: &AssessmentModule) -> Vec<Choice> {
    if !question.options.is_empty() {
        return question
            .options
            .iter()
            .map(|o| Choice {
                value: Value::String(o.value.clone()),
                label: o.label.clone(),
            })
            .collect();
    }
    if let Some(scale) = module.scale(question.response_type) {
        return scale_choices(&scale.options);
    }
    let labels: Vec<&str> = match question.response_type {
        ResponseType::Frequency5Point => Frequency::ALL.iter().map(|f| f.label()).collect(),
        ResponseType::YesNo => vec!["yes", "no"],
        ResponseType::Duration => DURATION_LABELS.to_vec(),
        _ => Vec::new(),
    };
    labels
        .into_iter()
        .map(|l| Choice {
            value: Value::String(l.to_string()),
            label: l.to_string(),
        })
        .collect()
}

fn scale_choices(options: &[mizan_core::models::module::ScaleOption]) -> Vec<Choice> {
    options
        .iter()
        .map(|o| Choice {
            value: o.value.clone(),
            label: match &o.description {
                Some(description) => format!("{} ({description})", o.label),
                None => o.label.clone(),
            },
        })
        .collect()
}

fn build_composite(
    response_type: ResponseType,
    gate: Option<&Value>,
    detail: Option<&Value>,
) -> CompositeValue {
    match response_type {
        ResponseType::YesNoFrequency => CompositeValue::YesNoThenFrequency {
            occurrence: gate.and_then(parse),
            frequency: detail.and_then(parse),
        },
        ResponseType::WeightAppetiteChange => CompositeValue::ChangedThenDirection {
            changed: gate.and_then(parse),
            direction: detail.and_then(parse),
        },
        _ => CompositeValue::YesNoThenDuration {
            occurrence: gate.and_then(parse),
            duration: detail.and_then(parse),
        },
    }
}

fn parse<T: DeserializeOwned>(value: &Value) -> Option<T> {
    serde_json::from_value(value.clone()).ok()
}

/// 0-based indices from a `1` or `1,3` style line.
fn parse_picks(line: &str, len: usize, multiple: bool) -> Option<Vec<usize>> {
    let picks: Vec<usize> = line
        .split(',')
        .map(|part| part.trim().parse::<usize>().ok().filter(|n| (1..=len).contains(n)))
        .collect::<Option<Vec<_>>>()?
        .into_iter()
        .map(|n| n - 1)
        .collect();
    if picks.is_empty() || (!multiple && picks.len() > 1) {
        return None;
    }
    Some(picks)
}
