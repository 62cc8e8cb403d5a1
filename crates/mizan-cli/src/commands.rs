//! Subcommand handlers.

use std::io::Write;
use std::path::{Path, PathBuf};

use mizan_core::models::module::AssessmentModule;
use mizan_core::models::mood::MoodLevel;
use mizan_export::render::{render_report, render_template};
use mizan_export::report::ReportContext;
use mizan_instruments::flow::AssessmentFlow;
use mizan_instruments::load::{load_module_dir, load_module_file};
use mizan_instruments::validate::validate_module;

use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::config::{MizanConfig, save_config};
use crate::prompt::Prompt;
use crate::runner::{RunOutcome, run_assessment};
use crate::script::AnswerScript;

pub fn list<W: Write>(catalog: &Catalog, out: &mut W) -> eyre::Result<()> {
    for module in catalog.modules() {
        writeln!(out, "{} - {} ({})", module.id(), module.module.title, module.module.title_en)?;
        for disorder in &module.disorders {
            writeln!(
                out,
                "  {:<16} {} ({}), {} questions",
                disorder.id,
                disorder.name,
                disorder.name_en,
                disorder.questions.len()
            )?;
        }
    }
    Ok(())
}

/// Validate a module file, a directory of them, or the active catalog.
/// Fails when any issue is found.
pub fn validate<W: Write>(catalog: &Catalog, path: Option<&Path>, out: &mut W) -> eyre::Result<()> {
    let modules: Vec<AssessmentModule> = match path {
        Some(p) if p.is_dir() => load_module_dir(p)?,
        Some(p) => vec![load_module_file(p)?],
        None => catalog.modules().iter().map(|m| m.as_ref().clone()).collect(),
    };

    let mut issues = 0;
    for module in &modules {
        let errors = validate_module(module);
        if errors.is_empty() {
            writeln!(out, "{}: ok", module.id())?;
        }
        for error in &errors {
            writeln!(out, "{error}")?;
        }
        issues += errors.len();
    }

    if issues > 0 {
        eyre::bail!("{issues} content issue(s) found");
    }
    Ok(())
}

pub struct RunOptions {
    pub module_id: String,
    pub disorder_id: String,
    pub answers: Option<PathBuf>,
    pub mood: Option<MoodLevel>,
    pub template: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run(catalog: &Catalog, options: &RunOptions) -> eyre::Result<()> {
    let module = catalog.module(&options.module_id)?;
    let mut flow = AssessmentFlow::new();
    let stdout = std::io::stdout();

    let outcome = match &options.answers {
        Some(path) => {
            let mut script = AnswerScript::load(path)?;
            run_assessment(
                &mut flow,
                module,
                &options.disorder_id,
                options.mood,
                &mut script,
                &mut std::io::sink(),
            )?
        }
        None => {
            let mut prompt = Prompt::new(std::io::stdin().lock(), stdout.lock());
            run_assessment(
                &mut flow,
                module,
                &options.disorder_id,
                options.mood,
                &mut prompt,
                &mut stdout.lock(),
            )?
        }
    };

    let RunOutcome::Completed {
        results,
        crisis_acknowledged,
        mood,
    } = outcome
    else {
        writeln!(stdout.lock(), "تم إنهاء التقييم.")?;
        return Ok(());
    };

    let rendered = match options.format {
        OutputFormat::Json => serde_json::to_string_pretty(&results)?,
        OutputFormat::Text => {
            let report = ReportContext::new(&results)
                .with_mood(mood)
                .with_crisis_raised(crisis_acknowledged);
            match &options.template {
                Some(path) => {
                    let content = std::fs::read_to_string(path).map_err(|e| {
                        eyre::eyre!("failed to read template at {}: {e}", path.display())
                    })?;
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "report".to_string());
                    render_template(&name, &content, &report)?
                }
                None => render_report(&report)?,
            }
        }
    };

    match &options.output {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes())?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => writeln!(stdout.lock(), "\n{rendered}")?,
    }
    Ok(())
}

pub fn config_show<W: Write>(config: &MizanConfig, path: &Path, out: &mut W) -> eyre::Result<()> {
    writeln!(out, "# {}", path.display())?;
    writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    Ok(())
}

pub fn config_init<W: Write>(path: &Path, out: &mut W) -> eyre::Result<()> {
    if path.exists() {
        writeln!(out, "config already exists at {}", path.display())?;
        return Ok(());
    }
    save_config(&MizanConfig::default(), path)?;
    writeln!(out, "wrote {}", path.display())?;
    Ok(())
}
