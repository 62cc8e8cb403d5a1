use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mizan_core::models::mood::MoodLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Arabic plain-text report
    Text,
    /// Results as JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MoodArg {
    VeryLow,
    Low,
    Moderate,
    Good,
    Great,
}

impl From<MoodArg> for MoodLevel {
    fn from(mood: MoodArg) -> Self {
        match mood {
            MoodArg::VeryLow => MoodLevel::VeryLow,
            MoodArg::Low => MoodLevel::Low,
            MoodArg::Moderate => MoodLevel::Moderate,
            MoodArg::Good => MoodLevel::Good,
            MoodArg::Great => MoodLevel::Great,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mizan")]
#[command(about = "Self-guided mental health pattern check-ins", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <config_dir>/mizan/config.json)
    #[arg(long, global = true, env = "MIZAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of module JSON files, overriding the config
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset, overriding the config
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available modules and their disorders
    List,

    /// Check module content for authoring problems
    Validate {
        /// Module file or directory (defaults to the active modules)
        path: Option<PathBuf>,
    },

    /// Take one disorder questionnaire
    Run {
        /// Disorder to assess (e.g. mdd, gad)
        disorder: String,

        /// Module containing the disorder (defaults to the config's default_module)
        #[arg(short, long)]
        module: Option<String>,

        /// Answer from a JSON file instead of the terminal
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Mood check-in, skipping the prompt
        #[arg(long, value_enum)]
        mood: Option<MoodArg>,

        /// Tera template for the text report
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or initialize the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a config file with default values if none exists
    Init,
}
