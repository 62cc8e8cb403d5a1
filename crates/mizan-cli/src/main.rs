use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use mizan_cli::catalog::Catalog;
use mizan_cli::cli::{Cli, Commands, ConfigAction};
use mizan_cli::commands::{self, RunOptions};
use mizan_cli::config::{default_config_path, load_config};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let mut config = load_config(&config_path)?;
    if let Some(dir) = &cli.content_dir {
        config.content_dir = Some(dir.clone());
    }
    if let Some(filter) = &cli.log_filter {
        config.log_filter = filter.clone();
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let mut stdout = std::io::stdout();
    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&config, &config_path, &mut stdout)?,
            ConfigAction::Init => commands::config_init(&config_path, &mut stdout)?,
        },
        Commands::List => {
            let catalog = Catalog::open(config.content_dir.as_deref())?;
            commands::list(&catalog, &mut stdout)?;
        }
        Commands::Validate { path } => {
            let catalog = Catalog::open(config.content_dir.as_deref())?;
            commands::validate(&catalog, path.as_deref(), &mut stdout)?;
        }
        Commands::Run {
            disorder,
            module,
            answers,
            mood,
            template,
            format,
            output,
        } => {
            let catalog = Catalog::open(config.content_dir.as_deref())?;
            let options = RunOptions {
                module_id: module.unwrap_or_else(|| config.default_module.clone()),
                disorder_id: disorder,
                answers,
                mood: mood.map(Into::into),
                template,
                format,
                output,
            };
            commands::run(&catalog, &options)?;
        }
    }

    Ok(())
}
