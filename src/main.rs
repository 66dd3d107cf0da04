//! `moderate` - command-line front end for the content moderation library

use clap::{Parser, Subcommand};
use content_moderation::{
    load_banned_words, ClassifierConfig, DynamicFilterConfig, DynamicWordFilter, MatchMode,
    StaticContentClassifier, TermCatalog,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "moderate", version, about = "Check and redact user-generated text")]
struct Cli {
    /// Classifier config (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Replacement term catalog (JSON)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Match terms on word boundaries instead of anywhere in the text
    #[arg(long, global = true)]
    word_boundary: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a name + message submission
    Check {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Classify a piece of text
    Detect { text: String },
    /// Redact bundled terms, then any words from a banned-word list
    Redact {
        text: String,
        /// Banned-word list (JSON array of strings or {word, isActive})
        #[arg(long)]
        banned: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> content_moderation::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => ClassifierConfig::from_path(path)?,
        None => ClassifierConfig::default(),
    };
    if cli.word_boundary {
        config.match_mode = MatchMode::WordBoundary;
    }

    let catalog = match &cli.catalog {
        Some(path) => {
            log::info!("Loading term catalog from {}", path.display());
            Arc::new(TermCatalog::from_path(path)?)
        }
        None => TermCatalog::builtin(),
    };
    let classifier = StaticContentClassifier::new(catalog, config);

    match cli.command {
        Command::Check { name, message } => {
            let result = classifier.validate(&name, &message);
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(if result.is_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Detect { text } => {
            let verdict = classifier.detect(&text);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Redact { text, banned } => {
            let mut redacted = classifier.redact(&text);
            if let Some(path) = banned {
                let entries = load_banned_words(&path)?;
                log::info!("Applying {} banned word entries", entries.len());
                let filter = DynamicWordFilter::new(DynamicFilterConfig {
                    match_mode: classifier.config().match_mode,
                });
                redacted = filter.redact(&redacted, &entries);
            }
            println!("{redacted}");
            Ok(ExitCode::SUCCESS)
        }
    }
}
