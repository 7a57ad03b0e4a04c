use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use kwlint::error::LintError;
use kwlint::keywords::registry;
use kwlint::rules::RULES;
use kwlint::{annotations_to_json, read_descriptor_set, read_options, run_check, CheckRequest};

#[derive(Parser)]
#[command(name = "kwlint")]
#[command(about = "Check schema package and field names against reserved keywords of target languages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a JSON descriptor set and print any annotations
    Check {
        /// Input descriptor set (`{"files": [...]}`)
        #[arg(short, long)]
        input: PathBuf,

        /// JSON options file (`{"enabled_languages": [...]}`)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Language to check; repeat to check several. Replaces the config's list
        #[arg(short, long = "language")]
        languages: Vec<String>,

        /// Rule id to run; repeat to run several. Defaults to every default rule
        #[arg(short, long = "rule")]
        rules: Vec<String>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// List the registered languages and their lookup keys
    Languages,

    /// List the available rules
    Rules,
}

/// Exit status for a failed run, as opposed to a run that found annotations.
const ERROR_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}

fn error_message(err: &LintError) -> String {
    format!("Error: {}", err)
}

fn run(cli: Cli) -> Result<ExitCode, LintError> {
    match cli.command {
        Commands::Check { input, config, languages, rules, format } => {
            let mut options = match &config {
                Some(path) => read_options(path)?,
                None       => Default::default(),
            };
            if !languages.is_empty() {
                options.enabled_languages = languages;
            }
            // Reject bad option values before touching the input.
            options.resolve(registry())?;
            let request = CheckRequest { options, rule_ids: rules };

            let set = read_descriptor_set(&input)?;
            let annotations = run_check(&request, &set.files)?;
            tracing::info!(count = annotations.len(), input = %input.display(), "check complete");

            match format {
                Format::Text => {
                    for annotation in &annotations {
                        println!("{}", annotation);
                    }
                }
                Format::Json => println!("{}", annotations_to_json(&annotations)?),
            }

            if annotations.is_empty() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }

        Commands::Languages => {
            for language in registry().languages() {
                println!("{:<12} {:<12} {} keywords", language.key(), language.name(), language.keywords().len());
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Rules => {
            for rule in RULES.iter() {
                let default = if rule.default { "default" } else { "" };
                println!("{:<48} {:<8} {}", rule.id, default, rule.purpose);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_language_is_reported_with_display() {
        let cli = Cli::try_parse_from([
            "kwlint", "check", "--input", "missing.json", "--language", "klingon",
        ])
        .expect("arguments should parse");

        let err = run(cli).unwrap_err();
        let message = error_message(&err);
        assert!(message.starts_with(r#"Error: invalid language given "klingon", expected one of: "#));
        assert!(!message.contains("InvalidLanguage"));
    }

    #[test]
    fn test_missing_input_is_an_io_error() {
        let cli = Cli::try_parse_from(["kwlint", "check", "--input", "does/not/exist.json"])
            .expect("arguments should parse");
        let err = run(cli).unwrap_err();
        assert!(error_message(&err).starts_with("Error: I/O error: "));
    }
}
