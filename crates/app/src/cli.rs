//! Command line interface.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use reqnote_application::{
    ApplicationError, ApplyRequestEdit, ApplyRequestEditInput, RenderRequest, SessionError,
};
use reqnote_domain::VulnerabilityStatus;
use reqnote_infrastructure::{FileSystemRecordStore, to_json_stable};
use tokio::io::AsyncReadExt;

use crate::config::{AppConfig, OutputFormat};

/// Exit code used when the edited text is rejected.
const EXIT_REJECTED: u8 = 2;

/// View and hand-edit captured HTTP requests.
#[derive(Debug, Parser)]
#[command(name = "reqnote", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a stored request as raw HTTP text
    Show {
        /// Record file (JSON)
        record: PathBuf,
    },
    /// Commit edited raw HTTP text to a stored request
    Apply {
        /// Record file (JSON)
        record: PathBuf,
        /// File holding the edited request text, or `-` for stdin
        #[arg(short, long)]
        text: PathBuf,
        /// New request name
        #[arg(long)]
        name: Option<String>,
        /// New testing notes
        #[arg(long)]
        notes: Option<String>,
        /// New vulnerability status (safe, vulnerable, unset)
        #[arg(short, long)]
        status: Option<VulnerabilityStatus>,
    },
}

/// Runs the parsed command.
pub async fn run(cli: Cli, config: &AppConfig) -> Result<ExitCode, Box<dyn Error>> {
    let store = FileSystemRecordStore::new();

    match cli.command {
        Command::Show { record } => {
            let output = RenderRequest::new(store).execute(&record).await?;
            print_text(&output.text);
        }
        Command::Apply {
            record,
            text,
            name,
            notes,
            status,
        } => {
            let input = ApplyRequestEditInput {
                record_path: record,
                text: read_text(&text).await?,
                name,
                notes,
                status,
            };

            match ApplyRequestEdit::new(store).execute(input).await {
                Ok(output) => match config.output {
                    OutputFormat::Text => print_text(&output.text),
                    OutputFormat::Json => print!("{}", to_json_stable(&output.record)?),
                },
                Err(ApplicationError::Session(SessionError::Parse(err))) => {
                    eprintln!("{}", err.user_message());
                    return Ok(ExitCode::from(EXIT_REJECTED));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn read_text(path: &Path) -> std::io::Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buffer = Vec::new();
        tokio::io::stdin().read_to_end(&mut buffer).await?;
        Ok(buffer)
    } else {
        tokio::fs::read(path).await
    }
}

fn print_text(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["reqnote", "show", "login.json"]).unwrap();
        match cli.command {
            Command::Show { record } => assert_eq!(record, PathBuf::from("login.json")),
            Command::Apply { .. } => panic!("expected show"),
        }
    }

    #[test]
    fn test_parse_apply_with_overrides() {
        let cli = Cli::try_parse_from([
            "reqnote",
            "apply",
            "login.json",
            "--text",
            "-",
            "--name",
            "Login",
            "--status",
            "vulnerable",
        ])
        .unwrap();

        match cli.command {
            Command::Apply {
                record,
                text,
                name,
                notes,
                status,
            } => {
                assert_eq!(record, PathBuf::from("login.json"));
                assert_eq!(text, PathBuf::from("-"));
                assert_eq!(name.as_deref(), Some("Login"));
                assert_eq!(notes, None);
                assert_eq!(status, Some(VulnerabilityStatus::Vulnerable));
            }
            Command::Show { .. } => panic!("expected apply"),
        }
    }

    #[test]
    fn test_apply_requires_text() {
        assert!(Cli::try_parse_from(["reqnote", "apply", "login.json"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_status() {
        let result = Cli::try_parse_from([
            "reqnote", "apply", "a.json", "--text", "t.txt", "--status", "maybe",
        ]);
        assert!(result.is_err());
    }
}
