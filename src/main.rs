use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::input::InputReader;
use crate::output::{ConsoleOutput, Message, QuizOutput};
use crate::quiz::definition::QuizDefinition;
use crate::quiz::{QuizSession, TerminationReason};

mod cli;
mod input;
mod output;
mod quiz;

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings();

    let mut definition = QuizDefinition::open(&cli.filename)?;
    log::debug!(
        "Loaded {} questions from {:?}",
        definition.get_questions().len(),
        cli.filename
    );
    if settings.shuffle {
        definition.shuffle();
    }

    let feed = InputReader::stdin()?;
    let session = QuizSession::new(
        definition.into_questions(),
        settings,
        ConsoleOutput::stdout(),
    );
    let result = session.run(feed.receiver())?;
    feed.stop();

    match result.termination_reason {
        TerminationReason::Completed => log::info!("Quiz completed"),
        TerminationReason::TimedOut => log::info!(
            "Quiz timed out after {} questions",
            result.questions_attempted
        ),
    }
    ConsoleOutput::stdout().say(&Message::Results(result.score, result.question_count));

    Ok(())
}

/// Exit status for a finished run: a completed or timed out quiz is a success.
fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    ExitCode::from(exit_status(&run(&cli)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use super::*;
    use crate::quiz::definition::LoadError;

    fn cli_for(filename: &Path) -> Cli {
        Cli {
            filename: filename.to_path_buf(),
            time_limit: 30,
            questions: 5,
            shuffle: false,
        }
    }

    #[test]
    fn missing_quiz_file_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(&dir.path().join("missing.csv"));
        let result = run(&cli);
        assert!(result.is_err());
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn quiz_file_without_questions_fails_the_run() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b",\n").unwrap();
        let result = run(&cli_for(file.path()));
        assert!(result.as_ref().unwrap_err().downcast_ref::<LoadError>().is_some());
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn malformed_quiz_file_fails_the_run() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1+1,2\n2+2,4,extra\n").unwrap();
        let result = run(&cli_for(file.path()));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn finished_quiz_exits_cleanly() {
        assert_eq!(exit_status(&Ok(())), 0);
    }
}
