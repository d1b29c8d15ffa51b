use clap::Parser;
use std::path::PathBuf;

use crate::quiz::Settings;

#[derive(Debug, Parser)]
#[command(name = "timed-quiz", about = "Answer as many quiz questions as you can before time runs out")]
pub struct Cli {
    /// CSV file of `question,answer` rows
    #[arg(long, default_value = "problems.csv")]
    pub filename: PathBuf,

    /// Time limit for the whole quiz, in seconds
    #[arg(long = "timeLimit", default_value_t = 30, allow_negative_numbers = true)]
    pub time_limit: i64,

    /// Maximum number of questions to ask
    #[arg(long, default_value_t = 5)]
    pub questions: usize,

    /// Ask questions in random order
    #[arg(long)]
    pub shuffle: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            time_limit: Settings::time_limit_from_secs(self.time_limit),
            question_count: self.questions,
            shuffle: self.shuffle,
        }
    }
}
