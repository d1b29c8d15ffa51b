use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    QuizRules(Duration, usize),
    QuestionBegins(String),
    TimeUp,
    Results(usize, usize),
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::QuizRules(time_limit, question_count) => write!(
                f,
                "You have {} seconds to answer {} questions.",
                time_limit.as_secs(),
                question_count
            ),
            Message::QuestionBegins(prompt) => write!(f, "Question: {}", prompt),
            Message::TimeUp => write!(f, "Time's up!"),
            Message::Results(score, possible) => {
                write!(f, "You got {} out of a possible {}", score, possible)
            }
        }
    }
}

pub trait QuizOutput {
    fn say(&mut self, message: &Message);
}

pub struct ConsoleOutput<W: Write> {
    writer: W,
}

impl ConsoleOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        ConsoleOutput { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> QuizOutput for ConsoleOutput<W> {
    fn say(&mut self, message: &Message) {
        if let Err(e) = writeln!(self.writer, "{}", message).and_then(|_| self.writer.flush()) {
            log::error!("Could not print message: {}", e);
        }
    }
}
