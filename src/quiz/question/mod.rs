use anyhow::Result;
use crossbeam::channel::{select, Receiver, RecvError};

use crate::input::{AnswerEvent, InputError};
use crate::output::{Message, QuizOutput};
use crate::quiz::deadline::Deadline;
use crate::quiz::definition::Question;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuestionOutcome {
    Correct,
    Incorrect,
    TimedOut,
}

/// Resolves questions by racing the next typed line against the session deadline.
///
/// A line consumed here is spent, even when the deadline wins right after it arrived.
pub struct QuestionRunner<'a> {
    feed: &'a Receiver<AnswerEvent>,
    deadline: &'a Deadline,
}

impl<'a> QuestionRunner<'a> {
    pub fn new(feed: &'a Receiver<AnswerEvent>, deadline: &'a Deadline) -> Self {
        QuestionRunner { feed, deadline }
    }

    pub fn evaluate<O: QuizOutput>(
        &self,
        question: &Question,
        output: &mut O,
    ) -> Result<QuestionOutcome> {
        if self.deadline.has_expired() {
            return Ok(QuestionOutcome::TimedOut);
        }

        output.say(&Message::QuestionBegins(question.prompt.clone()));

        let expired = self.deadline.expired_signal();
        let event = select! {
            recv(self.feed) -> event => event,
            recv(expired) -> _ => return Ok(QuestionOutcome::TimedOut),
        };

        self.resolve(event, question)
    }

    /// Classifies one event taken off the feed. Expiry wins over anything that
    /// arrived at the same time, including a broken input stream.
    fn resolve(
        &self,
        event: std::result::Result<AnswerEvent, RecvError>,
        question: &Question,
    ) -> Result<QuestionOutcome> {
        if self.deadline.has_expired() {
            return Ok(QuestionOutcome::TimedOut);
        }

        let guess = match event {
            Ok(Ok(line)) => line,
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => return Err(InputError::Closed.into()),
        };

        let outcome = if question.is_guess_correct(&guess) {
            QuestionOutcome::Correct
        } else {
            QuestionOutcome::Incorrect
        };
        log::debug!(
            "Guess {:?} for {:?}: {:?} ({:?} remaining)",
            guess,
            question.prompt,
            outcome,
            self.deadline.time_remaining()
        );
        Ok(outcome)
    }
}
