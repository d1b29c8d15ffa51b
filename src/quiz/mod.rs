use anyhow::Result;
use crossbeam::channel::Receiver;

use self::deadline::Deadline;
use self::definition::Question;
use self::question::{QuestionOutcome, QuestionRunner};
use crate::input::AnswerEvent;
use crate::output::{Message, QuizOutput};

pub use self::settings::Settings;

pub mod deadline;
pub mod definition;
pub mod question;
mod settings;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TerminationReason {
    Completed,
    TimedOut,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionResult {
    pub score: usize,
    pub questions_attempted: usize,
    pub question_count: usize,
    pub termination_reason: TerminationReason,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Ready,
    Running,
    Completed,
    TimedOutEarly,
}

pub struct QuizSession<O: QuizOutput> {
    questions: Vec<Question>,
    settings: Settings,
    current_phase: Phase,
    output: O,
}

impl<O: QuizOutput> QuizSession<O> {
    pub fn new(questions: Vec<Question>, settings: Settings, output: O) -> Self {
        QuizSession {
            questions,
            settings,
            current_phase: Phase::Ready,
            output,
        }
    }

    /// Number of questions this session asks if time allows.
    pub fn question_count(&self) -> usize {
        self.settings.question_count.min(self.questions.len())
    }

    fn set_current_phase(&mut self, phase: Phase) {
        log::debug!("Entering quiz phase: {:?}", phase);
        self.current_phase = phase;
    }

    /// Asks questions in order until they run out or the deadline fires.
    ///
    /// A timeout is a normal end of session. Errors are only returned when the
    /// input feed breaks, in which case the session is abandoned.
    pub fn run(mut self, feed: &Receiver<AnswerEvent>) -> Result<SessionResult> {
        debug_assert_eq!(self.current_phase, Phase::Ready);

        let question_count = self.question_count();
        let questions = std::mem::take(&mut self.questions);

        self.set_current_phase(Phase::Running);
        self.output.say(&Message::QuizRules(
            self.settings.time_limit,
            question_count,
        ));
        let deadline = Deadline::start(self.settings.time_limit);
        let runner = QuestionRunner::new(feed, &deadline);

        let mut score = 0;
        let mut questions_attempted = 0;
        for question in questions.iter().take(question_count) {
            match runner.evaluate(question, &mut self.output)? {
                QuestionOutcome::Correct => score += 1,
                QuestionOutcome::Incorrect => (),
                QuestionOutcome::TimedOut => {
                    self.set_current_phase(Phase::TimedOutEarly);
                    break;
                }
            }
            questions_attempted += 1;
        }

        let termination_reason = if self.current_phase == Phase::TimedOutEarly {
            self.output.say(&Message::TimeUp);
            TerminationReason::TimedOut
        } else {
            self.set_current_phase(Phase::Completed);
            TerminationReason::Completed
        };

        Ok(SessionResult {
            score,
            questions_attempted,
            question_count,
            termination_reason,
        })
    }
}
