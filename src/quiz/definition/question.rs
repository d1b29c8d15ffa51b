use serde::Deserialize;

pub fn sanitize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub question: String,
    pub answer: String,
}

impl RawQuestion {
    pub fn is_blank(&self) -> bool {
        self.question.trim().is_empty() || self.answer.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
}

impl Question {
    pub fn is_guess_correct(&self, guess: &str) -> bool {
        sanitize(guess) == self.answer
    }
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        Question {
            prompt: raw_question.question.trim().to_owned(),
            answer: sanitize(&raw_question.answer),
        }
    }
}
