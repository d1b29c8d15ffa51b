use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Message, QuizOutput};

#[derive(Clone, Default)]
pub struct MockQuizOutput {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MockQuizOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&mut self) -> Vec<Message> {
        std::mem::replace(&mut *self.messages.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages.read().iter().any(|m| m == message)
    }

    pub fn count_questions(&self) -> usize {
        self.messages
            .read()
            .iter()
            .filter(|m| matches!(m, Message::QuestionBegins(_)))
            .count()
    }
}

impl QuizOutput for MockQuizOutput {
    fn say(&mut self, message: &Message) {
        self.messages.write().push(message.clone());
    }
}
