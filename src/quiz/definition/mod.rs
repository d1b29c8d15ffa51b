use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod question;

pub use question::{Question, RawQuestion};


#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no usable questions in {path:?}")]
    NoQuestions { path: PathBuf },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition> {
        let file = File::open(source)
            .with_context(|| format!("Could not open quiz file {:?}", source))?;
        let questions = Self::read_questions(file)
            .with_context(|| format!("Could not parse quiz file {:?}", source))?;
        if questions.is_empty() {
            return Err(LoadError::NoQuestions {
                path: source.to_path_buf(),
            }
            .into());
        }
        Ok(QuizDefinition { questions })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuizDefinition> {
        let questions = Self::read_questions(reader)?;
        if questions.is_empty() {
            return Err(LoadError::NoQuestions {
                path: PathBuf::new(),
            }
            .into());
        }
        Ok(QuizDefinition { questions })
    }

    fn read_questions<R: Read>(reader: R) -> Result<Vec<Question>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);
        let mut questions = Vec::new();
        for record in csv_reader.deserialize() {
            let raw_question: RawQuestion = record?;
            if raw_question.is_blank() {
                log::debug!("Skipping blank quiz row: {:?}", raw_question);
                continue;
            }
            questions.push(raw_question.into());
        }
        Ok(questions)
    }

    pub fn shuffle(&mut self) {
        self.questions.shuffle(&mut rand::thread_rng());
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
