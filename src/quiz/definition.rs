use log::debug;
use rand::Rng;
use std::convert::TryFrom;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::quiz::sampler;
use crate::quiz::weight::{Adjustment, WeightStats};

pub mod question;

pub use question::{AnswerSet, Question, RawQuestion};


#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read questions")]
    Read(#[from] csv::Error),
    #[error("no valid questions were found")]
    Empty,
}

/// Every question of a session, in file order. A question's index is its
/// identity: saved weights are matched to questions by position.
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    #[cfg(test)]
    pub fn new(questions: Vec<Question>) -> Self {
        QuestionBank { questions }
    }

    pub fn open(source: &Path) -> Result<QuestionBank, LoadError> {
        let file = File::open(source).map_err(|source_error| LoadError::Open {
            path: source.to_path_buf(),
            source: source_error,
        })?;
        QuestionBank::from_reader(file)
    }

    /// Reads `;`-separated records, skipping the header line. Records that do
    /// not describe a valid question are dropped.
    pub fn from_reader<R: Read>(reader: R) -> Result<QuestionBank, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut questions = Vec::new();
        for (line, record) in csv_reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    debug!("Skipping unreadable record {}: {}", line + 1, e);
                    continue;
                }
            };
            let raw_question = match RawQuestion::from_record(&record) {
                Some(raw_question) => raw_question,
                None => {
                    debug!(
                        "Skipping record {}: expected at least 9 fields, found {}",
                        line + 1,
                        record.len()
                    );
                    continue;
                }
            };
            match Question::try_from(raw_question) {
                Ok(question) => questions.push(question),
                Err(e) => debug!("Skipping record {}: {}", line + 1, e),
            }
        }

        if questions.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(QuestionBank { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn weights(&self) -> Vec<f64> {
        self.questions.iter().map(|q| q.weight).collect()
    }

    pub fn fill_weights(&mut self, weight: f64) {
        for question in self.questions.iter_mut() {
            question.weight = weight;
        }
    }

    /// Overwrites weights position by position with previously saved ones.
    /// Questions past the end of `saved`, and entries that are not positive
    /// numbers, keep their current weight. Returns how many were applied.
    pub fn apply_saved_weights(&mut self, saved: &[f64], adjustment: &Adjustment) -> usize {
        if saved.len() != self.questions.len() {
            debug!(
                "Saved weights cover {} questions, bank has {}",
                saved.len(),
                self.questions.len()
            );
        }
        let mut applied = 0;
        for (question, &weight) in self.questions.iter_mut().zip(saved) {
            if weight.is_finite() && weight > 0.0 {
                question.weight = adjustment.clamp(weight);
                applied += 1;
            }
        }
        applied
    }

    /// Returns the question's new weight.
    pub fn adjust_weight(
        &mut self,
        index: usize,
        verdict: bool,
        adjustment: &Adjustment,
    ) -> Option<f64> {
        let question = self.questions.get_mut(index)?;
        question.weight = adjustment.apply(question.weight, verdict);
        Some(question.weight)
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        sampler::pick(&self.questions, rng)
    }

    pub fn stats(&self, current_index: usize) -> Option<WeightStats> {
        let current = self.questions.get(current_index)?.weight;
        WeightStats::compute(current, &self.weights())
    }
}
