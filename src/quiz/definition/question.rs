use anyhow::{anyhow, Error, Result};
use csv::StringRecord;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::convert::TryFrom;

use crate::quiz::sampler::Weighted;
use crate::quiz::weight::DEFAULT_WEIGHT;

lazy_static! {
    static ref LEADING_INTEGER_REGEX: Regex = Regex::new(r"^\s*([+-]?\d+)").unwrap();
}

pub const MAX_OPTIONS: usize = 7;
const CORRECT_COLUMN: usize = MAX_OPTIONS + 1;

/// 1-based option positions.
pub type AnswerSet = BTreeSet<usize>;

/// Exact set equality between what was selected and what is correct.
pub fn evaluate(selected: &AnswerSet, correct: &AnswerSet) -> bool {
    selected == correct
}

/// One line of the question file, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct RawQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: String,
}

impl RawQuestion {
    /// Returns `None` for records too short to hold a prompt, every option
    /// column and the answer column.
    pub fn from_record(record: &StringRecord) -> Option<RawQuestion> {
        if record.len() <= CORRECT_COLUMN {
            return None;
        }
        Some(RawQuestion {
            prompt: record[0].to_owned(),
            options: (1..=MAX_OPTIONS).map(|i| record[i].to_owned()).collect(),
            correct: record[CORRECT_COLUMN].to_owned(),
        })
    }
}

fn parse_positions(list: &str) -> Vec<i64> {
    list.split(',')
        .filter_map(|item| LEADING_INTEGER_REGEX.captures(item))
        .filter_map(|captures| captures[1].parse::<i64>().ok())
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: AnswerSet,
    pub weight: f64,
}

impl Question {
    pub fn is_answer_correct(&self, selected: &AnswerSet) -> bool {
        evaluate(selected, &self.correct)
    }

    pub fn is_option_correct(&self, position: usize) -> bool {
        self.correct.contains(&position)
    }

    pub fn option(&self, position: usize) -> Option<&str> {
        let offset = position.checked_sub(1)?;
        self.options.get(offset).map(String::as_str)
    }
}

impl Weighted for Question {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = Error;

    fn try_from(raw_question: RawQuestion) -> Result<Self> {
        let prompt = raw_question.prompt.trim().to_owned();
        if prompt.is_empty() {
            return Err(anyhow!("Question has no prompt"));
        }

        let options: Vec<String> = raw_question
            .options
            .iter()
            .map(|option| option.trim())
            .filter(|option| !option.is_empty())
            .map(str::to_owned)
            .collect();
        if options.is_empty() {
            return Err(anyhow!("Question has no options"));
        }

        let positions = parse_positions(&raw_question.correct);
        if positions.is_empty() {
            return Err(anyhow!("Question has no correct answer"));
        }
        let mut correct = AnswerSet::new();
        for position in positions {
            if position < 1 || position as usize > options.len() {
                return Err(anyhow!(
                    "Correct answer {} does not match any of the {} options",
                    position,
                    options.len()
                ));
            }
            correct.insert(position as usize);
        }

        Ok(Question {
            prompt,
            options,
            correct,
            weight: DEFAULT_WEIGHT,
        })
    }
}
