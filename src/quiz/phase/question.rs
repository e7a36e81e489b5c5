use anyhow::{Context, Result};

use crate::citations::Citation;
use crate::output::{Controls, Message, QuizOutput, RoundView};
use crate::quiz::definition::AnswerSet;
use crate::quiz::sampler::Presentation;
use crate::quiz::weight::Adjustment;
use crate::quiz::{BankHandle, State};


#[derive(Clone, Debug, PartialEq)]
pub struct AnswerResult {
    pub index: usize,
    pub selected: AnswerSet,
    pub verdict: bool,
    pub previous_weight: f64,
    pub weight: f64,
}

/// A question is on screen and waiting for an answer.
pub struct QuestionState<O> {
    index: usize,
    presentation: Presentation,
    bank: BankHandle,
    citations: Vec<Citation>,
    output: O,
}

impl<O: QuizOutput> QuestionState<O> {
    pub fn new(
        index: usize,
        presentation: Presentation,
        bank: BankHandle,
        citations: Vec<Citation>,
        output: O,
    ) -> Self {
        QuestionState {
            index,
            presentation,
            bank,
            citations,
            output,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Grades the options shown in `slots` and moves the question's weight
    /// accordingly.
    pub fn submit(&mut self, slots: &[usize], adjustment: &Adjustment) -> Result<AnswerResult> {
        let selected = self.presentation.to_original(slots)?;

        let mut bank = self.bank.write();
        let question = bank.get(self.index).context("Question not found")?;
        let verdict = question.is_answer_correct(&selected);
        let previous_weight = question.weight;
        let weight = bank
            .adjust_weight(self.index, verdict, adjustment)
            .context("Question not found")?;

        Ok(AnswerResult {
            index: self.index,
            selected,
            verdict,
            previous_weight,
            weight,
        })
    }

    fn round_view(&self) -> Option<RoundView> {
        let bank = self.bank.read();
        let question = bank.get(self.index)?;
        let options = self
            .presentation
            .iter()
            .filter_map(|(slot, original)| {
                question
                    .option(original)
                    .map(|text| (slot, text.to_owned()))
            })
            .collect();
        Some(RoundView {
            index: self.index,
            prompt: question.prompt.clone(),
            options,
            citations: self.citations.clone(),
        })
    }
}

impl<O: QuizOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        if let Some(round_view) = self.round_view() {
            self.output.say(&Message::QuestionBegins(round_view));
        }
        let stats = self.bank.read().stats(self.index);
        if let Some(stats) = stats {
            self.output.say(&Message::WeightStats(stats));
        }
        self.output.say(&Message::Controls(Controls {
            submit: true,
            proceed: false,
        }));
    }

    fn on_end(&mut self) {}
}
