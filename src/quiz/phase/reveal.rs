use crate::output::{Controls, Message, QuizOutput, RevealedOption};
use crate::quiz::definition::AnswerSet;
use crate::quiz::sampler::Presentation;
use crate::quiz::{BankHandle, State};


/// The answer was graded; options are locked and the correct ones shown.
pub struct RevealState<O> {
    index: usize,
    presentation: Presentation,
    selected: AnswerSet,
    verdict: bool,
    bank: BankHandle,
    output: O,
}

impl<O: QuizOutput> RevealState<O> {
    pub fn new(
        index: usize,
        presentation: Presentation,
        selected: AnswerSet,
        verdict: bool,
        bank: BankHandle,
        output: O,
    ) -> Self {
        RevealState {
            index,
            presentation,
            selected,
            verdict,
            bank,
            output,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    fn revealed_options(&self) -> Vec<RevealedOption> {
        let bank = self.bank.read();
        let question = match bank.get(self.index) {
            Some(question) => question,
            None => return vec![],
        };
        self.presentation
            .iter()
            .filter_map(|(slot, original)| {
                question.option(original).map(|text| RevealedOption {
                    slot,
                    text: text.to_owned(),
                    is_correct: question.is_option_correct(original),
                    was_selected: self.selected.contains(&original),
                })
            })
            .collect()
    }
}

impl<O: QuizOutput> State for RevealState<O> {
    fn on_begin(&mut self) {
        let options = self.revealed_options();
        self.output.say(&Message::AnswerReveal {
            verdict: self.verdict,
            options,
        });
        let stats = self.bank.read().stats(self.index);
        if let Some(stats) = stats {
            self.output.say(&Message::WeightStats(stats));
        }
        self.output.say(&Message::Controls(Controls {
            submit: false,
            proceed: true,
        }));
    }

    fn on_end(&mut self) {}
}
