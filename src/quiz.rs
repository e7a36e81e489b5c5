use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::sync::Arc;

use self::definition::*;
use self::phase::*;
use self::sampler::Presentation;
use self::settings::*;
use crate::citations::Citations;
use crate::output::{Controls, QuizOutput};
use crate::store::WeightStore;

pub mod definition;
mod phase;
pub mod sampler;
pub mod settings;
pub mod weight;

pub use self::phase::AnswerResult;


pub type BankHandle = Arc<RwLock<QuestionBank>>;

trait State {
    fn on_begin(&mut self);
    fn on_end(&mut self);
}

enum Phase<O> {
    Loading(LoadingState<O>),
    Failed(FailedState<O>),
    Question(QuestionState<O>),
    Reveal(RevealState<O>),
}

impl<O: QuizOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Loading(s) => s,
            Phase::Failed(s) => s,
            Phase::Question(s) => s,
            Phase::Reveal(s) => s,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::Loading(_) => "loading",
            Phase::Failed(_) => "failed",
            Phase::Question(_) => "question",
            Phase::Reveal(_) => "reveal",
        }
    }
}

/// One quiz session: picks questions, grades answers and keeps the weight
/// store up to date.
pub struct Quiz<O: QuizOutput> {
    settings: Settings,
    bank: BankHandle,
    store: Box<dyn WeightStore>,
    citations: Citations,
    current_phase: Phase<O>,
    rng: StdRng,
    output: O,
    loaded: bool,
}

impl<O: QuizOutput + Clone> Quiz<O> {
    pub fn new(
        settings: Settings,
        store: Box<dyn WeightStore>,
        citations: Citations,
        output: O,
    ) -> Quiz<O> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut quiz = Quiz {
            settings,
            bank: Arc::new(RwLock::new(QuestionBank::default())),
            store,
            citations,
            current_phase: Phase::Loading(LoadingState::new(output.clone())),
            rng,
            output,
            loaded: false,
        };
        quiz.current_phase.get_state().on_begin();
        quiz
    }

    pub fn begin(&mut self, source: &Path) -> Result<()> {
        info!("Loading questions from {:?}", source);
        self.begin_with_bank(QuestionBank::open(source))
    }

    /// Leaves the loading phase: either the first question is asked, or the
    /// load failure is shown and the session stays disabled.
    pub fn begin_with_bank(&mut self, bank: Result<QuestionBank, LoadError>) -> Result<()> {
        match &self.current_phase {
            Phase::Loading(_) => (),
            _ => return Err(anyhow!("Questions were already loaded")),
        }

        let mut bank = match bank {
            Ok(bank) if bank.is_empty() => return self.fail(LoadError::Empty),
            Ok(bank) => bank,
            Err(e) => return self.fail(e),
        };

        bank.fill_weights(self.settings.default_weight);
        match self.store.load() {
            Ok(Some(saved)) => {
                let applied = bank.apply_saved_weights(&saved, &self.settings.adjustment);
                info!("Restored {} saved weights", applied);
            }
            Ok(None) => info!("No saved weights, every question starts at the default weight"),
            Err(e) => warn!("Could not load saved weights: {:#}", e),
        }

        info!("Loaded {} questions", bank.len());
        *self.bank.write() = bank;
        self.loaded = true;
        self.begin_question();
        Ok(())
    }

    fn fail(&mut self, e: LoadError) -> Result<()> {
        let e = anyhow::Error::from(e);
        error!("Failed to load questions: {:#}", e);
        let state = FailedState::new(format!("{:#}", e), self.output.clone());
        self.set_current_phase(Phase::Failed(state));
        Err(e)
    }

    pub fn submit(&mut self, slots: &[usize]) -> Result<AnswerResult> {
        let (result, presentation) = match &mut self.current_phase {
            Phase::Question(question_state) => {
                let result = question_state.submit(slots, &self.settings.adjustment)?;
                (result, question_state.presentation().clone())
            }
            Phase::Reveal(_) => return Err(anyhow!("This question was already answered")),
            _ => return Err(anyhow!("There is no active question")),
        };
        debug!(
            "Question {} answered {}, weight {:.2} -> {:.2}",
            result.index,
            if result.verdict { "correctly" } else { "incorrectly" },
            result.previous_weight,
            result.weight
        );

        self.save_weights();

        let state = RevealState::new(
            result.index,
            presentation,
            result.selected.clone(),
            result.verdict,
            self.bank.clone(),
            self.output.clone(),
        );
        self.set_current_phase(Phase::Reveal(state));
        Ok(result)
    }

    pub fn proceed(&mut self) -> Result<()> {
        match &self.current_phase {
            Phase::Reveal(_) => {
                self.begin_question();
                Ok(())
            }
            Phase::Question(_) => Err(anyhow!("Answer the current question first")),
            _ => Err(anyhow!("There is no active question")),
        }
    }

    /// Final save before the session goes away.
    pub fn end(&mut self) {
        self.current_phase.get_state().on_end();
        if self.loaded {
            self.save_weights();
            info!("Session ended, weights saved");
        }
    }

    pub fn controls(&self) -> Controls {
        match &self.current_phase {
            Phase::Question(_) => Controls {
                submit: true,
                proceed: false,
            },
            Phase::Reveal(_) => Controls {
                submit: false,
                proceed: true,
            },
            Phase::Loading(_) | Phase::Failed(_) => Controls::default(),
        }
    }

    pub fn current_question(&self) -> Option<usize> {
        match &self.current_phase {
            Phase::Question(s) => Some(s.index()),
            Phase::Reveal(s) => Some(s.index()),
            _ => None,
        }
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        match &self.current_phase {
            Phase::Question(s) => Some(s.presentation()),
            Phase::Reveal(s) => Some(s.presentation()),
            _ => None,
        }
    }

    pub fn weights(&self) -> Vec<f64> {
        self.bank.read().weights()
    }

    #[cfg(test)]
    pub fn bank(&self) -> BankHandle {
        self.bank.clone()
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        debug!(
            "Leaving quiz phase {}, entering {}",
            self.current_phase.name(),
            phase.name()
        );
        self.current_phase.get_state().on_end();
        self.current_phase = phase;
        self.current_phase.get_state().on_begin();
    }

    fn begin_question(&mut self) {
        let rng = &mut self.rng;
        let round = {
            let bank = self.bank.read();
            match bank.pick(rng) {
                Some(index) => bank.get(index).map(|question| {
                    let presentation = Presentation::shuffled(question.options.len(), rng);
                    (index, presentation)
                }),
                None => None,
            }
        };
        let (index, presentation) = match round {
            Some(round) => round,
            None => {
                warn!("Cannot pick a question from an empty bank");
                return;
            }
        };

        let state = QuestionState::new(
            index,
            presentation,
            self.bank.clone(),
            self.citations.get(index).to_vec(),
            self.output.clone(),
        );
        self.set_current_phase(Phase::Question(state));
    }

    fn save_weights(&self) {
        let weights = self.weights();
        if let Err(e) = self.store.save(&weights) {
            warn!("Could not save weights: {:#}", e);
        }
    }
}
