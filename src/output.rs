use crate::citations::Citation;
use crate::quiz::weight::WeightStats;

#[cfg(test)]
pub mod mock;
pub mod terminal;

/// Which commands the user may issue right now.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Controls {
    pub submit: bool,
    pub proceed: bool,
}

/// A question as shown to the user: options are `(slot, text)` pairs in
/// display order.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundView {
    pub index: usize,
    pub prompt: String,
    pub options: Vec<(usize, String)>,
    pub citations: Vec<Citation>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevealedOption {
    pub slot: usize,
    pub text: String,
    pub is_correct: bool,
    pub was_selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Loading,
    LoadFailed(String),
    QuestionBegins(RoundView),
    AnswerReveal {
        verdict: bool,
        options: Vec<RevealedOption>,
    },
    WeightStats(WeightStats),
    Controls(Controls),
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
