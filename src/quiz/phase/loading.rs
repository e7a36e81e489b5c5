use crate::output::{Controls, Message, QuizOutput};
use crate::quiz::State;

/// Questions and saved weights are not available yet.
#[derive(Debug)]
pub struct LoadingState<O> {
    output: O,
}

impl<O> LoadingState<O> {
    pub fn new(output: O) -> Self {
        LoadingState { output }
    }
}

impl<O: QuizOutput> State for LoadingState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::Loading);
        self.output.say(&Message::Controls(Controls::default()));
    }

    fn on_end(&mut self) {}
}
