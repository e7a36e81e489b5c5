use crate::output::{Controls, Message, QuizOutput};
use crate::quiz::State;

#[derive(Debug)]
pub struct FailedState<O> {
    reason: String,
    output: O,
}

impl<O> FailedState<O> {
    pub fn new(reason: String, output: O) -> Self {
        FailedState { reason, output }
    }
}

impl<O: QuizOutput> State for FailedState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::LoadFailed(self.reason.clone()));
        self.output.say(&Message::Controls(Controls::default()));
    }

    fn on_end(&mut self) {}
}
