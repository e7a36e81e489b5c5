use crate::citations::Citation;
use crate::output::{Controls, Message, QuizOutput};

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn interpret_citation(citation: &Citation) -> String {
        // OSC 8 hyperlink
        format!(
            "\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\",
            citation.url, citation.label
        )
    }

    pub fn interpret_message(message: &Message) -> String {
        use Message::*;
        match message {
            Loading => "⏳ Loading questions...".into(),
            LoadFailed(reason) => format!(
                "Failed to load questions ({}). Please try again later.",
                reason
            ),
            QuestionBegins(round) => {
                let mut text = format!("\n❓ {}", round.prompt);
                for (slot, option) in &round.options {
                    text += &format!("\n  {}. {}", slot, option);
                }
                if !round.citations.is_empty() {
                    let links: Vec<String> = round
                        .citations
                        .iter()
                        .map(TerminalOutput::interpret_citation)
                        .collect();
                    text += &format!("\n📚 {}", links.join(" · "));
                }
                text
            }
            AnswerReveal { verdict, options } => {
                let mut text = if *verdict {
                    "✅ Correct!".to_owned()
                } else {
                    "❌ Incorrect.".to_owned()
                };
                for option in options {
                    let checkbox = if option.was_selected { "[x]" } else { "[ ]" };
                    let mark = if option.is_correct { " ✔" } else { "" };
                    text += &format!("\n  {} {}. {}{}", checkbox, option.slot, option.text, mark);
                }
                text
            }
            WeightStats(stats) => format!(
                "current probability: {:.2}\nmin: {:.2}, max: {:.2}, total prob sum: {:.2}",
                stats.current, stats.min, stats.max, stats.sum
            ),
            Controls(controls) => TerminalOutput::interpret_controls(controls),
        }
    }

    fn interpret_controls(controls: &Controls) -> String {
        match (controls.submit, controls.proceed) {
            (true, _) => {
                "Type the numbers of your answers (e.g. `1,3`) and press enter, `q` to quit."
                    .into()
            }
            (false, true) => "Press enter for the next question, `q` to quit.".into(),
            (false, false) => String::new(),
        }
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        let text = TerminalOutput::interpret_message(message);
        if !text.is_empty() {
            println!("{}", text);
        }
    }
}
