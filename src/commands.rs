use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::output::Controls;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref SELECTION_REGEX: Regex = Regex::new(r"^[\d\s,;]*$").unwrap();
    static ref NUMBER_REGEX: Regex = Regex::new(r"\d+").unwrap();
}

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Submit(Vec<usize>),
    Continue,
    Quit,
}

/// Reads one line of user input in light of what is currently allowed.
pub fn parse(line: &str, controls: Controls) -> Result<Command> {
    let line = line.trim();
    if QUIT_WORDS.contains(&line.to_lowercase().as_str()) {
        return Ok(Command::Quit);
    }

    if controls.submit {
        if !SELECTION_REGEX.is_match(line) {
            return Err(anyhow!(
                "Could not understand {:?}, type option numbers such as `1,3`",
                line
            ));
        }
        let slots = NUMBER_REGEX
            .find_iter(line)
            .map(|m| {
                m.as_str()
                    .parse::<usize>()
                    .with_context(|| format!("{} is not a valid option number", m.as_str()))
            })
            .collect::<Result<Vec<usize>>>()?;
        return Ok(Command::Submit(slots));
    }

    if controls.proceed {
        return Ok(Command::Continue);
    }

    Err(anyhow!("The quiz is not accepting answers"))
}
