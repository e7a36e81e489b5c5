use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;


#[derive(Deserialize)]
struct RawCitation {
    question: usize,
    label: String,
    url: String,
}

/// A source backing a question, shown as a link under it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Citation {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, Default)]
pub struct Citations {
    by_question: HashMap<usize, Vec<Citation>>,
}

impl Citations {
    pub fn open(source: &Path) -> Result<Citations> {
        let file =
            File::open(source).with_context(|| format!("Could not open citations {:?}", source))?;
        Citations::from_reader(file)
    }

    /// Reads `question;label;url` records. Question indices are 0-based
    /// positions in the question file.
    pub fn from_reader<R: Read>(reader: R) -> Result<Citations> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut by_question: HashMap<usize, Vec<Citation>> = HashMap::new();
        for (line, record) in csv_reader.deserialize().enumerate() {
            let raw_citation: RawCitation = match record {
                Ok(raw_citation) => raw_citation,
                Err(e) if e.is_io_error() => {
                    return Err(e).context("Could not read citations");
                }
                Err(e) => {
                    debug!("Skipping citation {}: {}", line + 1, e);
                    continue;
                }
            };
            if raw_citation.label.is_empty() || raw_citation.url.is_empty() {
                continue;
            }
            by_question
                .entry(raw_citation.question)
                .or_default()
                .push(Citation {
                    label: raw_citation.label,
                    url: raw_citation.url,
                });
        }

        Ok(Citations { by_question })
    }

    pub fn get(&self, question: usize) -> &[Citation] {
        self.by_question
            .get(&question)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }
}
