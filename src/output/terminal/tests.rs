use super::*;
use crate::output::{RevealedOption, RoundView};
use crate::quiz::weight::WeightStats;

#[test]
fn stats_use_two_decimals() {
    let message = Message::WeightStats(WeightStats {
        current: 0.9,
        min: 0.1,
        max: 2.0,
        sum: 3.14159,
    });
    assert_eq!(
        TerminalOutput::interpret_message(&message),
        "current probability: 0.90\nmin: 0.10, max: 2.00, total prob sum: 3.14"
    );
}

#[test]
fn question_lists_options_in_display_order() {
    let message = Message::QuestionBegins(RoundView {
        index: 0,
        prompt: "Pick B".to_owned(),
        options: vec![(1, "C".to_owned()), (2, "B".to_owned()), (3, "A".to_owned())],
        citations: vec![],
    });
    assert_eq!(
        TerminalOutput::interpret_message(&message),
        "\n❓ Pick B\n  1. C\n  2. B\n  3. A"
    );
}

#[test]
fn question_links_citations() {
    let message = Message::QuestionBegins(RoundView {
        index: 0,
        prompt: "Q".to_owned(),
        options: vec![(1, "A".to_owned())],
        citations: vec![Citation {
            label: "Notes".to_owned(),
            url: "https://example.org".to_owned(),
        }],
    });
    let text = TerminalOutput::interpret_message(&message);
    assert!(text.contains("\x1b]8;;https://example.org\x1b\\Notes\x1b]8;;\x1b\\"));
}

#[test]
fn reveal_marks_correct_and_selected_options() {
    let message = Message::AnswerReveal {
        verdict: false,
        options: vec![
            RevealedOption {
                slot: 1,
                text: "A".to_owned(),
                is_correct: false,
                was_selected: true,
            },
            RevealedOption {
                slot: 2,
                text: "B".to_owned(),
                is_correct: true,
                was_selected: false,
            },
        ],
    };
    assert_eq!(
        TerminalOutput::interpret_message(&message),
        "❌ Incorrect.\n  [x] 1. A\n  [ ] 2. B ✔"
    );
}

#[test]
fn disabled_controls_print_nothing() {
    let message = Message::Controls(Controls::default());
    assert!(TerminalOutput::interpret_message(&message).is_empty());
}
