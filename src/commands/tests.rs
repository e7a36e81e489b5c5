use super::*;

const AWAITING_ANSWER: Controls = Controls {
    submit: true,
    proceed: false,
};

const ANSWERED: Controls = Controls {
    submit: false,
    proceed: true,
};

#[test]
fn reads_selected_slots() {
    assert_eq!(
        parse("1,3", AWAITING_ANSWER).unwrap(),
        Command::Submit(vec![1, 3])
    );
    assert_eq!(
        parse(" 2 4 ", AWAITING_ANSWER).unwrap(),
        Command::Submit(vec![2, 4])
    );
}

#[test]
fn empty_line_submits_nothing() {
    assert_eq!(
        parse("", AWAITING_ANSWER).unwrap(),
        Command::Submit(vec![])
    );
}

#[test]
fn rejects_words_as_answers() {
    assert!(parse("paris", AWAITING_ANSWER).is_err());
    assert!(parse("1 and 3", AWAITING_ANSWER).is_err());
}

#[test]
fn rejects_huge_numbers() {
    assert!(parse("99999999999999999999999", AWAITING_ANSWER).is_err());
}

#[test]
fn any_line_continues_after_answer() {
    assert_eq!(parse("", ANSWERED).unwrap(), Command::Continue);
    assert_eq!(parse("next", ANSWERED).unwrap(), Command::Continue);
}

#[test]
fn quit_works_in_every_phase() {
    assert_eq!(parse("q", AWAITING_ANSWER).unwrap(), Command::Quit);
    assert_eq!(parse(" Quit ", ANSWERED).unwrap(), Command::Quit);
    assert_eq!(parse("exit", Controls::default()).unwrap(), Command::Quit);
}

#[test]
fn nothing_is_accepted_while_disabled() {
    assert!(parse("1", Controls::default()).is_err());
}
