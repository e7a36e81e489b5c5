use super::*;

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} but got {}",
        expected,
        actual
    );
}

#[test]
fn correct_answer_lowers_weight() {
    assert_close(adjust(1.0, true, 0.1, 0.1, 2.0), 0.9);
}

#[test]
fn incorrect_answer_raises_weight() {
    assert_close(adjust(1.0, false, 0.4, 0.1, 3.0), 1.4);
}

#[test]
fn adjustment_is_monotone_and_bounded() {
    for adjustment in &[Adjustment::gentle(), Adjustment::steep()] {
        let mut weight = adjustment.min;
        while weight <= adjustment.max {
            let lowered = adjustment.apply(weight, true);
            assert!(lowered <= weight);
            assert!(lowered >= adjustment.min);

            let raised = adjustment.apply(weight, false);
            assert!(raised >= weight);
            assert!(raised <= adjustment.max);

            weight += 0.05;
        }
    }
}

#[test]
fn boundaries_are_fixed_points() {
    let adjustment = Adjustment::gentle();
    assert_eq!(adjustment.apply(adjustment.min, true), adjustment.min);
    assert_eq!(adjustment.apply(adjustment.max, false), adjustment.max);

    let adjustment = Adjustment::steep();
    assert_eq!(adjustment.apply(adjustment.min, true), adjustment.min);
    assert_eq!(adjustment.apply(adjustment.max, false), adjustment.max);
}

#[test]
fn out_of_range_weight_is_pulled_back_in() {
    assert_close(adjust(5.0, true, 0.1, 0.1, 2.0), 2.0);
    assert_close(adjust(0.0, false, 0.05, 0.1, 2.0), 0.1);
}

#[test]
fn repeated_mistakes_saturate() {
    let adjustment = Adjustment::gentle();
    let mut weight = DEFAULT_WEIGHT;
    for _ in 0..50 {
        weight = adjustment.apply(weight, false);
    }
    assert_eq!(weight, 2.0);
    assert_eq!(adjustment.apply(weight, false), 2.0);
}

#[test]
fn validation_rejects_bad_parameters() {
    assert!(Adjustment::gentle().validate().is_ok());
    assert!(Adjustment::steep().validate().is_ok());
    assert!(Adjustment::new(0.0, 0.1, 2.0).validate().is_err());
    assert!(Adjustment::new(0.1, 0.0, 2.0).validate().is_err());
    assert!(Adjustment::new(0.1, 2.5, 2.0).validate().is_err());
    assert!(Adjustment::new(f64::NAN, 0.1, 2.0).validate().is_err());
}

#[test]
fn stats_summarize_weights() {
    let stats = WeightStats::compute(0.6, &[1.0, 0.6, 1.4]).unwrap();
    assert_close(stats.current, 0.6);
    assert_close(stats.min, 0.6);
    assert_close(stats.max, 1.4);
    assert_close(stats.sum, 3.0);
}

#[test]
fn stats_of_single_weight() {
    let stats = WeightStats::compute(1.0, &[1.0]).unwrap();
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 1.0);
}

#[test]
fn stats_of_nothing() {
    assert!(WeightStats::compute(1.0, &[]).is_none());
}
