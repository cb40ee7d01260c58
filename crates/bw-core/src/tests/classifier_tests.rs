use crate::{classify, LimitState, PreconditionViolation};

#[test]
fn boundaries_follow_warning_threshold() {
    let cases = [
        (799.0, LimitState::Normal, 79),
        (800.0, LimitState::Warning, 80),
        (999.99, LimitState::Warning, 99),
        (1000.0, LimitState::Exceeded, 100),
        (1500.0, LimitState::Exceeded, 150),
    ];
    for (spent, state, percentage) in cases {
        let result = classify(spent, 1000.0).unwrap();
        assert_eq!(result.state, state, "spent {spent}");
        assert_eq!(result.percentage, percentage, "spent {spent}");
    }
}

#[test]
fn percentage_truncates_instead_of_rounding() {
    assert_eq!(classify(2.0, 3.0).unwrap().percentage, 66);
    assert_eq!(classify(849.99, 1000.0).unwrap().percentage, 84);
}

#[test]
fn zero_and_refund_spend_are_normal() {
    let zero = classify(0.0, 250.0).unwrap();
    assert_eq!(zero.state, LimitState::Normal);
    assert_eq!(zero.percentage, 0);

    let refund = classify(-40.0, 250.0).unwrap();
    assert_eq!(refund.state, LimitState::Normal);
    assert_eq!(refund.percentage, -16);
}

#[test]
fn non_positive_limit_is_rejected() {
    assert_eq!(
        classify(10.0, 0.0),
        Err(PreconditionViolation { limit: 0.0 })
    );
    assert_eq!(
        classify(10.0, -5.0),
        Err(PreconditionViolation { limit: -5.0 })
    );
    assert!(classify(10.0, f64::NAN).is_err());
}
