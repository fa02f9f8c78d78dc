use blackj::{
    check_entry, evaluate, Error, Hand, HandOutcome, Report, BLACKJACK_MESSAGE, BUST_MESSAGE,
    DRAW_MESSAGE, ENTRY_DENIED, ENTRY_WELCOME,
};

#[test]
fn test_every_sum_up_to_twenty_continues() {
    for a in -30..=20 {
        for b in [-10, 0, 20 - a] {
            if a + b > 20 {
                continue;
            }
            let result = evaluate(a, b);
            assert_eq!(result.message, DRAW_MESSAGE, "{a} + {b}");
            assert!(!result.has_blackjack);
            assert!(result.is_alive);
        }
    }
}

#[test]
fn test_every_pair_summing_to_twenty_one_is_blackjack() {
    for a in -10..=31 {
        let result = evaluate(a, 21 - a);
        assert_eq!(result.sum, 21);
        assert_eq!(result.message, BLACKJACK_MESSAGE);
        assert!(result.has_blackjack);
        assert!(result.is_alive);
    }
}

#[test]
fn test_every_sum_over_twenty_one_busts() {
    for a in 2..=11 {
        for b in (22 - a)..=(40 - a) {
            let result = evaluate(a, b);
            assert_eq!(result.message, BUST_MESSAGE, "{a} + {b}");
            assert!(!result.has_blackjack);
            assert!(!result.is_alive);
        }
    }
}

#[test]
fn test_unused_opening_hand() {
    // 11 + 6 is dealt before the real hand and never reported
    assert_eq!(evaluate(11, 6).outcome, HandOutcome::Continue);
}

#[test]
fn test_club_threshold() {
    assert_eq!(check_entry(20), ENTRY_DENIED);
    assert_eq!(check_entry(21), ENTRY_WELCOME);
}

#[test]
fn test_checked_hand_error_message() {
    let err = Hand::checked(0, 5).unwrap_err();
    assert!(matches!(err, Error::CardOutOfRange { card: 0, min: 2, max: 11 }));
    assert_eq!(err.to_string(), "Card value 0 is out of range (2-11)");
}

#[test]
fn test_report_for_custom_inputs() {
    let report = Report::new(21, Hand::new(11, 10));
    assert_eq!(report.lines(), [ENTRY_WELCOME, BLACKJACK_MESSAGE]);
    assert!(report.evaluation.has_blackjack);
}
