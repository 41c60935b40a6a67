//! Tests for target generation, digit choices and levels.

use strictly_guess::{
    Digit, DigitChoice, FixedTarget, GameLevel, RandomTarget, TargetNumber, TargetSource,
};
use strum::IntoEnumIterator;

#[test]
fn test_range_has_exact_digit_count() {
    let four = DigitChoice::new(4).unwrap();
    assert_eq!(TargetNumber::range(four), 1000..=9999);

    let ten = DigitChoice::new(10).unwrap();
    assert_eq!(TargetNumber::range(ten), 1_000_000_000..=9_999_999_999);
}

#[test]
fn test_fixed_target_is_used() {
    let four = DigitChoice::new(4).unwrap();
    let target = TargetNumber::draw(four, &mut FixedTarget(4321));
    assert_eq!(target.value(), 4321);
    assert_eq!(target.digits(), 4);
    assert_eq!(target.to_string(), "4321");
}

#[test]
fn test_out_of_range_source_is_clamped() {
    let five = DigitChoice::new(5).unwrap();
    assert_eq!(TargetNumber::draw(five, &mut FixedTarget(7)).value(), 10_000);
    assert_eq!(TargetNumber::draw(five, &mut FixedTarget(u64::MAX)).value(), 99_999);
}

#[test]
fn test_seeded_source_is_reproducible() {
    let mut a = RandomTarget::seeded(42);
    let mut b = RandomTarget::seeded(42);
    for _ in 0..20 {
        assert_eq!(a.draw(1000..=9999), b.draw(1000..=9999));
    }
}

#[test]
fn test_boxed_source_draws_through_box() {
    let mut source: Box<dyn TargetSource> = Box::new(FixedTarget(4321));
    assert_eq!(source.draw(1000..=9999), 4321);
    let target = TargetNumber::draw(DigitChoice::DEFAULT, &mut source);
    assert_eq!(target.value(), 4321);
}

#[test]
fn test_random_draws_stay_in_range() {
    let mut source = RandomTarget::from_entropy();
    for choice in DigitChoice::ALLOWED {
        let range = TargetNumber::range(choice);
        for _ in 0..100 {
            let target = TargetNumber::draw(choice, &mut source);
            assert!(range.contains(&target.value()));
            assert_eq!(target.digits(), choice.digits());
        }
    }
}

#[test]
fn test_matches_exact_spelling() {
    let target = TargetNumber::draw(DigitChoice::DEFAULT, &mut FixedTarget(4321));
    assert!(target.matches("4321"));
    assert!(!target.matches("1234"));
    assert!(!target.matches("04321"));
    assert!(!target.matches("432"));
}

#[test]
fn test_digit_choice_bounds() {
    assert_eq!(DigitChoice::new(3), None);
    assert_eq!(DigitChoice::new(4).map(DigitChoice::get), Some(4));
    assert_eq!(DigitChoice::new(10).map(DigitChoice::get), Some(10));
    assert_eq!(DigitChoice::new(11), None);
    assert!(DigitChoice::try_from(2u8).is_err());
    assert!(
        DigitChoice::ALLOWED
            .iter()
            .all(|choice| (4..=8).contains(&choice.get()))
    );
}

#[test]
fn test_digit_conversions() {
    assert_eq!(Digit::from_char('7').map(Digit::value), Some(7));
    assert_eq!(Digit::from_char('x'), None);
    assert_eq!(Digit::new(10), None);
    assert_eq!(Digit::new(0).map(Digit::as_char), Some('0'));
}

#[test]
fn test_levels_advance_in_order() {
    let levels: Vec<GameLevel> = GameLevel::iter().collect();
    assert_eq!(
        levels,
        [
            GameLevel::Start,
            GameLevel::Collecting,
            GameLevel::Guessing,
            GameLevel::Finished
        ]
    );
    for pair in levels.windows(2) {
        assert_eq!(pair[0].next(), Some(pair[1]));
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(GameLevel::Finished.next(), None);
    assert!(GameLevel::Finished.is_terminal());
    assert!(!GameLevel::Start.is_terminal());
}
