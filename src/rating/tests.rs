//! Unit tests for rating coercion, labels, and star fills.

use rstest::rstest;

use super::*;

const TOLERANCE: f64 = 1e-9;

fn fill_percents(rating: Rating) -> Vec<f64> {
    rating.star_fills().iter().map(|fill| fill.percent()).collect()
}

#[rstest]
#[case("abc", 0.0)]
#[case("", 0.0)]
#[case("   ", 0.0)]
#[case("NaN", 0.0)]
#[case("7.2", 5.0)]
#[case("-3", 0.0)]
#[case("-0", 0.0)]
#[case("3.5", 3.5)]
#[case("  4.25 stars", 4.25)]
#[case(".5", 0.5)]
#[case("2.", 2.0)]
#[case("1e0", 1.0)]
#[case("1e999", 5.0)]
#[case("Infinity", 5.0)]
#[case("-Infinity", 0.0)]
#[case("+Infinity", 5.0)]
#[case("Infinite", 0.0)]
fn coerce_never_rejects_input(#[case] raw: &str, #[case] expected: f64) {
    assert!((Rating::coerce(raw).get() - expected).abs() < TOLERANCE);
}

#[rstest]
#[case(f64::NAN, 0.0)]
#[case(-0.0, 0.0)]
#[case(-12.0, 0.0)]
#[case(5.000_001, 5.0)]
#[case(f64::INFINITY, 5.0)]
#[case(2.7, 2.7)]
fn clamped_snaps_to_bounds(#[case] input: f64, #[case] expected: f64) {
    assert_eq!(Rating::clamped(input).get().to_bits(), expected.to_bits());
}

#[test]
fn negative_zero_renders_without_sign() {
    assert_eq!(Rating::coerce("-0.0").to_one_decimal(), "0.0");
}

#[rstest]
#[case(0.0, "0.0")]
#[case(3.5, "3.5")]
#[case(3.27, "3.3")]
#[case(4.94, "4.9")]
#[case(0.25, "0.3")]
#[case(1.75, "1.8")]
#[case(4.75, "4.8")]
#[case(5.0, "5.0")]
fn one_decimal_formatting(#[case] value: f64, #[case] expected: &str) {
    assert_eq!(Rating::clamped(value).to_one_decimal(), expected);
    assert_eq!(Rating::clamped(value).to_string(), expected);
}

#[rstest]
#[case(0.0, RatingLabel::NoRating)]
#[case(0.49, RatingLabel::NoRating)]
#[case(0.5, RatingLabel::Poor)]
#[case(1.2, RatingLabel::Poor)]
#[case(2.5, RatingLabel::Good)]
#[case(3.5, RatingLabel::VeryGood)]
#[case(3.49, RatingLabel::Good)]
#[case(4.5, RatingLabel::Excellent)]
#[case(5.0, RatingLabel::Excellent)]
fn label_rounds_half_up(#[case] value: f64, #[case] expected: RatingLabel) {
    assert_eq!(Rating::clamped(value).label(), expected);
}

#[test]
fn labels_resolve_in_const_context() {
    const EMPTY: RatingLabel = Rating::ZERO.label();
    const FULL: RatingLabel = Rating::MAX.label();

    assert_eq!(EMPTY, RatingLabel::NoRating);
    assert_eq!(FULL, RatingLabel::Excellent);
}

#[rstest]
#[case(-1)]
#[case(6)]
#[case(i64::MAX)]
fn unknown_rounded_values_fall_back_to_no_rating(#[case] rounded: i64) {
    assert_eq!(RatingLabel::for_rounded(rounded), RatingLabel::NoRating);
}

#[test]
fn label_texts_match_the_form() {
    let texts: Vec<&str> = (0..=5)
        .map(|rounded| RatingLabel::for_rounded(rounded).text())
        .collect();
    assert_eq!(
        texts,
        vec!["No rating", "Poor", "Fair", "Good", "Very Good", "Excellent"]
    );
}

#[test]
fn half_rating_fills_three_and_a_half_stars() {
    assert_eq!(
        fill_percents(Rating::clamped(3.5)),
        vec![100.0, 100.0, 100.0, 50.0, 0.0]
    );
}

#[test]
fn zero_rating_leaves_every_star_empty() {
    assert!(Rating::ZERO.star_fills().iter().all(|fill| fill.is_empty()));
    assert!(Rating::MAX.star_fills().iter().all(|fill| fill.is_full()));
}

#[rstest]
#[case(0.0)]
#[case(0.1)]
#[case(1.0)]
#[case(2.37)]
#[case(3.3)]
#[case(4.99)]
#[case(5.0)]
fn star_fills_sum_to_the_value(#[case] value: f64) {
    let total: f64 = Rating::clamped(value)
        .star_fills()
        .iter()
        .map(|fill| fill.fraction())
        .sum();
    assert!((total - value).abs() < TOLERANCE, "{total} != {value}");
}

#[test]
fn star_click_sets_integer_rating() {
    let index = StarIndex::new(2).expect("index 2 is a star");
    let rating = Rating::from_star(index);
    assert_eq!(rating.get().to_bits(), 3.0_f64.to_bits());
    assert_eq!(
        fill_percents(rating),
        vec![100.0, 100.0, 100.0, 0.0, 0.0]
    );
}

#[rstest]
#[case(0, Some(1))]
#[case(4, Some(5))]
#[case(5, None)]
#[case(usize::MAX, None)]
fn star_index_validates_position(#[case] position: usize, #[case] ordinal: Option<u8>) {
    assert_eq!(StarIndex::new(position).map(StarIndex::ordinal), ordinal);
}

#[test]
fn star_index_navigation_stays_in_bounds() {
    assert_eq!(StarIndex::FIRST.previous(), StarIndex::FIRST);
    assert_eq!(StarIndex::LAST.next(), StarIndex::LAST);
    assert_eq!(StarIndex::FIRST.next().position(), 1);
}
