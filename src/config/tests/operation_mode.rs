//! Tests for operation mode determination and derived values.

use rstest::rstest;

use crate::BookrateConfig;
use crate::config::OperationMode;
use crate::error::BookrateError;

#[rstest]
fn operation_mode_is_scripted_by_default() {
    assert_eq!(
        BookrateConfig::default().operation_mode(),
        OperationMode::Scripted
    );
}

#[rstest]
fn operation_mode_is_interactive_with_tui() {
    let config = BookrateConfig {
        tui: true,
        star: Some(3),
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::Interactive);
}

#[rstest]
#[case(None, "")]
#[case(Some("4.2"), "4.2")]
#[case(Some("garbage"), "garbage")]
fn initial_field_text_passes_the_rating_through(
    #[case] rating: Option<&str>,
    #[case] expected: &str,
) {
    let config = BookrateConfig {
        rating: rating.map(ToOwned::to_owned),
        ..Default::default()
    };

    assert_eq!(config.initial_field_text(), expected);
}

#[rstest]
#[case(None, Ok(None))]
#[case(Some(1), Ok(Some(0)))]
#[case(Some(5), Ok(Some(4)))]
fn star_index_converts_to_zero_based(
    #[case] star: Option<u8>,
    #[case] expected: Result<Option<usize>, BookrateError>,
) {
    let config = BookrateConfig {
        star,
        ..Default::default()
    };

    let actual = config
        .star_index()
        .map(|index| index.map(crate::rating::StarIndex::position));
    assert_eq!(actual, expected);
}

#[rstest]
#[case(0)]
#[case(6)]
#[case(u8::MAX)]
fn star_index_rejects_positions_outside_the_stars(#[case] star: u8) {
    let config = BookrateConfig {
        star: Some(star),
        ..Default::default()
    };

    assert_eq!(
        config.star_index(),
        Err(BookrateError::InvalidStar { star, max: 5 })
    );
}
