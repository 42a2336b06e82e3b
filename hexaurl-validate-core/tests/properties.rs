use hexaurl_validate_core::{
    char_budget, is_encoding_safe, validate, Composition, Config, ConfigError, ConfigOptions,
    ErrorCode,
};
use proptest::prelude::*;

fn composition() -> impl Strategy<Value = Composition> {
    prop_oneof![
        Just(Composition::Alphanumeric),
        Just(Composition::AlphanumericHyphen),
        Just(Composition::AlphanumericUnderscore),
        Just(Composition::AlphanumericHyphenUnderscore),
    ]
}

proptest! {
    #[test]
    fn validation_outcome_is_deterministic(
        input in "[ -~]{0,30}",
        min in proptest::option::of(0usize..12),
        composition in composition(),
        byte_size in 0usize..40,
    ) {
        let config = Config::new(min, None, composition, None).unwrap();
        prop_assert_eq!(
            validate(&input, &config, byte_size),
            validate(&input, &config, byte_size)
        );
    }

    #[test]
    fn accepted_input_stays_accepted(input in "[0-9A-Za-z]{3,21}") {
        let config = Config::default();
        prop_assert!(validate(&input, &config, 16).is_ok());
        prop_assert!(validate(&input, &config, 16).is_ok());
    }

    #[test]
    fn construction_fails_iff_bounds_inverted(min in 0usize..64, max in 0usize..64) {
        let result = Config::create(ConfigOptions::default().with_min_length(min).with_max_length(max));
        if min > max {
            prop_assert_eq!(result, Err(ConfigError::LengthBoundsInverted { min, max }));
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn encoding_safe_matches_budget_and_ascii(input in "\\PC{0,40}", byte_size in 0usize..40) {
        let expected = input.encode_utf16().count() <= byte_size * 4 / 3 && input.is_ascii();
        prop_assert_eq!(is_encoding_safe(&input, byte_size), expected);
    }

    #[test]
    fn minimal_preset_accepts_delimiter_layouts(input in "[0-9A-Za-z_-]{1,21}") {
        prop_assert!(validate(&input, &Config::minimal(), 16).is_ok());
    }

    #[test]
    fn length_errors_beat_composition_errors(extra in 1usize..20, bad in "[!-,./:-@]") {
        let config = Config::default();
        let too_long = format!("{}{}", bad, "a".repeat(char_budget(16) + extra));
        prop_assert_eq!(validate(&too_long, &config, 16).unwrap_err().code(), ErrorCode::StringTooLong);

        let too_short = bad.clone();
        prop_assert_eq!(validate(&too_short, &config, 16).unwrap_err().code(), ErrorCode::StringTooShort);
    }

    #[test]
    fn budget_conflict_ignores_input(input in "\\PC{0,40}") {
        let config = Config::create(ConfigOptions::default().with_min_length(20)).unwrap();
        prop_assert_eq!(validate(&input, &config, 8).unwrap_err().code(), ErrorCode::InvalidConfig);
    }
}
