use hexaurl_validate::{
    build_delimiter_rules, validate, Composition, Config, ConfigOptions, DelimiterOverrides,
    ErrorCode, Validator,
};

#[test]
fn default_rules_with_sixteen_bytes() {
    let validator = Validator::default();
    let cases = [
        ("abc-123", None),
        ("ab", Some(ErrorCode::StringTooShort)),
        ("aaaaaaaaaaaaaaaaaaaaaa", Some(ErrorCode::StringTooLong)),
        ("abc_123", Some(ErrorCode::InvalidCharacter)),
        ("-abc", Some(ErrorCode::LeadingTrailingHyphen)),
        ("ab--cd", Some(ErrorCode::ConsecutiveHyphens)),
    ];

    for (input, expected) in cases {
        assert_eq!(
            validator.validate(input).err().map(|e| e.code()),
            expected,
            "{input}"
        );
    }
}

#[test]
fn validator_agrees_with_free_function() {
    let config = Config::create(
        ConfigOptions::default()
            .with_composition(Composition::AlphanumericHyphenUnderscore)
            .with_delimiter(build_delimiter_rules(DelimiterOverrides {
                allow_adjacent_hyphen_underscore: Some(true),
                ..Default::default()
            })),
    )
    .unwrap();
    let validator = Validator::new(config).with_byte_size(12);

    for input in ["a-_b", "a_-b", "_ab", "a__b", "abc", "a.b", "abcdefghijklmnop"] {
        assert_eq!(validator.validate(input), validate(input, &config, 12), "{input}");
    }
}

#[test]
fn encoding_safety_is_weaker_than_validation() {
    let validator = Validator::default();
    for input in ["ab", "abc_123", "-abc", "a b"] {
        assert!(validator.is_encoding_safe(input));
        assert!(validator.validate(input).is_err());
    }
    assert!(!validator.is_encoding_safe("naïve"));
}

#[test]
fn construction_errors_are_distinct_from_token_errors() {
    let construction = Config::create(ConfigOptions::default().with_min_length(5).with_max_length(4));
    assert!(construction.is_err());

    // Consistent on its own, impossible once the budget applies
    let config = Config::create(ConfigOptions::default().with_min_length(20)).unwrap();
    let err = Validator::new(config).with_byte_size(8).validate("abc").unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidConfig);
}

#[test]
fn minimal_validator_accepts_loose_tokens() {
    let validator = Validator::minimal();
    for input in ["a", "--", "__", "_-_", "a-b_c--d__e"] {
        assert!(validator.validate(input).is_ok(), "{input}");
    }
    assert_eq!(
        validator.validate("").unwrap_err().code(),
        ErrorCode::InvalidCharacter
    );
}

#[test]
fn validator_is_shareable_across_threads() {
    let validator = Validator::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || validator.validate(&format!("token-{i}")).is_ok())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
