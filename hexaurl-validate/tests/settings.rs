use hexaurl_validate::{
    Composition, Config, DelimiterRules, ErrorCode, SettingsError, ValidatorSettings,
};
use std::io::Write;

#[test]
fn settings_defaults_are_sane() {
    let settings = ValidatorSettings::default();
    assert_eq!(settings.byte_size, 16);
    assert_eq!(settings.config, Config::default());
    assert_eq!(ValidatorSettings::from_json_str("{}").unwrap(), settings);
}

#[test]
fn settings_deserialize() {
    let settings = ValidatorSettings::from_json_str(
        r#"{
            "byte_size": 12,
            "config": {
                "min_length": 2,
                "max_length": 10,
                "composition": "alphanumeric_underscore",
                "delimiter": { "allow_leading_trailing_underscores": true }
            }
        }"#,
    )
    .expect("settings deserialize");

    assert_eq!(settings.byte_size, 12);
    assert_eq!(settings.config.min_length(), Some(2));
    assert_eq!(settings.config.max_length(), Some(10));
    assert_eq!(settings.config.composition(), Composition::AlphanumericUnderscore);
    assert_eq!(
        settings.config.effective_delimiter_rules(),
        DelimiterRules {
            allow_leading_trailing_underscores: true,
            ..DelimiterRules::strict()
        }
    );

    let validator = settings.into_validator();
    assert_eq!(validator.byte_size(), 12);
    assert!(validator.validate("_ab_").is_ok());
    assert_eq!(
        validator.validate("a__b").unwrap_err().code(),
        ErrorCode::ConsecutiveUnderscores
    );
}

#[test]
fn inverted_bounds_are_a_parse_error() {
    let err = ValidatorSettings::from_json_str(r#"{ "config": { "min_length": 9, "max_length": 3 } }"#)
        .unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
    assert!(err
        .to_string()
        .contains("minimum length (9) cannot be greater than maximum length (3)"));
}

#[test]
fn unknown_composition_is_rejected() {
    let err = ValidatorSettings::from_json_str(r#"{ "config": { "composition": "emoji" } }"#)
        .unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
}

#[test]
fn settings_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "byte_size": 8, "config": {{ "min_length": null, "composition": "alphanumeric" }} }}"#
    )
    .unwrap();

    let settings = ValidatorSettings::from_path(file.path()).unwrap();
    assert_eq!(settings.byte_size, 8);
    assert_eq!(settings.config.min_length(), None);
    assert_eq!(settings.config.composition(), Composition::Alphanumeric);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = ValidatorSettings::from_path(&path).unwrap_err();
    match &err {
        SettingsError::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected io error, got {other:?}"),
    }
    assert!(err.to_string().contains("missing.json"));
}
