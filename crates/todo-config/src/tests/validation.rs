use crate::ValidationConfig;
use crate::validation_config::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, MIN_PASSWORD_LENGTH};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};

#[test]
fn given_default_validation_config_when_validate_then_ok() {
    assert_that!(ValidationConfig::default().validate(), ok(anything()));
}

#[test]
fn given_zero_title_length_when_validate_then_error() {
    let config = ValidationConfig {
        max_title_length: 0,
        ..ValidationConfig::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("max_title_length")
    );
}

#[test]
fn given_title_length_above_max_when_validate_then_error() {
    let config = ValidationConfig {
        max_title_length: MAX_TITLE_LENGTH + 1,
        ..ValidationConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_description_length_above_max_when_validate_then_error() {
    let config = ValidationConfig {
        max_description_length: MAX_DESCRIPTION_LENGTH + 1,
        ..ValidationConfig::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("max_description_length")
    );
}

#[test]
fn given_password_length_below_min_when_validate_then_error() {
    let config = ValidationConfig {
        min_password_length: MIN_PASSWORD_LENGTH - 1,
        ..ValidationConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_custom_values_when_limits_then_copied_into_field_limits() {
    let config = ValidationConfig {
        max_title_length: 50,
        max_description_length: 400,
        min_password_length: 10,
    };

    let limits = config.limits();

    assert_that!(limits.max_title_length, eq(50));
    assert_that!(limits.max_description_length, eq(400));
    assert_that!(limits.min_password_length, eq(10));
}
