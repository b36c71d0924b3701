use crate::{ApiConfig, MAX_TIMEOUT_SECS};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};

#[test]
fn given_default_api_config_when_validate_then_ok() {
    let config = ApiConfig::default();

    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.timeout(), some(eq(Duration::from_secs(30))));
}

#[test]
fn given_base_url_without_scheme_when_validate_then_error() {
    let config = ApiConfig {
        base_url: String::from("localhost:8000"),
        ..ApiConfig::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("api.base_url")
    );
}

#[test]
fn given_https_base_url_when_validate_then_ok() {
    let config = ApiConfig {
        base_url: String::from("https://todo.example.com"),
        ..ApiConfig::default()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_timeout_above_max_when_validate_then_error() {
    let config = ApiConfig {
        timeout_secs: MAX_TIMEOUT_SECS + 1,
        ..ApiConfig::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("api.timeout_secs")
    );
}

#[test]
fn given_zero_timeout_when_timeout_then_none() {
    let config = ApiConfig {
        timeout_secs: 0,
        ..ApiConfig::default()
    };

    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.timeout(), none());
}
