//! Shared helpers for resolver contract tests

#![allow(dead_code)]

use hostingde_core::config::{ACCOUNT_ID_ENV, AUTH_TOKEN_ENV, BASE_URL_ENV};
use hostingde_core::{ConfigValue, Diagnostic, Diagnostics, StaticEnv};

/// Environment with the given `(account_id, auth_token, base_url)` variables set
pub fn env(account_id: Option<&str>, auth_token: Option<&str>, base_url: Option<&str>) -> StaticEnv {
    let mut env = StaticEnv::new();
    if let Some(value) = account_id {
        env.set(ACCOUNT_ID_ENV, value);
    }
    if let Some(value) = auth_token {
        env.set(AUTH_TOKEN_ENV, value);
    }
    if let Some(value) = base_url {
        env.set(BASE_URL_ENV, value);
    }
    env
}

/// Shorthand for a known value
pub fn known(value: &str) -> ConfigValue {
    ConfigValue::known(value)
}

/// The single error scoped to `attribute`, panicking otherwise
pub fn single_error_for<'a>(diagnostics: &'a Diagnostics, attribute: &str) -> &'a Diagnostic {
    let errors: Vec<&Diagnostic> = diagnostics
        .iter()
        .filter(|d| d.is_error() && d.is_for(attribute))
        .collect();
    assert_eq!(
        errors.len(),
        1,
        "expected exactly one error on {}, got {:?}",
        attribute,
        diagnostics
    );
    errors[0]
}
