//! Configuration types for the hosting.de provider
//!
//! This module defines the as-declared configuration snapshot handed to the
//! resolver ([`RawConfig`]) and the triple it produces ([`ResolvedConfig`]).

use crate::diagnostics::{AttributePath, Diagnostics};
use crate::error::Result;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// Default hosting.de DNS API endpoint
pub const DEFAULT_BASE_URL: &str = "https://secure.hosting.de/api/dns/v1/json";

/// Account ID attribute name
pub const ACCOUNT_ID_ATTR: &str = "account_id";
/// Auth token attribute name (sensitive)
pub const AUTH_TOKEN_ATTR: &str = "auth_token";
/// Base URL attribute name
pub const BASE_URL_ATTR: &str = "base_url";

/// Environment fallback for `account_id`
pub const ACCOUNT_ID_ENV: &str = "HOSTINGDE_ACCOUNT_ID";
/// Environment fallback for `auth_token`
pub const AUTH_TOKEN_ENV: &str = "HOSTINGDE_AUTH_TOKEN";
/// Environment fallback for `base_url`
pub const BASE_URL_ENV: &str = "HOSTINGDE_BASE_URL";

/// String hosts put in a JSON payload for a value that is not yet computed
///
/// This is the marker Terraform uses when shimming unknown values into
/// flat JSON/map representations.
pub const UNKNOWN_VALUE_SENTINEL: &str = "74D93920-ED26-11E3-AC10-0800200C9A66";

/// Placeholder written wherever the auth token would otherwise appear
pub const REDACTED: &str = "<REDACTED>";

const ATTRIBUTES: [&str; 3] = [ACCOUNT_ID_ATTR, AUTH_TOKEN_ATTR, BASE_URL_ATTR];

/// A declared configuration value
///
/// `Known("")` and `Absent` are different: a declared empty string overrides
/// the environment, an absent value does not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigValue {
    /// Not set in the configuration
    #[default]
    Absent,
    /// Set to a concrete value
    Known(String),
    /// Set, but depends on something the host has not computed yet
    Unknown,
}

impl ConfigValue {
    /// Create a known value
    pub fn known(value: impl Into<String>) -> Self {
        ConfigValue::Known(value.into())
    }

    /// Whether the value is not set
    pub fn is_absent(&self) -> bool {
        matches!(self, ConfigValue::Absent)
    }

    /// Whether the value is pending upstream computation
    pub fn is_unknown(&self) -> bool {
        matches!(self, ConfigValue::Unknown)
    }

    /// The concrete value, if known
    pub fn as_known(&self) -> Option<&str> {
        match self {
            ConfigValue::Known(value) => Some(value),
            _ => None,
        }
    }

    fn redacted(&self) -> ConfigValue {
        match self {
            ConfigValue::Known(_) => ConfigValue::known(REDACTED),
            other => other.clone(),
        }
    }
}

/// As-declared provider configuration
///
/// # Example
///
/// ```rust
/// use hostingde_core::config::{ConfigValue, RawConfig};
///
/// let raw = RawConfig::new()
///     .with_account_id(ConfigValue::known("acc1"))
///     .with_auth_token(ConfigValue::Unknown);
///
/// assert_eq!(raw.account_id.as_known(), Some("acc1"));
/// assert!(raw.auth_token.is_unknown());
/// assert!(raw.base_url.is_absent());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    /// hosting.de account ID (optional)
    pub account_id: ConfigValue,

    /// hosting.de API auth token
    /// ⚠️ NEVER log this value
    pub auth_token: ConfigValue,

    /// API endpoint (optional, defaults to [`DEFAULT_BASE_URL`])
    pub base_url: ConfigValue,
}

impl RawConfig {
    /// Create a configuration with every attribute absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the account ID
    pub fn with_account_id(mut self, value: ConfigValue) -> Self {
        self.account_id = value;
        self
    }

    /// Set the auth token
    pub fn with_auth_token(mut self, value: ConfigValue) -> Self {
        self.auth_token = value;
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, value: ConfigValue) -> Self {
        self.base_url = value;
        self
    }

    /// Decode a JSON configuration payload
    ///
    /// Missing attributes and `null` decode as absent, the
    /// [`UNKNOWN_VALUE_SENTINEL`] string as unknown, and any other string as
    /// known. Non-string values and unexpected attributes produce errors
    /// scoped to that attribute; the affected attribute decodes as absent.
    /// A `null` payload is an empty configuration.
    pub fn from_json(payload: &Value) -> (Self, Diagnostics) {
        let mut diagnostics = Diagnostics::new();

        let object = match payload {
            Value::Object(object) => object,
            Value::Null => return (Self::default(), diagnostics),
            other => {
                diagnostics.add_error(
                    "Invalid provider configuration",
                    format!(
                        "The provider configuration must be an object, got {}.",
                        json_type_name(other)
                    ),
                );
                return (Self::default(), diagnostics);
            }
        };

        for name in object.keys() {
            if !ATTRIBUTES.contains(&name.as_str()) {
                diagnostics.add_attribute_error(
                    AttributePath::root(name.as_str()),
                    "Unsupported argument",
                    format!("An argument named \"{}\" is not expected here.", name),
                );
            }
        }

        let raw = Self {
            account_id: decode_attribute(object, ACCOUNT_ID_ATTR, &mut diagnostics),
            auth_token: decode_attribute(object, AUTH_TOKEN_ATTR, &mut diagnostics),
            base_url: decode_attribute(object, BASE_URL_ATTR, &mut diagnostics),
        };

        (raw, diagnostics)
    }

    /// Parse and decode a JSON configuration payload from text
    pub fn from_json_str(payload: &str) -> Result<(Self, Diagnostics)> {
        let value: Value = serde_json::from_str(payload)?;
        Ok(Self::from_json(&value))
    }
}

impl fmt::Debug for RawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawConfig")
            .field("account_id", &self.account_id)
            .field("auth_token", &self.auth_token.redacted())
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Whether `url` uses the unencrypted `http` scheme, in any letter case
pub(crate) fn is_plain_http(url: &str) -> bool {
    url.split_once("://")
        .is_some_and(|(scheme, _)| scheme.eq_ignore_ascii_case("http"))
}

/// `url` with any `user:password@` part of the authority removed
///
/// Used wherever an endpoint is logged or debug-printed.
pub(crate) fn without_userinfo(url: &str) -> Cow<'_, str> {
    let Some((scheme, rest)) = url.split_once("://") else {
        return Cow::Borrowed(url);
    };
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => Cow::Owned(format!(
            "{}://{}{}",
            scheme,
            &rest[at + 1..authority_end],
            &rest[authority_end..]
        )),
        None => Cow::Borrowed(url),
    }
}

fn decode_attribute(
    object: &Map<String, Value>,
    name: &str,
    diagnostics: &mut Diagnostics,
) -> ConfigValue {
    match object.get(name) {
        None | Some(Value::Null) => ConfigValue::Absent,
        Some(Value::String(value)) if value == UNKNOWN_VALUE_SENTINEL => ConfigValue::Unknown,
        Some(Value::String(value)) => ConfigValue::Known(value.clone()),
        Some(other) => {
            // Only the type is reported; the value might be a credential
            diagnostics.add_attribute_error(
                AttributePath::root(name),
                "Invalid attribute type",
                format!(
                    "The \"{}\" attribute must be a string, got {}.",
                    name,
                    json_type_name(other)
                ),
            );
            ConfigValue::Absent
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Read a JSON configuration payload from a file
///
/// Returns the raw JSON value; decode it with [`RawConfig::from_json`].
pub fn read_payload(path: impl AsRef<Path>) -> Result<Value> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Fully resolved credentials and endpoint
///
/// Only the resolver builds this type, so a value in hand always satisfies
/// `!auth_token().is_empty()` and `!base_url().is_empty()`.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    account_id: String,
    auth_token: String,
    base_url: String,
}

impl ResolvedConfig {
    pub(crate) fn new(account_id: String, auth_token: String, base_url: String) -> Self {
        debug_assert!(!auth_token.is_empty());
        debug_assert!(!base_url.is_empty());
        Self {
            account_id,
            auth_token,
            base_url,
        }
    }

    /// Account ID, possibly empty
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Auth token, never empty
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// API endpoint, never empty
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("account_id", &self.account_id)
            .field("auth_token", &REDACTED)
            .field("base_url", &without_userinfo(&self.base_url))
            .finish()
    }
}
