// # Configuration Resolver
//
// Turns the declared provider configuration plus the `HOSTINGDE_*`
// environment variables into a client handle.
//
// ## Precedence
//
// For every attribute the environment variable is the starting value and a
// declared value replaces it, even when the declared value is empty:
//
// | config        | environment | result                     |
// |---------------|-------------|----------------------------|
// | absent        | unset       | ""                         |
// | absent        | "e"         | "e"                        |
// | known("c")    | any         | "c"                        |
// | known("")     | any         | ""                         |
// | unknown       | any         | error (account/token only) |
//
// An empty base URL then falls back to `DEFAULT_BASE_URL`, and an empty auth
// token is an error. An unknown base URL is resolved like an absent one.
//
// ## Diagnostics
//
// Independent findings are accumulated, so an operator with two unknown
// attributes sees both errors at once. Any error means no client.

use crate::client::HostingdeClient;
use crate::config::{
    ACCOUNT_ID_ATTR, ACCOUNT_ID_ENV, AUTH_TOKEN_ATTR, AUTH_TOKEN_ENV, BASE_URL_ATTR, BASE_URL_ENV,
    ConfigValue, DEFAULT_BASE_URL, REDACTED, RawConfig, ResolvedConfig, is_plain_http,
    without_userinfo,
};
use crate::diagnostics::{AttributePath, Diagnostics};
use crate::env::EnvironmentReader;

/// Resolve configuration and build the client handle
///
/// # Returns
///
/// - `(Some(client), diagnostics)`: Resolution succeeded; `diagnostics` may
///   still carry warnings
/// - `(None, diagnostics)`: `diagnostics` holds at least one error
///
/// # Example
///
/// ```rust
/// use hostingde_core::config::{ConfigValue, RawConfig, DEFAULT_BASE_URL};
/// use hostingde_core::env::StaticEnv;
///
/// let raw = RawConfig::new().with_account_id(ConfigValue::known("acc1"));
/// let env = StaticEnv::new().with("HOSTINGDE_AUTH_TOKEN", "tok1");
///
/// let (client, diagnostics) = hostingde_core::resolve(&raw, &env);
/// let client = client.expect("resolution succeeds");
///
/// assert!(!diagnostics.has_error());
/// assert_eq!(client.account_id(), "acc1");
/// assert_eq!(client.base_url(), DEFAULT_BASE_URL);
/// ```
pub fn resolve<E>(raw: &RawConfig, env: &E) -> (Option<HostingdeClient>, Diagnostics)
where
    E: EnvironmentReader + ?Sized,
{
    let (resolved, diagnostics) = resolve_config(raw, env);
    let client = resolved.map(HostingdeClient::from);

    if client.is_some() {
        tracing::info!(success = true, "Configured hosting.de client");
    }

    (client, diagnostics)
}

/// Resolve configuration without building a client
///
/// Same contract as [`resolve`], returning the resolved triple instead.
pub fn resolve_config<E>(raw: &RawConfig, env: &E) -> (Option<ResolvedConfig>, Diagnostics)
where
    E: EnvironmentReader + ?Sized,
{
    tracing::info!("Configuring hosting.de client");

    let mut diagnostics = Diagnostics::new();

    if raw.account_id.is_unknown() {
        diagnostics.add_attribute_error(
            AttributePath::root(ACCOUNT_ID_ATTR),
            "Unknown hosting.de API account ID",
            unknown_value_detail("account ID", ACCOUNT_ID_ENV),
        );
    }

    if raw.auth_token.is_unknown() {
        diagnostics.add_attribute_error(
            AttributePath::root(AUTH_TOKEN_ATTR),
            "Unknown hosting.de API auth token",
            unknown_value_detail("auth token", AUTH_TOKEN_ENV),
        );
    }

    let account_id = with_env_default(&raw.account_id, env, ACCOUNT_ID_ENV);
    let auth_token = with_env_default(&raw.auth_token, env, AUTH_TOKEN_ENV);

    // Not guarded: an unknown endpoint falls through to the env/default path
    let mut base_url = match raw.base_url {
        ConfigValue::Known(ref url) => url.clone(),
        ConfigValue::Absent | ConfigValue::Unknown => env.var(BASE_URL_ENV).unwrap_or_default(),
    };
    if base_url.is_empty() {
        base_url = DEFAULT_BASE_URL.to_string();
    }

    if auth_token.as_deref() == Some("") {
        diagnostics.add_attribute_error(
            AttributePath::root(AUTH_TOKEN_ATTR),
            "Missing hosting.de API auth token",
            format!(
                "The provider cannot create the hosting.de API client as there is a missing or \
                 empty value for the hosting.de API auth token. Set the {} value in the \
                 configuration or use the {} environment variable. If either is already set, \
                 ensure the value is not empty.",
                AUTH_TOKEN_ATTR, AUTH_TOKEN_ENV
            ),
        );
    }

    if is_plain_http(&base_url) {
        tracing::warn!(
            "hosting.de base URL does not use HTTPS: {}",
            without_userinfo(&base_url)
        );
        diagnostics.add_attribute_warning(
            AttributePath::root(BASE_URL_ATTR),
            "Insecure hosting.de API base URL",
            "The hosting.de API base URL uses plain HTTP, so the auth token is sent \
             unencrypted. Use an https:// endpoint.",
        );
    }

    let (Some(account_id), Some(auth_token)) = (account_id, auth_token) else {
        tracing::debug!(
            errors = diagnostics.error_count(),
            "hosting.de client configuration has unknown values"
        );
        return (None, diagnostics);
    };

    if diagnostics.has_error() {
        tracing::debug!(
            errors = diagnostics.error_count(),
            "hosting.de client configuration is invalid"
        );
        return (None, diagnostics);
    }

    tracing::debug!(
        hostingde_account_id = %account_id,
        hostingde_auth_token = REDACTED,
        hostingde_base_url = %without_userinfo(&base_url),
        "Creating hosting.de client"
    );

    (
        Some(ResolvedConfig::new(account_id, auth_token, base_url)),
        diagnostics,
    )
}

/// Environment value overridden by a declared one; `None` when unknown
fn with_env_default<E>(value: &ConfigValue, env: &E, var: &str) -> Option<String>
where
    E: EnvironmentReader + ?Sized,
{
    match value {
        ConfigValue::Known(declared) => Some(declared.clone()),
        ConfigValue::Absent => Some(env.var(var).unwrap_or_default()),
        ConfigValue::Unknown => None,
    }
}

fn unknown_value_detail(what: &str, env_var: &str) -> String {
    format!(
        "The provider cannot create the hosting.de API client as there is an unknown \
         configuration value for the hosting.de API {}. Either target apply the source of \
         the value first, set the value statically in the configuration, or use the {} \
         environment variable.",
        what, env_var
    )
}
