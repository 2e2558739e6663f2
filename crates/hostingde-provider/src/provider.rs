//! The hosting.de provider surface
//!
//! [`HostingdeProvider`] is what a plugin host talks to: it reports the
//! provider type name and schema, runs the configure step, and lists and
//! builds the resource handlers.

use hostingde_core::config::{
    ACCOUNT_ID_ATTR, ACCOUNT_ID_ENV, AUTH_TOKEN_ATTR, AUTH_TOKEN_ENV, BASE_URL_ATTR, BASE_URL_ENV,
};
use hostingde_core::{
    Attribute, DataSource, DataSourceFactory, Diagnostics, EnvironmentReader, Error,
    HostingdeClient, ProcessEnv, ProviderSchema, RawConfig, Resource, ResourceFactory,
    ResourceRegistry, Result,
};
use serde_json::Value;
use std::sync::Arc;

/// Provider type name the host routes configuration by
pub const PROVIDER_TYPE_NAME: &str = "hostingde";

/// Outcome of one configure cycle
///
/// On success both data slots hold the same client; on failure both are
/// empty and `diagnostics` holds at least one error.
#[derive(Debug, Clone, Default)]
pub struct ConfigureResponse {
    /// Everything reported while configuring
    pub diagnostics: Diagnostics,

    /// Client handed to every resource's configure step
    pub resource_data: Option<Arc<HostingdeClient>>,

    /// Client handed to every data source's configure step
    pub data_source_data: Option<Arc<HostingdeClient>>,
}

impl ConfigureResponse {
    /// Whether a client was produced
    pub fn is_success(&self) -> bool {
        self.resource_data.is_some() && !self.diagnostics.has_error()
    }

    /// Take the client, turning a failed cycle into an error
    ///
    /// The error lists the summary and attribute of every error diagnostic.
    pub fn into_client(self) -> Result<Arc<HostingdeClient>> {
        match self.resource_data {
            Some(client) if !self.diagnostics.has_error() => Ok(client),
            _ => {
                let errors: Vec<String> = self
                    .diagnostics
                    .errors()
                    .map(|d| match d.path {
                        Some(ref path) => format!("{} ({})", d.summary, path),
                        None => d.summary.clone(),
                    })
                    .collect();
                Err(Error::config(errors.join("; ")))
            }
        }
    }
}

/// The hosting.de provider
///
/// # Example
///
/// ```rust
/// use hostingde_core::StaticEnv;
/// use hostingde_provider::HostingdeProvider;
/// use std::sync::Arc;
///
/// let env = StaticEnv::new().with("HOSTINGDE_AUTH_TOKEN", "token");
/// let provider = HostingdeProvider::with_env(Arc::new(env));
///
/// let response = provider.configure(&serde_json::json!({ "account_id": "acc1" }));
/// assert!(response.is_success());
///
/// let resources = provider.create_resources(&response);
/// assert_eq!(resources.len(), 2);
/// ```
pub struct HostingdeProvider {
    env: Arc<dyn EnvironmentReader>,
    registry: ResourceRegistry,
}

impl HostingdeProvider {
    /// Create a provider that falls back to the process environment
    pub fn new() -> Self {
        Self::with_env(Arc::new(ProcessEnv))
    }

    /// Create a provider that falls back to the given environment
    pub fn with_env(env: Arc<dyn EnvironmentReader>) -> Self {
        let registry = ResourceRegistry::new();
        crate::register(&registry);
        Self { env, registry }
    }

    /// Provider type name
    pub fn type_name(&self) -> &'static str {
        PROVIDER_TYPE_NAME
    }

    /// Schema of the provider configuration block
    pub fn schema(&self) -> ProviderSchema {
        ProviderSchema::new()
            .with_attribute(
                ACCOUNT_ID_ATTR,
                Attribute::optional_string(format!(
                    "Account ID for hosting.de API. May also be provided via {} environment variable.",
                    ACCOUNT_ID_ENV
                )),
            )
            .with_attribute(
                AUTH_TOKEN_ATTR,
                Attribute::optional_string(format!(
                    "Auth token for hosting.de API. May also be provided via {} environment variable.",
                    AUTH_TOKEN_ENV
                ))
                .sensitive(),
            )
            .with_attribute(
                BASE_URL_ATTR,
                Attribute::optional_string(format!(
                    "Base URL for hosting.de API. May also be provided via {} environment variable.",
                    BASE_URL_ENV
                )),
            )
    }

    /// Run the configure step on a JSON configuration payload
    ///
    /// Payload decoding problems are returned without attempting resolution.
    pub fn configure(&self, payload: &Value) -> ConfigureResponse {
        let (raw, diagnostics) = RawConfig::from_json(payload);
        if diagnostics.has_error() {
            tracing::debug!(
                errors = diagnostics.error_count(),
                "hosting.de provider configuration could not be decoded"
            );
            return ConfigureResponse {
                diagnostics,
                ..ConfigureResponse::default()
            };
        }

        let mut response = self.configure_raw(&raw);
        let mut all = diagnostics;
        all.append(std::mem::take(&mut response.diagnostics));
        response.diagnostics = all;
        response
    }

    /// Run the configure step on an already-decoded configuration
    pub fn configure_raw(&self, raw: &RawConfig) -> ConfigureResponse {
        let (client, diagnostics) = hostingde_core::resolve(raw, self.env.as_ref());

        let client = client.map(Arc::new);
        ConfigureResponse {
            diagnostics,
            resource_data: client.clone(),
            data_source_data: client,
        }
    }

    /// Registry backing [`resources`](Self::resources) and
    /// [`data_sources`](Self::data_sources), for embedders adding their own types
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Resource types this provider offers
    pub fn resources(&self) -> Vec<Arc<dyn ResourceFactory>> {
        self.registry.resource_factories()
    }

    /// Data-source types this provider offers
    pub fn data_sources(&self) -> Vec<Arc<dyn DataSourceFactory>> {
        self.registry.data_source_factories()
    }

    /// Build configured resource handlers for a configure cycle
    ///
    /// Returns nothing when the cycle failed.
    pub fn create_resources(&self, response: &ConfigureResponse) -> Vec<Box<dyn Resource>> {
        match response.resource_data {
            Some(ref client) if response.is_success() => self.registry.create_resources(client),
            _ => {
                tracing::debug!("Skipping resource construction: provider is not configured");
                Vec::new()
            }
        }
    }

    /// Build configured data-source handlers for a configure cycle
    ///
    /// Returns nothing when the cycle failed.
    pub fn create_data_sources(&self, response: &ConfigureResponse) -> Vec<Box<dyn DataSource>> {
        match response.data_source_data {
            Some(ref client) if response.is_success() => self.registry.create_data_sources(client),
            _ => {
                tracing::debug!("Skipping data source construction: provider is not configured");
                Vec::new()
            }
        }
    }
}

impl Default for HostingdeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostingde_core::StaticEnv;
    use hostingde_core::config::{DEFAULT_BASE_URL, UNKNOWN_VALUE_SENTINEL};
    use serde_json::json;
    use tracing_test::traced_test;

    fn provider(env: StaticEnv) -> HostingdeProvider {
        HostingdeProvider::with_env(Arc::new(env))
    }

    #[test]
    fn test_type_name() {
        assert_eq!(provider(StaticEnv::new()).type_name(), "hostingde");
    }

    #[test]
    fn test_schema_marks_token_sensitive() {
        let schema = provider(StaticEnv::new()).schema();

        assert!(schema.is_sensitive("auth_token"));
        assert!(!schema.is_sensitive("account_id"));
        assert!(!schema.is_sensitive("base_url"));
        assert!(schema.attributes().all(|(_, attr)| attr.optional));
        assert!(
            schema
                .attribute("base_url")
                .unwrap()
                .description
                .contains("HOSTINGDE_BASE_URL")
        );
    }

    #[test]
    fn test_capabilities() {
        let provider = provider(StaticEnv::new());

        let resources: Vec<_> = provider.resources().iter().map(|f| f.type_name()).collect();
        assert_eq!(resources, vec!["hostingde_zone", "hostingde_record"]);
        assert!(provider.data_sources().is_empty());
    }

    #[test]
    fn test_configure_publishes_same_client_to_both_slots() {
        let provider = provider(StaticEnv::new());

        let response = provider.configure(&json!({ "auth_token": "tok1" }));

        assert!(response.is_success());
        let resource_data = response.resource_data.as_ref().unwrap();
        let data_source_data = response.data_source_data.as_ref().unwrap();
        assert!(Arc::ptr_eq(resource_data, data_source_data));
        assert_eq!(resource_data.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_configure_failure_publishes_nothing() {
        let provider = provider(StaticEnv::new());

        let response = provider.configure(&json!({}));

        assert!(!response.is_success());
        assert!(response.resource_data.is_none());
        assert!(response.data_source_data.is_none());
        assert!(provider.create_resources(&response).is_empty());
        assert!(provider.create_data_sources(&response).is_empty());
    }

    #[test]
    fn test_decode_errors_stop_before_resolution() {
        let provider = provider(StaticEnv::new().with("HOSTINGDE_AUTH_TOKEN", "tok"));

        let response = provider.configure(&json!({ "account_id": 42 }));

        assert!(!response.is_success());
        assert_eq!(response.diagnostics.error_count(), 1);
        assert_eq!(
            response.diagnostics.errors().next().unwrap().summary,
            "Invalid attribute type"
        );
    }

    #[test]
    fn test_unknown_sentinel_is_reported() {
        let provider = provider(StaticEnv::new().with("HOSTINGDE_AUTH_TOKEN", "tok"));

        let response = provider.configure(&json!({ "account_id": UNKNOWN_VALUE_SENTINEL }));

        assert!(!response.is_success());
        assert_eq!(
            response
                .diagnostics
                .for_attribute("account_id")
                .next()
                .unwrap()
                .summary,
            "Unknown hosting.de API account ID"
        );
    }

    #[test]
    fn test_into_client_error_lists_attributes() {
        let provider = provider(StaticEnv::new());

        let err = provider.configure(&json!({})).into_client().unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Missing hosting.de API auth token"));
        assert!(message.contains("auth_token"));
    }

    #[test]
    #[traced_test]
    fn test_configure_logs_redact_token() {
        let provider = provider(StaticEnv::new());

        let response = provider.configure(&json!({ "auth_token": "provider-secret-token" }));

        assert!(response.is_success());
        assert!(logs_contain("Creating hosting.de client"));
        assert!(!logs_contain("provider-secret-token"));
    }
}
