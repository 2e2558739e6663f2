// # hosting.de DNS Provider
//
// This crate wires the hosting.de configuration resolver into a provider
// surface a plugin host can drive.
//
// ## Capabilities
//
// - Provider type name: `hostingde`
// - Resources: `hostingde_zone`, `hostingde_record`
// - Data sources: none
//
// ## Configuration
//
// | attribute    | environment variable   | notes                                 |
// |--------------|------------------------|---------------------------------------|
// | `account_id` | `HOSTINGDE_ACCOUNT_ID` | optional                              |
// | `auth_token` | `HOSTINGDE_AUTH_TOKEN` | required, sensitive                   |
// | `base_url`   | `HOSTINGDE_BASE_URL`   | defaults to the public DNS v1 JSON API |
//
// A declared attribute always wins over its environment variable.
//
// ## Security Requirements
//
// - Auth token NEVER appears in logs or diagnostics
// - Resources obtain credentials only from the injected client

mod provider;
mod record;
mod zone;

pub use provider::{ConfigureResponse, HostingdeProvider, PROVIDER_TYPE_NAME};
pub use record::{RECORD_RESOURCE_TYPE, RecordResource, RecordResourceFactory};
pub use zone::{ZONE_RESOURCE_TYPE, ZoneResource, ZoneResourceFactory};

use hostingde_core::ResourceRegistry;

/// Register the hosting.de resource types with a registry
///
/// Zones are registered before records.
///
/// # Example
///
/// ```rust
/// use hostingde_core::ResourceRegistry;
///
/// let registry = ResourceRegistry::new();
/// hostingde_provider::register(&registry);
///
/// assert_eq!(registry.resource_types(), vec!["hostingde_zone", "hostingde_record"]);
/// ```
pub fn register(registry: &ResourceRegistry) {
    registry.register_resource(Box::new(ZoneResourceFactory));
    registry.register_resource(Box::new(RecordResourceFactory));
}
