// # Resource Trait
//
// Defines the interface for managed resource types.
//
// ## Implementations
//
// - Zone and record resources: `hostingde-provider` crate
//
// ## Client Injection
//
// A resource never reads credentials itself. The registry creates it through
// its factory and immediately hands it the shared client:
//
// ```rust,ignore
// let mut resource = factory.create();
// resource.configure(Arc::clone(&client));
// ```

use crate::client::HostingdeClient;
use std::sync::Arc;

/// Trait for resource type implementations
///
/// # Thread Safety
///
/// Implementations must be thread-safe; the host may drive several resource
/// operations concurrently once configuration has completed.
///
/// # Credentials
///
/// The client passed to [`configure`](Resource::configure) is the only
/// channel through which a resource obtains credentials. Resources must not
/// read environment variables or the provider configuration directly.
pub trait Resource: Send + Sync {
    /// Full resource type name (e.g. `hostingde_zone`)
    fn type_name(&self) -> &'static str;

    /// Receive the shared client for this configure cycle
    fn configure(&mut self, client: Arc<HostingdeClient>);

    /// The client received in [`configure`](Resource::configure), if any
    fn client(&self) -> Option<&Arc<HostingdeClient>>;
}

/// Constructs fresh, unconfigured resource instances
pub trait ResourceFactory: Send + Sync {
    /// Resource type name produced by this factory
    fn type_name(&self) -> &'static str;

    /// Create a new instance
    fn create(&self) -> Box<dyn Resource>;
}
