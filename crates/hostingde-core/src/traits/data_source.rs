// # Data Source Trait
//
// Read-only counterpart to [`Resource`](crate::traits::Resource). The
// provider currently offers no data sources, but the registry carries the
// list so the capability boundary is complete.

use crate::client::HostingdeClient;
use std::sync::Arc;

/// Trait for data-source type implementations
pub trait DataSource: Send + Sync {
    /// Full data-source type name
    fn type_name(&self) -> &'static str;

    /// Receive the shared client for this configure cycle
    fn configure(&mut self, client: Arc<HostingdeClient>);

    /// The client received in [`configure`](DataSource::configure), if any
    fn client(&self) -> Option<&Arc<HostingdeClient>>;
}

/// Constructs fresh, unconfigured data-source instances
pub trait DataSourceFactory: Send + Sync {
    /// Data-source type name produced by this factory
    fn type_name(&self) -> &'static str;

    /// Create a new instance
    fn create(&self) -> Box<dyn DataSource>;
}
