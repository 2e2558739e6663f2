//! DNS zone resource

use hostingde_core::{HostingdeClient, Resource, ResourceFactory};
use std::sync::Arc;

/// Resource type name for DNS zones
pub const ZONE_RESOURCE_TYPE: &str = "hostingde_zone";

/// A hosting.de DNS zone
///
/// Holds the shared client handed over during configuration; zone
/// lifecycle operations go through it.
#[derive(Debug, Default)]
pub struct ZoneResource {
    client: Option<Arc<HostingdeClient>>,
}

impl ZoneResource {
    /// Create an unconfigured zone resource
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resource for ZoneResource {
    fn type_name(&self) -> &'static str {
        ZONE_RESOURCE_TYPE
    }

    fn configure(&mut self, client: Arc<HostingdeClient>) {
        self.client = Some(client);
    }

    fn client(&self) -> Option<&Arc<HostingdeClient>> {
        self.client.as_ref()
    }
}

/// Factory for zone resources
pub struct ZoneResourceFactory;

impl ResourceFactory for ZoneResourceFactory {
    fn type_name(&self) -> &'static str {
        ZONE_RESOURCE_TYPE
    }

    fn create(&self) -> Box<dyn Resource> {
        Box::new(ZoneResource::new())
    }
}
