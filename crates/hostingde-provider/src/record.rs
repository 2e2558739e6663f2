//! DNS record resource

use hostingde_core::{HostingdeClient, Resource, ResourceFactory};
use std::sync::Arc;

/// Resource type name for DNS records
pub const RECORD_RESOURCE_TYPE: &str = "hostingde_record";

/// A record inside a hosting.de DNS zone
#[derive(Debug, Default)]
pub struct RecordResource {
    client: Option<Arc<HostingdeClient>>,
}

impl RecordResource {
    /// Create an unconfigured record resource
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resource for RecordResource {
    fn type_name(&self) -> &'static str {
        RECORD_RESOURCE_TYPE
    }

    fn configure(&mut self, client: Arc<HostingdeClient>) {
        self.client = Some(client);
    }

    fn client(&self) -> Option<&Arc<HostingdeClient>> {
        self.client.as_ref()
    }
}

/// Factory for record resources
pub struct RecordResourceFactory;

impl ResourceFactory for RecordResourceFactory {
    fn type_name(&self) -> &'static str {
        RECORD_RESOURCE_TYPE
    }

    fn create(&self) -> Box<dyn Resource> {
        Box::new(RecordResource::new())
    }
}
