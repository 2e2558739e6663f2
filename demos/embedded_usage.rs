//! Minimal embedding example for hostingde-core
//!
//! This example demonstrates driving the provider configure cycle from a
//! custom application, with a fixed environment instead of the process one,
//! and registering an extra resource type next to the built-in ones.

use hostingde_core::config::UNKNOWN_VALUE_SENTINEL;
use hostingde_core::{HostingdeClient, Resource, ResourceFactory, StaticEnv};
use hostingde_provider::HostingdeProvider;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Custom resource type that only reports which account it acts for
struct AuditResource {
    client: Option<Arc<HostingdeClient>>,
}

impl Resource for AuditResource {
    fn type_name(&self) -> &'static str {
        "embedded_audit"
    }

    fn configure(&mut self, client: Arc<HostingdeClient>) {
        info!(
            "Audit resource configured for account '{}' at {}",
            client.account_id(),
            client.base_url()
        );
        self.client = Some(client);
    }

    fn client(&self) -> Option<&Arc<HostingdeClient>> {
        self.client.as_ref()
    }
}

struct AuditFactory;

impl ResourceFactory for AuditFactory {
    fn type_name(&self) -> &'static str {
        "embedded_audit"
    }

    fn create(&self) -> Box<dyn Resource> {
        Box::new(AuditResource { client: None })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let env = StaticEnv::new().with("HOSTINGDE_AUTH_TOKEN", "embedded-demo-token");
    let provider = HostingdeProvider::with_env(Arc::new(env));
    provider.registry().register_resource(Box::new(AuditFactory));

    // Planning pass: the account ID depends on something not yet applied
    let plan = provider.configure(&json!({ "account_id": UNKNOWN_VALUE_SENTINEL }));
    for diagnostic in &plan.diagnostics {
        warn!("{}", diagnostic);
    }
    info!(
        "Planning pass built {} resource handler(s)",
        provider.create_resources(&plan).len()
    );

    // Apply pass: the value is known now
    let apply = provider.configure(&json!({ "account_id": "12345" }));
    let resources = provider.create_resources(&apply);
    for resource in &resources {
        info!("Resource ready: {}", resource.type_name());
    }

    match apply.into_client() {
        Ok(client) => info!("Client ready: {:?}", client),
        Err(e) => warn!("Apply pass failed: {}", e),
    }
}
