//! Resource and data-source registry
//!
//! The registry holds the factories for every capability a provider offers,
//! in registration order, and builds configured handler instances from them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hostingde_core::registry::ResourceRegistry;
//!
//! // Create a registry
//! let registry = ResourceRegistry::new();
//!
//! // Register resource types
//! registry.register_resource(Box::new(ZoneResourceFactory));
//!
//! // Build handlers once configuration produced a client
//! let resources = registry.create_resources(&client);
//! ```
//!
//! ## Injection
//!
//! Every instance the registry creates is handed the shared client through
//! its `configure` step before it is returned. There is no global slot a
//! handler could read the client from.

use crate::client::HostingdeClient;
use crate::error::{Error, Result};
use crate::traits::{DataSource, DataSourceFactory, Resource, ResourceFactory};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Registry of resource and data-source factories
///
/// ## Thread Safety
///
/// The registry uses interior mutability with RwLock, allowing concurrent
/// reads and exclusive writes. A poisoned lock is recovered: the factory
/// lists are replaced atomically, so they are never left half-written.
#[derive(Default)]
pub struct ResourceRegistry {
    /// Registered resource factories, in registration order
    resources: RwLock<Vec<Arc<dyn ResourceFactory>>>,

    /// Registered data-source factories, in registration order
    data_sources: RwLock<Vec<Arc<dyn DataSourceFactory>>>,
}

impl ResourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource factory
    ///
    /// Registering a type name twice replaces the earlier factory, keeping
    /// its position in the list.
    pub fn register_resource(&self, factory: Box<dyn ResourceFactory>) {
        let factory: Arc<dyn ResourceFactory> = Arc::from(factory);
        let name = factory.type_name();
        let mut resources = write(&self.resources);
        match resources.iter().position(|f| f.type_name() == name) {
            Some(index) => {
                tracing::debug!("Replacing resource factory: {}", name);
                resources[index] = factory;
            }
            None => resources.push(factory),
        }
    }

    /// Register a data-source factory
    ///
    /// Same replacement rule as [`register_resource`](Self::register_resource).
    pub fn register_data_source(&self, factory: Box<dyn DataSourceFactory>) {
        let factory: Arc<dyn DataSourceFactory> = Arc::from(factory);
        let name = factory.type_name();
        let mut data_sources = write(&self.data_sources);
        match data_sources.iter().position(|f| f.type_name() == name) {
            Some(index) => {
                tracing::debug!("Replacing data source factory: {}", name);
                data_sources[index] = factory;
            }
            None => data_sources.push(factory),
        }
    }

    /// Registered resource factories, in registration order
    pub fn resource_factories(&self) -> Vec<Arc<dyn ResourceFactory>> {
        read(&self.resources).clone()
    }

    /// Registered data-source factories, in registration order
    pub fn data_source_factories(&self) -> Vec<Arc<dyn DataSourceFactory>> {
        read(&self.data_sources).clone()
    }

    /// List all registered resource type names
    pub fn resource_types(&self) -> Vec<&'static str> {
        read(&self.resources).iter().map(|f| f.type_name()).collect()
    }

    /// List all registered data-source type names
    pub fn data_source_types(&self) -> Vec<&'static str> {
        read(&self.data_sources).iter().map(|f| f.type_name()).collect()
    }

    /// Check if a resource type is registered
    pub fn has_resource(&self, name: &str) -> bool {
        read(&self.resources).iter().any(|f| f.type_name() == name)
    }

    /// Check if a data-source type is registered
    pub fn has_data_source(&self, name: &str) -> bool {
        read(&self.data_sources).iter().any(|f| f.type_name() == name)
    }

    /// Create one configured resource by type name
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn Resource>)`: Instance already holding `client`
    /// - `Err(Error::NotFound)`: If the type is not registered
    pub fn create_resource(
        &self,
        name: &str,
        client: &Arc<HostingdeClient>,
    ) -> Result<Box<dyn Resource>> {
        let factory = read(&self.resources)
            .iter()
            .find(|f| f.type_name() == name)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("Unknown resource type: {}", name)))?;

        let mut resource = factory.create();
        resource.configure(Arc::clone(client));
        Ok(resource)
    }

    /// Create one configured instance of every registered resource type
    pub fn create_resources(&self, client: &Arc<HostingdeClient>) -> Vec<Box<dyn Resource>> {
        self.resource_factories()
            .iter()
            .map(|factory| {
                let mut resource = factory.create();
                resource.configure(Arc::clone(client));
                tracing::debug!("Configured resource: {}", resource.type_name());
                resource
            })
            .collect()
    }

    /// Create one configured instance of every registered data-source type
    pub fn create_data_sources(&self, client: &Arc<HostingdeClient>) -> Vec<Box<dyn DataSource>> {
        self.data_source_factories()
            .iter()
            .map(|factory| {
                let mut data_source = factory.create();
                data_source.configure(Arc::clone(client));
                tracing::debug!("Configured data source: {}", data_source.type_name());
                data_source
            })
            .collect()
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawConfig;
    use crate::env::StaticEnv;

    struct MockResource {
        name: &'static str,
        client: Option<Arc<HostingdeClient>>,
    }

    impl Resource for MockResource {
        fn type_name(&self) -> &'static str {
            self.name
        }

        fn configure(&mut self, client: Arc<HostingdeClient>) {
            self.client = Some(client);
        }

        fn client(&self) -> Option<&Arc<HostingdeClient>> {
            self.client.as_ref()
        }
    }

    struct MockResourceFactory(&'static str);

    impl ResourceFactory for MockResourceFactory {
        fn type_name(&self) -> &'static str {
            self.0
        }

        fn create(&self) -> Box<dyn Resource> {
            Box::new(MockResource {
                name: self.0,
                client: None,
            })
        }
    }

    fn client() -> Arc<HostingdeClient> {
        let env = StaticEnv::new().with("HOSTINGDE_AUTH_TOKEN", "tok");
        let (client, _) = crate::resolver::resolve(&RawConfig::new(), &env);
        Arc::new(client.unwrap())
    }

    #[test]
    fn test_registry_registration() {
        let registry = ResourceRegistry::new();

        // Initially empty
        assert!(!registry.has_resource("mock"));

        // Register
        registry.register_resource(Box::new(MockResourceFactory("mock")));

        // Now present
        assert!(registry.has_resource("mock"));
        assert!(registry.resource_types().contains(&"mock"));
        assert!(!registry.has_data_source("mock"));
    }

    #[test]
    fn test_registration_order_preserved() {
        let registry = ResourceRegistry::new();
        registry.register_resource(Box::new(MockResourceFactory("b")));
        registry.register_resource(Box::new(MockResourceFactory("a")));
        registry.register_resource(Box::new(MockResourceFactory("c")));

        assert_eq!(registry.resource_types(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_registration_replaces_in_place() {
        let registry = ResourceRegistry::new();
        registry.register_resource(Box::new(MockResourceFactory("a")));
        registry.register_resource(Box::new(MockResourceFactory("b")));
        registry.register_resource(Box::new(MockResourceFactory("a")));

        assert_eq!(registry.resource_types(), vec!["a", "b"]);
    }

    #[test]
    fn test_create_resource_injects_client() {
        let registry = ResourceRegistry::new();
        registry.register_resource(Box::new(MockResourceFactory("mock")));
        let client = client();

        let resource = registry.create_resource("mock", &client).unwrap();

        let injected = resource.client().expect("client injected");
        assert!(Arc::ptr_eq(injected, &client));
    }

    #[test]
    fn test_create_unknown_resource() {
        let registry = ResourceRegistry::new();

        let result = registry.create_resource("missing", &client());
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_no_data_sources_by_default() {
        let registry = ResourceRegistry::new();

        assert!(registry.data_source_types().is_empty());
        assert!(registry.create_data_sources(&client()).is_empty());
    }
}
