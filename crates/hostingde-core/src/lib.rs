// # hostingde-core
//
// Configuration resolution and client bootstrap for the hosting.de DNS provider.
//
// ## Architecture Overview
//
// - **RawConfig**: The as-declared provider configuration (tri-state fields)
// - **EnvironmentReader**: Abstract lookup over the `HOSTINGDE_*` variables
// - **resolve**: Precedence, defaulting and validation, producing a client handle
// - **Diagnostics**: Attribute-scoped errors and warnings returned to the host
// - **ResourceRegistry**: Resource/data-source factories, each handed the shared client
//
// ## Design Principles
//
// 1. **Pure Resolution**: Resolution is a synchronous function of its two inputs
// 2. **Accumulated Diagnostics**: Independent failures are all reported in one pass
// 3. **Explicit Injection**: Handlers receive the client from the registry, never from globals
// 4. **Secret Hygiene**: The auth token never reaches a log record or diagnostic

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod env;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod traits;

// Re-export core types for convenience
pub use client::HostingdeClient;
pub use config::{ConfigValue, RawConfig, ResolvedConfig};
pub use diagnostics::{AttributePath, Diagnostic, Diagnostics, Severity};
pub use env::{EnvironmentReader, ProcessEnv, StaticEnv};
pub use error::{Error, Result};
pub use registry::ResourceRegistry;
pub use resolver::{resolve, resolve_config};
pub use schema::{Attribute, ProviderSchema};
pub use traits::{DataSource, DataSourceFactory, Resource, ResourceFactory};
