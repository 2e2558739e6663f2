//! Core traits for provider capabilities
//!
//! This module defines the interfaces the registry uses to build handlers.
//!
//! - [`Resource`]: A managed resource type (e.g. a DNS zone)
//! - [`DataSource`]: A read-only data-source type

pub mod resource;
pub mod data_source;

pub use resource::{Resource, ResourceFactory};
pub use data_source::{DataSource, DataSourceFactory};
