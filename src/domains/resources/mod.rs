//! Resources domain module.
//!
//! Resources are read-only, URI-addressed payloads that MCP clients can
//! fetch without arguments.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Which resources each server profile registers
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` implementing `ResourceDefinition`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it for its profile in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{DynamicResourceType, ResourceContent, ResourceEntry, ResourceService};
