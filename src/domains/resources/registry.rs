//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it for its profile in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{CategoriesResource, ResourceDefinition, ServerInfoResource};
use super::service::ResourceEntry;
use crate::core::config::ServerProfile;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all resources registered for a profile.
pub fn get_all_resources(profile: ServerProfile) -> Vec<ResourceEntry> {
    match profile {
        ServerProfile::Calculator => vec![build_resource::<ServerInfoResource>()],
        ServerProfile::Expenses => vec![build_resource::<CategoriesResource>()],
    }
}

/// Get the list of resource URIs registered for a profile.
pub fn resource_uris(profile: ServerProfile) -> Vec<&'static str> {
    match profile {
        ServerProfile::Calculator => vec![ServerInfoResource::URI],
        ServerProfile::Expenses => vec![CategoriesResource::URI],
    }
}
