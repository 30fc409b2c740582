//! Expense categories resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// The configured `categories.json`, served verbatim on every read.
pub struct CategoriesResource;

impl ResourceDefinition for CategoriesResource {
    const URI: &'static str = "expense://categories";
    const NAME: &'static str = "Expense Categories";
    const DESCRIPTION: &'static str = "Expense categories and subcategories, as JSON";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::CategoriesFile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_is_read_from_disk() {
        assert!(matches!(
            CategoriesResource::content(),
            ResourceContent::Dynamic(DynamicResourceType::CategoriesFile)
        ));
    }
}
