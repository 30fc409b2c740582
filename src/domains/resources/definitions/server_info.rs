//! Server info resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Calculator server identity and tool catalog (static JSON).
pub struct ServerInfoResource;

impl ServerInfoResource {
    /// The JSON document served by this resource.
    pub fn info() -> serde_json::Value {
        serde_json::json!({
            "name": "Simple Calculator Server",
            "version": "1.0.0",
            "description": "A basic MCP server with math tools.",
            "tools": ["add", "random_number"],
            "author": "Ankit Thummar"
        })
    }
}

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "info://server";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Information about this server and its tools";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        // Serializing a json! literal cannot fail
        let text = serde_json::to_string_pretty(&Self::info()).unwrap_or_default();
        ResourceContent::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "info://server");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_server_info_content() {
        match ServerInfoResource::content() {
            ResourceContent::Text(text) => {
                let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
                assert_eq!(parsed["name"], "Simple Calculator Server");
                assert_eq!(parsed["tools"], serde_json::json!(["add", "random_number"]));
                // Pretty-printed with two-space indentation
                assert!(text.contains("\n  \"name\""));
            }
            _ => panic!("Expected Text content"),
        }
    }
}
