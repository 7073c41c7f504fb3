//! Resource service implementation.
//!
//! Lists the registered resources and serves reads. A read parses the URI,
//! requires the `embedded` scheme and looks the key up in the registry.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::{error, info, instrument};
use url::Url;

use super::definitions::EMBEDDED_SCHEME;
use super::error::ResourceError;
use super::registry::get_all_resources;

/// Service for listing and reading resources.
pub struct ResourceService {
    /// Registered resources in listing order.
    resources: Vec<ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Key within the `embedded:` scheme.
    pub key: &'static str,

    /// The document body.
    pub text: &'static str,
}

impl ResourceService {
    /// Create a new ResourceService with every registered resource.
    pub fn new() -> Self {
        let resources = get_all_resources();
        info!(count = resources.len(), "Initialized ResourceService");
        Self { resources }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    #[instrument(skip(self))]
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        info!(uri, "Processing resource request");

        let parsed = Url::parse(uri).map_err(|e| {
            error!(uri, error = %e, "Failed to parse resource URI");
            ResourceError::invalid_uri(format!("{}: {}", uri, e))
        })?;

        if parsed.scheme() != EMBEDDED_SCHEME {
            error!(scheme = parsed.scheme(), expected = EMBEDDED_SCHEME, "Invalid resource scheme");
            return Err(ResourceError::not_found(format!(
                "wrong scheme: {:?}",
                parsed.scheme()
            )));
        }

        let key = parsed.path();
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.key == key)
            .ok_or_else(|| {
                error!(key, "Resource not found");
                ResourceError::not_found(format!("no embedded resource named {:?}", key))
            })?;

        info!(key, length = entry.text.len(), "Resource retrieved successfully");

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text: entry.text.to_string(),
                meta: None,
            }],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_resources() {
        let resources = ResourceService::new().list_resources().await;
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.uri, "embedded:info");
    }

    #[tokio::test]
    async fn test_read_info() {
        let result = ResourceService::new()
            .read_resource("embedded:info")
            .await
            .unwrap();

        assert_eq!(result.contents.len(), 1);
        match &result.contents[0] {
            ResourceContents::TextResourceContents {
                uri,
                mime_type,
                text,
                ..
            } => {
                assert_eq!(uri, "embedded:info");
                assert_eq!(mime_type.as_deref(), Some("text/plain"));
                assert_eq!(text, "This is the hello example server.");
            }
            other => panic!("Expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_unknown_key() {
        let err = ResourceService::new()
            .read_resource("embedded:nonexistent")
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
        assert!(err.to_string().contains("nonexistent"));
    }

    #[tokio::test]
    async fn test_read_wrong_scheme() {
        for uri in ["file:info", "http://example.com/info", "mcp://server/info"] {
            let err = ResourceService::new().read_resource(uri).await.unwrap_err();
            assert!(matches!(err, ResourceError::NotFound(_)), "{}", uri);
            assert!(err.to_string().contains("wrong scheme"));
        }
    }

    #[tokio::test]
    async fn test_read_unparseable_uri() {
        let err = ResourceService::new()
            .read_resource("info")
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::InvalidUri(_)));
    }
}
