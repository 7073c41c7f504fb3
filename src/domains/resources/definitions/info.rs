//! Server info resource definition.

use super::ResourceDefinition;

/// Short plain-text note about the server.
pub struct InfoResource;

impl ResourceDefinition for InfoResource {
    const KEY: &'static str = "info";
    const NAME: &'static str = "info";
    const DESCRIPTION: &'static str = "Information about this server";
    const MIME_TYPE: &'static str = "text/plain";
    const TEXT: &'static str = "This is the hello example server.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_metadata() {
        assert_eq!(InfoResource::uri(), "embedded:info");
        assert_eq!(InfoResource::MIME_TYPE, "text/plain");
    }
}
