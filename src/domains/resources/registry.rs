//! Resource Registry - central registration of all resources.

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{InfoResource, ResourceDefinition};
use super::service::ResourceEntry;

/// Build a registry entry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::uri(), R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        key: R::KEY,
        text: R::TEXT,
    }
}

/// Get all registered resources.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![build_resource::<InfoResource>()]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<String> {
    vec![InfoResource::uri()]
}
