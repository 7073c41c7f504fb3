//! Resource definitions module.
//!
//! Every resource is an embedded text document addressed as
//! `embedded:<key>`. Register new ones in `registry.rs`.

mod info;

pub use info::InfoResource;

/// URI scheme shared by all embedded resources.
pub const EMBEDDED_SCHEME: &str = "embedded";

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// Key within the `embedded:` scheme.
    const KEY: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// The document body.
    const TEXT: &'static str;

    /// Full URI of the resource.
    fn uri() -> String {
        format!("{}:{}", EMBEDDED_SCHEME, Self::KEY)
    }
}
