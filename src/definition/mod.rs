pub mod error;
pub mod loader;
pub mod normalize;
pub mod types;

// Re-export the main API for easier access
pub use error::DefinitionError;
pub use normalize::{normalize, DEFAULT_MUTABILITY};
pub use types::{
    Access, ClassDefinition, Property, RawClass, RawDefinition, RawProperty, HEADER_EXT, IMPL_EXT,
};
