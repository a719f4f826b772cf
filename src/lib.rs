pub mod definition;
pub mod render;
pub mod utils;

// Re-export main types and functions for easier access
pub use definition::types::{Access, ClassDefinition, Property, RawDefinition, RawProperty};
pub use definition::error::DefinitionError;
pub use definition::normalize::normalize;

pub use render::generator::Generator;
pub use render::template::RenderError;

// Re-export utility functions
pub use utils::file_utils;
