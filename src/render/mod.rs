pub mod context;
pub mod generator;
pub mod template;

// Re-export the main API for easier access
pub use context::{RenderContext, AUTOGENERATED_DISCLAIMER};
pub use generator::Generator;
pub use template::RenderError;
