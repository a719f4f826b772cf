use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::definition::{ClassDefinition, HEADER_EXT, IMPL_EXT};
use crate::utils::file_utils;

use super::context::RenderContext;
use super::template;

/// Default header template, compiled into the binary
const HEADER_TEMPLATE: &str = include_str!("template_h.tmpl");

/// Default implementation template, compiled into the binary
const IMPL_TEMPLATE: &str = include_str!("template_cpp.tmpl");

/// Renders a class definition into its header and implementation files
#[derive(Debug)]
pub struct Generator {
    /// Template for the `.h` output
    header_template: String,

    /// Template for the `.cpp` output
    impl_template: String,
}

impl Generator {
    /// Create a generator using the built-in templates
    pub fn new() -> Self {
        Self {
            header_template: HEADER_TEMPLATE.to_string(),
            impl_template: IMPL_TEMPLATE.to_string(),
        }
    }

    /// Create a generator with custom template text
    pub fn with_templates(
        header_template: impl Into<String>,
        impl_template: impl Into<String>,
    ) -> Self {
        Self {
            header_template: header_template.into(),
            impl_template: impl_template.into(),
        }
    }

    /// Render both output files for `definition` into `out_dir`
    ///
    /// Writes `<filename_stem>.h` and `<filename_stem>.cpp`, overwriting
    /// existing files. The directory is created if missing. Both templates
    /// are rendered before either file is written, so no file is touched
    /// when a template fails.
    pub fn generate(&self, definition: &ClassDefinition, out_dir: impl AsRef<Path>) -> Result<()> {
        let out_dir = out_dir.as_ref();
        debug!(
            "Rendering class {} into {}",
            definition.class_name,
            out_dir.display()
        );

        let context = RenderContext::new(definition);

        let header_name = format!("{}{}", definition.filename_stem, HEADER_EXT);
        let impl_name = format!("{}{}", definition.filename_stem, IMPL_EXT);

        let header_text = template::render(&self.header_template, &context)
            .with_context(|| format!("Failed to render {}", header_name))?;
        let impl_text = template::render(&self.impl_template, &context)
            .with_context(|| format!("Failed to render {}", impl_name))?;

        let header_path = out_dir.join(header_name);
        file_utils::write_string_to_file(&header_path, &header_text)?;
        info!("Generated {}", header_path.display());

        let impl_path = out_dir.join(impl_name);
        file_utils::write_string_to_file(&impl_path, &impl_text)?;
        info!("Generated {}", impl_path.display());

        Ok(())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
