use std::path::Path;

use anyhow::Result;
use log::{debug, info};

use crate::utils::file_utils;

use super::error::DefinitionError;
use super::normalize::normalize;
use super::types::{Access, ClassDefinition, Property, RawDefinition, HEADER_EXT};

impl RawDefinition {
    /// Parse a definition document from its YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

impl ClassDefinition {
    /// Validate a raw definition and normalize every property
    ///
    /// `path` is the definition file the document came from; its stem names
    /// the outputs and the generated header.
    pub fn new(path: impl AsRef<Path>, raw: RawDefinition) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let filename_stem = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let header = format!("{}{}", filename_stem, HEADER_EXT);

        let access = match &raw.class.access {
            Some(value) => value.parse()?,
            None => Access::default(),
        };

        for (index, property) in raw.properties.iter().enumerate() {
            if property.name.is_empty() {
                return Err(DefinitionError::EmptyField { index, field: "name" });
            }
            if property.type_name.is_empty() {
                return Err(DefinitionError::EmptyField { index, field: "type" });
            }
        }

        // Declaration order carries through to the generated code
        let properties: Vec<Property> = raw.properties.into_iter().map(normalize).collect();

        Ok(Self {
            filename_stem,
            header,
            class_name: raw.class.name,
            access,
            properties,
        })
    }

    /// Read, parse, validate, and normalize a definition file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading class definition from {}", path.display());

        let text = file_utils::read_file_to_string(path)?;
        let raw = RawDefinition::from_yaml(&text).map_err(DefinitionError::Parse)?;
        let definition = Self::new(path, raw)?;

        info!(
            "Loaded definition for class {} with {} properties",
            definition.class_name,
            definition.properties.len()
        );
        Ok(definition)
    }
}
