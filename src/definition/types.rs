use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::DefinitionError;

/// Extension of the generated header file
pub const HEADER_EXT: &str = ".h";

/// Extension of the generated implementation file
pub const IMPL_EXT: &str = ".cpp";

/// A property declaration as authored in the definition file
///
/// Only `name` and `type` are required; every other field is an override
/// that suppresses the corresponding derivation during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProperty {
    /// Name of the property, lower camelCase by convention
    pub name: String,

    /// C++ type of the property, e.g. `int`, `QString` or `QObject*`
    #[serde(rename = "type")]
    pub type_name: String,

    /// Override for the derived setter name
    #[serde(default)]
    pub setter_name: Option<String>,

    /// Override for the derived setter argument type
    #[serde(default)]
    pub arg_type: Option<String>,

    /// Override for the derived backing field name
    #[serde(default)]
    pub var_name: Option<String>,

    /// Override for the default mutability (`readwrite`)
    #[serde(default)]
    pub mutability: Option<String>,
}

/// A fully specified property with every derived field filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Name of the property, as given
    pub name: String,

    /// C++ type of the property, as given
    pub type_name: String,

    /// Name of the generated setter
    pub setter_name: String,

    /// Parameter type used in the setter and change-signal signatures
    pub arg_type: String,

    /// Name of the backing field
    pub var_name: String,

    /// `readwrite`, `readonly`, or a caller-supplied value passed through
    /// verbatim
    pub mutability: String,
}

/// The `class:` block of a definition file
#[derive(Debug, Clone, Deserialize)]
pub struct RawClass {
    /// Name of the generated C++ class
    pub name: String,

    /// Visibility of the backing fields, `private` if absent
    #[serde(default)]
    pub access: Option<String>,
}

/// The full contents of a definition file, straight from the parser
#[derive(Debug, Clone, Deserialize)]
pub struct RawDefinition {
    pub class: RawClass,
    pub properties: Vec<RawProperty>,
}

/// Visibility of the generated backing fields and internal machinery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    #[default]
    Private,
    Protected,
}

impl Access {
    /// The C++ access-specifier keyword this renders as
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Private => "private",
            Access::Protected => "protected",
        }
    }
}

impl FromStr for Access {
    type Err = DefinitionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "private" => Ok(Access::Private),
            "protected" => Ok(Access::Protected),
            _ => Err(DefinitionError::InvalidAccess(value.to_string())),
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, fully normalized class definition ready for rendering
///
/// Built once per invocation and consumed by the renderer; never updated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    /// Base name of the definition file, without directory or extension
    pub filename_stem: String,

    /// Name of the generated header file, `<filename_stem>.h`
    pub header: String,

    /// Name of the generated C++ class
    pub class_name: String,

    /// Visibility of the backing fields
    pub access: Access,

    /// Properties in declaration order
    pub properties: Vec<Property>,
}
