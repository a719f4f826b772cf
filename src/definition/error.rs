use std::fmt;

/// Errors raised while loading and validating a class definition
#[derive(Debug)]
pub enum DefinitionError {
    /// The document is not valid YAML or is missing a required key
    Parse(serde_yaml::Error),

    /// `class.access` holds a value outside {private, protected}
    InvalidAccess(String),

    /// A property field that must be non-empty is empty
    EmptyField { index: usize, field: &'static str },
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::Parse(err) => write!(f, "Invalid definition document: {}", err),
            DefinitionError::InvalidAccess(value) => {
                write!(f, "Invalid value for access: {}", value)
            }
            DefinitionError::EmptyField { index, field } => {
                write!(f, "properties[{}]: {} must not be empty", index, field)
            }
        }
    }
}

impl std::error::Error for DefinitionError {}

impl From<serde_yaml::Error> for DefinitionError {
    fn from(err: serde_yaml::Error) -> Self {
        DefinitionError::Parse(err)
    }
}
