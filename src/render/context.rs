use crate::definition::{ClassDefinition, Property};

/// Disclaimer substituted into the top of every generated file
pub const AUTOGENERATED_DISCLAIMER: &str =
    "This file has been generated with qpropgen, any changes made to it will be lost!";

/// The fixed set of values a template may reference
///
/// Scalars are available everywhere; inside a `{{#properties}}` section the
/// current property's fields resolve first and shadow nothing (the two name
/// sets are disjoint).
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Value of `{{autogenerated_disclaimer}}`
    pub autogenerated_disclaimer: &'a str,

    /// Value of `{{class_name}}`
    pub class_name: &'a str,

    /// Value of `{{header}}`, the generated header's file name
    pub header: &'a str,

    /// Value of `{{access}}`, the lowercase C++ access specifier
    pub access: &'a str,

    /// Sequence iterated by `{{#properties}}`, in declaration order
    pub properties: &'a [Property],
}

impl<'a> RenderContext<'a> {
    /// Build the context for one class definition
    pub fn new(definition: &'a ClassDefinition) -> Self {
        Self {
            autogenerated_disclaimer: AUTOGENERATED_DISCLAIMER,
            class_name: &definition.class_name,
            header: &definition.header,
            access: definition.access.as_str(),
            properties: &definition.properties,
        }
    }

    /// Look up a placeholder, preferring the current property's fields when
    /// rendering inside a `{{#properties}}` section
    pub(crate) fn resolve<'b>(
        &'b self,
        name: &str,
        property: Option<&'b Property>,
    ) -> Option<&'b str> {
        if let Some(property) = property {
            if let Some(value) = Self::property_field(property, name) {
                return Some(value);
            }
        }
        self.scalar(name)
    }

    fn scalar(&self, name: &str) -> Option<&'a str> {
        match name {
            "autogenerated_disclaimer" => Some(self.autogenerated_disclaimer),
            "class_name" => Some(self.class_name),
            "header" => Some(self.header),
            "access" => Some(self.access),
            _ => None,
        }
    }

    fn property_field<'p>(property: &'p Property, name: &str) -> Option<&'p str> {
        match name {
            "name" => Some(property.name.as_str()),
            "type" => Some(property.type_name.as_str()),
            "setter_name" => Some(property.setter_name.as_str()),
            "arg_type" => Some(property.arg_type.as_str()),
            "var_name" => Some(property.var_name.as_str()),
            "mutability" => Some(property.mutability.as_str()),
            _ => None,
        }
    }
}
