use std::collections::HashSet;

use log::trace;
use once_cell::sync::Lazy;

use super::types::{Property, RawProperty};

/// Mutability assigned to a property that does not declare one
pub const DEFAULT_MUTABILITY: &str = "readwrite";

// Types that are cheap to pass by value in a setter signature. Everything
// else is wrapped as a const reference, except pointer types which already
// pass by value.
static NO_CONST_REF_ARG_TYPES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["int", "bool", "qreal"]));

/// Fill in every derived field of a raw property declaration
///
/// Each derived field has its own default-if-missing rule; an override
/// supplied in the declaration always wins over derivation, field by field.
pub fn normalize(raw: RawProperty) -> Property {
    let camelcase_name = capitalize(&raw.name);

    let setter_name = raw
        .setter_name
        .unwrap_or_else(|| format!("set{}", camelcase_name));
    let arg_type = raw
        .arg_type
        .unwrap_or_else(|| derive_arg_type(&raw.type_name));
    let var_name = raw
        .var_name
        .unwrap_or_else(|| format!("m{}", camelcase_name));
    let mutability = raw
        .mutability
        .unwrap_or_else(|| DEFAULT_MUTABILITY.to_string());

    let property = Property {
        name: raw.name,
        type_name: raw.type_name,
        setter_name,
        arg_type,
        var_name,
        mutability,
    };

    trace!(
        "Normalized property {}: setter_name={}, arg_type={}, var_name={}, mutability={}",
        property.name, property.setter_name, property.arg_type, property.var_name,
        property.mutability
    );

    property
}

/// Uppercase the first character, leaving the remainder unchanged
///
/// ASCII-oriented on purpose: property names are C++ identifiers.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Derive the setter parameter type for a property type
fn derive_arg_type(type_name: &str) -> String {
    if NO_CONST_REF_ARG_TYPES.contains(type_name) || type_name.ends_with('*') {
        type_name.to_string()
    } else {
        format!("const {}&", type_name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn raw(name: &str, type_name: &str) -> RawProperty {
        RawProperty {
            name: name.to_string(),
            type_name: type_name.to_string(),
            setter_name: None,
            arg_type: None,
            var_name: None,
            mutability: None,
        }
    }

    #[test]
    fn derives_every_field_when_no_overrides() {
        let property = normalize(raw("value", "int"));

        assert_eq!(
            property,
            Property {
                name: "value".to_string(),
                type_name: "int".to_string(),
                setter_name: "setValue".to_string(),
                arg_type: "int".to_string(),
                var_name: "mValue".to_string(),
                mutability: "readwrite".to_string(),
            }
        );
    }

    #[test_case("int", "int" ; "int passes by value")]
    #[test_case("bool", "bool" ; "bool passes by value")]
    #[test_case("qreal", "qreal" ; "qreal passes by value")]
    #[test_case("QObject*", "QObject*" ; "pointer passes by value")]
    #[test_case("QString", "const QString&" ; "class type becomes const ref")]
    #[test_case("QVector<int>", "const QVector<int>&" ; "template type becomes const ref")]
    #[test_case("quint64", "const quint64&" ; "unlisted scalar still becomes const ref")]
    fn derives_arg_type(type_name: &str, expected: &str) {
        let property = normalize(raw("value", type_name));
        assert_eq!(property.arg_type, expected);
    }

    #[test_case("label", "setLabel", "mLabel" ; "lowercase first letter")]
    #[test_case("x", "setX", "mX" ; "single character")]
    #[test_case("fooBar", "setFooBar", "mFooBar" ; "camel case tail kept")]
    #[test_case("URL", "setURL", "mURL" ; "already uppercase")]
    fn derives_setter_and_var_names(name: &str, setter_name: &str, var_name: &str) {
        let property = normalize(raw(name, "QString"));
        assert_eq!(property.setter_name, setter_name);
        assert_eq!(property.var_name, var_name);
    }

    #[test]
    fn setter_name_override_wins() {
        let mut declared = raw("value", "int");
        declared.setter_name = Some("assignValue".to_string());

        let property = normalize(declared);
        assert_eq!(property.setter_name, "assignValue");
        // The other fields are still derived independently
        assert_eq!(property.var_name, "mValue");
        assert_eq!(property.arg_type, "int");
    }

    #[test]
    fn arg_type_override_wins() {
        let mut declared = raw("label", "QString");
        declared.arg_type = Some("QStringView".to_string());

        let property = normalize(declared);
        assert_eq!(property.arg_type, "QStringView");
    }

    #[test]
    fn var_name_override_wins() {
        let mut declared = raw("label", "QString");
        declared.var_name = Some("m_label".to_string());

        let property = normalize(declared);
        assert_eq!(property.var_name, "m_label");
    }

    #[test]
    fn mutability_defaults_to_readwrite() {
        assert_eq!(normalize(raw("value", "int")).mutability, "readwrite");
    }

    #[test]
    fn mutability_passes_through_verbatim() {
        let mut declared = raw("value", "int");
        declared.mutability = Some("frozen".to_string());

        // No validation on this field: any caller-supplied string survives
        assert_eq!(normalize(declared).mutability, "frozen");
    }

    #[test]
    fn capitalize_is_ascii_only() {
        assert_eq!(capitalize("value"), "Value");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "éclair");
    }
}
