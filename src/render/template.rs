use std::fmt;

use crate::definition::Property;

use super::context::RenderContext;

/// Errors raised while rendering a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A `{{placeholder}}` naming neither a context scalar nor a property field
    UnknownPlaceholder(String),

    /// A `{{#section}}` with an unrecognized name
    UnknownSection(String),

    /// A `{{` with no matching `}}`
    UnclosedTag,

    /// A `{{#section}}` with no matching `{{/section}}`
    UnclosedSection(String),

    /// A mutability conditional used outside `{{#properties}}`
    MutabilityOutsideProperties(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownPlaceholder(name) => {
                write!(f, "Unknown placeholder: {{{{{}}}}}", name)
            }
            RenderError::UnknownSection(name) => {
                write!(f, "Unknown section: {{{{#{}}}}}", name)
            }
            RenderError::UnclosedTag => write!(f, "Unclosed {{{{ tag"),
            RenderError::UnclosedSection(name) => {
                write!(f, "Missing {{{{/{}}}}} for section {{{{#{}}}}}", name, name)
            }
            RenderError::MutabilityOutsideProperties(name) => {
                write!(
                    f,
                    "{{{{#{}}}}} is only valid inside {{{{#properties}}}}",
                    name
                )
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Render a template against a context
///
/// The dialect is deliberately small: `{{key}}` substitutes a scalar (or a
/// property field inside a property section), `{{#properties}}…{{/properties}}`
/// repeats its body once per property in order, and
/// `{{#readwrite}}…{{/readwrite}}` / `{{#readonly}}…{{/readonly}}` keep their
/// body only when the current property's mutability matches exactly.
pub fn render(template: &str, context: &RenderContext) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len());
    render_block(template, context, None, &mut out)?;
    Ok(out)
}

fn render_block(
    block: &str,
    context: &RenderContext,
    property: Option<&Property>,
    out: &mut String,
) -> Result<(), RenderError> {
    let mut rest = block;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let end = after.find("}}").ok_or(RenderError::UnclosedTag)?;
        let tag = after[..end].trim();
        let after_tag = &after[end + 2..];

        if let Some(name) = tag.strip_prefix('#') {
            let name = name.trim();
            let (body, tail) = split_section(after_tag, name)?;
            render_section(name, body, context, property, out)?;
            rest = tail;
        } else {
            let value = context
                .resolve(tag, property)
                .ok_or_else(|| RenderError::UnknownPlaceholder(tag.to_string()))?;
            out.push_str(value);
            rest = after_tag;
        }
    }

    out.push_str(rest);
    Ok(())
}

fn render_section(
    name: &str,
    body: &str,
    context: &RenderContext,
    property: Option<&Property>,
    out: &mut String,
) -> Result<(), RenderError> {
    match name {
        "properties" => {
            for property in context.properties {
                render_block(body, context, Some(property), out)?;
            }
            Ok(())
        }
        // Equality tests: a pass-through mutability value selects neither body
        "readwrite" | "readonly" => match property {
            Some(property) if property.mutability == name => {
                render_block(body, context, Some(property), out)
            }
            Some(_) => Ok(()),
            None => Err(RenderError::MutabilityOutsideProperties(name.to_string())),
        },
        _ => Err(RenderError::UnknownSection(name.to_string())),
    }
}

/// Split `input` at the close tag of `name`, returning the section body and
/// the remainder after the close tag
fn split_section<'t>(input: &'t str, name: &str) -> Result<(&'t str, &'t str), RenderError> {
    let close = format!("{{{{/{}}}}}", name);
    match input.find(&close) {
        Some(idx) => Ok((&input[..idx], &input[idx + close.len()..])),
        None => Err(RenderError::UnclosedSection(name.to_string())),
    }
}
