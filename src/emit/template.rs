//! Page-object templates
//!
//! A small Mustache-like syntax, enough to lay out one class per page:
//!
//! | Tag | Meaning |
//! |---|---|
//! | `{{ page }}` `{{ platform }}` `{{ type }}` `{{ namespace }}` | page-level values |
//! | `{{ trait.name }}` and friends | trait element fields, empty without a trait |
//! | `{{#trait}}…{{/trait}}` | rendered once when the page has a trait |
//! | `{{^trait}}…{{/trait}}` | rendered when it has none |
//! | `{{#elements}}…{{/elements}}` | rendered once per element |
//! | `{{^elements}}…{{/elements}}` | rendered when there are no elements |
//!
//! Inside `trait` and `elements` sections the element fields are
//! available unqualified: `wrapper_type`, `name`, `by`, `value`.
//! Section tags swallow the line break that follows them. Sections do not
//! nest. Unknown names are rejected when the template is parsed.

use crate::error::{GeneratorError, Result};
use crate::page::{ElementDescriptor, PageDescriptor};
use regex::Regex;

/// Built-in C# page object for Legerity-style UI tests
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/page_object.cs.template");

const PAGE_FIELDS: &[&str] = &["page", "platform", "type", "namespace"];
const ELEMENT_FIELDS: &[&str] = &["wrapper_type", "name", "by", "value"];

/// Values shared by every page rendered in a run
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub namespace: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Trait,
    Elements,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Variable(String),
    Section {
        kind: SectionKind,
        inverted: bool,
        body: Vec<Segment>,
    },
}

/// A parsed, validated template
#[derive(Debug, Clone)]
pub struct PageTemplate {
    segments: Vec<Segment>,
}

impl PageTemplate {
    pub fn parse(source: &str) -> Result<Self> {
        let section = Regex::new(
            r"(?s)\{\{\s*([#^])\s*(\w+)\s*\}\}\r?\n?(.*?)[ \t]*\{\{\s*/\s*(\w+)\s*\}\}\r?\n?",
        )
        .map_err(template_error)?;
        let variable = Regex::new(r"\{\{\s*([\w.]+)\s*\}\}").map_err(template_error)?;

        let mut segments = Vec::new();
        let mut last = 0;

        for caps in section.captures_iter(source) {
            let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
            let open = &caps[2];
            let close = &caps[4];

            if open != close {
                return Err(GeneratorError::Template {
                    message: format!("section '{}' closed by '{}'", open, close),
                });
            }

            let kind = match open {
                "trait" => SectionKind::Trait,
                "elements" => SectionKind::Elements,
                other => {
                    return Err(GeneratorError::Template {
                        message: format!("unknown section '{}'", other),
                    })
                }
            };
            let inverted = &caps[1] == "^";

            segments.extend(parse_text(&variable, &source[last..whole.start], false)?);
            segments.push(Segment::Section {
                kind,
                inverted,
                body: parse_text(&variable, &caps[3], !inverted)?,
            });
            last = whole.end;
        }

        segments.extend(parse_text(&variable, &source[last..], false)?);

        Ok(Self { segments })
    }

    /// The built-in template
    pub fn builtin() -> Result<Self> {
        Self::parse(DEFAULT_TEMPLATE)
    }

    pub fn render(&self, page: &PageDescriptor, context: &RenderContext) -> String {
        let mut out = String::new();
        render_segments(&self.segments, page, None, context, &mut out);
        out
    }
}

fn template_error(err: regex::Error) -> GeneratorError {
    GeneratorError::Template {
        message: err.to_string(),
    }
}

/// Split literal text into text and variable segments, validating names.
fn parse_text(variable: &Regex, text: &str, element_scope: bool) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in variable.captures_iter(text) {
        let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
        let name = caps[1].to_string();

        if !is_known_variable(&name, element_scope) {
            return Err(GeneratorError::Template {
                message: format!("unknown placeholder '{}'", name),
            });
        }

        push_text(&mut segments, &text[last..whole.start])?;
        segments.push(Segment::Variable(name));
        last = whole.end;
    }

    push_text(&mut segments, &text[last..])?;
    Ok(segments)
}

fn push_text(segments: &mut Vec<Segment>, text: &str) -> Result<()> {
    if let Some(pos) = text.find("{{") {
        let snippet: String = text[pos..].chars().take(24).collect();
        return Err(GeneratorError::Template {
            message: format!("malformed or unmatched tag near '{}'", snippet),
        });
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text.to_string()));
    }
    Ok(())
}

fn is_known_variable(name: &str, element_scope: bool) -> bool {
    if PAGE_FIELDS.contains(&name) {
        return true;
    }
    if let Some(field) = name.strip_prefix("trait.") {
        return ELEMENT_FIELDS.contains(&field);
    }
    element_scope && ELEMENT_FIELDS.contains(&name)
}

fn render_segments(
    segments: &[Segment],
    page: &PageDescriptor,
    element: Option<&ElementDescriptor>,
    context: &RenderContext,
    out: &mut String,
) {
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Variable(name) => out.push_str(&lookup(name, page, element, context)),
            Segment::Section { kind, inverted, body } => match (kind, inverted) {
                (SectionKind::Trait, false) => {
                    if let Some(trait_element) = &page.trait_element {
                        render_segments(body, page, Some(trait_element), context, out);
                    }
                }
                (SectionKind::Trait, true) => {
                    if page.trait_element.is_none() {
                        render_segments(body, page, None, context, out);
                    }
                }
                (SectionKind::Elements, false) => {
                    for item in &page.elements {
                        render_segments(body, page, Some(item), context, out);
                    }
                }
                (SectionKind::Elements, true) => {
                    if page.elements.is_empty() {
                        render_segments(body, page, None, context, out);
                    }
                }
            },
        }
    }
}

fn lookup(
    name: &str,
    page: &PageDescriptor,
    element: Option<&ElementDescriptor>,
    context: &RenderContext,
) -> String {
    match name {
        "page" => page.page_name.clone(),
        "platform" => page.platform.clone(),
        "type" => page.base_wrapper_type.clone(),
        "namespace" => context.namespace.clone(),
        _ => {
            let (target, field) = match name.strip_prefix("trait.") {
                Some(field) => (page.trait_element.as_ref(), field),
                None => (element, name),
            };
            target.map(|e| element_field(e, field)).unwrap_or_default()
        }
    }
}

fn element_field(element: &ElementDescriptor, field: &str) -> String {
    match field {
        "wrapper_type" => element.wrapper_type.clone(),
        "name" => element.field_name.clone(),
        "by" => element.locator_strategy.to_string(),
        "value" => element.locator_value.clone(),
        _ => String::new(),
    }
}
