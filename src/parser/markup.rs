use crate::error::{GeneratorError, Result};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use std::path::Path;
use tracing::debug;

/// A single attribute with its resolved namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupAttribute {
    /// Namespace URI the prefix resolved to, `None` for unprefixed attributes
    pub namespace: Option<String>,
    pub local_name: String,
    /// Name exactly as written in the document, prefix included
    pub raw_name: String,
    pub value: String,
}

/// Read-only view over one parsed XML element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupElement {
    name: String,
    attributes: Vec<MarkupAttribute>,
    children: Vec<MarkupElement>,
}

impl MarkupElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute bound to `namespace`
    pub fn with_ns_attribute(
        mut self,
        namespace: &str,
        local_name: &str,
        value: impl Into<String>,
    ) -> Self {
        self.attributes.push(MarkupAttribute {
            namespace: Some(namespace.to_string()),
            local_name: local_name.to_string(),
            raw_name: local_name.to_string(),
            value: value.into(),
        });
        self
    }

    /// Add an unprefixed attribute
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push(MarkupAttribute {
            namespace: None,
            local_name: name.to_string(),
            raw_name: name.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn with_child(mut self, child: MarkupElement) -> Self {
        self.children.push(child);
        self
    }

    /// Local tag name, without any prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[MarkupElement] {
        &self.children
    }

    /// Look up an attribute by namespace URI and local name
    pub fn attribute_ns(&self, namespace: &str, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.namespace.as_deref() == Some(namespace) && a.local_name == local_name)
            .map(|a| a.value.as_str())
    }

    /// Look up an unqualified attribute by its literal name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.namespace.is_none() && a.raw_name == name)
            .map(|a| a.value.as_str())
    }
}

/// Parsed markup document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupTree {
    root: Option<MarkupElement>,
}

impl MarkupTree {
    pub fn root(&self) -> Option<&MarkupElement> {
        self.root.as_ref()
    }

    /// Read and parse a markup file.
    ///
    /// The encoding comes from the byte order mark, then the XML
    /// declaration, falling back to UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| GeneratorError::MarkupRead {
            path: path.to_path_buf(),
            source,
        })?;

        let (encoding, body) = detect_encoding(&bytes);
        let (contents, had_errors) = encoding.decode_without_bom_handling(body);
        if had_errors {
            return Err(GeneratorError::MarkupParse {
                path: path.to_path_buf(),
                message: format!("invalid {} byte sequence", encoding.name()),
            });
        }

        Self::parse(path, &contents)
    }

    /// Parse markup text into a tree. `path` is only used for error reporting.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let mut reader = NsReader::from_str(contents);
        let mut stack: Vec<MarkupElement> = Vec::new();
        let mut root: Option<MarkupElement> = None;

        let parse_error = |message: String| GeneratorError::MarkupParse {
            path: path.to_path_buf(),
            message,
        };

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let element = read_element(&reader, e).map_err(parse_error)?;
                    stack.push(element);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = read_element(&reader, e).map_err(parse_error)?;
                    attach(&mut stack, &mut root, element).map_err(parse_error)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| parse_error("unexpected closing tag".to_string()))?;
                    attach(&mut stack, &mut root, element).map_err(parse_error)?;
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(parse_error(format!(
                        "{} at position {}",
                        e,
                        reader.buffer_position()
                    )));
                }
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(parse_error(format!("unclosed element <{}>", open.name())));
        }

        debug!(
            "Parsed markup {}: root {:?}",
            path.display(),
            root.as_ref().map(|r| r.name())
        );

        Ok(Self { root })
    }
}

/// Pick the document encoding and return the bytes that follow any BOM
fn detect_encoding(bytes: &[u8]) -> (&'static Encoding, &[u8]) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return (encoding, &bytes[bom_len..]);
    }

    // "<?" without a BOM
    if bytes.starts_with(&[0x3C, 0x00, 0x3F, 0x00]) {
        return (UTF_16LE, bytes);
    }
    if bytes.starts_with(&[0x00, 0x3C, 0x00, 0x3F]) {
        return (UTF_16BE, bytes);
    }

    // The declaration is ASCII here, so a UTF-16 label cannot be right
    let declared = declared_encoding(bytes)
        .and_then(Encoding::for_label)
        .filter(|e| *e != UTF_16LE && *e != UTF_16BE);

    (declared.unwrap_or(UTF_8), bytes)
}

/// The `encoding` pseudo-attribute of a leading `<?xml ... ?>` declaration
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    let declaration = &bytes[..end];

    let at = declaration.windows(8).position(|w| w == b"encoding")?;
    let rest = &declaration[at + 8..];
    let rest = &rest[rest.iter().position(|b| !b.is_ascii_whitespace())?..];
    let rest = rest.strip_prefix(b"=")?;
    let rest = &rest[rest.iter().position(|b| !b.is_ascii_whitespace())?..];

    let quote = *rest.first().filter(|q| **q == b'"' || **q == b'\'')?;
    let value = &rest[1..];
    let close = value.iter().position(|b| *b == quote)?;
    Some(&value[..close])
}

fn read_element(reader: &NsReader<&[u8]>, start: &BytesStart) -> std::result::Result<MarkupElement, String> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).to_string();
    let mut element = MarkupElement::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let raw_name = String::from_utf8_lossy(attr.key.as_ref()).to_string();

        // xmlns declarations are consumed by the namespace resolver
        if raw_name == "xmlns" || raw_name.starts_with("xmlns:") {
            continue;
        }

        let (resolved, local) = reader.resolve_attribute(attr.key);
        let namespace = match resolved {
            ResolveResult::Bound(Namespace(ns)) => Some(String::from_utf8_lossy(ns).to_string()),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(format!(
                    "unknown namespace prefix '{}'",
                    String::from_utf8_lossy(&prefix)
                ));
            }
        };
        let value = attr.unescape_value().map_err(|e| e.to_string())?.to_string();

        element.attributes.push(MarkupAttribute {
            namespace,
            local_name: String::from_utf8_lossy(local.as_ref()).to_string(),
            raw_name,
            value,
        });
    }

    Ok(element)
}

fn attach(
    stack: &mut [MarkupElement],
    root: &mut Option<MarkupElement>,
    element: MarkupElement,
) -> std::result::Result<(), String> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(format!("multiple root elements, found <{}>", element.name())),
    }
}
