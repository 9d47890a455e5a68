//! Per-platform locator and wrapper-type rules
//!
//! Each supported platform implements [`PageRules`]: which files it reads,
//! which roots count as a page, how an element is located at automation
//! time and which wrapper type represents it in generated code. The rules
//! are chosen once per run through [`Platform::rules`].

mod android;
mod windows;

pub use android::AndroidRules;
pub use windows::WindowsRules;

use crate::parser::MarkupElement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported markup platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Windows,
}

impl Platform {
    /// Rule set for this platform
    pub fn rules(&self) -> &'static dyn PageRules {
        match self {
            Platform::Android => &AndroidRules,
            Platform::Windows => &WindowsRules,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Windows => "Windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a test-automation driver finds an element at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocatorStrategy {
    Id,
    AndroidContentDesc,
    AutomationId,
    Name,
}

impl LocatorStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocatorStrategy::Id => "Id",
            LocatorStrategy::AndroidContentDesc => "AndroidContentDesc",
            LocatorStrategy::AutomationId => "AutomationId",
            LocatorStrategy::Name => "Name",
        }
    }
}

impl fmt::Display for LocatorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved locator. `value` is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub strategy: LocatorStrategy,
    pub value: String,
}

impl Locator {
    pub fn new(strategy: LocatorStrategy, value: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
        }
    }
}

/// Platform capability used by the page assembler
pub trait PageRules: Send + Sync {
    fn platform(&self) -> Platform;

    /// Wrapper type used for elements with no richer match
    fn base_wrapper_type(&self) -> &'static str;

    /// Markup file extension, without the dot
    fn file_extension(&self) -> &'static str;

    /// Tag names that map to a dedicated wrapper type
    fn known_wrapper_types(&self) -> &'static [&'static str];

    /// Whether a document root describes a page
    fn accepts_root(&self, root: &MarkupElement) -> bool;

    /// Decide how `element` can be located, if at all
    fn resolve_locator(&self, element: &MarkupElement) -> Option<Locator>;

    /// Map a tag name to a wrapper type, ignoring case
    fn classify_wrapper(&self, tag_name: &str) -> &'static str {
        classify(tag_name, self.known_wrapper_types(), self.base_wrapper_type())
    }
}

fn classify(tag_name: &str, known: &'static [&'static str], base: &'static str) -> &'static str {
    let lowered = tag_name.to_lowercase();
    known
        .iter()
        .copied()
        .find(|candidate| candidate.to_lowercase() == lowered)
        .unwrap_or(base)
}

/// Returns the value when it has any non-whitespace content
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
