//! Page descriptors handed to the code emitter

mod assembler;

pub use assembler::PageAssembler;

use crate::platform::{Locator, LocatorStrategy};
use serde::Serialize;
use std::fmt;

/// One locatable element of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementDescriptor {
    /// Known wrapper type, or the platform base type
    pub wrapper_type: String,
    /// Generated field name, the capitalized locator value
    pub field_name: String,
    pub locator_strategy: LocatorStrategy,
    pub locator_value: String,
}

impl ElementDescriptor {
    pub fn new(wrapper_type: impl Into<String>, locator: Locator) -> Self {
        Self {
            wrapper_type: wrapper_type.into(),
            field_name: capitalize(&locator.value),
            locator_strategy: locator.strategy,
            locator_value: locator.value,
        }
    }
}

impl fmt::Display for ElementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Type] {}; [Name] {}; [By] {}; [Value] {};",
            self.wrapper_type, self.field_name, self.locator_strategy, self.locator_value
        )
    }
}

/// Everything needed to render one page object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub page_name: String,
    pub platform: String,
    pub base_wrapper_type: String,
    /// First locatable element, used to verify the page is displayed
    #[serde(rename = "trait")]
    pub trait_element: Option<ElementDescriptor>,
    pub elements: Vec<ElementDescriptor>,
}

impl PageDescriptor {
    pub fn new(
        page_name: impl Into<String>,
        platform: impl Into<String>,
        base_wrapper_type: impl Into<String>,
    ) -> Self {
        Self {
            page_name: page_name.into(),
            platform: platform.into(),
            base_wrapper_type: base_wrapper_type.into(),
            trait_element: None,
            elements: Vec::new(),
        }
    }

    /// Append an element; the first one pushed becomes the trait
    pub fn push(&mut self, element: ElementDescriptor) {
        if self.trait_element.is_none() {
            self.trait_element = Some(element.clone());
        }
        self.elements.push(element);
    }
}

impl fmt::Display for PageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Page] {}; [Platform] {};", self.page_name, self.platform)
    }
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
