//! pagegen - Page-object generation from Android and Windows UI markup
//!
//! This library scans markup files for UI elements that a test-automation
//! driver can locate and turns each page into a generated page object.
//!
//! # Architecture
//!
//! The generation pipeline consists of:
//! 1. **File Discovery** - Find all `.axml` or `.xaml` files
//! 2. **Parsing** - Parse markup into an element tree with quick-xml
//! 3. **Flattening** - Order every element, nested elements first
//! 4. **Locator Resolution** - Keep elements with a usable locator, per platform
//! 5. **Page Assembly** - Collect elements and pick the page trait
//! 6. **Emission** - Render each page through a template, or as JSON

pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod generator;
pub mod page;
pub mod parser;
pub mod platform;

pub use config::{Config, OutputFormat};
pub use diagnostics::{Diagnostics, RecordingDiagnostics, SilentDiagnostics, TracingDiagnostics};
pub use discovery::MarkupFinder;
pub use emit::{Emitter, PageTemplate};
pub use error::GeneratorError;
pub use generator::{GenerationSummary, PageObjectGenerator};
pub use page::{ElementDescriptor, PageAssembler, PageDescriptor};
pub use parser::{flatten_elements, MarkupElement, MarkupTree};
pub use platform::{LocatorStrategy, PageRules, Platform};
