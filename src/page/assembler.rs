use super::{ElementDescriptor, PageDescriptor};
use crate::diagnostics::Diagnostics;
use crate::error::{GeneratorError, Result};
use crate::parser::{flatten_elements, MarkupTree};
use crate::platform::PageRules;
use std::path::Path;

/// Builds one [`PageDescriptor`] per markup file
pub struct PageAssembler<'a> {
    rules: &'a dyn PageRules,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> PageAssembler<'a> {
    pub fn new(rules: &'a dyn PageRules, diagnostics: &'a dyn Diagnostics) -> Self {
        Self { rules, diagnostics }
    }

    /// Load, parse and assemble a markup file
    pub fn assemble_file(&self, path: &Path) -> Result<PageDescriptor> {
        let tree = MarkupTree::load(path)?;
        self.assemble(path, &tree)
    }

    /// Assemble an already parsed document.
    ///
    /// Fails with [`GeneratorError::UnrecognizedPageRoot`] when the document
    /// has no root or the platform does not accept the root as a page.
    pub fn assemble(&self, path: &Path, tree: &MarkupTree) -> Result<PageDescriptor> {
        let unrecognized = || GeneratorError::UnrecognizedPageRoot {
            path: path.to_path_buf(),
        };

        let root = tree
            .root()
            .filter(|root| self.rules.accepts_root(root))
            .ok_or_else(unrecognized)?;

        let page_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(unrecognized)?;

        let mut page = PageDescriptor::new(
            page_name,
            self.rules.platform().name(),
            self.rules.base_wrapper_type(),
        );

        self.diagnostics
            .info(&format!("Generating template for {}", page));

        for element in flatten_elements(root.children()) {
            let Some(locator) = self.rules.resolve_locator(element) else {
                continue;
            };

            let descriptor =
                ElementDescriptor::new(self.rules.classify_wrapper(element.name()), locator);
            self.diagnostics
                .info(&format!("Element found: {}", descriptor));
            page.push(descriptor);
        }

        Ok(page)
    }
}
