use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::error::GeneratorError;
use crate::platform::PageRules;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Finds the markup files of one platform below a search directory
pub struct MarkupFinder<'a> {
    config: &'a Config,
    rules: &'a dyn PageRules,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> MarkupFinder<'a> {
    pub fn new(config: &'a Config, rules: &'a dyn PageRules, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            config,
            rules,
            diagnostics,
        }
    }

    /// Recursively collect matching files, sorted by path.
    ///
    /// Directories that cannot be read are reported and skipped; whatever
    /// was found elsewhere is still returned.
    pub fn find_files(&self, root: &Path) -> Vec<PathBuf> {
        let extension = self.rules.file_extension();
        let label = extension.to_uppercase();
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.report_walk_error(root, &label, err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !has_extension(path, extension) {
                continue;
            }

            let relative = path.strip_prefix(root).unwrap_or(path);
            if self.config.should_exclude(relative) {
                trace!("Excluding: {}", path.display());
                continue;
            }

            trace!("Found {}", path.display());
            files.push(path.to_path_buf());
        }

        if files.is_empty() {
            self.diagnostics
                .warn(&format!("No {} files were found for processing", label));
        }

        files
    }

    fn report_walk_error(&self, root: &Path, label: &str, err: walkdir::Error) {
        let denied = err.io_error().map(|e| e.kind()) == Some(ErrorKind::PermissionDenied);

        let reason = if denied {
            let path = err.path().unwrap_or(root).to_path_buf();
            GeneratorError::DiscoveryAccessDenied { path, source: err }.to_string()
        } else {
            err.to_string()
        };

        self.diagnostics.error(&format!(
            "An error occurred while retrieving {} files for processing: {}",
            label, reason
        ));
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
