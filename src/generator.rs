use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::discovery::MarkupFinder;
use crate::emit::{emitter_for, Emitter};
use crate::error::{GeneratorError, Result};
use crate::page::PageAssembler;
use crate::platform::Platform;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// What a generation run produced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Markup files found by discovery
    pub discovered: usize,
    /// Files written, in discovery order
    pub generated: Vec<PathBuf>,
    /// Markup files skipped because no page could be built from them
    pub skipped: Vec<PathBuf>,
}

enum Outcome {
    Generated(PathBuf),
    Skipped(PathBuf),
}

/// Drives discovery, page assembly and emission for one platform
pub struct PageObjectGenerator<'a> {
    config: &'a Config,
    platform: Platform,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> PageObjectGenerator<'a> {
    pub fn new(config: &'a Config, platform: Platform, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            config,
            platform,
            diagnostics,
        }
    }

    /// Generate a page object for every page found below `search_dir`.
    ///
    /// Files that cannot be read, parsed or recognised as a page are
    /// skipped. Template and write failures stop the run.
    pub fn run(&self, search_dir: &Path) -> Result<GenerationSummary> {
        self.diagnostics.info(&format!(
            "Locating {} page files in {}...",
            self.platform,
            search_dir.display()
        ));

        let rules = self.platform.rules();
        let emitter = emitter_for(self.config)?;

        let files = MarkupFinder::new(self.config, rules, self.diagnostics).find_files(search_dir);
        let mut summary = GenerationSummary {
            discovered: files.len(),
            ..GenerationSummary::default()
        };

        if files.is_empty() {
            return Ok(summary);
        }

        std::fs::create_dir_all(&self.config.output).map_err(|source| GeneratorError::Write {
            path: self.config.output.clone(),
            source,
        })?;

        let assembler = PageAssembler::new(rules, self.diagnostics);

        let outcomes: Vec<Outcome> = if self.config.parallel {
            files
                .par_iter()
                .map(|path| self.process(path, &assembler, emitter.as_ref()))
                .collect::<Result<_>>()?
        } else {
            files
                .iter()
                .map(|path| self.process(path, &assembler, emitter.as_ref()))
                .collect::<Result<_>>()?
        };

        for outcome in outcomes {
            match outcome {
                Outcome::Generated(path) => summary.generated.push(path),
                Outcome::Skipped(path) => summary.skipped.push(path),
            }
        }

        self.diagnostics.info("Completed generating page objects!");
        Ok(summary)
    }

    fn process(&self, path: &Path, assembler: &PageAssembler, emitter: &dyn Emitter) -> Result<Outcome> {
        self.diagnostics.info(&format!("Processing {}", path.display()));

        let page = match assembler.assemble_file(path) {
            Ok(page) => page,
            Err(GeneratorError::UnrecognizedPageRoot { path }) => {
                self.diagnostics
                    .warn(&format!("Skipping {} as a page was not detected", path.display()));
                return Ok(Outcome::Skipped(path));
            }
            Err(err) if err.is_per_file() => {
                self.diagnostics
                    .warn(&format!("Skipping {}: {}", path.display(), err));
                return Ok(Outcome::Skipped(path.to_path_buf()));
            }
            Err(err) => return Err(err),
        };

        emitter.emit(&page).map(Outcome::Generated)
    }
}
