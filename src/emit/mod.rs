mod template;

pub use template::{PageTemplate, RenderContext, DEFAULT_TEMPLATE};

use crate::config::{Config, OutputFormat};
use crate::error::{GeneratorError, Result};
use crate::page::PageDescriptor;
use std::path::{Path, PathBuf};

/// Turns a page descriptor into an output file
pub trait Emitter: Send + Sync {
    /// Write the page and return the path written
    fn emit(&self, page: &PageDescriptor) -> Result<PathBuf>;
}

/// Build the emitter configured for this run
pub fn emitter_for(config: &Config) -> Result<Box<dyn Emitter>> {
    match config.format {
        OutputFormat::Template => {
            let template = match &config.template {
                Some(path) => {
                    let source = std::fs::read_to_string(path).map_err(|e| GeneratorError::Template {
                        message: format!("failed to read {}: {}", path.display(), e),
                    })?;
                    PageTemplate::parse(&source)?
                }
                None => PageTemplate::builtin()?,
            };
            let context = RenderContext {
                namespace: config.namespace.clone(),
            };
            Ok(Box::new(TemplateEmitter::new(
                template,
                context,
                config.output.clone(),
                config.extension.clone(),
            )))
        }
        OutputFormat::Json => Ok(Box::new(JsonEmitter::new(config.output.clone()))),
    }
}

/// Renders pages through a [`PageTemplate`]
pub struct TemplateEmitter {
    template: PageTemplate,
    context: RenderContext,
    output_dir: PathBuf,
    extension: String,
}

impl TemplateEmitter {
    pub fn new(
        template: PageTemplate,
        context: RenderContext,
        output_dir: PathBuf,
        extension: String,
    ) -> Self {
        Self {
            template,
            context,
            output_dir,
            extension,
        }
    }
}

impl Emitter for TemplateEmitter {
    fn emit(&self, page: &PageDescriptor) -> Result<PathBuf> {
        let rendered = self.template.render(page, &self.context);
        let path = output_path(&self.output_dir, &page.page_name, &self.extension);
        write_file(&path, &rendered)?;
        Ok(path)
    }
}

/// Writes each descriptor as pretty-printed JSON
pub struct JsonEmitter {
    output_dir: PathBuf,
}

impl JsonEmitter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

impl Emitter for JsonEmitter {
    fn emit(&self, page: &PageDescriptor) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(page).map_err(|source| GeneratorError::Serialize {
            page: page.page_name.clone(),
            source,
        })?;
        let path = output_path(&self.output_dir, &page.page_name, "json");
        write_file(&path, &json)?;
        Ok(path)
    }
}

fn output_path(dir: &Path, page_name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", page_name, extension))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    })
}
