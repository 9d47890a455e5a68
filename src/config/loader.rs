use crate::platform::Platform;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How each page descriptor is written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Render through the page-object template
    #[default]
    Template,
    /// Dump the descriptor as JSON
    Json,
}

/// Configuration for a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Platform whose markup is scanned
    pub platform: Option<Platform>,

    /// Directory the generated files are written to
    pub output: PathBuf,

    /// Custom page-object template, the built-in one is used when unset
    pub template: Option<PathBuf>,

    /// Extension of generated source files
    pub extension: String,

    /// Namespace written into generated source files
    pub namespace: String,

    /// Patterns to exclude from discovery
    pub exclude: Vec<String>,

    pub format: OutputFormat,

    /// Emit pages on the rayon thread pool
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: None,
            output: PathBuf::from("PageObjects"),
            template: None,
            extension: "cs".to_string(),
            namespace: "PageObjects".to_string(),
            exclude: vec!["**/bin/**".to_string(), "**/obj/**".to_string()],
            format: OutputFormat::default(),
            parallel: false,
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(search_root: &Path) -> Result<Self> {
        let default_names = [
            ".pagegen.yml",
            ".pagegen.yaml",
            ".pagegen.toml",
            "pagegen.yml",
            "pagegen.yaml",
            "pagegen.toml",
        ];

        for name in &default_names {
            let path = search_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Check if a path matches an exclusion pattern
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.exclude.iter().any(|pattern| glob_match(pattern, &path_str))
    }
}

/// Simple glob matching for patterns like "*Page.xaml" or "**/obj/**"
fn glob_match(pattern: &str, text: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix('*').filter(|_| !pattern.contains('/')) {
        return text.ends_with(suffix);
    }

    if let Some(prefix) = pattern.strip_suffix('*').filter(|_| !pattern.contains('/')) {
        return text.starts_with(prefix);
    }

    if pattern.contains("**") {
        // "**/obj/**" matches an "obj" directory anywhere, not "objects"
        if pattern.starts_with("**/") && pattern.ends_with("/**") {
            let dir_name = pattern.trim_start_matches("**/").trim_end_matches("/**");
            return text.contains(&format!("/{}/", dir_name))
                || text.starts_with(&format!("{}/", dir_name));
        }

        let parts: Vec<&str> = pattern.split("**").collect();
        if parts.len() == 2 {
            let prefix = parts[0].trim_end_matches('/');
            let suffix = parts[1].trim_start_matches('/');

            if prefix.is_empty() && suffix.is_empty() {
                return true;
            }

            if prefix.is_empty() {
                return text.ends_with(suffix) || text.contains(&format!("/{}", suffix));
            }

            if suffix.is_empty() {
                return text.starts_with(prefix) || text.contains(&format!("{}/", prefix));
            }

            return (text.starts_with(prefix) || text.contains(&format!("/{}/", prefix)))
                && (text.ends_with(suffix) || text.contains(&format!("/{}", suffix)));
        }
    }

    text == pattern
}
