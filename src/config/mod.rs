mod loader;

pub use loader::{Config, OutputFormat};
