use clap::Parser;
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use pagegen::{Config, OutputFormat, PageObjectGenerator, Platform, TracingDiagnostics};
use std::path::PathBuf;
use tracing::info;

/// pagegen - Generate UI test page objects from Android and Windows markup
#[derive(Parser, Debug)]
#[command(name = "pagegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder containing the platform pages. Defaults to the current directory
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// Folder the generated files are written to. Defaults to ./PageObjects
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Platform of the markup files
    #[arg(short = 't', long, value_enum)]
    platform: Option<PlatformArg>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Custom page-object template
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Extension of generated files when rendering templates
    #[arg(long)]
    extension: Option<String>,

    /// Namespace written into generated files
    #[arg(long)]
    namespace: Option<String>,

    /// Patterns to exclude (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Emit pages in parallel
    #[arg(long)]
    parallel: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum PlatformArg {
    Android,
    Windows,
}

impl From<PlatformArg> for Platform {
    fn from(platform: PlatformArg) -> Self {
        match platform {
            PlatformArg::Android => Platform::Android,
            PlatformArg::Windows => Platform::Windows,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Template,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Template => OutputFormat::Template,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("pagegen v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let platform = config
        .platform
        .ok_or_else(|| miette::miette!("A required parameter was not provided: --platform <android|windows>"))?;

    let diagnostics = TracingDiagnostics;
    let summary = PageObjectGenerator::new(&config, platform, &diagnostics)
        .run(&cli.path)
        .into_diagnostic()?;

    if !cli.quiet {
        let line = format!(
            "Generated {} page objects from {} {} files ({} skipped)",
            summary.generated.len(),
            summary.discovered,
            platform,
            summary.skipped.len()
        );
        if summary.generated.is_empty() {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.green());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::from_default_locations(&cli.path)?
    };

    // Override with CLI arguments
    if let Some(platform) = cli.platform {
        config.platform = Some(platform.into());
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(template) = &cli.template {
        config.template = Some(template.clone());
    }
    if let Some(extension) = &cli.extension {
        config.extension = extension.clone();
    }
    if let Some(namespace) = &cli.namespace {
        config.namespace = namespace.clone();
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }
    if cli.parallel {
        config.parallel = true;
    }

    Ok(config)
}
