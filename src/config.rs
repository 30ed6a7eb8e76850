//! Configuration management for bracket-lint.
//!
//! Handles:
//! - Command-line argument parsing for the checker and the language server
//! - Project configuration files (`.bracket-lint.toml`)
//! - Logging setup

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::report::OutputFormat;

/// File name of the project configuration
pub const PROJECT_CONFIG_FILE: &str = ".bracket-lint.toml";

/// Command-line arguments for the `bracket-lint` checker
#[derive(Debug, Parser)]
#[command(name = "bracket-lint")]
#[command(about = "Check that brackets in source files are properly nested and closed")]
#[command(version)]
pub struct CheckArgs {
    /// Files to check; reads standard input when empty or `-`
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file to use instead of the discovered one
    #[arg(long, help = "Path to a bracket-lint TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Re-check files whenever they change
    #[arg(long)]
    pub watch: bool,

    /// Log level
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Command-line arguments for the `bracket-ls` language server
#[derive(Debug, Parser)]
#[command(name = "bracket-ls")]
#[command(about = "Language server reporting bracket matching errors")]
#[command(version)]
pub struct ServerArgs {
    /// Communicate over stdio (the only supported transport)
    #[arg(long)]
    pub stdio: bool,

    /// Configuration file to use instead of the discovered one
    #[arg(long, help = "Path to a bracket-lint TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Log level for the language server
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from a TOML configuration file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl ProjectConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, source_path: &Path) -> Result<Self> {
        toml::from_str(content)
            .with_context(|| format!("Failed to parse config TOML: {}", source_path.display()))
    }

    /// Find the configuration file that applies to `dir`
    ///
    /// The project file in `dir` wins over the user-global one.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let project = dir.join(PROJECT_CONFIG_FILE);
        if project.is_file() {
            return Some(project);
        }

        let user = dirs::config_dir()?.join("bracket-lint").join("config.toml");
        user.is_file().then_some(user)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Files to check; empty means standard input
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub watch: bool,
    pub log_level: String,
    /// Configuration file that was loaded, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create checker configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(CheckArgs::parse())
    }

    /// Create checker configuration from explicit arguments (useful for testing)
    pub fn from_args(args: CheckArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Self::from_args_in(args, &cwd)
    }

    /// Like [`Config::from_args`], discovering the project config from `dir`
    pub fn from_args_in(args: CheckArgs, dir: &Path) -> Result<Self> {
        let (config_file, project) = load_project_config(args.config, dir)?;

        Ok(Config {
            paths: args.paths,
            format: args.format.or(project.format).unwrap_or_default(),
            watch: args.watch,
            log_level: args
                .log_level
                .or(project.log_level)
                .unwrap_or_else(|| "warn".to_string()),
            config_file,
        })
    }

    /// Create language server configuration from command-line arguments
    pub fn from_server_args_and_env() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Self::from_server_args_in(ServerArgs::parse(), &cwd)
    }

    pub fn from_server_args_in(args: ServerArgs, dir: &Path) -> Result<Self> {
        let (config_file, project) = load_project_config(args.config, dir)?;

        Ok(Config {
            paths: Vec::new(),
            format: project.format.unwrap_or_default(),
            watch: false,
            log_level: args
                .log_level
                .or(project.log_level)
                .unwrap_or_else(|| "info".to_string()),
            config_file,
        })
    }

    /// Whether the checker reads standard input
    pub fn reads_stdin(&self) -> bool {
        self.paths.is_empty() || self.paths.iter().any(|p| p.as_os_str() == "-")
    }

    /// Initialise `env_logger`; `RUST_LOG` takes precedence over the configured level
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_level.as_str());
        // A logger may already be installed (tests); keep it.
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

fn load_project_config(
    explicit: Option<PathBuf>,
    dir: &Path,
) -> Result<(Option<PathBuf>, ProjectConfig)> {
    let Some(path) = explicit.or_else(|| ProjectConfig::discover(dir)) else {
        return Ok((None, ProjectConfig::default()));
    };

    let project = ProjectConfig::load(&path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok((Some(path), project))
}
