//! The `pykelet` application.
//!
//! [`PykeletCli`] owns the loaded configuration and dispatches parsed
//! arguments to the command handlers.

use crate::cli::{CliArgs, Command};
use crate::config::PykeletConfig;
use crate::{commands, config_handlers};
use pykelet_core::{ConfigProvider, Error, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// ============================================================================
// PykeletCli
// ============================================================================

/// CLI application parameterized over a config provider.
pub struct PykeletCli<C: ConfigProvider> {
    name: String,
    config: Arc<C>,
    version: String,
}

impl PykeletCli<PykeletConfig> {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = PykeletConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }
}

impl<C: ConfigProvider> PykeletCli<C> {
    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the config provider.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be installed (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);
        tracing::debug!(
            project = self.config.project_name(),
            version = %self.version,
            "starting {}",
            self.name
        );

        match args.command {
            Some(Command::Show { file, format }) => {
                let out = commands::show(&*self.config, Path::new(&file), format).await?;
                print!("{out}");
                Ok(())
            }
            Some(Command::List {
                file,
                container,
                format,
            }) => {
                let out = commands::list(Path::new(&file), container.as_deref(), format).await?;
                print!("{out}");
                Ok(())
            }
            Some(Command::Fill {
                file,
                output,
                force,
            }) => {
                let markup = commands::fill(&*self.config, Path::new(&file), force).await?;
                match output {
                    Some(out) => {
                        tokio::fs::write(&out, markup)
                            .await
                            .map_err(|e| Error::io_with_path(e, &out))?;
                        log::info!("wrote {out}");
                    }
                    None => print!("{markup}"),
                }
                Ok(())
            }
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {}: use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
