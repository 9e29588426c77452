use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};
use tabi_core::Config;
use tabi_core::loader::ItinerarySource;
use tabi_types::Itinerary;

use crate::types::OutputFormat;

/// Everything a handler needs that comes from flags, environment and config.toml
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: Config,
    source: ItinerarySource,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(
        data_dir: PathBuf,
        itinerary: Option<PathBuf>,
        format: OutputFormat,
    ) -> Result<Self> {
        let config_path = data_dir.join(Config::FILE_NAME);
        let config = Config::load_from(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;
        let source = ItinerarySource::resolve(itinerary.as_deref(), &config);

        tracing::debug!(data_dir = %data_dir.display(), source = %source, "execution context ready");

        Ok(Self {
            data_dir,
            config,
            source,
            format,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(Config::FILE_NAME)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &ItinerarySource {
        &self.source
    }

    pub fn load_itinerary(&self) -> Result<Itinerary> {
        self.source
            .load()
            .with_context(|| format!("Failed to load itinerary from {}", self.source))
    }

    /// Colour only when the config allows it and stdout is a terminal
    pub fn color_enabled(&self) -> bool {
        self.config.display.color && std::io::stdout().is_terminal()
    }
}
