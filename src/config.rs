use crate::audio::{AudioEncoding, AudioFormat, DEFAULT_SAMPLING_RATE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: u32,

    #[serde(default)]
    pub audio_encoding: AudioEncoding,

    /// Blocks read from the input before each hand-off to the sink
    #[serde(default = "default_chunk_blocks")]
    pub chunk_blocks: u32,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.wav")
}

fn default_sampling_rate() -> u32 {
    DEFAULT_SAMPLING_RATE
}

fn default_chunk_blocks() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            sampling_rate: default_sampling_rate(),
            audio_encoding: AudioEncoding::default(),
            chunk_blocks: default_chunk_blocks(),
        }
    }
}

impl Config {
    /// Load configuration from the default location (~/.config/pcm-file-sink/config.json)
    ///
    /// A default config is written there on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!(
                "Config file not found at {:?}, creating default config",
                config_path
            );
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        tracing::info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        tracing::info!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(dir)
        } else {
            let home = std::env::var("HOME").context("HOME environment variable not set")?;
            PathBuf::from(home).join(".config")
        };

        Ok(config_dir.join("pcm-file-sink").join("config.json"))
    }

    /// Bytes handed to the sink per consume call
    pub fn chunk_bytes(&self) -> usize {
        AudioFormat::mono(self.sampling_rate).block_bytes() * self.chunk_blocks as usize
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output_path.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("output_path cannot be empty"));
        }

        if self.sampling_rate == 0 {
            return Err(anyhow::anyhow!("sampling_rate must be positive"));
        }

        if self.chunk_blocks == 0 {
            return Err(anyhow::anyhow!("chunk_blocks must be at least 1"));
        }

        Ok(())
    }
}
