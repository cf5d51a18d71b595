//! Game settings from the command line and from TOML files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use reversi_rules::board::Topology;
use reversi_rules::capture::RayMode;
use reversi_rules::config::GameConfig;
use reversi_rules::game::TieBreak;

/// Board and rule settings shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// TOML file with game settings; flags given on the command line win
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Board shape: hex or square
    #[arg(long)]
    pub topology: Option<Topology>,

    /// Hex edge length or square side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Winner on equal disc counts: not-to-move, to-move or draw
    #[arg(long)]
    pub tie_break: Option<TieBreak>,

    /// How capture rays step across hex row bands: rederive or fixed
    #[arg(long)]
    pub ray_mode: Option<RayMode>,
}

impl GameArgs {
    /// Builds the effective configuration.
    ///
    /// Starts from the file given by `--config` (or the defaults), then
    /// applies every flag that was set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting configuration is invalid.
    pub fn resolve(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };
        self.apply(&mut config);
        config.validate().context("invalid game configuration")?;
        Ok(config)
    }

    fn apply(&self, config: &mut GameConfig) {
        if let Some(topology) = self.topology {
            // Switching shapes without a size picks the new shape's usual size.
            if topology != config.topology {
                config.size = topology.default_size();
            }
            config.topology = topology;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break;
        }
        if let Some(ray_mode) = self.ray_mode {
            config.ray_mode = ray_mode;
        }
    }
}

/// Loads and validates a game configuration from a TOML file.
pub fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    let config: GameConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid settings in '{}'", path.display()))?;
    Ok(config)
}
