//! Game construction parameters.

use serde::{Deserialize, Serialize};

use crate::board::Topology;
use crate::capture::RayMode;
use crate::error::Result;
use crate::game::{Game, TieBreak};
use crate::player::Player;

/// Everything needed to set up a game apart from its players.
///
/// Missing fields take their default values when deserialized, so a TOML
/// table holding only `topology = "square"` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub topology: Topology,
    pub size: usize,
    pub tie_break: TieBreak,
    pub ray_mode: RayMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            topology: Topology::Hex,
            size: Topology::Hex.default_size(),
            tie_break: TieBreak::default(),
            ray_mode: RayMode::default(),
        }
    }
}

impl GameConfig {
    /// Default configuration for `topology` at its conventional size.
    pub fn for_topology(topology: Topology) -> Self {
        GameConfig {
            topology,
            size: topology.default_size(),
            ..Self::default()
        }
    }

    /// Checks the size against the topology's rules.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an illegal board size.
    pub fn validate(&self) -> Result<()> {
        self.topology.validate_size(self.size)?;
        Ok(())
    }

    /// Creates a game with this configuration.
    ///
    /// # Arguments
    ///
    /// * `first` - Player holding [`Disc::First`](crate::disc::Disc::First)
    /// * `second` - Player holding [`Disc::Second`](crate::disc::Disc::Second)
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the configuration is invalid or a player
    /// sits at the wrong color.
    pub fn build(&self, first: Player, second: Player) -> Result<Game> {
        self.validate()?;
        let board = self.topology.new_board(self.size)?;
        Ok(Game::new(first, second, board)?
            .with_tie_break(self.tie_break)
            .with_ray_mode(self.ray_mode))
    }
}
