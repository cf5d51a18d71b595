//! Move selection for automated players.
//!
//! Each strategy is a pure function of a read-only game and a color. A
//! strategy that finds nothing to play hands over to its fallback, and the
//! chain ends with a pass:
//!
//! ```text
//! CaptureCorner -> AvoidNextToCorners -> MaximumCapture -> pass
//! ```

mod avoid_corners;
mod capture_corner;
mod maximum_capture;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::coord::Coord;
use crate::disc::Disc;
use crate::error::ParseNameError;
use crate::game::{Game, Move};

/// Built-in move selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Flip as many discs as possible.
    #[serde(rename = "max-capture")]
    MaximumCapture,
    /// Take a corner when one is available.
    #[serde(rename = "capture-corner")]
    CaptureCorner,
    /// Play somewhere not adjacent to a corner.
    #[serde(rename = "avoid-corners")]
    AvoidNextToCorners,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::MaximumCapture,
        Strategy::CaptureCorner,
        Strategy::AvoidNextToCorners,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::MaximumCapture => "max-capture",
            Strategy::CaptureCorner => "capture-corner",
            Strategy::AvoidNextToCorners => "avoid-corners",
        }
    }

    /// The strategy consulted when this one finds no move.
    pub fn fallback(self) -> Option<Strategy> {
        match self {
            Strategy::CaptureCorner => Some(Strategy::AvoidNextToCorners),
            Strategy::AvoidNextToCorners => Some(Strategy::MaximumCapture),
            Strategy::MaximumCapture => None,
        }
    }

    /// Returns this strategy's own pick, without consulting the fallback.
    pub fn select(self, game: &Game, disc: Disc) -> Option<Coord> {
        match self {
            Strategy::MaximumCapture => maximum_capture::select(game, disc),
            Strategy::CaptureCorner => capture_corner::select(game, disc),
            Strategy::AvoidNextToCorners => avoid_corners::select(game, disc),
        }
    }

    /// Chooses a move for `disc`, walking the fallback chain.
    ///
    /// The search runs on a snapshot of `game`, so observers never see it.
    ///
    /// # Returns
    ///
    /// A placement, or [`Move::Pass`] once the chain is exhausted.
    pub fn choose_move(self, game: &Game, disc: Disc) -> Move {
        let snapshot = game.snapshot();
        let mut current = Some(self);
        while let Some(strategy) = current {
            if let Some(at) = strategy.select(&snapshot, disc) {
                trace!(%strategy, %disc, %at, "strategy selected move");
                return Move::Place(at);
            }
            current = strategy.fallback();
            trace!(%strategy, ?current, %disc, "strategy found no move");
        }
        Move::Pass
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max-capture" | "maximum-capture" => Ok(Strategy::MaximumCapture),
            "capture-corner" => Ok(Strategy::CaptureCorner),
            "avoid-corners" | "avoid-next-to-corners" => Ok(Strategy::AvoidNextToCorners),
            _ => Err(ParseNameError {
                kind: "strategy",
                name: s.to_string(),
                expected: "max-capture, capture-corner, avoid-corners",
            }),
        }
    }
}
