//! Players seated at a game.

use std::fmt;

use crate::coord::Coord;
use crate::disc::Disc;
use crate::error::{Result, StateError};
use crate::game::{Game, Move};
use crate::strategy::Strategy;

/// Who decides a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Controller {
    /// Moves come from outside the engine, e.g. a human at a terminal.
    External,
    /// Moves are chosen by a built-in strategy.
    Automated(Strategy),
}

/// A participant bound to one disc color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    disc: Disc,
    controller: Controller,
}

impl Player {
    pub fn external(disc: Disc) -> Self {
        Player {
            disc,
            controller: Controller::External,
        }
    }

    pub fn automated(disc: Disc, strategy: Strategy) -> Self {
        Player {
            disc,
            controller: Controller::Automated(strategy),
        }
    }

    pub fn disc(&self) -> Disc {
        self.disc
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    /// The strategy driving this player, if automated.
    pub fn strategy(&self) -> Option<Strategy> {
        match self.controller {
            Controller::Automated(strategy) => Some(strategy),
            Controller::External => None,
        }
    }

    pub fn is_automated(&self) -> bool {
        matches!(self.controller, Controller::Automated(_))
    }

    /// Submits `mv` to `game` under this player's color.
    ///
    /// # Returns
    ///
    /// The flipped coordinates; empty for a pass.
    pub fn submit(&self, game: &mut Game, mv: Move) -> Result<Vec<Coord>> {
        game.apply(mv, self.disc)
    }

    /// Picks a move for the current position without playing it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` for an external player, whose moves must be
    /// submitted by the caller.
    pub fn choose(&self, game: &Game) -> Result<Move> {
        match self.controller {
            Controller::Automated(strategy) => Ok(strategy.choose_move(game, self.disc)),
            Controller::External => Err(StateError::AwaitingInput(self.disc).into()),
        }
    }

    /// Chooses a move and submits it.
    pub fn play_turn(&self, game: &mut Game) -> Result<Move> {
        let mv = self.choose(game)?;
        self.submit(game, mv)?;
        Ok(mv)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.controller {
            Controller::External => write!(f, "{} (external)", self.disc),
            Controller::Automated(strategy) => write!(f, "{} ({strategy})", self.disc),
        }
    }
}
