//! Error types for the rules engine.
//!
//! Every fallible operation reports one of three kinds: an argument that can
//! never be valid, a move the rules reject, or an operation issued in the
//! wrong phase of the game.

use crate::board::Topology;
use crate::coord::Coord;
use crate::disc::Disc;

/// Top-level error returned by board and game operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("invalid state: {0}")]
    InvalidState(#[from] StateError),
}

/// Arguments that are invalid regardless of the game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coord),

    #[error("invalid {topology} board size {size}")]
    BoardSize { topology: Topology, size: usize },

    #[error("player seated as {expected} has color {found}")]
    PlayerColor { expected: Disc, found: Disc },

    #[error("invalid board layout: {0}")]
    Layout(String),
}

/// Moves rejected by the rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    #[error("placing {disc} at {at} captures nothing")]
    NoCapture { at: Coord, disc: Disc },

    #[error("it is not {disc}'s turn")]
    NotYourTurn { disc: Disc },

    #[error("the game is over")]
    GameOver,
}

/// Operations issued in the wrong phase of the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("the game has not been started")]
    NotStarted,

    #[error("the game has already been started")]
    AlreadyStarted,

    #[error("cannot start a game without observers")]
    NoObservers,

    #[error("observers can only subscribe before the game starts")]
    SubscribeAfterStart,

    #[error("{0} is controlled externally and cannot choose its own move")]
    AwaitingInput(Disc),
}

/// Error returned when parsing a named setting such as a topology or strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{name}' (expected one of: {expected})")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub name: String,
    pub expected: &'static str,
}

/// Convenience alias for results carrying a [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;
