//! Reversi on hexagonal and square boards.

pub mod board;
pub mod capture;
pub mod config;
pub mod coord;
pub mod disc;
pub mod error;
pub mod game;
pub mod observer;
pub mod perft;
pub mod player;
pub mod strategy;

pub use board::{Board, Topology};
pub use config::GameConfig;
pub use coord::Coord;
pub use disc::{Cell, Disc};
pub use error::{GameError, Result};
pub use game::{Game, Move, Phase, TieBreak};
pub use observer::GameObserver;
pub use player::Player;
pub use strategy::Strategy;
