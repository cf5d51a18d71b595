//! Game engine.
//!
//! This module provides the [`Game`] struct which owns the board and the two
//! players, sequences turns, validates and applies moves, passes on behalf of
//! a player without a legal move, detects the end of the game and notifies
//! registered observers.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, HexBoard, SquareBoard};
use crate::capture::{self, RayMode};
use crate::coord::Coord;
use crate::disc::Disc;
use crate::error::{ArgumentError, IllegalMove, ParseNameError, Result, StateError};
use crate::observer::GameObserver;
use crate::player::Player;

/// A move submitted to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Coord),
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(coord) => write!(f, "{coord}"),
            Move::Pass => write!(f, "pass"),
        }
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Started,
    Ended,
}

/// Who wins when both colors hold the same number of discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The player whose turn it is not wins.
    #[default]
    NotToMove,
    /// The player whose turn it is wins.
    ToMove,
    /// Nobody wins.
    Draw,
}

impl TieBreak {
    /// Resolves a tie given the color that is to move.
    pub fn resolve(self, to_move: Disc) -> Option<Disc> {
        match self {
            TieBreak::NotToMove => Some(to_move.opposite()),
            TieBreak::ToMove => Some(to_move),
            TieBreak::Draw => None,
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::NotToMove => write!(f, "not-to-move"),
            TieBreak::ToMove => write!(f, "to-move"),
            TieBreak::Draw => write!(f, "draw"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = ParseNameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not-to-move" => Ok(TieBreak::NotToMove),
            "to-move" => Ok(TieBreak::ToMove),
            "draw" => Ok(TieBreak::Draw),
            _ => Err(ParseNameError {
                kind: "tie-break",
                name: s.to_string(),
                expected: "not-to-move, to-move, draw",
            }),
        }
    }
}

/// State of a Reversi match.
///
/// The first player always holds [`Disc::First`] and moves first. Once
/// created, the game is only changed through [`start`](Game::start),
/// [`attempt_move`](Game::attempt_move) and [`pass`](Game::pass).
pub struct Game {
    players: [Player; 2],
    board: Box<dyn Board>,
    current: usize,
    consecutive_passes: u32,
    phase: Phase,
    last_move_color: Option<Disc>,
    tie_break: TieBreak,
    ray_mode: RayMode,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Creates a game on `board` in its current position, `First` to move.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `first` does not play [`Disc::First`] or
    /// `second` does not play [`Disc::Second`].
    pub fn new(first: Player, second: Player, board: Box<dyn Board>) -> Result<Self> {
        Self::from_position(first, second, board, Disc::First)
    }

    /// Creates a game on a hex board of edge length `size`.
    pub fn hex(first: Player, second: Player, size: usize) -> Result<Self> {
        Self::new(first, second, Box::new(HexBoard::new(size)?))
    }

    /// Creates a game on a `size × size` square board.
    pub fn square(first: Player, second: Player, size: usize) -> Result<Self> {
        Self::new(first, second, Box::new(SquareBoard::new(size)?))
    }

    /// Creates a game from an arbitrary position with `to_move` to act.
    ///
    /// This is useful for setting up specific positions for analysis and
    /// tests.
    pub fn from_position(
        first: Player,
        second: Player,
        board: Box<dyn Board>,
        to_move: Disc,
    ) -> Result<Self> {
        for (player, expected) in [(&first, Disc::First), (&second, Disc::Second)] {
            if player.disc() != expected {
                return Err(ArgumentError::PlayerColor {
                    expected,
                    found: player.disc(),
                }
                .into());
            }
        }
        Ok(Game {
            players: [first, second],
            board,
            current: to_move.index(),
            consecutive_passes: 0,
            phase: Phase::NotStarted,
            last_move_color: None,
            tie_break: TieBreak::default(),
            ray_mode: RayMode::default(),
            observers: Vec::new(),
        })
    }

    /// Sets the policy applied by [`winner`](Game::winner) on equal counts.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets how capture rays pick their next step.
    pub fn with_ray_mode(mut self, ray_mode: RayMode) -> Self {
        self.ray_mode = ray_mode;
        self
    }

    /// Registers an observer. The `i`-th observer belongs to the player
    /// seated at index `i`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` once the game has started.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) -> Result<()> {
        if self.phase != Phase::NotStarted {
            return Err(StateError::SubscribeAfterStart.into());
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Starts the game.
    ///
    /// Notifies the first observer that the game started and every observer
    /// of the initial board. If the first player has no legal move the
    /// engine passes for them right away.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the game was already started or no observer
    /// is registered.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != Phase::NotStarted {
            return Err(StateError::AlreadyStarted.into());
        }
        if self.observers.is_empty() {
            return Err(StateError::NoObservers.into());
        }

        self.phase = Phase::Started;
        info!(
            topology = %self.board.topology(),
            size = self.board.size(),
            first = %self.players[0],
            second = %self.players[1],
            "game started"
        );

        if let Some(observer) = self.observers.first_mut() {
            observer.on_game_started();
        }
        self.notify_board_state_changed();

        self.settle_turn();
        self.finish_if_over();
        Ok(())
    }

    /// Places a disc of color `disc` at `at`.
    ///
    /// # Returns
    ///
    /// The coordinates of the flipped discs.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the game has not started.
    /// - `InvalidArgument` if `at` is outside the board.
    /// - `IllegalMove` if the game is over, it is not `disc`'s turn, the cell
    ///   is occupied, or the placement captures nothing.
    pub fn attempt_move(&mut self, at: Coord, disc: Disc) -> Result<Vec<Coord>> {
        if self.phase == Phase::NotStarted {
            return Err(StateError::NotStarted.into());
        }
        if !self.board.is_valid(at) {
            return Err(ArgumentError::OutOfBounds(at).into());
        }
        if self.phase == Phase::Ended {
            return Err(IllegalMove::GameOver.into());
        }
        if disc != self.current_disc() {
            return Err(IllegalMove::NotYourTurn { disc }.into());
        }
        if !self.board.get(at)?.is_empty() {
            return Err(IllegalMove::Occupied(at).into());
        }

        let flipped = self.captures(at, disc);
        if flipped.is_empty() {
            return Err(IllegalMove::NoCapture { at, disc }.into());
        }

        self.place(at, disc, &flipped)?;
        debug!(%at, %disc, flipped = flipped.len(), "placed disc");

        self.swap_turn();
        self.settle_turn();
        self.notify_score_updated();
        self.finish_if_over();
        Ok(flipped)
    }

    /// Passes the turn of `disc`.
    ///
    /// If the game is already over this only repeats the end-of-game
    /// notification.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the game has not started and `IllegalMove`
    /// if it is not `disc`'s turn.
    pub fn pass(&mut self, disc: Disc) -> Result<()> {
        match self.phase {
            Phase::NotStarted => return Err(StateError::NotStarted.into()),
            Phase::Ended => {
                self.notify_game_ended();
                return Ok(());
            }
            Phase::Started => {}
        }
        if disc != self.current_disc() {
            return Err(IllegalMove::NotYourTurn { disc }.into());
        }

        debug!(%disc, "pass");
        self.record_pass(disc);
        self.swap_turn();
        self.settle_turn();
        self.finish_if_over();
        Ok(())
    }

    /// Submits `mv` on behalf of `disc`.
    ///
    /// # Returns
    ///
    /// The flipped coordinates; empty for a pass.
    pub fn apply(&mut self, mv: Move, disc: Disc) -> Result<Vec<Coord>> {
        match mv {
            Move::Place(at) => self.attempt_move(at, disc),
            Move::Pass => self.pass(disc).map(|()| Vec::new()),
        }
    }

    /// Returns a deep copy of the game for simulation.
    ///
    /// The copy has its own board and carries no observers, so nothing done
    /// to it is visible outside.
    pub fn snapshot(&self) -> Game {
        Game {
            players: self.players.clone(),
            board: self.board.clone(),
            current: self.current,
            consecutive_passes: self.consecutive_passes,
            phase: self.phase,
            last_move_color: self.last_move_color,
            tie_break: self.tie_break,
            ray_mode: self.ray_mode,
            observers: Vec::new(),
        }
    }

    /// Plays `disc` at `at` on a snapshot, ignoring turn order and phase.
    ///
    /// # Returns
    ///
    /// The resulting game, or `None` if the placement is not legal.
    pub fn simulate_move(&self, at: Coord, disc: Disc) -> Option<Game> {
        let flipped = self.captures(at, disc);
        if flipped.is_empty() {
            return None;
        }
        let mut sim = self.snapshot();
        sim.place(at, disc, &flipped).ok()?;
        sim.current = disc.index();
        sim.swap_turn();
        sim.settle_turn();
        if sim.is_game_over() {
            sim.phase = Phase::Ended;
        }
        Some(sim)
    }

    pub fn board(&self) -> &dyn Board {
        self.board.as_ref()
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, disc: Disc) -> &Player {
        &self.players[disc.index()]
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_disc(&self) -> Disc {
        self.players[self.current].disc()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    /// Color of the last placement or pass, `None` before the first one.
    pub fn last_move_color(&self) -> Option<Disc> {
        self.last_move_color
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn ray_mode(&self) -> RayMode {
        self.ray_mode
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// The game is over once two consecutive passes have been recorded.
    pub fn is_game_over(&self) -> bool {
        self.consecutive_passes >= 2
    }

    /// Number of discs of color `disc` on the board.
    pub fn score(&self, disc: Disc) -> usize {
        self.board.count_disc(disc)
    }

    /// Disc counts as `(first, second)`.
    pub fn scores(&self) -> (usize, usize) {
        (self.score(Disc::First), self.score(Disc::Second))
    }

    /// Returns the player with more discs.
    ///
    /// Equal counts are resolved by the game's [`TieBreak`] policy; `None`
    /// means a draw.
    pub fn winner(&self) -> Option<&Player> {
        let (first, second) = self.scores();
        let disc = match first.cmp(&second) {
            Ordering::Greater => Some(Disc::First),
            Ordering::Less => Some(Disc::Second),
            Ordering::Equal => self.tie_break.resolve(self.current_disc()),
        };
        disc.map(|d| self.player(d))
    }

    /// Discs that placing `disc` at `at` would flip.
    pub fn captures(&self, at: Coord, disc: Disc) -> Vec<Coord> {
        capture::captures(self.board(), at, disc, self.ray_mode)
    }

    /// `true` iff `at` is empty and placing `disc` there captures something.
    pub fn is_valid_move(&self, at: Coord, disc: Disc) -> bool {
        capture::is_legal(self.board(), at, disc, self.ray_mode)
    }

    pub fn has_legal_move(&self, disc: Disc) -> bool {
        self.board
            .coords()
            .into_iter()
            .any(|coord| self.is_valid_move(coord, disc))
    }

    /// Legal placements of `disc` in row-major order.
    pub fn legal_moves(&self, disc: Disc) -> Vec<Coord> {
        self.board
            .coords()
            .into_iter()
            .filter(|&coord| self.is_valid_move(coord, disc))
            .collect()
    }

    fn place(&mut self, at: Coord, disc: Disc, flipped: &[Coord]) -> Result<()> {
        self.board.set(at, disc.into())?;
        for &coord in flipped {
            self.board.set(coord, disc.into())?;
        }
        self.consecutive_passes = 0;
        self.last_move_color = Some(disc);
        self.notify_board_state_changed();
        Ok(())
    }

    fn record_pass(&mut self, disc: Disc) {
        self.consecutive_passes += 1;
        self.last_move_color = Some(disc);
    }

    fn swap_turn(&mut self) {
        self.current = 1 - self.current;
        self.notify_turn_change_info();
        self.notify_board_state_changed();
        self.notify_turn_changed();
    }

    /// Passes for the player to act for as long as they have no legal move
    /// and the game is not over.
    fn settle_turn(&mut self) {
        while !self.is_game_over() && !self.has_legal_move(self.current_disc()) {
            let disc = self.current_disc();
            debug!(%disc, "no legal move, passing automatically");
            self.notify_no_valid_move();
            self.record_pass(disc);
            self.swap_turn();
        }
    }

    fn finish_if_over(&mut self) {
        if self.is_game_over() && self.phase == Phase::Started {
            self.phase = Phase::Ended;
            let (first, second) = self.scores();
            info!(
                first,
                second,
                winner = ?self.winner().map(Player::disc),
                "game over"
            );
            self.notify_game_ended();
        }
    }

    fn notify_board_state_changed(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.board.snapshot();
        for observer in &mut self.observers {
            observer.on_board_state_changed(&snapshot);
        }
    }

    fn notify_turn_change_info(&mut self) {
        let player = &self.players[self.current];
        for observer in &mut self.observers {
            observer.on_turn_change_info(player);
        }
    }

    fn notify_turn_changed(&mut self) {
        if let Some(observer) = self.observers.get_mut(self.current) {
            observer.on_turn_changed(&self.players[self.current]);
        }
    }

    fn notify_score_updated(&mut self) {
        let (first, second) = self.scores();
        for observer in &mut self.observers {
            observer.on_score_updated(first, second);
        }
    }

    fn notify_no_valid_move(&mut self) {
        let player = &self.players[self.current];
        for observer in &mut self.observers {
            observer.on_no_valid_move(player);
        }
    }

    fn notify_game_ended(&mut self) {
        let winner = self.winner().cloned();
        for observer in &mut self.observers {
            observer.on_game_ended(winner.as_ref());
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("board", &self.board)
            .field("current", &self.current)
            .field("consecutive_passes", &self.consecutive_passes)
            .field("phase", &self.phase)
            .field("last_move_color", &self.last_move_color)
            .field("tie_break", &self.tie_break)
            .field("ray_mode", &self.ray_mode)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Topology, load_layout};
    use crate::disc::Cell;
    use crate::error::GameError;
    use crate::observer::{EventLog, GameEvent, NullObserver};

    fn players() -> (Player, Player) {
        (Player::external(Disc::First), Player::external(Disc::Second))
    }

    fn started_square(size: usize) -> Game {
        let (first, second) = players();
        let mut game = Game::square(first, second, size).unwrap();
        game.subscribe(Box::new(NullObserver)).unwrap();
        game.start().unwrap();
        game
    }

    fn started_from_layout(topology: Topology, size: usize, layout: &str, to_move: Disc) -> Game {
        let (first, second) = players();
        let mut board = topology.new_board(size).unwrap();
        load_layout(board.as_mut(), layout).unwrap();
        let mut game = Game::from_position(first, second, board, to_move).unwrap();
        game.subscribe(Box::new(NullObserver)).unwrap();
        game.start().unwrap();
        game
    }

    #[test]
    fn test_new_game() {
        let game = started_square(8);
        assert_eq!(game.phase(), Phase::Started);
        assert_eq!(game.current_disc(), Disc::First);
        assert_eq!(game.scores(), (2, 2));
        assert_eq!(game.last_move_color(), None);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_construction_checks_seats() {
        let (first, second) = players();
        let err = Game::square(second.clone(), first.clone(), 8).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidArgument(ArgumentError::PlayerColor {
                expected: Disc::First,
                found: Disc::Second,
            })
        );
        assert!(matches!(
            Game::square(first.clone(), second.clone(), 5),
            Err(GameError::InvalidArgument(ArgumentError::BoardSize { .. }))
        ));
        assert!(Game::hex(first, second, 1).is_err());
    }

    #[test]
    fn test_operations_require_start() {
        let (first, second) = players();
        let mut game = Game::square(first, second, 8).unwrap();
        assert_eq!(
            game.attempt_move(Coord::new(2, 4), Disc::First),
            Err(StateError::NotStarted.into())
        );
        assert_eq!(game.pass(Disc::First), Err(StateError::NotStarted.into()));
        assert_eq!(game.start(), Err(StateError::NoObservers.into()));
    }

    #[test]
    fn test_start_twice_and_late_subscribe() {
        let mut game = started_square(8);
        assert_eq!(game.start(), Err(StateError::AlreadyStarted.into()));
        assert_eq!(
            game.subscribe(Box::new(NullObserver)),
            Err(StateError::SubscribeAfterStart.into())
        );
    }

    #[test]
    fn test_make_move() {
        let mut game = started_square(8);
        let flipped = game.attempt_move(Coord::new(2, 4), Disc::First).unwrap();
        assert_eq!(flipped, vec![Coord::new(3, 4)]);
        assert_eq!(game.current_disc(), Disc::Second);
        assert_eq!(game.scores(), (4, 1));
        assert_eq!(game.last_move_color(), Some(Disc::First));
    }

    #[test]
    fn test_illegal_moves() {
        let mut game = started_square(8);
        assert_eq!(
            game.attempt_move(Coord::new(0, 0), Disc::First),
            Err(IllegalMove::NoCapture {
                at: Coord::new(0, 0),
                disc: Disc::First
            }
            .into())
        );
        assert_eq!(
            game.attempt_move(Coord::new(3, 3), Disc::First),
            Err(IllegalMove::Occupied(Coord::new(3, 3)).into())
        );
        assert_eq!(
            game.attempt_move(Coord::new(2, 3), Disc::Second),
            Err(IllegalMove::NotYourTurn { disc: Disc::Second }.into())
        );
        assert_eq!(
            game.attempt_move(Coord::new(8, 0), Disc::First),
            Err(ArgumentError::OutOfBounds(Coord::new(8, 0)).into())
        );
        // Nothing changed.
        assert_eq!(game.scores(), (2, 2));
        assert_eq!(game.current_disc(), Disc::First);
    }

    #[test]
    fn test_two_passes_end_game() {
        let mut game = started_square(8);
        game.pass(Disc::First).unwrap();
        assert!(!game.is_game_over());
        assert_eq!(game.current_disc(), Disc::Second);
        game.pass(Disc::Second).unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.phase(), Phase::Ended);
        assert_eq!(
            game.attempt_move(Coord::new(2, 4), Disc::First),
            Err(IllegalMove::GameOver.into())
        );
        // Passing after the end is a no-op.
        game.pass(Disc::First).unwrap();
        assert!(game.is_game_over());
    }

    #[test]
    fn test_placement_resets_passes() {
        let mut game = started_square(8);
        game.pass(Disc::First).unwrap();
        assert_eq!(game.consecutive_passes(), 1);
        game.attempt_move(Coord::new(2, 3), Disc::Second).unwrap();
        assert_eq!(game.consecutive_passes(), 0);
    }

    #[test]
    fn test_tie_break_policies() {
        let mut game = started_square(8);
        game.pass(Disc::First).unwrap();
        game.pass(Disc::Second).unwrap();
        assert_eq!(game.scores(), (2, 2));
        // First is to move again after both passes.
        assert_eq!(game.current_disc(), Disc::First);
        assert_eq!(game.winner().map(Player::disc), Some(Disc::Second));

        let game = game.with_tie_break(TieBreak::ToMove);
        assert_eq!(game.winner().map(Player::disc), Some(Disc::First));

        let game = game.with_tie_break(TieBreak::Draw);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_auto_pass_when_opponent_is_blocked() {
        // After First plays (0,2) every Second disc is gone.
        let mut game = started_from_layout(
            Topology::Square,
            4,
            "X O - -
             - - - -
             - - - -
             - - - -",
            Disc::First,
        );
        assert!(game.is_valid_move(Coord::new(0, 2), Disc::First));
        game.attempt_move(Coord::new(0, 2), Disc::First).unwrap();
        assert_eq!(game.scores(), (3, 0));
        assert!(game.is_game_over());
        assert_eq!(game.phase(), Phase::Ended);
        assert_eq!(game.winner().map(Player::disc), Some(Disc::First));
    }

    #[test]
    fn test_auto_pass_hands_turn_back() {
        // Second has no move after First plays (0,3), but First still does.
        let mut game = started_from_layout(
            Topology::Square,
            4,
            "X O O -
             - - - -
             - - O -
             - - - X",
            Disc::First,
        );
        game.attempt_move(Coord::new(0, 3), Disc::First).unwrap();
        assert_eq!(game.consecutive_passes(), 1);
        assert_eq!(game.current_disc(), Disc::First);
        assert_eq!(game.last_move_color(), Some(Disc::Second));
        assert!(!game.is_game_over());
        assert!(game.is_valid_move(Coord::new(1, 1), Disc::First));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let game = started_square(8);
        let mut sim = game.snapshot();
        sim.attempt_move(Coord::new(2, 4), Disc::First).unwrap();
        assert_eq!(game.scores(), (2, 2));
        assert_eq!(game.current_disc(), Disc::First);
        assert_eq!(game.board().get(Coord::new(2, 4)).unwrap(), Cell::Empty);
        assert_eq!(sim.scores(), (4, 1));
        assert_eq!(sim.observer_count(), 0);
    }

    #[test]
    fn test_simulate_move() {
        let game = started_square(8);
        let sim = game.simulate_move(Coord::new(2, 4), Disc::First).unwrap();
        assert_eq!(sim.score(Disc::First), 4);
        assert_eq!(sim.current_disc(), Disc::Second);
        assert!(game.simulate_move(Coord::new(0, 0), Disc::First).is_none());
        assert_eq!(game.scores(), (2, 2));
    }

    #[test]
    fn test_notifications() {
        let (first, second) = players();
        let mut game = Game::square(first, second, 4).unwrap();
        let first_log = EventLog::new();
        let second_log = EventLog::new();
        game.subscribe(Box::new(first_log.clone())).unwrap();
        game.subscribe(Box::new(second_log.clone())).unwrap();
        game.start().unwrap();

        let started = first_log.drain();
        assert_eq!(started[0], GameEvent::GameStarted);
        assert!(matches!(started[1], GameEvent::BoardStateChanged(_)));
        let started = second_log.drain();
        assert_eq!(started.len(), 1);
        assert!(matches!(started[0], GameEvent::BoardStateChanged(_)));

        game.attempt_move(Coord::new(0, 2), Disc::First).unwrap();
        let events = second_log.drain();
        let turn_changes = events
            .iter()
            .filter(|e| matches!(e, GameEvent::TurnChanged(_)))
            .count();
        assert_eq!(turn_changes, 1);
        assert!(events.contains(&GameEvent::ScoreUpdated { first: 4, second: 1 }));
        let events = first_log.drain();
        assert!(!events.iter().any(|e| matches!(e, GameEvent::TurnChanged(_))));
        assert!(events.contains(&GameEvent::TurnChangeInfo(Player::external(Disc::Second))));
    }
}
