//! Notifications pushed from the engine to external views and controllers.
//!
//! Observers are registered on a [`Game`](crate::game::Game) before it starts
//! and are called synchronously, in registration order, from inside the
//! engine operation that caused the event. The observer registered at index
//! `i` is the one attached to the player seated at index `i`; events aimed at
//! a single player are delivered only to that observer.

use crate::board::BoardSnapshot;
use crate::player::Player;

/// Receives game events. Every method defaults to doing nothing.
pub trait GameObserver {
    /// The board changed; `snapshot` is the full board after the change.
    fn on_board_state_changed(&mut self, _snapshot: &BoardSnapshot) {}

    /// It is now `player`'s turn. Only sent to that player's own observer.
    fn on_turn_changed(&mut self, _player: &Player) {}

    /// The player to act changed. Sent to every observer.
    fn on_turn_change_info(&mut self, _player: &Player) {}

    /// Disc counts after a placement.
    fn on_score_updated(&mut self, _first: usize, _second: usize) {}

    /// The game started. Only sent to the first registered observer.
    fn on_game_started(&mut self) {}

    /// `player` had no legal move and the engine passed on their behalf.
    fn on_no_valid_move(&mut self, _player: &Player) {}

    /// The game ended; `winner` is `None` for a draw.
    fn on_game_ended(&mut self, _winner: Option<&Player>) {}
}

/// A recorded notification, as captured by [`EventLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    BoardStateChanged(BoardSnapshot),
    TurnChanged(Player),
    TurnChangeInfo(Player),
    ScoreUpdated { first: usize, second: usize },
    GameStarted,
    NoValidMove(Player),
    GameEnded(Option<Player>),
}

/// Observer that appends every notification to a shared list.
///
/// The list is shared through an `Rc<RefCell<_>>` so the caller can keep a
/// handle after moving the observer into the game.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: std::rc::Rc<std::cell::RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event recorded so far.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns every event recorded so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    fn push(&self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl GameObserver for EventLog {
    fn on_board_state_changed(&mut self, snapshot: &BoardSnapshot) {
        self.push(GameEvent::BoardStateChanged(snapshot.clone()));
    }

    fn on_turn_changed(&mut self, player: &Player) {
        self.push(GameEvent::TurnChanged(player.clone()));
    }

    fn on_turn_change_info(&mut self, player: &Player) {
        self.push(GameEvent::TurnChangeInfo(player.clone()));
    }

    fn on_score_updated(&mut self, first: usize, second: usize) {
        self.push(GameEvent::ScoreUpdated { first, second });
    }

    fn on_game_started(&mut self) {
        self.push(GameEvent::GameStarted);
    }

    fn on_no_valid_move(&mut self, player: &Player) {
        self.push(GameEvent::NoValidMove(player.clone()));
    }

    fn on_game_ended(&mut self, winner: Option<&Player>) {
        self.push(GameEvent::GameEnded(winner.cloned()));
    }
}

/// Observer that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
