use crate::coord::Coord;
use crate::disc::Disc;
use crate::game::Game;

/// Picks the legal move that flips the most discs, ties going to the
/// smallest `(row, col)`.
pub(super) fn select(game: &Game, disc: Disc) -> Option<Coord> {
    let mut best: Option<(Coord, usize)> = None;
    for coord in game.board().coords() {
        let flips = game.captures(coord, disc).len();
        if flips == 0 {
            continue;
        }
        let better = match best {
            None => true,
            Some((at, most)) => flips > most || (flips == most && coord < at),
        };
        if better {
            best = Some((coord, flips));
        }
    }
    best.map(|(at, _)| at)
}
