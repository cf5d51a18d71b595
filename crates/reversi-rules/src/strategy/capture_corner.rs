use crate::coord::Coord;
use crate::disc::Disc;
use crate::game::Game;

/// Picks a legal corner move.
///
/// With several corners available each one is simulated and the corner that
/// leaves `disc` with the most discs is taken; the first one found wins ties.
pub(super) fn select(game: &Game, disc: Disc) -> Option<Coord> {
    let board = game.board();
    let corners: Vec<Coord> = board
        .coords()
        .into_iter()
        .filter(|&coord| board.is_corner(coord) && game.is_valid_move(coord, disc))
        .collect();

    match corners.as_slice() {
        [] => None,
        [only] => Some(*only),
        _ => {
            let mut best: Option<(Coord, usize)> = None;
            for &corner in &corners {
                let Some(after) = game.simulate_move(corner, disc) else {
                    continue;
                };
                let score = after.score(disc);
                if best.is_none_or(|(_, top)| score > top) {
                    best = Some((corner, score));
                }
            }
            best.map(|(at, _)| at)
        }
    }
}
