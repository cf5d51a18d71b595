use crate::coord::Coord;
use crate::disc::Disc;
use crate::game::Game;

/// Picks the first legal move, in row-major order, that has no corner among
/// its neighbors.
pub(super) fn select(game: &Game, disc: Disc) -> Option<Coord> {
    let board = game.board();
    let corners = board.corners();
    board.coords().into_iter().find(|&coord| {
        game.is_valid_move(coord, disc)
            && !board
                .neighbors(coord)
                .iter()
                .any(|neighbor| corners.contains(neighbor))
    })
}
