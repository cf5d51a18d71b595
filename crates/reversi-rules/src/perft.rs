use crate::config::GameConfig;
use crate::disc::Disc;
use crate::error::Result;
use crate::game::Game;
use crate::player::Player;

/// Executes a perft run from the starting position of `config`.
///
/// # Arguments
///
/// * `config` - Board topology, size and rule policies to start from.
/// * `depth` - Number of plies to expand. A depth of `1` counts the
///   immediate legal moves.
///
/// # Returns
///
/// The number of leaf nodes at `depth`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `config` is invalid.
pub fn perft_root(config: &GameConfig, depth: u32) -> Result<u64> {
    let game = config.build(
        Player::external(Disc::First),
        Player::external(Disc::Second),
    )?;
    Ok(perft(&game, depth))
}

/// Counts the leaf nodes `depth` plies below `game`.
///
/// A side without a legal move passes without consuming a ply; a position
/// where neither side can move is a leaf regardless of the remaining depth.
pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    count(game, game.current_disc(), depth)
}

fn count(game: &Game, disc: Disc, depth: u32) -> u64 {
    let moves = game.legal_moves(disc);
    if moves.is_empty() {
        return if game.has_legal_move(disc.opposite()) {
            count(game, disc.opposite(), depth)
        } else {
            1
        };
    }
    if depth <= 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for at in moves {
        if let Some(next) = game.simulate_move(at, disc) {
            nodes += count(&next, next.current_disc(), depth - 1);
        }
    }
    nodes
}
