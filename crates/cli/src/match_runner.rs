//! Automated matches between two strategies.

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::{RngExt, SeedableRng};
use reversi_rules::config::GameConfig;
use reversi_rules::disc::Disc;
use reversi_rules::game::Game;
use reversi_rules::observer::NullObserver;
use reversi_rules::player::Player;
use reversi_rules::strategy::Strategy;
use tracing::{debug, info};

use crate::statistics::{MatchStatistics, MatchWinner};

/// Settings for a series of games.
#[derive(Debug, Clone)]
pub struct MatchSettings {
    pub games: u32,
    /// Random legal moves played before the strategies take over.
    pub random_plies: u32,
    /// Seed for the random openings; drawn from the thread RNG when absent.
    pub seed: Option<u64>,
}

/// Plays `settings.games` games between `engine1` and `engine2`.
///
/// Colors alternate every game, with `engine1` playing `First` in even
/// games.
///
/// # Errors
///
/// Returns an error if a game cannot be set up or a move is rejected.
pub fn run_match(
    config: &GameConfig,
    engine1: Strategy,
    engine2: Strategy,
    settings: &MatchSettings,
) -> anyhow::Result<MatchStatistics> {
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = SmallRng::seed_from_u64(seed);
    info!(seed, games = settings.games, %engine1, %engine2, "starting match");

    let progress_bar = create_progress_bar(settings.games as u64)?;
    let mut statistics = MatchStatistics::new();

    for game_id in 0..settings.games {
        let engine1_disc = if game_id % 2 == 0 {
            Disc::First
        } else {
            Disc::Second
        };
        let (first, second) = match engine1_disc {
            Disc::First => (engine1, engine2),
            Disc::Second => (engine2, engine1),
        };

        let result = play_game(config, first, second, settings.random_plies, &mut rng);
        let game = match result {
            Ok(game) => game,
            Err(e) => {
                progress_bar.finish_and_clear();
                return Err(e);
            }
        };

        let engine1_discs = game.score(engine1_disc) as i64;
        let engine2_discs = game.score(engine1_disc.opposite()) as i64;
        let winner = match game.winner().map(Player::disc) {
            Some(disc) if disc == engine1_disc => MatchWinner::Engine1,
            Some(_) => MatchWinner::Engine2,
            None => MatchWinner::Draw,
        };
        debug!(game_id, ?winner, engine1_discs, engine2_discs, "game finished");

        statistics.add_result(winner, engine1_discs - engine2_discs);
        progress_bar.inc(1);
    }

    progress_bar.finish_and_clear();
    Ok(statistics)
}

/// Plays one game to the end and returns the final position.
fn play_game(
    config: &GameConfig,
    first: Strategy,
    second: Strategy,
    random_plies: u32,
    rng: &mut SmallRng,
) -> anyhow::Result<Game> {
    let mut game = config.build(
        Player::automated(Disc::First, first),
        Player::automated(Disc::Second, second),
    )?;
    game.subscribe(Box::new(NullObserver))?;
    game.start()?;

    for _ in 0..random_plies {
        if game.is_game_over() {
            break;
        }
        let disc = game.current_disc();
        let Some(at) = game.legal_moves(disc).into_iter().choose(rng) else {
            break;
        };
        game.attempt_move(at, disc)?;
    }

    while !game.is_game_over() {
        let player = game.current_player().clone();
        player.play_turn(&mut game)?;
    }
    Ok(game)
}

/// Creates a styled progress bar for match tracking.
fn create_progress_bar(total_games: u64) -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new(total_games);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan}] {pos}/{len} ({percent}%)")?
            .progress_chars("█▉▊▋▌▍▎▏ "),
    );
    Ok(progress_bar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_rules::board::Topology;

    #[test]
    fn test_match_plays_every_game() {
        let settings = MatchSettings {
            games: 4,
            random_plies: 2,
            seed: Some(7),
        };
        let stats = run_match(
            &GameConfig::default(),
            Strategy::CaptureCorner,
            Strategy::MaximumCapture,
            &settings,
        )
        .unwrap();
        assert_eq!(stats.total_games(), 4);
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = GameConfig::for_topology(Topology::Square);
        let settings = MatchSettings {
            games: 2,
            random_plies: 6,
            seed: Some(42),
        };
        let a = run_match(&config, Strategy::AvoidNextToCorners, Strategy::MaximumCapture, &settings)
            .unwrap();
        let b = run_match(&config, Strategy::AvoidNextToCorners, Strategy::MaximumCapture, &settings)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mirror_match_without_randomness() {
        // Identical deterministic strategies on alternating colors win one
        // game each.
        let settings = MatchSettings {
            games: 2,
            random_plies: 0,
            seed: Some(0),
        };
        let stats = run_match(
            &GameConfig::for_topology(Topology::Square),
            Strategy::MaximumCapture,
            Strategy::MaximumCapture,
            &settings,
        )
        .unwrap();
        assert_eq!(stats.engine1_wins, 1);
        assert_eq!(stats.engine2_wins, 1);
        assert_eq!(stats.total_disc_diff, 0);
    }
}
