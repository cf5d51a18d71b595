use reversi_rules::board::Topology;
use reversi_rules::config::GameConfig;
use reversi_rules::disc::Disc;
use reversi_rules::game::{Game, Move};
use reversi_rules::observer::NullObserver;
use reversi_rules::player::Player;
use reversi_rules::strategy::Strategy;

/// Collects every position of a game played by `driver` against itself.
fn positions(config: GameConfig, driver: Strategy) -> Vec<Game> {
    let mut game = config
        .build(
            Player::automated(Disc::First, driver),
            Player::automated(Disc::Second, driver),
        )
        .unwrap();
    game.subscribe(Box::new(NullObserver)).unwrap();
    game.start().unwrap();

    let mut seen = Vec::new();
    while !game.is_game_over() {
        seen.push(game.snapshot());
        let player = game.current_player().clone();
        player.play_turn(&mut game).unwrap();
    }
    seen
}

#[test]
fn test_maximum_capture_is_never_beaten() {
    for config in [
        GameConfig::default(),
        GameConfig::for_topology(Topology::Square),
    ] {
        for game in positions(config, Strategy::CaptureCorner) {
            let disc = game.current_disc();
            let Move::Place(at) = Strategy::MaximumCapture.choose_move(&game, disc) else {
                panic!("no move chosen although {disc} can move");
            };
            let best = game.captures(at, disc).len();
            for other in game.legal_moves(disc) {
                assert!(game.captures(other, disc).len() <= best);
            }
        }
    }
}

#[test]
fn test_capture_corner_takes_available_corners() {
    for config in [
        GameConfig::default(),
        GameConfig::for_topology(Topology::Square),
    ] {
        for game in positions(config, Strategy::MaximumCapture) {
            let disc = game.current_disc();
            let corner_available = game
                .legal_moves(disc)
                .iter()
                .any(|&at| game.board().is_corner(at));
            let Move::Place(at) = Strategy::CaptureCorner.choose_move(&game, disc) else {
                panic!("no move chosen although {disc} can move");
            };
            assert_eq!(game.board().is_corner(at), corner_available);
        }
    }
}

#[test]
fn test_avoid_corners_prefers_safe_cells() {
    let config = GameConfig {
        size: 5,
        ..GameConfig::default()
    };
    for game in positions(config, Strategy::MaximumCapture) {
        let disc = game.current_disc();
        let board = game.board();
        let corners = board.corners();
        let touches_corner =
            |at| board.neighbors(at).iter().any(|n| corners.contains(n));
        let safe_exists = game.legal_moves(disc).into_iter().any(|at| !touches_corner(at));

        let Move::Place(at) = Strategy::AvoidNextToCorners.choose_move(&game, disc) else {
            panic!("no move chosen although {disc} can move");
        };
        assert_eq!(!touches_corner(at), safe_exists);
    }
}
