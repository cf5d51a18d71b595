//! Interactive play in the terminal.

use std::fmt;
use std::str::FromStr;

use colored::Colorize;
use reversi_rules::config::GameConfig;
use reversi_rules::coord::Coord;
use reversi_rules::disc::Disc;
use reversi_rules::game::{Game, Move};
use reversi_rules::player::Player;
use reversi_rules::strategy::Strategy;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::display::{TerminalObserver, disc_label, print_game};

/// Who sits at a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Computer(Strategy),
}

impl Seat {
    fn player(self, disc: Disc) -> Player {
        match self {
            Seat::Human => Player::external(disc),
            Seat::Computer(strategy) => Player::automated(disc, strategy),
        }
    }
}

impl FromStr for Seat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("human") {
            return Ok(Seat::Human);
        }
        s.parse::<Strategy>()
            .map(Seat::Computer)
            .map_err(|e| format!("{e}, or human"))
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => write!(f, "human"),
            Seat::Computer(strategy) => write!(f, "{strategy}"),
        }
    }
}

/// A line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Place(Coord),
    Pass,
    Moves,
    Hint,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" => Err("Type a move such as '2 3', or 'help'".to_string()),
            "pass" | "p" => Ok(Command::Pass),
            "moves" | "m" => Ok(Command::Moves),
            "hint" => Ok(Command::Hint),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => other
                .parse::<Coord>()
                .map(Command::Place)
                .map_err(|_| format!("Unknown command: {other}")),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <row> <col>   place a disc, e.g. '2 3' or '2,3'");
    println!("  pass          pass the turn");
    println!("  moves         list your legal moves");
    println!("  hint          suggest a move");
    println!("  help          show this help");
    println!("  quit          leave the game");
    println!("Columns are counted from 0 at the left end of each row.");
    println!();
}

fn format_moves(moves: &[Coord]) -> String {
    if moves.is_empty() {
        return "none".to_string();
    }
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Main interactive loop.
///
/// Computer seats move on their own; human seats are prompted for commands
/// until the game ends or a human quits.
///
/// # Arguments
///
/// * `config` - Board and rule settings
/// * `seats` - Who plays `First` and `Second`
pub fn ui_loop(config: &GameConfig, seats: [Seat; 2]) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut game = config.build(seats[0].player(Disc::First), seats[1].player(Disc::Second))?;
    game.subscribe(Box::new(TerminalObserver::primary()))?;
    game.subscribe(Box::new(TerminalObserver::seat()))?;

    println!(
        "{} board, size {}: {} vs {}",
        config.topology, config.size, seats[0], seats[1]
    );
    game.start()?;

    while !game.is_game_over() {
        let player = game.current_player().clone();
        if player.is_automated() {
            let mv = player.play_turn(&mut game)?;
            println!("{} plays {mv}", disc_label(player.disc()));
            println!();
            continue;
        }

        print_game(&game, true);
        let prompt = format!("{}> ", player.disc().to_char());
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        let _ = rl.add_history_entry(line.as_str());

        match line.parse::<Command>() {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Help) => print_help(),
            Ok(Command::Moves) => {
                let moves = game.legal_moves(player.disc());
                println!("Legal moves: {}\n", format_moves(&moves));
            }
            Ok(Command::Hint) => {
                let hint = Strategy::MaximumCapture.choose_move(&game, player.disc());
                println!("Hint: {hint}\n");
            }
            Ok(Command::Pass) => submit(&mut game, &player, Move::Pass),
            Ok(Command::Place(at)) => submit(&mut game, &player, Move::Place(at)),
            Err(message) => println!("{message}\n"),
        }
    }

    print_game(&game, false);
    Ok(())
}

fn submit(game: &mut Game, player: &Player, mv: Move) {
    if let Err(err) = player.submit(game, mv) {
        println!("{}\n", err.to_string().bright_red());
    }
}
