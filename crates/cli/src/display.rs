//! Terminal rendering of boards and game events.

use colored::{ColoredString, Colorize};
use reversi_rules::board::{Board, Topology};
use reversi_rules::coord::Coord;
use reversi_rules::disc::{Cell, Disc};
use reversi_rules::game::Game;
use reversi_rules::observer::GameObserver;
use reversi_rules::player::Player;

/// Colored name of a disc color, e.g. `First (X)`.
pub fn disc_label(disc: Disc) -> ColoredString {
    let label = format!("{disc} ({})", disc.to_char());
    match disc {
        Disc::First => label.bright_green(),
        Disc::Second => label.bright_yellow(),
    }
}

fn cell_symbol(cell: Cell, marked: bool) -> ColoredString {
    match cell {
        Cell::First => "X".bright_green(),
        Cell::Second => "O".bright_yellow(),
        Cell::Empty if marked => "·".bright_cyan(),
        Cell::Empty => "-".bright_black(),
    }
}

/// Draws `board` with row labels, marking the empty cells in `marks`.
///
/// Hex rows are indented so the board reads as a hexagon; every row is
/// numbered from column 0 at its left end.
pub fn render_board(board: &dyn Board, marks: &[Coord]) -> String {
    let rows = board.rows();
    let mut out = String::new();

    if board.topology() == Topology::Square {
        let header: Vec<String> = (0..board.size()).map(|c| (c % 10).to_string()).collect();
        out.push_str(&format!("     {}\n", header.join(" ")));
    }

    for row in 0..rows {
        let row_index = row as i32;
        let len = board.row_len(row_index);
        let indent = match board.topology() {
            Topology::Hex => rows - len,
            Topology::Square => 0,
        };
        let cells: Vec<String> = (0..len as i32)
            .map(|col| {
                let coord = Coord::new(row_index, col);
                let cell = board.get(coord).unwrap_or_default();
                cell_symbol(cell, marks.contains(&coord)).to_string()
            })
            .collect();
        out.push_str(&format!(
            "  {row:>2} {}{}\n",
            " ".repeat(indent),
            cells.join(" ")
        ));
    }
    out
}

/// Prints the board, the side to move and the score.
pub fn print_game(game: &Game, show_moves: bool) {
    let marks = if show_moves && !game.is_game_over() {
        game.legal_moves(game.current_disc())
    } else {
        Vec::new()
    };
    println!("{}", render_board(game.board(), &marks));

    let (first, second) = game.scores();
    println!(
        "  {} {}   {} {}",
        disc_label(Disc::First),
        format!("{first:2}").bold(),
        disc_label(Disc::Second),
        format!("{second:2}").bold()
    );
    if !game.is_game_over() {
        println!("  {} to move", disc_label(game.current_disc()));
    }
    println!();
}

/// Reports game events on standard output.
///
/// One observer is attached per seat so each player is told when it is
/// their turn. Only the primary observer reports events that concern both
/// players, so nothing is printed twice.
#[derive(Debug, Clone, Copy)]
pub struct TerminalObserver {
    primary: bool,
}

impl TerminalObserver {
    pub fn primary() -> Self {
        TerminalObserver { primary: true }
    }

    pub fn seat() -> Self {
        TerminalObserver { primary: false }
    }
}

impl GameObserver for TerminalObserver {
    fn on_game_started(&mut self) {
        println!("{}", "Game started".bright_white().bold());
    }

    fn on_turn_changed(&mut self, player: &Player) {
        if !player.is_automated() {
            println!("{} your turn", disc_label(player.disc()));
        }
    }

    fn on_no_valid_move(&mut self, player: &Player) {
        if self.primary {
            println!(
                "{} {}",
                disc_label(player.disc()),
                "has no legal move and passes".bright_red()
            );
        }
    }

    fn on_game_ended(&mut self, winner: Option<&Player>) {
        if !self.primary {
            return;
        }
        println!("{}", "*** Game Over ***".bright_red().bold());
        match winner {
            Some(player) => println!("{} wins!", disc_label(player.disc())),
            None => println!("{}", "Draw".bright_cyan()),
        }
    }
}
