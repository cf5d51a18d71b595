use colored::*;

const BAR_WIDTH: usize = 50;

/// Outcome of one game from the first strategy's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchWinner {
    Engine1,
    Engine2,
    Draw,
}

/// Running totals of a match between two strategies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStatistics {
    pub engine1_wins: u32,
    pub engine2_wins: u32,
    pub draws: u32,
    /// Sum over all games of engine 1's discs minus engine 2's discs.
    pub total_disc_diff: i64,
}

impl MatchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, winner: MatchWinner, disc_diff: i64) {
        match winner {
            MatchWinner::Engine1 => self.engine1_wins += 1,
            MatchWinner::Engine2 => self.engine2_wins += 1,
            MatchWinner::Draw => self.draws += 1,
        }
        self.total_disc_diff += disc_diff;
    }

    pub fn total_games(&self) -> u32 {
        self.engine1_wins + self.engine2_wins + self.draws
    }

    fn rate(&self, count: u32) -> f64 {
        match self.total_games() {
            0 => 0.0,
            total => count as f64 / total as f64 * 100.0,
        }
    }

    pub fn engine1_win_rate(&self) -> f64 {
        self.rate(self.engine1_wins)
    }

    pub fn engine2_win_rate(&self) -> f64 {
        self.rate(self.engine2_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Mean disc difference per game in engine 1's favor.
    pub fn average_disc_diff(&self) -> f64 {
        match self.total_games() {
            0 => 0.0,
            total => self.total_disc_diff as f64 / total as f64,
        }
    }

    pub fn print_final_results(&self, engine1_name: &str, engine2_name: &str) {
        let total_games = self.total_games();
        if total_games == 0 {
            println!("No games were played.");
            return;
        }

        println!("{}", "═".repeat(70).bright_cyan());
        println!("{:^70}", "MATCH RESULTS".bright_white().bold());
        println!("{}", "═".repeat(70).bright_cyan());
        println!();

        println!(
            "{} {}",
            "Total Games:".bright_white(),
            total_games.to_string().bright_yellow().bold()
        );
        println!(
            "{} {} / {} / {}",
            "Results:".bright_white(),
            format!("{} wins", self.engine1_wins).bright_green(),
            format!("{} draws", self.draws).bright_blue(),
            format!("{} losses", self.engine2_wins).bright_red()
        );
        println!();

        let name_width = engine1_name.len().max(engine2_name.len()).max("Draws".len());
        let bars = [
            (engine1_name, self.engine1_wins, self.engine1_win_rate(), Color::BrightGreen),
            ("Draws", self.draws, self.draw_rate(), Color::BrightBlue),
            (engine2_name, self.engine2_wins, self.engine2_win_rate(), Color::BrightRed),
        ];
        for (label, count, percentage, color) in bars {
            let filled = (count as f64 / total_games as f64 * BAR_WIDTH as f64) as usize;
            println!(
                "{:>width$} {}{} {:5.1}%",
                label.bright_cyan().bold(),
                "█".repeat(filled).color(color),
                "░".repeat(BAR_WIDTH - filled).bright_black(),
                percentage,
                width = name_width
            );
        }
        println!();

        let average = self.average_disc_diff();
        let average = format!("{average:+.2}");
        println!(
            "{} {}",
            "Average disc difference:".bright_white(),
            if self.total_disc_diff >= 0 {
                average.bright_green()
            } else {
                average.bright_red()
            }
        );
        println!("{}", "═".repeat(70).bright_cyan());
    }
}
