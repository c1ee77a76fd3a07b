//! Colored console rendering and pacing.
//!
//! Implements [`MatchView`] with crossterm styling: blue X, red O,
//! yellow narration, short pauses between beats. Purely presentational;
//! the engine never depends on anything here.

use crate::game::turn::{TurnKind, TurnOutcome};
use crate::game::view::MatchView;
use crate::game::{Board, Cell, MatchResult, Player, Square, TossCall};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};
use std::time::Duration;

const TITLE: &str = r#"
  _____     _           ____      _     _
 | ____|___| |__   ___ / ___|_ __(_) __| |
 |  _| / __| '_ \ / _ \ |  _| '__| |/ _` |
 | |__| (__| | | | (_) | |_| | |  | | (_| |
 |_____\___|_| |_|\___/ \____|_|  |_|\__,_|
"#;

/// Console implementation of the match view.
pub struct ConsoleView {
    /// When false, all pacing sleeps are skipped.
    pacing: bool,
}

impl ConsoleView {
    /// Creates a console view; `pacing` enables the dramatic pauses.
    pub fn new(pacing: bool) -> Self {
        Self { pacing }
    }

    /// Prints the title banner and the rules, then waits for Enter.
    pub fn welcome(&mut self) -> anyhow::Result<()> {
        self.clear();
        println!("{}", TITLE.cyan().bold());
        println!(" Welcome to the EchoGrid. Where every move can echo into victory... or defeat.");
        println!(" The rules are different here. Victory requires luck, guts, and strategy.");
        println!();
        println!(" Each turn starts with a coin toss. Call it right and the turn is yours to");
        println!(" spend on a {} or a {} of an enemy square. Call it wrong and you", "placement".green(), "conquest".red());
        println!(" may only place. A conquest is never free: the defender calls a second toss,");
        println!(" and a correct call holds the square. Aim at anything other than an enemy");
        println!(" square and the turn is forfeit. Three in a row wins, as ever.");
        println!();
        print!(" Press Enter to begin...");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }

    fn clear(&self) {
        let _ = execute!(std::io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }

    fn pause(&self, millis: u64) {
        if self.pacing {
            std::thread::sleep(Duration::from_millis(millis));
        }
    }

    fn styled_symbol(player: Player) -> crossterm::style::StyledContent<String> {
        let symbol = player.symbol().to_string();
        match player {
            Player::One => symbol.blue().bold(),
            Player::Two => symbol.red().bold(),
        }
    }

    fn styled_name(player: Player, name: &str) -> crossterm::style::StyledContent<String> {
        match player {
            Player::One => name.to_string().blue(),
            Player::Two => name.to_string().red(),
        }
    }
}

impl MatchView for ConsoleView {
    fn board(&mut self, board: &Board) {
        println!();
        for (i, cell) in Cell::ALL.iter().enumerate() {
            if i % 3 == 0 {
                print!("  ");
            }
            match board.get(*cell) {
                Square::Empty => print!("{}", (i + 1).to_string().grey()),
                Square::Owned(player) => print!("{}", Self::styled_symbol(player)),
            }
            if i % 3 < 2 {
                print!(" | ");
            } else {
                println!();
                if i < 8 {
                    println!("  --+---+--");
                }
            }
        }
        println!();
    }

    fn first_roll(&mut self, player: Player, name: &str, roll: u8) {
        println!(
            " {} rolls the die... {}",
            Self::styled_name(player, name),
            roll.to_string().yellow().bold()
        );
        self.pause(600);
    }

    fn roll_tie(&mut self, roll: u8) {
        println!(" Both rolled {roll} - the dice demand a rematch.");
        self.pause(600);
    }

    fn first_player(&mut self, player: Player, name: &str) {
        println!(
            " {} takes the first turn!",
            Self::styled_name(player, name)
        );
        self.pause(900);
    }

    fn coin_result(&mut self, player: Player, call: TossCall, drawn: TossCall, kind: TurnKind) {
        println!(
            " {} calls {call}... the coin lands {drawn}.",
            Self::styled_name(player, player.label()),
        );
        match kind {
            TurnKind::Power => println!(" {}", "A power turn: place or conquer.".green()),
            TurnKind::Normal => println!(" A normal turn: place only."),
        }
        self.pause(900);
    }

    fn turn_outcome(&mut self, player: Player, outcome: &TurnOutcome) {
        let symbol = Self::styled_symbol(player);
        match outcome {
            TurnOutcome::Placed(cell) => {
                println!(" {symbol} claims the {} square.", cell.label());
            }
            TurnOutcome::Conquered(cell) => {
                println!(
                    " {}",
                    format!("The defense fails! {} square falls to the attacker.", cell.label())
                        .yellow()
                );
            }
            TurnOutcome::DefenseHeld(cell) => {
                println!(
                    " {}",
                    format!("The defense holds! The {} square stands.", cell.label()).green()
                );
            }
            TurnOutcome::InvalidTargetForfeited(cell) => {
                println!(
                    " {}",
                    format!(
                        "The {} square is no enemy hold. The attack fizzles and the turn is lost.",
                        cell.label()
                    )
                    .grey()
                );
            }
        }
        self.pause(900);
    }

    fn result(&mut self, result: &MatchResult) {
        println!();
        match result {
            MatchResult::Won(player) => {
                println!(
                    " {}",
                    format!("{} ({}) wins the EchoGrid!", player.label(), player.symbol())
                        .green()
                        .bold()
                );
            }
            MatchResult::Draw => {
                println!(" {}", "The grid is full. A draw - the echoes fade.".yellow());
            }
        }
    }
}
