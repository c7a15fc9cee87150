//! Interactive terminal duel.
//!
//! Implements the [`GameView`] seam with colored terminal output and a
//! dialoguer menu offering exactly the actions the current phase permits.

use std::thread::sleep;
use std::time::Duration;

use colored::Colorize;
use dialoguer::Select;

use dice_duel::{Action, DiceDuelBuilder, GameView, Phase, PlayerId, Roll};

/// Delay between tie-break display updates.
const PACING: Duration = Duration::from_millis(900);

struct TerminalView;

impl GameView for TerminalView {
    fn render(&mut self, player: PlayerId, roll: Option<Roll>, score: u32) {
        let shown = match roll {
            Some(roll) => roll.to_string(),
            None => "-".to_string(),
        };
        println!("  {player}  roll: {shown}  score: {score}");
    }

    fn set_active(&mut self, player: Option<PlayerId>) {
        if let Some(player) = player {
            println!("  {}", format!("> {player} to act").cyan());
        }
    }

    fn set_message(&mut self, text: &str) {
        println!("{}", text.bold());
    }

    fn reset(&mut self) {
        println!("{}", "========== NEW GAME ==========".green());
    }

    fn pacing_pause(&mut self) {
        sleep(PACING);
    }
}

fn label(action: Action) -> &'static str {
    match action {
        Action::Roll => "Roll",
        Action::DoubleOrNothing => "Double or nothing",
        Action::Reset => "Reset game",
    }
}

fn main() {
    env_logger::init();

    let mut view = TerminalView;
    let mut duel = DiceDuelBuilder::new().build(rand::random());
    duel.request_reset(&mut view);

    loop {
        if let Phase::GameOver(winner) = duel.phase() {
            println!("{}", format!("{winner} takes the duel!").yellow().bold());
        }

        let actions = duel.legal_actions();
        let mut items: Vec<&str> = actions.iter().map(|a| label(*a)).collect();
        items.push("Quit");

        let choice = Select::new()
            .with_prompt("Your move")
            .items(&items)
            .default(0)
            .interact()
            .unwrap();

        if choice == actions.len() {
            break;
        }

        // Only legal actions are offered, so these cannot fail.
        let outcome = match actions[choice] {
            Action::Roll => duel.request_roll(&mut view),
            Action::DoubleOrNothing => duel.request_double_or_nothing(&mut view),
            Action::Reset => {
                duel.request_reset(&mut view);
                Ok(())
            }
        };

        if let Err(err) = outcome {
            println!("{}", err.to_string().red());
        }
    }
}
