//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::MAX_ATTEMPTS;
use crate::game::messages::{GAME_LOST, GAME_WON, reveal_answer};
use crate::game::{RoundStatus, Session};
use crate::output::formatters::share_grid;
use crate::output::{print_evaluated_guess, print_keyboard, print_streak};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// round cannot be started.
pub fn run_simple(session: &mut Session<'_>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wriddle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in six tries.");
    println!("After each guess the letters are colored:\n");
    println!("  - {} right letter, right spot", " G ".white().on_green());
    println!("  - {} right letter, wrong spot", " Y ".white().on_truecolor(255, 140, 0));
    println!("  - {} not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    print_streak(session.streak());

    loop {
        let turn = session.round().history().len() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_ATTEMPTS}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.new_round().map_err(|e| e.to_string())?;
                println!("\n🔄 New word chosen!\n");
                continue;
            }
            _ => {}
        }

        let submission = match session.submit(&input) {
            Ok(submission) => submission,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        print_evaluated_guess(&submission.evaluated);

        if !submission.status.is_over() {
            print_keyboard(&session.keyboard());
            continue;
        }

        let round = session.round();
        println!("\n{}", "═".repeat(50).bright_cyan());
        if submission.status == RoundStatus::Won {
            if let Some(message) = &submission.victory_message {
                println!("  {}", message.bright_yellow().bold());
            }
            println!("  {}", GAME_WON.bright_green().bold());
        } else {
            println!("  {}", GAME_LOST.bright_red().bold());
            println!("  {}", reveal_answer(round.answer().text()));
        }
        println!("\n{}", share_grid(round.history(), round.status()));
        println!("{}", "═".repeat(50).bright_cyan());
        print_streak(session.streak());
        println!();

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                session.new_round().map_err(|e| e.to_string())?;
                println!("\n🔄 New word chosen!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
