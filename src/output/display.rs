//! Display functions for game events and command results

use super::formatters::{create_progress_bar, shared_display};
use crate::commands::SimulationResult;
use crate::game::{Game, TurnOutcome};
use colored::Colorize;

/// Print the game banner and the roster
pub fn print_welcome(game: &Game) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "G H O S T".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nSpell toward a word without finishing one; words shorter than {} letters don't count.",
        game.min_word_length()
    );
    println!("Players:");
    for player in game.players() {
        println!("  • {}", player.name());
    }
}

/// Announce whose turn it is and where the string stands
pub fn print_turn_banner(name: &str, shared: &str) {
    println!(
        "\nString so far: {}",
        shared_display(shared).bright_yellow().bold()
    );
    println!("{}", format!("{name} to act").bright_black());
}

/// Print what one turn did
pub fn print_outcome(game: &Game, outcome: &TurnOutcome) {
    match outcome {
        TurnOutcome::Letter { seat, letter } => {
            println!(
                "{} plays '{}' → {}",
                game.player(*seat).name(),
                letter,
                shared_display(game.shared()).bright_yellow()
            );
        }
        TurnOutcome::CompletedWord { seat, word } => {
            println!(
                "{}",
                format!(
                    "{} spelled \"{}\" and is eliminated!",
                    game.player(*seat).name(),
                    word
                )
                .red()
                .bold()
            );
            println!("The string resets for a new round.");
        }
        TurnOutcome::Forfeited { seat } => {
            println!(
                "{}",
                format!("{} forfeits", game.player(*seat).name()).yellow()
            );
        }
        TurnOutcome::ChallengeUpheld {
            challenger,
            defender,
            revealed,
        } => {
            let challenger = game.player(*challenger).name();
            let defender = game.player(*defender).name();
            match revealed {
                Some(word) => println!(
                    "{}",
                    format!(
                        "{challenger} challenges; {defender} reveals \"{word}\", which is no word. {defender} is eliminated!"
                    )
                    .red()
                    .bold()
                ),
                None => println!(
                    "{}",
                    format!(
                        "{challenger} challenges; {defender} has no word. {defender} is eliminated!"
                    )
                    .red()
                    .bold()
                ),
            }
            println!("The string resets for a new round.");
        }
        TurnOutcome::ChallengeRebuffed {
            challenger,
            defender,
            revealed,
        } => {
            let challenger = game.player(*challenger).name();
            let defender = game.player(*defender).name();
            println!(
                "{}",
                format!(
                    "{challenger} challenges, but {defender} reveals \"{revealed}\". {challenger} is eliminated!"
                )
                .red()
                .bold()
            );
            println!("The string resets for a new round.");
        }
    }
}

/// Print the final standings
pub fn print_game_over(game: &Game) {
    println!("\n{}", "═".repeat(60).cyan());
    match game.winner() {
        Some(player) => println!(
            " {} ",
            format!("🏆 {} wins!", player.name()).bright_green().bold()
        ),
        None => println!(" {} ", "No players left standing, no winner".yellow()),
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Totals:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Average turns:    {}",
        format!("{:.1}", result.average_turns).bright_yellow().bold()
    );
    println!("   Words consumed:   {}", result.words_consumed);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Wins by seat:".bright_cyan().bold());
    for (name, count) in &result.wins {
        let pct = (*count as f64 / result.games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {name:<16} {} {count:4} ({pct:5.1}%)", bar.green());
    }
    if result.draws > 0 {
        println!("   {:<16} {:>46}", "(no winner)", result.draws);
    }
}
