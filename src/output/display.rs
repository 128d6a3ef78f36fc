//! Display functions for command results

use super::formatters::{create_progress_bar, percent, spaced_letters};
use crate::commands::{ListResult, LookupResult, ShowResult, StatsResult};
use crate::core::Word;
use colored::Colorize;

/// Print a masked puzzle
pub fn print_show_result(result: &ShowResult) {
    let puzzle = &result.puzzle;

    println!("\n{}", "─".repeat(60).cyan());
    let origin = if result.random { " (random)" } else { "" };
    println!(
        "Puzzle {} of {}{}",
        format!("#{}", puzzle.index).bright_yellow().bold(),
        result.total_puzzles,
        origin.bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\nFind the four letters hidden in every word ({} marks a hidden letter):\n",
        result.placeholder.to_string().bright_cyan()
    );
    for masked in &puzzle.masked {
        println!("   {}", spaced_letters(masked).bold());
    }

    if result.reveal {
        println!(
            "\n{} {}",
            "Answer:".green().bold(),
            puzzle.answer.as_str().to_uppercase().bright_yellow().bold()
        );
        let words: Vec<&str> = puzzle.words.iter().map(Word::text).collect();
        println!("{} {}", "Words: ".green(), words.join(", "));
    }
    println!();
}

/// Print the list of valid puzzles
pub fn print_list_result(result: &ListResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "VALID PUZZLES:".bright_cyan().bold(),
        result.total_puzzles.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for entry in &result.entries {
        println!(
            "{:>6}  {}  {}",
            entry.index,
            entry.answer.bright_yellow(),
            entry.words.join(", ")
        );
    }

    if result.entries.len() < result.total_puzzles {
        println!(
            "\n{}",
            format!(
                "Showing {} of {} puzzles",
                result.entries.len(),
                result.total_puzzles
            )
            .bright_black()
        );
    }
}

/// Print a single answer lookup
pub fn print_lookup_result(result: &LookupResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Answer: {}",
        result.answer.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n   Words ({}): {}", result.words.len(), result.words.join(", "));
    if let Some((a, b, distance)) = &result.closest_pair {
        println!("   Closest pair: {a} / {b} (distance {distance})");
    }

    match result.puzzle_index {
        Some(index) => println!(
            "\n{}",
            format!("✅ Valid puzzle #{index}").green().bold()
        ),
        None => println!("\n{}", "❌ Not a valid puzzle".red().bold()),
    }
}

/// Print word list and validation statistics
pub fn print_stats_result(result: &StatsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📖 {}", "Word list:".bright_cyan().bold());
    println!("   Entries read:      {}", result.entries_read);
    println!(
        "   Six-letter words:  {}",
        result.six_letter_words.to_string().bright_yellow()
    );
    println!("   Skipped:           {}", result.skipped);

    println!("\n🧩 {}", "Answers:".bright_cyan().bold());
    println!("   Answer groups:     {}", result.answer_groups);
    println!(
        "   With {}+ words:     {}",
        result.config.min_words, result.large_enough
    );
    println!(
        "   Valid puzzles:     {} ({:.2}% of groups)",
        result.valid_puzzles.to_string().green().bold(),
        percent(result.valid_puzzles, result.answer_groups)
    );
    println!(
        "   Rules:             {}-{} words, distance >= {}{}",
        result.config.min_words,
        result.config.max_words,
        result.config.min_distance,
        if result.config.distinct_last_letter {
            ", distinct last letters"
        } else {
            ""
        }
    );

    println!("\n📈 {}", "Puzzle sizes:".bright_cyan().bold());
    for (&size, &count) in &result.size_distribution {
        let pct = percent(count, result.valid_puzzles);
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {size}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!(
        "   Index build:       {:.3}s",
        result.build_time.as_secs_f64()
    );
    println!(
        "   Validation:        {:.3}s",
        result.validate_time.as_secs_f64()
    );
}
