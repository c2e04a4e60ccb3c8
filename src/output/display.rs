//! Display functions for command results

use super::formatters::{create_progress_bar, format_indices, format_tiles};
use crate::commands::CheckResult;
use crate::core::{MAX_TILES_PER_WORD, SolveResult};
use colored::Colorize;

/// Print a solved puzzle, grouped by tile count
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    if result.is_empty() {
        println!("\n{}", "No words found.".yellow());
        return;
    }

    for tile_count in 1..=MAX_TILES_PER_WORD {
        let bucket = result.bucket(tile_count);
        if bucket.is_empty() {
            continue;
        }

        println!("\n{}", "─".repeat(60).cyan());
        println!(
            " {} ({})",
            format!("{tile_count} tile combinations").bright_cyan().bold(),
            bucket.len()
        );
        println!("{}", "─".repeat(60).cyan());

        for entry in bucket {
            let marker = if entry.is_questionable() {
                format!(" {}", "(review needed)".yellow())
            } else {
                String::new()
            };

            if verbose {
                println!(
                    "  {:<20} {} {}{marker}",
                    entry.word.bright_yellow().bold(),
                    format_tiles(&entry.tiles),
                    format_indices(&entry.tile_indices).bright_black()
                );
            } else {
                println!(
                    "  {:<20} {}{marker}",
                    entry.word.bright_yellow().bold(),
                    format_tiles(&entry.tiles)
                );
            }
        }
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "   Words found:      {}",
        result.total_found().to_string().bright_yellow().bold()
    );
    println!(
        "   Review needed:    {}",
        result.questionable_count().to_string().yellow()
    );
    println!("   Dictionary size:  {}", result.dictionary_size());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let largest = (1..=MAX_TILES_PER_WORD)
        .map(|n| result.bucket(n).len())
        .max()
        .unwrap_or(0);
    for tile_count in 1..=MAX_TILES_PER_WORD {
        let count = result.bucket(tile_count).len();
        let bar = create_progress_bar(count as f64, largest as f64, 40);
        println!("   {tile_count}: {} {count:4}", bar.green());
    }
}

/// Print a single-word lookup
pub fn print_check_result(result: &CheckResult) {
    if result.is_word() {
        let sources = result
            .sources
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{} {} ({sources})",
            "✅".green(),
            result.word.bright_yellow().bold()
        );
    } else {
        println!(
            "{} {} is not in the active dictionary",
            "❌".red(),
            result.word.bold()
        );
    }
}
