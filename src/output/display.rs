//! Display functions for command results

use super::formatters::{create_progress_bar, format_positions};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::RoundStatus;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let report = &result.report;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    if !result.in_dictionary {
        println!("{}", "(not in the dictionary)".bright_black());
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in report.turns.iter().enumerate() {
        let answer = format_positions(turn);
        let answer = if turn.is_hit() {
            answer.green()
        } else {
            answer.red()
        };
        println!("\nTurn {}: '{}' → {}", i + 1, turn.letter as char, answer);

        if verbose {
            println!("  Candidates: {}", turn.candidates);
        }
    }

    println!("\n  Pattern: {}", report.pattern.to_string().bright_white().bold());
    println!("  Tried:   {}", report.tried);
    println!(
        "  Errors:  [{}] {}/{}",
        create_progress_bar(report.errors, report.max_errors, report.max_errors).red(),
        report.errors,
        report.max_errors
    );

    println!();
    match report.status {
        RoundStatus::Won => println!(
            "{}",
            format!("✅ Solved in {} letters!", report.turns.len())
                .green()
                .bold()
        ),
        RoundStatus::LostNoCandidates => println!(
            "{}",
            "❌ No dictionary word matches".red().bold()
        ),
        RoundStatus::LostErrorBudget => println!(
            "{}",
            format!("❌ Failed after {} errors", report.errors)
                .red()
                .bold()
        ),
        RoundStatus::Active => {}
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_errors: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Won:              {}",
        format!("{}", result.won).green()
    );
    println!(
        "   Out of errors:    {}",
        format!("{}", result.lost_error_budget).yellow()
    );
    println!(
        "   No candidates:    {}",
        format!("{}", result.lost_no_candidates).red()
    );
    println!(
        "   Average errors:   {}",
        format!("{:.2}", result.average_errors)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Errors per won round:".bright_cyan().bold());
    for errors in 0..max_errors {
        if let Some(&count) = result.distribution.get(&errors) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {errors}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.hardest.is_empty() {
        println!("\n🔥 {}", "Hardest words:".bright_cyan().bold());
        for (word, errors) in &result.hardest {
            println!("   {word} ({errors} errors)");
        }
    }
}
