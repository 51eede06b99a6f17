//! Benchmark command
//!
//! Plays the engine against every eligible dictionary word.

use crate::dictionary::Dictionary;
use crate::solver::{GuessEngine, KnownWord, RoundStatus};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub won: usize,
    pub lost_no_candidates: usize,
    pub lost_error_budget: usize,
    /// Average errors over won rounds
    pub average_errors: f64,
    /// Errors made per won round -> number of rounds
    pub distribution: HashMap<usize, usize>,
    /// Lost words, and won words needing the most errors
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the engine on each word of at least the dictionary's minimum length
///
/// Words are taken in dictionary order, up to `limit`.
#[must_use]
pub fn run_benchmark(dictionary: &Dictionary, max_errors: usize, limit: Option<usize>) -> BenchmarkResult {
    let targets: Vec<_> = dictionary
        .eligible()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut won = 0;
    let mut lost_no_candidates = 0;
    let mut lost_error_budget = 0;
    let mut total_errors = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut hardest: Vec<(String, usize)> = Vec::new();

    for (idx, target) in targets.iter().enumerate() {
        let report = GuessEngine::new(dictionary.words(), target.len(), max_errors)
            .and_then(|engine| engine.run(&mut KnownWord::new((*target).clone())));
        let Ok(report) = report else {
            continue;
        };

        match report.status {
            RoundStatus::Won => {
                won += 1;
                total_errors += report.errors;
                *distribution.entry(report.errors).or_insert(0) += 1;
            }
            RoundStatus::LostNoCandidates => lost_no_candidates += 1,
            RoundStatus::LostErrorBudget => lost_error_budget += 1,
            RoundStatus::Active => {}
        }
        if !report.is_won() || report.errors + 1 >= max_errors {
            hardest.push((target.text().to_string(), report.errors));
        }

        if idx % 10 == 0 {
            pb.set_message(format!("Won: {won}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    hardest.sort_by_key(|(_, errors)| std::cmp::Reverse(*errors));
    hardest.truncate(10);

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        won,
        lost_no_candidates,
        lost_error_budget,
        average_errors: if won > 0 {
            total_errors as f64 / won as f64
        } else {
            0.0
        },
        distribution,
        hardest,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
