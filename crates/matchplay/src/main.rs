//! Matchplay CLI
//!
//! Run game series between difficulty tiers and report the results.

use matchplay::{MatchConfig, MatchRunner, SeriesResults};
use reversi_core::Difficulty;
use std::env;
use std::path::Path;

fn print_usage() {
    println!("Reversi Matchplay Runner");
    println!();
    println!("Usage:");
    println!("  matchplay match <tier1> <tier2> [options]");
    println!("  matchplay gauntlet <challenger> [options]");
    println!();
    println!("Options:");
    println!("  --config FILE - Load match settings from a TOML file");
    println!("  --games N     - Number of games per series");
    println!("  --seed S      - Base RNG seed");
    println!("  --classic     - Play the Classic variant instead of Othello");
    println!();
    println!("Tiers:");
    println!("  random        - Uniform choice among the legal moves");
    println!("  shallow       - Depth-2 search over raw disc counts");
    println!("  deep          - Depth-6 search with the blended heuristic");
    println!();
    println!("Examples:");
    println!("  matchplay match deep random --games 20");
    println!("  matchplay gauntlet deep --games 10 --classic");
}

fn parse_tier(spec: &str) -> Option<Difficulty> {
    match spec.to_lowercase().as_str() {
        "random" => Some(Difficulty::Random),
        "shallow" => Some(Difficulty::ShallowSearch),
        "deep" => Some(Difficulty::DeepHeuristicSearch),
        _ => None,
    }
}

fn tier_name(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::None => "human",
        Difficulty::Random => "random",
        Difficulty::ShallowSearch => "shallow",
        Difficulty::DeepHeuristicSearch => "deep",
    }
}

/// Parse the trailing options. A `--config` file supplies the base
/// settings; the remaining flags override it.
fn parse_options(args: &[String]) -> MatchConfig {
    let mut config = MatchConfig::default();

    // Load the config file first so later flags win regardless of order.
    let mut i = 0;
    while i < args.len() {
        if matches!(args[i].as_str(), "--config" | "-c") && i + 1 < args.len() {
            match MatchConfig::from_toml_file(Path::new(&args[i + 1])) {
                Ok(loaded) => config = loaded,
                Err(e) => eprintln!("Warning: {}", e),
            }
        }
        i += 1;
    }

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
            }
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "--classic" => {
                config.othello_rules = false;
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two tier names");
        print_usage();
        return;
    }

    let (tier1, tier2) = match (parse_tier(&args[0]), parse_tier(&args[1])) {
        (Some(t1), Some(t2)) => (t1, t2),
        _ => {
            eprintln!("Unknown tier: {} or {}", args[0], args[1]);
            print_usage();
            return;
        }
    };

    let config = parse_options(&args[2..]);
    let variant = if config.othello_rules { "othello" } else { "classic" };

    println!("=== Match: {} vs {} ===", args[0], args[1]);
    println!("Games: {}, Rules: {}", config.num_games, variant);
    println!();

    let runner = MatchRunner::new(config);
    match runner.run_match(tier1, tier2) {
        Ok(result) => {
            println!();
            println!("=== Final Result ===");
            println!(
                "{}: {} wins, {} losses, {} draws",
                args[0], result.wins, result.losses, result.draws
            );
            println!("Score: {:.1}%", result.score() * 100.0);

            let mut results = SeriesResults::new(&format!("{} vs {}", args[0], args[1]));
            results.add_series(tier_name(tier1), tier_name(tier2), result);
            if let Err(e) = results.save(Path::new("matchplay_results.json")) {
                eprintln!("Warning: Failed to save results: {}", e);
            }
        }
        Err(e) => eprintln!("Match failed: {}", e),
    }
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger tier");
        print_usage();
        return;
    }

    let challenger = match parse_tier(&args[0]) {
        Some(t) => t,
        None => {
            eprintln!("Unknown tier: {}", args[0]);
            print_usage();
            return;
        }
    };

    let config = parse_options(&args[1..]);
    let opponents = [
        Difficulty::Random,
        Difficulty::ShallowSearch,
        Difficulty::DeepHeuristicSearch,
    ];

    println!("=== Gauntlet: {} vs all ===", args[0]);
    println!("Games per series: {}", config.num_games);

    let mut results = SeriesResults::new(&format!("Gauntlet: {}", args[0]));
    let runner = MatchRunner::new(config);

    for opponent in opponents {
        println!("\n--- {} vs {} ---", args[0], tier_name(opponent));

        match runner.run_match(challenger, opponent) {
            Ok(result) => {
                println!(
                    "Result: {}-{}-{} (Score: {:.1}%)",
                    result.wins,
                    result.losses,
                    result.draws,
                    result.score() * 100.0
                );
                results.add_series(tier_name(challenger), tier_name(opponent), result);
            }
            Err(e) => eprintln!("Series failed: {}", e),
        }
    }

    println!();
    print!("{}", results.report());

    if let Err(e) = results.save(Path::new("matchplay_results.json")) {
        eprintln!("Warning: Failed to save results: {}", e);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
