//! Tournament CLI
//!
//! Run timed matches between Isolation agents and track Elo ratings.

use std::env;
use std::path::Path;
use std::process;

use isolation_core::Agent;
use minimax_agent::{CenterDistance, MinimaxAgent, Mobility, SearchConfig};
use random_agent::RandomAgent;
use tournament::{
    quick_match, EloTracker, MatchConfig, MatchRunner, TournamentConfig, TournamentResults,
};

const ELO_FILE: &str = "tournament_elo.json";
const RESULTS_FILE: &str = "tournament_results.json";

fn print_usage() {
    println!("Isolation Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <agent1> <agent2> [--games N] [--time MS]");
    println!("  tournament gauntlet <challenger> [--games N] [--time MS]");
    println!("  tournament leaderboard");
    println!();
    println!("Agent specs:");
    println!("  random               - uniform random baseline");
    println!("  minimax[:opts]       - minimax search agent");
    println!("  alphabeta[:opts]     - alpha-beta search agent");
    println!("  path/to/agent.toml   - search agent from a TOML config file");
    println!();
    println!("Options after minimax/alphabeta, colon separated:");
    println!("  dN      - search depth N");
    println!("  fixed   - fixed-depth search instead of iterative deepening");
    println!("  id      - iterative deepening (the default)");
    println!("  center  - center-distance heuristic instead of mobility");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta random --games 20");
    println!("  tournament match minimax:d4:fixed alphabeta:center --time 200");
    println!("  tournament gauntlet agents/deep.toml --games 10");
}

fn create_agent(spec: &str) -> Result<Box<dyn Agent>, String> {
    if spec.ends_with(".toml") {
        let text = std::fs::read_to_string(spec)
            .map_err(|e| format!("Failed to read config {}: {}", spec, e))?;
        let config: SearchConfig =
            toml::from_str(&text).map_err(|e| format!("Failed to parse config {}: {}", spec, e))?;
        return Ok(Box::new(MinimaxAgent::new(config)));
    }

    let mut parts = spec.split(':');
    let head = parts.next().unwrap_or_default();
    match head {
        "random" => Ok(Box::new(RandomAgent::new())),
        "minimax" | "alphabeta" => {
            let mut config = SearchConfig {
                method: head.to_string(),
                ..Default::default()
            };
            let mut center = false;
            for opt in parts {
                if let Some(depth) = opt.strip_prefix('d') {
                    config.search_depth = depth
                        .parse()
                        .map_err(|_| format!("Bad depth in agent spec: {}", spec))?;
                } else {
                    match opt {
                        "fixed" => config.iterative = false,
                        "id" => config.iterative = true,
                        "center" => center = true,
                        "mobility" => center = false,
                        _ => return Err(format!("Unknown option '{}' in agent spec {}", opt, spec)),
                    }
                }
            }
            let agent = if center {
                MinimaxAgent::with_heuristic(config, Box::new(CenterDistance))
            } else {
                MinimaxAgent::with_heuristic(config, Box::new(Mobility))
            };
            Ok(Box::new(agent))
        }
        _ => Err(format!("Unknown agent spec: {}", spec)),
    }
}

/// Parse trailing `--games N` / `--time MS` flags.
fn parse_flags(args: &[String], games: &mut u32, time_ms: &mut u64) {
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    *games = args[i + 1].parse().unwrap_or(*games);
                    i += 1;
                }
            }
            "--time" | "-t" => {
                if i + 1 < args.len() {
                    *time_ms = args[i + 1].parse().unwrap_or(*time_ms);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
}

fn run_match(args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        print_usage();
        return Err("match requires two agent specifications".to_string());
    }

    let spec1 = &args[0];
    let spec2 = &args[1];
    let mut num_games: u32 = 10;
    let mut time_ms: u64 = 150;
    parse_flags(&args[2..], &mut num_games, &mut time_ms);

    println!("=== Match: {} vs {} ===", spec1, spec2);
    println!("Games: {}, Time/move: {} ms", num_games, time_ms);
    println!();

    let mut agent1 = create_agent(spec1)?;
    let mut agent2 = create_agent(spec2)?;

    let config = MatchConfig {
        num_games,
        time_per_move_ms: time_ms,
        verbose: true,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    let result = runner
        .run_match(agent1.as_mut(), agent2.as_mut())
        .map_err(|e| e.to_string())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses",
        spec1, result.wins, result.losses
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(spec1, spec2, &result);
    tracker.print_leaderboard();
    tracker.save(ELO_FILE)
}

fn run_gauntlet(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        print_usage();
        return Err("gauntlet requires a challenger agent".to_string());
    }

    let challenger_spec = &args[0];
    let mut num_games: u32 = 10;
    let mut time_ms: u64 = 150;
    parse_flags(&args[1..], &mut num_games, &mut time_ms);

    let opponents = ["random", "minimax", "alphabeta"];

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!("Games per match: {}, Time/move: {} ms", num_games, time_ms);

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        TournamentConfig {
            games_per_match: num_games,
            time_per_move_ms: time_ms,
            ..Default::default()
        },
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_agent(challenger_spec)?;
        let mut opp_agent = create_agent(opponent)?;

        let result = quick_match(challenger.as_mut(), opp_agent.as_mut(), num_games, time_ms)
            .map_err(|e| e.to_string())?;

        println!(
            "Result: {}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.score() * 100.0
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();

    results.save(Path::new(RESULTS_FILE))?;
    tracker.save(ELO_FILE)
}

fn show_leaderboard() -> Result<(), String> {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => {
            tracker.print_leaderboard();
            Ok(())
        }
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
            Ok(())
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let outcome = match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            Err(format!("Unknown command: {}", other))
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
