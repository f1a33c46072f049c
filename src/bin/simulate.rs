//! Balance simulator CLI.
//!
//! Run Monte Carlo simulations over the scoring engine.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 1000 runs, 75% accuracy
//!   cargo run --bin simulate -- -n 100 -a 0.9      # 100 sharper learners
//!   cargo run --bin simulate -- --battle --seed 42 # reproducible battle run

use shiksha::bank::standard_bank;
use shiksha::engine::SessionMode;
use shiksha::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔══════════════════════════════════════════════╗");
    println!("║         SHIKSHA BALANCE SIMULATOR            ║");
    println!("╚══════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:          {}", config.num_runs);
    println!("  Accuracy:      {:.0}%", config.accuracy * 100.0);
    println!("  Answer delay:  {:.1}s", config.answer_delay_seconds);
    println!(
        "  Mode:          {}",
        match config.mode {
            SessionMode::Standard => "quiz",
            SessionMode::Battle => "battle",
        }
    );
    if let Some(seed) = config.seed {
        println!("  Seed:          {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let bank = standard_bank();
    let report = run_simulation(&config, &bank);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json()).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-a" | "--accuracy" => {
                if i + 1 < args.len() {
                    config.accuracy = args[i + 1].parse().unwrap_or(0.75);
                    i += 1;
                }
            }
            "-d" | "--delay" => {
                if i + 1 < args.len() {
                    config.answer_delay_seconds = args[i + 1].parse().unwrap_or(6.0);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--battle" => {
                config.mode = SessionMode::Battle;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {} // handled in main after the run
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --runs N       Number of simulated learners (default 1000)");
    println!("  -a, --accuracy P   Probability of a correct answer, 0.0-1.0 (default 0.75)");
    println!("  -d, --delay S      Mean seconds per question (default 6.0)");
    println!("  -s, --seed N       Seed for reproducible runs");
    println!("      --battle       Simulate battle mode instead of quiz mode");
    println!("      --json         Also write the full report as JSON");
    println!("  -v, --verbose      Per-run detail");
    println!("  -q, --quiet        Summary only");
}
