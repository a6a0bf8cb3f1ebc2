//! Upgrade-card simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 1000 runs, 30 level-ups each
//!   cargo run --bin simulate -- -n 100 -c 4        # 100 runs with 4-card hands
//!   cargo run --bin simulate -- --seed 42          # Reproducible run

use arcana::catalog::load_catalog_or_builtin;
use arcana::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    let catalog = match load_catalog_or_builtin(config.catalog_path.as_deref()) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            eprintln!("Failed to load catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              ARCANA UPGRADE CARD SIMULATOR                    ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Level-ups:      {}", config.level_ups_per_run);
        println!("  Cards/Level:    {}", config.cards_per_level);
        println!("  Character:      {}", config.character);
        if let Some(path) = &config.catalog_path {
            println!("  Catalog:        {}", path.display());
        }
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = match run_simulation(catalog, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    if report.guarantee_violations > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
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
            "-l" | "--levels" => {
                if i + 1 < args.len() {
                    config.level_ups_per_run = args[i + 1].parse().unwrap_or(30);
                    i += 1;
                }
            }
            "-c" | "--cards" => {
                if i + 1 < args.len() {
                    config.cards_per_level = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--character" => {
                if i + 1 < args.len() {
                    config.character = args[i + 1].clone();
                    i += 1;
                }
            }
            "--catalog" => {
                if i + 1 < args.len() {
                    config.catalog_path = Some(args[i + 1].clone().into());
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--saturate" => {
                config = SimConfig::saturation();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Arcana Upgrade Card Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulated runs (default: 1000)");
    println!("    -l, --levels <L>      Level-ups per run (default: 30)");
    println!("    -c, --cards <C>       Cards per level-up (default: 3)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    --character <ID>      Starting character (default: fool)");
    println!("    --catalog <PATH>      Catalog JSON file");
    println!("    -v, --verbose         Per-run output");
    println!("    -q, --quiet           Report only");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick check (100 seeded runs)");
    println!("    --saturate            Long runs (50 runs x 100 level-ups)");
    println!("    -h, --help            Show this help");
}
