//! bigint_fixgen - big-integer arithmetic fixture generator
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌─────────────┐
//! │  Config  │───▶│ Generator │───▶│  .data out  │
//! │  (YAML)  │    │ (seeded)  │    │  (hex TSV)  │
//! └──────────┘    └───────────┘    └─────────────┘
//! ```
//!
//! Runs the five operation generators sequentially and exits. Any
//! filesystem failure aborts the whole run with a non-zero status.

use std::time::Instant;

use anyhow::Result;
use bigint_fixgen::config::AppConfig;
use bigint_fixgen::generator;
use bigint_fixgen::models::Operation;

// ============================================================
// ARGUMENT PARSING
// ============================================================

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn get_output_override() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--output" && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn get_seed_override() -> Option<u64> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--seed" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn get_cases_override() -> Option<usize> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--cases" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

// ============================================================
// MAIN
// ============================================================

fn main() -> Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env);

    if let Some(dir) = get_output_override() {
        app_config.generator.output_dir = dir;
    }
    if let Some(seed) = get_seed_override() {
        app_config.generator.seed = Some(seed);
    }
    if let Some(cases) = get_cases_override() {
        app_config.generator.cases_per_op = cases;
    }

    let _log_guard = bigint_fixgen::logging::init_logging(&app_config);

    tracing::info!("Starting fixture generation in {} mode", env);

    println!("=== bigint_fixgen: arithmetic fixture generator ===");
    println!("Output directory: {}/", app_config.generator.output_dir);
    println!("Cases per operation: {}", app_config.generator.cases_per_op);
    match app_config.generator.seed {
        Some(seed) => println!("Seed: {} (reproducible)\n", seed),
        None => println!("Seed: OS entropy (fresh fixtures each run)\n"),
    }

    let start_time = Instant::now();
    generator::generate_all(&app_config.generator)?;

    println!(
        "\nGenerated {} files x {} cases in {:.2?}",
        Operation::ALL.len(),
        app_config.generator.cases_per_op,
        start_time.elapsed()
    );
    println!("\n=== Done ===");
    Ok(())
}
