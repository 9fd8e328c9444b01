//! GLYCOS Diabetes Toolbox — Demo CLI
//!
//! Runs one or all of the three clinical walkthrough scenarios. Each
//! scenario uses the real engines (contraindication rules, dosing
//! formulas) wired to mock patient data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- renal-screening
//!   cargo run -p demo -- type2-workup
//!   cargo run -p demo -- type1-regimen

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use glycos_clinic::scenarios::{renal_screening, type1_regimen, type2_workup};

// ── CLI definition ────────────────────────────────────────────────────────────

/// GLYCOS — deterministic diabetes dosing and contraindication toolbox.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "GLYCOS diabetes toolbox demo",
    long_about = "Runs GLYCOS demo scenarios showing contraindication screening,\n\
                  Type 2 titration pathways, and Type 1 regimen construction."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three clinical scenarios in sequence.
    RunAll,
    /// Scenario 1: Renal Contraindication Screening (metformin vs eGFR).
    RenalScreening,
    /// Scenario 2: Type 2 Medication Workup (metformin, agents, insulin).
    Type2Workup,
    /// Scenario 3: Type 1 Starting Regimen (TDD, split, ICR, CF).
    Type1Regimen,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::RenalScreening => renal_screening::run_scenario(),
        Command::Type2Workup => type2_workup::run_scenario(),
        Command::Type1Regimen => type1_regimen::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> glycos_contracts::GlycosResult<()> {
    renal_screening::run_scenario()?;
    type2_workup::run_scenario()?;
    type1_regimen::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("GLYCOS — Diabetes Clinical Toolbox");
    println!("==================================");
    println!();
    println!("Caller workflow per medication decision:");
    println!("  [1] Contraindication engine screens the proposed medication against");
    println!("      patient kidney function (rule table, case-insensitive)");
    println!("  [2] Dosing engine computes starting doses, titration steps, and");
    println!("      derived insulin ratios from fixed guideline formulas");
    println!("  [3] Results may be attached to a summarization request for the");
    println!("      external clinical summary service");
    println!();
}
