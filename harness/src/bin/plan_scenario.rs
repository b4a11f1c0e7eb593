//! Plan a scenario and print the initial state, the plan and the final state.
//!
//! Usage: `plan_scenario [<scenario.json | world-id>]`
//!
//! Without arguments the built-in `shooter` world is used. Logs go to stderr
//! at WARN unless `RUST_LOG` says otherwise; a bare level such as
//! `RUST_LOG=info` applies to every target.

use std::path::Path;
use std::process::ExitCode;

use goap_harness::config::load_scenario;
use goap_harness::error::HarnessError;
use goap_harness::logging;
use goap_harness::runner::run_scenario;
use goap_harness::scenario::Scenario;
use goap_harness::worlds;
use goap_search::render::{render_plan, render_state};
use goap_search::search::PlanOutcome;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter())
        .with_writer(std::io::stderr)
        .init();

    let source = std::env::args().nth(1);
    match run(source.as_deref().unwrap_or("shooter")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("plan_scenario: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(source: &str) -> Result<(), HarnessError> {
    let scenario = load(source)?;
    let run = run_scenario(&scenario);

    println!("{}", render_state(scenario.initial));
    match &run.result.outcome {
        PlanOutcome::Found(plan) => println!("{}", render_plan(plan)),
        PlanOutcome::AlreadySatisfied => println!("Plan: (goal already satisfied)"),
        PlanOutcome::Unreachable => println!("Plan: (no plan found)"),
    }
    println!("{}", render_state(run.final_state));
    println!("True facts: {}", scenario.describe(run.final_state).join(", "));
    Ok(())
}

fn load(source: &str) -> Result<Scenario, HarnessError> {
    match worlds::by_id(source) {
        Some(world) => world.build(),
        None => load_scenario(Path::new(source)),
    }
}
