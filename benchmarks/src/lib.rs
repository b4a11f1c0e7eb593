//! Shared helpers for the GOAP benchmark suites.

use goap_harness::scenario::Scenario;
use goap_harness::worlds::shooter::Shooter;
use goap_harness::worlds::ScenarioWorld;
use goap_kernel::operators::catalog::ActionCatalog;
use goap_search::search::plan;
use rand::Rng;

/// Build the shooter world.
///
/// # Panics
///
/// Panics if the built-in world fails to compile. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn shooter() -> Scenario {
    Shooter.build().expect("shooter world compiles")
}

/// An independent copy of `catalog` with every cost raised by `0..=spread`.
///
/// Costs only go up so a zero-cost action never appears where the source
/// had none.
pub fn perturbed_catalog(catalog: &ActionCatalog, rng: &mut impl Rng, spread: u32) -> ActionCatalog {
    catalog.map_costs(|action| action.cost() + rng.gen_range(0..=spread))
}

/// Outcome of a perturbation sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepStats {
    /// Planning calls made.
    pub attempts: u64,
    /// Calls that produced a non-empty plan.
    pub plans_found: u64,
    /// Cheapest plan cost seen, if any.
    pub best_cost: Option<u64>,
}

/// Plan `iterations` times, each against a freshly perturbed catalog copy.
pub fn perturbation_sweep(
    scenario: &Scenario,
    rng: &mut impl Rng,
    iterations: u64,
    spread: u32,
) -> SweepStats {
    let mut stats = SweepStats::default();
    for _ in 0..iterations {
        let catalog = perturbed_catalog(&scenario.catalog, rng, spread);
        let result = plan(&scenario.goal, scenario.initial, &catalog);
        stats.attempts += 1;
        if let Some(found) = result.plan() {
            stats.plans_found += 1;
            let cost = found.total_cost();
            stats.best_cost = Some(stats.best_cost.map_or(cost, |best| best.min(cost)));
        }
    }
    stats
}
