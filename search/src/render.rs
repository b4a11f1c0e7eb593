//! Human-readable renderings of plans and states.
//!
//! Diagnostic output only; the text carries no compatibility contract.

use std::fmt::Write as _;

use goap_kernel::carrier::world_state::WorldState;

use crate::search::Plan;

/// One line: `"Plan:"` followed by `" -> Name"` per action.
#[must_use]
pub fn render_plan(plan: &Plan<'_>) -> String {
    let mut out = String::from("Plan:");
    for action in plan.iter() {
        let _ = write!(out, " -> {}", action.name());
    }
    out
}

/// Bit pattern with a legend, fact 63 on the left.
#[must_use]
pub fn render_state(state: WorldState) -> String {
    format!("World State:\n64th Key |--- ---| 0th Key\n{state}")
}
