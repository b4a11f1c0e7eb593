//! GOAP Search: forward A* over boolean world states.
//!
//! This crate provides the planner. It depends only on `goap_kernel`; it
//! does NOT depend on `goap_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! goap_kernel  ←  goap_search  ←  goap_harness
//! (states,        (frontier,      (scenarios, runner,
//!  actions)        planner)        execution)
//! ```
//!
//! # Key types
//!
//! - [`search::plan`] — the entry point
//! - [`search::PlanResult`] — tagged outcome plus search statistics
//! - [`frontier::BinaryFrontier`] — min-heap open list ordered by `f`
//! - [`node::SearchNode`] — frontier entry (state, `g`, `h`)
//! - [`guarantee::OptimalityGuarantee`] — whether the returned plan is provably minimal

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod guarantee;
pub mod node;
pub mod render;
pub mod search;
