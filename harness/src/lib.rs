//! GOAP Harness: scenarios and plan execution around the planner.
//!
//! The harness loads scenarios (JSON files or built-in worlds), runs them
//! through `goap_search::search::plan`, and executes the resulting plan
//! against the initial state.
//!
//! The harness does NOT implement search; it delegates to `goap_search`.
//! Worlds provide domain data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod scenario;
pub mod worlds;
