//! GOAP Kernel: the value types every planner call is built from.
//!
//! # API Surface
//!
//! - [`carrier`] -- facts, the bit-vector [`carrier::world_state::WorldState`],
//!   partial valuations ([`carrier::fact_set::FactSet`]) and the name registry
//! - [`operators`] -- [`operators::action::Action`] and the caller-owned
//!   [`operators::catalog::ActionCatalog`]
//! - [`goal`] -- the desired partial valuation and its distance heuristic
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `goal`
//!
//! One-way only. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod error;
pub mod goal;
pub mod operators;
