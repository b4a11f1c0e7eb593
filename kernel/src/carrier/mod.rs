pub mod fact;
pub mod fact_set;
pub mod registry;
pub mod world_state;
