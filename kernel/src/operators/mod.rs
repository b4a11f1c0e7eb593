pub mod action;
pub mod catalog;
