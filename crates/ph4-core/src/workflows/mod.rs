//! # Workflows Module
//!
//! High-level entry points that tie a ligand and a parsed constraint list
//! together.
//!
//! - **Evaluation** ([`evaluate`]) - selects candidates for each constraint,
//!   scores it, and collects one report row per constraint. Penalties are
//!   reported individually; combining them is left to the caller.
//! - **Configuration** ([`config`]) - builder for the evaluation settings.

pub mod config;
pub mod error;
pub mod evaluate;
