//! # Core Module
//!
//! The building blocks of pharmacophore scoring.
//!
//! ## Architecture
//!
//! - **Ligand Representation** ([`models`]) - Atoms, hybridization states and ring
//!   membership of the ligand being scored
//! - **Chemical Classification** ([`chemistry`]) - Stateless atom predicates and
//!   their combinators
//! - **Restraints** ([`constraints`]) - Feature types, the constraint model, penalty
//!   laws and the feature registry
//! - **File I/O** ([`io`]) - Constraint file formats (standard, exponential, MOE) and
//!   the ligand description format
//! - **Utilities** ([`utils`]) - Small geometric helpers

pub mod chemistry;
pub mod constraints;
pub mod io;
pub mod models;
pub mod utils;
