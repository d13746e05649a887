//! # Constraints Module
//!
//! Pharmacophore restraints: a chemical feature pinned to a point in space,
//! scored by the distance of the ligand's nearest matching atom.
//!
//! ## Key Components
//!
//! - [`feature`] - The nine feature types, their file codes and atom filters
//! - [`constraint`] - The constraint model: anchor, tolerance, scoring law and
//!   candidate selection
//! - [`penalty`] - The quadratic and exponential penalty laws
//! - [`registry`] - Feature-code factory with a scoped per-feature tally
//! - [`error`] - Construction and selection error types
//!
//! ## Usage
//!
//! ```ignore
//! use ph4rs::core::constraints::registry::ConstraintRegistry;
//!
//! let mut registry = ConstraintRegistry::new();
//! let mut donor = registry.create(Point3::new(1.0, 2.0, 3.0), 1.5, "Don", true)?;
//! registry.select_atoms(&mut donor, &mut ligand, true)?;
//! let penalty = donor.score();
//! ```

pub mod constraint;
pub mod error;
pub mod feature;
pub mod penalty;
pub mod registry;
