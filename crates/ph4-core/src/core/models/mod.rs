//! # Core Models Module
//!
//! Data structures describing the ligand that pharmacophore constraints are
//! evaluated against.
//!
//! ## Key Components
//!
//! - [`atom`] - Atom representation with coordinates, hybridization and feature flags
//! - [`ligand`] - The ligand model: ordered atoms, rings and derived ring centroids
//! - [`ids`] - Stable identifier type for atoms
//!
//! ## Usage
//!
//! ```ignore
//! use ph4rs::core::models::{atom::{Atom, Hybridization}, ligand::Ligand};
//!
//! let mut ligand = Ligand::new("benzene");
//! let mut c1 = Atom::new("C1", 6, Point3::new(1.4, 0.0, 0.0));
//! c1.hybridization = Hybridization::Aromatic;
//! let c1_id = ligand.add_atom(c1);
//! ```

pub mod atom;
pub mod ids;
pub mod ligand;
