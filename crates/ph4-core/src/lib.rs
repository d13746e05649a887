//! # ph4rs Core Library
//!
//! Pharmacophore restraints for molecular docking. A restraint pins a chemical
//! feature (hydrogen-bond donor, acceptor, charge, lipophilic atom, aromatic
//! ring, ...) to a point in the binding site; a candidate ligand pose is
//! penalised by how far its nearest matching atom lies from that point.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Ligand data model, atom classifiers, the
//!   constraint model with its penalty laws, the feature registry, and the
//!   constraint file readers.
//!
//! - **[`workflows`]: The Public API.** Ties a ligand and a parsed constraint
//!   list together and reports the penalty of every constraint.

pub mod core;
pub mod workflows;
