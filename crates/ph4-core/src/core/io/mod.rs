//! Reading and writing of constraint files and ligand descriptions.
//!
//! Constraint files come in three plain-text grammars (standard, exponential
//! and MOE pharmacophore export) told apart by their first character. Ligands
//! are described in TOML.

pub mod constraints;
pub mod ligand;
