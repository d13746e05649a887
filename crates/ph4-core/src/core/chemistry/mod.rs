//! # Chemistry Module
//!
//! Stateless classifiers over a single ligand atom. Every constraint feature
//! builds its atom filter by composing the predicates in [`predicates`].

pub mod predicates;
