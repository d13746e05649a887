use super::feature::Feature;
use thiserror::Error;

/// Errors raised while building a constraint. These indicate bad input or a
/// programming mistake and abort whatever created the constraint.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstraintError {
    #[error("Constraint {0} not recognized")]
    UnrecognizedFeature(String),

    #[error("Constraint tolerance must be a finite, non-negative distance (got {0})")]
    InvalidTolerance(f64),
}

/// Domain outcome of an enforced atom selection. Callers are expected to catch
/// it and reject the ligand pose rather than stop the pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error(
        "The ligand has only {found} {} ({required} required)",
        .feature.description()
    )]
    InsufficientAtoms {
        feature: Feature,
        found: usize,
        required: usize,
    },
}
