use thiserror::Error;

use crate::core::constraints::error::SelectionError;
use crate::core::io::constraints::ConstraintFileError;
use crate::core::io::ligand::LigandFileError;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to read constraints: {source}")]
    ConstraintFile {
        #[from]
        source: ConstraintFileError,
    },

    #[error("Failed to load ligand: {source}")]
    Ligand {
        #[from]
        source: LigandFileError,
    },

    /// The ligand cannot satisfy the `number`-th (1-based) constraint; the pose is rejected.
    #[error("Ligand rejected by constraint {number} ({feature}): {source}")]
    Selection {
        number: usize,
        feature: String,
        #[source]
        source: SelectionError,
    },

    #[error("Failed to write report: {0}")]
    Report(#[from] csv::Error),
}
