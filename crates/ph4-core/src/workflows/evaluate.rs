use super::config::{EvaluationConfig, EvaluationOptions};
use super::error::WorkflowError;
use crate::core::constraints::constraint::Constraint;
use crate::core::constraints::registry::ConstraintRegistry;
use crate::core::io::constraints::ConstraintFile;
use crate::core::models::ligand::Ligand;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Outcome of one constraint against one ligand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintReport {
    /// 1-based position in the constraint list.
    pub number: usize,
    pub feature: &'static str,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub tolerance: f64,
    pub law: &'static str,
    pub a: f64,
    pub b: f64,
    pub candidates: usize,
    pub nearest_distance: Option<f64>,
    pub penalty: f64,
}

impl ConstraintReport {
    fn from_constraint(number: usize, constraint: &Constraint) -> Self {
        let anchor = constraint.anchor();
        Self {
            number,
            feature: constraint.feature().code(),
            x: anchor.x,
            y: anchor.y,
            z: anchor.z,
            tolerance: constraint.tolerance(),
            law: if constraint.is_exponential() {
                "exponential"
            } else {
                "quadratic"
            },
            a: constraint.a(),
            b: constraint.b(),
            candidates: constraint.candidates().len(),
            nearest_distance: constraint.nearest_distance(),
            penalty: constraint.score(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationReport {
    pub ligand: String,
    pub entries: Vec<ConstraintReport>,
}

impl EvaluationReport {
    /// Writes one CSV row per constraint, with a header row.
    pub fn write_csv(&self, writer: impl Write) -> Result<(), WorkflowError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for entry in &self.entries {
            csv_writer.serialize(entry)?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn write_csv_path(&self, path: &Path) -> Result<(), WorkflowError> {
        let file = File::create(path).map_err(csv::Error::from)?;
        self.write_csv(file)
    }
}

/// Selects candidates for every constraint on `ligand` and scores them.
///
/// Constraints are processed in list order. Aromatic-ring constraints append
/// ring-centroid pseudo-atoms to `ligand` the first time a ring is seen.
///
/// # Arguments
///
/// * `ligand` - The pose to evaluate; receives ring-centroid pseudo-atoms.
/// * `constraints` - Constraints created through `registry`.
/// * `registry` - Supplies the per-feature minimum when selection is enforced.
/// * `options` - Evaluation switches.
///
/// # Errors
///
/// Returns [`WorkflowError::Selection`] for the first constraint the ligand
/// cannot satisfy under enforced selection.
#[instrument(skip_all, name = "evaluation_workflow", fields(ligand = ligand.name()))]
pub fn run(
    ligand: &mut Ligand,
    constraints: &mut [Constraint],
    registry: &ConstraintRegistry,
    options: &EvaluationOptions,
) -> Result<EvaluationReport, WorkflowError> {
    info!(
        constraints = constraints.len(),
        enforce_minimum = options.enforce_minimum,
        "Evaluating ligand against constraints."
    );

    let mut entries = Vec::with_capacity(constraints.len());
    for (i, constraint) in constraints.iter_mut().enumerate() {
        registry
            .select_atoms(constraint, ligand, options.enforce_minimum)
            .map_err(|source| WorkflowError::Selection {
                number: i + 1,
                feature: constraint.feature().code().to_string(),
                source,
            })?;
        let entry = ConstraintReport::from_constraint(i + 1, constraint);
        debug!(
            number = entry.number,
            feature = entry.feature,
            candidates = entry.candidates,
            penalty = entry.penalty,
            "Constraint scored."
        );
        entries.push(entry);
    }

    info!("Evaluation complete for {} constraint(s).", entries.len());
    Ok(EvaluationReport {
        ligand: ligand.name().to_string(),
        entries,
    })
}

/// Reads the constraint file named by `config` with a fresh registry, then runs
/// [`run`] on `ligand`.
pub fn run_from_config(
    ligand: &mut Ligand,
    config: &EvaluationConfig,
) -> Result<(Vec<Constraint>, EvaluationReport), WorkflowError> {
    let mut registry = ConstraintRegistry::new();
    let (mut constraints, _) =
        ConstraintFile::read_from_path(&config.constraints_path, &mut registry, config.counting)?;
    let report = run(ligand, &mut constraints, &registry, &config.options)?;
    Ok((constraints, report))
}
