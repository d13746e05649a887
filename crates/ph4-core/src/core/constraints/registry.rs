use super::constraint::Constraint;
use super::error::{ConstraintError, SelectionError};
use super::feature::Feature;
use crate::core::models::ligand::Ligand;
use nalgebra::Point3;
use tracing::{debug, trace};

/// Number of constraints created per feature since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureTally {
    counts: [usize; Feature::COUNT],
}

impl FeatureTally {
    pub fn count(&self, feature: Feature) -> usize {
        self.counts[feature.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns an iterator over `(feature, count)` pairs in [`Feature::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, usize)> + '_ {
        Feature::ALL.iter().map(|&f| (f, self.counts[f.index()]))
    }

    fn increment(&mut self, feature: Feature) {
        self.counts[feature.index()] += 1;
    }
}

/// Creates constraints from feature codes and keeps the per-feature tally.
///
/// The tally doubles as the minimum candidate count when selection is
/// enforced through [`ConstraintRegistry::select_atoms`]: with three counted
/// `Any` constraints, every `Any` constraint requires three heavy atoms. Each
/// parse/score pipeline should own its registry.
#[derive(Debug, Clone, Default)]
pub struct ConstraintRegistry {
    tally: FeatureTally,
}

impl ConstraintRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every per-feature counter.
    pub fn reset_counters(&mut self) {
        self.tally = FeatureTally::default();
    }

    pub fn tally(&self) -> &FeatureTally {
        &self.tally
    }

    pub fn count(&self, feature: Feature) -> usize {
        self.tally.count(feature)
    }

    /// Creates a quadratic-law constraint for the feature named by `code`.
    ///
    /// # Arguments
    ///
    /// * `anchor` - The constraint's spatial center.
    /// * `tolerance` - Radius of the zero-penalty sphere.
    /// * `code` - Feature code (`Any`, `Don`, `Acc`, `Hyd`, `Ani`, `Cat`, `Aro`, `Hal`, `Har`).
    /// * `counting` - Whether to bump the feature's counter.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::UnrecognizedFeature`] for an unknown code, or
    /// [`ConstraintError::InvalidTolerance`]. No counter changes on error.
    pub fn create(
        &mut self,
        anchor: Point3<f64>,
        tolerance: f64,
        code: &str,
        counting: bool,
    ) -> Result<Constraint, ConstraintError> {
        let feature = Self::lookup(code)?;
        let constraint = Constraint::new(feature, anchor, tolerance)?;
        self.record(feature, counting);
        Ok(constraint)
    }

    /// Creates an exponential-law constraint for the feature named by `code`.
    ///
    /// # Errors
    ///
    /// Same as [`ConstraintRegistry::create`].
    pub fn create_exponential(
        &mut self,
        anchor: Point3<f64>,
        tolerance: f64,
        a: f64,
        b: f64,
        code: &str,
        counting: bool,
    ) -> Result<Constraint, ConstraintError> {
        let feature = Self::lookup(code)?;
        debug!(feature = code, a, b, "Creating exponential pharmacophore constraint.");
        let constraint = Constraint::exponential(feature, anchor, tolerance, a, b)?;
        self.record(feature, counting);
        Ok(constraint)
    }

    /// Selects candidates for `constraint` from `ligand`.
    ///
    /// With `enforce_minimum`, the feature's current counter is the required
    /// candidate count (exponential constraints are exempt).
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InsufficientAtoms`] if the ligand falls short.
    pub fn select_atoms(
        &self,
        constraint: &mut Constraint,
        ligand: &mut Ligand,
        enforce_minimum: bool,
    ) -> Result<(), SelectionError> {
        let minimum = enforce_minimum.then(|| self.count(constraint.feature()));
        constraint.select_atoms(ligand, minimum)
    }

    fn lookup(code: &str) -> Result<Feature, ConstraintError> {
        Feature::from_code(code).ok_or_else(|| ConstraintError::UnrecognizedFeature(code.to_string()))
    }

    fn record(&mut self, feature: Feature, counting: bool) {
        if counting {
            self.tally.increment(feature);
            trace!(feature = %feature, count = self.tally.count(feature), "Feature counter incremented.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;

    fn heavy_atom_ligand(n: usize) -> Ligand {
        let mut ligand = Ligand::new("heavy");
        for i in 0..n {
            ligand.add_atom(Atom::new(&format!("C{}", i + 1), 6, Point3::new(i as f64, 0.0, 0.0)));
        }
        ligand.add_atom(Atom::new("H1", 1, Point3::new(0.0, 1.0, 0.0)));
        ligand
    }

    #[test]
    fn create_maps_every_code_to_its_feature() {
        let mut registry = ConstraintRegistry::new();
        for feature in Feature::ALL {
            let c = registry.create(Point3::origin(), 1.0, feature.code(), true).unwrap();
            assert_eq!(c.feature(), feature);
            assert!(!c.is_exponential());
            assert_eq!(registry.count(feature), 1);
        }
        assert_eq!(registry.tally().total(), 9);
    }

    #[test]
    fn create_exponential_builds_exponential_constraints() {
        let mut registry = ConstraintRegistry::new();
        let c = registry
            .create_exponential(Point3::new(1.0, 2.0, 3.0), 1.5, 0.5, 2.0, "Acc", true)
            .unwrap();
        assert_eq!(c.feature(), Feature::HBondAcceptor);
        assert!(c.is_exponential());
        assert_eq!(c.a(), 0.5);
        assert_eq!(c.b(), 2.0);
        assert_eq!(registry.count(Feature::HBondAcceptor), 1);
    }

    #[test]
    fn unrecognized_code_fails_without_counting() {
        let mut registry = ConstraintRegistry::new();
        let err = registry.create(Point3::origin(), 1.0, "Xyz", true).unwrap_err();
        assert_eq!(err, ConstraintError::UnrecognizedFeature("Xyz".to_string()));
        assert_eq!(err.to_string(), "Constraint Xyz not recognized");

        let err = registry
            .create_exponential(Point3::origin(), 1.0, 1.0, 1.0, "Xyz", true)
            .unwrap_err();
        assert!(matches!(err, ConstraintError::UnrecognizedFeature(_)));
        assert_eq!(registry.tally().total(), 0);
    }

    #[test]
    fn invalid_tolerance_fails_without_counting() {
        let mut registry = ConstraintRegistry::new();
        assert!(registry.create(Point3::origin(), -1.0, "Any", true).is_err());
        assert_eq!(registry.count(Feature::AnyHeavy), 0);
    }

    #[test]
    fn counting_disabled_leaves_tally_untouched() {
        let mut registry = ConstraintRegistry::new();
        registry.create(Point3::origin(), 1.0, "Don", false).unwrap();
        registry.create_exponential(Point3::origin(), 1.0, 1.0, 1.0, "Don", false).unwrap();
        assert_eq!(registry.count(Feature::HBondDonor), 0);
    }

    #[test]
    fn reset_counters_zeroes_every_feature() {
        let mut registry = ConstraintRegistry::new();
        for code in ["Any", "Any", "Aro", "Cat"] {
            registry.create(Point3::origin(), 1.0, code, true).unwrap();
        }
        assert_eq!(registry.count(Feature::AnyHeavy), 2);
        registry.reset_counters();
        assert!(registry.tally().iter().all(|(_, n)| n == 0));
    }

    #[test]
    fn enforced_selection_uses_cumulative_feature_count_as_minimum() {
        let mut registry = ConstraintRegistry::new();
        registry.reset_counters();
        let mut constraints: Vec<Constraint> = (0..3)
            .map(|_| registry.create(Point3::origin(), 1.0, "Any", true).unwrap())
            .collect();
        assert_eq!(registry.count(Feature::AnyHeavy), 3);

        let mut ligand = heavy_atom_ligand(2);
        // Every `Any` constraint needs as many heavy atoms as there are `Any`
        // constraints, including the first one created.
        let err = registry
            .select_atoms(&mut constraints[0], &mut ligand, true)
            .unwrap_err();
        assert_eq!(
            err,
            SelectionError::InsufficientAtoms {
                feature: Feature::AnyHeavy,
                found: 2,
                required: 3,
            }
        );
        assert!(err.to_string().contains("only 2 heavy atom(s) (3 required)"));
    }

    #[test]
    fn unenforced_selection_never_fails() {
        let mut registry = ConstraintRegistry::new();
        let mut c = registry.create(Point3::origin(), 1.0, "Cat", true).unwrap();
        let mut ligand = heavy_atom_ligand(2);
        registry.select_atoms(&mut c, &mut ligand, false).unwrap();
        assert!(c.candidates().is_empty());
        assert_eq!(c.score(), 99.0);
        assert!(registry.select_atoms(&mut c, &mut ligand, true).is_err());
    }

    #[test]
    fn enforced_selection_exempts_exponential_constraints() {
        let mut registry = ConstraintRegistry::new();
        let mut c = registry
            .create_exponential(Point3::origin(), 1.0, 0.4, 1.0, "Cat", true)
            .unwrap();
        let mut ligand = heavy_atom_ligand(2);
        assert!(registry.select_atoms(&mut c, &mut ligand, true).is_ok());
        assert_eq!(c.score(), 4.18 * 0.4);
    }
}
