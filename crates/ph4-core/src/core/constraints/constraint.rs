use super::error::{ConstraintError, SelectionError};
use super::feature::Feature;
use super::penalty::ScoringLaw;
use crate::core::chemistry::predicates::is_pi_atom;
use crate::core::models::ids::AtomId;
use crate::core::models::ligand::Ligand;
use crate::core::utils::geometry::min_distance_squared;
use nalgebra::Point3;
use std::fmt;

/// An atom (or ring-centroid pseudo-atom) selected as matching a constraint's feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub atom_id: AtomId,
    pub position: Point3<f64>,
}

/// A pharmacophore constraint: a feature pinned to an anchor point.
///
/// The candidate set belongs to the ligand most recently passed to
/// [`Constraint::select_atoms`] and is empty until that call.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    feature: Feature,
    anchor: Point3<f64>,
    tolerance: f64,
    law: ScoringLaw,
    candidates: Vec<Candidate>,
}

impl Constraint {
    /// Builds a constraint scored with the quadratic law.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidTolerance`] for a negative or non-finite tolerance.
    pub fn new(feature: Feature, anchor: Point3<f64>, tolerance: f64) -> Result<Self, ConstraintError> {
        Self::with_law(feature, anchor, tolerance, ScoringLaw::Quadratic)
    }

    /// Builds a constraint scored with the exponential law, even if `a` and `b` are zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidTolerance`] for a negative or non-finite tolerance.
    pub fn exponential(
        feature: Feature,
        anchor: Point3<f64>,
        tolerance: f64,
        a: f64,
        b: f64,
    ) -> Result<Self, ConstraintError> {
        Self::with_law(feature, anchor, tolerance, ScoringLaw::Exponential { a, b })
    }

    fn with_law(
        feature: Feature,
        anchor: Point3<f64>,
        tolerance: f64,
        law: ScoringLaw,
    ) -> Result<Self, ConstraintError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConstraintError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            feature,
            anchor,
            tolerance,
            law,
            candidates: Vec::new(),
        })
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn anchor(&self) -> Point3<f64> {
        self.anchor
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn law(&self) -> ScoringLaw {
        self.law
    }

    pub fn is_exponential(&self) -> bool {
        self.law.is_exponential()
    }

    /// Exponential `a` parameter; `0.0` for quadratic constraints.
    pub fn a(&self) -> f64 {
        match self.law {
            ScoringLaw::Exponential { a, .. } => a,
            ScoringLaw::Quadratic => 0.0,
        }
    }

    /// Exponential `b` parameter; `0.0` for quadratic constraints.
    pub fn b(&self) -> f64 {
        match self.law {
            ScoringLaw::Exponential { b, .. } => b,
            ScoringLaw::Quadratic => 0.0,
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Recomputes the candidate set from `ligand`.
    ///
    /// Atom features filter the ligand's atom list. For [`Feature::AromaticRing`],
    /// every ring whose members are all pi atoms contributes its centroid
    /// pseudo-atom, which is added to the ligand if it is not there yet.
    ///
    /// # Arguments
    ///
    /// * `ligand` - The ligand to select from.
    /// * `minimum` - Required candidate count, or `None` to skip validation.
    ///   Ignored for exponential constraints.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InsufficientAtoms`] when fewer than `minimum`
    /// candidates were found. The candidate set is still replaced in that case.
    pub fn select_atoms(
        &mut self,
        ligand: &mut Ligand,
        minimum: Option<usize>,
    ) -> Result<(), SelectionError> {
        self.candidates = if self.feature.selects_rings() {
            select_aromatic_ring_centroids(ligand)
        } else {
            ligand
                .atoms_iter()
                .filter(|(_, atom)| self.feature.matches(atom))
                .map(|(atom_id, atom)| Candidate {
                    atom_id,
                    position: atom.position,
                })
                .collect()
        };

        match minimum {
            Some(required) if !self.is_exponential() && self.candidates.len() < required => {
                Err(SelectionError::InsufficientAtoms {
                    feature: self.feature,
                    found: self.candidates.len(),
                    required,
                })
            }
            _ => Ok(()),
        }
    }

    /// Distance from the anchor to the nearest candidate, if there is one.
    pub fn nearest_distance(&self) -> Option<f64> {
        min_distance_squared(self.candidates.iter().map(|c| &c.position), &self.anchor)
            .map(f64::sqrt)
    }

    /// Penalty for the current candidate set.
    ///
    /// An empty set scores `99.0` under the quadratic law and `4.18·a` under the
    /// exponential law. Otherwise the law is applied to the distance by which the
    /// nearest candidate lies outside the tolerance sphere.
    pub fn score(&self) -> f64 {
        match self.nearest_distance() {
            None => self.law.missing_feature_penalty(),
            Some(distance) => self.law.penalty(distance - self.tolerance),
        }
    }
}

fn select_aromatic_ring_centroids(ligand: &mut Ligand) -> Vec<Candidate> {
    let aromatic_rings: Vec<Vec<AtomId>> = ligand
        .rings()
        .iter()
        .filter(|ring| {
            ring.iter()
                .all(|id| ligand.atom(*id).is_some_and(is_pi_atom))
        })
        .cloned()
        .collect();

    aromatic_rings
        .iter()
        .filter_map(|ring| {
            let atom_id = ligand.add_ring_centroid(ring)?;
            let position = ligand.atom(atom_id)?.position;
            Some(Candidate { atom_id, position })
        })
        .collect()
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})\t{}\t{}\t{}",
            self.anchor.x,
            self.anchor.y,
            self.anchor.z,
            self.tolerance,
            self.a(),
            self.b()
        )
    }
}
