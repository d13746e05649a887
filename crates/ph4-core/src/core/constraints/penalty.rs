/// Penalty returned by a quadratic constraint when the ligand has no matching atom.
pub const MISSING_FEATURE_PENALTY: f64 = 99.0;

/// Scale applied to the exponential law's `a` parameter (kJ to kcal style factor).
pub const EXPONENTIAL_SCALE: f64 = 4.18;

/// Which penalty law a constraint uses. Fixed when the constraint is built.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScoringLaw {
    /// Zero inside the tolerance sphere, `excess²` outside it.
    #[default]
    Quadratic,
    /// Saturating penalty `4.18·a·(1 − exp(−excess²/b))` outside the tolerance sphere.
    Exponential { a: f64, b: f64 },
}

impl ScoringLaw {
    pub fn is_exponential(&self) -> bool {
        matches!(self, ScoringLaw::Exponential { .. })
    }

    /// Penalty for a nearest-candidate distance exceeding the tolerance by `excess`.
    #[inline]
    pub fn penalty(&self, excess: f64) -> f64 {
        match *self {
            ScoringLaw::Quadratic => quadratic_penalty(excess),
            ScoringLaw::Exponential { a, b } => exponential_penalty(excess, a, b),
        }
    }

    /// Penalty when the ligand has no candidate for the feature at all.
    #[inline]
    pub fn missing_feature_penalty(&self) -> f64 {
        match *self {
            ScoringLaw::Quadratic => MISSING_FEATURE_PENALTY,
            ScoringLaw::Exponential { a, .. } => EXPONENTIAL_SCALE * a,
        }
    }
}

#[inline]
pub fn quadratic_penalty(excess: f64) -> f64 {
    if excess > 0.0 { excess * excess } else { 0.0 }
}

/// `b` must be positive whenever `excess > 0`; a zero `b` is not guarded.
#[inline]
pub fn exponential_penalty(excess: f64, a: f64, b: f64) -> f64 {
    if excess > 0.0 {
        EXPONENTIAL_SCALE * a * (1.0 - (-(excess * excess) / b).exp())
    } else {
        0.0
    }
}
