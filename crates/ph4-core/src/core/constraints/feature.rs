use crate::core::chemistry::predicates::{
    and, hybridization_is, is_anionic, is_cationic, is_hbond_acceptor, is_hbond_donor, is_heavy,
    is_lipophilic, not,
};
use crate::core::models::atom::{Atom, Hybridization};
use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;

/// The chemical feature a pharmacophore constraint asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Any heavy (non-hydrogen) atom. Code `Any`.
    AnyHeavy,
    /// Neutral hydrogen-bond donor hydrogen. Code `Don`.
    HBondDonor,
    /// Neutral hydrogen-bond acceptor. Code `Acc`.
    HBondAcceptor,
    /// Lipophilic atom. Code `Hyd`.
    Lipophilic,
    /// Lipophilic sp3 atom. Code `Hal`.
    LipophilicAliphatic,
    /// Lipophilic aromatic atom. Code `Har`.
    LipophilicAromatic,
    /// Negatively charged atom. Code `Ani`.
    Anionic,
    /// Positively charged atom. Code `Cat`.
    Cationic,
    /// Centroid of a ring made only of pi atoms. Code `Aro`.
    AromaticRing,
}

static FEATURE_CODES: Map<&'static str, Feature> = phf_map! {
    "Any" => Feature::AnyHeavy,
    "Don" => Feature::HBondDonor,
    "Acc" => Feature::HBondAcceptor,
    "Hyd" => Feature::Lipophilic,
    "Hal" => Feature::LipophilicAliphatic,
    "Har" => Feature::LipophilicAromatic,
    "Ani" => Feature::Anionic,
    "Cat" => Feature::Cationic,
    "Aro" => Feature::AromaticRing,
};

impl Feature {
    pub const COUNT: usize = 9;

    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::AnyHeavy,
        Feature::HBondDonor,
        Feature::HBondAcceptor,
        Feature::Lipophilic,
        Feature::LipophilicAliphatic,
        Feature::LipophilicAromatic,
        Feature::Anionic,
        Feature::Cationic,
        Feature::AromaticRing,
    ];

    /// Looks up a feature by its constraint-file code. Exact, case-sensitive match.
    pub fn from_code(code: &str) -> Option<Self> {
        FEATURE_CODES.get(code).copied()
    }

    pub fn code(self) -> &'static str {
        match self {
            Feature::AnyHeavy => "Any",
            Feature::HBondDonor => "Don",
            Feature::HBondAcceptor => "Acc",
            Feature::Lipophilic => "Hyd",
            Feature::LipophilicAliphatic => "Hal",
            Feature::LipophilicAromatic => "Har",
            Feature::Anionic => "Ani",
            Feature::Cationic => "Cat",
            Feature::AromaticRing => "Aro",
        }
    }

    /// Plural noun phrase used in validation messages.
    pub fn description(self) -> &'static str {
        match self {
            Feature::AnyHeavy => "heavy atom(s)",
            Feature::HBondDonor => "neutral H-bond donor hydrogen(s)",
            Feature::HBondAcceptor => "neutral H-bond acceptor(s)",
            Feature::Lipophilic => "hydrophobic atom(s)",
            Feature::LipophilicAliphatic => "hydrophobic aliphatic atom(s)",
            Feature::LipophilicAromatic => "hydrophobic aromatic atom(s)",
            Feature::Anionic => "negatively charged atom(s)",
            Feature::Cationic => "positively charged atom(s)",
            Feature::AromaticRing => "aromatic ring(s)",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Whether candidates for this feature are ring centroids rather than atoms.
    pub fn selects_rings(self) -> bool {
        self == Feature::AromaticRing
    }

    /// Atom-level filter for the feature.
    ///
    /// Pseudo-atoms never match, and [`Feature::AromaticRing`] never matches a
    /// single atom; its candidates come from ring perception instead.
    pub fn matches(self, atom: &Atom) -> bool {
        if atom.is_pseudo() {
            return false;
        }
        match self {
            Feature::AnyHeavy => is_heavy(atom),
            Feature::HBondDonor => and(is_hbond_donor, not(is_cationic))(atom),
            Feature::HBondAcceptor => and(is_hbond_acceptor, not(is_anionic))(atom),
            Feature::Lipophilic => is_lipophilic(atom),
            Feature::LipophilicAliphatic => {
                and(is_lipophilic, hybridization_is(Hybridization::Sp3))(atom)
            }
            Feature::LipophilicAromatic => {
                and(is_lipophilic, hybridization_is(Hybridization::Aromatic))(atom)
            }
            Feature::Anionic => is_anionic(atom),
            Feature::Cationic => is_cationic(atom),
            Feature::AromaticRing => false,
        }
    }
}

impl FromStr for Feature {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::from_code(s).ok_or(())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
