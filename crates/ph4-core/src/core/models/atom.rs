use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

/// Hybridization state of a ligand atom.
///
/// Follows the classification used by docking atom typers: `Aromatic` for atoms
/// in aromatic rings and `Trigonal` for planar, conjugated sp2-like centres such
/// as amide nitrogens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Hybridization {
    /// Not assigned by the atom typer.
    #[default]
    Undefined,
    /// Linear.
    Sp,
    /// Trigonal planar.
    Sp2,
    /// Tetrahedral.
    Sp3,
    /// Member of an aromatic ring.
    Aromatic,
    /// Planar, conjugated trigonal centre (e.g. amide or aniline nitrogen).
    Trigonal,
}

/// Where an atom in a ligand model came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AtomOrigin {
    /// A real atom read from the ligand description.
    #[default]
    Input,
    /// A pseudo-atom placed at the centroid of a ring.
    RingCentroid,
}

/// Represents an atom of the ligand being scored.
///
/// The chemical classification flags are supplied by whoever built the ligand
/// (an atom typer or a ligand description file). Constraint selection only
/// reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "C1", "N3").
    pub name: String,
    /// Atomic number; `1` for hydrogen, `0` for pseudo-atoms.
    pub atomic_number: u8,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Hybridization state assigned by the atom typer.
    pub hybridization: Hybridization,
    /// Charge of the ionisable group the atom belongs to, in elementary charge units.
    pub formal_charge: f64,
    /// Hydrogen that can be donated in a hydrogen bond.
    pub is_hbond_donor: bool,
    /// Heavy atom that can accept a hydrogen bond.
    pub is_hbond_acceptor: bool,
    /// Atom counted as lipophilic (hydrophobic).
    pub is_lipophilic: bool,
    /// Whether this is a real atom or a derived pseudo-atom.
    pub origin: AtomOrigin,
}

impl Atom {
    /// Creates a new `Atom` with neutral, unclassified defaults.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `atomic_number` - The element's atomic number.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, atomic_number: u8, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            atomic_number,
            position,
            hybridization: Hybridization::default(),
            formal_charge: 0.0,
            is_hbond_donor: false,
            is_hbond_acceptor: false,
            is_lipophilic: false,
            origin: AtomOrigin::default(),
        }
    }

    /// Creates a pseudo-atom sitting at the centroid of a ring.
    pub(crate) fn ring_centroid(name: &str, position: Point3<f64>) -> Self {
        Self {
            origin: AtomOrigin::RingCentroid,
            ..Self::new(name, 0, position)
        }
    }

    pub fn is_pseudo(&self) -> bool {
        self.origin != AtomOrigin::Input
    }
}

impl FromStr for Hybridization {
    type Err = ();

    /// Parses a hybridization label.
    ///
    /// Case-insensitive; accepts both the short typer labels (`AROM`, `TRI`)
    /// and spelled-out variants.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sp" | "sp1" => Ok(Hybridization::Sp),
            "sp2" => Ok(Hybridization::Sp2),
            "sp3" => Ok(Hybridization::Sp3),
            "arom" | "aromatic" | "ar" => Ok(Hybridization::Aromatic),
            "tri" | "trigonal" => Ok(Hybridization::Trigonal),
            "undefined" | "undef" | "none" => Ok(Hybridization::Undefined),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Hybridization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Undefined => "UNDEFINED",
                Self::Sp => "SP",
                Self::Sp2 => "SP2",
                Self::Sp3 => "SP3",
                Self::Aromatic => "AROM",
                Self::Trigonal => "TRI",
            }
        )
    }
}
