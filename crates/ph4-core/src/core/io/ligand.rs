use crate::core::models::atom::{Atom, Hybridization};
use crate::core::models::ids::AtomId;
use crate::core::models::ligand::Ligand;
use nalgebra::Point3;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct LigandRecord {
    name: String,
    #[serde(default)]
    atoms: Vec<AtomRecord>,
    /// Each ring lists 1-based indices into `atoms`.
    #[serde(default)]
    rings: Vec<Vec<usize>>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct AtomRecord {
    name: String,
    atomic_number: u8,
    x: f64,
    y: f64,
    z: f64,
    #[serde(default)]
    hybridization: Option<String>,
    #[serde(default)]
    charge: f64,
    #[serde(default)]
    donor: bool,
    #[serde(default)]
    acceptor: bool,
    #[serde(default)]
    lipophilic: bool,
}

#[derive(Debug, Error)]
pub enum LigandFileError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Inconsistent ligand in '{path}': {message}")]
    Inconsistency { path: String, message: String },
}

/// Loader for ligand descriptions written as TOML.
///
/// ```toml
/// name = "benzene"
/// rings = [[1, 2, 3, 4, 5, 6]]
///
/// [[atoms]]
/// name = "C1"
/// atomic-number = 6
/// x = 1.39
/// y = 0.0
/// z = 0.0
/// hybridization = "AROM"
/// lipophilic = true
/// ```
pub struct LigandFile;

impl LigandFile {
    pub fn load(path: &Path) -> Result<Ligand, LigandFileError> {
        let content = std::fs::read_to_string(path).map_err(|e| LigandFileError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    /// Builds a ligand from TOML text; `origin` only labels errors.
    #[instrument(skip_all, name = "ligand_file_reader", fields(origin = origin))]
    pub fn parse(content: &str, origin: &str) -> Result<Ligand, LigandFileError> {
        let record: LigandRecord =
            toml::from_str(content).map_err(|e| LigandFileError::Toml {
                path: origin.to_string(),
                source: e,
            })?;
        let inconsistency = |message: String| LigandFileError::Inconsistency {
            path: origin.to_string(),
            message,
        };

        let mut ligand = Ligand::new(&record.name);
        let mut ids: Vec<AtomId> = Vec::with_capacity(record.atoms.len());
        for atom_record in &record.atoms {
            let atom = build_atom(atom_record).map_err(&inconsistency)?;
            ids.push(ligand.add_atom(atom));
        }

        for (ring_index, ring) in record.rings.iter().enumerate() {
            let members = ring
                .iter()
                .map(|&serial| {
                    serial
                        .checked_sub(1)
                        .and_then(|i| ids.get(i).copied())
                        .ok_or_else(|| {
                            inconsistency(format!(
                                "Ring {} refers to atom {} but the ligand has {} atom(s)",
                                ring_index + 1,
                                serial,
                                ids.len()
                            ))
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            ligand.add_ring(members).ok_or_else(|| {
                inconsistency(format!(
                    "Ring {} needs at least three member atoms",
                    ring_index + 1
                ))
            })?;
        }

        debug!(
            name = ligand.name(),
            atoms = ligand.len(),
            rings = ligand.rings().len(),
            "Ligand loaded."
        );
        Ok(ligand)
    }
}

fn build_atom(record: &AtomRecord) -> Result<Atom, String> {
    let mut atom = Atom::new(
        &record.name,
        record.atomic_number,
        Point3::new(record.x, record.y, record.z),
    );
    if let Some(label) = &record.hybridization {
        atom.hybridization = label.parse::<Hybridization>().map_err(|_| {
            format!(
                "Atom '{}' has unknown hybridization '{}'",
                record.name, label
            )
        })?;
    }
    atom.formal_charge = record.charge;
    atom.is_hbond_donor = record.donor;
    atom.is_hbond_acceptor = record.acceptor;
    atom.is_lipophilic = record.lipophilic;
    Ok(atom)
}
