use super::atom::Atom;
use super::ids::AtomId;
use crate::core::utils::geometry::centroid;
use slotmap::SlotMap;
use std::collections::HashMap;

/// A ligand model: an ordered list of atoms plus ring membership.
///
/// Atom order is insertion order and is what constraint selection iterates
/// over. Ring-centroid pseudo-atoms are appended to the same list by
/// [`Ligand::add_ring_centroid`]; the ligand owns them for as long as it lives
/// or until [`Ligand::clear_ring_centroids`] is called.
#[derive(Debug, Clone, Default)]
pub struct Ligand {
    /// Human-readable identifier (file stem, compound id, ...).
    name: String,
    /// Primary storage for atoms, keyed by stable IDs.
    atoms: SlotMap<AtomId, Atom>,
    /// Atom IDs in list order.
    order: Vec<AtomId>,
    /// Rings as lists of member atom IDs.
    rings: Vec<Vec<AtomId>>,
    /// Pseudo-atom already synthesized for a ring, keyed by its sorted members.
    ring_centroids: HashMap<Vec<AtomId>, AtomId>,
}

impl Ligand {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an atom to the end of the atom list.
    pub fn add_atom(&mut self, atom: Atom) -> AtomId {
        let id = self.atoms.insert(atom);
        self.order.push(id);
        id
    }

    /// Registers a ring by its member atoms.
    ///
    /// # Return
    ///
    /// Returns `None` if the ring has fewer than three members or refers to an
    /// atom that is not part of this ligand.
    pub fn add_ring(&mut self, members: Vec<AtomId>) -> Option<()> {
        if members.len() < 3 || !members.iter().all(|id| self.atoms.contains_key(*id)) {
            return None;
        }
        self.rings.push(members);
        Some(())
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    /// Returns an iterator over all atoms, pseudo-atoms included, in list order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.order.iter().map(move |&id| (id, &self.atoms[id]))
    }

    pub fn atom_ids(&self) -> &[AtomId] {
        &self.order
    }

    pub fn rings(&self) -> &[Vec<AtomId>] {
        &self.rings
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the pseudo-atom at the centroid of `members`, creating it on first use.
    ///
    /// The operation is idempotent per ring: member order does not matter, and a
    /// ring that already has a centroid gets the same ID back without a new atom
    /// being appended. The pseudo-atom is moved to the members' current centroid
    /// on every call, so it follows the ring when the pose changes.
    ///
    /// # Return
    ///
    /// Returns `None` if `members` is empty or contains an unknown atom ID.
    pub fn add_ring_centroid(&mut self, members: &[AtomId]) -> Option<AtomId> {
        let positions = members
            .iter()
            .map(|id| self.atoms.get(*id).map(|atom| atom.position))
            .collect::<Option<Vec<_>>>()?;
        let center = centroid(&positions)?;

        let mut key = members.to_vec();
        key.sort_unstable();
        if let Some(&existing) = self.ring_centroids.get(&key) {
            self.atoms.get_mut(existing)?.position = center;
            return Some(existing);
        }

        let name = format!("RC{}", self.ring_centroids.len() + 1);
        let id = self.add_atom(Atom::ring_centroid(&name, center));
        self.ring_centroids.insert(key, id);
        Some(id)
    }

    /// Returns an iterator over the ring-centroid pseudo-atoms created so far.
    pub fn ring_centroids_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms_iter().filter(|(_, atom)| atom.is_pseudo())
    }

    /// Removes every ring-centroid pseudo-atom from the ligand.
    pub fn clear_ring_centroids(&mut self) {
        for (_, id) in self.ring_centroids.drain() {
            self.atoms.remove(id);
        }
        let atoms = &self.atoms;
        self.order.retain(|id| atoms.contains_key(*id));
    }
}
