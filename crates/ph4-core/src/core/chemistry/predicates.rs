use crate::core::models::atom::{Atom, Hybridization};

const HYDROGEN_ATOMIC_NUMBER: u8 = 1;

#[inline]
pub fn is_heavy(atom: &Atom) -> bool {
    atom.atomic_number != HYDROGEN_ATOMIC_NUMBER
}

#[inline]
pub fn is_hbond_donor(atom: &Atom) -> bool {
    atom.is_hbond_donor
}

#[inline]
pub fn is_hbond_acceptor(atom: &Atom) -> bool {
    atom.is_hbond_acceptor
}

#[inline]
pub fn is_lipophilic(atom: &Atom) -> bool {
    atom.is_lipophilic
}

#[inline]
pub fn is_anionic(atom: &Atom) -> bool {
    atom.formal_charge < 0.0
}

#[inline]
pub fn is_cationic(atom: &Atom) -> bool {
    atom.formal_charge > 0.0
}

/// Atoms contributing to a pi system: sp2, aromatic and planar trigonal centres.
#[inline]
pub fn is_pi_atom(atom: &Atom) -> bool {
    matches!(
        atom.hybridization,
        Hybridization::Sp2 | Hybridization::Aromatic | Hybridization::Trigonal
    )
}

pub fn hybridization_is(state: Hybridization) -> impl Fn(&Atom) -> bool {
    move |atom| atom.hybridization == state
}

pub fn and<P, Q>(p: P, q: Q) -> impl Fn(&Atom) -> bool
where
    P: Fn(&Atom) -> bool,
    Q: Fn(&Atom) -> bool,
{
    move |atom| p(atom) && q(atom)
}

pub fn not<P>(p: P) -> impl Fn(&Atom) -> bool
where
    P: Fn(&Atom) -> bool,
{
    move |atom| !p(atom)
}
