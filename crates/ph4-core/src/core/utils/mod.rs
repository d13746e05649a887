//! Small geometric helpers shared by the ligand model and the constraint scorer.

pub mod geometry;
