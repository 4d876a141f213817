//! Static lookup tables used by the normalizer

pub mod compound;
pub mod substitution;

pub use compound::{CompoundPattern, CompoundPatterns};
pub use substitution::SubstitutionTable;
