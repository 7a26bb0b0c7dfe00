//! Phonology of the constructed language.
//!
//! This module holds everything that knows about individual sounds:
//!
//! - [`inventory`] - the closed symbol alphabet and its class partition
//! - [`cluster`] - which two-consonant clusters are pronounceable
//! - [`phonotactics`] - named forbidden patterns checked on root forms
//! - [`sandhi`] - the boundary joiner used when morphemes are concatenated

pub mod cluster;
pub mod inventory;
pub mod phonotactics;
pub mod sandhi;

pub use inventory::{PhonemeClass, Place, classify};
pub use sandhi::{BoundaryJoiner, JoinStrategy};
