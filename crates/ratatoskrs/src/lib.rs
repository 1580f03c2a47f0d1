//! Decision primitives for long-read error correction.
//!
//! At a branch point of the correction graph every candidate path comes with
//! the ids of the reads supporting it. This crate scores those candidates
//! ([`weights`]) from compact read-id sets ([`evidence`]), checks their
//! haplotype consistency ([`phase`]), bounds how many paths are worth
//! enumerating ([`complexity`]) and encodes the winning base and its
//! confidence ([`ambiguity`], [`quality`]).

pub mod ambiguity;
pub mod complexity;
pub mod error;
pub mod evidence;
pub mod io;
pub mod options;
pub mod phase;
pub mod quality;
pub mod util;
pub mod weights;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
