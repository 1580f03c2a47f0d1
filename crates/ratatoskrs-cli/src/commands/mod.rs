pub mod ambiguity;
pub mod entropy;
pub mod phase_stats;
pub mod std_qual;
pub mod version;
