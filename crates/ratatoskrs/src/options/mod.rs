//! Run-level correction settings.

use crate::evidence::MAX_BITS_PER_ID;
use crate::{Error, Result};

/// Settings shared by every branch decision of one correction run.
#[derive(Debug, Clone)]
pub struct CorrectionOptions {
    /// k-mer length of the graph the candidates come from.
    pub k: usize,
    /// k-mer length of the second, smaller graph.
    pub small_k: usize,
    /// Floor added to every emitted quality value.
    pub qv_min: u8,
    /// Tolerance when comparing a candidate path to the region it replaces.
    pub weak_region_len_factor: f64,
    /// Longest region considered for path enumeration.
    pub max_len_weak_region: usize,
    /// Shared read ids needed before two candidates are considered linked.
    pub min_shared_ids: usize,
    /// Candidates with less total support are discarded.
    pub min_support: f64,
    pub filter_bits_per_id: usize,
    pub threads: usize,
}

impl Default for CorrectionOptions {
    fn default() -> Self {
        Self {
            k: 63,
            small_k: 31,
            qv_min: 0,
            weak_region_len_factor: 1.25,
            max_len_weak_region: 1000,
            min_shared_ids: 1,
            min_support: 0.0,
            filter_bits_per_id: 8,
            threads: 1,
        }
    }
}

impl CorrectionOptions {
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 || self.small_k == 0 {
            return Err(Error::InvalidConfig("k-mer lengths must be positive".into()));
        }
        if self.small_k > self.k {
            return Err(Error::InvalidConfig(format!(
                "small k ({}) exceeds k ({})",
                self.small_k, self.k
            )));
        }
        if self.qv_min >= crate::quality::PHRED_SCALE {
            return Err(Error::InvalidConfig(format!(
                "minimum quality {} must be below {}",
                self.qv_min,
                crate::quality::PHRED_SCALE
            )));
        }
        if self.weak_region_len_factor.is_nan() || self.weak_region_len_factor < 1.0 {
            return Err(Error::InvalidConfig(
                "weak region length factor must be at least 1".into(),
            ));
        }
        if !self.min_support.is_finite() || self.min_support < 0.0 {
            return Err(Error::InvalidConfig(
                "minimum support must be a non-negative number".into(),
            ));
        }
        if self.filter_bits_per_id == 0 {
            return Err(Error::InvalidConfig("filter needs at least one bit per id".into()));
        }
        if self.filter_bits_per_id > MAX_BITS_PER_ID {
            return Err(Error::InvalidConfig(format!(
                "filter bits per id must be at most {MAX_BITS_PER_ID}"
            )));
        }
        if self.threads == 0 {
            return Err(Error::InvalidConfig("thread count must be positive".into()));
        }
        Ok(())
    }

    /// Accepted length range for a replacement of a region of `len` bases.
    pub fn region_length_window(&self, len: usize) -> (usize, usize) {
        crate::util::min_max_length(len, self.weak_region_len_factor)
    }
}
