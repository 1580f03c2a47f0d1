//! Weighted evidence accumulation and candidate ranking.

use std::cmp::Ordering;

use crate::evidence::EvidenceSet;

/// Weight given to an identifier when none is specified.
pub const DEFAULT_WEIGHT: f64 = 2.0;

/// Evidence gathered for one candidate path.
///
/// One instance is owned per worker and cleared between candidates.
#[derive(Debug, Clone)]
pub struct WeightedEvidence {
    unweighted: EvidenceSet,
    weighted: EvidenceSet,
    all: EvidenceSet,
    weight: f64,
    weighted_sum: f64,
}

/// Raw ranking values of one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportScore {
    pub weighted_sum: f64,
    pub unweighted_count: usize,
}

impl WeightedEvidence {
    pub fn new() -> Self {
        Self {
            unweighted: EvidenceSet::new(),
            weighted: EvidenceSet::new(),
            all: EvidenceSet::new(),
            weight: DEFAULT_WEIGHT,
            weighted_sum: 0.0,
        }
    }

    /// Reset all sets, the default weight and the running sum.
    pub fn clear(&mut self) {
        self.unweighted.clear();
        self.weighted.clear();
        self.all.clear();
        self.weight = DEFAULT_WEIGHT;
        self.weighted_sum = 0.0;
    }

    pub fn add_unweighted(&mut self, id: u32) {
        self.unweighted.insert(id);
        self.all.insert(id);
    }

    /// Record `id` as weighted support; `weight` is added to the running sum
    /// on every call.
    pub fn add_weighted(&mut self, id: u32, weight: f64) {
        self.weighted.insert(id);
        self.all.insert(id);
        self.weighted_sum += weight;
    }

    pub fn add_default_weighted(&mut self, id: u32) {
        self.add_weighted(id, self.weight);
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn weighted_sum(&self) -> f64 {
        self.weighted_sum
    }

    pub fn unweighted(&self) -> &EvidenceSet {
        &self.unweighted
    }

    pub fn weighted(&self) -> &EvidenceSet {
        &self.weighted
    }

    /// Union of weighted and unweighted identifiers.
    pub fn all(&self) -> &EvidenceSet {
        &self.all
    }

    pub fn score(&self) -> SupportScore {
        SupportScore {
            weighted_sum: self.weighted_sum,
            unweighted_count: self.unweighted.len(),
        }
    }
}

impl Default for WeightedEvidence {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportScore {
    pub fn total(&self) -> f64 {
        self.weighted_sum + self.unweighted_count as f64
    }

    /// Ranking order: weighted sum first, then unweighted count.
    pub fn rank_cmp(&self, other: &SupportScore) -> Ordering {
        self.weighted_sum
            .total_cmp(&other.weighted_sum)
            .then(self.unweighted_count.cmp(&other.unweighted_count))
    }
}

/// Index of the winning candidate, or `None` if every candidate's total
/// support is below `min_support`. Full ties go to the lowest index.
pub fn select_candidate(scores: &[SupportScore], min_support: f64) -> Option<usize> {
    let mut best: Option<(usize, &SupportScore)> = None;
    for (idx, score) in scores.iter().enumerate() {
        if score.total() < min_support {
            continue;
        }
        match best {
            Some((_, current)) if score.rank_cmp(current) != Ordering::Greater => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}
