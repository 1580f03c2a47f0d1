//! Sequence complexity and traversal bounds.
//!
//! [`entropy`] scores a sequence window between 0 (a single repeated base)
//! and [`MAX_ENTROPY`] (uniform A/C/G/T). The bounds derived from it never
//! grow with entropy and never shrink with the path length allowed: a
//! repetitive window with a long path to resolve gets the widest budget, a
//! complex window with a short path gets the baseline.

/// Shannon entropy of a uniform 4-letter alphabet.
pub const MAX_ENTROPY: f64 = 2.0;

const BASE_PATHS: f64 = 16.0;
const MAX_PATHS_CAP: usize = 4_096;
const BASE_BRANCH: f64 = 4.0;
const MAX_BRANCH_CAP: usize = 64;

/// Exploration limits for one branching decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBound {
    pub max_paths: usize,
    pub max_branch: usize,
}

impl SearchBound {
    pub fn new(entropy: f64, max_len_path: usize, k: usize) -> Self {
        Self {
            max_paths: max_paths(entropy, max_len_path, k),
            max_branch: max_branch(entropy, max_len_path, k),
        }
    }

    /// Bounds for the window `seq`.
    pub fn for_window(seq: &[u8], max_len_path: usize, k: usize) -> Self {
        Self::new(entropy(seq), max_len_path, k)
    }
}

/// Shannon entropy (bits) of the A/C/G/T composition of `seq`.
///
/// Case-insensitive; other symbols are ignored. A window without any
/// nucleotide scores 0.
pub fn entropy(seq: &[u8]) -> f64 {
    let mut counts = [0usize; 4];
    for &b in seq {
        match b & 0xDF {
            b'A' => counts[0] += 1,
            b'C' => counts[1] += 1,
            b'G' => counts[2] += 1,
            b'T' => counts[3] += 1,
            _ => {}
        }
    }
    let total = counts.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }
    let h = counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            p * (1.0 / p).log2()
        })
        .sum::<f64>();
    h.clamp(0.0, MAX_ENTROPY)
}

/// Maximum number of candidate paths to enumerate.
pub fn max_paths(entropy: f64, max_len_path: usize, k: usize) -> usize {
    let exponent = low_complexity(entropy) * path_span(max_len_path, k);
    let paths = (BASE_PATHS * exponent.exp2()).round();
    if paths >= MAX_PATHS_CAP as f64 {
        MAX_PATHS_CAP
    } else {
        paths as usize
    }
}

/// Maximum number of successors explored per node.
pub fn max_branch(entropy: f64, max_len_path: usize, k: usize) -> usize {
    let extra = BASE_BRANCH * low_complexity(entropy) * path_span(max_len_path, k);
    let branch = (BASE_BRANCH + extra).round();
    if branch >= MAX_BRANCH_CAP as f64 {
        MAX_BRANCH_CAP
    } else {
        branch as usize
    }
}

/// floor(log2(v)), with 0 for `v <= 1`.
pub fn approximate_log2(v: usize) -> usize {
    if v <= 1 {
        0
    } else {
        (usize::BITS - 1 - v.leading_zeros()) as usize
    }
}

// 0 for maximal entropy, 1 for a single repeated base.
fn low_complexity(entropy: f64) -> f64 {
    if !entropy.is_finite() {
        return 1.0;
    }
    1.0 - entropy.clamp(0.0, MAX_ENTROPY) / MAX_ENTROPY
}

// 1 + log2 of how many k-mers fit in the path.
fn path_span(max_len_path: usize, k: usize) -> f64 {
    (1 + approximate_log2(max_len_path / k.max(1))) as f64
}
