#![allow(dead_code)]

use std::collections::BTreeSet;

use ratatoskrs::evidence::EvidenceSet;

/// Deterministic generator so failures reproduce.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(0x9e37_79b9_7f4a_7c15u64 ^ seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 32) as u32
    }

    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound.max(1)
    }
}

/// `len` random ids drawn from `0..universe`, possibly repeated.
pub fn random_ids(rng: &mut Lcg, len: usize, universe: u32) -> Vec<u32> {
    (0..len).map(|_| rng.below(universe)).collect()
}

pub fn naive_intersection(a: &[u32], b: &[u32]) -> usize {
    let a: BTreeSet<u32> = a.iter().copied().collect();
    let b: BTreeSet<u32> = b.iter().copied().collect();
    a.intersection(&b).count()
}

pub fn set_of(ids: &[u32]) -> EvidenceSet {
    ids.iter().copied().collect()
}

pub fn make_seq(seed: usize, len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut rng = Lcg::new(seed as u64);
    (0..len).map(|_| bases[rng.below(4) as usize]).collect()
}
