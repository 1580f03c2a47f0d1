use xxhash_rust::xxh3::xxh3_64;

use super::EvidenceSet;

const MIN_BITS: usize = 64;
const MAX_PROBES: u32 = 8;
/// Larger `bits_per_id` requests are clamped to this.
pub const MAX_BITS_PER_ID: usize = 64;

/// Small Bloom filter over the identifiers of one [`EvidenceSet`].
///
/// Built once per reference set and read-only afterwards. It may report an
/// absent identifier as present, but never the reverse.
#[derive(Debug, Clone)]
pub struct MembershipFilter {
    words: Vec<u64>,
    mask: u64,
    probes: u32,
}

impl MembershipFilter {
    /// Build a filter sized for `bits_per_id` bits per identifier of `set`,
    /// clamped to 1 ..= [`MAX_BITS_PER_ID`].
    pub fn from_set(set: &EvidenceSet, bits_per_id: usize) -> Self {
        let bits_per_id = bits_per_id.clamp(1, MAX_BITS_PER_ID);
        let nb_bits = set
            .len()
            .saturating_mul(bits_per_id)
            .max(MIN_BITS)
            .next_power_of_two();
        let probes = ((bits_per_id as f64) * std::f64::consts::LN_2).round() as u32;

        let mut filter = Self {
            words: vec![0u64; nb_bits / 64],
            mask: (nb_bits - 1) as u64,
            probes: probes.clamp(1, MAX_PROBES),
        };
        for id in set.iter() {
            filter.insert(id);
        }
        filter
    }

    /// `false` means `id` is definitely absent from the source set.
    pub fn may_contain(&self, id: u32) -> bool {
        let (h1, h2) = probe_seeds(id);
        (0..self.probes).all(|i| {
            let bit = h1.wrapping_add((i as u64).wrapping_mul(h2)) & self.mask;
            self.words[(bit >> 6) as usize] & (1u64 << (bit & 63)) != 0
        })
    }

    /// Number of bits in the filter.
    pub fn bit_len(&self) -> usize {
        self.words.len() * 64
    }

    pub fn probes(&self) -> u32 {
        self.probes
    }

    fn insert(&mut self, id: u32) {
        let (h1, h2) = probe_seeds(id);
        for i in 0..self.probes {
            let bit = h1.wrapping_add((i as u64).wrapping_mul(h2)) & self.mask;
            self.words[(bit >> 6) as usize] |= 1u64 << (bit & 63);
        }
    }
}

fn probe_seeds(id: u32) -> (u64, u64) {
    let hash = xxh3_64(&id.to_le_bytes());
    // odd step so the probe sequence visits distinct bits
    (hash, (hash >> 32) | 1)
}
