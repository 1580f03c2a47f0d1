//! Haplotype registry used during phased correction.
//!
//! Phase-block and phase-type labels are mapped to dense ids in first-seen
//! order, and every distinct (block, type) pair gets its own dense haplotype
//! id. Each read lands in exactly one place: the phased set of its haplotype,
//! or the unphased set.

use std::collections::HashMap;

use crate::evidence::EvidenceSet;

/// True if a candidate whose haplotype evidence is `hap_ids` may be
/// attributed to `hap_id`. An empty set places no constraint.
pub fn is_valid_hap(hap_ids: &EvidenceSet, hap_id: u32) -> bool {
    hap_ids.is_empty() || hap_ids.contains(hap_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadPhase {
    Unphased,
    Phased(u32),
    Conflict,
}

/// Collects phasing records for one run, then freezes into a
/// [`HaplotypeRegistry`].
#[derive(Debug, Default)]
pub struct HaplotypeRegistryBuilder {
    block_ids: HashMap<String, u32>,
    type_ids: HashMap<String, u32>,
    hap_ids: HashMap<(u32, u32), u32>,
    reads: HashMap<u32, ReadPhase>,
}

impl HaplotypeRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `read` as phased on (`block`, `hap_type`) and return its
    /// haplotype id. A read reported on two different haplotypes is treated
    /// as unphased.
    pub fn add_phased(&mut self, read: u32, block: &str, hap_type: &str) -> u32 {
        let block_id = dense_id(&mut self.block_ids, block);
        let type_id = dense_id(&mut self.type_ids, hap_type);
        let next = self.hap_ids.len() as u32;
        let hap = *self.hap_ids.entry((block_id, type_id)).or_insert(next);

        let entry = self.reads.entry(read).or_insert(ReadPhase::Unphased);
        *entry = match *entry {
            ReadPhase::Unphased => ReadPhase::Phased(hap),
            ReadPhase::Phased(prev) if prev == hap => ReadPhase::Phased(hap),
            ReadPhase::Phased(_) | ReadPhase::Conflict => ReadPhase::Conflict,
        };
        hap
    }

    /// Record `read` as unphased; never overrides a phased record.
    pub fn add_unphased(&mut self, read: u32) {
        self.reads.entry(read).or_insert(ReadPhase::Unphased);
    }

    pub fn build(self) -> HaplotypeRegistry {
        let mut phased = vec![EvidenceSet::new(); self.hap_ids.len()];
        let mut unphased = EvidenceSet::new();
        let mut read_to_hap = HashMap::with_capacity(self.reads.len());
        let mut conflicts = 0usize;

        for (read, phase) in self.reads {
            match phase {
                ReadPhase::Phased(hap) => {
                    phased[hap as usize].insert(read);
                    read_to_hap.insert(read, hap);
                }
                ReadPhase::Conflict => {
                    conflicts += 1;
                    unphased.insert(read);
                }
                ReadPhase::Unphased => {
                    unphased.insert(read);
                }
            }
        }

        tracing::debug!(
            haplotypes = phased.len(),
            blocks = self.block_ids.len(),
            types = self.type_ids.len(),
            phased_reads = read_to_hap.len(),
            unphased_reads = unphased.len(),
            conflicts,
            "built haplotype registry"
        );

        HaplotypeRegistry {
            read_to_hap,
            block_ids: self.block_ids,
            type_ids: self.type_ids,
            hap_ids: self.hap_ids,
            phased,
            unphased,
        }
    }
}

fn dense_id(ids: &mut HashMap<String, u32>, label: &str) -> u32 {
    if let Some(&id) = ids.get(label) {
        return id;
    }
    let id = ids.len() as u32;
    ids.insert(label.to_string(), id);
    id
}

/// Read-only phasing information for one correction run.
#[derive(Debug, Clone, Default)]
pub struct HaplotypeRegistry {
    read_to_hap: HashMap<u32, u32>,
    block_ids: HashMap<String, u32>,
    type_ids: HashMap<String, u32>,
    hap_ids: HashMap<(u32, u32), u32>,
    phased: Vec<EvidenceSet>,
    unphased: EvidenceSet,
}

impl HaplotypeRegistry {
    pub fn haplotype_of(&self, read: u32) -> Option<u32> {
        self.read_to_hap.get(&read).copied()
    }

    pub fn phased_reads(&self, hap: u32) -> Option<&EvidenceSet> {
        self.phased.get(hap as usize)
    }

    pub fn unphased_reads(&self) -> &EvidenceSet {
        &self.unphased
    }

    pub fn haplotype_count(&self) -> usize {
        self.phased.len()
    }

    pub fn block_id(&self, label: &str) -> Option<u32> {
        self.block_ids.get(label).copied()
    }

    pub fn type_id(&self, label: &str) -> Option<u32> {
        self.type_ids.get(label).copied()
    }

    pub fn haplotype_id(&self, block: &str, hap_type: &str) -> Option<u32> {
        let key = (self.block_id(block)?, self.type_id(hap_type)?);
        self.hap_ids.get(&key).copied()
    }

    /// Haplotypes supported by the phased reads among `reads`.
    pub fn haplotypes_of(&self, reads: &EvidenceSet) -> EvidenceSet {
        reads.iter().filter_map(|read| self.haplotype_of(read)).collect()
    }
}
