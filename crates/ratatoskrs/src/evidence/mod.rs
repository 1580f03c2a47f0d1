//! Read-support sets attached to graph candidates.
//!
//! An [`EvidenceSet`] holds the identifiers of the reads (or read pairs)
//! supporting one path, vertex or candidate. Small sets live in a sorted
//! vector; once a set outgrows [`SMALL_CAPACITY`] it is promoted to a roaring
//! bitmap. Both forms answer every query identically and iterate in ascending
//! order.

mod filter;
mod shared;

pub use filter::{MAX_BITS_PER_ID, MembershipFilter};
pub use shared::{
    has_enough_shared, has_enough_shared_filtered, has_enough_shared_parallel, shared_count,
    shared_count_filtered,
};

use croaring::Bitmap;

/// Sorted-vector sets larger than this are promoted to a bitmap.
pub const SMALL_CAPACITY: usize = 256;

/// Deduplicated set of read identifiers.
///
/// Sets are owned by the element they annotate and are cleared and reused
/// between batches; [`EvidenceSet::clear`] keeps whichever backing storage
/// the set has grown into.
#[derive(Debug, Clone, Default)]
pub struct EvidenceSet {
    // Sorted, no duplicates. Empty whenever `large` is set; once promoted a
    // set stays on the bitmap, including across `clear`.
    small: Vec<u32>,
    large: Option<Bitmap>,
}

impl EvidenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`; returns `true` if it was not already present.
    pub fn insert(&mut self, id: u32) -> bool {
        if let Some(bitmap) = self.large.as_mut() {
            return bitmap.add_checked(id);
        }
        match self.small.binary_search(&id) {
            Ok(_) => false,
            Err(pos) => {
                self.small.insert(pos, id);
                if self.small.len() > SMALL_CAPACITY {
                    self.promote();
                }
                true
            }
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        match &self.large {
            Some(bitmap) => bitmap.contains(id),
            None => self.small.binary_search(&id).is_ok(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.large {
            Some(bitmap) => bitmap.is_empty(),
            None => self.small.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match &self.large {
            Some(bitmap) => bitmap.cardinality() as usize,
            None => self.small.len(),
        }
    }

    /// Empty the set without releasing its vector or bitmap.
    pub fn clear(&mut self) {
        self.small.clear();
        if let Some(bitmap) = self.large.as_mut() {
            bitmap.clear();
        }
    }

    /// Merge every identifier of `other` into `self`.
    pub fn union_with(&mut self, other: &EvidenceSet) {
        if other.is_empty() {
            return;
        }
        if let Some(other_bitmap) = &other.large {
            self.promote();
            if let Some(bitmap) = self.large.as_mut() {
                bitmap.or_inplace(other_bitmap);
            }
            return;
        }
        match self.large.as_mut() {
            Some(bitmap) => bitmap.add_many(&other.small),
            None => {
                merge_sorted_unique(&mut self.small, &other.small);
                if self.small.len() > SMALL_CAPACITY {
                    self.promote();
                }
            }
        }
    }

    /// Exact number of identifiers present in both sets.
    pub fn intersection_len(&self, other: &EvidenceSet) -> usize {
        match (&self.large, &other.large) {
            (Some(a), Some(b)) => a.and_cardinality(b) as usize,
            (Some(a), None) => other.small.iter().filter(|&&id| a.contains(id)).count(),
            (None, Some(b)) => self.small.iter().filter(|&&id| b.contains(id)).count(),
            (None, None) => intersect_sorted_len(&self.small, &other.small),
        }
    }

    /// Identifiers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.small
            .iter()
            .copied()
            .chain(self.large.iter().flat_map(|bitmap| bitmap.iter()))
    }

    /// Copy of the identifiers in ascending order.
    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }

    fn promote(&mut self) {
        if self.large.is_some() {
            return;
        }
        let mut bitmap = Bitmap::new();
        bitmap.add_many(&self.small);
        self.small.clear();
        self.large = Some(bitmap);
    }
}

impl PartialEq for EvidenceSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for EvidenceSet {}

impl FromIterator<u32> for EvidenceSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = EvidenceSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<u32> for EvidenceSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

fn merge_sorted_unique(base: &mut Vec<u32>, extra: &[u32]) {
    if extra.is_empty() {
        return;
    }
    if base.is_empty() {
        base.extend_from_slice(extra);
        return;
    }
    let mut merged = Vec::with_capacity(base.len() + extra.len());
    let mut i = 0;
    let mut j = 0;
    while i < base.len() && j < extra.len() {
        if base[i] == extra[j] {
            merged.push(base[i]);
            i += 1;
            j += 1;
        } else if base[i] < extra[j] {
            merged.push(base[i]);
            i += 1;
        } else {
            merged.push(extra[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&base[i..]);
    merged.extend_from_slice(&extra[j..]);
    base.clear();
    base.extend_from_slice(&merged);
}

fn intersect_sorted_len(a: &[u32], b: &[u32]) -> usize {
    let mut i = 0;
    let mut j = 0;
    let mut shared = 0;
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            shared += 1;
            i += 1;
            j += 1;
        } else if a[i] < b[j] {
            i += 1;
        } else {
            j += 1;
        }
    }
    shared
}
