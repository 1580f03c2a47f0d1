//! Shared-evidence counting between a reference set and a candidate set.
//!
//! The `has_enough_*` checks stop scanning as soon as `min_shared` common
//! identifiers are confirmed. Filtered variants consult a [`MembershipFilter`]
//! built over the reference set before paying for an exact lookup; the filter
//! never changes a result, only how many exact lookups are made.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use super::{EvidenceSet, MembershipFilter};

/// Below this many candidate ids a parallel scan is not worth the threads.
const PARALLEL_MIN_IDS: usize = 4_096;
/// Smallest slice of candidate ids handed to one worker.
const MIN_CHUNK_IDS: usize = 1_024;

/// True if `a` and `b` share at least `min_shared` identifiers.
pub fn has_enough_shared(a: &EvidenceSet, b: &EvidenceSet, min_shared: usize) -> bool {
    if min_shared == 0 {
        return true;
    }
    if a.len().min(b.len()) < min_shared {
        return false;
    }
    let (probe, reference) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut shared = 0;
    for id in probe.iter() {
        if reference.contains(id) {
            shared += 1;
            if shared >= min_shared {
                return true;
            }
        }
    }
    false
}

/// Same as [`has_enough_shared`], with `filter_a` built over `a`.
pub fn has_enough_shared_filtered(
    filter_a: &MembershipFilter,
    a: &EvidenceSet,
    b: &EvidenceSet,
    min_shared: usize,
) -> bool {
    if min_shared == 0 {
        return true;
    }
    if a.len().min(b.len()) < min_shared {
        return false;
    }
    let mut shared = 0;
    for id in b.iter() {
        if filter_a.may_contain(id) && a.contains(id) {
            shared += 1;
            if shared >= min_shared {
                return true;
            }
        }
    }
    false
}

/// Exact number of identifiers shared by `a` and `b`.
pub fn shared_count(a: &EvidenceSet, b: &EvidenceSet) -> usize {
    a.intersection_len(b)
}

/// Exact number of shared identifiers, with `filter_a` built over `a`.
pub fn shared_count_filtered(filter_a: &MembershipFilter, a: &EvidenceSet, b: &EvidenceSet) -> usize {
    b.iter()
        .filter(|&id| filter_a.may_contain(id) && a.contains(id))
        .count()
}

/// Partitioned version of [`has_enough_shared`].
///
/// The ids of `b` are split across at most `threads` scoped workers that add
/// to one atomic counter; workers stop once any of them sees the threshold
/// reached. The worker count is also capped by the available parallelism and
/// by a minimum chunk of ids per worker. The answer is always the same as the
/// sequential scan.
pub fn has_enough_shared_parallel(
    a: &EvidenceSet,
    b: &EvidenceSet,
    min_shared: usize,
    threads: usize,
) -> bool {
    if threads <= 1 || b.len() < PARALLEL_MIN_IDS {
        return has_enough_shared(a, b, min_shared);
    }
    if min_shared == 0 {
        return true;
    }
    if a.len().min(b.len()) < min_shared {
        return false;
    }

    let ids = b.to_vec();
    let chunk_len = ids.len().div_ceil(worker_count(threads, ids.len()));
    let shared = AtomicUsize::new(0);
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        for chunk in ids.chunks(chunk_len) {
            let shared = &shared;
            let done = &done;
            scope.spawn(move || {
                for &id in chunk {
                    if done.load(Ordering::Relaxed) {
                        return;
                    }
                    if a.contains(id) && shared.fetch_add(1, Ordering::Relaxed) + 1 >= min_shared {
                        done.store(true, Ordering::Relaxed);
                        return;
                    }
                }
            });
        }
    });

    shared.load(Ordering::Relaxed) >= min_shared
}

fn worker_count(threads: usize, nb_ids: usize) -> usize {
    let available = thread::available_parallelism().map_or(1, |n| n.get());
    threads
        .min(available)
        .min(nb_ids / MIN_CHUNK_IDS)
        .max(1)
}
