//! Monotonic z-order rank allocation.
//!
//! A single allocator is owned by the [`Board`](crate::board::Board) and
//! consulted on item creation and on every drag grab ("bring to front on
//! touch"). Ranks are strictly increasing for the lifetime of the process
//! and are never reused, even after the owning item is deleted — so a
//! freshly issued rank always wins against every rank issued before it.

use crate::constants::INITIAL_Z_RANK;
use crate::types::ZRank;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out strictly increasing front-to-back ranks.
///
/// Execution is single-threaded and sequential event dispatch already
/// provides exclusivity, but the counter is atomic so the monotonicity
/// guarantee survives if concurrent access is ever introduced. No upper
/// bound is enforced; a `u64` cannot be exhausted in an interactive session.
#[derive(Debug)]
pub struct ZOrderAllocator {
    next: AtomicU64,
}

impl ZOrderAllocator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(INITIAL_Z_RANK),
        }
    }

    /// Issue the next rank. Every returned value is strictly greater than
    /// all previously issued values.
    pub fn next(&self) -> ZRank {
        ZRank(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The highest rank issued so far, if any.
    pub fn last_issued(&self) -> Option<ZRank> {
        let next = self.next.load(Ordering::Relaxed);
        (next > INITIAL_Z_RANK).then(|| ZRank(next - 1))
    }
}

impl Default for ZOrderAllocator {
    fn default() -> Self {
        Self::new()
    }
}
