//! Transposition table: a hash-keyed cache of previously searched
//! positions, with depth-preferred replacement and a fixed capacity
//! derived from a megabyte budget.

use std::collections::HashMap;

use crate::board::Move;

/// How the stored score relates to the true value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The minimax value was computed exactly.
    Exact,
    /// A beta cutoff occurred; the true score is at least this.
    LowerBound,
    /// No move raised alpha; the true score is at most this.
    UpperBound,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    score: i32,
    depth: u32,
    bound: Bound,
    best_move: Option<Move>,
}

/// Roughly the in-memory footprint of one entry, used to size the table
/// from a megabyte budget.
const BYTES_PER_ENTRY: usize = 40;

/// Caches search results keyed by Zobrist hash. Entries above the size
/// budget are evicted arbitrarily (no LRU/aging bookkeeping), matching a
/// deliberately simple replacement scheme.
pub struct TranspositionTable {
    table: HashMap<u64, Entry>,
    max_entries: usize,
    hits: u64,
    misses: u64,
}

impl TranspositionTable {
    /// Builds a table sized to hold roughly `size_mb` megabytes of entries.
    pub fn new(size_mb: usize) -> Self {
        TranspositionTable {
            table: HashMap::new(),
            max_entries: (size_mb * 1024 * 1024) / BYTES_PER_ENTRY,
            hits: 0,
            misses: 0,
        }
    }

    /// Stores a result, replacing any existing entry only if this one was
    /// computed at least as deep. Evicts an arbitrary entry afterward if
    /// the table has grown past its budget.
    pub fn store(&mut self, hash: u64, depth: u32, score: i32, bound: Bound, best_move: Option<Move>) {
        let should_replace = match self.table.get(&hash) {
            Some(existing) => existing.depth <= depth,
            None => true,
        };
        if !should_replace {
            return;
        }

        self.table.insert(
            hash,
            Entry {
                score,
                depth,
                bound,
                best_move,
            },
        );

        if self.table.len() > self.max_entries
            && let Some(&victim) = self.table.keys().next()
        {
            self.table.remove(&victim);
        }
    }

    /// Looks up `hash`. Returns `Some((Some(score), move))` when the stored
    /// entry is deep enough and its bound resolves the window, `Some((None,
    /// move))` when the entry exists but can only be used for move
    /// ordering, and `None` on a complete miss.
    pub fn probe(
        &mut self,
        hash: u64,
        depth: u32,
        alpha: i32,
        beta: i32,
    ) -> Option<(Option<i32>, Option<Move>)> {
        if let Some(entry) = self.table.get(&hash) {
            if entry.depth >= depth {
                self.hits += 1;
                let resolves = match entry.bound {
                    Bound::Exact => true,
                    Bound::LowerBound => entry.score >= beta,
                    Bound::UpperBound => entry.score <= alpha,
                };
                if resolves {
                    return Some((Some(entry.score), entry.best_move));
                }
            }
            if entry.best_move.is_some() {
                return Some((None, entry.best_move));
            }
        }
        self.misses += 1;
        None
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
