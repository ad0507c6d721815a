//! The open set: cells discovered but not yet expanded.
//!
//! Backed by a binary heap with lazy deletion. Lowering a cell's cost pushes
//! a fresh entry; the superseded one is dropped when it reaches the top.
//!
//! Selection order is lowest `f`, then lowest `h`, then earliest insertion.
//! A strict cost improvement counts as a new insertion.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use grid_types::CellCoord;

/// A heap entry.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: u32,
    h: u32,
    seq: u64,
    g: u32,
    coord: CellCoord,
}

impl OpenEntry {
    const fn key(&self) -> (u32, u32, u64) {
        (self.f, self.h, self.seq)
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior
        other.key().cmp(&self.key())
    }
}

/// Priority queue of open cells, unique by coordinate.
///
/// # Example
///
/// ```
/// use grid_astar::OpenSet;
/// use grid_types::CellCoord;
///
/// let mut open = OpenSet::new();
/// open.push(CellCoord::new(0, 1), 10, 5);
/// open.push(CellCoord::new(1, 0), 10, 3);
///
/// // f = 13 beats f = 15.
/// assert_eq!(open.pop(), Some(CellCoord::new(1, 0)));
/// assert_eq!(open.pop(), Some(CellCoord::new(0, 1)));
/// assert!(open.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    /// Live `g` per open coordinate.
    members: HashMap<CellCoord, u32>,
    next_seq: u64,
}

impl OpenSet {
    /// Creates an empty open set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `coord`, or replaces its entry if already open.
    ///
    /// Callers decide whether a replacement is an improvement; see
    /// [`OpenSet::improves`].
    pub fn push(&mut self, coord: CellCoord, g: u32, h: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.members.insert(coord, g);
        self.heap.push(OpenEntry {
            f: g.saturating_add(h),
            h,
            seq,
            g,
            coord,
        });
    }

    /// Returns `true` if `g` would be an improvement for `coord`: either the
    /// coordinate is not open, or its recorded `g` is strictly greater.
    #[must_use]
    pub fn improves(&self, coord: CellCoord, g: u32) -> bool {
        self.members.get(&coord).is_none_or(|&existing| g < existing)
    }

    /// Removes and returns the best open cell.
    pub fn pop(&mut self) -> Option<CellCoord> {
        self.pop_entry().map(|(coord, _)| coord)
    }

    /// Removes the best open cell and returns it with its `g`.
    pub fn pop_entry(&mut self) -> Option<(CellCoord, u32)> {
        while let Some(entry) = self.heap.pop() {
            if self.members.get(&entry.coord) == Some(&entry.g) {
                self.members.remove(&entry.coord);
                return Some((entry.coord, entry.g));
            }
        }
        None
    }

    /// Returns `true` if `coord` is open.
    #[must_use]
    pub fn contains(&self, coord: CellCoord) -> bool {
        self.members.contains_key(&coord)
    }

    /// The recorded `g` of an open cell.
    #[must_use]
    pub fn g_of(&self, coord: CellCoord) -> Option<u32> {
        self.members.get(&coord).copied()
    }

    /// Number of open cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if no cell is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The open coordinates, in no particular order.
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.members.keys().copied()
    }

    /// Empties the set and restarts the insertion counter.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.members.clear();
        self.next_seq = 0;
    }
}
