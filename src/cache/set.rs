//! A fixed-capacity cache set with LRU replacement.

use serde::Serialize;

use super::block::CacheBlock;
use super::event::AccessOutcome;
use crate::config::SET_CAPACITY;

/// Read-only copy of one set's contents, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetSnapshot {
    /// Position of the set in the cache.
    pub set_number: usize,
    /// Resident blocks, indexed by slot.
    pub occupants: Vec<CacheBlock>,
}

/// A group of up to [`SET_CAPACITY`] blocks sharing one set index.
///
/// Slots are filled in insertion order and never compacted; an eviction
/// overwrites the victim's slot in place, so slot indices stay stable for the
/// lifetime of a resident block.
#[derive(Debug, Clone)]
pub struct CacheSet {
    set_number: usize,
    blocks: Vec<CacheBlock>,
}

impl CacheSet {
    /// Create an empty set.
    pub fn new(set_number: usize) -> Self {
        Self { set_number, blocks: Vec::with_capacity(SET_CAPACITY) }
    }

    /// Position of this set in the cache.
    pub fn set_number(&self) -> usize {
        self.set_number
    }

    /// Slot holding `block_number`, if resident.
    ///
    /// A linear scan; the set never holds more than [`SET_CAPACITY`] blocks.
    pub fn find_block(&self, block_number: u64) -> Option<usize> {
        self.blocks.iter().position(|b| b.block_number() == block_number)
    }

    /// Slot of the least recently used block, or `None` for an empty set.
    ///
    /// Among blocks with equal minimum age the lowest slot wins.
    pub fn find_earliest_block(&self) -> Option<usize> {
        // min_by_key returns the first of several equal minima
        self.blocks.iter().enumerate().min_by_key(|(_, b)| b.age()).map(|(slot, _)| slot)
    }

    /// Place `candidate` in the set.
    ///
    /// 1. Resident: refresh the occupant's age to the candidate's age (hit).
    /// 2. Room left: append in the next free slot (miss).
    /// 3. Full: overwrite the least recently used slot (miss with eviction).
    ///
    /// # Panics
    ///
    /// Panics if the set is full yet has no least recently used block, which
    /// can only happen if the capacity invariant is broken.
    pub fn insert_block(&mut self, candidate: CacheBlock) -> AccessOutcome {
        if let Some(slot) = self.find_block(candidate.block_number()) {
            self.blocks[slot].update(candidate.age());
            return AccessOutcome::Hit { slot };
        }

        if self.blocks.len() < SET_CAPACITY {
            self.blocks.push(candidate);
            return AccessOutcome::Miss { slot: self.blocks.len() - 1, evicted: None };
        }

        let Some(slot) = self.find_earliest_block() else {
            unreachable!("set {} is full but has no LRU block", self.set_number);
        };
        let evicted = self.blocks[slot].block_number();
        self.blocks[slot] = candidate;
        AccessOutcome::Miss { slot, evicted: Some(evicted) }
    }

    /// Resident blocks in slot order.
    pub fn blocks(&self) -> &[CacheBlock] {
        &self.blocks
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Check if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.blocks.len() == SET_CAPACITY
    }

    /// Copy out the set's contents.
    pub fn snapshot(&self) -> SetSnapshot {
        SetSnapshot { set_number: self.set_number, occupants: self.blocks.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(ages: [u64; SET_CAPACITY]) -> CacheSet {
        let mut set = CacheSet::new(0);
        for (i, age) in ages.into_iter().enumerate() {
            set.insert_block(CacheBlock::new(i as u64 * 10, age));
        }
        set
    }

    #[test]
    fn test_find_block() {
        let mut set = CacheSet::new(3);
        assert_eq!(set.find_block(7), None);

        set.insert_block(CacheBlock::new(7, 0));
        set.insert_block(CacheBlock::new(11, 1));
        assert_eq!(set.find_block(7), Some(0));
        assert_eq!(set.find_block(11), Some(1));
        assert_eq!(set.find_block(15), None);
    }

    #[test]
    fn test_find_earliest_block() {
        assert_eq!(CacheSet::new(0).find_earliest_block(), None);

        let set = filled([4, 2, 9, 3]);
        assert_eq!(set.find_earliest_block(), Some(1));
    }

    #[test]
    fn test_find_earliest_block_tie_takes_first_slot() {
        let set = filled([5, 1, 1, 1]);
        assert_eq!(set.find_earliest_block(), Some(1));

        let set = filled([0, 0, 0, 0]);
        assert_eq!(set.find_earliest_block(), Some(0));
    }

    #[test]
    fn test_insert_fills_slots_in_order() {
        let mut set = CacheSet::new(1);
        for i in 0..SET_CAPACITY {
            let outcome = set.insert_block(CacheBlock::new(i as u64, i as u64));
            assert_eq!(outcome, AccessOutcome::Miss { slot: i, evicted: None });
        }
        assert!(set.is_full());
        assert_eq!(set.len(), SET_CAPACITY);
    }

    #[test]
    fn test_insert_hit_refreshes_age() {
        let mut set = CacheSet::new(0);
        set.insert_block(CacheBlock::new(4, 0));
        set.insert_block(CacheBlock::new(8, 1));

        let outcome = set.insert_block(CacheBlock::new(4, 2));
        assert_eq!(outcome, AccessOutcome::Hit { slot: 0 });
        assert_eq!(set.blocks()[0], CacheBlock::new(4, 2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_insert_full_evicts_lru() {
        let mut set = filled([0, 1, 2, 3]);

        // Touch block 0 so block 10 (age 1) becomes LRU
        set.insert_block(CacheBlock::new(0, 4));

        let outcome = set.insert_block(CacheBlock::new(99, 5));
        assert_eq!(outcome, AccessOutcome::Miss { slot: 1, evicted: Some(10) });
        assert_eq!(set.find_block(10), None);
        assert_eq!(set.find_block(99), Some(1));
        assert_eq!(set.len(), SET_CAPACITY);
    }

    #[test]
    fn test_snapshot_preserves_slot_order() {
        let set = filled([3, 2, 1, 0]);
        let snapshot = set.snapshot();
        assert_eq!(snapshot.set_number, 0);
        let numbers: Vec<u64> = snapshot.occupants.iter().map(|b| b.block_number()).collect();
        assert_eq!(numbers, vec![0, 10, 20, 30]);
    }
}
