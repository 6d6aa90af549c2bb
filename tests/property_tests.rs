// Property Tests for SetSim
// These tests check cache invariants over arbitrary access traces

use proptest::prelude::*;
use proptest::sample::Index;
use setsim::cache::CacheMemory;
use setsim::report::format_log;
use setsim::SET_CAPACITY;
use std::collections::HashSet;

fn geometry() -> impl Strategy<Value = usize> {
    // 4, 8, 16 or 32 blocks => 1 to 8 sets
    (2u32..6).prop_map(|shift| 1usize << shift)
}

proptest! {
    /// No set ever holds more than its capacity or a duplicate block.
    #[test]
    fn prop_capacity_and_uniqueness(
        num_blocks in geometry(),
        trace in prop::collection::vec(0u64..64, 0..300)
    ) {
        let mut cache = CacheMemory::new(2, num_blocks).unwrap();
        for block in trace {
            cache.insert(block);
            for set in cache.sets() {
                prop_assert!(set.len() <= SET_CAPACITY);
                let distinct: HashSet<u64> = set.blocks().iter().map(|b| b.block_number()).collect();
                prop_assert_eq!(distinct.len(), set.len());
            }
        }
    }

    /// The clock advances by one per access and stats account for every access.
    #[test]
    fn prop_clock_and_conservation(
        num_blocks in geometry(),
        trace in prop::collection::vec(0u64..64, 0..300)
    ) {
        let mut cache = CacheMemory::new(4, num_blocks).unwrap();
        for (i, &block) in trace.iter().enumerate() {
            prop_assert_eq!(cache.clock(), i as u64);
            let event = cache.insert(block);
            prop_assert_eq!(event.sequence, i as u64);
            prop_assert_eq!(cache.clock(), i as u64 + 1);
        }
        let stats = cache.stats();
        prop_assert_eq!(stats.hits + stats.misses, trace.len() as u64);
        prop_assert!(stats.evictions <= stats.misses);
    }

    /// Hits are reported exactly when the block was resident beforehand.
    #[test]
    fn prop_hit_iff_resident(
        num_blocks in geometry(),
        trace in prop::collection::vec(0u64..48, 0..300)
    ) {
        let mut cache = CacheMemory::new(2, num_blocks).unwrap();
        for block in trace {
            let set = cache.map_to_set(block);
            let slot_before = cache.set(set).unwrap().find_block(block);
            let event = cache.insert(block);
            prop_assert_eq!(event.set, set);
            prop_assert_eq!(event.is_hit(), slot_before.is_some());
            if let Some(slot) = slot_before {
                prop_assert_eq!(event.slot(), slot);
            }
        }
    }

    /// A repeated access is always a hit in the same place.
    #[test]
    fn prop_repeat_is_hit(
        num_blocks in geometry(),
        prefix in prop::collection::vec(0u64..64, 0..100),
        block in 0u64..64
    ) {
        let mut cache = CacheMemory::new(2, num_blocks).unwrap();
        for b in prefix {
            cache.insert(b);
        }
        let first = cache.insert(block);
        let second = cache.insert(block);
        prop_assert!(second.is_hit());
        prop_assert_eq!((first.set, first.slot()), (second.set, second.slot()));
    }

    /// Evictions take the oldest occupant, lowest slot first on equal age.
    #[test]
    fn prop_evicts_least_recently_used(
        num_blocks in geometry(),
        trace in prop::collection::vec(0u64..64, 0..300)
    ) {
        let mut cache = CacheMemory::new(2, num_blocks).unwrap();
        for block in trace {
            let set = cache.map_to_set(block);
            let before = cache.set(set).unwrap().blocks().to_vec();
            let event = cache.insert(block);

            if let Some(evicted) = event.evicted() {
                prop_assert_eq!(before.len(), SET_CAPACITY);
                let min_age = before.iter().map(|b| b.age()).min().unwrap();
                let expected = before.iter().position(|b| b.age() == min_age).unwrap();
                prop_assert_eq!(event.slot(), expected);
                prop_assert_eq!(before[expected].block_number(), evicted);
            }
        }
    }

    /// The log text does not depend on the order events are submitted in.
    #[test]
    fn prop_log_is_order_independent(
        trace in prop::collection::vec(0u64..32, 1..120),
        swaps in prop::collection::vec((any::<Index>(), any::<Index>()), 0..60)
    ) {
        let mut cache = CacheMemory::new(2, 8).unwrap();
        let events: Vec<_> = trace.iter().map(|&b| cache.insert(b)).collect();

        let mut shuffled = events.clone();
        for (a, b) in swaps {
            let len = shuffled.len();
            shuffled.swap(a.index(len), b.index(len));
        }
        shuffled.reverse();

        prop_assert_eq!(format_log(&shuffled), format_log(&events));
    }
}
