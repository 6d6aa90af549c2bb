//! Basic usage example for SetSim
//!
//! This example demonstrates the fundamental operations:
//! - Building a cache
//! - Accessing blocks and reading the access events
//! - Inspecting statistics and cache contents
//!
//! Run with `RUST_LOG=debug` to see every access traced.

use setsim::cache::{AccessOutcome, CacheMemory};
use setsim::Options;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    // 2 words per block, 8 blocks => 2 sets of 4 slots
    let options = Options::default().words_per_block(2).num_blocks(8).trace_accesses(true);
    let mut cache = CacheMemory::with_options(&options)?;
    println!("Cache built with {} sets", cache.num_sets());

    // Two passes: the first fills both sets, the second hits every block
    for block in (0..8).chain(0..8) {
        let event = cache.insert(block);
        match event.outcome {
            AccessOutcome::Hit { slot } => {
                println!("[{}] block {} hit in set {} slot {}", event.sequence, block, event.set, slot)
            }
            AccessOutcome::Miss { slot, evicted } => println!(
                "[{}] block {} missed, placed in set {} slot {} (evicted: {:?})",
                event.sequence, block, event.set, slot, evicted
            ),
        }
    }

    // A fifth even block forces an eviction in set 0
    let event = cache.insert(8);
    println!("Block 8 replaced block {:?}", event.evicted());

    let stats = cache.stats();
    println!(
        "Hits: {}, Misses: {}, Hit rate: {:.2}%",
        stats.hits,
        stats.misses,
        stats.hit_rate()
    );

    for set in cache.snapshot() {
        let blocks: Vec<String> =
            set.occupants.iter().map(|b| format!("{}@{}", b.block_number(), b.age())).collect();
        println!("Set {}: {}", set.set_number, blocks.join(", "));
    }

    Ok(())
}
