//! The whole cache: set array, logical clock and statistics.

use serde::Serialize;

use super::block::CacheBlock;
use super::event::{AccessEvent, AccessOutcome};
use super::set::{CacheSet, SetSnapshot};
use crate::config::Options;
use crate::error::Result;

/// Running hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of accesses that found their block resident
    pub hits: u64,
    /// Number of accesses that had to load their block
    pub misses: u64,
    /// Number of misses that replaced a resident block
    pub evictions: u64,
}

impl CacheStats {
    /// Total number of accesses (`hits + misses`)
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate as a percentage (0.0 to 100.0), 0.0 with no accesses
    pub fn hit_rate(&self) -> f64 {
        percent(self.hits, self.accesses())
    }

    /// Miss rate as a percentage (0.0 to 100.0), 0.0 with no accesses
    pub fn miss_rate(&self) -> f64 {
        percent(self.misses, self.accesses())
    }

    fn record(&mut self, outcome: &AccessOutcome) {
        match outcome {
            AccessOutcome::Hit { .. } => self.hits += 1,
            AccessOutcome::Miss { evicted, .. } => {
                self.misses += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }
}

pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// A 4-way set-associative cache with LRU replacement.
///
/// The geometry is validated once in [`CacheMemory::with_options`] and never
/// changes; to start a new run, build a new cache.
///
/// # Examples
///
/// ```
/// use setsim::cache::{AccessStatus, CacheMemory};
///
/// let mut cache = CacheMemory::new(2, 8)?;
/// assert_eq!(cache.num_sets(), 2);
///
/// assert_eq!(cache.insert(5).status(), AccessStatus::Miss);
/// assert_eq!(cache.insert(5).status(), AccessStatus::Hit);
/// assert_eq!(cache.stats().accesses(), 2);
/// # Ok::<(), setsim::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CacheMemory {
    words_per_block: usize,
    num_blocks: usize,
    sets: Vec<CacheSet>,
    /// Logical time of the next access
    clock: u64,
    stats: CacheStats,
    trace_accesses: bool,
}

impl CacheMemory {
    /// Build a cache with `words_per_block` words per block and `num_blocks`
    /// blocks in total, using default options otherwise.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWordsPerBlock`](crate::Error::InvalidWordsPerBlock) or
    /// [`Error::InvalidBlockCount`](crate::Error::InvalidBlockCount) when the
    /// geometry is not a power of two of the minimum size.
    pub fn new(words_per_block: usize, num_blocks: usize) -> Result<Self> {
        Self::with_options(&Options::new().words_per_block(words_per_block).num_blocks(num_blocks))
    }

    /// Build a cache from validated options.
    pub fn with_options(options: &Options) -> Result<Self> {
        options.validate()?;

        let sets = (0..options.num_sets()).map(CacheSet::new).collect::<Vec<_>>();

        log::info!(
            "Created cache: {} blocks of {} words in {} sets",
            options.num_blocks,
            options.words_per_block,
            sets.len()
        );

        Ok(Self {
            words_per_block: options.words_per_block,
            num_blocks: options.num_blocks,
            sets,
            clock: 0,
            stats: CacheStats::default(),
            trace_accesses: options.trace_accesses,
        })
    }

    /// Set index for a block number (`block_number % num_sets`).
    pub fn map_to_set(&self, block_number: u64) -> usize {
        (block_number % self.sets.len() as u64) as usize
    }

    /// Main memory block containing `word_address`.
    pub fn block_for_address(&self, word_address: u64) -> u64 {
        word_address / self.words_per_block as u64
    }

    /// Access `block_number`, loading it into its set if needed.
    ///
    /// The set decides hit or miss before touching its slots, and that
    /// decision is what the statistics record. The clock advances by exactly
    /// one per call; the returned event carries the value it had before.
    pub fn insert(&mut self, block_number: u64) -> AccessEvent {
        let set_number = self.map_to_set(block_number);
        let sequence = self.clock;

        let outcome = self.sets[set_number].insert_block(CacheBlock::new(block_number, sequence));
        self.stats.record(&outcome);
        self.clock += 1;

        let event = AccessEvent { sequence, set: set_number, block: block_number, outcome };
        if self.trace_accesses {
            trace(&event);
        }
        event
    }

    /// Access the block holding `word_address`.
    pub fn insert_address(&mut self, word_address: u64) -> AccessEvent {
        self.insert(self.block_for_address(word_address))
    }

    /// Current hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Contents of every set, in set order.
    pub fn snapshot(&self) -> Vec<SetSnapshot> {
        self.sets.iter().map(CacheSet::snapshot).collect()
    }

    /// [`snapshot`](Self::snapshot) rendered as JSON.
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Words per block.
    pub fn words_per_block(&self) -> usize {
        self.words_per_block
    }

    /// Total block capacity.
    pub fn num_blocks(&self) -> usize {
        self.num_blocks
    }

    /// Number of sets.
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    /// Logical time that the next access will be stamped with.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// The set at `index`, if it exists.
    pub fn set(&self, index: usize) -> Option<&CacheSet> {
        self.sets.get(index)
    }

    /// All sets in order.
    pub fn sets(&self) -> &[CacheSet] {
        &self.sets
    }
}

fn trace(event: &AccessEvent) {
    match event.outcome {
        AccessOutcome::Hit { slot } => log::debug!(
            "Cache hit: updated block {} in set {} slot {}",
            event.block,
            event.set,
            slot
        ),
        AccessOutcome::Miss { slot, evicted: None } => log::debug!(
            "Cache miss: inserted block {} into set {} slot {}",
            event.block,
            event.set,
            slot
        ),
        AccessOutcome::Miss { slot, evicted: Some(evicted) } => log::debug!(
            "Cache miss: inserted block {}, replacing block {} in set {} slot {}",
            event.block,
            evicted,
            event.set,
            slot
        ),
    }
}
