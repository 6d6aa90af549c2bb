//! Configuration options for the SetSim cache simulator.

use crate::error::{Error, Result};

/// Number of block slots in every cache set (4-way set-associative).
pub const SET_CAPACITY: usize = 4;

/// Smallest accepted block size, in words.
pub const MIN_WORDS_PER_BLOCK: usize = 2;

/// Smallest accepted cache size, in blocks.
pub const MIN_NUM_BLOCKS: usize = SET_CAPACITY;

/// Latency model used to turn hit/miss counts into access times.
///
/// A hit costs one cache access. A miss costs a cache access followed by a
/// main memory access.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessTiming {
    /// Cache access time in milliseconds.
    /// Default: 5.0
    pub cache_access_time: f64,

    /// Main memory access time in milliseconds.
    /// Default: 10.0
    pub memory_access_time: f64,
}

impl Default for AccessTiming {
    fn default() -> Self {
        Self { cache_access_time: 5.0, memory_access_time: 10.0 }
    }
}

impl AccessTiming {
    /// Creates a timing model from the two latencies.
    pub fn new(cache_access_time: f64, memory_access_time: f64) -> Self {
        Self { cache_access_time, memory_access_time }
    }

    /// Time charged for a single hit.
    pub fn hit_time(&self) -> f64 {
        self.cache_access_time
    }

    /// Time charged for a single miss.
    pub fn miss_time(&self) -> f64 {
        self.cache_access_time + self.memory_access_time
    }

    /// Total time for the given outcome counts.
    pub fn total_time(&self, hits: u64, misses: u64) -> f64 {
        hits as f64 * self.hit_time() + misses as f64 * self.miss_time()
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in
            [("cache_access_time", self.cache_access_time), ("memory_access_time", self.memory_access_time)]
        {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_argument(format!(
                    "{} must be a finite, non-negative number of milliseconds",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Configuration options for building a cache.
#[derive(Debug, Clone)]
pub struct Options {
    /// Words stored in one block.
    /// Must be a power of two, at least 2.
    /// Default: 2
    pub words_per_block: usize,

    /// Total number of blocks the cache holds.
    /// Must be a power of two, at least 4.
    /// Default: 8 (two sets)
    pub num_blocks: usize,

    /// Latencies used for access time statistics.
    pub timing: AccessTiming,

    /// Emit a `debug` log record for every access.
    /// Default: false
    pub trace_accesses: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            words_per_block: 2,
            num_blocks: 8,
            timing: AccessTiming::default(),
            trace_accesses: false,
        }
    }
}

impl Options {
    /// Creates a new Options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the block size in words.
    pub fn words_per_block(mut self, words: usize) -> Self {
        self.words_per_block = words;
        self
    }

    /// Sets the cache size in blocks.
    pub fn num_blocks(mut self, blocks: usize) -> Self {
        self.num_blocks = blocks;
        self
    }

    /// Sets the access time model.
    pub fn timing(mut self, timing: AccessTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Enables or disables per-access debug logging.
    pub fn trace_accesses(mut self, value: bool) -> Self {
        self.trace_accesses = value;
        self
    }

    /// Number of sets these options produce.
    pub fn num_sets(&self) -> usize {
        self.num_blocks / SET_CAPACITY
    }

    /// Validates the options and returns an error if any are invalid.
    ///
    /// Block size is checked before block count, so a configuration that is
    /// wrong in both ways reports the block size.
    pub fn validate(&self) -> Result<()> {
        if self.words_per_block < MIN_WORDS_PER_BLOCK || !self.words_per_block.is_power_of_two() {
            return Err(Error::InvalidWordsPerBlock(self.words_per_block));
        }
        if self.num_blocks < MIN_NUM_BLOCKS || !self.num_blocks.is_power_of_two() {
            return Err(Error::InvalidBlockCount(self.num_blocks));
        }
        self.timing.validate()
    }
}
