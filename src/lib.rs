//! # SetSim - A Set-Associative Cache Simulator
//!
//! SetSim models how a hardware cache stores and evicts main memory blocks.
//! The cache is 4-way set-associative with least recently used (LRU)
//! replacement, and every access yields a structured event so that a run can
//! be replayed, logged and summarised.
//!
//! ## Architecture
//!
//! - **CacheBlock**: a resident block number plus the logical time of its last access
//! - **CacheSet**: four slots with membership lookup and LRU eviction
//! - **CacheMemory**: the set array, block-to-set mapping, logical clock and statistics
//! - **Report**: deterministic text rendering of events and summary figures
//! - **Simulation**: a run driver that collects events and derives access times
//!
//! The simulator is synchronous and single-threaded. Concurrent runs each own
//! their own [`CacheMemory`].
//!
//! ## Example Usage
//!
//! ```rust
//! use setsim::cache::{AccessOutcome, CacheMemory};
//!
//! # fn main() -> Result<(), setsim::Error> {
//! // 2 words per block, 8 blocks => 2 sets of 4
//! let mut cache = CacheMemory::new(2, 8)?;
//!
//! let event = cache.insert(6);
//! assert_eq!(event.set, 0);
//! assert_eq!(event.outcome, AccessOutcome::Miss { slot: 0, evicted: None });
//!
//! let event = cache.insert(6);
//! assert_eq!(event.outcome, AccessOutcome::Hit { slot: 0 });
//!
//! let stats = cache.stats();
//! assert_eq!((stats.hits, stats.misses), (1, 1));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Module declarations
pub mod cache;
pub mod config;
pub mod error;
pub mod report;
pub mod simulation;

// Re-exports
pub use cache::{AccessEvent, AccessOutcome, AccessStatus, CacheMemory, CacheStats};
pub use config::{AccessTiming, Options, SET_CAPACITY};
pub use error::{Error, Result};
pub use report::{ReportOptions, Summary};
pub use simulation::Simulation;
