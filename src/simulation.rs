//! A single simulation run: one cache, its event history and timing model.

use crate::cache::{AccessEvent, CacheMemory, CacheStats};
use crate::config::Options;
use crate::error::Result;
use crate::report::{self, ReportOptions, Summary};

/// Drives a [`CacheMemory`] through an access trace and keeps every event.
///
/// # Example
///
/// ```
/// use setsim::{Options, Simulation};
///
/// # fn main() -> Result<(), setsim::Error> {
/// let mut sim = Simulation::new(&Options::default())?;
/// sim.run([0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2, 3, 4, 5, 6, 7]);
///
/// let stats = sim.stats();
/// assert_eq!((stats.hits, stats.misses), (8, 8));
/// println!("{}", sim.report(&Default::default()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    options: Options,
    cache: CacheMemory,
    events: Vec<AccessEvent>,
}

impl Simulation {
    /// Start a run with a fresh cache built from `options`.
    pub fn new(options: &Options) -> Result<Self> {
        let cache = CacheMemory::with_options(options)?;
        Ok(Self { options: options.clone(), cache, events: Vec::new() })
    }

    /// Access one block and record the event.
    pub fn access(&mut self, block_number: u64) -> &AccessEvent {
        let event = self.cache.insert(block_number);
        self.push(event)
    }

    /// Access the block holding `word_address` and record the event.
    pub fn access_address(&mut self, word_address: u64) -> &AccessEvent {
        let event = self.cache.insert_address(word_address);
        self.push(event)
    }

    fn push(&mut self, event: AccessEvent) -> &AccessEvent {
        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    /// Access every block of `trace` in order.
    pub fn run<I>(&mut self, trace: I)
    where
        I: IntoIterator<Item = u64>,
    {
        for block_number in trace {
            self.access(block_number);
        }
    }

    /// Events recorded so far, in access order.
    pub fn events(&self) -> &[AccessEvent] {
        &self.events
    }

    /// The cache being driven.
    pub fn cache(&self) -> &CacheMemory {
        &self.cache
    }

    /// Current hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Summary figures including access times.
    pub fn summary(&self) -> Summary {
        Summary::with_timing(&self.cache.stats(), &self.options.timing)
    }

    /// Full text report of the run so far.
    pub fn report(&self, options: &ReportOptions) -> String {
        report::export_report(&self.events, &self.summary(), options)
    }

    /// Discard all state and start again with an empty cache.
    pub fn reset(&mut self) -> Result<()> {
        self.cache = CacheMemory::with_options(&self.options)?;
        self.events.clear();
        Ok(())
    }
}
