//! Set-associative cache model.
//!
//! A [`CacheMemory`] owns a fixed array of [`CacheSet`]s, each holding up to
//! [`SET_CAPACITY`](crate::config::SET_CAPACITY) [`CacheBlock`]s. Blocks are
//! placed by `block_number % num_sets` and evicted least recently used first.
//! Every access produces an [`AccessEvent`] that can later be rendered by the
//! [`report`](crate::report) module.

mod block;
mod event;
mod memory;
mod set;

pub use block::CacheBlock;
pub use event::{AccessEvent, AccessOutcome, AccessStatus};
pub(crate) use memory::percent;
pub use memory::{CacheMemory, CacheStats};
pub use set::{CacheSet, SetSnapshot};
