//! Access events produced by [`CacheMemory::insert`](super::CacheMemory::insert).

use std::fmt;

use serde::Serialize;

/// Whether an access found its block resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccessStatus {
    /// The block was already in its set.
    Hit,
    /// The block had to be brought in.
    Miss,
}

impl AccessStatus {
    /// Display name used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessStatus::Hit => "Hit",
            AccessStatus::Miss => "Miss",
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers like {:<4} apply
        f.pad(self.as_str())
    }
}

/// What a set did with an incoming block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum AccessOutcome {
    /// The block was resident in `slot`; its age was refreshed.
    Hit {
        /// Slot holding the block.
        slot: usize,
    },
    /// The block was placed in `slot`, replacing `evicted` if the set was full.
    Miss {
        /// Slot the block now occupies.
        slot: usize,
        /// Block number that was evicted to make room.
        evicted: Option<u64>,
    },
}

impl AccessOutcome {
    /// Slot index within the set.
    pub fn slot(&self) -> usize {
        match *self {
            AccessOutcome::Hit { slot } | AccessOutcome::Miss { slot, .. } => slot,
        }
    }

    /// Hit or miss.
    pub fn status(&self) -> AccessStatus {
        match self {
            AccessOutcome::Hit { .. } => AccessStatus::Hit,
            AccessOutcome::Miss { .. } => AccessStatus::Miss,
        }
    }

    /// Returns true for a hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessOutcome::Hit { .. })
    }

    /// The evicted block number, only for a miss into a full set.
    pub fn evicted(&self) -> Option<u64> {
        match *self {
            AccessOutcome::Miss { evicted, .. } => evicted,
            AccessOutcome::Hit { .. } => None,
        }
    }
}

/// Immutable record of one cache access.
///
/// Events outlive the cache that produced them; the caller collects them and
/// may hand them to [`report::format_log`](crate::report::format_log) in any
/// order, since `sequence` fixes their position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessEvent {
    /// Clock value at the time of the access.
    pub sequence: u64,
    /// Set the block maps to.
    pub set: usize,
    /// Requested main memory block number.
    pub block: u64,
    /// Placement result.
    #[serde(flatten)]
    pub outcome: AccessOutcome,
}

impl AccessEvent {
    /// Hit or miss.
    pub fn status(&self) -> AccessStatus {
        self.outcome.status()
    }

    /// Slot index within the set.
    pub fn slot(&self) -> usize {
        self.outcome.slot()
    }

    /// Returns true for a hit.
    pub fn is_hit(&self) -> bool {
        self.outcome.is_hit()
    }

    /// The evicted block number, if any.
    pub fn evicted(&self) -> Option<u64> {
        self.outcome.evicted()
    }
}
