//! A single cache line.

use serde::Serialize;

/// A main memory block resident in a cache set.
///
/// The block number is fixed for the lifetime of the value. The age is the
/// logical clock value of the most recent access and is the only thing that
/// changes, on a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheBlock {
    block_number: u64,
    age: u64,
}

impl CacheBlock {
    /// Create a block stamped with the access time `age`.
    pub fn new(block_number: u64, age: u64) -> Self {
        Self { block_number, age }
    }

    /// Main memory block number held by this line.
    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    /// Logical time of the last access.
    pub fn age(&self) -> u64 {
        self.age
    }

    /// Refresh the age after a hit.
    pub fn update(&mut self, age: u64) {
        self.age = age;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_update_keeps_identity() {
        let mut block = CacheBlock::new(42, 3);
        assert_eq!(block.block_number(), 42);
        assert_eq!(block.age(), 3);

        block.update(17);
        assert_eq!(block.block_number(), 42);
        assert_eq!(block.age(), 17);
    }

    #[test]
    fn test_block_serializes_as_occupant() {
        let json = serde_json::to_string(&CacheBlock::new(5, 9)).unwrap();
        assert_eq!(json, r#"{"block_number":5,"age":9}"#);
    }
}
