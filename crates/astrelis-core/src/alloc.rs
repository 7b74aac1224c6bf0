//! Hash collections used across the designer.
//!
//! Ids in the designer are small integers, so the AHash hasher is used
//! instead of SipHash.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_u64_keys() {
        let mut map = HashMap::new();
        map.insert(7u64, "button");
        map.insert(9u64, "grid");
        assert_eq!(map.get(&7), Some(&"button"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_hashset_dedup() {
        let mut set = HashSet::new();
        assert!(set.insert(42u64));
        assert!(!set.insert(42u64));
    }
}
