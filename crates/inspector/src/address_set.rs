//! Immutable address sets for classification.

use crate::config::ConfigError;
use modnet_types::Addr;
use std::collections::HashSet;

/// An immutable set of destination addresses of interest.
///
/// Built once at startup and read-only afterwards, so it can be shared
/// across concurrent inspections without locking. Membership is a hash
/// lookup keyed by the 16-byte value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSet(HashSet<Addr>);

impl AddressSet {
    /// Create a set from addresses.
    pub fn new(addrs: impl IntoIterator<Item = Addr>) -> Self {
        Self(addrs.into_iter().collect())
    }

    /// Create a set from raw byte entries, validating each entry's length.
    ///
    /// This is the startup path for hosts that carry address lists as raw
    /// bytes; an entry that is not exactly 16 bytes fails configuration
    /// before any packet is processed.
    pub fn from_raw_entries<I, B>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut addrs = HashSet::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let bytes = entry.as_ref();
            let addr = Addr::from_slice(bytes).map_err(|_| ConfigError::InvalidAddressLength {
                index,
                actual: bytes.len(),
            })?;
            addrs.insert(addr);
        }
        Ok(Self(addrs))
    }

    /// Check whether the set contains an address.
    pub fn contains(&self, addr: &Addr) -> bool {
        self.0.contains(addr)
    }

    /// Get the number of addresses in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the addresses.
    pub fn iter(&self) -> impl Iterator<Item = &Addr> {
        self.0.iter()
    }
}

impl FromIterator<Addr> for AddressSet {
    fn from_iter<I: IntoIterator<Item = Addr>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let inside: Addr = "ff02::ee:da".parse().unwrap();
        let outside: Addr = "ff02::ea:ea".parse().unwrap();

        let set = AddressSet::new([inside]);
        assert!(set.contains(&inside));
        assert!(!set.contains(&outside));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_raw_entries() {
        let set = AddressSet::from_raw_entries([
            b"\xff\x02\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\xee\x00\xda".to_vec(),
            b"\xfc\x07\x00\x00\x00\x00\x00\x04\x00\x00\x00\x00\x00\x00\x00\x01".to_vec(),
        ])
        .unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains(&"fc07:0:0:4::1".parse().unwrap()));
    }

    #[test]
    fn test_from_raw_entries_rejects_bad_length() {
        let err = AddressSet::from_raw_entries([
            [0u8; 16].as_slice(),
            [0u8; 15].as_slice(),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidAddressLength {
                index: 1,
                actual: 15,
            }
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let addr: Addr = "fc07:0:0:1::1".parse().unwrap();
        let set = AddressSet::new([addr, addr]);
        assert_eq!(set.len(), 1);
    }
}
