//! Startup configuration for the packet inspector.

use crate::groups::{
    echo_election_group, election_helper_group, module_election_group, routing_protocol_group,
};
use modnet_types::Addr;
use serde::{Deserialize, Serialize};

/// Address sets for one simulation run.
///
/// Supplied at startup and never re-read; the inspector copies the lists
/// into immutable [`AddressSet`](crate::AddressSet)s at construction.
/// Addresses (de)serialize in IPv6 textual notation, so the config can live
/// inside a host's run-configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Destinations whose packets increment the traffic counter.
    #[serde(default)]
    pub counted: Vec<Addr>,
    /// Destinations reported as routing-protocol observations.
    #[serde(default)]
    pub routing: Vec<Addr>,
}

impl InspectorConfig {
    /// Create a configuration from explicit address lists.
    pub fn new(counted: Vec<Addr>, routing: Vec<Addr>) -> Self {
        Self { counted, routing }
    }

    /// The standard configuration for an election experiment: count traffic
    /// on the election groups (helper, echo, and one group per module) and
    /// observe the routing-protocol group.
    pub fn election_default(module_ids: impl IntoIterator<Item = u16>) -> Self {
        let mut counted = vec![election_helper_group(), echo_election_group()];
        counted.extend(module_ids.into_iter().map(module_election_group));
        Self {
            counted,
            routing: vec![routing_protocol_group()],
        }
    }
}

/// Errors in the startup configuration, surfaced before any packet is
/// processed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An address-set entry is not exactly 16 bytes.
    #[error("Address entry {index} has {actual} bytes, expected 16")]
    InvalidAddressLength {
        /// Position of the offending entry.
        index: usize,
        /// Actual entry length.
        actual: usize,
    },
}
