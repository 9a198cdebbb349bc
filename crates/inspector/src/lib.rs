//! Packet classification and traffic counting for simulated module networks.
//!
//! The host simulator invokes [`PacketInspector::inspect`] once per packet
//! per link traversal. The inspector reads the destination-address field of
//! the fixed network-layer header, matches it against two address sets
//! configured at startup, bumps run-scoped atomic counters, and emits
//! [`TrafficRecord`]s through a pluggable [`RecordSink`]. The packet itself
//! is only ever observed — the hook never mutates or drops it, and always
//! answers with a zero delivery delay.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   PacketInspector                    │
//! │                                                      │
//! │  packet ──▶ destination_address (header bytes 24..40)│
//! │                 │                                    │
//! │                 ├─▶ counted set? ──▶ counter += 1    │
//! │                 │                    Match record    │
//! │                 └─▶ routing set? ──▶ RoutingObserved │
//! │                                      record          │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use modnet_inspector::{InspectorConfig, PacketInspector};
//! use modnet_types::{Addr, EndpointRef};
//!
//! let group: Addr = "fc07:0:0:4::1".parse().unwrap();
//! let inspector = PacketInspector::new(InspectorConfig::new(vec![group], vec![]));
//!
//! let mut packet = vec![0u8; 40];
//! packet[24..40].copy_from_slice(group.as_bytes());
//!
//! let sender = EndpointRef::new("A", 0);
//! let receiver = EndpointRef::new("B", 1);
//! let inspection = inspector.inspect(&packet, &sender, &receiver).unwrap();
//!
//! assert!(inspection.counted);
//! assert_eq!(inspection.delay, std::time::Duration::ZERO);
//! assert_eq!(inspector.matched_count(), 1);
//! ```

mod address_set;
mod config;
mod groups;
mod header;
mod inspector;
mod record;

pub use address_set::AddressSet;
pub use config::{ConfigError, InspectorConfig};
pub use groups::{
    echo_election_group, election_helper_group, module_election_group, routing_protocol_group,
};
pub use header::{destination_address, InspectError, DST_ADDR_OFFSET, HEADER_LEN};
pub use inspector::{Inspection, PacketInspector, TrafficTotals};
pub use record::{MemorySink, RecordSink, TracingSink, TrafficRecord};
