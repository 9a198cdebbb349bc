//! The per-run packet inspection hook.

use crate::address_set::AddressSet;
use crate::config::InspectorConfig;
use crate::header::{destination_address, InspectError};
use crate::record::{RecordSink, TracingSink, TrafficRecord};
use modnet_types::EndpointRef;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Classification result for one packet.
///
/// The flags are independent: a destination may in principle appear in both
/// configured sets, and then both are true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspection {
    /// The destination matched the counted set.
    pub counted: bool,
    /// The destination matched the routing set.
    pub routing: bool,
    /// Delivery delay the simulator should impose. Always zero — the hook
    /// only observes, it never slows a packet down.
    pub delay: Duration,
}

/// Snapshot of the run's traffic counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrafficTotals {
    /// Packets matched against the counted set.
    pub matched: u64,
    /// Packets matched against the routing set.
    pub routing_observed: u64,
}

/// Packet classification and traffic-counting hook.
///
/// One inspector is created per simulation run and owns that run's counters;
/// a second run gets a fresh inspector and starts from zero. The simulator
/// calls [`inspect`](Self::inspect) once per packet per link traversal, from
/// one thread or many — counter updates are single atomic read-modify-writes,
/// so no increment is lost under concurrent delivery.
pub struct PacketInspector {
    counted: AddressSet,
    routing: AddressSet,
    matched: AtomicU64,
    routing_observed: AtomicU64,
    sink: Arc<dyn RecordSink>,
}

impl std::fmt::Debug for PacketInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PacketInspector")
            .field("counted", &self.counted)
            .field("routing", &self.routing)
            .field("totals", &self.totals())
            .finish()
    }
}

impl PacketInspector {
    /// Create an inspector that logs records through the [`TracingSink`].
    pub fn new(config: InspectorConfig) -> Self {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create an inspector with an explicit record sink.
    pub fn with_sink(config: InspectorConfig, sink: Arc<dyn RecordSink>) -> Self {
        Self {
            counted: AddressSet::new(config.counted),
            routing: AddressSet::new(config.routing),
            matched: AtomicU64::new(0),
            routing_observed: AtomicU64::new(0),
            sink,
        }
    }

    /// Inspect one packet crossing the link from `sender` to `receiver`.
    ///
    /// Extracts the destination address from the fixed header, checks it
    /// against the counted and routing sets independently, updates the
    /// counters, and emits a record per match. The packet is borrowed
    /// immutably, so pass-through without mutation is guaranteed by the
    /// signature; the returned delay is always zero.
    ///
    /// A packet shorter than the fixed header fails with
    /// [`InspectError::MalformedPacket`] before any counter update or record
    /// emission.
    pub fn inspect(
        &self,
        packet: &[u8],
        sender: &EndpointRef,
        receiver: &EndpointRef,
    ) -> Result<Inspection, InspectError> {
        let dst = destination_address(packet)?;

        let counted = self.counted.contains(&dst);
        if counted {
            // fetch_add returns the previous value, so prev + 1 is this
            // call's own count even when calls interleave.
            let count = self.matched.fetch_add(1, Ordering::Relaxed) + 1;
            self.sink.emit(&TrafficRecord::Match {
                count,
                sender: sender.clone(),
                receiver: receiver.clone(),
            });
        }

        let routing = self.routing.contains(&dst);
        if routing {
            self.routing_observed.fetch_add(1, Ordering::Relaxed);
            self.sink.emit(&TrafficRecord::RoutingObserved {
                sender: sender.clone(),
                receiver: receiver.clone(),
            });
        }

        Ok(Inspection {
            counted,
            routing,
            delay: Duration::ZERO,
        })
    }

    /// Current value of the traffic counter.
    pub fn matched_count(&self) -> u64 {
        self.matched.load(Ordering::Relaxed)
    }

    /// Snapshot of both counters.
    pub fn totals(&self) -> TrafficTotals {
        TrafficTotals {
            matched: self.matched.load(Ordering::Relaxed),
            routing_observed: self.routing_observed.load(Ordering::Relaxed),
        }
    }
}
