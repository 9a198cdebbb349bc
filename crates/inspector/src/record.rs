//! Diagnostic traffic records and their sinks.

use modnet_types::EndpointRef;
use serde::Serialize;
use std::sync::Mutex;
use tracing::info;

/// A diagnostic record emitted for a classified packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TrafficRecord {
    /// A packet matched the counted set.
    Match {
        /// Traffic counter value after this packet's own increment.
        count: u64,
        /// Sending endpoint.
        sender: EndpointRef,
        /// Receiving endpoint.
        receiver: EndpointRef,
    },
    /// A packet matched the routing set.
    RoutingObserved {
        /// Sending endpoint.
        sender: EndpointRef,
        /// Receiving endpoint.
        receiver: EndpointRef,
    },
}

/// Destination for diagnostic records.
///
/// The sink is a deployment choice: production hosts log, tests and
/// post-processing hosts buffer. Sinks are called from whichever thread
/// performed the inspection and must tolerate concurrent emission; record
/// ordering across concurrent calls is best-effort.
pub trait RecordSink: Send + Sync {
    /// Emit a single record.
    fn emit(&self, record: &TrafficRecord);
}

/// Emits each record as a structured `tracing` event.
///
/// This is the default sink; the host picks the subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl RecordSink for TracingSink {
    fn emit(&self, record: &TrafficRecord) {
        match record {
            TrafficRecord::Match {
                count,
                sender,
                receiver,
            } => {
                info!(
                    count,
                    sender_module = %sender.module,
                    sender_connector = sender.connector,
                    receiver_module = %receiver.module,
                    receiver_connector = receiver.connector,
                    "counted multicast packet"
                );
            }
            TrafficRecord::RoutingObserved { sender, receiver } => {
                info!(
                    sender_module = %sender.module,
                    sender_connector = sender.connector,
                    receiver_module = %receiver.module,
                    receiver_connector = receiver.connector,
                    "routing message observed"
                );
            }
        }
    }
}

/// Buffers records in memory.
///
/// Used by tests and by hosts that post-process records themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<TrafficRecord>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all buffered records, leaving the sink empty.
    pub fn take(&self) -> Vec<TrafficRecord> {
        std::mem::take(&mut self.records.lock().unwrap())
    }

    /// Copy the buffered records without draining them.
    pub fn snapshot(&self) -> Vec<TrafficRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl RecordSink for MemorySink {
    fn emit(&self, record: &TrafficRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}
