//! Fixed network-layer header layout.

use modnet_types::Addr;

/// Minimum packet length: the fixed network-layer header.
pub const HEADER_LEN: usize = 40;

/// Byte offset of the 16-byte destination-address field within the header.
pub const DST_ADDR_OFFSET: usize = 24;

/// Error returned when a packet cannot be inspected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InspectError {
    /// Packet shorter than the fixed header; the destination-address field
    /// cannot be extracted.
    #[error("Malformed packet: {len} bytes, header requires {min}")]
    MalformedPacket {
        /// Actual packet length.
        len: usize,
        /// Minimum required length.
        min: usize,
    },
}

/// Extract the destination address from a packet's fixed header.
///
/// Fails with [`InspectError::MalformedPacket`] if the packet is shorter
/// than [`HEADER_LEN`]; a partial field is never matched.
pub fn destination_address(packet: &[u8]) -> Result<Addr, InspectError> {
    if packet.len() < HEADER_LEN {
        return Err(InspectError::MalformedPacket {
            len: packet.len(),
            min: HEADER_LEN,
        });
    }

    let field: [u8; Addr::BYTES] = packet[DST_ADDR_OFFSET..DST_ADDR_OFFSET + Addr::BYTES]
        .try_into()
        .unwrap();
    Ok(Addr::new(field))
}
