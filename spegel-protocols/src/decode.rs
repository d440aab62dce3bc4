//! ## spegel-protocols::decode
//! Per-packet decoding as it happens on the queue hot path: strip the PPP
//! framing from a private view of the buffer, peek the IPv4 header behind
//! it, and report the addressing fields together with the packet's total
//! wire size measured before stripping.

use std::net::Ipv4Addr;

use thiserror::Error;

use spegel_core::Packet;

use crate::ipv4::Ipv4Header;
use crate::ppp::PppHeader;

/// Errors that can occur while decoding a queued packet.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Truncated packet: need at least {needed} bytes, got {got}")]
    TruncatedPacket { needed: usize, got: usize },

    #[error("Not an IPv4 packet (version field {version})")]
    NotIpv4 { version: u8 },
}

/// Metadata extracted from one queued packet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PacketSummary {
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
    /// Total size on the wire, framing included.
    pub wire_size: usize,
}

/// Smallest buffer that can carry both headers.
pub const MIN_PACKET_LEN: usize = PppHeader::LEN + Ipv4Header::MIN_LEN;

/// Decodes the nested headers of a queued packet.
///
/// Works on the packet's shared buffer; the queue's copy is never mutated.
/// Buffers shorter than [`MIN_PACKET_LEN`] fail with
/// [`DecodeError::TruncatedPacket`] before any out-of-bounds read.
pub fn summarize(packet: &Packet) -> Result<PacketSummary, DecodeError> {
    let data = packet.bytes();
    if data.len() < MIN_PACKET_LEN {
        return Err(DecodeError::TruncatedPacket {
            needed: MIN_PACKET_LEN,
            got: data.len(),
        });
    }

    let (_framing, inner) = PppHeader::strip(data)?;
    let header = Ipv4Header::peek(inner)?;

    Ok(PacketSummary {
        source: header.source,
        destination: header.destination,
        wire_size: packet.wire_size(),
    })
}

/// Builds a well-formed PPP+IPv4 packet of exactly `wire_size` bytes.
///
/// Used by the simulator and tests to synthesize traffic.
///
/// # Panics
/// If `wire_size` is below [`MIN_PACKET_LEN`]: there is no valid packet of
/// that size to build.
pub fn build_packet(source: Ipv4Addr, destination: Ipv4Addr, wire_size: usize) -> Packet {
    assert!(
        wire_size >= MIN_PACKET_LEN,
        "wire_size {wire_size} below the minimum packet size {MIN_PACKET_LEN}"
    );
    let ip_length = (wire_size - PppHeader::LEN) as u16;

    let mut buffer = Vec::with_capacity(wire_size);
    PppHeader::default().encode_into(&mut buffer);
    Ipv4Header {
        source,
        destination,
    }
    .encode_into(ip_length, &mut buffer);
    buffer.resize(wire_size, 0);
    Packet::new(buffer)
}
