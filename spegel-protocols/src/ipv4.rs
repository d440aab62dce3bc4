//! ## spegel-protocols::ipv4
//! Fixed-offset IPv4 header reader. Only the addressing fields matter for
//! telemetry, so the options area (IHL > 5) is never touched and the header
//! is peeked, never consumed.

use std::net::Ipv4Addr;

use crate::decode::DecodeError;

/// Addressing fields peeked from an IPv4 header.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ipv4Header {
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
}

impl Ipv4Header {
    /// Minimum serialized header size (no options).
    pub const MIN_LEN: usize = 20;

    const SOURCE_OFFSET: usize = 12;
    const DESTINATION_OFFSET: usize = 16;

    /// Reads source and destination without consuming the buffer.
    pub fn peek(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < Self::MIN_LEN {
            return Err(DecodeError::TruncatedPacket {
                needed: Self::MIN_LEN,
                got: data.len(),
            });
        }

        let version = data[0] >> 4;
        if version != 4 {
            return Err(DecodeError::NotIpv4 { version });
        }

        Ok(Self {
            source: read_addr(data, Self::SOURCE_OFFSET),
            destination: read_addr(data, Self::DESTINATION_OFFSET),
        })
    }

    /// Appends a minimal 20-byte header carrying these addresses.
    /// `total_length` is the IPv4 total length field (header + payload).
    pub fn encode_into(&self, total_length: u16, out: &mut Vec<u8>) {
        out.push(0x45); // version 4, IHL 5
        out.push(0x00); // DSCP/ECN
        out.extend_from_slice(&total_length.to_be_bytes());
        out.extend_from_slice(&[0x00, 0x00]); // identification
        out.extend_from_slice(&[0x00, 0x00]); // flags + fragment offset
        out.push(64); // TTL
        out.push(17); // protocol: UDP
        out.extend_from_slice(&[0x00, 0x00]); // checksum, unverified here
        out.extend_from_slice(&self.source.octets());
        out.extend_from_slice(&self.destination.octets());
    }
}

#[inline]
fn read_addr(data: &[u8], offset: usize) -> Ipv4Addr {
    Ipv4Addr::new(
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> Vec<u8> {
        let header = Ipv4Header {
            source: Ipv4Addr::new(10, 1, 1, 1),
            destination: Ipv4Addr::new(10, 1, 1, 2),
        };
        let mut buffer = Vec::new();
        header.encode_into(532, &mut buffer);
        buffer
    }

    #[test]
    fn peek_reads_addresses() {
        let buffer = sample_header();
        let header = Ipv4Header::peek(&buffer).unwrap();
        assert_eq!(header.source, Ipv4Addr::new(10, 1, 1, 1));
        assert_eq!(header.destination, Ipv4Addr::new(10, 1, 1, 2));
    }

    #[test]
    fn peek_rejects_nineteen_bytes() {
        let mut buffer = sample_header();
        buffer.truncate(19);
        assert_eq!(
            Ipv4Header::peek(&buffer).unwrap_err(),
            DecodeError::TruncatedPacket { needed: 20, got: 19 }
        );
    }

    #[test]
    fn peek_rejects_wrong_version() {
        let mut buffer = sample_header();
        buffer[0] = 0x65; // version 6
        assert_eq!(
            Ipv4Header::peek(&buffer).unwrap_err(),
            DecodeError::NotIpv4 { version: 6 }
        );
    }

    #[test]
    fn encoded_header_is_twenty_bytes() {
        assert_eq!(sample_header().len(), Ipv4Header::MIN_LEN);
    }
}
