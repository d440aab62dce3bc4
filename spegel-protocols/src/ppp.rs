//! ## spegel-protocols::ppp
//! PPP link framing: a two-byte big-endian protocol field in front of the
//! routing-layer header. On the export path it is stripped and discarded.

use crate::decode::DecodeError;

/// Protocol number carried for IPv4 payloads.
pub const PPP_PROTOCOL_IPV4: u16 = 0x0021;

/// The fixed-size PPP framing header.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PppHeader {
    pub protocol: u16,
}

impl PppHeader {
    /// Serialized size of the framing header in bytes.
    pub const LEN: usize = 2;

    /// Reads the framing header and returns it together with the remaining
    /// bytes, i.e. the buffer with the framing stripped.
    pub fn strip(data: &[u8]) -> Result<(Self, &[u8]), DecodeError> {
        if data.len() < Self::LEN {
            return Err(DecodeError::TruncatedPacket {
                needed: Self::LEN,
                got: data.len(),
            });
        }
        let protocol = u16::from_be_bytes([data[0], data[1]]);
        Ok((Self { protocol }, &data[Self::LEN..]))
    }

    /// Appends the framing header to a buffer under construction.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.protocol.to_be_bytes());
    }
}

impl Default for PppHeader {
    fn default() -> Self {
        Self {
            protocol: PPP_PROTOCOL_IPV4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_returns_rest_of_buffer() {
        let data = [0x00, 0x21, 0xAA, 0xBB];
        let (header, rest) = PppHeader::strip(&data).unwrap();
        assert_eq!(header.protocol, PPP_PROTOCOL_IPV4);
        assert_eq!(rest, &[0xAA, 0xBB]);
    }

    #[test]
    fn strip_rejects_short_buffer() {
        let result = PppHeader::strip(&[0x00]);
        assert_eq!(
            result.unwrap_err(),
            DecodeError::TruncatedPacket { needed: 2, got: 1 }
        );
    }

    #[test]
    fn encode_strip_is_identity() {
        let mut buffer = Vec::new();
        PppHeader::default().encode_into(&mut buffer);
        let (header, rest) = PppHeader::strip(&buffer).unwrap();
        assert_eq!(header, PppHeader::default());
        assert!(rest.is_empty());
    }
}
