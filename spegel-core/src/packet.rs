/// A packet as observed at a device transmission queue.
use bytes::Bytes;

/// Immutable view of one in-flight packet. Cloning is cheap (shared buffer),
/// and decoding always works on a clone, never on the queue's copy.
#[derive(Debug, Clone)]
pub struct Packet {
    data: Bytes,
}

impl Packet {
    /// Creates a new Packet from raw data.
    pub fn new(data: Vec<u8>) -> Self {
        Packet {
            data: Bytes::from(data),
        }
    }

    /// Total on-the-wire size in bytes, framing included.
    #[inline]
    pub fn wire_size(&self) -> usize {
        self.data.len()
    }

    /// Borrow the raw buffer.
    #[inline]
    pub fn bytes(&self) -> &Bytes {
        &self.data
    }
}

impl From<Bytes> for Packet {
    fn from(data: Bytes) -> Self {
        Packet { data }
    }
}
