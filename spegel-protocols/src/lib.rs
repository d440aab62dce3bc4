//! # spegel protocol headers
//!
//! Decoders for the nested headers found on a point-to-point transmission
//! queue: a fixed-size PPP framing header followed by an IPv4 header. The
//! framing header is stripped and discarded; the IPv4 header is read
//! non-destructively to obtain the addressing fields.

pub mod decode;
pub mod ipv4;
pub mod ppp;

pub use decode::{build_packet, summarize, DecodeError, PacketSummary, MIN_PACKET_LEN};
pub use ipv4::Ipv4Header;
pub use ppp::PppHeader;
