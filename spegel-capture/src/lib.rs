//! # spegel-capture
//!
//! Binds decoding, encoding, and transport to the two queue event kinds.
//! Admissions are exported to the consumer; removals only leave a local
//! informational record.

pub mod tap;

pub use tap::QueueTap;
