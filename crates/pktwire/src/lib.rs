//! Tagged packet wire codec with size-header framing.
//!
//! pktwire is a codec pair for a length-prefixed, packet-ID-tagged binary
//! protocol: an append-based [`PacketWriter`](codec::PacketWriter), a
//! cursor-based [`PacketReader`](codec::PacketReader), and the 2-byte
//! size-header framing rule between them. Transports and packet dispatch
//! are out of scope and plug in around these types.
//!
//! # Crate Structure
//!
//! - [`codec`] — writer, reader, framing, error types
//! - `pktwire` binary — offline frame/strip/inspect diagnostics (behind
//!   the `cli` feature)

/// Re-export codec types.
pub mod codec {
    pub use pktwire_codec::*;
}
