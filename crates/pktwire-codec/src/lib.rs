//! Length-prefixed tagged packet codec for client-server messaging.
//!
//! Every packet on the wire is:
//! - A 2-byte little-endian size header (counting everything after itself)
//! - A 2-byte little-endian packet identifier
//! - An untagged payload of little-endian fields, in an order agreed
//!   out-of-band between sender and receiver
//!
//! [`PacketWriter`] accumulates typed writes and emits the framed or
//! unframed bytes; [`PacketReader`] consumes the mirror-image reads over
//! a cursor that never moves on a failed read. Transport and packet-ID
//! dispatch live outside this crate.

pub mod error;
pub mod framing;
pub mod reader;
pub mod writer;

pub use error::{CodecError, Result};
pub use framing::{frame_body, split_body, LEN_HEADER_SIZE, MAX_BODY_SIZE, PACKET_ID_SIZE};
pub use reader::PacketReader;
pub use writer::PacketWriter;
