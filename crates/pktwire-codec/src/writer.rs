use bytes::{BufMut, Bytes, BytesMut};

use crate::framing::frame_body;

const INITIAL_BUFFER_CAPACITY: usize = 256;

/// Append-only encoder for one outgoing packet.
///
/// Constructed against a packet identifier, which is serialized as the
/// first two bytes of the body before any caller write. Every write
/// appends little-endian bytes in call order, with no type tags on the
/// wire — the reader must issue the mirror-image reads in the same order.
///
/// Writes never fail. Output snapshots ([`to_bytes`](Self::to_bytes),
/// [`to_framed_bytes`](Self::to_framed_bytes)) never consume the buffer
/// and stay stable until the next write.
pub struct PacketWriter {
    payload: BytesMut,
    packet_id: u16,
}

impl PacketWriter {
    /// Create a writer for the given packet identifier.
    pub fn new(packet_id: u16) -> Self {
        let mut payload = BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY);
        payload.put_u16_le(packet_id);
        Self { payload, packet_id }
    }

    /// The packet identifier captured at construction.
    pub fn packet_id(&self) -> u16 {
        self.packet_id
    }

    /// Current body length (packet-ID + payload) in bytes.
    ///
    /// At least 2: the packet-ID prefix is always present.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Always false; kept for `len`/`is_empty` symmetry.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.payload.put_u8(value);
    }

    /// Append a 2-byte little-endian unsigned integer.
    pub fn write_u16(&mut self, value: u16) {
        self.payload.put_u16_le(value);
    }

    /// Append a 4-byte little-endian unsigned integer.
    pub fn write_u32(&mut self, value: u32) {
        self.payload.put_u32_le(value);
    }

    /// Append an 8-byte little-endian unsigned integer, exact over the
    /// full 64-bit range.
    pub fn write_u64(&mut self, value: u64) {
        self.payload.put_u64_le(value);
    }

    /// Append a single byte, two's complement.
    pub fn write_i8(&mut self, value: i8) {
        self.payload.put_i8(value);
    }

    /// Append a 2-byte little-endian signed integer.
    pub fn write_i16(&mut self, value: i16) {
        self.payload.put_i16_le(value);
    }

    /// Append a 4-byte little-endian signed integer.
    pub fn write_i32(&mut self, value: i32) {
        self.payload.put_i32_le(value);
    }

    /// Append an 8-byte little-endian signed integer.
    pub fn write_i64(&mut self, value: i64) {
        self.payload.put_i64_le(value);
    }

    /// Append a 4-byte IEEE-754 single, little-endian.
    pub fn write_f32(&mut self, value: f32) {
        self.payload.put_f32_le(value);
    }

    /// Append an 8-byte IEEE-754 double, little-endian.
    pub fn write_f64(&mut self, value: f64) {
        self.payload.put_f64_le(value);
    }

    /// Append one byte: `1` for true, `0` for false.
    pub fn write_bool(&mut self, value: bool) {
        self.payload.put_u8(u8::from(value));
    }

    /// Append a 2-byte little-endian length prefix (UTF-8 byte count,
    /// not character count) followed by the UTF-8 bytes. No terminator.
    ///
    /// Strings over 65535 UTF-8 bytes wrap the prefix; staying in range
    /// is the caller's contract.
    pub fn write_string(&mut self, value: &str) {
        let bytes = value.as_bytes();
        self.payload.put_u16_le(bytes.len() as u16);
        self.payload.put_slice(bytes);
    }

    /// Append raw bytes verbatim, with no length prefix.
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.payload.put_slice(value);
    }

    /// Snapshot of the body (packet-ID + payload), no size header.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.payload)
    }

    /// Snapshot of the framed packet: 2-byte little-endian size header
    /// (counting packet-ID + payload, excluding itself) then the body.
    pub fn to_framed_bytes(&self) -> Bytes {
        let mut framed = BytesMut::new();
        frame_body(&self.payload, &mut framed);
        framed.freeze()
    }
}
