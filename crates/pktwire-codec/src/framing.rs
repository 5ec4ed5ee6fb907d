use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Size header: 2 bytes, little-endian, counting everything after itself.
pub const LEN_HEADER_SIZE: usize = 2;

/// Packet identifier: 2 bytes, little-endian, first field of the body.
pub const PACKET_ID_SIZE: usize = 2;

/// Largest body (packet-ID + payload) the 16-bit size header can describe.
pub const MAX_BODY_SIZE: usize = u16::MAX as usize;

/// Prepend the size header to a packet body.
///
/// Wire format:
/// ```text
/// ┌────────────┬──────────────┬──────────────────┐
/// │ Size (2B   │ Packet-ID    │ Payload           │
/// │ LE)        │ (2B LE)      │ (Size - 2 bytes)  │
/// └────────────┴──────────────┴──────────────────┘
/// ```
/// The header counts packet-ID + payload; its own 2 bytes are excluded.
///
/// No outgoing size validation: a body over [`MAX_BODY_SIZE`] wraps the
/// header value. Keeping bodies in range is the sender's contract.
pub fn frame_body(body: &[u8], dst: &mut BytesMut) {
    dst.reserve(LEN_HEADER_SIZE + body.len());
    dst.put_u16_le(body.len() as u16);
    dst.put_slice(body);
}

/// Split the next complete packet body out of a receive buffer.
///
/// Returns `None` until `src` holds a full size header and the body it
/// describes. On success, consumes header + body from `src` and returns
/// the body (packet-ID + payload) with the header stripped, ready for
/// [`PacketReader::new`](crate::PacketReader::new).
pub fn split_body(src: &mut BytesMut) -> Option<Bytes> {
    if src.len() < LEN_HEADER_SIZE {
        return None; // Need more data
    }

    let body_len = u16::from_le_bytes(src[0..2].try_into().unwrap()) as usize;

    let total = LEN_HEADER_SIZE + body_len;
    if src.len() < total {
        return None; // Need more data
    }

    src.advance(LEN_HEADER_SIZE);
    let body = src.split_to(body_len).freeze();
    tracing::trace!(body_len, buffered = src.len(), "split packet body");

    Some(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_prepends_header() {
        let mut buf = BytesMut::new();
        frame_body(b"\x01\x02abc", &mut buf);

        assert_eq!(buf.as_ref(), &[0x05, 0x00, 0x01, 0x02, b'a', b'b', b'c']);
    }

    #[test]
    fn frame_then_split_roundtrip() {
        let body = b"\x11\x27payload";
        let mut wire = BytesMut::new();
        frame_body(body, &mut wire);

        let split = split_body(&mut wire).unwrap();
        assert_eq!(split.as_ref(), body);
        assert!(wire.is_empty());
    }

    #[test]
    fn split_incomplete_header() {
        let mut buf = BytesMut::from(&[0x05][..]);
        assert!(split_body(&mut buf).is_none());
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn split_incomplete_body() {
        let mut buf = BytesMut::new();
        frame_body(b"\x01\x00hello", &mut buf);
        buf.truncate(LEN_HEADER_SIZE + 3);

        assert!(split_body(&mut buf).is_none());
        // Nothing consumed while waiting for the rest.
        assert_eq!(buf.len(), LEN_HEADER_SIZE + 3);
    }

    #[test]
    fn split_back_to_back_packets() {
        let mut wire = BytesMut::new();
        frame_body(b"\x01\x00first", &mut wire);
        frame_body(b"\x02\x00second", &mut wire);

        let b1 = split_body(&mut wire).unwrap();
        let b2 = split_body(&mut wire).unwrap();

        assert_eq!(b1.as_ref(), b"\x01\x00first");
        assert_eq!(b2.as_ref(), b"\x02\x00second");
        assert!(wire.is_empty());
    }

    #[test]
    fn split_empty_body() {
        let mut wire = BytesMut::from(&[0x00, 0x00][..]);
        let body = split_body(&mut wire).unwrap();
        assert!(body.is_empty());
        assert!(wire.is_empty());
    }

    #[test]
    fn header_counts_body_only() {
        let mut wire = BytesMut::new();
        frame_body(&[0xAA; 300], &mut wire);

        assert_eq!(wire.len(), LEN_HEADER_SIZE + 300);
        assert_eq!(u16::from_le_bytes([wire[0], wire[1]]), 300);
    }
}
