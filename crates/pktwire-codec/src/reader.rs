use bytes::Bytes;

use crate::error::{CodecError, Result};

/// Cursor-based decoder for one received packet body.
///
/// Wraps an immutable buffer that is assumed to begin at the packet-ID
/// field (size header already stripped, see
/// [`split_body`](crate::framing::split_body)). Each read checks bounds
/// before touching the cursor: a failed read leaves the cursor exactly
/// where it was, so the same call can be retried or the packet abandoned
/// with no partial consumption.
///
/// The wire carries no type tags, so reads must mirror the writer's call
/// order; [`is_complete`](Self::is_complete) is the caller's soft signal
/// that the schemas agreed.
pub struct PacketReader {
    data: Bytes,
    offset: usize,
}

impl PacketReader {
    /// Wrap a packet body. The cursor starts at 0.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            offset: 0,
        }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// True iff every byte has been consumed, exactly.
    pub fn is_complete(&self) -> bool {
        self.offset == self.data.len()
    }

    /// Current cursor position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move the cursor back to the start for a full re-read.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Move the cursor to an absolute position in `[0, len]`.
    pub fn set_offset(&mut self, offset: usize) -> Result<()> {
        if offset > self.data.len() {
            return Err(CodecError::InvalidOffset {
                offset,
                len: self.data.len(),
            });
        }
        self.offset = offset;
        Ok(())
    }

    fn take_array<const N: usize>(&mut self, kind: &'static str) -> Result<[u8; N]> {
        let remaining = self.remaining();
        if N > remaining {
            return Err(CodecError::OutOfData {
                kind,
                needed: N,
                remaining,
            });
        }
        let array = self.data[self.offset..self.offset + N].try_into().unwrap();
        self.offset += N;
        Ok(array)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take_array::<1>("u8")?[0])
    }

    /// Read a 2-byte little-endian unsigned integer.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.take_array("u16")?))
    }

    /// Read a 4-byte little-endian unsigned integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take_array("u32")?))
    }

    /// Read an 8-byte little-endian unsigned integer.
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.take_array("u64")?))
    }

    /// Read a single byte, two's complement.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(i8::from_le_bytes(self.take_array("i8")?))
    }

    /// Read a 2-byte little-endian signed integer.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.take_array("i16")?))
    }

    /// Read a 4-byte little-endian signed integer.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.take_array("i32")?))
    }

    /// Read an 8-byte little-endian signed integer.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.take_array("i64")?))
    }

    /// Read a 4-byte IEEE-754 single, little-endian.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.take_array("f32")?))
    }

    /// Read an 8-byte IEEE-754 double, little-endian.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.take_array("f64")?))
    }

    /// Read one byte; any non-zero value decodes as true.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.take_array::<1>("bool")?[0] != 0)
    }

    /// Read a 2-byte length prefix then exactly that many UTF-8 bytes.
    ///
    /// Malformed UTF-8 decodes leniently with U+FFFD substitution rather
    /// than failing, matching senders that never validated outbound text.
    /// If the body is truncated, the length prefix is not consumed either.
    pub fn read_string(&mut self) -> Result<String> {
        let remaining = self.remaining();
        if remaining < 2 {
            return Err(CodecError::OutOfData {
                kind: "string",
                needed: 2,
                remaining,
            });
        }
        let start = self.offset + 2;
        let len = u16::from_le_bytes(self.data[self.offset..start].try_into().unwrap()) as usize;
        if 2 + len > remaining {
            return Err(CodecError::OutOfData {
                kind: "string",
                needed: 2 + len,
                remaining,
            });
        }
        let text = String::from_utf8_lossy(&self.data[start..start + len]).into_owned();
        self.offset += 2 + len;
        Ok(text)
    }

    /// Read `len` raw bytes as an immutable view.
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(CodecError::OutOfData {
                kind: "bytes",
                needed: len,
                remaining,
            });
        }
        let bytes = self.data.slice(self.offset..self.offset + len);
        self.offset += len;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::PacketWriter;

    fn reader_for(build: impl FnOnce(&mut PacketWriter)) -> PacketReader {
        let mut writer = PacketWriter::new(0x2711);
        build(&mut writer);
        PacketReader::new(writer.to_bytes())
    }

    #[test]
    fn reads_mirror_writes() {
        let mut reader = reader_for(|w| {
            w.write_u8(200);
            w.write_u16(60000);
            w.write_u32(4_000_000_000);
            w.write_u64(u64::MAX - 1);
            w.write_i64(i64::MIN);
            w.write_bool(true);
        });

        assert_eq!(reader.read_u16().unwrap(), 0x2711); // packet-ID
        assert_eq!(reader.read_u8().unwrap(), 200);
        assert_eq!(reader.read_u16().unwrap(), 60000);
        assert_eq!(reader.read_u32().unwrap(), 4_000_000_000);
        assert_eq!(reader.read_u64().unwrap(), u64::MAX - 1);
        assert_eq!(reader.read_i64().unwrap(), i64::MIN);
        assert!(reader.read_bool().unwrap());
        assert!(reader.is_complete());
    }

    #[test]
    fn signed_reads_roundtrip_extremes() {
        let mut reader = reader_for(|w| {
            w.write_i8(i8::MIN);
            w.write_i16(i16::MIN);
            w.write_i32(i32::MAX);
        });

        reader.read_u16().unwrap();
        assert_eq!(reader.read_i8().unwrap(), i8::MIN);
        assert_eq!(reader.read_i16().unwrap(), i16::MIN);
        assert_eq!(reader.read_i32().unwrap(), i32::MAX);
    }

    #[test]
    fn floats_roundtrip_bit_exact() {
        let mut reader = reader_for(|w| {
            w.write_f32(std::f32::consts::PI);
            w.write_f64(-0.0);
            w.write_f64(f64::NAN);
        });

        reader.read_u16().unwrap();
        assert_eq!(
            reader.read_f32().unwrap().to_bits(),
            std::f32::consts::PI.to_bits()
        );
        assert_eq!(reader.read_f64().unwrap().to_bits(), (-0.0f64).to_bits());
        assert!(reader.read_f64().unwrap().is_nan());
    }

    #[test]
    fn bool_decodes_nonzero_as_true() {
        let mut reader = PacketReader::new(vec![0x00, 0x00, 0x02, 0x00]);
        reader.read_u16().unwrap();
        assert!(reader.read_bool().unwrap());
        assert!(!reader.read_bool().unwrap());
    }

    #[test]
    fn string_roundtrip_multibyte() {
        let mut reader = reader_for(|w| {
            w.write_string("héllo 🌍");
            w.write_string("");
        });

        reader.read_u16().unwrap();
        assert_eq!(reader.read_string().unwrap(), "héllo 🌍");
        assert_eq!(reader.read_string().unwrap(), "");
        assert!(reader.is_complete());
    }

    #[test]
    fn malformed_utf8_substitutes() {
        // Length prefix 2, then an invalid sequence.
        let mut reader = PacketReader::new(vec![0x00, 0x00, 0x02, 0x00, 0xFF, 0xFE]);
        reader.read_u16().unwrap();
        assert_eq!(reader.read_string().unwrap(), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn truncated_string_consumes_nothing() {
        // Prefix promises 10 bytes, only 3 present.
        let mut reader = PacketReader::new(vec![0x0A, 0x00, b'a', b'b', b'c']);
        let before = reader.offset();

        let err = reader.read_string().unwrap_err();
        assert!(matches!(
            err,
            CodecError::OutOfData {
                kind: "string",
                needed: 12,
                remaining: 5,
            }
        ));
        // Length prefix not consumed either.
        assert_eq!(reader.offset(), before);
    }

    #[test]
    fn read_bytes_copies_out() {
        let mut reader = reader_for(|w| w.write_bytes(&[1, 2, 3, 4]));

        reader.read_u16().unwrap();
        let bytes = reader.read_bytes(4).unwrap();
        assert_eq!(bytes.as_ref(), &[1, 2, 3, 4]);
        assert!(reader.is_complete());
    }

    #[test]
    fn failed_read_is_repeatable() {
        let mut reader = PacketReader::new(vec![0x01, 0x02, 0x03]);
        reader.read_u16().unwrap();

        for _ in 0..2 {
            let err = reader.read_u32().unwrap_err();
            assert!(matches!(
                err,
                CodecError::OutOfData {
                    kind: "u32",
                    needed: 4,
                    remaining: 1,
                }
            ));
            assert_eq!(reader.offset(), 2);
        }

        // The byte that is there is still readable.
        assert_eq!(reader.read_u8().unwrap(), 0x03);
        assert!(reader.is_complete());
    }

    #[test]
    fn trailing_byte_is_not_complete() {
        let mut reader = PacketReader::new(vec![0x00, 0x00, 0x09]);
        reader.read_u16().unwrap();
        assert!(!reader.is_complete());
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn misordered_reads_give_wrong_values_not_errors() {
        let mut writer = PacketWriter::new(1);
        writer.write_u16(0x0304);
        writer.write_u16(0x0102);
        let mut reader = PacketReader::new(writer.to_bytes());
        reader.read_u16().unwrap();

        // Reading one u32 where two u16s were written: no error, wrong value.
        assert_eq!(reader.read_u32().unwrap(), 0x0102_0304);
        assert!(reader.is_complete());
    }

    #[test]
    fn reset_reenables_full_reread() {
        let mut reader = reader_for(|w| {
            w.write_u32(77);
            w.write_bool(true);
        });

        let id = reader.read_u16().unwrap();
        reader.read_u32().unwrap();
        reader.reset();

        assert_eq!(reader.offset(), 0);
        assert_eq!(reader.read_u16().unwrap(), id);
    }

    #[test]
    fn set_offset_validates_bounds() {
        let mut reader = PacketReader::new(vec![1, 2, 3, 4]);
        reader.set_offset(4).unwrap();
        assert!(reader.is_complete());

        let err = reader.set_offset(5).unwrap_err();
        assert!(matches!(err, CodecError::InvalidOffset { offset: 5, len: 4 }));
        // Cursor untouched by the rejected call.
        assert_eq!(reader.offset(), 4);
    }

    #[test]
    fn empty_buffer_is_complete() {
        let reader = PacketReader::new(Vec::new());
        assert!(reader.is_complete());
        assert_eq!(reader.remaining(), 0);
    }
}
