/// Errors that can occur while decoding a packet.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A read required more bytes than remain in the buffer.
    ///
    /// The cursor is left where it was; the same read can be retried
    /// against a repaired buffer or the packet abandoned.
    #[error("out of data reading {kind}: needed {needed} bytes, {remaining} remaining")]
    OutOfData {
        kind: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// `set_offset` was called with a position outside `[0, len]`.
    #[error("invalid offset {offset} (buffer is {len} bytes)")]
    InvalidOffset { offset: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
