/*!

<https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md>

A block is a sequence of *sequences*. Each sequence starts with a one-byte
token: the high nibble is a base literal length, the low nibble a base match
length. A nibble of 15 is extended by 255-run bytes (every 0xFF byte adds 255,
the first other byte terminates the run and is added too). The literals follow
the length bytes verbatim; a 16-bit little-endian offset and the match length
extension follow the literals. The final sequence of a block carries only
literals and is recognised by the source running out right after them.

*/

pub mod compress;
pub mod decompress;
pub mod hashtable;

use core::fmt;

/// The last match must start at least this many bytes before the end of the
/// block, so the final sequence always carries literals.
/// See <https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md#end-of-block-restrictions>
///
/// As a consequence a block shorter than 13 bytes cannot contain a match and
/// is emitted as a single literal run.
pub(crate) const MFLIMIT: usize = 12;

/// The last 5 bytes of input are always literals, so a match never reaches
/// into them.
pub(crate) const END_OFFSET: usize = 5;

/// The minimum length of a match. Encoded match lengths are biased by this.
pub(crate) const MINMATCH: usize = 4;

/// A match offset is a 16-bit value, so back-references reach at most this
/// far.
pub(crate) const MAX_DISTANCE: usize = 65535;

/// Largest input the encoder accepts, 0x7E000000 bytes. Larger inputs could
/// not be bounded by [`compress::worst_case_compressed_len`] without
/// overflowing 32-bit arithmetic.
pub(crate) const MAX_COMPRESS_INPUT_LEN: usize = 0x7E00_0000;

/// Largest compressed input the decoder accepts, 0x00FFFFFF bytes. Keeps the
/// decoder's length accumulators within 32 bits. The format itself permits
/// larger blocks.
pub(crate) const MAX_DECOMPRESS_INPUT_LEN: usize = 0x00FF_FFFF;

/// Status message for [`BlockError::DstTooShort`].
pub const DST_TOO_SHORT: &str = "destination buffer is too short";
/// Status message for [`BlockError::InvalidData`].
pub const INVALID_DATA: &str = "invalid compressed data";
/// Status message for [`BlockError::SrcTooLong`].
pub const SRC_TOO_LONG: &str = "source buffer is too long";

/// An error from block compression or decompression.
///
/// The three kinds are deliberately coarse so that a kind is a stable token a
/// caller can match on; the byte count accompanying a success has no
/// counterpart on the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    /// The destination cannot hold the output. For compression this is
    /// checked against the worst case before any byte is written; for
    /// decompression it is raised by the literal or match copy that would
    /// overflow.
    DstTooShort,
    /// Malformed compressed stream: the source ran out inside a token, length
    /// extension or offset, or an offset is zero or reaches before the start
    /// of the output. Decompression only.
    InvalidData,
    /// The source exceeds the supported input length (compression:
    /// 0x7E000000 bytes, decompression: 0x00FFFFFF bytes).
    SrcTooLong,
}

impl BlockError {
    /// The stable status message for this error kind.
    pub const fn message(self) -> &'static str {
        match self {
            BlockError::DstTooShort => DST_TOO_SHORT,
            BlockError::InvalidData => INVALID_DATA,
            BlockError::SrcTooLong => SRC_TOO_LONG,
        }
    }
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for BlockError {}
