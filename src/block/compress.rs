//! The compression algorithm.
//!
//! A hash table over 4-byte windows finds back-references. This gives a
//! reasonable compression ratio with high performance and fixed memory usage:
//! the table is the only working state and lives in this call's stack frame.

use crate::block::hashtable::{hash, PositionTable};
use crate::block::{
    BlockError, END_OFFSET, MAX_COMPRESS_INPUT_LEN, MAX_DISTANCE, MFLIMIT, MINMATCH,
};

/// The scanning stride grows by one every `1 << SKIP_TRIGGER` failed match
/// attempts, so runs of incompressible data are skimmed rather than hashed
/// byte by byte.
const SKIP_TRIGGER: usize = 6;

/// Read a 4-byte little-endian window starting at `pos`.
///
/// Both the hash and the match comparison operate on this value, so the
/// encoder behaves identically on any host byte order.
#[inline]
fn read_u32_le(input: &[u8], pos: usize) -> u32 {
    let window: [u8; 4] = input[pos..pos + 4].try_into().unwrap();
    u32::from_le_bytes(window)
}

/// Count how many bytes starting at `front` equal the bytes starting at
/// `back`, never counting past `limit` (exclusive on the `front` side).
///
/// `back < front`, so everything the scan touches is in bounds whenever
/// `front` is.
#[inline]
fn common_prefix_len(input: &[u8], front: usize, back: usize, limit: usize) -> usize {
    let mut count = 0;
    while front + count + 4 <= limit
        && read_u32_le(input, front + count) == read_u32_le(input, back + count)
    {
        count += 4;
    }
    while front + count < limit && input[front + count] == input[back + count] {
        count += 1;
    }
    count
}

#[inline]
fn token_from_literal(lit_len: usize) -> u8 {
    if lit_len < 0xF {
        // The literal length fits the high nibble as-is.
        (lit_len as u8) << 4
    } else {
        // Saturate to 0xF; the remainder follows as length-extension bytes.
        0xF0
    }
}

/// Write `n` in the 255-run length-extension encoding.
#[inline]
fn write_length_extension(output: &mut [u8], output_pos: &mut usize, mut n: usize) {
    while n >= 0xFF {
        output[*output_pos] = 0xFF;
        *output_pos += 1;
        n -= 0xFF;
    }
    output[*output_pos] = n as u8;
    *output_pos += 1;
}

/// Emit everything from `literal_start` to the end of input as the final,
/// literals-only sequence. Returns the total compressed length.
#[inline]
fn handle_last_literals(
    output: &mut [u8],
    mut output_pos: usize,
    input: &[u8],
    literal_start: usize,
) -> usize {
    let lit_len = input.len() - literal_start;

    output[output_pos] = token_from_literal(lit_len);
    output_pos += 1;
    if lit_len >= 0xF {
        write_length_extension(output, &mut output_pos, lit_len - 0xF);
    }
    output[output_pos..output_pos + lit_len].copy_from_slice(&input[literal_start..]);
    output_pos + lit_len
}

/// Worst-case compressed length for an input of `input_len` bytes.
///
/// Sizing the destination with this bound guarantees [`compress_into`] cannot
/// fail with [`BlockError::DstTooShort`].
#[inline]
pub fn worst_case_compressed_len(input_len: usize) -> Result<usize, BlockError> {
    if input_len > MAX_COMPRESS_INPUT_LEN {
        return Err(BlockError::SrcTooLong);
    }
    Ok(input_len + input_len / 255 + 16)
}

/// Compress all bytes of `input` into `output`, returning the compressed
/// length.
///
/// `output` must hold at least [`worst_case_compressed_len`] bytes; this is
/// checked up front, before any byte is written, even when the actual
/// compressed size would have fit. The pre-check is what lets the emit path
/// below run without per-write capacity tracking.
pub fn compress_into(input: &[u8], output: &mut [u8]) -> Result<usize, BlockError> {
    let worst_case = worst_case_compressed_len(input.len())?;
    if output.len() < worst_case {
        return Err(BlockError::DstTooShort);
    }

    // The last match must start at least 12 bytes before the end of the
    // block, so inputs up to 12 bytes are a single literal run.
    if input.len() <= MFLIMIT {
        return Ok(handle_last_literals(output, 0, input, 0));
    }

    // No match may start at or past `end_limit`, and no match may reach into
    // the last `END_OFFSET` bytes.
    let end_limit = input.len() - (MFLIMIT - 1);
    let match_limit = input.len() - END_OFFSET;

    let mut table = PositionTable::new();
    let mut output_pos = 0;
    let mut cur = 0;
    let mut literal_start = 0;

    loop {
        // Scan forward for a 4-byte match, accelerating while none is found.
        let mut step = 1;
        let mut step_counter = 1 << SKIP_TRIGGER;
        let mut candidate;
        loop {
            cur += step;
            if cur >= end_limit {
                return Ok(handle_last_literals(output, output_pos, input, literal_start));
            }
            let seq = read_u32_le(input, cur);
            let slot = hash(seq);
            candidate = table.get_at(slot);
            table.put_at(slot, cur);
            step = step_counter >> SKIP_TRIGGER;
            step_counter += 1;

            // A candidate is only usable if its offset is encodable in 16
            // bits and its bytes genuinely agree; the latter also rejects
            // untouched (zero) table slots unless position 0 truly matches.
            if cur - candidate <= MAX_DISTANCE && read_u32_le(input, candidate) == seq {
                break;
            }
        }

        // Grow the match backwards over bytes that would otherwise be
        // emitted as literals.
        while cur > literal_start && candidate > 0 && input[cur - 1] == input[candidate - 1] {
            cur -= 1;
            candidate -= 1;
        }

        let lit_len = cur - literal_start;

        // Reserve the token byte; its low nibble is patched in once the
        // match length is known.
        let mut token_pos = output_pos;
        output_pos += 1;
        let mut token = token_from_literal(lit_len);
        if lit_len >= 0xF {
            write_length_extension(output, &mut output_pos, lit_len - 0xF);
        }
        output[output_pos..output_pos + lit_len].copy_from_slice(&input[literal_start..cur]);
        output_pos += lit_len;

        loop {
            let offset = cur - candidate;
            output[output_pos] = offset as u8;
            output[output_pos + 1] = (offset >> 8) as u8;
            output_pos += 2;

            // The first MINMATCH bytes are already known equal.
            let extra =
                common_prefix_len(input, cur + MINMATCH, candidate + MINMATCH, match_limit);
            token |= if extra < 0xF { extra as u8 } else { 0xF };
            output[token_pos] = token;
            if extra >= 0xF {
                write_length_extension(output, &mut output_pos, extra - 0xF);
            }
            cur += MINMATCH + extra;
            literal_start = cur;

            if cur >= end_limit {
                return Ok(handle_last_literals(output, output_pos, input, literal_start));
            }

            // The scan never hashed the interior of the match; reinsert one
            // position near its end to improve recall.
            let slot = hash(read_u32_le(input, cur - 2));
            table.put_at(slot, cur - 2);

            // Matches frequently continue back to back. Probe the current
            // position directly before falling back to scanning.
            let seq = read_u32_le(input, cur);
            let slot = hash(seq);
            candidate = table.get_at(slot);
            table.put_at(slot, cur);
            if cur - candidate <= MAX_DISTANCE && read_u32_le(input, candidate) == seq {
                // Another sequence, this one with zero literals.
                token_pos = output_pos;
                output_pos += 1;
                token = 0;
                continue;
            }
            break;
        }
    }
}
