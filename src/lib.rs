/*! LZ4 block format compression and decompression in safe Rust.

Implements the [LZ4 block format] as a symmetric pair of whole-buffer
operations. The caller owns both buffers; the codec allocates nothing on the
heap and keeps no state between calls.

[LZ4 block format]: https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md

# Examples
```
use lz4_block::{compress_into, decompress_into, worst_case_compressed_len};

let input: &[u8] = b"Hello people, what's up? Hello people, what's up?";
let mut compressed = vec![0u8; worst_case_compressed_len(input.len()).unwrap()];
let compressed_len = compress_into(input, &mut compressed).unwrap();

let mut decompressed = vec![0u8; input.len()];
let decompressed_len =
    decompress_into(&compressed[..compressed_len], &mut decompressed).unwrap();
assert_eq!(input, &decompressed[..decompressed_len]);
```

Only the block format is implemented. The frame format (magic number,
checksums, content size) is a separate layer and out of scope here.
*/
#![forbid(unsafe_code)]

pub mod block;

pub use block::compress::{compress_into, worst_case_compressed_len};
pub use block::decompress::decompress_into;
pub use block::{BlockError, DST_TOO_SHORT, INVALID_DATA, SRC_TOO_LONG};
