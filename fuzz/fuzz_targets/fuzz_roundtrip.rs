#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4_block::{compress_into, decompress_into, worst_case_compressed_len};

fuzz_target!(|data: &[u8]| {
    let mut compressed = vec![0u8; worst_case_compressed_len(data.len()).unwrap()];
    let compressed_len = compress_into(data, &mut compressed).unwrap();

    let mut decompressed = vec![0u8; data.len()];
    let decompressed_len =
        decompress_into(&compressed[..compressed_len], &mut decompressed).unwrap();
    assert_eq!(data, &decompressed[..decompressed_len]);
});
