#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4_block::decompress_into;

fuzz_target!(|data: &[u8]| {
    // Must reject or decode, never panic, over-read or over-write.
    let mut output = vec![0u8; 1 << 20];
    let _ = decompress_into(data, &mut output);
});
