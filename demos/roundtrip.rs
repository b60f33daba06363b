//! Compress a small text corpus, print the resulting block, and verify the
//! round trip.

use lz4_block::{compress_into, decompress_into, worst_case_compressed_len};

const CORPUS: &[u8] = b"She sells sea shells by the sea shore.\n\
The shells she sells are surely seashells.\n\
So if she sells shells on the seashore,\n\
I'm sure she sells seashore shells.\n";

fn main() {
    let mut compressed = vec![0u8; worst_case_compressed_len(CORPUS.len()).unwrap()];
    let compressed_len = compress_into(CORPUS, &mut compressed).unwrap();
    compressed.truncate(compressed_len);

    println!("{} bytes in, {} bytes out", CORPUS.len(), compressed_len);
    for (i, byte) in compressed.iter().enumerate() {
        if i % 16 == 0 {
            print!("\n  ");
        }
        print!("{:02X} ", byte);
    }
    println!();

    let mut decompressed = vec![0u8; CORPUS.len()];
    let decompressed_len = decompress_into(&compressed, &mut decompressed).unwrap();
    assert_eq!(&decompressed[..decompressed_len], CORPUS);
    println!("round trip ok");
}
