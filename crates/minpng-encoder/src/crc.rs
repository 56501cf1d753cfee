//! Chunk checksums
//!
//! PNG uses the reflected CRC-32 (polynomial 0xEDB88320) over
//! the chunk type followed by the chunk data.
use crc32fast::Hasher;

/// Calculate the crc of a chunk, covering its type and its data,
/// but not its length
pub fn calc_chunk_crc(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    // crc is a continuous function, so first crc the chunk name
    // and then continue with the chunk bytes
    hasher.update(chunk_type);
    hasher.update(data);
    hasher.finalize()
}

#[test]
fn test_iend_crc() {
    // every png ends with these bytes
    assert_eq!(calc_chunk_crc(b"IEND", &[]), 0xAE42_6082);
}

#[test]
fn test_crc_is_continuous() {
    assert_eq!(
        calc_chunk_crc(b"tEXt", b"source\0test"),
        crc32fast::hash(b"tEXtsource\0test")
    );
}
