//! Chunk payloads and the chunk writer
pub(crate) mod writers;

use crate::constants::{BIT_DEPTH, IHDR_LENGTH};
use crate::enums::PngColor;

/// Build the IHDR payload
///
/// Dimensions must already be validated to fit in 31 bits.
pub(crate) fn ihdr_payload(width: u32, height: u32, color: PngColor) -> [u8; IHDR_LENGTH] {
    let mut payload = [0; IHDR_LENGTH];

    payload[0..4].copy_from_slice(&width.to_be_bytes());
    payload[4..8].copy_from_slice(&height.to_be_bytes());
    payload[8] = BIT_DEPTH;
    payload[9] = color.to_int();
    // compression method, filter method and interlace method
    // are all the basic 0 values
    payload[10] = 0;
    payload[11] = 0;
    payload[12] = 0;

    payload
}

#[test]
fn test_ihdr_layout() {
    let payload = ihdr_payload(40, 20, PngColor::RGB);
    assert_eq!(payload, [0, 0, 0, 40, 0, 0, 0, 20, 8, 2, 0, 0, 0]);
}
