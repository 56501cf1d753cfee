//! Zlib compression of the filtered scanlines
use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::trace;

use crate::error::PngEncodeErrors;

/// Highest effort the deflate compressor understands
pub const MAX_COMPRESSION_LEVEL: u8 = 9;

/// Map an effort to a compression setting, `None` picks the
/// compressor default
pub fn compression_for_effort(effort: Option<u8>) -> Result<Compression, PngEncodeErrors> {
    match effort {
        None => Ok(Compression::default()),
        Some(level) if level <= MAX_COMPRESSION_LEVEL => Ok(Compression::new(u32::from(level))),
        Some(level) => Err(PngEncodeErrors::InvalidCompressionLevel(level))
    }
}

/// Compress `data` into a zlib stream
pub fn compress_zlib(data: &[u8], compression: Compression) -> Result<Vec<u8>, PngEncodeErrors> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), compression);

    encoder
        .write_all(data)
        .map_err(|e| PngEncodeErrors::CompressionFailure(e.to_string()))?;

    let compressed = encoder
        .finish()
        .map_err(|e| PngEncodeErrors::CompressionFailure(e.to_string()))?;

    trace!(
        "Compressed {} bytes to {} bytes at level {}",
        data.len(),
        compressed.len(),
        compression.level()
    );
    Ok(compressed)
}
