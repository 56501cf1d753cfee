/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;
use minpng_core::bytestream::{ZByteWriterTrait, ZWriter};

use crate::constants::PNG_MAX_U31;
use crate::crc::calc_chunk_crc;
use crate::enums::PngChunkType;
use crate::error::PngEncodeErrors;

/// Check that a payload fits in a single chunk
pub(crate) fn check_chunk_length(data: &[u8]) -> Result<u32, PngEncodeErrors> {
    if data.len() > PNG_MAX_U31 {
        return Err(PngEncodeErrors::ChunkTooLarge(data.len()));
    }
    u32::try_from(data.len()).map_err(|_| PngEncodeErrors::ChunkTooLarge(data.len()))
}

/// Write a single chunk
///
/// format
/// length - chunk type - [data] -  crc
///
/// The length covers only the data, the crc covers the type and the data.
pub(crate) fn write_chunk<T: ZByteWriterTrait>(
    chunk_type: PngChunkType, data: &[u8], writer: &mut ZWriter<T>
) -> Result<(), PngEncodeErrors> {
    let length = check_chunk_length(data)?;
    let name = chunk_type.to_bytes();
    let crc = calc_chunk_crc(&name, data);

    trace!("Writing {chunk_type:?} chunk, length {length}, crc {crc:#010X}");

    writer.write_u32_be_err(length)?;
    writer.write_const_bytes(&name)?;
    writer.write_all(data)?;
    writer.write_u32_be_err(crc)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iend_bytes() {
        let mut sink = vec![];
        let mut writer = ZWriter::new(&mut sink);
        write_chunk(PngChunkType::IEND, &[], &mut writer).unwrap();
        assert_eq!(writer.bytes_written(), 12);

        assert_eq!(
            sink,
            [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn test_chunk_framing() {
        let payload = b"source\0test";
        let mut sink = vec![];
        write_chunk(PngChunkType::tEXt, payload, &mut ZWriter::new(&mut sink)).unwrap();

        assert_eq!(sink.len(), 12 + payload.len());
        assert_eq!(&sink[0..4], &11_u32.to_be_bytes());
        assert_eq!(&sink[4..8], b"tEXt");
        assert_eq!(&sink[8..19], payload);
        assert_eq!(
            &sink[19..],
            &crc32fast::hash(b"tEXtsource\0test").to_be_bytes()
        );
    }
}
