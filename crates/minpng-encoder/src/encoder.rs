/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::debug;
use minpng_core::bytestream::{ZByteWriterTrait, ZWriter};
use minpng_core::colorspace::ColorSpace;
use minpng_core::options::EncoderOptions;

use crate::compress::{compress_zlib, compression_for_effort};
use crate::constants::{PNG_MAX_U31, PNG_SIGNATURE};
use crate::enums::{FilterStrategy, PngChunkType, PngColor};
use crate::error::PngEncodeErrors;
use crate::filters::{frame_scanlines, ScanlineLayout};
use crate::headers::ihdr_payload;
use crate::headers::writers::{check_chunk_length, write_chunk};
use crate::text::{TextChunk, TextEncoding};

/// Encode an image with default settings
///
/// Rows are expected to be tightly packed, `width * channels` bytes each.
/// For padded rows, compression levels, filters or text use a [`PngEncoder`]:
/// build its options with [`EncoderOptions::set_stride`] and
/// [`EncoderOptions::set_effort`], and add entries with [`PngEncoder::add_text`].
///
/// ```
/// use minpng_encoder::minpng_core::colorspace::ColorSpace;
/// use minpng_encoder::minpng_core::options::EncoderOptions;
/// use minpng_encoder::PngEncoder;
///
/// // 2x1 gray image, rows padded to 4 bytes
/// let pixels = [10, 20, 0, 0];
/// let options = EncoderOptions::new(2, 1, ColorSpace::Luma)
///     .set_stride(Some(4))
///     .set_effort(Some(9));
///
/// let mut encoder = PngEncoder::new(&pixels, options);
/// encoder.add_text("source", "test");
///
/// let mut sink = vec![];
/// encoder.encode(&mut sink).unwrap();
/// ```
///
/// Returns the number of bytes written to `sink`.
///
/// # Errors
/// - [`InvalidChannelCount`](PngEncodeErrors::InvalidChannelCount) when `channels` is not in `1..=4`
/// - [`BufferTooSmall`](PngEncodeErrors::BufferTooSmall) when `pixel_data` has fewer than
///   `width * height * channels` bytes
///
/// and the remaining errors of [`PngEncoder::encode`]
pub fn encode_image<T: ZByteWriterTrait>(
    sink: T, pixel_data: &[u8], width: usize, height: usize, channels: usize
) -> Result<usize, PngEncodeErrors> {
    let colorspace = ColorSpace::from_num_components(channels)
        .ok_or(PngEncodeErrors::InvalidChannelCount(channels))?;
    let options = EncoderOptions::new(width, height, colorspace);

    PngEncoder::new(pixel_data, options).encode(sink)
}

/// A png encoder
///
/// The encoder borrows the pixels and holds no other state
/// between calls, so the same encoder can be used to encode the
/// image more than once, and separate encoders can run on separate threads.
#[derive(Debug)]
pub struct PngEncoder<'a> {
    options:       EncoderOptions,
    data:          &'a [u8],
    texts:         Vec<TextChunk>,
    filter:        FilterStrategy,
    text_encoding: TextEncoding
}

/// Everything derived from the options before encoding starts
struct ImageLayout {
    color:    PngColor,
    width:    u32,
    height:   u32,
    scanline: ScanlineLayout
}

impl<'a> PngEncoder<'a> {
    /// Create a new encoder for `data`
    ///
    /// `data` holds `height` rows of interleaved 8 bit samples, each row
    /// starting `options.row_stride()` bytes after the previous one
    pub fn new(data: &'a [u8], options: EncoderOptions) -> PngEncoder<'a> {
        PngEncoder {
            options,
            data,
            texts: Vec::new(),
            filter: FilterStrategy::default(),
            text_encoding: TextEncoding::default()
        }
    }

    /// Add a text entry, written as a `tEXt` chunk before the image data
    ///
    /// Entries are written in the order they were added
    pub fn add_text(&mut self, keyword: impl Into<String>, text: impl Into<String>) {
        self.texts.push(TextChunk::new(keyword, text));
    }

    /// Choose how scanlines are filtered, default is no filtering
    pub fn set_filter_strategy(&mut self, strategy: FilterStrategy) {
        self.filter = strategy;
    }

    /// Choose how text is stored, default is Latin-1
    pub fn set_text_encoding(&mut self, encoding: TextEncoding) {
        self.text_encoding = encoding;
    }

    fn validate_layout(&self) -> Result<ImageLayout, PngEncodeErrors> {
        let colorspace = self.options.colorspace();
        let color = PngColor::from_colorspace(colorspace)
            .ok_or_else(|| PngEncodeErrors::InvalidChannelCount(colorspace.num_components()))?;

        let (width, height) = (self.options.width(), self.options.height());

        if width == 0 || height == 0 {
            return Err(PngEncodeErrors::ZeroDimensions { width, height });
        }
        let too_large = || PngEncodeErrors::DimensionsTooLarge { width, height };

        if width > PNG_MAX_U31 || height > PNG_MAX_U31 {
            return Err(too_large());
        }
        let components = color.num_components();
        let row_bytes = width.checked_mul(components).ok_or_else(too_large)?;

        // one extra byte per row for the filter type
        row_bytes
            .checked_add(1)
            .and_then(|x| x.checked_mul(height))
            .ok_or_else(too_large)?;

        let stride = self.options.row_stride();

        if stride < row_bytes {
            return Err(PngEncodeErrors::InvalidStride { stride, row_bytes });
        }
        let expected = stride.checked_mul(height).ok_or_else(too_large)?;

        if self.data.len() < expected {
            return Err(PngEncodeErrors::BufferTooSmall {
                expected,
                found: self.data.len()
            });
        }

        Ok(ImageLayout {
            color,
            width: u32::try_from(width).map_err(|_| too_large())?,
            height: u32::try_from(height).map_err(|_| too_large())?,
            scanline: ScanlineLayout {
                row_bytes,
                stride,
                height,
                components
            }
        })
    }

    fn encode_text_payloads(&self) -> Result<Vec<Vec<u8>>, PngEncodeErrors> {
        self.texts
            .iter()
            .map(|chunk| {
                let payload = chunk.to_payload(self.text_encoding)?;
                check_chunk_length(&payload)?;
                Ok(payload)
            })
            .collect()
    }

    /// Encode the image into `sink`, returning the number of bytes written
    ///
    /// Nothing is written unless the image description, the text entries and
    /// compression are all fine. Once writing starts, the only possible
    /// error is [`SinkWriteFailure`](PngEncodeErrors::SinkWriteFailure), which
    /// leaves a truncated stream behind.
    ///
    /// The sink is flushed, but not closed.
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, PngEncodeErrors> {
        let layout = self.validate_layout()?;
        let compression = compression_for_effort(self.options.effort())?;
        let texts = self.encode_text_payloads()?;

        debug!(
            "Encoding {}x{} {:?} png, filter strategy {:?}, {} text chunk(s)",
            layout.width,
            layout.height,
            layout.color,
            self.filter,
            texts.len()
        );

        let ihdr = ihdr_payload(layout.width, layout.height, layout.color);
        let filtered = frame_scanlines(self.data, layout.scanline, self.filter);
        let compressed = compress_zlib(&filtered, compression)?;
        check_chunk_length(&compressed)?;

        let mut writer = ZWriter::new(sink);

        writer.write_u64_be_err(PNG_SIGNATURE)?;
        write_chunk(PngChunkType::IHDR, &ihdr, &mut writer)?;

        // ancillary chunks go before the image data
        for payload in &texts {
            write_chunk(PngChunkType::tEXt, payload, &mut writer)?;
        }
        // a single IDAT chunk, no splitting
        write_chunk(PngChunkType::IDAT, &compressed, &mut writer)?;
        write_chunk(PngChunkType::IEND, &[], &mut writer)?;

        writer.flush()?;

        debug!("Wrote {} bytes", writer.bytes_written());

        Ok(writer.bytes_written())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_write() {
        let width = 40;
        let height = 10;
        let data = vec![100; width * height];

        let options = EncoderOptions::default()
            .set_colorspace(ColorSpace::Luma)
            .set_width(width)
            .set_height(height);

        let encoder = PngEncoder::new(&data, options);
        let mut sink = vec![];

        let written = encoder.encode(&mut sink).unwrap();
        assert_eq!(written, sink.len());
        assert_eq!(&sink[0..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(&sink[sink.len() - 12..sink.len() - 8], &[0, 0, 0, 0]);
        assert_eq!(&sink[sink.len() - 8..sink.len() - 4], b"IEND");
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let data: Vec<u8> = (0..16 * 16 * 4).map(|x| (x % 256) as u8).collect();
        let options = EncoderOptions::new(16, 16, ColorSpace::RGBA);

        let mut encoder = PngEncoder::new(&data, options);
        encoder.add_text("Title", "twice");

        let (mut first, mut second) = (vec![], vec![]);
        encoder.encode(&mut first).unwrap();
        encoder.encode(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_encoders_on_separate_threads() {
        let gray: Vec<u8> = (0..32 * 8).map(|x| (x % 256) as u8).collect();
        let rgb: Vec<u8> = (0..8 * 32 * 3).map(|x| (x * 7 % 256) as u8).collect();

        let gray_encoder = PngEncoder::new(&gray, EncoderOptions::new(32, 8, ColorSpace::Luma));
        let rgb_encoder = PngEncoder::new(&rgb, EncoderOptions::new(8, 32, ColorSpace::RGB));

        let (gray_png, rgb_png) = std::thread::scope(|s| {
            let gray_job = s.spawn(|| {
                let mut sink = vec![];
                gray_encoder.encode(&mut sink).unwrap();
                sink
            });
            let rgb_job = s.spawn(|| {
                let mut sink = vec![];
                rgb_encoder.encode(&mut sink).unwrap();
                sink
            });
            (gray_job.join().unwrap(), rgb_job.join().unwrap())
        });

        // same bytes as encoding on this thread
        let (mut gray_local, mut rgb_local) = (vec![], vec![]);
        gray_encoder.encode(&mut gray_local).unwrap();
        rgb_encoder.encode(&mut rgb_local).unwrap();

        assert_eq!(gray_png, gray_local);
        assert_eq!(rgb_png, rgb_local);
    }

    #[test]
    fn test_unknown_colorspace_is_invalid_channel_count() {
        let data = [0; 16];
        let options = EncoderOptions::default().set_width(4).set_height(4);
        let mut sink = vec![];

        let err = PngEncoder::new(&data, options).encode(&mut sink).unwrap_err();
        assert!(matches!(err, PngEncodeErrors::InvalidChannelCount(0)));
        assert!(sink.is_empty());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_huge_dimensions() {
        // fits in the size arithmetic, so the buffer length is what fails
        let options = EncoderOptions::new(PNG_MAX_U31, PNG_MAX_U31, ColorSpace::RGBA);
        let encoder = PngEncoder::new(&[], options);

        assert!(matches!(
            encoder.validate_layout(),
            Err(PngEncodeErrors::BufferTooSmall { found: 0, .. })
        ));
        let options = EncoderOptions::new(PNG_MAX_U31 + 1, 1, ColorSpace::Luma);
        assert!(matches!(
            PngEncoder::new(&[], options).validate_layout(),
            Err(PngEncodeErrors::DimensionsTooLarge { .. })
        ));
        let options = EncoderOptions::new(1, 1, ColorSpace::Luma).set_stride(Some(usize::MAX));
        assert!(matches!(
            PngEncoder::new(&[], options).validate_layout(),
            Err(PngEncodeErrors::BufferTooSmall { .. })
        ));
    }
}
