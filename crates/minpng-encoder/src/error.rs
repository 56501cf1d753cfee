/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Errors possible when encoding a png
use std::fmt::{Debug, Display, Formatter};

use minpng_core::bytestream::ZByteIoError;

/// Errors returned by the encoder
///
/// Every variant other than [`SinkWriteFailure`](Self::SinkWriteFailure) is raised
/// before a single byte reaches the sink.
pub enum PngEncodeErrors {
    /// The channel count is not one of 1, 2, 3 or 4
    InvalidChannelCount(usize),
    /// The pixel buffer is shorter than `stride * height`
    BufferTooSmall { expected: usize, found: usize },
    /// Width or height is zero
    ZeroDimensions { width: usize, height: usize },
    /// Width or height exceeds 2^31 - 1, or the image size overflows
    DimensionsTooLarge { width: usize, height: usize },
    /// The stride is smaller than a row of pixels
    InvalidStride { stride: usize, row_bytes: usize },
    /// Compression levels range from 0 to 9
    InvalidCompressionLevel(u8),
    /// A text keyword breaks the png keyword rules
    InvalidTextKeyword(String),
    /// The text of an entry cannot be stored with the configured encoding
    InvalidText { keyword: String },
    /// A chunk payload is longer than a chunk length can describe
    ChunkTooLarge(usize),
    /// The sink rejected a write, the stream is incomplete
    SinkWriteFailure(ZByteIoError),
    /// The compressor failed, nothing was written
    CompressionFailure(String)
}

impl Debug for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChannelCount(channels) => {
                writeln!(f, "Invalid channel count {channels}, expected 1, 2, 3 or 4")
            }
            Self::BufferTooSmall { expected, found } => {
                writeln!(
                    f,
                    "Pixel buffer too small, expected at least {expected} bytes but found {found}"
                )
            }
            Self::ZeroDimensions { width, height } => {
                writeln!(f, "Width or height cannot be zero, got {width}x{height}")
            }
            Self::DimensionsTooLarge { width, height } => {
                writeln!(f, "Image dimensions {width}x{height} are too large for png")
            }
            Self::InvalidStride { stride, row_bytes } => {
                writeln!(
                    f,
                    "Stride {stride} is smaller than the {row_bytes} bytes of a row"
                )
            }
            Self::InvalidCompressionLevel(level) => {
                writeln!(f, "Invalid compression level {level}, expected 0..=9")
            }
            Self::InvalidTextKeyword(keyword) => {
                writeln!(f, "Invalid text keyword {keyword:?}")
            }
            Self::InvalidText { keyword } => {
                writeln!(
                    f,
                    "Text for keyword {keyword:?} cannot be stored with the configured encoding"
                )
            }
            Self::ChunkTooLarge(length) => {
                writeln!(f, "Chunk payload of {length} bytes exceeds the png chunk limit")
            }
            Self::SinkWriteFailure(err) => {
                writeln!(f, "Could not write to sink: {err:?}")
            }
            Self::CompressionFailure(reason) => {
                writeln!(f, "Compression failed: {reason}")
            }
        }
    }
}

impl Display for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PngEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SinkWriteFailure(err) => Some(err),
            _ => None
        }
    }
}

impl From<ZByteIoError> for PngEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::SinkWriteFailure(value)
    }
}
