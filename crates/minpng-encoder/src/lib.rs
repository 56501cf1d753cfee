/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A png encoder
//!
//! This crate serializes raw, interleaved 8 bit pixels into a valid
//! ISO/IEC 15948:2003 (E) PNG stream.
//!
//! The output is a fixed sequence of chunks
//!
//! - `IHDR`, describing width, height and color type
//! - one `tEXt` chunk per text entry, in insertion order
//! - a single `IDAT` chunk holding the zlib compressed scanlines
//! - `IEND`
//!
//! Grayscale, grayscale + alpha, RGB and RGBA images are supported.
//! Palettes, interlacing and bit depths other than 8 are not.
//!
//! # Usage
//!
//! #### Encode with defaults
//!
//! ```
//! use minpng_encoder::encode_image;
//!
//! let (width, height) = (40, 20);
//! let pixels = vec![0_u8; width * height * 3];
//! let mut sink = vec![];
//!
//! let written = encode_image(&mut sink, &pixels, width, height, 3).unwrap();
//! assert_eq!(written, sink.len());
//! ```
//!
//! #### Tune the encoder
//!
//! Row padding, compression effort, scanline filters and text metadata
//! are configured on a [`PngEncoder`]
//!
//! ```
//! use minpng_encoder::minpng_core::colorspace::ColorSpace;
//! use minpng_encoder::minpng_core::options::EncoderOptions;
//! use minpng_encoder::{FilterStrategy, PngEncoder, PARAMETERS_KEYWORD};
//!
//! // two rows of 3 gray pixels, each row padded to 4 bytes
//! let pixels = [10, 20, 30, 0, 40, 50, 60, 0];
//!
//! let options = EncoderOptions::new(3, 2, ColorSpace::Luma)
//!     .set_stride(Some(4))
//!     .set_effort(Some(9));
//!
//! let mut encoder = PngEncoder::new(&pixels, options);
//! encoder.set_filter_strategy(FilterStrategy::Adaptive);
//! encoder.add_text(PARAMETERS_KEYWORD, "a red car on a beach");
//!
//! let mut sink = vec![];
//! encoder.encode(&mut sink).unwrap();
//! ```
//!
//! # Sinks
//!
//! Anything implementing [`std::io::Write`] can receive the stream.
//! The encoder writes and flushes but never closes the sink, and
//! all validation as well as compression happen before the first byte is written.
//! If the sink itself fails midway the stream is left truncated and must not be used.
//!
//! # Alternatives
//! - [png](https://crates.io/crates/png) crate
//!
pub use encoder::{encode_image, PngEncoder};
pub use enums::FilterStrategy;
pub use error::PngEncodeErrors;
pub use minpng_core;
pub use text::{TextChunk, TextEncoding, PARAMETERS_KEYWORD};

mod compress;
mod constants;
mod crc;
mod encoder;
mod enums;
pub mod error;
mod filters;
mod headers;
mod text;
