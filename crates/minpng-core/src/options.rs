/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Encoder options
//!
//! This module exposes a struct through which encoders
//! receive the description of the image they are about to encode
//! together with tuning knobs.
//!
//! Options are set with builder style setters, e.g.
//!
//! ```
//! use minpng_core::colorspace::ColorSpace;
//! use minpng_core::options::EncoderOptions;
//!
//! let options = EncoderOptions::default()
//!     .set_width(40)
//!     .set_height(20)
//!     .set_colorspace(ColorSpace::RGB)
//!     .set_effort(Some(9));
//!
//! assert_eq!(options.row_stride(), 120);
//! ```

use crate::colorspace::ColorSpace;

/// Options shared by all encoders
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct EncoderOptions {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    effort:     Option<u8>,
    stride:     Option<usize>
}

impl EncoderOptions {
    /// Create new encode options
    ///
    /// # Arguments
    ///
    /// * `width`: Image width
    /// * `height`: Image height
    /// * `colorspace`: Image colorspace
    pub const fn new(width: usize, height: usize, colorspace: ColorSpace) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            colorspace,
            effort: None,
            stride: None
        }
    }

    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the colorspace the pixels are laid out in
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Get the compression effort
    ///
    /// `None` means the compressor picks its default effort
    pub const fn effort(&self) -> Option<u8> {
        self.effort
    }

    /// Get the configured stride, if one was set
    pub const fn stride(&self) -> Option<usize> {
        self.stride
    }

    /// Number of bytes between the start of two consecutive rows
    /// in the source buffer.
    ///
    /// Defaults to `width * components` when no stride was set
    pub const fn row_stride(&self) -> usize {
        match self.stride {
            Some(stride) => stride,
            None => self.width.saturating_mul(self.colorspace.num_components())
        }
    }

    /// Set width for the image to be encoded
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set height for the image to be encoded
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the colorspace of the pixels
    pub fn set_colorspace(mut self, colorspace: ColorSpace) -> Self {
        self.colorspace = colorspace;
        self
    }

    /// Set the compression effort, `None` selects the default
    ///
    /// For deflate based encoders, the range is 0..=9
    pub fn set_effort(mut self, effort: Option<u8>) -> Self {
        self.effort = effort;
        self
    }

    /// Set the distance in bytes between rows of the source buffer
    ///
    /// Useful when rows carry padding past their last pixel
    pub fn set_stride(mut self, stride: Option<usize>) -> Self {
        self.stride = stride;
        self
    }
}

#[test]
fn test_row_stride_defaults_to_packed_rows() {
    let options = EncoderOptions::new(7, 3, ColorSpace::LumaA);
    assert_eq!(options.row_stride(), 14);

    let options = options.set_stride(Some(16));
    assert_eq!(options.row_stride(), 16);
    assert_eq!(options.stride(), Some(16));
}
