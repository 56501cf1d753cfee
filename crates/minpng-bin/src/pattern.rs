/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Generated test image, handy for checking a viewer or a pipeline
//! without any input at hand.

use minpng_encoder::PngEncodeErrors;

/// Largest width or height a png header can carry
const MAX_DIMENSION: usize = (1 << 31) - 1;

pub const PATTERN_WIDTH: usize = 40;
pub const PATTERN_HEIGHT: usize = 20;

/// Text entry written along with the pattern
pub const PATTERN_SOURCE: (&str, &str) = ("source", "minpng test pattern");

/// Create a gradient image
///
/// The first channel ramps up from left to right, the third channel
/// (blue for RGB) from top to bottom. The second channel stays zero,
/// except for gray+alpha and RGBA where the last channel is opaque alpha.
///
/// Dimensions a png cannot hold are rejected before anything is allocated.
pub fn gradient(width: usize, height: usize, channels: usize) -> Result<Vec<u8>, PngEncodeErrors> {
    if width == 0 || height == 0 {
        return Err(PngEncodeErrors::ZeroDimensions { width, height });
    }
    let too_large = || PngEncodeErrors::DimensionsTooLarge { width, height };

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(too_large());
    }
    let size = width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(channels))
        .ok_or_else(too_large)?;

    let mut pixels = vec![0_u8; size];

    if pixels.is_empty() {
        return Ok(pixels);
    }

    let x_scale = width.saturating_sub(1).max(1);
    let y_scale = height.saturating_sub(1).max(1);

    for (y, row) in pixels.chunks_exact_mut(width * channels).enumerate() {
        for (x, pixel) in row.chunks_exact_mut(channels).enumerate() {
            pixel[0] = (x * 255 / x_scale) as u8;

            if channels >= 3 {
                pixel[2] = (y * 255 / y_scale) as u8;
            }
            if channels == 2 || channels == 4 {
                pixel[channels - 1] = 255;
            }
        }
    }
    Ok(pixels)
}

#[test]
fn test_gradient_corners() {
    let pixels = gradient(PATTERN_WIDTH, PATTERN_HEIGHT, 3).unwrap();
    assert_eq!(pixels.len(), 40 * 20 * 3);

    // top left is black, top right full red, bottom left full blue
    assert_eq!(&pixels[0..3], &[0, 0, 0]);
    assert_eq!(&pixels[39 * 3..40 * 3], &[255, 0, 0]);
    let bottom_left = 19 * 40 * 3;
    assert_eq!(&pixels[bottom_left..bottom_left + 3], &[0, 0, 255]);
}

#[test]
fn test_gradient_alpha_is_opaque() {
    for channels in [2, 4] {
        let pixels = gradient(3, 3, channels).unwrap();
        assert!(pixels.chunks_exact(channels).all(|px| px[channels - 1] == 255));
    }
}

#[test]
fn test_gradient_rejects_unrepresentable_sizes() {
    assert!(matches!(
        gradient(usize::MAX, 4, 1),
        Err(PngEncodeErrors::DimensionsTooLarge { .. })
    ));
    assert!(matches!(
        gradient(MAX_DIMENSION, MAX_DIMENSION + 1, 3),
        Err(PngEncodeErrors::DimensionsTooLarge { .. })
    ));
    assert!(matches!(
        gradient(0, 4, 3),
        Err(PngEncodeErrors::ZeroDimensions { width: 0, height: 4 })
    ));
}
