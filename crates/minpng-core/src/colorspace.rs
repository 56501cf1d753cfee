/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image colorspace information.

/// Colorspaces of interleaved 8 bit images understood by
/// the minpng encoders
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ColorSpace {
    /// Red, Green, Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA,
    /// Grayscale colorspace
    Luma,
    /// Grayscale with alpha colorspace
    LumaA,
    /// The colorspace is unknown
    #[default]
    Unknown
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4,
            Self::Luma => 1,
            Self::LumaA => 2,
            Self::Unknown => 0
        }
    }

    /// Pick the colorspace implied by a channel count
    ///
    /// Returns `None` for anything outside `1..=4`
    ///
    /// ```
    /// use minpng_core::colorspace::ColorSpace;
    /// assert_eq!(ColorSpace::from_num_components(2), Some(ColorSpace::LumaA));
    /// assert_eq!(ColorSpace::from_num_components(5), None);
    /// ```
    pub const fn from_num_components(components: usize) -> Option<ColorSpace> {
        match components {
            1 => Some(Self::Luma),
            2 => Some(Self::LumaA),
            3 => Some(Self::RGB),
            4 => Some(Self::RGBA),
            _ => None
        }
    }
}

/// All colorspaces that describe real pixel layouts
pub static ALL_COLORSPACES: [ColorSpace; 4] = [
    ColorSpace::Luma,
    ColorSpace::LumaA,
    ColorSpace::RGB,
    ColorSpace::RGBA
];

#[test]
fn test_components_round_trip() {
    for colorspace in ALL_COLORSPACES {
        let components = colorspace.num_components();
        assert_eq!(ColorSpace::from_num_components(components), Some(colorspace));
    }
    assert_eq!(ColorSpace::from_num_components(0), None);
    assert_eq!(ColorSpace::Unknown.num_components(), 0);
}
