#![allow(clippy::upper_case_acronyms, non_camel_case_types)]

use minpng_core::colorspace::ColorSpace;

/// Chunk types the encoder emits, see table 5.3 of
/// the png spec, https://www.w3.org/TR/2003/REC-PNG-20031110/
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngChunkType {
    IHDR,
    tEXt,
    IDAT,
    IEND
}

impl PngChunkType {
    /// The four ASCII bytes naming the chunk in the stream
    pub const fn to_bytes(self) -> [u8; 4] {
        match self {
            Self::IHDR => *b"IHDR",
            Self::tEXt => *b"tEXt",
            Self::IDAT => *b"IDAT",
            Self::IEND => *b"IEND"
        }
    }
}

/// Per scanline filter types, stored as the first
/// byte of every row
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterMethod {
    None,
    Sub,
    Up,
    Average,
    Paeth
}

impl FilterMethod {
    pub const fn to_int(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Sub => 1,
            Self::Up => 2,
            Self::Average => 3,
            Self::Paeth => 4
        }
    }
}

/// How rows are filtered before compression
///
/// The default leaves every row untouched (filter type `0`),
/// which keeps output deterministic and cheap to produce.
/// The other strategies usually compress better
/// and decode to exactly the same pixels.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FilterStrategy {
    /// No prediction, rows are stored as is
    #[default]
    None,
    /// Use the `Sub` filter for every row
    Sub,
    /// Use the `Up` filter for every row
    Up,
    /// Use the `Average` filter for every row
    Average,
    /// Use the `Paeth` filter for every row
    Paeth,
    /// Try all filters on each row and keep the one with
    /// the smallest sum of absolute residuals
    Adaptive
}

impl FilterStrategy {
    /// The filter applied to every row, or `None` when
    /// it is chosen per row
    pub(crate) const fn fixed_filter(self) -> Option<FilterMethod> {
        match self {
            Self::None => Some(FilterMethod::None),
            Self::Sub => Some(FilterMethod::Sub),
            Self::Up => Some(FilterMethod::Up),
            Self::Average => Some(FilterMethod::Average),
            Self::Paeth => Some(FilterMethod::Paeth),
            Self::Adaptive => None
        }
    }
}

/// Png color types for 8 bit images
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngColor {
    Luma,
    LumaA,
    RGB,
    RGBA
}

impl PngColor {
    pub(crate) const fn from_colorspace(colorspace: ColorSpace) -> Option<PngColor> {
        match colorspace {
            ColorSpace::Luma => Some(Self::Luma),
            ColorSpace::LumaA => Some(Self::LumaA),
            ColorSpace::RGB => Some(Self::RGB),
            ColorSpace::RGBA => Some(Self::RGBA),
            ColorSpace::Unknown => None
        }
    }

    /// The color type code written to IHDR
    pub(crate) const fn to_int(self) -> u8 {
        match self {
            Self::Luma => 0,
            Self::RGB => 2,
            Self::LumaA => 4,
            Self::RGBA => 6
        }
    }

    pub(crate) const fn num_components(self) -> usize {
        match self {
            Self::Luma => 1,
            Self::LumaA => 2,
            Self::RGB => 3,
            Self::RGBA => 4
        }
    }
}

#[test]
fn test_color_codes() {
    assert_eq!(PngColor::from_colorspace(ColorSpace::Luma).map(PngColor::to_int), Some(0));
    assert_eq!(PngColor::from_colorspace(ColorSpace::LumaA).map(PngColor::to_int), Some(4));
    assert_eq!(PngColor::from_colorspace(ColorSpace::RGB).map(PngColor::to_int), Some(2));
    assert_eq!(PngColor::from_colorspace(ColorSpace::RGBA).map(PngColor::to_int), Some(6));
    assert_eq!(PngColor::from_colorspace(ColorSpace::Unknown), None);
}
