//! Scanline framing and filtering
//!
//! Rows are copied out of the (possibly padded) source buffer,
//! prefixed with their filter type byte and appended one after
//! another. The result is what gets fed to the compressor.
use log::trace;

use crate::enums::{FilterMethod, FilterStrategy};

/// Layout of the source rows
#[derive(Copy, Clone, Debug)]
pub struct ScanlineLayout {
    /// Significant bytes in a row, `width * components`
    pub row_bytes:  usize,
    /// Distance between the starts of two rows in the source
    pub stride:     usize,
    pub height:     usize,
    /// Bytes per complete pixel, the distance filters look back
    pub components: usize
}

impl ScanlineLayout {
    /// Size of the framed output, `height * (1 + row_bytes)`
    pub const fn framed_size(&self) -> usize {
        self.height * (self.row_bytes + 1)
    }
}

/// Lay out `data` into filter tagged scanlines
///
/// Stride padding is dropped. The caller guarantees that `data`
/// holds at least `stride * height` bytes.
pub fn frame_scanlines(data: &[u8], layout: ScanlineLayout, strategy: FilterStrategy) -> Vec<u8> {
    let row_bytes = layout.row_bytes;
    let mut framed = vec![0_u8; layout.framed_size()];

    // the row above the first one is defined to be all zeroes
    let zero_row = vec![0_u8; row_bytes];
    let mut previous_row: &[u8] = &zero_row;

    // scratch space for the adaptive strategy
    let mut candidate = vec![0_u8; row_bytes];
    let mut best = vec![0_u8; row_bytes];

    for (y, out_row) in framed
        .chunks_exact_mut(row_bytes + 1)
        .take(layout.height)
        .enumerate()
    {
        let start = layout.stride * y;
        let current_row = &data[start..start + row_bytes];
        let (filter_byte, out) = out_row.split_at_mut(1);

        let filter = match strategy.fixed_filter() {
            Some(filter) => {
                filter_scanline(current_row, previous_row, out, filter, layout.components);
                filter
            }
            None => {
                let filter = choose_compression_filter(
                    current_row,
                    previous_row,
                    &mut candidate,
                    &mut best,
                    layout.components
                );
                out.copy_from_slice(&best);
                filter
            }
        };
        filter_byte[0] = filter.to_int();

        trace!("Row {y} filtered with {filter:?}");
        previous_row = current_row;
    }
    framed
}

/// Run every filter over the row and keep the result with
/// the smallest sum of absolute residuals, leaving it in `best`
fn choose_compression_filter(
    current: &[u8], previous: &[u8], candidate: &mut [u8], best: &mut [u8], components: usize
) -> FilterMethod {
    const FILTERS: [FilterMethod; 5] = [
        FilterMethod::None,
        FilterMethod::Sub,
        FilterMethod::Up,
        FilterMethod::Average,
        FilterMethod::Paeth
    ];
    let mut best_filter = FilterMethod::None;
    let mut best_score = u64::MAX;

    for filter in FILTERS {
        filter_scanline(current, previous, candidate, filter, components);

        // residuals are treated as signed, so 255 counts as a small -1
        let score: u64 = candidate
            .iter()
            .map(|x| u64::from((*x as i8).unsigned_abs()))
            .sum();

        if score < best_score {
            best_score = score;
            best_filter = filter;
            best.copy_from_slice(candidate);
        }
    }
    best_filter
}

/// Filter a single row into `out`
///
/// `previous` must be as long as `current`, use a zeroed row
/// for the first scanline.
pub fn filter_scanline(
    current: &[u8], previous: &[u8], out: &mut [u8], filter: FilterMethod, components: usize
) {
    debug_assert_eq!(current.len(), previous.len());
    debug_assert_eq!(current.len(), out.len());

    let bpp = components.min(current.len());

    match filter {
        FilterMethod::None => out.copy_from_slice(current),
        FilterMethod::Sub => {
            out[..bpp].copy_from_slice(&current[..bpp]);

            for ((out_px, raw), left) in out[bpp..]
                .iter_mut()
                .zip(&current[bpp..])
                .zip(current.iter())
            {
                *out_px = raw.wrapping_sub(*left);
            }
        }
        FilterMethod::Up => {
            for ((out_px, raw), up) in out.iter_mut().zip(current).zip(previous) {
                *out_px = raw.wrapping_sub(*up);
            }
        }
        FilterMethod::Average => {
            for i in 0..current.len() {
                let left = if i >= bpp { u16::from(current[i - bpp]) } else { 0 };
                let up = u16::from(previous[i]);
                // needs 9 bits of precision, hence u16
                let avg = ((left + up) >> 1) as u8;

                out[i] = current[i].wrapping_sub(avg);
            }
        }
        FilterMethod::Paeth => {
            for i in 0..current.len() {
                let (left, up_left) = if i >= bpp {
                    (current[i - bpp], previous[i - bpp])
                } else {
                    (0, 0)
                };
                out[i] = current[i].wrapping_sub(paeth(left, previous[i], up_left));
            }
        }
    }
}

#[inline(always)]
fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let a = i16::from(a);
    let b = i16::from(b);
    let c = i16::from(c);

    let p = a + b - c;
    let pa = (p - a).abs();
    let pb = (p - b).abs();
    let pc = (p - c).abs();

    if pa <= pb && pa <= pc {
        a as u8
    } else if pb <= pc {
        b as u8
    } else {
        c as u8
    }
}
