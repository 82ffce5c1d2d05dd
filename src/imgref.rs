//! Whole-image channel swaps using [`imgref`] types.
//!
//! Rows are swapped one at a time, so stride padding is never touched. The
//! dispatch tier is resolved once per image, not once per row.
//!
//! ```rust
//! use rgb::{Rgba, Bgra};
//! use ::imgref::ImgVec;
//! use chanswap::imgref;
//!
//! let rgba_img = ImgVec::new(vec![Rgba::new(255u8, 0, 128, 200); 4], 2, 2);
//! let bgra_img: ImgVec<Bgra<u8>> = imgref::swap_rgba_to_bgra(rgba_img);
//! assert_eq!(bgra_img.buf()[0], Bgra { b: 128, g: 0, r: 255, a: 200 });
//! ```

use alloc::vec::Vec;

use ::imgref::{ImgRef, ImgRefMut, ImgVec};
use rgb::{Bgra, Rgba};

use crate::{SizeError, selected_tier};

fn check_dims(sw: usize, sh: usize, dw: usize, dh: usize) -> Result<(), SizeError> {
    if sw != dw || sh != dh {
        Err(SizeError::DimensionMismatch)
    } else {
        Ok(())
    }
}

/// Convert an `ImgVec<Rgba<u8>>` to `ImgVec<Bgra<u8>>` in place.
///
/// Swaps R↔B channels and reinterprets the buffer. Zero-copy for the
/// buffer itself; only the pixel data is modified.
pub fn swap_rgba_to_bgra(mut img: ImgVec<Rgba<u8>>) -> ImgVec<Bgra<u8>> {
    let (w, h, stride) = (img.width(), img.height(), img.stride());
    let tier = selected_tier();
    for row in img.rows_mut() {
        tier.swap_in_place(bytemuck::cast_slice_mut(row));
    }
    let buf: Vec<Bgra<u8>> = bytemuck::allocation::cast_vec(img.into_buf());
    ImgVec::new_stride(buf, w, h, stride)
}

/// Convert an `ImgVec<Bgra<u8>>` to `ImgVec<Rgba<u8>>` in place.
pub fn swap_bgra_to_rgba(mut img: ImgVec<Bgra<u8>>) -> ImgVec<Rgba<u8>> {
    let (w, h, stride) = (img.width(), img.height(), img.stride());
    let tier = selected_tier();
    for row in img.rows_mut() {
        tier.swap_in_place(bytemuck::cast_slice_mut(row));
    }
    let buf: Vec<Rgba<u8>> = bytemuck::allocation::cast_vec(img.into_buf());
    ImgVec::new_stride(buf, w, h, stride)
}

/// Copy `ImgRef<Rgba<u8>>` into `ImgRefMut<Bgra<u8>>` with R↔B swapped.
pub fn convert_rgba_to_bgra(
    src: ImgRef<'_, Rgba<u8>>,
    mut dst: ImgRefMut<'_, Bgra<u8>>,
) -> Result<(), SizeError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    let tier = selected_tier();
    for (s, d) in src.rows().zip(dst.rows_mut()) {
        tier.swap_to(bytemuck::cast_slice(s), bytemuck::cast_slice_mut(d));
    }
    Ok(())
}

/// Copy `ImgRef<Bgra<u8>>` into `ImgRefMut<Rgba<u8>>` with B↔R swapped.
pub fn convert_bgra_to_rgba(
    src: ImgRef<'_, Bgra<u8>>,
    mut dst: ImgRefMut<'_, Rgba<u8>>,
) -> Result<(), SizeError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    let tier = selected_tier();
    for (s, d) in src.rows().zip(dst.rows_mut()) {
        tier.swap_to(bytemuck::cast_slice(s), bytemuck::cast_slice_mut(d));
    }
    Ok(())
}
