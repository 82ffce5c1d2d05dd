//! Type-safe channel swaps using [`rgb`] crate types via bytemuck.
//!
//! In-place conversions reinterpret the same memory, so nothing is copied or
//! allocated.
//!
//! ```rust
//! use rgb::{Rgba, Bgra};
//! use chanswap::typed_rgb;
//!
//! let mut pixels: Vec<Rgba<u8>> = vec![Rgba::new(255, 0, 128, 255); 100];
//! let bgra: &mut [Bgra<u8>] = typed_rgb::rgba_to_bgra_mut(&mut pixels);
//! assert_eq!(bgra[0], Bgra { b: 128, g: 0, r: 255, a: 255 });
//! ```

use rgb::{Bgra, Rgba};

/// Convert `&mut [Rgba<u8>]` to `&mut [Bgra<u8>]` in place by swapping R↔B.
///
/// Returns a bytemuck-reinterpreted reference to the same memory.
pub fn rgba_to_bgra_mut(pixels: &mut [Rgba<u8>]) -> &mut [Bgra<u8>] {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::swap_in_place(bytes);
    bytemuck::cast_slice_mut(bytes)
}

/// Convert `&mut [Bgra<u8>]` to `&mut [Rgba<u8>]` in place by swapping B↔R.
pub fn bgra_to_rgba_mut(pixels: &mut [Bgra<u8>]) -> &mut [Rgba<u8>] {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::swap_in_place(bytes);
    bytemuck::cast_slice_mut(bytes)
}

/// Copy `&[Rgba<u8>]` into `&mut [Bgra<u8>]`, swapping R↔B.
///
/// Converts `min(src.len(), dst.len())` pixels.
pub fn rgba_to_bgra_buf(src: &[Rgba<u8>], dst: &mut [Bgra<u8>]) {
    crate::swap_to(bytemuck::cast_slice(src), bytemuck::cast_slice_mut(dst));
}

/// Copy `&[Bgra<u8>]` into `&mut [Rgba<u8>]`, swapping B↔R.
pub fn bgra_to_rgba_buf(src: &[Bgra<u8>], dst: &mut [Rgba<u8>]) {
    crate::swap_to(bytemuck::cast_slice(src), bytemuck::cast_slice_mut(dst));
}
