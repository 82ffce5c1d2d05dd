// ---------------------------------------------------------------------------
// Public API: red/blue channel swap for packed 4-byte pixels.
//
// Every entry point resolves the process-wide tier once (see `dispatch`) and
// hands the buffer to that tier's remainder chain.
// ---------------------------------------------------------------------------

use core::ops::Range;

use crate::{SizeError, selected_tier};

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_strided(len: usize, width: usize, height: usize, stride: usize) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row_bytes = width.checked_mul(4).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Public API — contiguous
// ===========================================================================

/// Swap bytes 0 and 2 of every complete 4-byte group in `buf` (RGBA↔BGRA).
///
/// Trailing bytes past the last complete group are left untouched; a buffer
/// shorter than one pixel is a no-op. Applying it twice restores the input.
pub fn swap_in_place(buf: &mut [u8]) {
    if buf.len() < 4 {
        return;
    }
    selected_tier().swap_in_place(buf);
}

/// Copy `src` into `dst`, swapping bytes 0 and 2 of every 4-byte group.
///
/// Only the first `min(src.len(), dst.len())` bytes, rounded down to whole
/// groups, are processed. Mismatched lengths never fault; nothing past that
/// point in `dst` is written.
pub fn swap_to(src: &[u8], dst: &mut [u8]) {
    if src.len().min(dst.len()) < 4 {
        return;
    }
    selected_tier().swap_to(src, dst);
}

/// Swap `buf[src]` into `buf[dest..]`, where the two regions may overlap.
///
/// The destination ends up exactly as if the source had been swapped into a
/// separate buffer. Like [`slice::copy_within`], `dest + src.len()` must fit
/// in `buf`; trailing source bytes past the last complete group are not
/// copied, so the matching destination bytes keep their old value.
pub fn swap_within(buf: &mut [u8], src: Range<usize>, dest: usize) -> Result<(), SizeError> {
    let Range { start, end } = src;
    if start > end || end > buf.len() {
        return Err(SizeError::OutOfBounds);
    }
    let count = end - start;
    match dest.checked_add(count) {
        Some(dest_end) if dest_end <= buf.len() => {}
        _ => return Err(SizeError::OutOfBounds),
    }
    let n = count - count % 4;
    if n == 0 {
        return Ok(());
    }

    if start == dest {
        swap_in_place(&mut buf[dest..dest + n]);
    } else if start + n <= dest {
        let (head, tail) = buf.split_at_mut(dest);
        swap_to(&head[start..start + n], &mut tail[..n]);
    } else if dest + n <= start {
        let (head, tail) = buf.split_at_mut(start);
        swap_to(&tail[..n], &mut head[dest..dest + n]);
    } else {
        // Overlapping: move first, then swap the moved groups in place.
        buf.copy_within(start..start + n, dest);
        swap_in_place(&mut buf[dest..dest + n]);
    }
    Ok(())
}

// ===========================================================================
// Public API — strided
// ===========================================================================

/// Swap B↔R in place for a strided 4bpp image.
///
/// `stride` is the distance in bytes between the start of consecutive rows.
/// Must be ≥ `width × 4`. Padding bytes between rows are never read or written.
/// The buffer must be at least `(height - 1) * stride + width * 4` bytes.
pub fn swap_in_place_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    let tier = selected_tier();
    let row_bytes = width * 4;
    for row in buf.chunks_mut(stride).take(height) {
        tier.swap_in_place(&mut row[..row_bytes]);
    }
    Ok(())
}

/// Copy a strided 4bpp image into another, swapping B↔R.
///
/// `src_stride` / `dst_stride` are the distances in bytes between the start of
/// consecutive rows. Padding bytes between rows are never read or written.
pub fn swap_to_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) -> Result<(), SizeError> {
    check_strided(src.len(), width, height, src_stride)?;
    check_strided(dst.len(), width, height, dst_stride)?;
    let tier = selected_tier();
    let row_bytes = width * 4;
    for (s, d) in src
        .chunks(src_stride)
        .zip(dst.chunks_mut(dst_stride))
        .take(height)
    {
        tier.swap_to(&s[..row_bytes], &mut d[..row_bytes]);
    }
    Ok(())
}

// ===========================================================================
// Aliases — the swap is its own inverse
// ===========================================================================

/// Alias for [`swap_in_place`].
#[inline(always)]
pub fn rgba_to_bgra_inplace(buf: &mut [u8]) {
    swap_in_place(buf)
}

/// Alias for [`swap_in_place`].
#[inline(always)]
pub fn bgra_to_rgba_inplace(buf: &mut [u8]) {
    swap_in_place(buf)
}

/// Alias for [`swap_to`].
#[inline(always)]
pub fn rgba_to_bgra(src: &[u8], dst: &mut [u8]) {
    swap_to(src, dst)
}

/// Alias for [`swap_to`].
#[inline(always)]
pub fn bgra_to_rgba(src: &[u8], dst: &mut [u8]) {
    swap_to(src, dst)
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::{vec, vec::Vec};

    fn ref_swap(data: &[u8]) -> Vec<u8> {
        let mut out = data.to_vec();
        for px in out.chunks_exact_mut(4) {
            px.swap(0, 2);
        }
        out
    }

    #[test]
    fn scenario_single_pixel() {
        let mut b = *b"rgba";
        swap_in_place(&mut b);
        assert_eq!(&b, b"bgra");
    }

    #[test]
    fn scenario_two_pixels() {
        let mut b = *b"rgbargba";
        swap_in_place(&mut b);
        assert_eq!(&b, b"bgrabgra");
    }

    #[test]
    fn scenario_partial_tail() {
        let mut b = *b"rgbarg";
        swap_in_place(&mut b);
        assert_eq!(&b, b"bgrarg");
    }

    #[test]
    fn scenario_empty_and_short() {
        let mut empty: [u8; 0] = [];
        swap_in_place(&mut empty);
        for n in 1..4 {
            let mut b = [1u8, 2, 3];
            swap_in_place(&mut b[..n]);
            assert_eq!(b, [1, 2, 3]);
        }
        let mut dst = [9u8; 3];
        swap_to(b"rgb", &mut dst);
        assert_eq!(dst, [9; 3]);
    }

    #[test]
    fn scenario_twice_restores() {
        let mut b = *b"rgba";
        swap_in_place(&mut b);
        swap_in_place(&mut b);
        assert_eq!(&b, b"rgba");
    }

    // Offsets 0..6 of a 25-byte buffer, every prefix swapped whole groups only.
    #[test]
    fn short_input_prefixes() {
        const S: &[u8; 25] = b"012.456.89A.CDE.GHI.KLM.O";
        let cases: [&[u8; 25]; 7] = [
            b"012.456.89A.CDE.GHI.KLM.O",
            b"210.456.89A.CDE.GHI.KLM.O",
            b"210.654.89A.CDE.GHI.KLM.O",
            b"210.654.A98.CDE.GHI.KLM.O",
            b"210.654.A98.EDC.GHI.KLM.O",
            b"210.654.A98.EDC.IHG.KLM.O",
            b"210.654.A98.EDC.IHG.MLK.O",
        ];
        for (i, want) in cases.iter().enumerate() {
            let mut b = *S;
            swap_in_place(&mut b[..4 * i]);
            assert_eq!(&b, *want, "i={i}");
        }
    }

    #[test]
    fn swap_to_bounds_to_shorter_view() {
        let src: Vec<u8> = (0..40).collect();
        let mut dst = vec![0xEEu8; 22];
        swap_to(&src, &mut dst);
        assert_eq!(&dst[..20], &ref_swap(&src[..20])[..]);
        assert_eq!(&dst[20..], &[0xEE, 0xEE]);

        let mut long_dst = vec![0xEEu8; 64];
        swap_to(&src[..13], &mut long_dst);
        assert_eq!(&long_dst[..12], &ref_swap(&src[..12])[..]);
        assert!(long_dst[12..].iter().all(|&b| b == 0xEE));
    }

    #[test]
    fn swap_within_matches_disjoint_at_every_offset() {
        let base: Vec<u8> = (0..600).map(|i| (i % 251) as u8).collect();
        for len in [0usize, 3, 4, 17, 64, 131, 260, 300] {
            for src_start in [0usize, 1, 5, 40, 100] {
                for dest in [0usize, 1, 2, 3, 6, 39, 100, 103, 250] {
                    if src_start + len > base.len() || dest + len > base.len() {
                        continue;
                    }
                    let mut buf = base.clone();
                    swap_within(&mut buf, src_start..src_start + len, dest).unwrap();

                    let n = len - len % 4;
                    let mut want = base.clone();
                    let swapped = ref_swap(&base[src_start..src_start + n]);
                    want[dest..dest + n].copy_from_slice(&swapped);
                    assert_eq!(buf, want, "len={len} src={src_start} dest={dest}");
                }
            }
        }
    }

    #[test]
    fn swap_within_rejects_out_of_bounds() {
        let mut buf = [0u8; 16];
        assert_eq!(swap_within(&mut buf, 0..17, 0), Err(SizeError::OutOfBounds));
        assert_eq!(swap_within(&mut buf, 8..16, 9), Err(SizeError::OutOfBounds));
        assert_eq!(
            swap_within(&mut buf, 0..4, usize::MAX),
            Err(SizeError::OutOfBounds)
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 8..4;
        assert_eq!(swap_within(&mut buf, reversed, 0), Err(SizeError::OutOfBounds));
        assert_eq!(swap_within(&mut buf, 4..8, 12), Ok(()));
    }

    #[test]
    fn strided_swap_leaves_padding() {
        let (w, h, stride) = (10, 4, 48);
        let mut buf = vec![0xCCu8; stride * h];
        for y in 0..h {
            for x in 0..w {
                let i = y * stride + x * 4;
                buf[i] = (y * w + x) as u8;
                buf[i + 1] = 100;
                buf[i + 2] = 200;
                buf[i + 3] = 255;
            }
        }
        let orig = buf.clone();
        swap_in_place_strided(&mut buf, w, h, stride).unwrap();
        for y in 0..h {
            for x in 0..w {
                let i = y * stride + x * 4;
                let o = &orig[i..i + 4];
                assert_eq!(&buf[i..i + 4], &[o[2], o[1], o[0], o[3]], "y={y} x={x}");
            }
            assert!(buf[y * stride + w * 4..(y + 1) * stride].iter().all(|&b| b == 0xCC));
        }
    }

    #[test]
    fn strided_copy_short_last_row() {
        let (w, h) = (3, 3);
        let (ss, ds) = (w * 4 + 4, w * 4 + 8);
        // Last rows end exactly at width, no trailing padding.
        let src: Vec<u8> = (0..(h - 1) * ss + w * 4).map(|i| i as u8).collect();
        let mut dst = vec![0u8; (h - 1) * ds + w * 4];
        swap_to_strided(&src, &mut dst, w, h, ss, ds).unwrap();
        for y in 0..h {
            let s = &src[y * ss..y * ss + w * 4];
            assert_eq!(&dst[y * ds..y * ds + w * 4], &ref_swap(s)[..], "y={y}");
            if y + 1 < h {
                assert!(dst[y * ds + w * 4..(y + 1) * ds].iter().all(|&b| b == 0));
            }
        }
    }

    #[test]
    fn strided_size_errors() {
        // stride < width * 4
        assert_eq!(
            swap_in_place_strided(&mut [0; 32], 2, 2, 4),
            Err(SizeError::InvalidStride)
        );
        // buffer too small
        assert_eq!(
            swap_in_place_strided(&mut [0; 10], 2, 2, 8),
            Err(SizeError::InvalidStride)
        );
        // zero width / height
        assert_eq!(
            swap_in_place_strided(&mut [0; 8], 0, 1, 8),
            Err(SizeError::InvalidStride)
        );
        assert_eq!(
            swap_in_place_strided(&mut [0; 8], 2, 0, 8),
            Err(SizeError::InvalidStride)
        );
        assert_eq!(
            swap_in_place_strided(&mut [0; 8], usize::MAX, 1, usize::MAX),
            Err(SizeError::InvalidStride)
        );
        assert_eq!(
            swap_to_strided(&[0; 16], &mut [0; 15], 2, 2, 8, 8),
            Err(SizeError::InvalidStride)
        );
    }

    #[test]
    fn aliases_match() {
        let data: Vec<u8> = (0..64).collect();
        let mut a = data.clone();
        let mut b = data.clone();
        rgba_to_bgra_inplace(&mut a);
        bgra_to_rgba_inplace(&mut b);
        assert_eq!(a, b);

        let mut c = vec![0u8; 64];
        let mut d = vec![0u8; 64];
        rgba_to_bgra(&data, &mut c);
        bgra_to_rgba(&data, &mut d);
        assert_eq!(a, c);
        assert_eq!(c, d);
    }
}
