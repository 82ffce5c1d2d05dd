use archmage::prelude::*;
use archmage::{SimdToken, X64V2Token, X64V3Token};

use super::whole_blocks;
use crate::Tier;

// ===========================================================================
// SIMD constants
// ===========================================================================

// pshufb works per 128-bit lane, so the AVX2 mask repeats the SSE one.
const BR_SHUF_MASK_AVX: [i8; 32] = [
    2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14, 13, 12, 15, 2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14,
    13, 12, 15,
];

const BR_SHUF_MASK_SSE: [i8; 16] = [2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14, 13, 12, 15];

// ===========================================================================
// AVX2 (x86-64-v3) — 32-byte lanes
// ===========================================================================

#[rite]
fn swap_lanes_v3(_token: X64V3Token, lanes: &mut [[u8; 32]]) {
    let mask = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&BR_SHUF_MASK_AVX);
    for lane in lanes {
        let v = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&*lane);
        safe_unaligned_simd::x86_64::_mm256_storeu_si256(lane, _mm256_shuffle_epi8(v, mask));
    }
}

#[rite]
fn copy_swap_lanes_v3(_token: X64V3Token, src: &[[u8; 32]], dst: &mut [[u8; 32]]) {
    let mask = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&BR_SHUF_MASK_AVX);
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        let v = safe_unaligned_simd::x86_64::_mm256_loadu_si256(s);
        safe_unaligned_simd::x86_64::_mm256_storeu_si256(d, _mm256_shuffle_epi8(v, mask));
    }
}

#[arcane]
fn swap_blocks_v3(t: X64V3Token, buf: &mut [u8], block: usize) -> usize {
    let end = whole_blocks(buf.len(), block);
    swap_lanes_v3(t, buf[..end].as_chunks_mut::<32>().0);
    end
}

#[arcane]
fn copy_swap_blocks_v3(t: X64V3Token, src: &[u8], dst: &mut [u8], block: usize) -> usize {
    let end = whole_blocks(src.len().min(dst.len()), block);
    copy_swap_lanes_v3(
        t,
        src[..end].as_chunks::<32>().0,
        dst[..end].as_chunks_mut::<32>().0,
    );
    end
}

// ===========================================================================
// SSSE3 (x86-64-v2) — 16-byte lanes
// ===========================================================================

#[rite]
fn swap_lanes_v2(_token: X64V2Token, lanes: &mut [[u8; 16]]) {
    let mask = safe_unaligned_simd::x86_64::_mm_loadu_si128(&BR_SHUF_MASK_SSE);
    for lane in lanes {
        let v = safe_unaligned_simd::x86_64::_mm_loadu_si128(&*lane);
        safe_unaligned_simd::x86_64::_mm_storeu_si128(lane, _mm_shuffle_epi8(v, mask));
    }
}

#[rite]
fn copy_swap_lanes_v2(_token: X64V2Token, src: &[[u8; 16]], dst: &mut [[u8; 16]]) {
    let mask = safe_unaligned_simd::x86_64::_mm_loadu_si128(&BR_SHUF_MASK_SSE);
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        let v = safe_unaligned_simd::x86_64::_mm_loadu_si128(s);
        safe_unaligned_simd::x86_64::_mm_storeu_si128(d, _mm_shuffle_epi8(v, mask));
    }
}

#[arcane]
fn swap_blocks_v2(t: X64V2Token, buf: &mut [u8], block: usize) -> usize {
    let end = whole_blocks(buf.len(), block);
    swap_lanes_v2(t, buf[..end].as_chunks_mut::<16>().0);
    end
}

#[arcane]
fn copy_swap_blocks_v2(t: X64V2Token, src: &[u8], dst: &mut [u8], block: usize) -> usize {
    let end = whole_blocks(src.len().min(dst.len()), block);
    copy_swap_lanes_v2(
        t,
        src[..end].as_chunks::<16>().0,
        dst[..end].as_chunks_mut::<16>().0,
    );
    end
}

// ===========================================================================
// Tier entry points (strategy table targets)
// ===========================================================================

pub(super) fn has_avx2() -> bool {
    X64V3Token::summon().is_some()
}

// archmage has no SSSE3-only token; v2 also demands SSE4.1/4.2 and POPCNT.
pub(super) fn has_ssse3() -> bool {
    X64V2Token::summon().is_some()
}

pub(super) fn vector256_in_place(buf: &mut [u8]) -> usize {
    X64V3Token::summon().map_or(0, |t| swap_blocks_v3(t, buf, Tier::Vector256.block_size()))
}

pub(super) fn vector256_copy(src: &[u8], dst: &mut [u8]) -> usize {
    X64V3Token::summon().map_or(0, |t| {
        copy_swap_blocks_v3(t, src, dst, Tier::Vector256.block_size())
    })
}

pub(super) fn vector128_in_place(buf: &mut [u8]) -> usize {
    X64V3Token::summon().map_or(0, |t| swap_blocks_v3(t, buf, Tier::Vector128.block_size()))
}

pub(super) fn vector128_copy(src: &[u8], dst: &mut [u8]) -> usize {
    X64V3Token::summon().map_or(0, |t| {
        copy_swap_blocks_v3(t, src, dst, Tier::Vector128.block_size())
    })
}

pub(super) fn vector16_in_place(buf: &mut [u8]) -> usize {
    X64V2Token::summon().map_or(0, |t| swap_blocks_v2(t, buf, Tier::Vector16.block_size()))
}

pub(super) fn vector16_copy(src: &[u8], dst: &mut [u8]) -> usize {
    X64V2Token::summon().map_or(0, |t| {
        copy_swap_blocks_v2(t, src, dst, Tier::Vector16.block_size())
    })
}
