use archmage::prelude::*;
use archmage::{NeonToken, SimdToken};
use core::arch::aarch64::vqtbl1q_u8;

use super::whole_blocks;
use crate::Tier;

const BR_TBL_MASK: [u8; 16] = [2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14, 13, 12, 15];

// ===========================================================================
// ARM NEON — 16-byte lanes
// ===========================================================================

#[rite]
fn swap_lanes_neon(_token: NeonToken, lanes: &mut [[u8; 16]]) {
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&BR_TBL_MASK);
    for lane in lanes {
        let v = safe_unaligned_simd::aarch64::vld1q_u8(&*lane);
        safe_unaligned_simd::aarch64::vst1q_u8(lane, vqtbl1q_u8(v, mask));
    }
}

#[rite]
fn copy_swap_lanes_neon(_token: NeonToken, src: &[[u8; 16]], dst: &mut [[u8; 16]]) {
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&BR_TBL_MASK);
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        let v = safe_unaligned_simd::aarch64::vld1q_u8(s);
        safe_unaligned_simd::aarch64::vst1q_u8(d, vqtbl1q_u8(v, mask));
    }
}

#[arcane]
fn swap_blocks_neon(t: NeonToken, buf: &mut [u8], block: usize) -> usize {
    let end = whole_blocks(buf.len(), block);
    swap_lanes_neon(t, buf[..end].as_chunks_mut::<16>().0);
    end
}

#[arcane]
fn copy_swap_blocks_neon(t: NeonToken, src: &[u8], dst: &mut [u8], block: usize) -> usize {
    let end = whole_blocks(src.len().min(dst.len()), block);
    copy_swap_lanes_neon(
        t,
        src[..end].as_chunks::<16>().0,
        dst[..end].as_chunks_mut::<16>().0,
    );
    end
}

// ===========================================================================
// Tier entry points
// ===========================================================================

pub(super) fn has_neon() -> bool {
    NeonToken::summon().is_some()
}

pub(super) fn vector128_in_place(buf: &mut [u8]) -> usize {
    NeonToken::summon().map_or(0, |t| swap_blocks_neon(t, buf, Tier::Vector128.block_size()))
}

pub(super) fn vector128_copy(src: &[u8], dst: &mut [u8]) -> usize {
    NeonToken::summon().map_or(0, |t| {
        copy_swap_blocks_neon(t, src, dst, Tier::Vector128.block_size())
    })
}

pub(super) fn vector16_in_place(buf: &mut [u8]) -> usize {
    NeonToken::summon().map_or(0, |t| swap_blocks_neon(t, buf, Tier::Vector16.block_size()))
}

pub(super) fn vector16_copy(src: &[u8], dst: &mut [u8]) -> usize {
    NeonToken::summon().map_or(0, |t| {
        copy_swap_blocks_neon(t, src, dst, Tier::Vector16.block_size())
    })
}
