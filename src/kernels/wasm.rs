use archmage::prelude::*;
use archmage::{SimdToken, Wasm128Token};
use core::arch::wasm32::{i8x16, i8x16_swizzle};

use super::whole_blocks;
use crate::Tier;

// ===========================================================================
// WASM SIMD128 — 16-byte lanes
// ===========================================================================

#[rite]
fn swap_lanes_wasm128(_token: Wasm128Token, lanes: &mut [[u8; 16]]) {
    let mask = i8x16(2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14, 13, 12, 15);
    for lane in lanes {
        let v = safe_unaligned_simd::wasm32::v128_load(&*lane);
        safe_unaligned_simd::wasm32::v128_store(lane, i8x16_swizzle(v, mask));
    }
}

#[rite]
fn copy_swap_lanes_wasm128(_token: Wasm128Token, src: &[[u8; 16]], dst: &mut [[u8; 16]]) {
    let mask = i8x16(2, 1, 0, 3, 6, 5, 4, 7, 10, 9, 8, 11, 14, 13, 12, 15);
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        let v = safe_unaligned_simd::wasm32::v128_load(s);
        safe_unaligned_simd::wasm32::v128_store(d, i8x16_swizzle(v, mask));
    }
}

#[arcane]
fn swap_blocks_wasm128(t: Wasm128Token, buf: &mut [u8]) -> usize {
    let end = whole_blocks(buf.len(), Tier::Vector16.block_size());
    swap_lanes_wasm128(t, buf[..end].as_chunks_mut::<16>().0);
    end
}

#[arcane]
fn copy_swap_blocks_wasm128(t: Wasm128Token, src: &[u8], dst: &mut [u8]) -> usize {
    let end = whole_blocks(src.len().min(dst.len()), Tier::Vector16.block_size());
    copy_swap_lanes_wasm128(
        t,
        src[..end].as_chunks::<16>().0,
        dst[..end].as_chunks_mut::<16>().0,
    );
    end
}

pub(super) fn has_simd128() -> bool {
    Wasm128Token::summon().is_some()
}

pub(super) fn vector16_in_place(buf: &mut [u8]) -> usize {
    Wasm128Token::summon().map_or(0, |t| swap_blocks_wasm128(t, buf))
}

pub(super) fn vector16_copy(src: &[u8], dst: &mut [u8]) -> usize {
    Wasm128Token::summon().map_or(0, |t| copy_swap_blocks_wasm128(t, src, dst))
}
