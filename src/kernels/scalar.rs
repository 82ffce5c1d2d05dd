// Terminal tier: one 4-byte group at a time, no further delegation.
//
// Each group is read whole before it is written back, and no group touches
// another group's bytes, so in-place use is safe.

use super::swap_br_u32;

pub(super) fn swap_in_place(buf: &mut [u8]) -> usize {
    let (groups, _tail) = buf.as_chunks_mut::<4>();
    let done = groups.len() * 4;
    for px in groups {
        *px = swap_br_u32(u32::from_le_bytes(*px)).to_le_bytes();
    }
    done
}

pub(super) fn swap_to(src: &[u8], dst: &mut [u8]) -> usize {
    let (src, _) = src.as_chunks::<4>();
    let (dst, _) = dst.as_chunks_mut::<4>();
    let mut done = 0;
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = swap_br_u32(u32::from_le_bytes(*s)).to_le_bytes();
        done += 4;
    }
    done
}
