//! Capability tiers and the tier-indexed strategy table.

use core::fmt;

use crate::kernels;

/// One capability-specific implementation of the channel swap.
///
/// Variants are declared narrowest first, so the derived ordering matches
/// throughput: `Scalar4 < Vector16 < Vector128 < Vector256`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tier {
    /// One 4-byte pixel per step. Always available.
    Scalar4 = 0,
    /// One 16-byte vector per step (SSSE3, NEON, or WASM SIMD128).
    Vector16 = 1,
    /// 128 bytes per step (AVX2 or NEON).
    Vector128 = 2,
    /// 256 bytes per step (AVX2).
    Vector256 = 3,
}

impl Tier {
    /// All tiers, widest first: the dispatch priority order.
    pub const PRIORITY: [Tier; 4] = [
        Tier::Vector256,
        Tier::Vector128,
        Tier::Vector16,
        Tier::Scalar4,
    ];

    /// Number of bytes the tier consumes per unit step.
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Scalar4 => 4,
            Self::Vector16 => 16,
            Self::Vector128 => 128,
            Self::Vector256 => 256,
        }
    }

    /// The tier that receives this tier's remainder. `None` for `Scalar4`.
    #[inline]
    pub const fn lower(self) -> Option<Tier> {
        match self {
            Self::Scalar4 => None,
            Self::Vector16 => Some(Self::Scalar4),
            Self::Vector128 => Some(Self::Vector16),
            Self::Vector256 => Some(Self::Vector128),
        }
    }

    /// Short lowercase name, as used by `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar4 => "scalar4",
            Self::Vector16 => "vector16",
            Self::Vector128 => "vector128",
            Self::Vector256 => "vector256",
        }
    }

    pub(crate) const fn from_u8(v: u8) -> Option<Tier> {
        match v {
            0 => Some(Self::Scalar4),
            1 => Some(Self::Vector16),
            2 => Some(Self::Vector128),
            3 => Some(Self::Vector256),
            _ => None,
        }
    }

    /// Swap bytes 0↔2 of every complete 4-byte group of `buf`, starting the
    /// remainder chain at this tier.
    ///
    /// If this tier's hardware is absent, it processes nothing and the whole
    /// buffer falls through to the next tier down. Output is identical for
    /// every tier.
    pub fn swap_in_place(self, buf: &mut [u8]) {
        let mut tier = self;
        let mut done = 0;
        loop {
            done += (kernels::table(tier).in_place)(&mut buf[done..]);
            match tier.lower() {
                Some(next) => tier = next,
                None => break,
            }
        }
    }

    /// Write `src` into `dst` with bytes 0↔2 of every group swapped, starting
    /// the remainder chain at this tier.
    ///
    /// Works on the first `min(src.len(), dst.len())` bytes, rounded down to
    /// a whole number of groups. Bytes of `dst` past that point are left
    /// alone.
    pub fn swap_to(self, src: &[u8], dst: &mut [u8]) {
        let n = src.len().min(dst.len());
        let (src, dst) = (&src[..n], &mut dst[..n]);
        let mut tier = self;
        let mut done = 0;
        loop {
            done += (kernels::table(tier).copy)(&src[done..], &mut dst[done..]);
            match tier.lower() {
                Some(next) => tier = next,
                None => break,
            }
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
