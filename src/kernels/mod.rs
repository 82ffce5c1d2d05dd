// ---------------------------------------------------------------------------
// Tiered B↔R swap kernels.
//
// Architecture: #[rite] lane functions contain the SIMD loops. #[arcane]
// block wrappers cut the buffer down to the tier's block granularity. The
// tier entry points summon their token and report how many bytes they
// handled; everything past that is the next tier's job (see `Tier`).
// ---------------------------------------------------------------------------

use crate::Tier;

mod scalar;

#[cfg(target_arch = "x86_64")]
mod x86;

#[cfg(target_arch = "aarch64")]
mod neon;

#[cfg(target_arch = "wasm32")]
mod wasm;


// ===========================================================================
// Utility
// ===========================================================================

/// Swap bytes 0 and 2 of a little-endian-loaded group.
#[inline(always)]
pub(crate) fn swap_br_u32(v: u32) -> u32 {
    (v & 0xFF00_FF00) | (v.rotate_left(16) & 0x00FF_00FF)
}

#[inline(always)]
fn whole_blocks(len: usize, block: usize) -> usize {
    len - len % block
}

// ===========================================================================
// Strategy table
// ===========================================================================

/// One tier's kernels. Each returns the number of leading bytes it
/// processed, always a multiple of the tier's block size; zero when the
/// tier's hardware is absent.
pub(crate) struct Kernel {
    pub(crate) in_place: fn(&mut [u8]) -> usize,
    pub(crate) copy: fn(&[u8], &mut [u8]) -> usize,
}

#[allow(dead_code)]
fn absent_in_place(_buf: &mut [u8]) -> usize {
    0
}

#[allow(dead_code)]
fn absent_copy(_src: &[u8], _dst: &mut [u8]) -> usize {
    0
}

#[allow(dead_code)]
const ABSENT: Kernel = Kernel {
    in_place: absent_in_place,
    copy: absent_copy,
};

const SCALAR4: Kernel = Kernel {
    in_place: scalar::swap_in_place,
    copy: scalar::swap_to,
};

#[cfg(target_arch = "x86_64")]
const VECTOR16: Kernel = Kernel {
    in_place: x86::vector16_in_place,
    copy: x86::vector16_copy,
};
#[cfg(target_arch = "aarch64")]
const VECTOR16: Kernel = Kernel {
    in_place: neon::vector16_in_place,
    copy: neon::vector16_copy,
};
#[cfg(target_arch = "wasm32")]
const VECTOR16: Kernel = Kernel {
    in_place: wasm::vector16_in_place,
    copy: wasm::vector16_copy,
};
#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "wasm32"
)))]
const VECTOR16: Kernel = ABSENT;

#[cfg(target_arch = "x86_64")]
const VECTOR128: Kernel = Kernel {
    in_place: x86::vector128_in_place,
    copy: x86::vector128_copy,
};
#[cfg(target_arch = "aarch64")]
const VECTOR128: Kernel = Kernel {
    in_place: neon::vector128_in_place,
    copy: neon::vector128_copy,
};
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
const VECTOR128: Kernel = ABSENT;

#[cfg(target_arch = "x86_64")]
const VECTOR256: Kernel = Kernel {
    in_place: x86::vector256_in_place,
    copy: x86::vector256_copy,
};
#[cfg(not(target_arch = "x86_64"))]
const VECTOR256: Kernel = ABSENT;

/// Indexed by `Tier as usize`.
static TABLE: [Kernel; 4] = [SCALAR4, VECTOR16, VECTOR128, VECTOR256];

#[inline]
pub(crate) fn table(tier: Tier) -> &'static Kernel {
    &TABLE[tier as usize]
}

// ===========================================================================
// Hardware probes (consumed by `Capabilities::detect`)
// ===========================================================================

pub(crate) fn probe_vector256() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        x86::has_avx2()
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        false
    }
}

pub(crate) fn probe_vector128() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        x86::has_avx2()
    }
    #[cfg(target_arch = "aarch64")]
    {
        neon::has_neon()
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        false
    }
}

pub(crate) fn probe_vector16() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        x86::has_ssse3()
    }
    #[cfg(target_arch = "aarch64")]
    {
        neon::has_neon()
    }
    #[cfg(target_arch = "wasm32")]
    {
        wasm::has_simd128()
    }
    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "wasm32"
    )))]
    {
        false
    }
}
