//! # chanswap
//!
//! Swap the red and blue channels of packed 4-byte pixels (RGBA↔BGRA) as fast
//! as the host CPU allows.
//!
//! The swap is implemented once per capability [`Tier`]: AVX2 on x86-64 at
//! 256- and 128-byte steps, SSSE3 / NEON / WASM SIMD128 at 16-byte steps, and
//! a portable scalar path at one pixel per step. The widest supported tier is
//! picked the first time it is needed and kept for the rest of the process
//! ([`selected_tier`]). Each tier hands whatever does not fill one of its
//! blocks to the next tier down, so any length is handled.
//!
//! ## Core operations (always available)
//!
//! - [`swap_in_place`] and [`swap_to`] work on raw `&mut [u8]` / `&[u8]` and
//!   never fail. Trailing bytes past the last complete pixel are left alone.
//! - [`swap_within`] swaps between overlapping regions of one buffer.
//! - [`swap_in_place_strided`] and [`swap_to_strided`] handle padded rows.
//!
//! ```rust
//! let mut px = *b"rgbargba";
//! chanswap::swap_in_place(&mut px);
//! assert_eq!(&px, b"bgrabgra");
//! ```
//!
//! ## Feature flags
//!
//! - **`rgb`** — Type-safe conversions using [`rgb`] crate pixel types
//!   (`Rgba<u8>`, `Bgra<u8>`) via bytemuck.
//! - **`imgref`** — Whole-image conversions using [`imgref`] types
//!   (`ImgRef`, `ImgVec`). Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod detect;
mod dispatch;
mod error;
mod kernels;
mod swizzle;
mod tier;

pub use detect::Capabilities;
pub use dispatch::selected_tier;
pub use error::SizeError;
pub use swizzle::*;
pub use tier::Tier;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;
