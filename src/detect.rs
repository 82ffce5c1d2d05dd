//! CPU capability detection.
//!
//! The hardware query itself belongs to archmage: summoning a token checks the
//! feature flags on first use and caches the answer, so [`Capabilities::detect`]
//! is idempotent and cheap on every call after the first.

use crate::{Tier, kernels};

/// Which vector tiers the host can run. `Scalar4` is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    /// `Tier::Vector256` can run.
    pub vector256: bool,
    /// `Tier::Vector128` can run.
    pub vector128: bool,
    /// `Tier::Vector16` can run.
    pub vector16: bool,
}

impl Capabilities {
    /// Scalar only.
    pub const NONE: Self = Self {
        vector256: false,
        vector128: false,
        vector16: false,
    };

    /// Every tier claimed available. Useful only for exercising selection.
    pub const ALL: Self = Self {
        vector256: true,
        vector128: true,
        vector16: true,
    };

    /// Query the host CPU. Absent or undetectable features read as `false`.
    pub fn detect() -> Self {
        Self {
            vector256: kernels::probe_vector256(),
            vector128: kernels::probe_vector128(),
            vector16: kernels::probe_vector16(),
        }
    }

    /// Whether `tier` can run here. Always true for `Scalar4`.
    #[inline]
    pub const fn supports(self, tier: Tier) -> bool {
        match tier {
            Tier::Scalar4 => true,
            Tier::Vector16 => self.vector16,
            Tier::Vector128 => self.vector128,
            Tier::Vector256 => self.vector256,
        }
    }

    /// The same set with `tier` forced off. Forcing off `Scalar4` is a no-op.
    #[must_use]
    pub const fn without(mut self, tier: Tier) -> Self {
        match tier {
            Tier::Scalar4 => {}
            Tier::Vector16 => self.vector16 = false,
            Tier::Vector128 => self.vector128 = false,
            Tier::Vector256 => self.vector256 = false,
        }
        self
    }

    /// First supported tier in priority order, widest first.
    pub fn best_tier(self) -> Tier {
        Tier::PRIORITY
            .into_iter()
            .find(|&tier| self.supports(tier))
            .unwrap_or(Tier::Scalar4)
    }
}
