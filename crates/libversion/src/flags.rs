// --- Flags ---------------------------------------------------------

use static_assertions::const_assert_eq;

/// Per-side comparison flags.
///
/// `P_IS_PATCH`, `ANY_IS_PATCH`, `LOWER_BOUND` and `UPPER_BOUND` apply to one
/// side of a comparison (see [`crate::compare_each`]). The `*_LEFT`/`*_RIGHT`
/// bits are only understood by [`crate::compare_flags`], which splits a single
/// word into the two per-side sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// a lone "p" letter means "patch" (post-release), as in `1.0p1`
    pub const P_IS_PATCH: Flags = Flags(0x01);

    /// any letter run means post-release, as in `1.0a` (a = patch)
    pub const ANY_IS_PATCH: Flags = Flags(0x02);

    pub const P_IS_PATCH_LEFT: Flags = Flags(0x04);
    pub const P_IS_PATCH_RIGHT: Flags = Flags(0x08);
    pub const ANY_IS_PATCH_LEFT: Flags = Flags(0x10);
    pub const ANY_IS_PATCH_RIGHT: Flags = Flags(0x20);

    /// compare below every version that starts with this one
    pub const LOWER_BOUND: Flags = Flags(0x40);

    /// compare above every version that starts with this one
    pub const UPPER_BOUND: Flags = Flags(0x80);

    pub const fn empty() -> Flags {
        Flags(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Flags {
        Flags(bits)
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// true if either bound bit is set, which buys one extra comparison round
    pub const fn is_bound(self) -> bool {
        self.intersects(Flags(Self::LOWER_BOUND.0 | Self::UPPER_BOUND.0))
    }

    /// Split a combined word into (left, right) per-side flags.
    ///
    /// Only the patch bits are carried over: `P_IS_PATCH_LEFT` becomes
    /// `P_IS_PATCH` on the left side and so on. Everything else is dropped.
    pub fn split_sides(self) -> (Flags, Flags) {
        let mut left = Flags::empty();
        let mut right = Flags::empty();

        if self.contains(Self::P_IS_PATCH_LEFT) {
            left |= Self::P_IS_PATCH;
        }
        if self.contains(Self::ANY_IS_PATCH_LEFT) {
            left |= Self::ANY_IS_PATCH;
        }
        if self.contains(Self::P_IS_PATCH_RIGHT) {
            right |= Self::P_IS_PATCH;
        }
        if self.contains(Self::ANY_IS_PATCH_RIGHT) {
            right |= Self::ANY_IS_PATCH;
        }

        (left, right)
    }
}

const_assert_eq!(Flags::P_IS_PATCH.0 & Flags::ANY_IS_PATCH.0, 0);
const_assert_eq!(Flags::LOWER_BOUND.0 & Flags::UPPER_BOUND.0, 0);
const_assert_eq!(
    (Flags::P_IS_PATCH.0 | Flags::ANY_IS_PATCH.0 | Flags::LOWER_BOUND.0 | Flags::UPPER_BOUND.0)
        & (Flags::P_IS_PATCH_LEFT.0
            | Flags::P_IS_PATCH_RIGHT.0
            | Flags::ANY_IS_PATCH_LEFT.0
            | Flags::ANY_IS_PATCH_RIGHT.0),
    0
);

impl std::ops::BitOr for Flags {
    type Output = Flags;
    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

// ---/Flags ---------------------------------------------------------
