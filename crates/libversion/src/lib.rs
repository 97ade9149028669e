// libversion compare
//
// --- General rules ---
//
// 1. Versions are split into chunks of ascii letters and digits. Everything
//    else is a separator, and which separator is used does not matter.
//    example: 1.2.3 == 1-2-3 == 1_2_3
//
// 2. Chunks compare one by one, numbers numerically.
//    example: 1.9 < 1.10
//
// 3. A missing chunk compares like a 0.
//    example: 1 == 1.0 == 1.0.0
//
// 4. Pre-release keywords sort before the release, post-release keywords
//    sort after it but before the next number.
//    example: 1.0alpha1 < 1.0beta1 < 1.0rc1 < 1.0 < 1.0patch1 < 1.0.1
//
// 5. Letters are case insensitive. Once a letter run is classified, only
//    its first letter counts, so keywords of the same kind that share a
//    first letter are equal. Whether the run is a keyword still matters:
//    a keyword splits off the number before it, plain letters stay glued.
//    example: 1.0RC1 == 1.0rc1,  1.0patch1 == 1.0post1,  1.0rc != 1.0r
//
// 6. Letters glued to a number without a keyword are a suffix and sort
//    after the number.
//    example: 1.0 < 1.0.1 < 1.0a < 1.1
//
// --- Keywords ---
//
// pre-release:    alpha, beta, rc, pre*
// post-release:   post*, patch, pl, errata
//                 p         (only with P_IS_PATCH)
//                 anything  (only with ANY_IS_PATCH)
//
// --- Bounds ---
//
// A version flagged LOWER_BOUND compares below every version it is a prefix
// of, UPPER_BOUND above. This is what open and closed range endpoints are
// built from.
//
// example: lower(1.0) < 1.0alpha1 < 1.0 < 1.0.1 < upper(1.0) < 1.1
//
// Trailing zeros are not equivalent under bounds, the bound marker takes
// the place of the first missing chunk.
// example: lower(1) < lower(1.0),  upper(1.0.0) < upper(1.0)
//
// --- Details ---
//
// 1. What does a chunk turn into?
//
//     Each chunk becomes one or two units (a, b, c): the leading number, the
//     first letter, and a number after the letters. See tokenize.rs for the
//     table. Unit fields may also be "absent", or a bound marker.
//
// 2. How do numbers too large for 64 bits compare?
//
//     They saturate. All of them are equal to u64::MAX, and still less than
//     an upper bound.
//
// 3. Can a comparison fail?
//
//     No. Every byte string is a valid version, including the empty one.

mod compare;
mod flags;
mod scan;
mod tokenize;
mod unit;

use std::cmp::Ordering;

pub use compare::compare_each;
pub use flags::Flags;
pub use tokenize::{decompose, Tokenizer, Units};
pub use unit::{Component, Unit};

/// Compare two versions without any flags.
pub fn compare<A, B>(v1: &A, v2: &B) -> Ordering
where
    A: AsRef<[u8]> + ?Sized,
    B: AsRef<[u8]> + ?Sized,
{
    compare_each(v1, v2, Flags::empty(), Flags::empty())
}

/// Compare two versions with the same flags applied to both sides.
#[deprecated(note = "flags usually differ per side, use compare_each or compare_flags")]
pub fn compare_symmetric<A, B>(v1: &A, v2: &B, flags: Flags) -> Ordering
where
    A: AsRef<[u8]> + ?Sized,
    B: AsRef<[u8]> + ?Sized,
{
    compare_each(v1, v2, flags, flags)
}

/// Compare two versions, taking the per-side patch flags from a single word
/// of `*_LEFT` / `*_RIGHT` bits.
pub fn compare_flags<A, B>(v1: &A, v2: &B, flags: Flags) -> Ordering
where
    A: AsRef<[u8]> + ?Sized,
    B: AsRef<[u8]> + ?Sized,
{
    let (v1_flags, v2_flags) = flags.split_sides();
    compare_each(v1, v2, v1_flags, v2_flags)
}

// --- VersionRef ----------------------------------------------------

/// A borrowed version string with the flags it compares under.
#[derive(Debug, Clone, Copy)]
pub struct VersionRef<'a> {
    pub v: &'a str,
    pub flags: Flags,
}

impl<'a> VersionRef<'a> {
    pub fn new(v: &'a str) -> Self {
        Self { v, flags: Flags::empty() }
    }
    pub fn with_flags(v: &'a str, flags: Flags) -> Self {
        Self { v, flags }
    }
    pub fn lower_bound(v: &'a str) -> Self {
        Self::with_flags(v, Flags::LOWER_BOUND)
    }
    pub fn upper_bound(v: &'a str) -> Self {
        Self::with_flags(v, Flags::UPPER_BOUND)
    }
    pub fn as_str(&self) -> &str {
        self.v
    }
}

impl<'a> PartialEq for VersionRef<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<'a> Eq for VersionRef<'a> {}
impl<'a> PartialOrd for VersionRef<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<'a> Ord for VersionRef<'a> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_each(self.v, other.v, self.flags, other.flags)
    }
}

impl<'a> std::fmt::Display for VersionRef<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.v)
    }
}

// ---/VersionRef ----------------------------------------------------

// --- VersionOwned --------------------------------------------------

#[derive(Debug, Clone)]
pub struct VersionOwned {
    pub v: String,
    pub flags: Flags,
}

impl VersionOwned {
    pub fn new(v: impl Into<String>) -> Self {
        Self { v: v.into(), flags: Flags::empty() }
    }
    pub fn with_flags(v: impl Into<String>, flags: Flags) -> Self {
        Self { v: v.into(), flags }
    }
    pub fn lower_bound(v: impl Into<String>) -> Self {
        Self::with_flags(v, Flags::LOWER_BOUND)
    }
    pub fn upper_bound(v: impl Into<String>) -> Self {
        Self::with_flags(v, Flags::UPPER_BOUND)
    }
    pub fn as_str(&self) -> &str {
        self.v.as_str()
    }
    pub fn as_version_ref(&self) -> VersionRef<'_> {
        VersionRef::with_flags(&self.v, self.flags)
    }
}

impl PartialEq for VersionOwned {
    fn eq(&self, other: &Self) -> bool {
        self.as_version_ref().eq(&other.as_version_ref())
    }
}
impl Eq for VersionOwned {}
impl PartialOrd for VersionOwned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for VersionOwned {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_version_ref().cmp(&other.as_version_ref())
    }
}

impl std::fmt::Display for VersionOwned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.v)
    }
}

// ---/VersionOwned --------------------------------------------------
