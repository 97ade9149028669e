// --- Scanners ------------------------------------------------------
//
// Both scanners take a byte string and a position, and return what they found
// along with the position just past it. Nothing found means the position comes
// back unchanged.

use crate::Flags;

/// only ascii letters and digits are version chars, everything else separates
pub(crate) fn is_version_char(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

/// Consume a run of ascii digits.
///
/// The value saturates at `u64::MAX`, so any run of digits parses, and all
/// numbers too large to represent compare equal to each other.
pub(crate) fn parse_number(s: &[u8], pos: usize) -> (Option<u64>, usize) {
    let digits = &s[pos..];
    let len = digits.iter().take_while(|c| c.is_ascii_digit()).count();

    if len == 0 {
        return (None, pos);
    }

    let n = digits[..len].iter().fold(0u64, |acc, c| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(c - b'0')))
            .unwrap_or(u64::MAX)
    });

    (Some(n), pos + len)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaClass {
    Plain,
    PreRelease,
    PostRelease,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Alpha {
    /// first letter of the run, lower cased
    pub letter: u8,
    pub class: AlphaClass,
}

/// Consume a run of ascii letters and classify it.
pub(crate) fn parse_alpha(s: &[u8], pos: usize, flags: Flags) -> (Option<Alpha>, usize) {
    let rest = &s[pos..];
    let len = rest.iter().take_while(|c| c.is_ascii_alphabetic()).count();

    if len == 0 {
        return (None, pos);
    }

    let word = &rest[..len];

    let class = if flags.contains(Flags::ANY_IS_PATCH) {
        AlphaClass::PostRelease
    } else {
        classify(word, flags)
    };

    let alpha = Alpha {
        letter: word[0].to_ascii_lowercase(),
        class,
    };

    (Some(alpha), pos + len)
}

fn classify(word: &[u8], flags: Flags) -> AlphaClass {

    let is = |keyword: &[u8]| word.eq_ignore_ascii_case(keyword);
    let starts = |prefix: &[u8]| {
        word.get(..prefix.len()).is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };

    if is(b"alpha") || is(b"beta") || is(b"rc") || starts(b"pre") {
        AlphaClass::PreRelease
    } else if starts(b"post") || is(b"patch") || is(b"pl") || is_errata(word) {
        // pl = patchlevel
        AlphaClass::PostRelease
    } else if flags.contains(Flags::P_IS_PATCH) && is(b"p") {
        AlphaClass::PostRelease
    } else {
        AlphaClass::Plain
    }
}

#[cfg(not(feature = "legacy-errata"))]
fn is_errata(word: &[u8]) -> bool {
    word.eq_ignore_ascii_case(b"errata")
}

// any six letter word starting with "er"
#[cfg(feature = "legacy-errata")]
fn is_errata(word: &[u8]) -> bool {
    word.len() == 6 && word[..2].eq_ignore_ascii_case(b"er")
}

// ---/Scanners ------------------------------------------------------
