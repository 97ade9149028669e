// --- Tokenizer -----------------------------------------------------
//
// Splits a version string into chunks of version chars (ascii letters and
// digits) and turns each chunk into one or two units.
//
// Within a chunk we look for number, letters, number, in that order. Anything
// after that is skipped and folded into the same chunk.
//
//     "1"        -> (1 _ _)
//     "a"        -> (_ a _)
//     "1a"       -> (1 a _)            plain letters stay glued to the number
//     "1alpha"   -> (1 _ _) (_ a _)    a keyword is split from the number
//     "1patch"   -> (1 _ _) (0 p _)    post-release gets a 0 to sort above "1"
//     "1a1"      -> (1 _ _) (_ a 1)    number, letters, number always splits
//     "1patch1"  -> (1 _ _) (0 p 1)
//     "patch1"   -> (0 p 1)
//
// Once the string runs out, a filler unit is produced on every call.

use crate::scan::{self, AlphaClass};
use crate::unit::{Component, Unit};
use crate::Flags;

/// One or two units produced from a single chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    One(Unit),
    Two(Unit, Unit),
}

pub struct Tokenizer<'a> {
    v: &'a [u8],
    pos: usize,
    flags: Flags,
}

impl<'a> Tokenizer<'a> {

    pub fn new(v: &'a [u8], flags: Flags) -> Self {
        Self { v, pos: 0, flags }
    }

    /// true once the cursor sits at the very end of the string
    pub fn at_end(&self) -> bool {
        self.pos >= self.v.len()
    }

    fn filler(&self) -> Unit {
        if self.flags.contains(Flags::LOWER_BOUND) {
            Unit::LOWER
        } else if self.flags.contains(Flags::UPPER_BOUND) {
            Unit::UPPER
        } else {
            Unit::FILLER
        }
    }

    /// Produce the units for the next chunk, or a filler unit at the end.
    pub fn next_units(&mut self) -> Units {
        match self.next() {
            Some(units) => units,
            None => Units::One(self.filler()),
        }
    }
}

/// Yields the units of each chunk, ending when only separators remain.
impl<'a> Iterator for Tokenizer<'a> {
    type Item = Units;

    fn next(&mut self) -> Option<Self::Item> {

        // skip separators
        while !self.at_end() && !scan::is_version_char(self.v[self.pos]) {
            self.pos += 1;
        }

        if self.at_end() {
            return None;
        }

        let start = self.pos;

        let (number, pos) = scan::parse_number(self.v, start);
        let (alpha, pos) = scan::parse_alpha(self.v, pos, self.flags);
        let (extra, pos) = scan::parse_number(self.v, pos);

        // whatever is left of this chunk is ignored
        let rest = self.v[pos..].iter().take_while(|c| scan::is_version_char(**c)).count();
        self.pos = pos + rest;

        let class = alpha.map_or(AlphaClass::Plain, |a| a.class);
        let letter = Component::from(alpha.map(|a| u64::from(a.letter)));

        // the leading field of a split-off letter unit
        let lead = match class {
            AlphaClass::PostRelease => Component::Value(0),
            _ => Component::Absent,
        };

        let units = match (number, extra) {
            (Some(number), Some(extra)) => {
                Units::Two(
                    Unit::number(number),
                    Unit::new(lead, letter, Component::Value(extra)),
                )
            }
            (Some(number), None) if class != AlphaClass::Plain => {
                Units::Two(
                    Unit::number(number),
                    Unit::new(lead, letter, Component::Absent),
                )
            }
            _ => {
                let number = match (number, class) {
                    (None, AlphaClass::PostRelease) => Component::Value(0),
                    (number, _) => Component::from(number),
                };
                Units::One(Unit::new(number, letter, Component::from(extra)))
            }
        };

        tracing::trace!(chunk=%String::from_utf8_lossy(&self.v[start..self.pos]), ?units, "next chunk");

        Some(units)
    }
}

/// The units a version string breaks into, without any trailing filler.
pub fn decompose<V: AsRef<[u8]> + ?Sized>(v: &V, flags: Flags) -> Vec<Unit> {
    let mut units = Vec::new();
    for chunk in Tokenizer::new(v.as_ref(), flags) {
        match chunk {
            Units::One(u) => units.push(u),
            Units::Two(u1, u2) => units.extend([u1, u2]),
        }
    }
    units
}

// ---/Tokenizer -----------------------------------------------------
