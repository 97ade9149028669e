// --- Component / Unit ----------------------------------------------
//
// A unit is three ordered fields:
//
//     a: the leading number of a chunk (or 0 for a post-release marker)
//     b: the first letter of the letter run, lower cased
//     c: the number trailing the letter run
//
// Each field is a Component. The ordering is
//
//     LowerBound < Absent < Value(0) < Value(1) < ... < Value(u64::MAX) < UpperBound
//
// which lets "no data here" and the bound markers take part in the ordinary
// lexicographic compare without any special casing.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    LowerBound,
    Absent,
    Value(u64),
    UpperBound,
}

impl From<Option<u64>> for Component {
    fn from(v: Option<u64>) -> Self {
        v.map_or(Component::Absent, Component::Value)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::LowerBound => f.write_str("-inf"),
            Component::Absent => f.write_str("_"),
            Component::Value(n) => write!(f, "{n}"),
            Component::UpperBound => f.write_str("+inf"),
        }
    }
}

/// The atomic comparable element. Field order is comparison order, so the
/// derived `Ord` is the unit comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit {
    pub a: Component,
    pub b: Component,
    pub c: Component,
}

impl Unit {
    pub const fn new(a: Component, b: Component, c: Component) -> Self {
        Self { a, b, c }
    }

    /// filler for an exhausted string without bounds
    pub const FILLER: Unit = Unit::new(Component::Value(0), Component::Absent, Component::Absent);

    /// filler for an exhausted lower bound
    pub const LOWER: Unit = Unit::new(Component::LowerBound, Component::LowerBound, Component::LowerBound);

    /// filler for an exhausted upper bound
    pub const UPPER: Unit = Unit::new(Component::UpperBound, Component::UpperBound, Component::UpperBound);

    /// `(n, _, _)`
    pub const fn number(n: u64) -> Self {
        Unit::new(Component::Value(n), Component::Absent, Component::Absent)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // b holds a lower cased ascii letter whenever it holds a value
        let b = match self.b {
            Component::Value(n) if u8::try_from(n).is_ok_and(|c| c.is_ascii_lowercase()) => {
                (n as u8 as char).to_string()
            }
            other => other.to_string(),
        };
        write!(f, "({} {} {})", self.a, b, self.c)
    }
}

// ---/Component / Unit ----------------------------------------------

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn component_order() {
        let order = [
            Component::LowerBound,
            Component::Absent,
            Component::Value(0),
            Component::Value(1),
            Component::Value(b'a' as u64),
            Component::Value(u64::MAX),
            Component::UpperBound,
        ];
        for (i, left) in order.iter().enumerate() {
            for right in order.iter().skip(i + 1) {
                assert!(left < right, "{left:?} < {right:?}");
            }
        }
    }

    #[test]
    fn unit_order() {
        // first field decides
        assert!(Unit::number(1) < Unit::number(2));

        // pre-release letter sits below the plain filler
        let alpha = Unit::new(Component::Absent, Component::Value(b'a' as u64), Component::Absent);
        assert!(alpha < Unit::FILLER);

        // post-release letter sits above the plain filler, below the next number
        let patch = Unit::new(Component::Value(0), Component::Value(b'p' as u64), Component::Value(1));
        assert!(Unit::FILLER < patch);
        assert!(patch < Unit::number(1));

        // the bound fillers are outside everything
        assert!(Unit::LOWER < alpha);
        assert!(Unit::number(u64::MAX) < Unit::UPPER);
    }

    #[test]
    fn display() {
        assert_eq!(Unit::number(7).to_string(), "(7 _ _)");
        let rc = Unit::new(Component::Absent, Component::Value(b'r' as u64), Component::Value(1));
        assert_eq!(rc.to_string(), "(_ r 1)");
        assert_eq!(Unit::LOWER.to_string(), "(-inf -inf -inf)");
        assert_eq!(Unit::UPPER.to_string(), "(+inf +inf +inf)");
    }

    #[test]
    fn from_option() {
        assert_eq!(Component::from(None), Component::Absent);
        assert_eq!(Component::from(Some(3)), Component::Value(3));
    }
}
