// --- Compare -------------------------------------------------------
//
// Both strings are tokenized lazily and compared unit by unit. A chunk may
// produce one unit on one side and two on the other ("1alpha" vs "1.0"), so
// each side keeps up to two pending units and only asks for more once they
// are used up.
//
// A side flagged as a bound gets one extra round after it runs out. In that
// round its tokenizer yields the bound filler, which puts it below (or above)
// every version that merely starts with the same units.

use std::cmp::Ordering;

use crate::tokenize::{Tokenizer, Units};
use crate::unit::Unit;
use crate::Flags;

/// Units produced by the tokenizer that have not been compared yet.
#[derive(Debug)]
struct Pending {
    units: [Unit; 2],
    len: usize,
}

impl Pending {
    fn new() -> Self {
        Self {
            units: [Unit::FILLER; 2],
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn fill(&mut self, units: Units) {
        match units {
            Units::One(u) => {
                self.units[0] = u;
                self.len = 1;
            }
            Units::Two(u1, u2) => {
                self.units = [u1, u2];
                self.len = 2;
            }
        }
    }

    /// drop the first n units, keeping what is left at the front
    fn consume(&mut self, n: usize) {
        if self.len > n {
            self.units[0] = self.units[n];
        }
        self.len -= n;
    }

    fn as_slice(&self) -> &[Unit] {
        &self.units[..self.len]
    }
}

struct Side<'a> {
    tokenizer: Tokenizer<'a>,
    pending: Pending,
    extra_rounds: u8,
}

impl<'a> Side<'a> {
    fn new(v: &'a [u8], flags: Flags) -> Self {
        Self {
            tokenizer: Tokenizer::new(v, flags),
            pending: Pending::new(),
            extra_rounds: u8::from(flags.is_bound()),
        }
    }

    fn refill(&mut self) {
        if self.pending.is_empty() {
            let units = self.tokenizer.next_units();
            self.pending.fill(units);
        }
    }

    /// Nothing left to compare. A bound side says no once, the first time
    /// it runs dry, to get its bound filler compared.
    fn exhausted(&mut self) -> bool {
        if !self.tokenizer.at_end() || !self.pending.is_empty() {
            return false;
        }
        if self.extra_rounds > 0 {
            self.extra_rounds -= 1;
            return false;
        }
        true
    }
}

/// Compare two versions, each with its own flags.
pub fn compare_each<A, B>(v1: &A, v2: &B, v1_flags: Flags, v2_flags: Flags) -> Ordering
where
    A: AsRef<[u8]> + ?Sized,
    B: AsRef<[u8]> + ?Sized,
{
    let left = Side::new(v1.as_ref(), v1_flags);
    let right = Side::new(v2.as_ref(), v2_flags);

    let result = compare_sides(left, right);
    tracing::debug!(?v1_flags, ?v2_flags, ?result, "compare");
    result
}

fn compare_sides(mut left: Side<'_>, mut right: Side<'_>) -> Ordering {
    loop {
        left.refill();
        right.refill();

        let shift = std::cmp::min(left.pending.len, right.pending.len);

        let pairs = std::iter::zip(left.pending.as_slice(), right.pending.as_slice());
        for (u1, u2) in pairs.take(shift) {
            let ret = u1.cmp(u2);
            tracing::trace!(left=%u1, right=%u2, ?ret, "compare units");
            if ret != Ordering::Equal {
                return ret;
            }
        }

        left.pending.consume(shift);
        right.pending.consume(shift);

        let left_done = left.exhausted();
        let right_done = right.exhausted();

        if left_done && right_done {
            return Ordering::Equal;
        }
    }
}

// ---/Compare -------------------------------------------------------

#[cfg(test)]
mod test {

    use super::*;
    use std::sync::{Arc, Mutex};

    fn cmp(v1: &str, v2: &str) -> Ordering {
        compare_each(v1, v2, Flags::empty(), Flags::empty())
    }

    #[test]
    fn pending() {
        let mut p = Pending::new();
        assert!(p.is_empty());

        p.fill(Units::Two(Unit::number(1), Unit::number(2)));
        assert_eq!(p.as_slice(), &[Unit::number(1), Unit::number(2)]);

        p.consume(1);
        assert_eq!(p.as_slice(), &[Unit::number(2)]);

        p.consume(1);
        assert!(p.is_empty());

        p.fill(Units::One(Unit::number(3)));
        p.consume(1);
        assert!(p.is_empty());
    }

    #[test]
    fn simple() {
        assert_eq!(cmp("1", "1"), Ordering::Equal);
        assert_eq!(cmp("1", "2"), Ordering::Less);
        assert_eq!(cmp("2", "1"), Ordering::Greater);
        assert_eq!(cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn uneven_units() {
        // two units from one chunk against one unit each from two chunks
        assert_eq!(cmp("1alpha", "1.0"), Ordering::Less);
        assert_eq!(cmp("1.0", "1alpha"), Ordering::Greater);
        assert_eq!(cmp("1patch", "1.0"), Ordering::Greater);
        assert_eq!(cmp("1patch", "1.1"), Ordering::Less);

        // the split unit lines up with the next chunk of the other side
        assert_eq!(cmp("1a1", "1.a1"), Ordering::Equal);
        assert_eq!(cmp("1alpha.2", "1.alpha.2"), Ordering::Equal);
        assert_eq!(cmp("1alpha1.2", "1.alpha1.2"), Ordering::Equal);
        assert_eq!(cmp("1alpha1.2", "1.alpha1.3"), Ordering::Less);

        // both sides split
        assert_eq!(cmp("1alpha1", "1beta1"), Ordering::Less);
        assert_eq!(cmp("1rc1", "1rc1"), Ordering::Equal);
    }

    #[test]
    fn trailing_separators() {
        assert_eq!(cmp("1.0.", "1.0"), Ordering::Equal);
        assert_eq!(cmp("1..", "1"), Ordering::Equal);
        assert_eq!(cmp("...", ""), Ordering::Equal);
    }

    #[test]
    fn bound_rounds() {
        let lower = Flags::LOWER_BOUND;
        let upper = Flags::UPPER_BOUND;
        let none = Flags::empty();

        assert_eq!(compare_each("1.0", "1.0", lower, none), Ordering::Less);
        assert_eq!(compare_each("1.0", "1.0", none, lower), Ordering::Greater);
        assert_eq!(compare_each("1.0", "1.0", upper, none), Ordering::Greater);
        assert_eq!(compare_each("1.0", "1.0", lower, lower), Ordering::Equal);
        assert_eq!(compare_each("1.0", "1.0", upper, upper), Ordering::Equal);
        assert_eq!(compare_each("1.0", "1.0", lower, upper), Ordering::Less);

        // bounds sit outside every version with the same prefix
        assert_eq!(compare_each("1.0", "1.0alpha1", lower, none), Ordering::Less);
        assert_eq!(compare_each("1.0", "1.0.0.0.1", upper, none), Ordering::Greater);
        assert_eq!(compare_each("1.0", "1.0patch1", upper, none), Ordering::Greater);

        // but not outside versions with a different prefix
        assert_eq!(compare_each("1.0", "0.9", lower, none), Ordering::Greater);
        assert_eq!(compare_each("1.0", "1.1", upper, none), Ordering::Less);

        // empty string bounds
        assert_eq!(compare_each("", "", lower, none), Ordering::Less);
        assert_eq!(compare_each("", "0", upper, none), Ordering::Greater);
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn logs_result() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .without_time()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(cmp("1.0", "1.1"), Ordering::Less);
        });

        let out = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("DEBUG"), "{out}");
        assert!(out.contains("result=Less"), "{out}");
        assert!(!out.contains("compare units"), "{out}");
    }
}
