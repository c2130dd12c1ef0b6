mod parse;
pub(crate) use parse::ParseRangeError;

use itertools::Itertools;
use std::ops::Range;
use std::str::FromStr;
use std::vec::Vec;

/// A range of fields to select from a line, numbered from zero.
///
/// Stored half-open (`bottom..top`) although it is written and parsed as an inclusive range. No
/// ordering is enforced between the bounds; a range with `bottom >= top` selects nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldRange {
    bottom: usize,
    top: usize,
}

impl FieldRange {
    /// Creates a range containing the single field `n`.
    pub(crate) fn unit(n: usize) -> Option<FieldRange> {
        FieldRange::closed(n, n)
    }

    /// Creates a range from `bottom` to `top`, inclusive. Returns `None` if `top` is too large to
    /// be made exclusive.
    pub(crate) fn closed(bottom: usize, top: usize) -> Option<FieldRange> {
        top.checked_add(1).map(|top| FieldRange { bottom, top })
    }

    pub(crate) fn indices(&self) -> Range<usize> {
        self.bottom..self.top
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.bottom >= self.top
    }
}

impl FromStr for FieldRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s)
    }
}

/// Field ranges in the order they were given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldRangeSet {
    ranges: Vec<FieldRange>,
}

impl FieldRangeSet {
    pub(crate) fn new(ranges: Vec<FieldRange>) -> FieldRangeSet {
        FieldRangeSet { ranges }
    }

    /// Parses each token into a `FieldRange`, failing on the first invalid token.
    pub(crate) fn parse_all<I, S>(tokens: I) -> Result<FieldRangeSet, ParseRangeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ranges = tokens
            .into_iter()
            .map(|token| token.as_ref().parse::<FieldRange>())
            .collect::<Result<Vec<FieldRange>, ParseRangeError>>()?;
        Result::Ok(FieldRangeSet::new(ranges))
    }

    pub(crate) fn ranges(&self) -> &[FieldRange] {
        &self.ranges
    }

    /// Returns a fresh pass over every index of every range, one range after another.
    ///
    /// Indices are not sorted or deduplicated, e.g. `5 2-3` yields 5, 2, 3.
    pub(crate) fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranges.iter().flat_map(FieldRange::indices)
    }

    /// Returns every selected index once, in ascending order.
    pub(crate) fn sorted_indices(&self) -> Vec<usize> {
        self.indices().sorted().dedup().collect()
    }
}
