use crate::error::Error;
use crate::range::FieldRangeSet;
use crate::split::Splitter;
use std::io::{BufRead, BufReader, Read, Write};
use std::vec::Vec;
use tracing::trace;

/// Order in which requested field indices are matched against a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FieldOrder {
    /// Indices are matched in the order the ranges were given.
    AsGiven,
    /// Indices are sorted and deduplicated before matching.
    Ascending,
}

/// Splits input into fields, selects fields based on the specified ranges, then joins and writes
/// the selected fields to the output. Every input line produces one output line.
///
/// The splitter is borrowed so that a delimiter detected in one input carries over to the next.
/// Read failures are reported against `name`, write failures against the output.
pub(crate) fn cut_fields<R, W>(
    name: &str,
    input: &mut R,
    output: &mut W,
    splitter: &mut Splitter,
    ranges: &FieldRangeSet,
    order: FieldOrder,
) -> Result<(), Error>
where
    R: Read,
    W: Write,
{
    let ascending = match order {
        FieldOrder::Ascending => Option::Some(ranges.sorted_indices()),
        FieldOrder::AsGiven => Option::None,
    };

    let reader = BufReader::new(input);
    for line in reader.lines() {
        let line = line.map_err(|err| Error::read(name, err))?;
        let fields = splitter.split(&line);
        trace!(fields = fields.len(), "split line");

        let selection = match &ascending {
            Option::Some(indices) => select(fields, indices.iter().copied()),
            Option::None => select(fields, ranges.indices()),
        };
        let mut line = splitter.join(selection);
        line.push('\n');
        output.write_all(line.as_bytes()).map_err(Error::Write)?;
    }

    Result::Ok(())
}

/// Selects the fields whose position matches the requested indices, in a single forward pass.
///
/// Each field is compared against the next requested index only, and the next index is taken
/// after a match. Indices are expected in non-decreasing order: an index lower than one already
/// matched is never reached again, so `[3, 1]` on four fields selects only the fourth field.
/// Indices past the last field select nothing.
pub(crate) fn select<T, F, I>(fields: F, indices: I) -> Vec<T>
where
    F: IntoIterator<Item = T>,
    I: IntoIterator<Item = usize>,
{
    let mut indices = indices.into_iter();
    let mut next_index = indices.next();
    let mut result = Vec::new();

    for (position, field) in fields.into_iter().enumerate() {
        match next_index {
            Option::Some(index) if index == position => {
                result.push(field);
                next_index = indices.next();
            }
            Option::Some(_) => {}
            // No more indices requested.
            Option::None => break,
        }
    }

    result
}
