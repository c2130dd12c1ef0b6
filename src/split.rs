use itertools::Itertools;
use regex::Regex;
use std::vec::Vec;
use tracing::debug;

/// Two or more consecutive spaces.
static SPACES: &str = " {2,}";

/// How lines are split into fields. Fixed by the first line that is split.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum DelimiterMode {
    Undetermined,
    Tab,
    MultiSpace,
}

impl DelimiterMode {
    /// Picks `Tab` if the line contains a tab, otherwise `MultiSpace`.
    fn detect(line: &str) -> DelimiterMode {
        if line.contains('\t') {
            DelimiterMode::Tab
        } else {
            DelimiterMode::MultiSpace
        }
    }

    /// The string placed between fields when they are rejoined.
    pub(crate) fn joiner(self) -> &'static str {
        match self {
            DelimiterMode::Tab => "\t",
            DelimiterMode::MultiSpace | DelimiterMode::Undetermined => "  ",
        }
    }
}

/// Splits lines into fields and joins selected fields back together.
///
/// The delimiter is detected from the first line passed to [`Splitter::split`] and is used for
/// every line after it, even when a later line would be detected differently.
#[derive(Debug)]
pub(crate) struct Splitter {
    mode: DelimiterMode,
    spaces: Regex,
}

impl Splitter {
    pub(crate) fn new() -> Splitter {
        Splitter {
            mode: DelimiterMode::Undetermined,
            // The pattern is a valid constant, so compiling it cannot fail.
            spaces: Regex::new(SPACES).unwrap(),
        }
    }

    pub(crate) fn mode(&self) -> DelimiterMode {
        self.mode
    }

    /// Splits a line into fields. Always returns at least one field.
    pub(crate) fn split<'t>(&mut self, line: &'t str) -> Vec<&'t str> {
        if self.mode == DelimiterMode::Undetermined {
            self.mode = DelimiterMode::detect(line);
            debug!(mode = ?self.mode, "detected field delimiter");
        }

        match self.mode {
            DelimiterMode::Tab => line.split('\t').collect(),
            _ => self.spaces.split(line).collect(),
        }
    }

    /// Joins fields using the delimiter that lines are split with.
    pub(crate) fn join<'a, I>(&self, fields: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        fields.into_iter().join(self.mode.joiner())
    }
}
