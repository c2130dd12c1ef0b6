use crate::range::ParseRangeError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    /// A field range given on the command line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseRangeError),
    /// An input could not be opened or read.
    #[error("{input}: {source}")]
    Read { input: String, source: io::Error },
    /// Selected fields could not be written to stdout.
    #[error("stdout: {0}")]
    Write(#[source] io::Error),
}

impl Error {
    pub(crate) fn read(input: &str, source: io::Error) -> Error {
        Error::Read {
            input: input.to_string(),
            source,
        }
    }
}
