use std::fmt;
use std::io;

use crate::handoff::HandoffError;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// A token longer than the configured bound under the reject policy.
    OversizedWord {
        word_prefix: String,
        len: usize,
        max: usize,
    },
    Handoff(HandoffError),
    WorkerPanicked,
}

impl Error {
    /// Process exit status for this failure: 2 for bad input, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::OversizedWord { .. } => 2,
            Error::Io(_) | Error::Handoff(_) | Error::WorkerPanicked => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::OversizedWord {
                word_prefix,
                len,
                max,
            } => write!(
                f,
                "word '{word_prefix}...' is {len} characters long (limit {max})"
            ),
            Error::Handoff(e) => write!(f, "handoff failed: {e}"),
            Error::WorkerPanicked => write!(f, "tally worker panicked"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Handoff(e) => Some(e),
            Error::OversizedWord { .. } | Error::WorkerPanicked => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<HandoffError> for Error {
    fn from(e: HandoffError) -> Self {
        Error::Handoff(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
