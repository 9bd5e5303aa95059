use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `subtract` was asked to remove letters that are not there.
    #[error("cannot subtract {requested} x '{letter}' from {available} x '{letter}'")]
    PreconditionViolation {
        letter: char,
        available: usize,
        requested: usize,
    },

    /// The word list could not be read.
    #[error("failed to read word list")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
