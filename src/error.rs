//! Errors raised while converting a container.

use std::{fmt, io};

use thiserror::Error;

pub type Result<T, E = Is2Error> = std::result::Result<T, E>;

/// Part of the container being read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Header,
    Pixels,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Header => write!(f, "header"),
            Section::Pixels => write!(f, "pixel data"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Is2Error {
    /// Input ended before the section was complete:
    /// truncated file or not an IS2 container.
    #[error("file too short while reading {section}: expected {expected} bytes, found {found}")]
    ShortRead {
        section: Section,
        expected: usize,
        found: usize,
    },

    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not encode PNG: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("invalid layout: {0}")]
    Layout(String),
}

impl Is2Error {
    /// Whether the error is due to the contents of the
    /// input rather than the environment.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Is2Error::ShortRead { .. } | Is2Error::Layout(_))
    }
}
