use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `SegmentTree::new` was handed an empty slice.
    EmptyInput,
    /// Bounds violate `0 <= l <= r <= len - 1`.
    InvalidRange { l: isize, r: isize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::EmptyInput => write!(f, "provided slice should contain at least one element"),
            Error::InvalidRange { l, r } => write!(f, "invalid range: {} to {}", l, r),
        }
    }
}

impl std::error::Error for Error {}
