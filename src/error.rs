//! Errors raised by chain and list operations.

use std::fmt;

/// The error type of every fallible operation in this crate.
///
/// Absence is never an error: popping an empty list or asking the head of a
/// chain for what is before it yields `None`. An `Error` is returned only when
/// the caller asked for something that cannot be done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A boundary was crossed: `next` at the tail, or `prev` at the head.
    ///
    /// This is the expected way for a manual walk to end.
    EndOfChain,
    /// An argument has the right type but an unusable value, like a negative
    /// count or an item inserted next to itself.
    InvalidArgument(&'static str),
    /// The item is part of a free chain, not of a list.
    NotInList,
    /// The item or list was frozen and cannot be mutated.
    Frozen,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EndOfChain => write!(f, "reached the end of the chain"),
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            Error::NotInList => write!(f, "item is not in a list"),
            Error::Frozen => write!(f, "cannot modify a frozen item or list"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_display() {
        assert_eq!(Error::EndOfChain.to_string(), "reached the end of the chain");
        assert_eq!(
            Error::InvalidArgument("count must not be negative").to_string(),
            "invalid argument: count must not be negative"
        );
        assert_eq!(Error::NotInList.to_string(), "item is not in a list");
        assert_eq!(
            Error::Frozen.to_string(),
            "cannot modify a frozen item or list"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn boxed(err: Error) -> Box<dyn std::error::Error> {
            Box::new(err)
        }
        assert_eq!(boxed(Error::NotInList).to_string(), "item is not in a list");
    }
}
