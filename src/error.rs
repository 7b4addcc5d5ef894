//! Error types for value printing.
//!
//! Printing itself is total: every value produces some diagnostic string. The
//! [`Error`] type only surfaces in two places:
//!
//! - **Serialize failures**: a user `Serialize` impl returned an error. The
//!   infallible entry points render these as `<unprintable: ...>`;
//!   [`Printer::try_serialize`](crate::Printer::try_serialize) hands them back.
//! - **I/O failures**: the `io::Write` sink given to
//!   [`to_writer`](crate::to_writer) failed.
//!
//! ## Examples
//!
//! ```rust
//! use printto::Error;
//!
//! let err = Error::custom("field is not printable");
//! assert_eq!(err.to_string(), "field is not printable");
//! ```

use std::fmt;
use thiserror::Error;

/// Represents the failures that can be observed while printing a value.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing printed output
    #[error("IO error: {0}")]
    Io(String),

    /// Error raised by a `Serialize` implementation
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use printto::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
