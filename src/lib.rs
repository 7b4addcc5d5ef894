//! # printto
//!
//! Type-directed value printing for test diagnostics.
//!
//! When an assertion fails, the framework needs to show the values involved.
//! `printto` answers one question for it: *how should this value read?*
//!
//! ## Why not just Serialize or Debug?
//!
//! A printer that only looks at structure gets common cases wrong:
//!
//! - A `SmallVec<[u8; 16]>` holding `"ok"` is a sequence of bytes to Serde, so
//!   it prints as `{ 111, 107 }` instead of `"ok"`.
//! - A byte buffer that reaches the printer as `&[u8]` (its inline capacity
//!   erased) must print the same as the buffer itself, and the same as the
//!   equivalent `&str`.
//! - A map's occupied entry is a key/value pair, but it is not a tuple, so
//!   nothing structural recognises it as one.
//!
//! `printto` keeps a structural printer for everything else and lets specific
//! types register a [`PrintTo`] override that wins over it.
//!
//! ## Key Features
//!
//! - **Rule chain**: `PrintTo` override, then `Serialize`, then `Debug`, then an
//!   opaque placeholder, selected at compile time per call site
//! - **Consistent text**: every string-like value goes through one escaper, so
//!   the same text prints byte-identically whatever type carries it
//! - **Total**: printing never fails; values that cannot be printed produce a
//!   placeholder instead of an error
//! - **Readable containers**: `{ 1, 2, 3 }`, `(1, "x")`, `{ ("k", 1) }`, with long
//!   containers elided after a configurable number of elements
//! - **Nested overrides**: standard containers, tuples and `Option` print their
//!   components with the components' own overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use printto::print_to_string;
//! use serde::Serialize;
//! use smallvec::SmallVec;
//! use std::collections::BTreeMap;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! // Structural rule
//! assert_eq!(print_to_string!(Point { x: 1, y: 2 }), "Point { x: 1, y: 2 }");
//! assert_eq!(print_to_string!(vec![1, 2, 3]), "{ 1, 2, 3 }");
//!
//! // Text overrides: same output through every type
//! let inline: SmallVec<[u8; 4]> = SmallVec::from_slice(b"a\"b");
//! let erased: &[u8] = &inline;
//! assert_eq!(print_to_string!(inline), r#""a\"b""#);
//! assert_eq!(print_to_string!(erased), r#""a\"b""#);
//! assert_eq!(print_to_string!(String::from("a\"b")), r#""a\"b""#);
//!
//! // Map entries print as pairs
//! let mut map = BTreeMap::new();
//! map.insert(1, "x");
//! let entry = map.first_entry().unwrap();
//! assert_eq!(print_to_string!(entry), print_to_string!((1, "x")));
//!
//! // ...also when the text is nested
//! assert_eq!(print_to_string!(vec![(inline.clone(), 1)]), r#"{ ("a\"b", 1) }"#);
//! ```
//!
//! ## Generic code
//!
//! The macros pick a rule from the concrete type at the call site. Inside a
//! generic function only the declared bounds are known, so use the functions:
//! [`to_string`] for `T: PrintTo` and [`structural_to_string`] for
//! `T: Serialize`.
//!
//! ## Logging
//!
//! Rule selection and recovered `Serialize` failures are reported through
//! [`tracing`] at `trace` and `debug` level. No subscriber is installed.

pub mod collections;
pub mod dispatch;
pub mod entry;
pub mod error;
pub mod escape;
pub mod macros;
pub mod options;
pub mod scalar;
pub mod ser;
pub mod text;

pub use dispatch::PrintTo;
pub use error::{Error, Result};
pub use options::{PrintOptions, DEFAULT_MAX_ELEMENTS};
pub use ser::Printer;

use serde::Serialize;
use std::io;

#[doc(hidden)]
pub mod __private {
    pub use crate::dispatch::{DebugKind, OpaqueKind, OverrideKind, StructuralKind, Wrap};
}

/// Prints a value that has a [`PrintTo`] override.
///
/// # Examples
///
/// ```rust
/// use printto::to_string;
///
/// fn describe<T: printto::PrintTo + ?Sized>(actual: &T) -> String {
///     format!("actual: {}", to_string(actual))
/// }
///
/// assert_eq!(describe("tab\t"), r#"actual: "tab\t""#);
/// ```
#[must_use]
pub fn to_string<T>(value: &T) -> String
where
    T: ?Sized + PrintTo,
{
    to_string_with_options(value, PrintOptions::default())
}

/// Prints a value that has a [`PrintTo`] override, with custom options.
#[must_use]
pub fn to_string_with_options<T>(value: &T, options: PrintOptions) -> String
where
    T: ?Sized + PrintTo,
{
    let mut printer = Printer::new(options);
    value.print_to(&mut printer);
    printer.into_inner()
}

/// Prints any `T: Serialize` with the structural rule only.
///
/// No override is consulted, even if `T` has one. This is what generic code
/// bounded on `Serialize` should use.
///
/// # Examples
///
/// ```rust
/// use printto::structural_to_string;
///
/// assert_eq!(structural_to_string(&vec![(1, 'a')]), "{ (1, 'a') }");
/// // bytes are only numbers to the structural rule
/// assert_eq!(structural_to_string(&b"hi".to_vec()), "{ 104, 105 }");
/// ```
#[must_use]
pub fn structural_to_string<T>(value: &T) -> String
where
    T: ?Sized + Serialize,
{
    structural_to_string_with_options(value, PrintOptions::default())
}

/// Prints any `T: Serialize` with the structural rule and custom options.
#[must_use]
pub fn structural_to_string_with_options<T>(value: &T, options: PrintOptions) -> String
where
    T: ?Sized + Serialize,
{
    let mut printer = Printer::new(options);
    printer.print_serialize(value);
    printer.into_inner()
}

/// Prints a value with a [`PrintTo`] override to an I/O stream.
///
/// # Examples
///
/// ```rust
/// use printto::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, "line\n").unwrap();
/// assert_eq!(buffer, br#""line\n""#);
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + PrintTo,
{
    to_writer_with_options(writer, value, PrintOptions::default())
}

/// Prints a value with a [`PrintTo`] override to an I/O stream with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: PrintOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + PrintTo,
{
    let printed = to_string_with_options(value, options);
    writer
        .write_all(printed.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
