//! Overrides for text-like types.
//!
//! Strings, byte buffers and character buffers all have a structural form
//! that a generic printer can handle, but it is the wrong one: a
//! `SmallVec<[u8; 16]>` holding `"ok"` serializes as the sequence `{ 111, 107 }`,
//! a `Vec<char>` as `{ 'o', 'k' }`, and a non-UTF-8 `Path` fails to serialize
//! at all. Every type here is printed through the escaper instead, so the same
//! text prints identically whichever type carries it.
//!
//! ## Type families
//!
//! - **Views**: `str`, `CStr`, `OsStr`, `Path`, and the byte view `[u8]`
//! - **Owning buffers**: `String`, `CString`, `OsString`, `PathBuf`, `Vec<u8>`
//! - **Inline-capacity buffers**: `SmallVec<[u8; N]>` and `[u8; N]` for every `N`
//! - **Character buffers**: `[char]`, `Vec<char>`, `[char; N]`, `SmallVec<[char; N]>`
//!
//! The buffer families are not listed one by one. `u8` and `char` are text
//! units: the generic slice, `Vec`, array and `SmallVec` impls in
//! [`collections`](crate::collections) ask the element type whether a run of
//! it is text, so the capacity-erased slice and every capacity-parameterised
//! buffer reach the escaper through the same slice. Other element types print
//! as sequences.
//!
//! ## Examples
//!
//! ```rust
//! use printto::print_to_string;
//! use smallvec::SmallVec;
//!
//! let inline: SmallVec<[u8; 8]> = SmallVec::from_slice(b"a\"b");
//! let erased: &[u8] = &inline;
//!
//! assert_eq!(print_to_string!(inline), r#""a\"b""#);
//! assert_eq!(print_to_string!(*erased), r#""a\"b""#);
//! assert_eq!(print_to_string!("a\"b"), r#""a\"b""#);
//! ```

use crate::{PrintTo, Printer};
use std::ffi::{CStr, CString, OsStr, OsString};
use std::path::{Path, PathBuf};

impl PrintTo for str {
    fn print_to(&self, printer: &mut Printer) {
        printer.write_text(self);
    }
}

impl PrintTo for String {
    fn print_to(&self, printer: &mut Printer) {
        printer.write_text(self);
    }
}

impl PrintTo for CStr {
    fn print_to(&self, printer: &mut Printer) {
        printer.write_bytes(self.to_bytes());
    }
}

impl PrintTo for CString {
    fn print_to(&self, printer: &mut Printer) {
        self.as_c_str().print_to(printer);
    }
}

impl PrintTo for OsStr {
    fn print_to(&self, printer: &mut Printer) {
        printer.write_bytes(self.as_encoded_bytes());
    }
}

impl PrintTo for OsString {
    fn print_to(&self, printer: &mut Printer) {
        self.as_os_str().print_to(printer);
    }
}

impl PrintTo for Path {
    fn print_to(&self, printer: &mut Printer) {
        self.as_os_str().print_to(printer);
    }
}

impl PrintTo for PathBuf {
    fn print_to(&self, printer: &mut Printer) {
        self.as_os_str().print_to(printer);
    }
}

// Text units: a single one prints as a number or char literal, a run of them
// (any slice, `Vec`, array or `SmallVec`) as one text literal.
impl PrintTo for u8 {
    fn print_to(&self, printer: &mut Printer) {
        printer.write_display(self);
    }

    fn print_text(items: &[Self], printer: &mut Printer) -> bool {
        printer.write_bytes(items);
        true
    }
}

impl PrintTo for char {
    fn print_to(&self, printer: &mut Printer) {
        printer.write_char_literal(*self);
    }

    fn print_text(items: &[Self], printer: &mut Printer) -> bool {
        printer.write_chars(items.iter().copied());
        true
    }
}
