//! Structural printing through Serde.
//!
//! This module provides [`Printer`], the sink every printing routine writes
//! into, and its [`serde::Serializer`] implementation. The serializer is the
//! generic rule of the dispatch chain: it knows nothing about concrete types
//! and renders whatever shape a `Serialize` impl reports.
//!
//! ## Output shapes
//!
//! - **Scalars**: `true`, `42`, `1.5`, `'c'`, `"text"` (escaped)
//! - **Options**: `None`, `Some(1)`
//! - **Sequences**: `{ 1, 2, 3 }`, empty `{}`
//! - **Tuples**: `(1, "x")`, empty `()`
//! - **Maps**: `{ ("a", 1), ("b", 2) }`, each entry printed exactly like a pair
//! - **Structs**: `Point { x: 1, y: 2 }`, `Wrapper(7)`, `Marker`
//! - **Enums**: `Unit`, `Newtype(1)`, `Tuple(1, 2)`, `Struct { a: 1 }`
//!
//! Sequences and maps longer than
//! [`PrintOptions::max_elements`](crate::PrintOptions) are cut short with `...`.
//!
//! ## Direct Printer Usage
//!
//! ```rust
//! use printto::{Printer, PrintOptions};
//!
//! let mut printer = Printer::new(PrintOptions::new());
//! printer.print_serialize(&vec![(1, "one"), (2, "two")]);
//! assert_eq!(printer.into_inner(), r#"{ (1, "one"), (2, "two") }"#);
//! ```
//!
//! Because the serializer only sees structure, a `SmallVec<[u8; 8]>` holding
//! `"ab"` prints as `{ 97, 98 }` here. Text-aware printing of such types is
//! the job of the [`PrintTo`](crate::PrintTo) overrides, which reuse the same
//! delimiters through [`Printer::print_seq`] and [`Printer::print_tuple`].

use crate::escape;
use crate::{Error, PrintOptions, PrintTo, Result};
use serde::{ser, Serialize};
use std::fmt::{self, Write as _};

/// The printing sink and structural serializer.
///
/// Created via [`Printer::new`]; the accumulated text is taken out with
/// [`Printer::into_inner`]. Overrides write text through
/// [`write_text`](Printer::write_text) and friends, and fall back to the
/// structural rule through [`print_serialize`](Printer::print_serialize).
pub struct Printer {
    output: String,
    options: PrintOptions,
}

impl Printer {
    pub fn new(options: PrintOptions) -> Self {
        Printer {
            output: String::with_capacity(64),
            options,
        }
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `s` verbatim, without quoting or escaping.
    pub fn write_raw(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Appends `s` as a quoted, escaped string literal.
    pub fn write_text(&mut self, s: &str) {
        escape::write_quoted_str(&mut self.output, s);
    }

    /// Appends arbitrary bytes as a quoted, escaped string literal.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        escape::write_quoted_bytes(&mut self.output, bytes);
    }

    /// Appends a character sequence as a quoted, escaped string literal.
    pub fn write_chars<I>(&mut self, chars: I)
    where
        I: IntoIterator<Item = char>,
    {
        escape::write_quoted_chars(&mut self.output, chars);
    }

    /// Appends `c` as a quoted, escaped character literal.
    pub fn write_char_literal(&mut self, c: char) {
        escape::write_quoted_char(&mut self.output, c);
    }

    /// Prints `items` as a sequence, `{ a, b }`, eliding elements past
    /// [`PrintOptions::max_elements`].
    ///
    /// ```rust
    /// use printto::{Printer, PrintOptions};
    ///
    /// let mut printer = Printer::new(PrintOptions::new().with_max_elements(2));
    /// printer.print_seq(["a", "b", "c"]);
    /// assert_eq!(printer.into_inner(), r#"{ "a", "b", ... }"#);
    /// ```
    pub fn print_seq<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: PrintTo,
    {
        let limit = self.options.max_elements;
        self.print_elements(SEQ, limit, items);
    }

    /// Prints `items` as a tuple, `(a, b)`. Tuples are never elided.
    pub fn print_tuple<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: PrintTo,
    {
        self.print_elements(TUPLE, None, items);
    }

    /// Prints `value` through its `Serialize` impl.
    ///
    /// Never fails: if the impl reports an error, whatever it wrote so far is
    /// discarded and `<unprintable: message>` is printed in its place.
    pub fn print_serialize<T>(&mut self, value: &T)
    where
        T: ?Sized + Serialize,
    {
        let mark = self.output.len();
        if let Err(err) = self.try_serialize(value) {
            tracing::debug!(
                type_name = std::any::type_name::<T>(),
                error = %err,
                "Serialize impl failed, printing placeholder"
            );
            self.output.truncate(mark);
            self.output.push_str("<unprintable: ");
            self.output.push_str(&err.to_string());
            self.output.push('>');
        }
    }

    /// Prints `value` through its `Serialize` impl, reporting its errors.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the `Serialize` impl. Output written before
    /// the failure is left in place.
    pub fn try_serialize<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self)
    }

    /// Prints `value` with its `Debug` impl.
    pub fn print_debug<T>(&mut self, value: &T)
    where
        T: ?Sized + fmt::Debug,
    {
        let mark = self.output.len();
        if write!(self.output, "{:?}", value).is_err() {
            self.output.truncate(mark);
            self.output.push_str("<unprintable: Debug impl failed>");
        }
    }

    /// Prints a placeholder naming the type of a value with no printable form.
    pub fn print_opaque<T>(&mut self, _value: &T)
    where
        T: ?Sized,
    {
        self.output.push_str("<unprintable ");
        self.output.push_str(std::any::type_name::<T>());
        self.output.push('>');
    }

    fn write_type_name(&mut self, name: &'static str) {
        if self.options.type_names {
            self.output.push_str(name);
        }
    }

    fn write_variant(&mut self, name: &'static str, variant: &'static str) {
        if self.options.qualify_variants {
            self.output.push_str(name);
            self.output.push_str("::");
        }
        self.output.push_str(variant);
    }

    /// Appends the `Display` form of `value`, unquoted.
    pub fn write_display<T>(&mut self, value: T)
    where
        T: fmt::Display,
    {
        let mark = self.output.len();
        if write!(self.output, "{}", value).is_err() {
            self.output.truncate(mark);
            self.output.push_str("<unprintable: Display impl failed>");
        }
    }

    fn print_elements<I>(&mut self, shape: Shape, limit: Option<usize>, items: I)
    where
        I: IntoIterator,
        I::Item: PrintTo,
    {
        let mut compound = self.compound(shape, limit);
        for item in items {
            if !compound.begin_element() {
                break;
            }
            item.print_to(&mut *compound.ser);
        }
        compound.close();
    }

    fn compound(&mut self, shape: Shape, limit: Option<usize>) -> Compound<'_> {
        Compound {
            ser: self,
            shape,
            limit,
            seen: 0,
            opened: false,
            skip_value: false,
        }
    }
}

impl fmt::Write for Printer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.push_str(s);
        Ok(())
    }
}

/// Delimiters of a compound value.
#[derive(Clone, Copy)]
struct Shape {
    open: &'static str,
    close: &'static str,
    empty: &'static str,
}

const SEQ: Shape = Shape {
    open: "{ ",
    close: " }",
    empty: "{}",
};

const TUPLE: Shape = Shape {
    open: "(",
    close: ")",
    empty: "()",
};

const STRUCT: Shape = Shape {
    open: " { ",
    close: " }",
    empty: " {}",
};

// Used when type names are suppressed, so there is nothing to pad against.
const ANONYMOUS_STRUCT: Shape = Shape {
    open: "{ ",
    close: " }",
    empty: "{}",
};

impl<'a> ser::Serializer for &'a mut Printer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Compound<'a>;
    type SerializeTuple = Compound<'a>;
    type SerializeTupleStruct = Compound<'a>;
    type SerializeTupleVariant = Compound<'a>;
    type SerializeMap = Compound<'a>;
    type SerializeStruct = Compound<'a>;
    type SerializeStructVariant = Compound<'a>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.output.push_str(if v { "true" } else { "false" });
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.write_display(v);
        Ok(())
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.write_display(v);
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.write_display(v);
        Ok(())
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.write_display(v);
        Ok(())
    }

    // f32 keeps its own Debug form so 0.1f32 does not print as 0.10000000149
    fn serialize_f32(self, v: f32) -> Result<()> {
        self.print_debug(&v);
        Ok(())
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.print_debug(&v);
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.write_char_literal(v);
        Ok(())
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.write_text(v);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.write_bytes(v);
        Ok(())
    }

    fn serialize_none(self) -> Result<()> {
        self.output.push_str("None");
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.output.push_str("Some(");
        value.serialize(&mut *self)?;
        self.output.push(')');
        Ok(())
    }

    fn serialize_unit(self) -> Result<()> {
        self.output.push_str("()");
        Ok(())
    }

    // The name is all a unit struct has, so it is printed even without
    // `type_names`.
    fn serialize_unit_struct(self, name: &'static str) -> Result<()> {
        self.output.push_str(name);
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.write_variant(name, variant);
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if !self.options.type_names {
            return value.serialize(self);
        }
        self.output.push_str(name);
        self.output.push('(');
        value.serialize(&mut *self)?;
        self.output.push(')');
        Ok(())
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.write_variant(name, variant);
        self.output.push('(');
        value.serialize(&mut *self)?;
        self.output.push(')');
        Ok(())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Compound<'a>> {
        let limit = self.options.max_elements;
        Ok(self.compound(SEQ, limit))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Compound<'a>> {
        Ok(self.compound(TUPLE, None))
    }

    fn serialize_tuple_struct(self, name: &'static str, _len: usize) -> Result<Compound<'a>> {
        self.write_type_name(name);
        Ok(self.compound(TUPLE, None))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Compound<'a>> {
        self.write_variant(name, variant);
        Ok(self.compound(TUPLE, None))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Compound<'a>> {
        let limit = self.options.max_elements;
        Ok(self.compound(SEQ, limit))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Compound<'a>> {
        let shape = if self.options.type_names {
            self.output.push_str(name);
            STRUCT
        } else {
            ANONYMOUS_STRUCT
        };
        Ok(self.compound(shape, None))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Compound<'a>> {
        self.write_variant(name, variant);
        Ok(self.compound(STRUCT, None))
    }
}

/// Serializer state for every compound shape: sequences, tuples, maps,
/// structs and their variant forms.
pub struct Compound<'a> {
    ser: &'a mut Printer,
    shape: Shape,
    limit: Option<usize>,
    seen: usize,
    opened: bool,
    skip_value: bool,
}

impl Compound<'_> {
    /// Writes the opening delimiter or separator for the next element.
    ///
    /// Returns `false` once the element limit has been reached; the first
    /// elided element writes `...` and the rest are dropped silently.
    fn begin_element(&mut self) -> bool {
        let index = self.seen;
        self.seen += 1;

        if let Some(limit) = self.limit {
            if index > limit {
                return false;
            }
            if index == limit {
                tracing::trace!(limit, "eliding remaining elements");
                self.separator();
                self.ser.output.push_str("...");
                return false;
            }
        }

        self.separator();
        true
    }

    fn separator(&mut self) {
        if self.opened {
            self.ser.output.push_str(", ");
        } else {
            self.ser.output.push_str(self.shape.open);
            self.opened = true;
        }
    }

    fn element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if self.begin_element() {
            value.serialize(&mut *self.ser)?;
        }
        Ok(())
    }

    fn field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if self.begin_element() {
            self.ser.output.push_str(key);
            self.ser.output.push_str(": ");
            value.serialize(&mut *self.ser)?;
        }
        Ok(())
    }

    fn close(self) {
        let closing = if self.opened {
            self.shape.close
        } else {
            self.shape.empty
        };
        self.ser.output.push_str(closing);
    }

    fn finish(self) -> Result<()> {
        self.close();
        Ok(())
    }
}

impl ser::SerializeSeq for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTuple for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

// Entries print as `(key, value)`, the same text a 2-tuple produces.
impl ser::SerializeMap for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.skip_value = !self.begin_element();
        if !self.skip_value {
            self.ser.output.push_str(TUPLE.open);
            key.serialize(&mut *self.ser)?;
            self.ser.output.push_str(", ");
        }
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if !self.skip_value {
            value.serialize(&mut *self.ser)?;
            self.ser.output.push_str(TUPLE.close);
        }
        Ok(())
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeStruct for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}
