//! Overrides for scalar types.
//!
//! Primitive numbers and `bool` print exactly as the structural rule prints
//! them; they implement [`PrintTo`] so that containers of them can too. `u8`
//! and `char` live in [`text`](crate::text) with the other text types.
//!
//! The rest have a Serde form that is not how people read them:
//!
//! - `BigInt`/`BigUint` serialize as vectors of 32-bit digits, so `2^40`
//!   would print as `(1, { 0, 256 })`. They print in decimal instead.
//! - `chrono` timestamps serialize as strings and would print quoted, which
//!   makes them indistinguishable from text. They print unquoted in ISO 8601
//!   form (`DateTime` as RFC 3339).
//!
//! ```rust
//! use num_bigint::BigUint;
//! use printto::print_to_string;
//!
//! let big = BigUint::from(1u64 << 40);
//! assert_eq!(print_to_string!(big), "1099511627776");
//! ```

use crate::{PrintTo, Printer};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use num_bigint::{BigInt, BigUint};
use std::fmt;

macro_rules! display_impls {
    ($($ty:ident)*) => {
        $(
            impl PrintTo for $ty {
                fn print_to(&self, printer: &mut Printer) {
                    printer.write_display(self);
                }
            }
        )*
    };
}

display_impls! { bool i8 i16 i32 i64 i128 isize u16 u32 u64 u128 usize }

// Debug keeps `1.0` and `NaN` the way the structural rule prints floats.
impl PrintTo for f32 {
    fn print_to(&self, printer: &mut Printer) {
        printer.print_debug(self);
    }
}

impl PrintTo for f64 {
    fn print_to(&self, printer: &mut Printer) {
        printer.print_debug(self);
    }
}

impl PrintTo for BigInt {
    fn print_to(&self, printer: &mut Printer) {
        printer.write_display(self);
    }
}

impl PrintTo for BigUint {
    fn print_to(&self, printer: &mut Printer) {
        printer.write_display(self);
    }
}

impl<Tz> PrintTo for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn print_to(&self, printer: &mut Printer) {
        printer.write_raw(&self.to_rfc3339());
    }
}

impl PrintTo for NaiveDate {
    fn print_to(&self, printer: &mut Printer) {
        printer.write_display(self);
    }
}

impl PrintTo for NaiveTime {
    fn print_to(&self, printer: &mut Printer) {
        printer.write_display(self);
    }
}

// Display separates date and time with a space; Debug is the ISO 8601 form.
impl PrintTo for NaiveDateTime {
    fn print_to(&self, printer: &mut Printer) {
        printer.print_debug(self);
    }
}
