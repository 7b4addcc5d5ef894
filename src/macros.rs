/// Prints any value to a diagnostic `String`, choosing the most specific rule.
///
/// Rules are tried in order: a [`PrintTo`](crate::PrintTo) override, the
/// structural `Serialize` rule, `Debug`, and finally an opaque placeholder.
/// An optional second argument supplies [`PrintOptions`](crate::PrintOptions).
///
/// The value is borrowed, never moved. Unsized places such as `*slice` are
/// accepted.
///
/// # Examples
///
/// ```rust
/// use printto::{print_to_string, PrintOptions};
/// use smallvec::SmallVec;
///
/// let name: SmallVec<[u8; 16]> = SmallVec::from_slice(b"ferris");
/// assert_eq!(print_to_string!(name), r#""ferris""#);
///
/// assert_eq!(print_to_string!(vec![1, 2, 3]), "{ 1, 2, 3 }");
/// assert_eq!(print_to_string!(Some("x")), r#"Some("x")"#);
///
/// let options = PrintOptions::new().with_max_elements(2);
/// assert_eq!(print_to_string!(vec![1, 2, 3], options), "{ 1, 2, ... }");
/// ```
#[macro_export]
macro_rules! print_to_string {
    ($value:expr $(,)?) => {
        $crate::print_to_string!($value, $crate::PrintOptions::default())
    };

    ($value:expr, $options:expr $(,)?) => {{
        let mut printer = $crate::Printer::new($options);
        $crate::__print_dispatch!(printer, $value);
        printer.into_inner()
    }};
}

/// Prints any value into a [`core::fmt::Write`] sink.
///
/// Same rule selection as [`print_to_string!`]; evaluates to the sink's
/// `fmt::Result`.
///
/// # Examples
///
/// ```rust
/// use printto::print_to;
///
/// let mut message = String::from("expected ");
/// print_to!(&mut message, "a\"b").unwrap();
/// assert_eq!(message, r#"expected "a\"b""#);
/// ```
#[macro_export]
macro_rules! print_to {
    ($sink:expr, $value:expr $(,)?) => {
        $crate::print_to!($sink, $value, $crate::PrintOptions::default())
    };

    ($sink:expr, $value:expr, $options:expr $(,)?) => {{
        let printed = $crate::print_to_string!($value, $options);
        ::core::fmt::Write::write_str($sink, &printed)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __print_dispatch {
    ($printer:ident, $value:expr) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DebugKind as _, OpaqueKind as _, OverrideKind as _, StructuralKind as _};
        let value = &$value;
        (&&&&$crate::__private::Wrap(value))
            .__printto_kind()
            .print(value, &mut $printer);
    }};
}
