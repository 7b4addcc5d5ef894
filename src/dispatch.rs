//! Rule selection for printing a value.
//!
//! A value is printed by the first rule in this chain that its static type
//! satisfies:
//!
//! 1. **Override**: the type implements [`PrintTo`]. Text views, byte and
//!    character buffers, map entries and a few numeric and date types register
//!    overrides because their structural form is wrong or unreadable.
//!    Primitives and the standard containers, tuples and `Option` implement it
//!    too, whenever their components do, so an override keeps working when the
//!    value is nested inside one of them.
//! 2. **Structural**: the type implements `Serialize`; printed by
//!    [`Printer`] as a serde serializer.
//! 3. **Debug**: the type implements `Debug`.
//! 4. **Opaque**: anything else prints as `<unprintable TYPE>`.
//!
//! Stable Rust has no impl specialisation, so the chain is resolved with
//! autoref-based method probing inside [`print_to_string!`](crate::print_to_string):
//! each rule is a trait implemented for a different number of references to
//! [`Wrap`], and method lookup stops at the first level that has an
//! applicable impl. The choice is made at compile time, per call site, and
//! overlapping overrides are rejected by coherence.
//!
//! Generic code cannot see through the macro's probing (it only knows the
//! bounds it was given), so it should require `T: PrintTo` and call
//! [`to_string`](crate::to_string), or require `T: Serialize` and call
//! [`structural_to_string`](crate::structural_to_string).

use crate::Printer;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A printing rule registered for a specific type.
///
/// Implementing `PrintTo` takes priority over the structural rule, so it is
/// the way to fix output for a type whose `Serialize` shape is misleading.
///
/// # Examples
///
/// ```rust
/// use printto::{print_to_string, PrintTo, Printer};
/// use serde::Serialize;
///
/// // Serializes as a sequence of bytes, but is really text.
/// #[derive(Serialize)]
/// struct Label(Vec<u8>);
///
/// impl PrintTo for Label {
///     fn print_to(&self, printer: &mut Printer) {
///         printer.write_raw("Label ");
///         printer.write_bytes(&self.0);
///     }
/// }
///
/// let label = Label(b"ok".to_vec());
/// assert_eq!(print_to_string!(label), r#"Label "ok""#);
/// ```
pub trait PrintTo {
    /// Writes the diagnostic form of `self` into `printer`.
    fn print_to(&self, printer: &mut Printer);

    /// Prints a contiguous run of `Self` as a single text literal.
    ///
    /// Only text units (`u8`, `char`) do this; for every other element type it
    /// returns `false` and the container prints its elements one by one.
    #[doc(hidden)]
    fn print_text(items: &[Self], printer: &mut Printer) -> bool
    where
        Self: Sized,
    {
        let _ = (items, printer);
        false
    }
}

impl<T> PrintTo for &T
where
    T: ?Sized + PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        (**self).print_to(printer);
    }
}

impl<T> PrintTo for &mut T
where
    T: ?Sized + PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        (**self).print_to(printer);
    }
}

impl<T> PrintTo for Box<T>
where
    T: ?Sized + PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        (**self).print_to(printer);
    }
}

impl<T> PrintTo for Rc<T>
where
    T: ?Sized + PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        (**self).print_to(printer);
    }
}

impl<T> PrintTo for Arc<T>
where
    T: ?Sized + PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        (**self).print_to(printer);
    }
}

impl<B> PrintTo for Cow<'_, B>
where
    B: ?Sized + ToOwned + PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        (**self).print_to(printer);
    }
}

/// Probe target for rule selection. Not part of the public API.
#[doc(hidden)]
pub struct Wrap<'a, T: ?Sized>(pub &'a T);

#[doc(hidden)]
pub struct OverrideTag;

#[doc(hidden)]
pub struct StructuralTag;

#[doc(hidden)]
pub struct DebugTag;

#[doc(hidden)]
pub struct OpaqueTag;

#[doc(hidden)]
pub trait OverrideKind {
    #[inline]
    fn __printto_kind(&self) -> OverrideTag {
        OverrideTag
    }
}

impl<T> OverrideKind for &&&Wrap<'_, T> where T: ?Sized + PrintTo {}

#[doc(hidden)]
pub trait StructuralKind {
    #[inline]
    fn __printto_kind(&self) -> StructuralTag {
        StructuralTag
    }
}

impl<T> StructuralKind for &&Wrap<'_, T> where T: ?Sized + Serialize {}

#[doc(hidden)]
pub trait DebugKind {
    #[inline]
    fn __printto_kind(&self) -> DebugTag {
        DebugTag
    }
}

impl<T> DebugKind for &Wrap<'_, T> where T: ?Sized + fmt::Debug {}

#[doc(hidden)]
pub trait OpaqueKind {
    #[inline]
    fn __printto_kind(&self) -> OpaqueTag {
        OpaqueTag
    }
}

impl<T> OpaqueKind for Wrap<'_, T> where T: ?Sized {}

impl OverrideTag {
    #[inline]
    pub fn print<T>(self, value: &T, printer: &mut Printer)
    where
        T: ?Sized + PrintTo,
    {
        tracing::trace!(type_name = std::any::type_name::<T>(), rule = "override");
        value.print_to(printer);
    }
}

impl StructuralTag {
    #[inline]
    pub fn print<T>(self, value: &T, printer: &mut Printer)
    where
        T: ?Sized + Serialize,
    {
        tracing::trace!(type_name = std::any::type_name::<T>(), rule = "structural");
        printer.print_serialize(value);
    }
}

impl DebugTag {
    #[inline]
    pub fn print<T>(self, value: &T, printer: &mut Printer)
    where
        T: ?Sized + fmt::Debug,
    {
        tracing::trace!(type_name = std::any::type_name::<T>(), rule = "debug");
        printer.print_debug(value);
    }
}

impl OpaqueTag {
    #[inline]
    pub fn print<T>(self, value: &T, printer: &mut Printer)
    where
        T: ?Sized,
    {
        tracing::trace!(type_name = std::any::type_name::<T>(), rule = "opaque");
        printer.print_opaque(value);
    }
}

#[cfg(test)]
mod tests {
    use crate::{print_to_string, PrintOptions, PrintTo, Printer};
    use serde::Serialize;
    use std::borrow::Cow;
    use std::rc::Rc;
    use std::sync::Arc;

    #[derive(Serialize, Debug)]
    struct Both(u8);

    impl PrintTo for Both {
        fn print_to(&self, printer: &mut Printer) {
            printer.write_raw("both");
        }
    }

    #[derive(Serialize, Debug)]
    struct SerializeAndDebug(u8);

    #[derive(Debug)]
    struct DebugOnly {
        #[allow(dead_code)]
        id: u8,
    }

    struct Nothing;

    #[test]
    fn test_override_beats_serialize() {
        assert_eq!(print_to_string!(Both(1)), "both");
    }

    #[test]
    fn test_serialize_beats_debug() {
        assert_eq!(print_to_string!(SerializeAndDebug(1)), "SerializeAndDebug(1)");
    }

    #[test]
    fn test_debug_fallback() {
        assert_eq!(print_to_string!(DebugOnly { id: 3 }), "DebugOnly { id: 3 }");
    }

    #[test]
    fn test_opaque_fallback() {
        let printed = print_to_string!(Nothing);
        assert!(printed.starts_with("<unprintable "));
        assert!(printed.ends_with("Nothing>"));
    }

    #[test]
    fn test_references_keep_their_rule() {
        let both = Both(1);
        assert_eq!(print_to_string!(&both), "both");
        assert_eq!(print_to_string!(&&both), "both");

        let plain = SerializeAndDebug(2);
        assert_eq!(print_to_string!(&plain), "SerializeAndDebug(2)");
    }

    #[test]
    fn test_smart_pointers_forward_overrides() {
        assert_eq!(print_to_string!(Box::new(Both(1))), "both");
        assert_eq!(print_to_string!(Rc::new(Both(1))), "both");
        assert_eq!(print_to_string!(Arc::new(Both(1))), "both");
        let text: Cow<'_, str> = Cow::Borrowed("a\"b");
        assert_eq!(print_to_string!(text), "\"a\\\"b\"");
    }

    #[test]
    fn test_options_are_forwarded() {
        let options = PrintOptions::new().with_max_elements(1);
        assert_eq!(print_to_string!(vec![1, 2], options), "{ 1, ... }");
    }

    #[test]
    fn test_integer_literals_keep_their_default_type() {
        assert_eq!(print_to_string!(vec![1, 2, 3]), "{ 1, 2, 3 }");
        assert_eq!(print_to_string!([1, 2]), "(1, 2)");
        let array = [1, 2];
        assert_eq!(print_to_string!(array[..]), "{ 1, 2 }");
        assert_eq!(print_to_string!(vec![vec![1], vec![]]), "{ { 1 }, {} }");
        assert_eq!(print_to_string!(7), "7");
        assert_eq!(print_to_string!(vec![1.5]), "{ 1.5 }");
    }

    #[test]
    fn test_override_inside_serialize_only_container() {
        // a component without an override sends the whole value to Serde
        let mixed = (Both(1), SerializeAndDebug(2));
        assert_eq!(print_to_string!(mixed), "(Both(1), SerializeAndDebug(2))");
        assert_eq!(print_to_string!((Both(1), 2)), "(both, 2)");
    }

    #[test]
    fn test_unsized_values() {
        let s: &str = "x";
        assert_eq!(print_to_string!(*s), "\"x\"");
        let numbers: &[i32] = &[1, 2];
        assert_eq!(print_to_string!(*numbers), "{ 1, 2 }");
    }
}
