//! Overrides for containers, tuples and `Option`, composed from their parts.
//!
//! Each impl here applies only when every component has a [`PrintTo`] impl of
//! its own, and prints in exactly the shape the structural rule uses for the
//! same value. The difference is that components keep their overrides: a
//! `SmallVec<[u8; 8]>` key inside a map prints as `"ab"`, the same as on its
//! own, where Serde would only see `{ 97, 98 }`.
//!
//! When some component has no override (a user struct that only derives
//! `Serialize`, say) the whole value falls through to the structural rule.
//!
//! Slices, `Vec`, arrays and `SmallVec` ask their element type whether a run
//! of it reads as text; that is how `Vec<u8>` prints as a quoted literal while
//! `Vec<u32>` prints as `{ 1, 2 }`.
//!
//! ```rust
//! use printto::print_to_string;
//! use smallvec::SmallVec;
//! use std::collections::BTreeMap;
//!
//! let key: SmallVec<[u8; 8]> = SmallVec::from_slice(b"ab");
//! let mut map = BTreeMap::new();
//! map.insert(key.clone(), vec![1, 2]);
//!
//! assert_eq!(print_to_string!(key), r#""ab""#);
//! assert_eq!(print_to_string!(map), r#"{ ("ab", { 1, 2 }) }"#);
//! ```

use crate::{PrintTo, Printer};
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

impl<T> PrintTo for [T]
where
    T: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        if !T::print_text(self, printer) {
            printer.print_seq(self);
        }
    }
}

impl<T> PrintTo for Vec<T>
where
    T: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        self.as_slice().print_to(printer);
    }
}

impl<T, const N: usize> PrintTo for SmallVec<[T; N]>
where
    T: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        self.as_slice().print_to(printer);
    }
}

// Serde hands arrays over as tuples, so they print as `(1, 2)`.
impl<T, const N: usize> PrintTo for [T; N]
where
    T: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        if !T::print_text(self, printer) {
            printer.print_tuple(self);
        }
    }
}

impl<T> PrintTo for Option<T>
where
    T: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        match self {
            Some(value) => {
                printer.write_raw("Some(");
                value.print_to(printer);
                printer.write_raw(")");
            }
            None => printer.write_raw("None"),
        }
    }
}

impl PrintTo for () {
    fn print_to(&self, printer: &mut Printer) {
        printer.write_raw("()");
    }
}

macro_rules! tuple_impls {
    ($(($($name:ident $index:tt),+))+) => {
        $(
            impl<$($name),+> PrintTo for ($($name,)+)
            where
                $($name: PrintTo,)+
            {
                fn print_to(&self, printer: &mut Printer) {
                    printer.print_tuple([$(&self.$index as &dyn PrintTo),+]);
                }
            }
        )+
    };
}

tuple_impls! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11)
}

// Maps print their entries as pairs, in iteration order.
impl<K, V, S> PrintTo for HashMap<K, V, S>
where
    K: PrintTo,
    V: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        printer.print_seq(self.iter());
    }
}

impl<K, V> PrintTo for BTreeMap<K, V>
where
    K: PrintTo,
    V: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        printer.print_seq(self.iter());
    }
}

impl<K, V, S> PrintTo for IndexMap<K, V, S>
where
    K: PrintTo,
    V: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        printer.print_seq(self.iter());
    }
}

impl<T, S> PrintTo for HashSet<T, S>
where
    T: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        printer.print_seq(self.iter());
    }
}

impl<T> PrintTo for BTreeSet<T>
where
    T: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        printer.print_seq(self.iter());
    }
}

impl<T, S> PrintTo for IndexSet<T, S>
where
    T: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        printer.print_seq(self.iter());
    }
}

#[cfg(test)]
mod tests {
    use crate::{print_to_string, structural_to_string, PrintOptions};
    use indexmap::{IndexMap, IndexSet};
    use smallvec::SmallVec;
    use std::collections::{BTreeMap, BTreeSet};

    #[test]
    fn test_shapes_match_structural_rule() {
        let pairs = vec![(1, "one"), (2, "two")];
        assert_eq!(print_to_string!(pairs), structural_to_string(&pairs));

        let nested = (Some(vec![1u32, 2]), None::<i32>, ());
        assert_eq!(print_to_string!(nested), structural_to_string(&nested));
        assert_eq!(print_to_string!(nested), "(Some({ 1, 2 }), None, ())");

        let array = [[1u16, 2], [3, 4]];
        assert_eq!(print_to_string!(array), structural_to_string(&array));

        let map: BTreeMap<&str, Vec<i64>> = [("a", vec![-1]), ("b", vec![])].into();
        assert_eq!(print_to_string!(map), structural_to_string(&map));
        assert_eq!(print_to_string!(map), r#"{ ("a", { -1 }), ("b", {}) }"#);

        let set: BTreeSet<char> = ['x', 'y'].into();
        assert_eq!(print_to_string!(set), "{ 'x', 'y' }");
    }

    #[test]
    fn test_text_components_keep_their_override() {
        let key: SmallVec<[u8; 8]> = SmallVec::from_slice(b"ab");
        let mut map = IndexMap::new();
        map.insert(key.clone(), 1);

        assert_eq!(print_to_string!(key), "\"ab\"");
        assert_eq!(print_to_string!(map), "{ (\"ab\", 1) }");
        assert_eq!(print_to_string!(map), print_to_string!(vec![("ab", 1)]));
        assert_eq!(structural_to_string(&map), "{ ({ 97, 98 }, 1) }");
    }

    #[test]
    fn test_element_limit_applies_to_composed_containers() {
        let options = PrintOptions::new().with_max_elements(1);
        let set: IndexSet<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(print_to_string!(set, options.clone()), "{ \"a\", ... }");

        let map: BTreeMap<u8, u8> = [(1, 1), (2, 4)].into();
        assert_eq!(print_to_string!(map, options.clone()), "{ (1, 1), ... }");

        // tuples and arrays are never cut short
        assert_eq!(print_to_string!((1, 2, 3), options.clone()), "(1, 2, 3)");
        assert_eq!(print_to_string!([1, 2, 3], options), "(1, 2, 3)");
    }

    #[test]
    fn test_long_tuples() {
        let tuple = (1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, "twelve");
        assert_eq!(
            print_to_string!(tuple),
            "(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, \"twelve\")"
        );
    }
}
