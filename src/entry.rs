//! Overrides for map entries.
//!
//! An occupied entry is a key/value association, but none of the entry types
//! are tuples and none implement `Serialize`, so without an override they
//! would fall through to `Debug` and print in each map's own ad-hoc layout.
//! Each entry is destructured into `(key, value)` and printed as that pair,
//! which makes it byte-identical to the pair printed on its own and to the
//! same entry printed inside its map.
//!
//! Key and value print with their own overrides, so the impls need both to
//! implement [`PrintTo`]. A type that only derives `Serialize` can opt in by
//! forwarding to [`Printer::print_serialize`].
//!
//! ## Examples
//!
//! ```rust
//! use printto::print_to_string;
//! use std::collections::btree_map::{BTreeMap, Entry};
//!
//! let mut map = BTreeMap::new();
//! map.insert(1, "x");
//!
//! if let Entry::Occupied(entry) = map.entry(1) {
//!     assert_eq!(print_to_string!(entry), r#"(1, "x")"#);
//!     assert_eq!(print_to_string!(entry), print_to_string!((1, "x")));
//! }
//! ```

use crate::{PrintTo, Printer};
use std::collections::{btree_map, hash_map};

fn print_pair<K, V>(printer: &mut Printer, key: &K, value: &V)
where
    K: PrintTo,
    V: PrintTo,
{
    (key, value).print_to(printer);
}

impl<K, V> PrintTo for hash_map::OccupiedEntry<'_, K, V>
where
    K: PrintTo,
    V: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        print_pair(printer, self.key(), self.get());
    }
}

impl<K, V> PrintTo for btree_map::OccupiedEntry<'_, K, V>
where
    K: Ord + PrintTo,
    V: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        print_pair(printer, self.key(), self.get());
    }
}

impl<K, V> PrintTo for indexmap::map::OccupiedEntry<'_, K, V>
where
    K: PrintTo,
    V: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        print_pair(printer, self.key(), self.get());
    }
}

impl<K, V> PrintTo for indexmap::map::IndexedEntry<'_, K, V>
where
    K: PrintTo,
    V: PrintTo,
{
    fn print_to(&self, printer: &mut Printer) {
        print_pair(printer, self.key(), self.get());
    }
}
