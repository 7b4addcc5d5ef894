use printto::{
    print_to, print_to_string, structural_to_string, to_string, PrintOptions, PrintTo, Printer,
};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::json;
use std::collections::BTreeMap;

#[derive(Serialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    note: Option<String>,
}

#[derive(Serialize, Debug)]
enum Event {
    Started,
    Progress(u8),
    Moved { from: (i32, i32), to: (i32, i32) },
}

/// Mimics how an assertion macro would build its failure message.
fn failure_message(actual: &str, expected: &str) -> String {
    format!("  Actual: {}\nExpected: {}", actual, expected)
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    assert_eq!(
        print_to_string!(user),
        r#"User { id: 123, name: "Alice", active: true, tags: { "admin", "developer" } }"#
    );
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 1,
            name: "Bob \"the builder\"".to_string(),
            active: false,
            tags: vec![],
        },
        items: vec![Product {
            sku: "WIDGET-001".to_string(),
            price: 29.99,
            quantity: 2,
        }],
        note: None,
    };

    let printed = print_to_string!(order);
    assert!(printed.starts_with("Order { order_id: 12345, customer: User { id: 1, "));
    assert!(printed.contains(r#"name: "Bob \"the builder\"""#));
    assert!(printed.contains("tags: {} }"));
    assert!(printed.contains(r#"items: { Product { sku: "WIDGET-001", price: 29.99, quantity: 2 } }"#));
    assert!(printed.ends_with("note: None }"));
}

#[test]
fn test_enum_variants() {
    assert_eq!(print_to_string!(Event::Started), "Started");
    assert_eq!(print_to_string!(Event::Progress(50)), "Progress(50)");
    assert_eq!(
        print_to_string!(Event::Moved { from: (0, 0), to: (1, -1) }),
        "Moved { from: (0, 0), to: (1, -1) }"
    );
    assert_eq!(
        print_to_string!(Event::Started, PrintOptions::new().with_qualified_variants(true)),
        "Event::Started"
    );
}

#[test]
fn test_json_values_print_structurally() {
    let value = json!({
        "name": "Alice",
        "scores": [1, 2.5, null],
        "nested": {"ok": true}
    });

    // serde_json keeps object keys sorted by default
    assert_eq!(
        print_to_string!(value),
        r#"{ ("name", "Alice"), ("nested", { ("ok", true) }), ("scores", { 1, 2.5, () }) }"#
    );
}

#[test]
fn test_failure_message_keeps_text_types_consistent() {
    let actual = smallvec::SmallVec::<[u8; 8]>::from_slice(b"hello\n");
    let expected = "hello";

    let message = failure_message(&print_to_string!(actual), &print_to_string!(expected));
    assert_eq!(message, "  Actual: \"hello\\n\"\nExpected: \"hello\"");
}

#[test]
fn test_map_output_matches_its_entries() {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), 1);
    map.insert("b".to_string(), 2);

    let entries: Vec<String> = {
        let mut out = Vec::new();
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        for key in keys {
            if let std::collections::btree_map::Entry::Occupied(entry) = map.entry(key) {
                out.push(print_to_string!(entry));
            }
        }
        out
    };

    assert_eq!(print_to_string!(map), format!("{{ {} }}", entries.join(", ")));
}

#[test]
fn test_failure_message_for_nested_text() {
    let actual: Vec<(smallvec::SmallVec<[u8; 8]>, u32)> =
        vec![(smallvec::SmallVec::from_slice(b"id"), 7)];
    let expected = vec![("id".to_string(), 8u32)];

    let message = failure_message(&print_to_string!(actual), &print_to_string!(expected));
    assert_eq!(message, "  Actual: { (\"id\", 7) }\nExpected: { (\"id\", 8) }");
}

#[test]
fn test_long_containers_are_elided() {
    let numbers: Vec<u32> = (0..40).collect();
    let printed = print_to_string!(numbers);
    assert!(printed.starts_with("{ 0, 1, 2, "));
    assert!(printed.ends_with(", 31, ... }"));
    assert!(!printed.contains("32"));

    let full = print_to_string!(numbers, PrintOptions::unlimited());
    assert!(full.ends_with(", 38, 39 }"));
}

#[test]
fn test_nested_limits_apply_per_container() {
    let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    let options = PrintOptions::new().with_max_elements(2);
    assert_eq!(
        print_to_string!(grid, options),
        "{ { 1, 2, ... }, { 4, 5, ... }, ... }"
    );
}

struct Poisoned;

impl Serialize for Poisoned {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(S::Error::custom("mutex poisoned"))
    }
}

#[test]
fn test_printing_is_total() {
    assert_eq!(print_to_string!(Poisoned), "<unprintable: mutex poisoned>");
    assert_eq!(
        print_to_string!(vec![Poisoned]),
        "<unprintable: mutex poisoned>"
    );
}

#[test]
fn test_debug_only_types() {
    #[derive(Debug)]
    struct Handle {
        fd: i32,
    }

    assert_eq!(print_to_string!(Handle { fd: 3 }), "Handle { fd: 3 }");

    // ThreadId has no Serialize impl
    let id = std::thread::current().id();
    assert_eq!(print_to_string!(id), format!("{:?}", id));
    assert!(print_to_string!(id).starts_with("ThreadId("));

    // Duration does, so it takes the structural rule
    assert_eq!(
        print_to_string!(std::time::Duration::from_secs(2)),
        "Duration { secs: 2, nanos: 0 }"
    );
}

#[test]
fn test_custom_override_in_downstream_crate() {
    #[derive(Serialize)]
    struct Token(Vec<u8>);

    impl PrintTo for Token {
        fn print_to(&self, printer: &mut Printer) {
            printer.write_raw("Token(");
            printer.write_bytes(&self.0);
            printer.write_raw(")");
        }
    }

    let token = Token(b"abc".to_vec());
    assert_eq!(structural_to_string(&token), "Token({ 97, 98, 99 })");
    assert_eq!(print_to_string!(token), "Token(\"abc\")");
    assert_eq!(to_string(&token), "Token(\"abc\")");
}

#[test]
fn test_print_to_appends_to_sink() {
    let mut message = String::from("value of x: ");
    print_to!(&mut message, vec![Some(1), None]).unwrap();
    assert_eq!(message, "value of x: { Some(1), None }");
}

#[test]
fn test_concurrent_printing() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("thread \"{}\"", i);
                (print_to_string!(text), print_to_string!(*text.as_bytes()))
            })
        })
        .collect();

    for handle in handles {
        let (from_str, from_bytes) = handle.join().unwrap();
        assert_eq!(from_str, from_bytes);
        assert!(from_str.starts_with("\"thread \\\""));
    }
}
