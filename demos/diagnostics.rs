//! How a test framework would render the values of a failed assertion.
//!
//! Run with: cargo run --example diagnostics

use printto::{print_to_string, PrintOptions};
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct Request {
    method: String,
    path: String,
    headers: BTreeMap<String, String>,
}

fn main() {
    let mut headers = BTreeMap::new();
    headers.insert("accept".to_string(), "text/plain".to_string());

    let request = Request {
        method: "GET".to_string(),
        path: "/search?q=\"rust\"".to_string(),
        headers,
    };
    println!("request:  {}", print_to_string!(request));

    // A small inline buffer and the slice it erases to print the same text
    let body: SmallVec<[u8; 32]> = SmallVec::from_slice(b"line one\nline two\xFF");
    let erased: &[u8] = &body;
    println!("body:     {}", print_to_string!(body));
    println!("as slice: {}", print_to_string!(erased));

    let mut counts = BTreeMap::new();
    counts.insert("errors", 3);
    counts.insert("warnings", 12);
    if let Some(entry) = counts.first_entry() {
        println!("entry:    {}", print_to_string!(entry));
    }

    // Text keys keep printing as text inside the map
    let mut by_key: BTreeMap<SmallVec<[u8; 8]>, u32> = BTreeMap::new();
    by_key.insert(SmallVec::from_slice(b"id"), 7);
    println!("keyed:    {}", print_to_string!(by_key));

    let samples: Vec<u32> = (0..100).collect();
    println!("samples:  {}", print_to_string!(samples));
    println!(
        "first 5:  {}",
        print_to_string!(samples, PrintOptions::new().with_max_elements(5))
    );
}
