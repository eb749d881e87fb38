//! Test fixtures and assertions for rddlgen development.
//!
//! Kept free of the generator crates so any of them can use it as a
//! dev-dependency without a cycle.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use rddlgen_core::{Document, InstanceDescriptor};

/// Seeds used by determinism and round-trip tests.
pub const TEST_SEEDS: [u64; 5] = [0, 1, 42, 0xDEAD_BEEF, u64::MAX];

/// Descriptor with small, valid scalar values.
pub fn descriptor(name: &str, domain: &str) -> InstanceDescriptor {
    InstanceDescriptor {
        name: name.to_string(),
        domain: domain.to_string(),
        horizon: 10,
        discount: 0.9,
        max_nondef_actions: 1,
    }
}

/// Rendered static facts in emission order.
pub fn fact_strings(doc: &Document) -> Vec<String> {
    doc.facts().map(ToString::to_string).collect()
}

/// Number of static facts with `predicate`.
pub fn count_facts(doc: &Document, predicate: &str) -> usize {
    doc.facts_named(predicate).count()
}

/// Number of distinct undirected pairs among the 4-ary `predicate` facts,
/// and whether every pair appears in both directions.
pub fn undirected_pairs(doc: &Document, predicate: &str) -> (usize, bool) {
    let directed: HashSet<(String, String)> = doc
        .facts_named(predicate)
        .map(|f| (f.args[..2].join(","), f.args[2..].join(",")))
        .collect();
    let symmetric = directed
        .iter()
        .all(|(a, b)| directed.contains(&(b.clone(), a.clone())));
    let pairs: HashSet<(String, String)> = directed
        .into_iter()
        .map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
        .collect();
    (pairs.len(), symmetric)
}

/// Render `doc` and assert the text is brace-balanced. Returns the text.
pub fn render_balanced(doc: &Document) -> String {
    let text = rddlgen_rddl::render(doc);
    assert_balanced(&text);
    text
}

/// Assert rendered text is brace-balanced.
pub fn assert_balanced(text: &str) {
    if let Some(offset) = rddlgen_rddl::first_unbalanced(text) {
        panic!("unbalanced braces at byte {offset}:\n{text}");
    }
}
