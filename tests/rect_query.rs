//! Rectangle Query Pipeline Tests
//!
//! End-to-end tests over the embedded store:
//! - Output is sorted by key regardless of traversal order
//! - LIMIT caps results and stops the traversal early
//! - SKIP and MATCH compose
//! - Internal bookkeeping entries never surface
//! - Errors produce no partial output

use geokv::query::QueryError;
use geokv::{CommandError, MemoryStore, QueryStats, RectQuery, RespWriter};

// =============================================================================
// Helper Functions
// =============================================================================

/// Three trucks at spread-out points, inserted in key order.
fn fleet_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.create_index("fleet").unwrap();
    store.insert("fleet", "truck1", "[10 10]", "valueA").unwrap();
    store.insert("fleet", "truck2", "[20 20]", "valueB").unwrap();
    store.insert("fleet", "truck3", "[30 30]", "valueC").unwrap();
    store
}

fn run(store: &MemoryStore, tokens: &[&str]) -> (QueryStats, Vec<u8>) {
    let snapshot = store.snapshot().unwrap();
    let mut out = RespWriter::new(Vec::new());
    let stats = RectQuery::parse(tokens)
        .unwrap()
        .execute(&snapshot, &mut out)
        .unwrap();
    (stats, out.into_inner())
}

fn run_err(store: &MemoryStore, tokens: &[&str]) -> (QueryError, Vec<u8>) {
    let snapshot = store.snapshot().unwrap();
    let mut out = RespWriter::new(Vec::new());
    let err = RectQuery::parse(tokens)
        .and_then(|q| q.execute(&snapshot, &mut out))
        .unwrap_err();
    (err, out.into_inner())
}

/// Builds the expected RESP frame for a list of key/value pairs.
fn frame(pairs: &[(&str, &str)]) -> Vec<u8> {
    let mut expected = format!("*{}\r\n", pairs.len() * 2).into_bytes();
    for (key, value) in pairs {
        expected.extend_from_slice(format!("${}\r\n{}\r\n", key.len(), key).as_bytes());
        expected.extend_from_slice(format!("${}\r\n{}\r\n", value.len(), value).as_bytes());
    }
    expected
}

// =============================================================================
// Ordering and Framing
// =============================================================================

/// Full-bound query returns every item, sorted ascending by key.
#[test]
fn test_returns_all_sorted() {
    let store = fleet_store();
    let (stats, bytes) = run(&store, &["RECT", "fleet", "[0 0],[100 100]"]);
    assert_eq!(stats.returned, 3);
    assert_eq!(
        bytes,
        frame(&[
            ("truck1", "valueA"),
            ("truck2", "valueB"),
            ("truck3", "valueC"),
        ])
    );
}

/// Output order is by key even when traversal order is not.
#[test]
fn test_output_independent_of_insertion_order() {
    let forward = fleet_store();

    let reversed = MemoryStore::new();
    reversed.create_index("fleet").unwrap();
    reversed.insert("fleet", "truck3", "[30 30]", "valueC").unwrap();
    reversed.insert("fleet", "truck1", "[10 10]", "valueA").unwrap();
    reversed.insert("fleet", "truck2", "[20 20]", "valueB").unwrap();

    let tokens = ["rect", "fleet", "[0 0],[100 100]"];
    let (_, a) = run(&forward, &tokens);
    let (_, b) = run(&reversed, &tokens);
    assert_eq!(a, b);
}

/// Re-running the same query against an unmodified store is byte-identical.
#[test]
fn test_rerun_is_byte_identical() {
    let store = fleet_store();
    let tokens = ["rect", "fleet", "[0 0],[100 100]", "match", "truck*"];
    let (_, first) = run(&store, &tokens);
    let (_, second) = run(&store, &tokens);
    assert_eq!(first, second);
}

/// Only items whose geometry intersects the bound are candidates.
#[test]
fn test_bound_restricts_candidates() {
    let store = fleet_store();
    let (stats, bytes) = run(&store, &["rect", "fleet", "[5 5],[25 25]"]);
    assert_eq!(stats.returned, 2);
    assert_eq!(bytes, frame(&[("truck1", "valueA"), ("truck2", "valueB")]));
}

/// An empty result set is an empty array frame, not an error.
#[test]
fn test_empty_result_frame() {
    let store = fleet_store();
    let (stats, bytes) = run(&store, &["rect", "fleet", "[500 500],[600 600]"]);
    assert_eq!(stats.returned, 0);
    assert_eq!(bytes, b"*0\r\n");
}

// =============================================================================
// LIMIT Semantics
// =============================================================================

/// LIMIT 2 on three intersecting trucks returns exactly the first two in
/// traversal order, emitted sorted.
#[test]
fn test_limit_caps_results() {
    let store = fleet_store();
    let (stats, bytes) = run(&store, &["RECT", "fleet", "[0 0],[100 100]", "LIMIT", "2"]);
    assert_eq!(stats.returned, 2);
    assert_eq!(bytes, frame(&[("truck1", "valueA"), ("truck2", "valueB")]));
}

/// Once the limit is reached the traversal stops; later candidates are
/// never visited.
#[test]
fn test_limit_stops_traversal_early() {
    let store = MemoryStore::new();
    store.create_index("fleet").unwrap();
    for i in 1..=5 {
        store
            .insert("fleet", &format!("truck{i}"), "[1 1]", "v")
            .unwrap();
    }

    let (stats, _) = run(&store, &["rect", "fleet", "[0 0],[10 10]", "limit", "2"]);
    assert_eq!(stats.returned, 2);
    // Traversal order: descriptor entry, truck1 (accepted), truck2
    // (accepted), truck3 (triggers the stop). trucks 4 and 5 are never seen.
    assert_eq!(stats.visited, 4);
}

/// LIMIT 0 is valid and returns an empty frame.
#[test]
fn test_limit_zero() {
    let store = fleet_store();
    let (stats, bytes) = run(&store, &["rect", "fleet", "[0 0],[100 100]", "limit", "0"]);
    assert_eq!(stats.returned, 0);
    assert_eq!(bytes, b"*0\r\n");
}

// =============================================================================
// MATCH and SKIP Semantics
// =============================================================================

/// MATCH truck2 SKIP 0 returns only truck2.
#[test]
fn test_match_with_zero_skip() {
    let store = fleet_store();
    let (_, bytes) = run(
        &store,
        &["RECT", "fleet", "[0 0],[100 100]", "MATCH", "truck2", "SKIP", "0"],
    );
    assert_eq!(bytes, frame(&[("truck2", "valueB")]));
}

/// SKIP discards the first-seen candidates in traversal order, not key
/// order: with traversal order truck2, truck1, truck3 and SKIP 1, truck2 is
/// the one discarded.
#[test]
fn test_skip_discards_traversal_prefix() {
    let store = MemoryStore::new();
    store.create_index("fleet").unwrap();
    store.insert("fleet", "truck2", "[20 20]", "valueB").unwrap();
    store.insert("fleet", "truck1", "[10 10]", "valueA").unwrap();
    store.insert("fleet", "truck3", "[30 30]", "valueC").unwrap();

    let (stats, bytes) = run(&store, &["rect", "fleet", "[0 0],[100 100]", "skip", "1"]);
    assert_eq!(stats.skipped, 1);
    assert_eq!(bytes, frame(&[("truck1", "valueA"), ("truck3", "valueC")]));
}

/// Skip counts only candidates that pass the match filter.
#[test]
fn test_skip_counts_only_matching() {
    let store = MemoryStore::new();
    store.create_index("mixed").unwrap();
    store.insert("mixed", "car1", "[1 1]", "x").unwrap();
    store.insert("mixed", "truck1", "[2 2]", "a").unwrap();
    store.insert("mixed", "truck2", "[3 3]", "b").unwrap();

    let (stats, bytes) = run(
        &store,
        &["rect", "mixed", "[0 0],[10 10]", "match", "truck*", "skip", "1"],
    );
    // car1 fails the glob and must not consume the skip slot
    assert_eq!(stats.skipped, 1);
    assert_eq!(bytes, frame(&[("truck2", "b")]));
}

/// Glob wildcards apply per key.
#[test]
fn test_match_glob_wildcards() {
    let store = fleet_store();
    let (_, bytes) = run(
        &store,
        &["rect", "fleet", "[0 0],[100 100]", "match", "truck?"],
    );
    assert_eq!(
        bytes,
        frame(&[
            ("truck1", "valueA"),
            ("truck2", "valueB"),
            ("truck3", "valueC"),
        ])
    );

    let (_, bytes) = run(&store, &["rect", "fleet", "[0 0],[100 100]", "match", "*3"]);
    assert_eq!(bytes, frame(&[("truck3", "valueC")]));
}

// =============================================================================
// Internal Bookkeeping Entries
// =============================================================================

/// The per-index descriptor entry intersects every bound but never appears
/// in results and never consumes skip or limit slots.
#[test]
fn test_internal_entries_never_surface() {
    let store = fleet_store();

    let (_, bytes) = run(&store, &["rect", "fleet", "[0 0],[100 100]"]);
    assert!(!String::from_utf8(bytes).unwrap().contains("__geo:"));

    // The descriptor is traversed first; with LIMIT 3 all three trucks must
    // still fit, proving it did not occupy a limit slot.
    let (stats, bytes) = run(&store, &["rect", "fleet", "[0 0],[100 100]", "limit", "3"]);
    assert_eq!(stats.returned, 3);
    assert!(!String::from_utf8(bytes).unwrap().contains("__geo:"));

    // And with SKIP 1 the descriptor must not be the discarded candidate.
    let (_, bytes) = run(&store, &["rect", "fleet", "[0 0],[100 100]", "skip", "1"]);
    assert_eq!(bytes, frame(&[("truck2", "valueB"), ("truck3", "valueC")]));
}

// =============================================================================
// Error Surfaces
// =============================================================================

/// Missing required tokens is an arity error, not a generic syntax error.
#[test]
fn test_missing_positionals_is_arity_error() {
    let store = fleet_store();
    let (err, bytes) = run_err(&store, &["rect", "fleet"]);
    assert!(matches!(
        err,
        QueryError::Command(CommandError::WrongArity)
    ));
    assert!(bytes.is_empty());
}

/// Non-numeric LIMIT is a numeric-parse error with no partial output.
#[test]
fn test_non_numeric_limit() {
    let store = fleet_store();
    let (err, bytes) = run_err(&store, &["rect", "fleet", "[0 0]", "limit", "abc"]);
    assert!(matches!(
        err,
        QueryError::Command(CommandError::NotAnInteger(_))
    ));
    assert!(bytes.is_empty());
}

/// Unknown leading token is a syntax error.
#[test]
fn test_unknown_command() {
    let store = fleet_store();
    let (err, bytes) = run_err(&store, &["nearby", "fleet", "[0 0]"]);
    assert!(matches!(err, QueryError::Command(CommandError::Syntax)));
    assert!(bytes.is_empty());
}

/// Traversal errors propagate and produce no output bytes.
#[test]
fn test_unknown_index_aborts_without_output() {
    let store = fleet_store();
    let (err, bytes) = run_err(&store, &["rect", "nope", "[0 0]"]);
    assert!(matches!(err, QueryError::Traversal(_)));
    assert!(bytes.is_empty());
}

/// Malformed bounds are rejected by the index collaborator, not the parser.
#[test]
fn test_invalid_bounds_is_traversal_error() {
    let store = fleet_store();
    let (err, bytes) = run_err(&store, &["rect", "fleet", "oops"]);
    assert!(matches!(err, QueryError::Traversal(_)));
    assert!(bytes.is_empty());
}
