//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the client crate's production sources for antipatterns.
//! Each has a budget (ideally zero). If you must add one, fix an existing one
//! first; the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `client/src/`, excluding `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Per-file count of lines matched by `matches`.
fn hits_where(files: &[SourceFile], matches: impl Fn(&str) -> bool) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| matches(line)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(what: &str, hits: &[(String, usize)], max: usize) {
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "{what} budget exceeded: found {count}, max {max}.\n{listing}");
}

fn pattern_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no client sources found; run from the crate root");
    assert_budget(pattern, &hits_where(&files, |line| line.contains(pattern)), max);
}

// Panics: these abort the WASM instance.

#[test]
fn unwrap_budget() {
    pattern_budget(".unwrap()", 0);
}

#[test]
fn expect_budget() {
    pattern_budget(".expect(", 0);
}

#[test]
fn panic_budget() {
    pattern_budget("panic!(", 0);
}

#[test]
fn unreachable_budget() {
    pattern_budget("unreachable!(", 0);
}

#[test]
fn todo_budget() {
    pattern_budget("todo!(", 0);
}

#[test]
fn unimplemented_budget() {
    pattern_budget("unimplemented!(", 0);
}

// Silent loss: errors discarded without inspection.

#[test]
fn silent_discard_budget() {
    pattern_budget("let _ =", 0);
}

#[test]
fn dot_ok_budget() {
    pattern_budget(".ok()", 0);
}

// Style / structure.

#[test]
fn allow_dead_code_budget() {
    pattern_budget("#[allow(dead_code)]", 0);
}

/// Session credentials must never reach the console.
#[test]
fn credential_logging_budget() {
    let files = source_files();
    let hits = hits_where(&files, |line| {
        let line = line.trim_start();
        let logs = ["log::", "console::", "tracing::"].iter().any(|p| line.starts_with(p));
        logs && (line.contains("{token") || line.contains("session_token") || line.contains("{session_id"))
    });
    assert_budget("credential logging", &hits, 0);
}
