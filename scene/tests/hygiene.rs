//! Hygiene: source-level rules for the scene crate, checked at test time.
//!
//! Each rule scans production `.rs` files under `scene/src/` (sibling
//! `*_test.rs` files are skipped) and has a budget. Budgets only go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// A forbidden pattern and how many occurrences are tolerated.
struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "crashes the tab" },
    Budget { pattern: ".expect(", max: 0, why: "crashes the tab" },
    Budget { pattern: "panic!(", max: 0, why: "crashes the tab" },
    Budget { pattern: "unreachable!(", max: 0, why: "crashes the tab" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
];

const SILENT_LOSS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, why: "discards a result without looking at it" },
    Budget { pattern: ".ok()", max: 0, why: "turns an error into None" },
];

const STRUCTURE: &[Budget] = &[Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" }];

/// Files allowed to talk to the browser.
const DOM_FILES: &[&str] = &["canvas.rs", "engine.rs", "error.rs", "render.rs"];

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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the scene crate root");
    let mut failures = Vec::new();
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, count)| count).sum();
        if count > budget.max {
            let listing: Vec<String> = found.iter().map(|(path, count)| format!("  {path}: {count}")).collect();
            failures.push(format!(
                "`{}` budget exceeded ({}): found {count}, max {}\n{}",
                budget.pattern,
                budget.why,
                budget.max,
                listing.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn panic_budget() {
    check(PANICS);
}

#[test]
fn silent_loss_budget() {
    check(SILENT_LOSS);
}

#[test]
fn structure_budget() {
    check(STRUCTURE);
}

#[test]
fn browser_access_is_confined() {
    let files = source_files();
    let offenders: Vec<&str> = files
        .iter()
        .filter(|file| !DOM_FILES.iter().any(|allowed| file.path.ends_with(allowed)))
        .filter(|file| ["web_sys", "js_sys", "wasm_bindgen"].iter().any(|name| file.content.contains(name)))
        .map(|file| file.path.as_str())
        .collect();
    assert!(offenders.is_empty(), "browser bindings used outside {DOM_FILES:?}: {offenders:?}");
}

#[test]
fn only_the_painter_draws() {
    let files = source_files();
    let offenders: Vec<&str> = files
        .iter()
        .filter(|file| file.content.contains(".stroke()") || file.content.contains(".fill()"))
        .filter(|file| !file.path.ends_with("render.rs"))
        .map(|file| file.path.as_str())
        .collect();
    assert!(offenders.is_empty(), "drawing calls outside render.rs: {offenders:?}");
}
