//! Hygiene: scans `client/src` for panicking or error-discarding patterns.
//!
//! Every budget is zero. Test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    max: usize,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", max: 0 },
    Rule { pattern: ".expect(", max: 0 },
    Rule { pattern: "panic!(", max: 0 },
    Rule { pattern: "unreachable!(", max: 0 },
    Rule { pattern: "todo!(", max: 0 },
    Rule { pattern: "unimplemented!(", max: 0 },
    Rule { pattern: "let _ =", max: 0 },
    Rule { pattern: ".ok()", max: 0 },
    Rule { pattern: "#[allow(dead_code)]", max: 0 },
];

fn collect_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_sources(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path_str, content));
        }
    }
}

fn hits(sources: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    sources
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let mut sources = Vec::new();
    collect_sources(Path::new("src"), &mut sources);
    assert!(sources.iter().any(|(path, _)| path.ends_with("lib.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let mut sources = Vec::new();
    collect_sources(Path::new("src"), &mut sources);

    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&sources, rule.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > rule.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  `{}` found {count}, max {}:\n{detail}", rule.pattern, rule.max));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
