//! Common assertion helpers for rendered documents and command output
//!
//! Provides predicates and counting helpers for validating git-latex
//! command output and the LaTeX it writes.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for repository error messages
pub fn not_a_repository() -> impl Predicate<str> {
    predicates::str::contains("Not a git repository")
}

/// Creates a predicate that checks for the success report
pub fn generated(file_name: &str) -> impl Predicate<str> {
    predicates::str::contains("Successfully generated")
        .and(predicates::str::contains(file_name.to_string()))
}

/// Counts non-overlapping occurrences of `needle` in `document`
pub fn count(document: &str, needle: &str) -> usize {
    document.matches(needle).count()
}

/// Asserts that every opened Verbatim block is closed
pub fn assert_balanced(document: &str) {
    assert_eq!(
        count(document, "\\begin{Verbatim}"),
        count(document, "\\end{Verbatim}"),
        "unbalanced Verbatim blocks in:\n{document}"
    );
}

/// Asserts the fixed document frame is present
pub fn assert_document_frame(document: &str) {
    assert!(document.starts_with("\\documentclass[11pt,a4paper]{article}\n"));
    assert!(document.contains("\\tableofcontents\n"));
    assert!(document.ends_with("\\end{document}\n"));
}
