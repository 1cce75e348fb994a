//! Summary extraction: the paragraph under a summary/objective/profile
//! header, collapsed to a single line.

use crate::extraction::sections::extract_section;

const SUMMARY_HEADERS: &[&str] = &[
    "summary",
    "objective",
    "about",
    "profile",
    "professional summary",
];

/// The summary section collapsed to one line, kept only when it reads like a
/// paragraph (21 to 499 characters).
pub fn extract_summary(text: &str) -> Option<String> {
    let section = extract_section(text, SUMMARY_HEADERS)?;
    let summary = section
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let len = summary.chars().count();
    (len > 20 && len < 500).then_some(summary)
}
