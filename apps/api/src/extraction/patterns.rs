//! Line-level helpers shared by the record scanners: bullet glyphs, date
//! ranges, separator trimming and word-bounded term lookup.

use regex::{Match, Regex};
use std::sync::LazyLock;

/// Glyphs that mark a list item when they lead a line.
pub const BULLET_GLYPHS: &[char] = &[
    '•', '-', '*', '○', '\u{2023}', '\u{2043}', '\u{25E6}', '\u{25AA}', '\u{25AB}', '\u{25CF}',
];

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";

/// "Jan 2020 – Mar 2022", "Sept. 2019 - Present"
static MONTH_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b{MONTH}\s+\d{{4}}\s*[–—-]\s*(?:{MONTH}\s+\d{{4}}|present|current)\b"
    ))
    .expect("valid month range regex")
});

/// "2018 – 2022", "2021-Present"
static YEAR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d{4}\s*[–—-]\s*(?:\d{4}|present|current)\b")
        .expect("valid year range regex")
});

pub fn starts_with_bullet(line: &str) -> bool {
    line.starts_with(BULLET_GLYPHS)
}

/// True for a line consisting of a single bullet glyph, as left behind when
/// a PDF puts the marker and its text on separate lines.
pub fn is_bare_bullet(line: &str) -> bool {
    let mut chars = line.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if BULLET_GLYPHS.contains(&c))
}

/// Removes one leading bullet glyph and surrounding whitespace.
pub fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLET_GLYPHS).map(str::trim)
}

/// Bullet text for `lines[i]`: either the line minus its glyph, or the whole
/// line when the previous line was a bare glyph.
pub fn bullet_content<'a>(lines: &[&'a str], i: usize) -> Option<&'a str> {
    let line = lines[i];
    if let Some(stripped) = strip_bullet(line) {
        return Some(stripped);
    }
    if i > 0 && is_bare_bullet(lines[i - 1]) {
        return Some(line);
    }
    None
}

/// First date range in `line`, month-qualified forms taking priority.
pub fn find_duration(line: &str) -> Option<Match<'_>> {
    MONTH_RANGE.find(line).or_else(|| YEAR_RANGE.find(line))
}

/// Trims whitespace, dashes and pipes from both ends.
pub fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '–' | '—' | '|'))
}

/// Entries of `vocabulary` found anywhere in `text`, compared
/// case-insensitively, in vocabulary order.
pub fn vocabulary_hits(text: &str, vocabulary: &[&str]) -> Vec<String> {
    let lower = text.to_lowercase();
    vocabulary
        .iter()
        .filter(|term| lower.contains(&term.to_lowercase()))
        .map(|term| (*term).to_string())
        .collect()
}

/// Appends `item` unless an entry equal under case folding is already present.
pub fn push_unique(items: &mut Vec<String>, item: &str) {
    let lower = item.to_lowercase();
    if !items.iter().any(|existing| existing.to_lowercase() == lower) {
        items.push(item.to_string());
    }
}
