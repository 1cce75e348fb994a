//! Experience extraction.
//!
//! A cursor walks the section lines carrying at most one in-progress record.
//! An employer line (location-suffixed, or followed by a line naming a role)
//! closes the previous record and opens a new one from itself and the
//! position line after it; any other line is a candidate bullet.

use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::patterns::{
    bullet_content, find_duration, is_bare_bullet, starts_with_bullet, trim_separators,
};
use crate::extraction::sections::extract_section;
use crate::models::resume::Experience;

const EXPERIENCE_HEADERS: &[&str] = &[
    "experience",
    "work experience",
    "employment",
    "professional experience",
];

const MAX_EXPERIENCE: usize = 10;
const MIN_BULLET_CHARS: usize = 6;

static ROLE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)engineer|developer|fellow|intern|manager|analyst|designer|architect")
        .expect("valid role keyword regex")
});

/// "… Remote", "… India", "…, CA"
static LOCATION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:Remote|India|USA|UK|Canada|Germany|Australia|,\s*[A-Z]{2})$")
        .expect("valid location suffix regex")
});

/// Dash between a company name and its location. Spaced hyphens only, so
/// "Hewlett-Packard" stays whole.
static LOCATION_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+[–—-]\s+|\s*[–—]\s*").expect("valid location separator regex")
});

/// "Austin, TX", "New York, NY"
static PLACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z.]*(?:\s+[A-Z][A-Za-z.]*)*,\s*\S")
        .expect("valid place regex")
});

#[derive(Debug, Default)]
struct ExperienceBuilder {
    company: String,
    position: String,
    duration: String,
    location: Option<String>,
    description: Vec<String>,
}

impl ExperienceBuilder {
    /// A record missing either company or position is dropped.
    fn finish(self) -> Option<Experience> {
        if self.company.is_empty() || self.position.is_empty() {
            return None;
        }
        Some(Experience {
            company: self.company,
            position: self.position,
            duration: self.duration,
            location: self.location,
            description: self.description,
        })
    }
}

pub fn extract_experience(text: &str) -> Vec<Experience> {
    let Some(section) = extract_section(text, EXPERIENCE_HEADERS) else {
        return Vec::new();
    };
    let lines: Vec<&str> = section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut records = Vec::new();
    let mut current: Option<ExperienceBuilder> = None;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.chars().count() < 3 || is_bare_bullet(line) {
            i += 1;
            continue;
        }

        let next = lines.get(i + 1).copied();
        if is_employer_line(line, next) {
            records.extend(current.take().and_then(ExperienceBuilder::finish));

            match next.filter(|n| !starts_with_bullet(n)) {
                Some(position_line) => {
                    current = Some(start_record(line, position_line));
                    i += 2;
                }
                None => {
                    // No position line: the record can never be emitted, but it
                    // still owns the bullets that follow.
                    current = Some(start_record(line, ""));
                    i += 1;
                }
            }
            continue;
        }

        if let Some(record) = current.as_mut() {
            if let Some(bullet) = bullet_content(&lines, i) {
                if bullet.chars().count() >= MIN_BULLET_CHARS {
                    record.description.push(bullet.to_string());
                }
            }
        }
        i += 1;
    }

    records.extend(current.and_then(ExperienceBuilder::finish));
    records.truncate(MAX_EXPERIENCE);
    records
}

fn is_employer_line(line: &str, next: Option<&str>) -> bool {
    if starts_with_bullet(line) {
        return false;
    }
    LOCATION_SUFFIX.is_match(line)
        || next.is_some_and(|n| !starts_with_bullet(n) && ROLE_KEYWORD.is_match(n))
}

fn start_record(employer_line: &str, position_line: &str) -> ExperienceBuilder {
    let (mut company, location) = split_employer(employer_line);
    let mut position = position_line.to_string();
    let mut duration = String::new();

    if let Some(m) = find_duration(position_line) {
        duration = m.as_str().to_string();
        position = text_around(position_line, m.start(), m.end());
    } else if let Some((range, rest)) = find_duration(&company)
        .map(|m| (m.as_str().to_string(), text_around(&company, m.start(), m.end())))
    {
        // Dates sometimes sit on the employer line instead.
        duration = range;
        company = rest;
    }

    ExperienceBuilder {
        company,
        position,
        duration,
        location,
        description: Vec::new(),
    }
}

/// Text before `start`, or after `end` when nothing useful precedes the match.
fn text_around(line: &str, start: usize, end: usize) -> String {
    let before = trim_label(&line[..start]);
    if before.is_empty() {
        trim_label(&line[end..]).to_string()
    } else {
        before.to_string()
    }
}

fn trim_label(text: &str) -> &str {
    trim_separators(text).trim_matches(|c: char| c == ',' || c.is_whitespace())
}

/// Splits an employer line into company and optional location.
fn split_employer(line: &str) -> (String, Option<String>) {
    for sep in LOCATION_SEPARATOR.find_iter(line) {
        let company = trim_label(&line[..sep.start()]);
        let rest = line[sep.end()..].trim();
        if !company.is_empty() && (rest.starts_with("Remote") || PLACE.is_match(rest)) {
            return (company.to_string(), Some(rest.to_string()));
        }
    }

    if let Some(company) = line.strip_suffix("Remote") {
        let company = trim_label(company).trim_end_matches('(').trim();
        return (company.to_string(), Some("Remote".to_string()));
    }

    if LOCATION_SUFFIX.is_match(line) {
        if let Some((company, location)) = line.split_once(',') {
            let company = trim_label(company);
            if !company.is_empty() {
                return (company.to_string(), Some(location.trim().to_string()));
            }
        }
    }

    (trim_label(line).to_string(), None)
}
