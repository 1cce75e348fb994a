//! Education extraction. Institution lines open a record; degree lines fill
//! in degree, GPA and dates on the open record.

use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::patterns::{find_duration, starts_with_bullet, strip_bullet, trim_separators};
use crate::extraction::sections::extract_section;
use crate::models::resume::Education;

const EDUCATION_HEADERS: &[&str] = &["education", "academic", "qualification", "academic background"];

const MAX_EDUCATION: usize = 5;

const DEGREE_WORDS: &str =
    r"bachelor|master|phd|b\.tech|m\.tech|b\.sc|m\.sc|diploma|undergraduate|graduate";

static DEGREE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^(?:{DEGREE_WORDS})")).expect("valid degree prefix regex")
});

static DEGREE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i){DEGREE_WORDS}")).expect("valid degree keyword regex")
});

/// "B.Tech | 8.5": a degree line, not an institution.
static PIPE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s*\d").expect("valid pipe number regex"));

static GRADE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)cgpa|gpa|percentage").expect("valid grade keyword regex"));

/// "8.2 CGPA", "CGPA: 8.2", "GPA 3.9", "87%"
static GRADE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+\.\d+)\s*CGPA|CGPA[:\s]*(\d+\.\d+)|GPA[:\s]*(\d+\.\d+)|(\d+)%")
        .expect("valid grade regex")
});

/// Same shapes as `GRADE`, plus a leading pipe, for removal from the line.
static GRADE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\|\s*\d+\.\d+\s*CGPA|\d+\.\d+\s*CGPA|CGPA[:\s]*\d+\.\d+|GPA[:\s]*\d+\.\d+|\d+%")
        .expect("valid grade text regex")
});

static BARE_GRADE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+|\d+%").expect("valid bare grade regex"));

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("valid year regex"));

/// ", Springfield" or ", Cambridge, MA" at the end of an institution line.
static INSTITUTION_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",\s*([A-Z][A-Za-z.]*(?:\s+[A-Z][A-Za-z.]*)*(?:,\s*[A-Z][A-Za-z.]*(?:\s+[A-Z][A-Za-z.]*)*)?)$")
        .expect("valid institution location regex")
});

/// Abbreviated degree followed by the field: "B.Tech Computer Science".
static ABBREVIATED_DEGREE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:b\.?\s?tech|m\.?\s?tech|b\.?\s?sc|m\.?\s?sc|b\.?\s?e|m\.?\s?e|b\.?\s?s|m\.?\s?s|b\.?\s?a|m\.?\s?a|ph\.?\s?d|mba)\.?(?:\s+|\s*[,:–—-]\s*)(.+)$",
    )
    .expect("valid abbreviated degree regex")
});

#[derive(Debug, Default)]
struct EducationBuilder {
    institution: String,
    degree: String,
    field: Option<String>,
    duration: String,
    location: Option<String>,
    gpa: Option<String>,
}

impl EducationBuilder {
    fn finish(self) -> Option<Education> {
        if self.institution.is_empty() || self.degree.is_empty() {
            return None;
        }
        Some(Education {
            institution: self.institution,
            degree: self.degree,
            field: self.field,
            duration: self.duration,
            location: self.location,
            gpa: self.gpa,
        })
    }
}

/// Values read off one degree line; `None` leaves the record untouched.
#[derive(Debug, Default, PartialEq)]
struct DegreeLine {
    degree: Option<String>,
    gpa: Option<String>,
    duration: Option<String>,
}

pub fn extract_education(text: &str) -> Vec<Education> {
    let Some(section) = extract_section(text, EDUCATION_HEADERS) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut current: Option<EducationBuilder> = None;

    let lines = section
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > 3);

    for line in lines {
        if line.eq_ignore_ascii_case("education") {
            continue;
        }

        if is_institution_line(line) {
            records.extend(current.take().and_then(EducationBuilder::finish));
            current = Some(start_institution(line));
            continue;
        }

        let Some(record) = current.as_mut() else {
            continue;
        };
        if is_degree_line(line) {
            let parsed = parse_degree_line(strip_bullet(line).unwrap_or(line));
            if let Some(degree) = parsed.degree {
                record.field = field_of_study(&degree);
                record.degree = degree;
            }
            if let Some(gpa) = parsed.gpa {
                record.gpa = Some(gpa);
            }
            if let Some(duration) = parsed.duration {
                record.duration = duration;
            }
        }
    }

    records.extend(current.and_then(EducationBuilder::finish));
    records.truncate(MAX_EDUCATION);
    records
}

fn is_institution_line(line: &str) -> bool {
    !starts_with_bullet(line)
        && line.chars().count() > 10
        && !DEGREE_PREFIX.is_match(line)
        && !PIPE_NUMBER.is_match(line)
}

fn is_degree_line(line: &str) -> bool {
    DEGREE_KEYWORD.is_match(line)
        || line.contains('|')
        || find_duration(line).is_some()
        || GRADE_KEYWORD.is_match(line)
}

fn start_institution(line: &str) -> EducationBuilder {
    let mut record = EducationBuilder::default();
    let mut name = line;

    if let Some(m) = find_duration(line).filter(|m| m.end() == line.len()) {
        record.duration = m.as_str().to_string();
        name = trim_clause(&line[..m.start()]);
    }

    if let Some(caps) = INSTITUTION_LOCATION.captures(name) {
        record.location = Some(caps[1].to_string());
        if let Some(m) = caps.get(0) {
            name = &name[..m.start()];
        }
    }

    record.institution = trim_clause(name).to_string();
    record
}

fn parse_degree_line(line: &str) -> DegreeLine {
    let mut parsed = DegreeLine::default();
    let mut residual = line.to_string();

    if let Some(caps) = GRADE.captures(line) {
        parsed.gpa = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string())
            .or_else(|| caps.get(4).map(|m| format!("{}%", m.as_str())));
        residual = GRADE_TEXT.replace(&residual, "").trim().to_string();
    }

    if let Some((range, rest)) = find_duration(&residual).map(|m| {
        let rest = format!("{}{}", &residual[..m.start()], &residual[m.end()..]);
        (m.as_str().to_string(), rest)
    }) {
        parsed.duration = Some(range);
        residual = rest.trim().to_string();
    }

    if residual.contains('|') {
        let mut parts = residual.split('|').map(str::trim);
        let first = parts.next().unwrap_or_default().to_string();
        for part in parts {
            if let Some(grade) = BARE_GRADE.find(part).filter(|_| parsed.gpa.is_none()) {
                parsed.gpa = Some(grade.as_str().to_string());
            } else if parsed.duration.is_none() && YEAR.is_match(part) {
                parsed.duration = Some(part.to_string());
            }
        }
        residual = first;
    }

    let degree = trim_clause(&residual);
    if !degree.is_empty() {
        parsed.degree = Some(degree.to_string());
    }
    parsed
}

fn trim_clause(text: &str) -> &str {
    trim_separators(text).trim_matches(|c: char| c == ',' || c.is_whitespace())
}

/// Field of study named in a degree: after " in ", or after an abbreviated
/// degree token.
fn field_of_study(degree: &str) -> Option<String> {
    let lower = degree.to_lowercase();
    let field = match lower.rfind(" in ") {
        // " in " is ASCII, so the byte offset is valid in `degree` too when
        // lowercasing preserved lengths.
        Some(idx) if lower.len() == degree.len() => degree[idx + 4..].trim().to_string(),
        _ => ABBREVIATED_DEGREE
            .captures(degree)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default(),
    };
    let field = trim_clause(&field).to_string();
    (!field.is_empty()).then_some(field)
}
