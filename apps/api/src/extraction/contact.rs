//! Contact and identity extraction.
//!
//! Contact fields come from regex scans over the whole document. Name, title
//! and header location come from the first five non-empty lines only.
//!
//! Known limitation: the name/title heuristics assume "Firstname Lastname"
//! ordering and Latin capitalization cues.

use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::sections::is_header_line;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("valid email regex"));

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}|\d{10}")
        .expect("valid phone regex")
});

static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:linkedin\.com/in/|linkedin:\s*(?:https?://)?(?:www\.)?(?:linkedin\.com/in/)?)([\w-]+)",
    )
    .expect("valid linkedin regex")
});

static GITHUB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:github\.com/|github:\s*(?:https?://)?(?:www\.)?(?:github\.com/)?)([\w-]+)")
        .expect("valid github regex")
});

/// Captures the host (minus "www.") so profile domains can be skipped.
static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?([\w-]+\.\w+)(?:/[\w.-]*)*").expect("valid url regex")
});

static SOCIAL_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)linkedin|github|leetcode|portfolio").expect("valid social regex")
});

static TITLE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)engineer|developer|designer|manager|analyst|scientist|architect")
        .expect("valid title keyword regex")
});

/// "Software Engineer", "Site Reliability Engineer (SRE)"
static TITLE_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s*\([A-Z]+\)|[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+")
        .expect("valid title phrase regex")
});

static TITLE_CUTOFF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)www\.|http|linkedin|github").expect("valid title cutoff regex")
});

/// "Springfield, IL", "Pune, India"
static LOCATION_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z.]+(?:\s+[A-Z][A-Za-z.]+)*,\s*(?:[A-Z]{2}|[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)$")
        .expect("valid location regex")
});

static LEADING_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}").expect("valid year regex"));

static YEAR_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}\s*[-–—]\s*\d{4}").expect("valid year span regex"));

/// Lines skipped while looking for the name and title.
const IDENTITY_SKIP_HEADERS: &[&str] = &[
    "education",
    "experience",
    "projects",
    "skills",
    "technical skills",
    "work experience",
    "summary",
    "objective",
    "certifications",
    "awards",
];

const IDENTITY_SCAN_LINES: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    pub name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
}

pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        email: first_match(&EMAIL, text).unwrap_or_default(),
        phone: first_match(&PHONE, text).unwrap_or_default(),
        linkedin: LINKEDIN
            .captures(text)
            .map(|caps| format!("https://linkedin.com/in/{}", &caps[1])),
        github: GITHUB
            .captures(text)
            .map(|caps| format!("https://github.com/{}", &caps[1])),
        portfolio: BARE_URL
            .captures_iter(text)
            .find(|caps| {
                let host = caps[1].to_lowercase();
                !host.starts_with("linkedin.") && !host.starts_with("github.")
            })
            .map(|caps| caps[0].to_string()),
    }
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

/// Scans the opening lines for name, title and a header location. `phone` is
/// the phone number already found in the document, or empty.
pub fn extract_identity(lines: &[&str], phone: &str) -> Identity {
    let mut identity = Identity::default();

    for (i, line) in lines.iter().take(IDENTITY_SCAN_LINES).enumerate() {
        if is_header_line(line, IDENTITY_SKIP_HEADERS) {
            continue;
        }

        if is_contact_line(line, phone) {
            scan_contact_line(line, &mut identity);
            continue;
        }

        let len = line.chars().count();
        if !(3..=100).contains(&len) {
            continue;
        }
        if LEADING_YEAR.is_match(line) || YEAR_SPAN.is_match(line) {
            continue;
        }

        if identity.name.is_none() {
            identity.name = Some(line.to_string());
        } else if identity.location.is_none() && is_location(line) {
            identity.location = Some(line.to_string());
        } else if identity.title.is_none() && i <= 3 && !line.contains(['|', '–', '—']) {
            identity.title = Some(line.to_string());
            break;
        }
    }

    identity
}

fn is_contact_line(line: &str, phone: &str) -> bool {
    line.contains('@') || (!phone.is_empty() && line.contains(phone)) || SOCIAL_KEYWORD.is_match(line)
}

fn scan_contact_line(line: &str, identity: &mut Identity) {
    if identity.name.is_none() && line.chars().count() > 10 {
        identity.name = name_candidate(line);
    }

    if identity.title.is_none() && TITLE_KEYWORD.is_match(line) {
        identity.title = TITLE_PHRASE
            .find_iter(line)
            .map(|m| m.as_str())
            .find(|phrase| TITLE_KEYWORD.is_match(phrase))
            .map(|phrase| {
                let cut = TITLE_CUTOFF.find(phrase).map_or(phrase.len(), |m| m.start());
                phrase[..cut].trim().to_string()
            })
            .filter(|title| !title.is_empty());
    }

    if identity.location.is_none() {
        identity.location = line
            .split(['|', '•', '·'])
            .map(str::trim)
            .find(|segment| is_location(segment))
            .map(str::to_string);
    }
}

/// "City, ST" shape that does not read as a job title ("Software Engineer, Backend").
fn is_location(text: &str) -> bool {
    LOCATION_SEGMENT.is_match(text) && !TITLE_KEYWORD.is_match(text)
}

/// First segment of a contact line once emails are removed and the line is
/// cut at pipes, slashes and the start of digit runs.
fn name_candidate(line: &str) -> Option<String> {
    let without_email = EMAIL.replace_all(line, "|");
    let candidate = split_contact_segments(&without_email)
        .into_iter()
        .map(str::trim)
        .find(|segment| !segment.is_empty())?;

    let len = candidate.chars().count();
    let plausible = (4..=49).contains(&len)
        && !candidate.starts_with(|c: char| c.is_ascii_digit())
        && !SOCIAL_KEYWORD.is_match(candidate)
        && !TITLE_CUTOFF.is_match(candidate);
    plausible.then(|| candidate.to_string())
}

fn split_contact_segments(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        if c == '|' || c == '/' {
            segments.push(&line[start..idx]);
            start = idx + c.len_utf8();
        } else {
            let digit_run_start =
                c.is_ascii_digit() && !prev.is_some_and(|p| p.is_ascii_digit() || p == '+');
            let plus_prefix = c == '+' && next.is_some_and(|n| n.is_ascii_digit());
            if (digit_run_start || plus_prefix) && idx > start {
                segments.push(&line[start..idx]);
                start = idx;
            }
        }
        prev = Some(c);
    }
    segments.push(&line[start..]);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_and_phone() {
        let info = extract_contact("Jane Doe\njane@x.com | 555-123-4567");
        assert_eq!(info.email, "jane@x.com");
        assert_eq!(info.phone, "555-123-4567");
    }

    #[test]
    fn test_international_phone() {
        let info = extract_contact("Call +91 98765 43210 or +1 (415) 555-0100");
        assert_eq!(info.phone, "+1 (415) 555-0100");
        let info = extract_contact("Phone: 9876543210");
        assert_eq!(info.phone, "9876543210");
    }

    #[test]
    fn test_missing_contact_is_empty() {
        let info = extract_contact("Nothing to see here");
        assert_eq!(info, ContactInfo::default());
    }

    #[test]
    fn test_social_profiles_are_normalized() {
        let info = extract_contact("linkedin.com/in/jane-doe | GitHub: janedoe");
        assert_eq!(info.linkedin.as_deref(), Some("https://linkedin.com/in/jane-doe"));
        assert_eq!(info.github.as_deref(), Some("https://github.com/janedoe"));
    }

    #[test]
    fn test_portfolio_skips_profile_domains() {
        let text = "https://www.linkedin.com/in/jane https://github.com/jane https://jane.dev/work";
        let info = extract_contact(text);
        assert_eq!(info.portfolio.as_deref(), Some("https://jane.dev/work"));
    }

    #[test]
    fn test_name_and_title_from_plain_lines() {
        let lines = ["Jane Doe", "Software Engineer", "jane@x.com | 555-123-4567"];
        let identity = extract_identity(&lines, "555-123-4567");
        assert_eq!(identity.name.as_deref(), Some("Jane Doe"));
        assert_eq!(identity.title.as_deref(), Some("Software Engineer"));
    }

    #[test]
    fn test_name_from_contact_line() {
        let lines = ["John Smith | john@mail.com | +1 555 123 4567"];
        let identity = extract_identity(&lines, "+1 555 123 4567");
        assert_eq!(identity.name.as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_email_digits_do_not_split_name() {
        let lines = ["jane99@mail.com | Jane Roe | 555-123-4567"];
        let identity = extract_identity(&lines, "555-123-4567");
        assert_eq!(identity.name.as_deref(), Some("Jane Roe"));
    }

    #[test]
    fn test_title_from_contact_line() {
        let lines = [
            "Alex Kim",
            "Backend Developer | alex@kim.io | github.com/alexkim",
        ];
        let identity = extract_identity(&lines, "");
        assert_eq!(identity.name.as_deref(), Some("Alex Kim"));
        assert_eq!(identity.title.as_deref(), Some("Backend Developer"));
    }

    #[test]
    fn test_section_headers_and_years_are_skipped() {
        let lines = ["SUMMARY", "2019 - 2021", "Priya Nair"];
        let identity = extract_identity(&lines, "");
        assert_eq!(identity.name.as_deref(), Some("Priya Nair"));
    }

    #[test]
    fn test_title_rejects_separator_lines() {
        let lines = ["Priya Nair", "Acme | Globex", "Data Analyst"];
        let identity = extract_identity(&lines, "");
        assert_eq!(identity.title.as_deref(), Some("Data Analyst"));
    }

    #[test]
    fn test_title_only_within_first_four_lines() {
        let lines = ["Priya Nair", "Acme | Globex", "x – y", "a — b", "Data Analyst"];
        let identity = extract_identity(&lines, "");
        assert_eq!(identity.title, None);
    }

    #[test]
    fn test_header_location() {
        let lines = ["Jane Doe", "Springfield, IL", "Software Engineer"];
        let identity = extract_identity(&lines, "");
        assert_eq!(identity.location.as_deref(), Some("Springfield, IL"));
        assert_eq!(identity.title.as_deref(), Some("Software Engineer"));

        let lines = ["Jane Doe", "jane@x.com | Pune, India"];
        let identity = extract_identity(&lines, "");
        assert_eq!(identity.location.as_deref(), Some("Pune, India"));
    }

    #[test]
    fn test_qualified_title_is_not_a_location() {
        let lines = ["Jane Doe", "Software Engineer, Backend", "jane@x.com"];
        let identity = extract_identity(&lines, "");
        assert_eq!(identity.title.as_deref(), Some("Software Engineer, Backend"));
        assert_eq!(identity.location, None);

        let lines = ["Jane Doe", "jane@x.com | Data Scientist, AI | Austin, TX"];
        let identity = extract_identity(&lines, "");
        assert_eq!(identity.location.as_deref(), Some("Austin, TX"));
    }

    #[test]
    fn test_labelled_profile_urls() {
        let info = extract_contact("LinkedIn: linkedin.com/in/jane-doe | GitHub: github.com/janedoe");
        assert_eq!(info.linkedin.as_deref(), Some("https://linkedin.com/in/jane-doe"));
        assert_eq!(info.github.as_deref(), Some("https://github.com/janedoe"));

        let info = extract_contact("linkedin: https://www.linkedin.com/in/sam-lee");
        assert_eq!(info.linkedin.as_deref(), Some("https://linkedin.com/in/sam-lee"));
    }
}
