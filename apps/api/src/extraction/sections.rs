//! Section Locator: finds the body of a résumé section by its header line.
//!
//! The start header is matched loosely (substring of the lowercased line) and
//! the end boundary strictly (whole line, or a "header:" prefix), so that body
//! prose mentioning "skills" or "projects" does not cut a section short.

/// Headers that terminate any section.
pub const SECTION_BOUNDARIES: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "awards",
    "technical skills",
];

/// Half-open range of line indices holding a section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionSpan {
    start: usize,
    end: usize,
}

/// True when the trimmed, lowercased line equals one of `headers` or starts
/// with "header:".
pub fn is_header_line(line: &str, headers: &[&str]) -> bool {
    let lower = line.trim().to_lowercase();
    headers.iter().any(|header| {
        lower == *header
            || lower
                .strip_prefix(header)
                .is_some_and(|rest| rest.starts_with(':'))
    })
}

fn locate(lines: &[&str], headers: &[&str]) -> Option<SectionSpan> {
    let header_idx = lines.iter().position(|line| {
        let lower = line.trim().to_lowercase();
        headers.iter().any(|header| lower.contains(header))
    })?;
    let start = header_idx + 1;

    let end = lines[start..]
        .iter()
        .position(|line| is_header_line(line, SECTION_BOUNDARIES))
        .map_or(lines.len(), |offset| start + offset);

    Some(SectionSpan { start, end })
}

/// Text of the first section introduced by any of `headers`, up to the next
/// known section header. `None` when no header matches or the body is blank.
pub fn extract_section(text: &str, headers: &[&str]) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let span = locate(&lines, headers)?;
    let body = lines[span.start..span.end].join("\n");
    if body.trim().is_empty() {
        None
    } else {
        Some(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        EXPERIENCE\n\
        Acme Corp — Remote\n\
        Engineer 2020 - 2022\n\
        EDUCATION\n\
        State University\n\
        Skills: Rust, Go\n";

    #[test]
    fn test_section_runs_until_next_header() {
        let section = extract_section(RESUME, &["experience"]).unwrap();
        assert_eq!(section, "Acme Corp — Remote\nEngineer 2020 - 2022");
    }

    #[test]
    fn test_label_form_terminates_section() {
        let section = extract_section(RESUME, &["education"]).unwrap();
        assert_eq!(section, "State University");
    }

    #[test]
    fn test_start_header_matches_by_substring() {
        let text = "WORK EXPERIENCE (selected)\nAcme\nPROJECTS\nThing";
        let section = extract_section(text, &["work experience"]).unwrap();
        assert_eq!(section, "Acme");
    }

    #[test]
    fn test_prose_mention_does_not_end_section() {
        let text = "Projects\nChat App | Rust\nUsed my skills in networking\nEducation\nX";
        let section = extract_section(text, &["projects"]).unwrap();
        assert!(section.contains("Used my skills in networking"));
        assert!(!section.contains('X'));
    }

    #[test]
    fn test_missing_header_returns_none() {
        assert!(extract_section("just a name\nand a line", &["education"]).is_none());
    }

    #[test]
    fn test_header_on_last_line_returns_none() {
        assert!(extract_section("Jane\nSkills", &["skills"]).is_none());
    }

    #[test]
    fn test_is_header_line() {
        assert!(is_header_line("  SKILLS ", SECTION_BOUNDARIES));
        assert!(is_header_line("Technical Skills: Rust", SECTION_BOUNDARIES));
        assert!(!is_header_line("Skillset", SECTION_BOUNDARIES));
        assert!(!is_header_line("• skills: rust", SECTION_BOUNDARIES));
    }
}
