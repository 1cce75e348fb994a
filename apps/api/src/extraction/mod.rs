//! Résumé extraction: turns a plain-text résumé dump into a `ParsedProfile`.
//!
//! Every extractor works on the normalized text independently: sections are
//! located by header keyword, then per-section line heuristics recover the
//! records. Nothing here fails; missing data comes back as empty fields.
//!
//! `AppState` holds an `Arc<dyn ResumeParser>` so the backend can be swapped
//! without touching the handler.

pub mod contact;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod patterns;
pub mod projects;
pub mod sections;
pub mod skills;
pub mod summary;
pub mod vocabulary;

use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

use crate::models::resume::ParsedProfile;

/// Used when no line in the header block looks like a name.
const DEFAULT_NAME: &str = "Professional";

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank run regex"));

/// Parser backend carried in `AppState`. Parsing is synchronous and
/// infallible; callers on the async runtime should move it to a blocking
/// thread.
pub trait ResumeParser: Send + Sync {
    fn parse(&self, raw_text: &str) -> ParsedProfile;
}

/// Default backend: section-aware keyword and layout heuristics.
pub struct HeuristicResumeParser;

impl ResumeParser for HeuristicResumeParser {
    fn parse(&self, raw_text: &str) -> ParsedProfile {
        parse_resume(raw_text)
    }
}

/// Full pipeline: normalize, then run each extractor over the same text.
pub fn parse_resume(raw_text: &str) -> ParsedProfile {
    let text = normalize(raw_text);
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let contact = contact::extract_contact(&text);
    let identity = contact::extract_identity(&lines, &contact.phone);

    let profile = ParsedProfile {
        name: identity.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        title: identity.title,
        email: contact.email,
        phone: contact.phone,
        location: identity.location,
        linkedin: contact.linkedin,
        github: contact.github,
        portfolio: contact.portfolio,
        summary: summary::extract_summary(&text),
        skills: skills::extract_skills(&text),
        experience: experience::extract_experience(&text),
        projects: projects::extract_projects(&text),
        education: education::extract_education(&text),
    };

    info!(
        "Parsed résumé: {} skills, {} experience, {} projects, {} education",
        profile.skills.len(),
        profile.experience.len(),
        profile.projects.len(),
        profile.education.len()
    );

    profile
}

/// Unifies line endings, collapses runs of blank lines and trims the ends.
fn normalize(raw_text: &str) -> String {
    let unified = raw_text.replace("\r\n", "\n").replace('\r', "\n");
    BLANK_RUN.replace_all(&unified, "\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    const SAMPLE: &str = "Jane Doe
Software Engineer
jane@x.com | 555-123-4567

SUMMARY
Backend engineer with eight years building payment systems.

SKILLS
Python, Go, React

EXPERIENCE
Acme Corp — Remote
Senior Engineer  Jan 2020 – Present
• Built scalable services
• Led a team of 5

PROJECTS
Chat App | React, Node.js | GitHub: link
• Real-time messaging using WebSockets

EDUCATION
State University, Springfield
B.Tech Computer Science | 2018 – 2022 | 8.2 CGPA
";

    #[test]
    fn test_header_block_and_skills() {
        let profile = parse_resume(SAMPLE);
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.title.as_deref(), Some("Software Engineer"));
        assert_eq!(profile.email, "jane@x.com");
        assert!(profile.phone.contains("555-123-4567"));
        for skill in ["Python", "Go", "React"] {
            assert!(profile.skills.contains(&skill.to_string()), "missing {skill}");
        }
        assert_eq!(
            profile.summary.as_deref(),
            Some("Backend engineer with eight years building payment systems.")
        );
    }

    #[test]
    fn test_experience_record() {
        let profile = parse_resume(SAMPLE);
        assert_eq!(profile.experience.len(), 1);
        let exp = &profile.experience[0];
        assert_eq!(exp.company, "Acme Corp");
        assert_eq!(exp.location.as_deref(), Some("Remote"));
        assert_eq!(exp.position, "Senior Engineer");
        assert_eq!(exp.duration, "Jan 2020 – Present");
        assert_eq!(exp.description, vec!["Built scalable services", "Led a team of 5"]);
    }

    #[test]
    fn test_project_record() {
        let profile = parse_resume(SAMPLE);
        assert_eq!(profile.projects.len(), 1);
        let project = &profile.projects[0];
        assert_eq!(project.name, "Chat App");
        assert!(project.technologies.contains(&"React".to_string()));
        assert!(project.technologies.contains(&"Node.js".to_string()));
        assert!(project.link.as_deref().unwrap_or_default().contains("GitHub: link"));
        assert!(project.description.contains("Real-time messaging using WebSockets"));
    }

    #[test]
    fn test_education_record() {
        let profile = parse_resume(SAMPLE);
        assert_eq!(profile.education.len(), 1);
        let edu = &profile.education[0];
        assert_eq!(edu.institution, "State University");
        assert!(edu.location.as_deref().unwrap_or_default().contains("Springfield"));
        assert!(edu.degree.contains("Computer Science"));
        assert_eq!(edu.duration, "2018 – 2022");
        assert_eq!(edu.gpa.as_deref(), Some("8.2"));
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let profile = parse_resume("");
        assert_eq!(profile.name, DEFAULT_NAME);
        assert_eq!(profile.email, "");
        assert_eq!(profile.phone, "");
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.projects.is_empty());
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_unstructured_input_yields_defaults() {
        let profile = parse_resume("2019\n2020 - 2021\nok\n");
        assert_eq!(profile.name, DEFAULT_NAME);
        assert_eq!(profile.email, "");
        assert_eq!(profile.phone, "");
        assert_eq!(profile.title, None);
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.projects.is_empty());
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_crlf_input_matches_lf_input() {
        let crlf = SAMPLE.replace('\n', "\r\n");
        assert_eq!(parse_resume(&crlf), parse_resume(SAMPLE));
    }

    #[test]
    fn test_blank_line_runs_are_collapsed() {
        assert_eq!(normalize("a\r\n\r\n\r\n\r\nb\r"), "a\n\nb");
        assert_eq!(normalize("  \n\n\n"), "");
    }

    #[test]
    fn test_parsing_is_deterministic() {
        assert_eq!(parse_resume(SAMPLE), parse_resume(SAMPLE));
    }

    #[test]
    fn test_contact_fields_have_expected_shape() {
        let profile = parse_resume(SAMPLE);
        let email = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
        assert!(email.is_match(&profile.email));
        assert!(profile.phone.chars().filter(char::is_ascii_digit).count() >= 10);
    }

    #[test]
    fn test_record_invariants_hold() {
        let mut text = String::from("Jane Doe\nEXPERIENCE\n");
        for n in 0..14 {
            text.push_str(&format!("Company{n} — Remote\nEngineer 2010 - 2011\n"));
        }
        text.push_str("PROJECTS\n");
        for n in 0..14 {
            text.push_str(&format!("Tool {n} | Rust\n"));
        }
        text.push_str("EDUCATION\n");
        for n in 0..8 {
            text.push_str(&format!("Institute Number {n}\nBachelor of Arts | 2010 - 2014\n"));
        }

        let profile = parse_resume(&text);
        assert_eq!(profile.experience.len(), 10);
        assert_eq!(profile.projects.len(), 10);
        assert_eq!(profile.education.len(), 5);
        assert!(profile.skills.len() <= 30);
        assert!(profile
            .experience
            .iter()
            .all(|e| !e.company.is_empty() && !e.position.is_empty()));
        assert!(profile.projects.iter().all(|p| !p.name.is_empty()));
        assert!(profile
            .education
            .iter()
            .all(|e| !e.institution.is_empty() && !e.degree.is_empty()));
    }

    #[test]
    fn test_heuristic_parser_delegates() {
        let parser: Box<dyn ResumeParser> = Box::new(HeuristicResumeParser);
        assert_eq!(parser.parse(SAMPLE), parse_resume(SAMPLE));
    }
}
