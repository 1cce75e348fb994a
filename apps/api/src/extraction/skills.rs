//! Skills extraction: vocabulary matches first, then free-form tokens split
//! on list delimiters, with a whole-document keyword fallback for sparse
//! résumés.

use crate::extraction::patterns::{push_unique, vocabulary_hits, BULLET_GLYPHS};
use crate::extraction::sections::extract_section;
use crate::extraction::vocabulary::{FALLBACK_TECH_KEYWORDS, SKILL_VOCABULARY};

const SKILLS_HEADERS: &[&str] = &[
    "skills",
    "technical skills",
    "technologies",
    "tech stack",
    "core competencies",
];

/// Below this many skills the whole document is scanned for common keywords.
const SPARSE_SKILL_COUNT: usize = 5;
const MAX_SKILLS: usize = 30;

/// List separators inside a skills section. Hyphen and asterisk are left out
/// so names like "Material-UI" survive.
const TOKEN_DELIMITERS: &[char] = &[
    ',', ';', '|', '\n', '\t', '•', '○', '\u{2023}', '\u{2043}', '\u{25E6}', '\u{25AA}',
    '\u{25AB}', '\u{25CF}',
];

pub fn extract_skills(text: &str) -> Vec<String> {
    let mut skills = Vec::new();

    if let Some(section) = extract_section(text, SKILLS_HEADERS) {
        skills = vocabulary_hits(&section, SKILL_VOCABULARY);
        let tokens = delimited_tokens(&section, &skills);
        skills.extend(tokens);
    }

    if skills.len() < SPARSE_SKILL_COUNT {
        for keyword in FALLBACK_TECH_KEYWORDS {
            if text.contains(keyword) && !skills.iter().any(|s| s == keyword) {
                skills.push((*keyword).to_string());
            }
        }
    }

    let mut unique = Vec::with_capacity(skills.len());
    for skill in &skills {
        push_unique(&mut unique, skill);
    }
    unique.truncate(MAX_SKILLS);
    unique
}

/// Free-form tokens that are not already covered by `known`.
fn delimited_tokens(section: &str, known: &[String]) -> Vec<String> {
    section
        .split(TOKEN_DELIMITERS)
        .map(clean_token)
        .filter(|token| {
            let len = token.chars().count();
            let lower = token.to_lowercase();
            (2..30).contains(&len)
                && !token.chars().all(|c| c.is_ascii_digit())
                && !lower.contains("skills")
                && !lower.contains("technologies")
                && !known.iter().any(|k| k.to_lowercase() == lower)
        })
        .map(str::to_string)
        .collect()
}

/// Drops leading list markers and a "Category:" label.
fn clean_token(raw: &str) -> &str {
    let token = raw.trim().trim_start_matches(BULLET_GLYPHS).trim();
    match token.rsplit_once(':') {
        Some((_, value)) => value.trim(),
        None => token,
    }
}
