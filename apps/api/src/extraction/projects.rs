//! Project extraction. Same cursor-and-builder scan as experience, keyed on
//! title lines ("Name | Tech, Tech | GitHub") instead of employer lines.

use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::patterns::{
    bullet_content, is_bare_bullet, push_unique, starts_with_bullet, trim_separators,
    vocabulary_hits,
};
use crate::extraction::sections::extract_section;
use crate::extraction::vocabulary::PROJECT_TECH_VOCABULARY;
use crate::models::resume::Project;

const PROJECT_HEADERS: &[&str] = &["projects", "personal projects", "portfolio", "key projects"];

const MAX_PROJECTS: usize = 10;
const MIN_BULLET_CHARS: usize = 11;

static LINK_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:live|github|demo|link|code|video|documentation)\b")
        .expect("valid link keyword regex")
});

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));

/// "Tech stack: Rust, Axum", "built with React & Firebase"
static TECH_INDICATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:technologies|tech stack|built with|using|tools|frameworks)[:\s]+(.*)")
        .expect("valid tech indicator regex")
});

#[derive(Debug, Default)]
struct ProjectBuilder {
    name: String,
    description: Vec<String>,
    technologies: Vec<String>,
    link: Option<String>,
}

impl ProjectBuilder {
    fn finish(self) -> Option<Project> {
        if self.name.is_empty() {
            return None;
        }
        Some(Project {
            name: self.name,
            description: self.description.join(" "),
            technologies: self.technologies,
            link: self.link,
        })
    }

    fn add_technologies<'a>(&mut self, tokens: impl Iterator<Item = &'a str>) {
        for token in tokens.map(str::trim) {
            let len = token.chars().count();
            if (2..30).contains(&len) && !token.contains("http") {
                push_unique(&mut self.technologies, token);
            }
        }
    }

    fn add_bullet(&mut self, bullet: &str) {
        if let Some(caps) = TECH_INDICATOR.captures(bullet) {
            self.add_technologies(caps[1].split([',', ';', '|', '&']));
        }
        self.description.push(bullet.to_string());

        if self.link.is_none() {
            self.link = URL
                .find(bullet)
                .or_else(|| LINK_KEYWORD.find(bullet))
                .map(|m| m.as_str().to_string());
        }
    }
}

pub fn extract_projects(text: &str) -> Vec<Project> {
    let Some(section) = extract_section(text, PROJECT_HEADERS) else {
        return Vec::new();
    };
    let lines: Vec<&str> = section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut records = Vec::new();
    let mut current: Option<ProjectBuilder> = None;

    for (i, line) in lines.iter().copied().enumerate() {
        if line.chars().count() < 3 || is_bare_bullet(line) {
            continue;
        }

        if is_title_line(line, lines.get(i + 1).copied()) {
            records.extend(current.take().and_then(ProjectBuilder::finish));
            current = Some(start_project(line));
            continue;
        }

        if let Some(project) = current.as_mut() {
            if let Some(bullet) = bullet_content(&lines, i) {
                if bullet.chars().count() >= MIN_BULLET_CHARS {
                    project.add_bullet(bullet);
                }
            }
        }
    }

    records.extend(current.and_then(ProjectBuilder::finish));
    records.truncate(MAX_PROJECTS);

    for project in records.iter_mut() {
        if project.technologies.is_empty() && !project.description.is_empty() {
            project.technologies = vocabulary_hits(&project.description, PROJECT_TECH_VOCABULARY);
        }
    }

    records
}

/// A title line is never itself a bullet, and is either pipe-delimited or
/// introduces a bullet list.
fn is_title_line(line: &str, next: Option<&str>) -> bool {
    if starts_with_bullet(line) || line.to_lowercase().contains("skill") {
        return false;
    }
    line.contains('|') || next.is_some_and(starts_with_bullet)
}

fn start_project(line: &str) -> ProjectBuilder {
    let mut parts = line.split('|');
    let name = parts.next().map(trim_separators).unwrap_or_default();

    let mut project = ProjectBuilder {
        name: name.to_string(),
        ..Default::default()
    };

    for part in parts.map(str::trim).filter(|p| !p.is_empty()) {
        if LINK_KEYWORD.is_match(part) || URL.is_match(part) {
            if project.link.is_none() {
                project.link = Some(part.to_string());
            }
        } else {
            project.add_technologies(part.split([',', ';']));
        }
    }

    project
}
