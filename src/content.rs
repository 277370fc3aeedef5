//! Site content: everything the page displays is data, not code.
//!
//! The built-in defaults render a complete page. On native, the
//! `PORTFOLIO_CONTENT` env var can point at a JSON file overriding them;
//! the browser build always uses the embedded defaults.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub owner_name: String,
    pub email: String,
    pub tagline: String,
    pub about: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Fill percentage of the animated bar, `0..=100`.
    pub level: u8,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            owner_name: "Afiur Nur".into(),
            email: "afiurnur@gmail.com".into(),
            tagline: "Software engineer building fast, quiet things for the web.".into(),
            about: "I design and build interactive experiences, from rendering \
                    pipelines to the last pixel of UI polish. Currently exploring \
                    creative coding and systems programming."
                .into(),
            github_url: "https://github.com/afiurnur".into(),
            linkedin_url: "https://linkedin.com/in/afiur-nur".into(),
            projects: vec![
                Project {
                    title: "Orbit Dashboard".into(),
                    description: "Live server metrics rendered as drifting particle \
                                  trails, sixty frames a second."
                        .into(),
                    tech: vec!["Rust".into(), "WebGL".into(), "D3".into()],
                    link: None,
                },
                Project {
                    title: "Starfield".into(),
                    description: "The animated backdrop of this very page: a rotating \
                                  point cloud with pointer parallax."
                        .into(),
                    tech: vec!["Rust".into(), "WASM".into()],
                    link: None,
                },
                Project {
                    title: "Notation".into(),
                    description: "A keyboard-first note taking app with offline sync."
                        .into(),
                    tech: vec!["TypeScript".into(), "CRDTs".into()],
                    link: None,
                },
            ],
            skills: vec![
                SkillCategory {
                    name: "Languages".into(),
                    skills: vec![
                        Skill { name: "Rust".into(), level: 90 },
                        Skill { name: "TypeScript".into(), level: 85 },
                        Skill { name: "Python".into(), level: 75 },
                    ],
                },
                SkillCategory {
                    name: "Graphics".into(),
                    skills: vec![
                        Skill { name: "WebGL / wgpu".into(), level: 80 },
                        Skill { name: "Shaders".into(), level: 70 },
                    ],
                },
                SkillCategory {
                    name: "Infrastructure".into(),
                    skills: vec![
                        Skill { name: "Linux".into(), level: 85 },
                        Skill { name: "CI / CD".into(), level: 75 },
                    ],
                },
            ],
        }
    }
}

impl SiteContent {
    /// Resolve the content for this run: env-var override on native,
    /// embedded defaults everywhere else. A broken override logs a
    /// warning and falls back; the page always renders.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(path) = std::env::var("PORTFOLIO_CONTENT") {
            use tracing::warn;
            match std::fs::read_to_string(&path) {
                Ok(raw) => match serde_json::from_str(&raw) {
                    Ok(content) => return content,
                    Err(e) => warn!(path, error = %e, "invalid content file, using defaults"),
                },
                Err(e) => warn!(path, error = %e, "content file unreadable, using defaults"),
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_a_complete_page() {
        let content = SiteContent::default();
        assert!(!content.owner_name.is_empty());
        assert!(content.email.contains('@'));
        assert!(!content.projects.is_empty());
        assert!(!content.skills.is_empty());
        for category in &content.skills {
            for skill in &category.skills {
                assert!(skill.level <= 100);
            }
        }
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let content: SiteContent =
            serde_json::from_str(r#"{"owner_name": "Jo Doe", "email": "jo@example.org"}"#)
                .unwrap();
        assert_eq!(content.owner_name, "Jo Doe");
        assert_eq!(content.email, "jo@example.org");
        // Unspecified fields come from the defaults.
        assert!(!content.projects.is_empty());
    }

    #[test]
    fn full_json_round_trips() {
        let raw = r#"{
            "owner_name": "Jo Doe",
            "email": "jo@example.org",
            "tagline": "t",
            "about": "a",
            "github_url": "https://github.com/jo",
            "linkedin_url": "https://linkedin.com/in/jo",
            "projects": [
                {"title": "P", "description": "d", "tech": ["Rust"], "link": "https://p.example"}
            ],
            "skills": [
                {"name": "Languages", "skills": [{"name": "Rust", "level": 99}]}
            ]
        }"#;
        let content: SiteContent = serde_json::from_str(raw).unwrap();
        assert_eq!(content.projects.len(), 1);
        assert_eq!(content.projects[0].link.as_deref(), Some("https://p.example"));
        assert_eq!(content.skills[0].skills[0].level, 99);
    }
}
