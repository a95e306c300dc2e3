//! Content renderers for every terminal verb.
//!
//! Each verb is one [`ContentRenderer`] registered once by [`register_builtin_commands`]. The
//! renderers read their text from a shared [`TerminalContent`] so the desktop can swap the profile
//! without touching dispatch.

mod easter_eggs;
mod links;
mod meta;
mod profile;

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use system_shell::{CommandRegistry, ContentRenderer, ShellConfig};
use system_shell_contract::CommandRegistrationToken;

pub use links::LinkListKind;

/// One numbered entry of the `projects` or `socials` listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Number typed after `go`.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// One-line description.
    pub summary: String,
    /// Destination opened in a new tab.
    pub url: String,
}

impl LinkEntry {
    fn new(id: u32, title: &str, summary: &str, url: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            summary: summary.to_string(),
            url: url.to_string(),
        }
    }

    /// `"<id>. <title>"`, used by listings and completion hints.
    pub fn label(&self) -> String {
        format!("{}. {}", self.id, self.title)
    }
}

/// One line of the `education` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Degree or programme.
    pub title: String,
    /// Institution and years.
    pub detail: String,
}

/// Profile text rendered by the terminal verbs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalContent {
    /// Name highlighted by `about`.
    pub owner_name: String,
    /// Role highlighted by `about`.
    pub headline: String,
    /// Free-form `about` paragraph lines.
    pub about: Vec<String>,
    /// ASCII banner printed by `welcome`.
    pub banner: Vec<String>,
    /// `education` entries.
    pub education: Vec<EducationEntry>,
    /// Address opened by `email`.
    pub email: String,
    /// Document opened by `resume`.
    pub resume_path: String,
    /// `projects go <id>` targets.
    pub projects: Vec<LinkEntry>,
    /// `socials go <id>` targets.
    pub socials: Vec<LinkEntry>,
    /// Prompt, home directory, and seed entries.
    pub shell: ShellConfig,
}

impl Default for TerminalContent {
    fn default() -> Self {
        Self {
            owner_name: "Alex Doe".to_string(),
            headline: "Security Engineer".to_string(),
            about: vec![
                "I work on reverse engineering and penetration testing.".to_string(),
                "Outside of work I write code and play CTFs.".to_string(),
            ],
            banner: vec![
                r"    _   _              ___              ".to_string(),
                r"   /_\ | |_____ __   |   \ ___  ___    ".to_string(),
                r"  / _ \| / -_) \ /   | |) / _ \/ -_)   ".to_string(),
                r" /_/ \_\_\___/_\_\   |___/\___/\___|   ".to_string(),
            ],
            education: vec![
                EducationEntry {
                    title: "B.Sc. Computer Science".to_string(),
                    detail: "State University | 2019 ~ 2023".to_string(),
                },
                EducationEntry {
                    title: "Offensive Security Certification".to_string(),
                    detail: "Self-study | 2024".to_string(),
                },
            ],
            email: "hello@example.dev".to_string(),
            resume_path: "/resume.pdf".to_string(),
            projects: vec![
                LinkEntry::new(
                    1,
                    "Blog",
                    "Personal blog with notes and write-ups.",
                    "https://blog.example.dev/",
                ),
                LinkEntry::new(
                    2,
                    "Radio Station Website",
                    "Website built for a local radio station.",
                    "https://radio.example.dev/",
                ),
                LinkEntry::new(
                    3,
                    "System Scanner",
                    "Desktop tool that collects and reports system information.",
                    "https://github.com/example/system-scanner/",
                ),
                LinkEntry::new(
                    4,
                    "CTF Challenges & Writeups",
                    "Reverse engineering challenges with solutions.",
                    "https://github.com/example/writeups/",
                ),
            ],
            socials: vec![
                LinkEntry::new(1, "GitHub", "", "https://github.com/example"),
                LinkEntry::new(2, "Facebook", "", "https://www.facebook.com/example"),
                LinkEntry::new(3, "Linkedin", "", "https://linkedin.com/in/example"),
                LinkEntry::new(4, "Blog", "", "https://dev.to/example"),
            ],
            shell: ShellConfig::default(),
        }
    }
}

impl TerminalContent {
    /// Default profile pointing `resume` at `path`.
    pub fn with_resume_path(path: impl Into<String>) -> Self {
        Self {
            resume_path: path.into(),
            ..Self::default()
        }
    }
}

/// Registers every built-in verb, public ones in `help` order followed by the hidden ones.
pub fn register_builtin_commands(
    registry: &CommandRegistry,
    content: Rc<TerminalContent>,
) -> Vec<CommandRegistrationToken> {
    let renderers: Vec<Rc<dyn ContentRenderer>> = vec![
        Rc::new(profile::About(content.clone())),
        Rc::new(meta::Clear),
        Rc::new(profile::Echo),
        Rc::new(profile::Education(content.clone())),
        Rc::new(links::Email(content.clone())),
        Rc::new(links::Resume(content.clone())),
        Rc::new(meta::Help),
        Rc::new(meta::History),
        Rc::new(links::LinkList::new(LinkListKind::Projects, content.clone())),
        Rc::new(profile::Pwd(content.clone())),
        Rc::new(links::LinkList::new(LinkListKind::Socials, content.clone())),
        Rc::new(profile::Welcome(content.clone())),
        Rc::new(profile::Whoami(content.clone())),
        Rc::new(easter_eggs::Sudo),
        Rc::new(easter_eggs::Neofetch),
        Rc::new(easter_eggs::Uname),
        Rc::new(easter_eggs::Ls),
    ];
    renderers
        .into_iter()
        .map(|renderer| registry.register(renderer))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn public_verbs_register_in_help_order() {
        let registry = CommandRegistry::new();
        let tokens = register_builtin_commands(&registry, Rc::new(TerminalContent::default()));
        assert_eq!(tokens.len(), 17);
        let names: Vec<String> = registry
            .public_descriptors()
            .into_iter()
            .map(|descriptor| descriptor.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "about",
                "clear",
                "echo",
                "education",
                "email",
                "resume",
                "help",
                "history",
                "projects",
                "pwd",
                "socials",
                "welcome",
                "whoami",
            ]
        );
    }

    #[test]
    fn argument_allowlist_is_projects_socials_echo() {
        let registry = CommandRegistry::new();
        register_builtin_commands(&registry, Rc::new(TerminalContent::default()));
        let mut with_args: Vec<String> = registry
            .descriptors()
            .into_iter()
            .filter(|descriptor| descriptor.accepts_args)
            .map(|descriptor| descriptor.name)
            .collect();
        with_args.sort();
        assert_eq!(with_args, vec!["echo", "projects", "socials"]);
    }

    #[test]
    fn content_deserializes_partial_overrides() {
        let content: TerminalContent =
            serde_json::from_str(r#"{"email":"me@example.org"}"#).expect("parse content");
        assert_eq!(content.email, "me@example.org");
        assert_eq!(content.projects.len(), 4);
    }
}
