use std::rc::Rc;

use system_shell::{ContentRenderer, RenderContext};
use system_shell_contract::{
    CommandDescriptor, CommandOutput, CompletionItem, OutputLine, OutputSegment, ShellEffect,
    ShellError, UrlTarget,
};

use super::{LinkEntry, TerminalContent};

const GO: &str = "go";

/// Which numbered listing a [`LinkList`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkListKind {
    /// `projects`.
    Projects,
    /// `socials`.
    Socials,
}

impl LinkListKind {
    fn verb(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Socials => "socials",
        }
    }

    fn summary(self) -> &'static str {
        match self {
            Self::Projects => "view projects that I've coded",
            Self::Socials => "check out my social accounts",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Projects => "project-no",
            Self::Socials => "social-no",
        }
    }

    fn intro(self) -> &'static [&'static str] {
        match self {
            Self::Projects => &[
                "\u{201c}Talk is cheap. Show me the code\u{201d}? I got you!",
                "Here are some of my projects you shouldn't miss",
            ],
            Self::Socials => &["Here are my social links"],
        }
    }
}

/// `projects` / `socials`: a numbered listing, or `go <id>` to open one entry.
pub struct LinkList {
    kind: LinkListKind,
    content: Rc<TerminalContent>,
}

impl LinkList {
    pub fn new(kind: LinkListKind, content: Rc<TerminalContent>) -> Self {
        Self { kind, content }
    }

    fn entries(&self) -> &[LinkEntry] {
        match self.kind {
            LinkListKind::Projects => &self.content.projects,
            LinkListKind::Socials => &self.content.socials,
        }
    }

    fn example(&self) -> String {
        let id = match self.kind {
            LinkListKind::Projects => self.entries().last(),
            LinkListKind::Socials => self.entries().first(),
        }
        .map(|entry| entry.id)
        .unwrap_or(1);
        format!("{} {GO} {id}", self.kind.verb())
    }

    /// Entry selected by `go <id>`; `None` for any other argument shape.
    fn selected(&self, args: &[String]) -> Option<&LinkEntry> {
        let [action, id] = args else {
            return None;
        };
        if action != GO {
            return None;
        }
        let id: u32 = id.parse().ok()?;
        self.entries().iter().find(|entry| entry.id == id)
    }

    fn usage_lines(&self) -> Vec<OutputLine> {
        vec![
            OutputLine::text(format!(
                "Usage: {} {GO} <{}>",
                self.kind.verb(),
                self.kind.placeholder()
            )),
            OutputLine::from_segments(vec![
                OutputSegment::text("eg: "),
                OutputSegment::replay(self.example()),
            ]),
        ]
    }

    fn listing(&self) -> Vec<OutputLine> {
        let mut lines: Vec<OutputLine> = self
            .kind
            .intro()
            .iter()
            .map(|line| OutputLine::text(*line))
            .collect();
        for entry in self.entries() {
            let mut segments = vec![OutputSegment::link(entry.label(), entry.url.clone())];
            let detail = if entry.summary.is_empty() {
                &entry.url
            } else {
                &entry.summary
            };
            segments.push(OutputSegment::text(format!(" - {detail}")));
            lines.push(OutputLine::from_segments(segments));
        }
        lines.push(OutputLine::default());
        lines.extend(self.usage_lines());
        lines
    }
}

impl ContentRenderer for LinkList {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public(self.kind.verb(), self.kind.summary()).with_args()
    }

    fn render(
        &self,
        args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        if args.is_empty() {
            return Ok(CommandOutput::content(self.listing()));
        }
        match self.selected(args) {
            Some(_) => Ok(CommandOutput::content(Vec::new())),
            None => Err(ShellError::usage_lines(self.usage_lines())),
        }
    }

    fn complete_args(&self, args: &[String], partial: &str) -> Vec<CompletionItem> {
        match args {
            [] if GO.starts_with(partial) => vec![CompletionItem::plain(GO)],
            [action] if action == GO => self
                .entries()
                .iter()
                .map(|entry| (entry.id.to_string(), entry.label()))
                .filter(|(id, _)| id.starts_with(partial))
                .map(|(id, label)| CompletionItem::labeled(id, label))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn one_shot(&self, args: &[String], _context: &RenderContext<'_>) -> Option<ShellEffect> {
        self.selected(args)
            .map(|entry| ShellEffect::open_new_tab(entry.url.clone()))
    }
}

pub struct Email(pub Rc<TerminalContent>);

impl Email {
    fn mailto(&self) -> String {
        format!("mailto:{}", self.0.email)
    }
}

impl ContentRenderer for Email {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public("email", "send me an email")
    }

    fn render(
        &self,
        _args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let link = OutputSegment::link(self.0.email.clone(), self.mailto());
        Ok(CommandOutput::content(vec![OutputLine::from_segments(vec![link])]))
    }

    fn one_shot(&self, _args: &[String], _context: &RenderContext<'_>) -> Option<ShellEffect> {
        Some(ShellEffect::OpenUrl {
            url: self.mailto(),
            target: UrlTarget::SameTab,
        })
    }
}

pub struct Resume(pub Rc<TerminalContent>);

impl ContentRenderer for Resume {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public("resume", "go to my resume")
    }

    fn render(
        &self,
        _args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let path = self.0.resume_path.clone();
        Ok(CommandOutput::content(vec![OutputLine::from_segments(vec![
            OutputSegment::text("Opening "),
            OutputSegment::link(path.clone(), path),
        ])]))
    }

    fn one_shot(&self, _args: &[String], _context: &RenderContext<'_>) -> Option<ShellEffect> {
        Some(ShellEffect::open_new_tab(self.0.resume_path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn projects() -> LinkList {
        LinkList::new(LinkListKind::Projects, Rc::new(TerminalContent::default()))
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn go_requires_a_known_numeric_id() {
        let projects = projects();
        assert!(projects.selected(&args(&["go", "4"])).is_some());
        assert!(projects.selected(&args(&["go", "5"])).is_none());
        assert!(projects.selected(&args(&["go", "x"])).is_none());
        assert!(projects.selected(&args(&["open", "1"])).is_none());
        assert!(projects.selected(&args(&["go", "1", "2"])).is_none());
    }

    #[test]
    fn examples_follow_listing_convention() {
        assert_eq!(projects().example(), "projects go 4");
        let socials = LinkList::new(LinkListKind::Socials, Rc::new(TerminalContent::default()));
        assert_eq!(socials.example(), "socials go 1");
    }

    #[test]
    fn id_completion_is_labeled_with_titles() {
        let items = projects().complete_args(&args(&["go"]), "");
        let labels: Vec<String> = items.into_iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec![
                "1. Blog",
                "2. Radio Station Website",
                "3. System Scanner",
                "4. CTF Challenges & Writeups",
            ]
        );
    }
}
