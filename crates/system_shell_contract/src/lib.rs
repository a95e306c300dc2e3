//! Shared shell command contracts used by the headless shell engine, the content renderers, and the
//! terminal UI.
//!
//! This crate is intentionally runtime-agnostic. It defines serializable command metadata, parsed
//! command lines, completion payloads, rendered output, and shell side-effect intents without
//! depending on Leptos, browser APIs, or desktop runtime internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};

/// Visibility policy for registered commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandVisibility {
    /// Command is listed in help and completion.
    Public,
    /// Command is callable but omitted from help and completion.
    Hidden,
}

/// Registration metadata for one verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Verb typed as the first token of a command line.
    pub name: String,
    /// One-line description shown by `help`.
    pub summary: String,
    /// Visibility policy.
    pub visibility: CommandVisibility,
    /// Whether the verb is on the argument-taking allowlist.
    ///
    /// Verbs without this flag render a generic usage line whenever arguments are supplied.
    pub accepts_args: bool,
}

impl CommandDescriptor {
    /// Creates a public verb that takes no arguments.
    pub fn public(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            visibility: CommandVisibility::Public,
            accepts_args: false,
        }
    }

    /// Creates a hidden verb that takes no arguments.
    pub fn hidden(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: String::new(),
            visibility: CommandVisibility::Hidden,
            accepts_args: false,
        }
    }

    /// Marks the verb as argument-taking.
    pub fn with_args(mut self) -> Self {
        self.accepts_args = true;
        self
    }

    /// Returns whether the verb is listed in help and completion.
    pub fn is_public(&self) -> bool {
        self.visibility == CommandVisibility::Public
    }
}

/// A command line split into its verb and argument tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// Raw line as entered.
    pub raw: String,
    /// First whitespace-delimited token, empty for blank lines.
    pub verb: String,
    /// Remaining whitespace-delimited tokens.
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Splits `raw` into verb and arguments.
    pub fn parse(raw: &str) -> Self {
        let mut tokens = raw.split_whitespace().map(str::to_string);
        let verb = tokens.next().unwrap_or_default();
        Self {
            raw: raw.to_string(),
            verb,
            args: tokens.collect(),
        }
    }

    /// Returns whether the line contains no tokens at all.
    pub fn is_blank(&self) -> bool {
        self.verb.is_empty()
    }
}

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    /// Text inserted into the input line.
    pub value: String,
    /// Human-readable label shown in the hint list.
    pub label: String,
}

impl CompletionItem {
    /// Candidate whose label equals its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    /// Candidate with a distinct display label.
    pub fn labeled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Classification of one rendered log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// Blank placeholder for empty submissions.
    Blank,
    /// Normal renderer output.
    Content,
    /// Invalid argument shape.
    Usage,
    /// Unknown verb.
    NotFound,
}

/// One inline piece of rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OutputSegment {
    /// Plain text.
    Text {
        /// Text payload.
        text: String,
    },
    /// Emphasized text.
    Highlight {
        /// Text payload.
        text: String,
    },
    /// Clickable text that re-runs `command` through the shell's replay path.
    Replay {
        /// Displayed label.
        label: String,
        /// Command line submitted on activation.
        command: String,
    },
    /// Clickable text that opens `url` outside the shell.
    Link {
        /// Displayed label.
        label: String,
        /// Target URL.
        url: String,
    },
}

impl OutputSegment {
    /// Plain text segment.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Emphasized text segment.
    pub fn highlight(text: impl Into<String>) -> Self {
        Self::Highlight { text: text.into() }
    }

    /// Replay link whose label is the command itself.
    pub fn replay(command: impl Into<String>) -> Self {
        let command = command.into();
        Self::Replay {
            label: command.clone(),
            command,
        }
    }

    /// External link segment.
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Returns the visible text of the segment.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text { text } | Self::Highlight { text } => text,
            Self::Replay { label, .. } | Self::Link { label, .. } => label,
        }
    }
}

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputLine {
    /// Inline segments in display order.
    pub segments: Vec<OutputSegment>,
}

impl OutputLine {
    /// Line holding a single plain-text segment.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![OutputSegment::text(text)],
        }
    }

    /// Line built from explicit segments.
    pub fn from_segments(segments: Vec<OutputSegment>) -> Self {
        Self { segments }
    }

    /// Concatenated visible text.
    pub fn display_text(&self) -> String {
        self.segments
            .iter()
            .map(OutputSegment::display_text)
            .collect()
    }
}

/// Rendered output for one log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Output classification.
    pub kind: OutputKind,
    /// Rendered lines.
    pub lines: Vec<OutputLine>,
}

impl CommandOutput {
    /// Blank placeholder.
    pub fn blank() -> Self {
        Self {
            kind: OutputKind::Blank,
            lines: Vec::new(),
        }
    }

    /// Renderer content.
    pub fn content(lines: Vec<OutputLine>) -> Self {
        Self {
            kind: OutputKind::Content,
            lines,
        }
    }

    /// Content made of plain-text lines.
    pub fn text_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::content(lines.into_iter().map(OutputLine::text).collect())
    }

    /// `command not found: <raw>` line.
    pub fn not_found(raw: &str) -> Self {
        Self {
            kind: OutputKind::NotFound,
            lines: vec![OutputLine::text(format!("command not found: {raw}"))],
        }
    }

    /// Usage output built from explicit lines.
    pub fn usage(lines: Vec<OutputLine>) -> Self {
        Self {
            kind: OutputKind::Usage,
            lines,
        }
    }

    /// Visible text, one string per line.
    pub fn display_lines(&self) -> Vec<String> {
        self.lines.iter().map(OutputLine::display_text).collect()
    }
}

/// Where an external URL should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlTarget {
    /// New browsing context.
    NewTab,
    /// Current browsing context (used for `mailto:`).
    SameTab,
}

impl UrlTarget {
    /// Browser target name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewTab => "_blank",
            Self::SameTab => "_self",
        }
    }
}

/// Side-effect intent produced by a fresh submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ShellEffect {
    /// Open a URL outside the shell.
    OpenUrl {
        /// URL to open.
        url: String,
        /// Browsing-context target.
        target: UrlTarget,
    },
    /// Empty the command log.
    ClearLog,
}

impl ShellEffect {
    /// `OpenUrl` into a new tab.
    pub fn open_new_tab(url: impl Into<String>) -> Self {
        Self::OpenUrl {
            url: url.into(),
            target: UrlTarget::NewTab,
        }
    }
}

/// Structured shell error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShellErrorCode {
    /// User input violated command usage.
    Usage,
    /// The command was not found.
    NotFound,
}

/// Error emitted by verb lookup or renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellError {
    /// Error category.
    pub code: ShellErrorCode,
    /// Human-readable lines; usage errors may carry more than one.
    pub lines: Vec<OutputLine>,
}

impl ShellError {
    /// Creates a usage error with one plain-text line.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::usage_lines(vec![OutputLine::text(message)])
    }

    /// Creates a usage error with explicit lines.
    pub fn usage_lines(lines: Vec<OutputLine>) -> Self {
        Self {
            code: ShellErrorCode::Usage,
            lines,
        }
    }

    /// Converts the error into rendered output.
    pub fn into_output(self) -> CommandOutput {
        match self.code {
            ShellErrorCode::Usage => CommandOutput::usage(self.lines),
            ShellErrorCode::NotFound => CommandOutput {
                kind: OutputKind::NotFound,
                lines: self.lines,
            },
        }
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .lines
            .iter()
            .map(OutputLine::display_text)
            .collect::<Vec<_>>()
            .join("\n");
        f.write_str(&text)
    }
}

impl std::error::Error for ShellError {}

/// Opaque registration token returned by the command registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CommandRegistrationToken(pub u64);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_splits_verb_and_trimmed_args() {
        let parsed = ParsedCommand::parse("  projects   go 4 ");
        assert_eq!(parsed.verb, "projects");
        assert_eq!(parsed.args, vec!["go", "4"]);
        assert_eq!(parsed.raw, "  projects   go 4 ");
    }

    #[test]
    fn blank_line_has_no_verb() {
        assert!(ParsedCommand::parse("   ").is_blank());
        assert!(ParsedCommand::parse("").is_blank());
    }

    #[test]
    fn shell_effect_serializes_with_kind_tag() {
        let value = serde_json::to_value(ShellEffect::open_new_tab("https://example.com"))
            .expect("serialize effect");
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "open-url",
                "url": "https://example.com",
                "target": "new-tab",
            })
        );
    }

    #[test]
    fn usage_error_renders_as_usage_output() {
        let output = ShellError::usage("Usage: about").into_output();
        assert_eq!(output.kind, OutputKind::Usage);
        assert_eq!(output.display_lines(), vec!["Usage: about"]);
    }
}
