//! Interactive shell session state.

use system_shell_contract::{CommandOutput, CompletionItem, ShellEffect};

use crate::{
    completion::{complete_line, Completion},
    dispatch::dispatch_entry,
    keymap::ShellKey,
    registry::CommandRegistry,
    ShellConfig,
};

/// One log entry with its rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    /// Position in the log.
    pub index: usize,
    /// Raw command line as submitted.
    pub raw: String,
    /// Rendered output.
    pub output: CommandOutput,
    /// Whether this is the most recent submission.
    pub fresh: bool,
}

/// Command log, input buffer, history cursor, and hint list of one terminal.
///
/// The history cursor is `None` while the user is editing a new line and `Some(index)` while
/// browsing the log with the arrow keys.
#[derive(Clone)]
pub struct ShellSession {
    registry: CommandRegistry,
    log: Vec<String>,
    input: String,
    cursor: Option<usize>,
    hints: Vec<CompletionItem>,
    fresh: Option<usize>,
}

impl ShellSession {
    /// Creates a session whose log holds the configured seed entries.
    pub fn new(registry: CommandRegistry, config: &ShellConfig) -> Self {
        Self {
            registry,
            log: config.seed_commands.clone(),
            input: String::new(),
            cursor: None,
            hints: Vec::new(),
            fresh: None,
        }
    }

    /// Command log, oldest first.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Live input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// History browsing cursor.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Completion hints currently shown.
    pub fn hints(&self) -> &[CompletionItem] {
        &self.hints
    }

    /// Index of the most recent submission, if it is still in the log.
    pub fn fresh_index(&self) -> Option<usize> {
        self.fresh
    }

    /// Registry this session dispatches against.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Appends `raw` to the log and runs its one-time effect.
    ///
    /// Empty lines are appended too. Effects other than [`ShellEffect::ClearLog`] are returned
    /// for the host to execute.
    pub fn submit_line(&mut self, raw: impl Into<String>) -> Vec<ShellEffect> {
        self.log.push(raw.into());
        self.input.clear();
        self.hints.clear();
        self.cursor = None;
        let index = self.log.len() - 1;
        self.fresh = Some(index);

        let outcome = dispatch_entry(&self.registry, &self.log, index, true);
        match outcome.effect {
            Some(ShellEffect::ClearLog) => {
                self.clear();
                Vec::new()
            }
            Some(effect) => vec![effect],
            None => Vec::new(),
        }
    }

    /// Submits the current input buffer.
    pub fn submit(&mut self) -> Vec<ShellEffect> {
        let raw = std::mem::take(&mut self.input);
        self.submit_line(raw)
    }

    /// Submits `command` on behalf of a clickable output element.
    pub fn replay(&mut self, command: &str) -> Vec<ShellEffect> {
        self.submit_line(command)
    }

    /// Replaces the input buffer from a keystroke and dismisses hints.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.hints.clear();
    }

    /// Completes the input buffer.
    pub fn complete(&mut self) {
        match complete_line(&self.registry, &self.input) {
            Completion::Unchanged => {}
            Completion::Replace(line) => {
                self.input = line;
                self.hints.clear();
            }
            Completion::Hints(hints) => self.hints = hints,
        }
    }

    /// Moves the cursor one entry back and loads it into the buffer.
    ///
    /// Starts at the newest entry and stops at the oldest.
    pub fn history_previous(&mut self) {
        let Some(last) = self.log.len().checked_sub(1) else {
            return;
        };
        let index = match self.cursor {
            None => last,
            Some(index) => index.min(last).saturating_sub(1),
        };
        self.cursor = Some(index);
        self.input = self.log[index].clone();
    }

    /// Moves the cursor one entry forward; past the newest entry the buffer is emptied and
    /// browsing ends.
    pub fn history_next(&mut self) {
        let Some(index) = self.cursor else {
            return;
        };
        let next = index + 1;
        if next >= self.log.len() {
            self.input.clear();
            self.cursor = None;
            return;
        }
        self.cursor = Some(next);
        self.input = self.log[next].clone();
    }

    /// Empties the log and the hint list.
    pub fn clear(&mut self) {
        self.log.clear();
        self.hints.clear();
        self.fresh = None;
    }

    /// Applies one key binding. Returns effects produced by a submission.
    pub fn handle_key(&mut self, key: ShellKey) -> Vec<ShellEffect> {
        match key {
            ShellKey::Submit => return self.submit(),
            ShellKey::Complete => self.complete(),
            ShellKey::ClearScreen => self.clear(),
            ShellKey::HistoryPrevious => {
                self.hints.clear();
                self.history_previous();
            }
            ShellKey::HistoryNext => {
                self.hints.clear();
                self.history_next();
            }
            ShellKey::Other => self.hints.clear(),
        }
        Vec::new()
    }

    /// Renders every log entry. Never produces effects.
    pub fn render_log(&self) -> Vec<RenderedEntry> {
        self.log
            .iter()
            .enumerate()
            .map(|(index, raw)| RenderedEntry {
                index,
                raw: raw.clone(),
                output: dispatch_entry(&self.registry, &self.log, index, false).output,
                fresh: self.fresh == Some(index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use system_shell_contract::{CommandDescriptor, ShellError};

    use super::*;
    use crate::registry::{ContentRenderer, RenderContext};

    struct Clear;

    impl ContentRenderer for Clear {
        fn descriptor(&self) -> CommandDescriptor {
            CommandDescriptor::public("clear", "clear the log")
        }

        fn render(
            &self,
            _args: &[String],
            _context: &RenderContext<'_>,
        ) -> Result<CommandOutput, ShellError> {
            Ok(CommandOutput::content(Vec::new()))
        }

        fn one_shot(&self, _args: &[String], _context: &RenderContext<'_>) -> Option<ShellEffect> {
            Some(ShellEffect::ClearLog)
        }
    }

    fn session(seed: &[&str]) -> ShellSession {
        let registry = CommandRegistry::new();
        registry.register(Rc::new(Clear));
        let config = ShellConfig {
            seed_commands: seed.iter().map(|line| line.to_string()).collect(),
            ..ShellConfig::default()
        };
        ShellSession::new(registry, &config)
    }

    #[test]
    fn seeded_entries_are_not_fresh() {
        let session = session(&["welcome", "about"]);
        assert_eq!(session.log(), ["welcome", "about"]);
        assert_eq!(session.fresh_index(), None);
        assert!(session.render_log().iter().all(|entry| !entry.fresh));
    }

    #[test]
    fn empty_submission_is_appended() {
        let mut session = session(&[]);
        assert!(session.submit().is_empty());
        assert_eq!(session.log(), [""]);
        assert_eq!(session.fresh_index(), Some(0));
    }

    #[test]
    fn clear_verb_empties_log_without_host_effect() {
        let mut session = session(&["welcome"]);
        session.set_input("clear");
        assert!(session.submit().is_empty());
        assert!(session.log().is_empty());
        assert_eq!(session.fresh_index(), None);
    }

    #[test]
    fn history_previous_clamps_at_oldest_entry() {
        let mut session = session(&["a", "b"]);
        session.history_previous();
        session.history_previous();
        session.history_previous();
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.input(), "a");
    }

    #[test]
    fn history_on_empty_log_is_ignored() {
        let mut session = session(&[]);
        session.history_previous();
        session.history_next();
        assert_eq!(session.cursor(), None);
        assert_eq!(session.input(), "");
    }

    #[test]
    fn history_next_without_cursor_keeps_buffer() {
        let mut session = session(&["a"]);
        session.set_input("draft");
        session.history_next();
        assert_eq!(session.input(), "draft");
    }

    #[test]
    fn browsing_past_a_cleared_log_ends_browsing() {
        let mut session = session(&["a", "b", "c"]);
        session.history_previous();
        session.handle_key(ShellKey::ClearScreen);
        assert_eq!(session.cursor(), Some(2));
        session.history_next();
        assert_eq!(session.cursor(), None);
        assert_eq!(session.input(), "");
    }

    #[test]
    fn other_keys_dismiss_hints() {
        let registry = CommandRegistry::new();
        registry.register(Rc::new(Clear));
        let mut session = ShellSession::new(registry.clone(), &ShellConfig::default());
        session.hints = vec![CompletionItem::plain("clear")];
        session.handle_key(ShellKey::Other);
        assert!(session.hints().is_empty());
    }
}
