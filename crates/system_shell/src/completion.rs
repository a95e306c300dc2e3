//! Tab completion over registered verbs and verb arguments.

use system_shell_contract::CompletionItem;

use crate::registry::CommandRegistry;

/// Outcome of one completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// No candidate, or nothing to complete.
    Unchanged,
    /// Exactly one candidate; the input line becomes this value.
    Replace(String),
    /// Several candidates to show below the prompt.
    Hints(Vec<CompletionItem>),
}

/// Cursor position inside an argument: `verb args… partial`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ArgumentPosition {
    verb: String,
    args: Vec<String>,
    partial: String,
}

impl ArgumentPosition {
    fn locate(line: &str) -> Option<Self> {
        let line = line.trim_start();
        let split = line.find(char::is_whitespace)?;
        let (verb, rest) = line.split_at(split);
        let mut args: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
        let partial = if rest.ends_with(char::is_whitespace) {
            String::new()
        } else {
            args.pop().unwrap_or_default()
        };
        Some(Self {
            verb: verb.to_string(),
            args,
            partial,
        })
    }

    fn replace_partial(&self, value: &str) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        parts.push(self.verb.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.push(value);
        parts.join(" ")
    }
}

/// Completes `line` against public verb names and the matched verb's argument hook.
///
/// Verb matching is a case-sensitive prefix test. An empty line never completes.
pub fn complete_line(registry: &CommandRegistry, line: &str) -> Completion {
    if line.is_empty() {
        return Completion::Unchanged;
    }

    let mut candidates: Vec<CompletionItem> = registry
        .public_descriptors()
        .into_iter()
        .filter(|descriptor| descriptor.name.starts_with(line))
        .map(|descriptor| CompletionItem::plain(descriptor.name))
        .collect();

    let position = ArgumentPosition::locate(line);
    if let Some(position) = &position {
        if let Some((_, renderer)) = registry.resolve(&position.verb) {
            candidates.extend(renderer.complete_args(&position.args, &position.partial));
        }
    }

    match candidates.len() {
        0 => Completion::Unchanged,
        1 => {
            let only = candidates.remove(0);
            match position {
                Some(position) => Completion::Replace(position.replace_partial(&only.value)),
                None => Completion::Replace(only.value),
            }
        }
        _ => Completion::Hints(candidates),
    }
}
