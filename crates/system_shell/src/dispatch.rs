//! Dispatch policy mapping one log entry to rendered output.

use system_shell_contract::{CommandOutput, ParsedCommand, ShellEffect, ShellError};

use crate::registry::{CommandRegistry, RenderContext};

/// Result of dispatching one log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Rendered output.
    pub output: CommandOutput,
    /// One-time effect; only ever present for a fresh entry that rendered successfully.
    pub effect: Option<ShellEffect>,
}

impl DispatchOutcome {
    fn output(output: CommandOutput) -> Self {
        Self {
            output,
            effect: None,
        }
    }
}

/// Dispatches `log[index]`.
///
/// Blank entries render a blank placeholder, unknown verbs a not-found line, and verbs outside
/// the argument allowlist a `Usage: <verb>` line whenever arguments are present. Everything else
/// is delegated to the verb's renderer, which validates its own arguments.
pub fn dispatch_entry(
    registry: &CommandRegistry,
    log: &[String],
    index: usize,
    fresh: bool,
) -> DispatchOutcome {
    let Some(raw) = log.get(index) else {
        return DispatchOutcome::output(CommandOutput::blank());
    };
    let parsed = ParsedCommand::parse(raw);
    if parsed.is_blank() {
        return DispatchOutcome::output(CommandOutput::blank());
    }
    let Some((descriptor, renderer)) = registry.resolve(&parsed.verb) else {
        return DispatchOutcome::output(CommandOutput::not_found(raw));
    };
    if !descriptor.accepts_args && !parsed.args.is_empty() {
        let usage = ShellError::usage(format!("Usage: {}", descriptor.name));
        return DispatchOutcome::output(usage.into_output());
    }

    let context = RenderContext {
        log,
        index,
        fresh,
        registry,
    };
    match renderer.render(&parsed.args, &context) {
        Ok(output) => DispatchOutcome {
            effect: if fresh {
                renderer.one_shot(&parsed.args, &context)
            } else {
                None
            },
            output,
        },
        Err(error) => DispatchOutcome::output(error.into_output()),
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;
    use system_shell_contract::{CommandDescriptor, OutputKind};

    use super::*;
    use crate::registry::ContentRenderer;

    struct Counting {
        descriptor: CommandDescriptor,
        one_shots: Rc<Cell<usize>>,
    }

    impl ContentRenderer for Counting {
        fn descriptor(&self) -> CommandDescriptor {
            self.descriptor.clone()
        }

        fn render(
            &self,
            args: &[String],
            _context: &RenderContext<'_>,
        ) -> Result<CommandOutput, ShellError> {
            if args.first().map(String::as_str) == Some("bad") {
                return Err(ShellError::usage("Usage: open go <id>"));
            }
            Ok(CommandOutput::text_lines(["ok"]))
        }

        fn one_shot(&self, _args: &[String], _context: &RenderContext<'_>) -> Option<ShellEffect> {
            self.one_shots.set(self.one_shots.get() + 1);
            Some(ShellEffect::open_new_tab("https://example.com"))
        }
    }

    fn registry_with(descriptor: CommandDescriptor) -> (CommandRegistry, Rc<Cell<usize>>) {
        let registry = CommandRegistry::new();
        let one_shots = Rc::new(Cell::new(0));
        registry.register(Rc::new(Counting {
            descriptor,
            one_shots: one_shots.clone(),
        }));
        (registry, one_shots)
    }

    fn log(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn blank_entry_renders_placeholder() {
        let (registry, _) = registry_with(CommandDescriptor::public("about", "a"));
        let outcome = dispatch_entry(&registry, &log(&["   "]), 0, true);
        assert_eq!(outcome.output, CommandOutput::blank());
        assert_eq!(outcome.effect, None);
    }

    #[test]
    fn unknown_verb_echoes_raw_line() {
        let (registry, _) = registry_with(CommandDescriptor::public("about", "a"));
        let outcome = dispatch_entry(&registry, &log(&["foo bar"]), 0, false);
        assert_eq!(outcome.output.kind, OutputKind::NotFound);
        assert_eq!(
            outcome.output.display_lines(),
            vec!["command not found: foo bar"]
        );
    }

    #[test]
    fn non_argument_verb_with_args_gets_usage_and_no_effect() {
        let (registry, one_shots) = registry_with(CommandDescriptor::public("about", "a"));
        let outcome = dispatch_entry(&registry, &log(&["about extra"]), 0, true);
        assert_eq!(outcome.output.kind, OutputKind::Usage);
        assert_eq!(outcome.output.display_lines(), vec!["Usage: about"]);
        assert_eq!(outcome.effect, None);
        assert_eq!(one_shots.get(), 0);
    }

    #[test]
    fn renderer_usage_error_suppresses_one_shot() {
        let (registry, one_shots) =
            registry_with(CommandDescriptor::public("open", "o").with_args());
        let outcome = dispatch_entry(&registry, &log(&["open bad"]), 0, true);
        assert_eq!(outcome.output.kind, OutputKind::Usage);
        assert_eq!(one_shots.get(), 0);
    }

    #[test]
    fn one_shot_only_fires_for_fresh_entries() {
        let (registry, one_shots) =
            registry_with(CommandDescriptor::public("open", "o").with_args());
        let entries = log(&["open go 1"]);

        let stale = dispatch_entry(&registry, &entries, 0, false);
        assert_eq!(stale.effect, None);
        assert_eq!(one_shots.get(), 0);

        let fresh = dispatch_entry(&registry, &entries, 0, true);
        assert_eq!(
            fresh.effect,
            Some(ShellEffect::open_new_tab("https://example.com"))
        );
        assert_eq!(one_shots.get(), 1);
    }

    #[test]
    fn out_of_range_index_renders_blank() {
        let (registry, _) = registry_with(CommandDescriptor::public("about", "a"));
        let outcome = dispatch_entry(&registry, &[], 3, true);
        assert_eq!(outcome.output, CommandOutput::blank());
    }
}
