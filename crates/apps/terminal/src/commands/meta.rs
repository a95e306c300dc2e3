use system_shell::{ContentRenderer, RenderContext};
use system_shell_contract::{
    CommandDescriptor, CommandOutput, OutputLine, OutputSegment, ShellEffect, ShellError,
};

const KEY_BINDINGS: [&str; 4] = [
    "Tab or Ctrl + i  => autocompletes the command",
    "Up Arrow         => go back to previous command",
    "Ctrl + l         => clear the terminal",
    "Click on any command above to execute it",
];

pub struct Clear;

impl ContentRenderer for Clear {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public("clear", "clear the terminal")
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

/// Lists public verbs as replay links, followed by the key bindings.
pub struct Help;

impl ContentRenderer for Help {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public("help", "check available commands")
    }

    fn render(
        &self,
        _args: &[String],
        context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let descriptors = context.registry.public_descriptors();
        let width = descriptors
            .iter()
            .map(|descriptor| descriptor.name.len())
            .max()
            .unwrap_or_default();
        let mut lines: Vec<OutputLine> = descriptors
            .into_iter()
            .map(|descriptor| {
                let padding = " ".repeat(width - descriptor.name.len() + 2);
                OutputLine::from_segments(vec![
                    OutputSegment::replay(descriptor.name),
                    OutputSegment::text(format!("{padding}- {}", descriptor.summary)),
                ])
            })
            .collect();
        lines.push(OutputLine::default());
        lines.extend(KEY_BINDINGS.into_iter().map(OutputLine::text));
        Ok(CommandOutput::content(lines))
    }
}

/// Entries up to and including this one, newest first.
pub struct History;

impl ContentRenderer for History {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public("history", "view command history")
    }

    fn render(
        &self,
        _args: &[String],
        context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let end = (context.index + 1).min(context.log.len());
        let lines = context.log[..end]
            .iter()
            .rev()
            .map(|entry| OutputLine::from_segments(vec![OutputSegment::replay(entry.clone())]))
            .collect();
        Ok(CommandOutput::content(lines))
    }
}
