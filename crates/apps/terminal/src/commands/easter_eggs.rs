//! Hidden verbs. Callable, never listed by `help` or offered by completion.

use system_shell::{ContentRenderer, RenderContext};
use system_shell_contract::{CommandDescriptor, CommandOutput, ShellError};

pub struct Sudo;

impl ContentRenderer for Sudo {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::hidden("sudo")
    }

    fn render(
        &self,
        _args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text_lines([
            "sudo: command not found".to_string(),
            "Hint: sudo: unable to resolve host desktop: Name or service not known".to_string(),
            "Hint: you are already root".to_string(),
        ]))
    }
}

pub struct Neofetch;

impl ContentRenderer for Neofetch {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::hidden("neofetch")
    }

    fn render(
        &self,
        _args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text_lines([
            "desktop 2024.2",
            "Kernel: 6.5.0-amd64",
            "Shell: bash 5.2.15",
            "Resolution: 1920x1080",
            "DE: XFCE",
            "WM: Xfwm4",
            "CPU: Intel i7-9750H (12) @ 4.5GHz",
            "Memory: 2.1GiB / 16GiB",
        ]))
    }
}

pub struct Uname;

impl ContentRenderer for Uname {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::hidden("uname")
    }

    fn render(
        &self,
        _args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text_lines(["Linux"]))
    }
}

pub struct Ls;

impl ContentRenderer for Ls {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::hidden("ls")
    }

    fn render(
        &self,
        _args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text_lines([
            "Desktop Documents Downloads Music Pictures Public Templates Videos",
        ]))
    }
}
