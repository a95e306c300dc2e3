use std::rc::Rc;

use system_shell::{ContentRenderer, RenderContext};
use system_shell_contract::{
    CommandDescriptor, CommandOutput, OutputLine, OutputSegment, ShellError,
};

use super::TerminalContent;

pub struct About(pub Rc<TerminalContent>);

impl ContentRenderer for About {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public("about", format!("about {}", self.0.owner_name))
    }

    fn render(
        &self,
        _args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let mut lines = vec![
            OutputLine::from_segments(vec![
                OutputSegment::text("Hi, my name is "),
                OutputSegment::highlight(self.0.owner_name.clone()),
                OutputSegment::text("."),
            ]),
            OutputLine::from_segments(vec![
                OutputSegment::text("I'm a "),
                OutputSegment::highlight(self.0.headline.clone()),
                OutputSegment::text("."),
            ]),
        ];
        lines.extend(self.0.about.iter().map(OutputLine::text));
        Ok(CommandOutput::content(lines))
    }
}

pub struct Echo;

impl ContentRenderer for Echo {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public("echo", "print out anything").with_args()
    }

    fn render(
        &self,
        args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text_lines([args.join(" ")]))
    }
}

pub struct Education(pub Rc<TerminalContent>);

impl ContentRenderer for Education {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public("education", "my education background")
    }

    fn render(
        &self,
        _args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let mut lines = vec![OutputLine::text("Here is my education background!")];
        for entry in &self.0.education {
            lines.push(OutputLine::from_segments(vec![OutputSegment::highlight(
                entry.title.clone(),
            )]));
            lines.push(OutputLine::text(entry.detail.clone()));
        }
        Ok(CommandOutput::content(lines))
    }
}

pub struct Pwd(pub Rc<TerminalContent>);

impl ContentRenderer for Pwd {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public("pwd", "print current working directory")
    }

    fn render(
        &self,
        _args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text_lines([self.0.shell.home_dir.clone()]))
    }
}

pub struct Welcome(pub Rc<TerminalContent>);

impl ContentRenderer for Welcome {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public("welcome", "display hero section")
    }

    fn render(
        &self,
        _args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        let mut lines: Vec<OutputLine> = self.0.banner.iter().map(OutputLine::text).collect();
        lines.push(OutputLine::from_segments(vec![
            OutputSegment::text("For a list of available commands, type `"),
            OutputSegment::replay("help"),
            OutputSegment::text("`."),
        ]));
        Ok(CommandOutput::content(lines))
    }
}

pub struct Whoami(pub Rc<TerminalContent>);

impl ContentRenderer for Whoami {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::public("whoami", "about current user")
    }

    fn render(
        &self,
        _args: &[String],
        _context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text_lines([self.0.shell.prompt_user.clone()]))
    }
}
