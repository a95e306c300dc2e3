//! Verb registration and the renderer capability every verb implements.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use system_shell_contract::{
    CommandDescriptor, CommandOutput, CommandRegistrationToken, CompletionItem, ShellEffect,
    ShellError,
};

/// Read-only view of the log handed to renderers.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Full command log.
    pub log: &'a [String],
    /// Position of the entry being rendered.
    pub index: usize,
    /// Whether this entry was just submitted and may fire its one-time effect.
    pub fresh: bool,
    /// Registry the entry was resolved against.
    pub registry: &'a CommandRegistry,
}

impl RenderContext<'_> {
    /// Raw text of the entry being rendered.
    pub fn raw(&self) -> &str {
        self.log.get(self.index).map(String::as_str).unwrap_or_default()
    }
}

/// Capability implemented by every verb.
///
/// `render` must be pure: it is called again for every entry each time the log is displayed.
/// Side effects belong in [`ContentRenderer::one_shot`], which the dispatcher only calls for a
/// fresh entry that rendered successfully.
pub trait ContentRenderer {
    /// Registration metadata.
    fn descriptor(&self) -> CommandDescriptor;

    /// Renders the entry's output.
    fn render(
        &self,
        args: &[String],
        context: &RenderContext<'_>,
    ) -> Result<CommandOutput, ShellError>;

    /// Argument candidates for `verb args… partial`.
    fn complete_args(&self, _args: &[String], _partial: &str) -> Vec<CompletionItem> {
        Vec::new()
    }

    /// One-time side effect of a fresh, valid submission.
    fn one_shot(&self, _args: &[String], _context: &RenderContext<'_>) -> Option<ShellEffect> {
        None
    }
}

#[derive(Clone)]
struct RegisteredCommand {
    descriptor: CommandDescriptor,
    renderer: Rc<dyn ContentRenderer>,
}

#[derive(Default)]
struct RegistryState {
    next_token: u64,
    by_token: BTreeMap<CommandRegistrationToken, RegisteredCommand>,
}

/// Shared command registry. Clones share the same registrations.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a renderer under its descriptor's verb.
    ///
    /// A later registration of the same verb shadows earlier ones until it is unregistered.
    pub fn register(&self, renderer: Rc<dyn ContentRenderer>) -> CommandRegistrationToken {
        let mut state = self.state.borrow_mut();
        state.next_token = state.next_token.saturating_add(1);
        let token = CommandRegistrationToken(state.next_token);
        state.by_token.insert(
            token,
            RegisteredCommand {
                descriptor: renderer.descriptor(),
                renderer,
            },
        );
        token
    }

    /// Removes a previously registered command token.
    pub fn unregister(&self, token: CommandRegistrationToken) {
        self.state.borrow_mut().by_token.remove(&token);
    }

    /// Resolves a verb to its descriptor and renderer, hidden verbs included.
    pub fn resolve(&self, verb: &str) -> Option<(CommandDescriptor, Rc<dyn ContentRenderer>)> {
        self.state
            .borrow()
            .by_token
            .values()
            .rev()
            .find(|registered| registered.descriptor.name == verb)
            .map(|registered| (registered.descriptor.clone(), registered.renderer.clone()))
    }

    /// Public descriptors in registration order, shadowed duplicates removed.
    pub fn public_descriptors(&self) -> Vec<CommandDescriptor> {
        self.descriptors()
            .into_iter()
            .filter(CommandDescriptor::is_public)
            .collect()
    }

    /// All descriptors in registration order, shadowed duplicates removed.
    pub fn descriptors(&self) -> Vec<CommandDescriptor> {
        let state = self.state.borrow();
        let mut descriptors: Vec<CommandDescriptor> = Vec::new();
        for registered in state.by_token.values() {
            if let Some(existing) = descriptors
                .iter_mut()
                .find(|descriptor| descriptor.name == registered.descriptor.name)
            {
                *existing = registered.descriptor.clone();
            } else {
                descriptors.push(registered.descriptor.clone());
            }
        }
        descriptors
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.state.borrow().by_token.len()
    }

    /// Returns whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Fixed(CommandDescriptor);

    impl ContentRenderer for Fixed {
        fn descriptor(&self) -> CommandDescriptor {
            self.0.clone()
        }

        fn render(
            &self,
            _args: &[String],
            _context: &RenderContext<'_>,
        ) -> Result<CommandOutput, ShellError> {
            Ok(CommandOutput::text_lines([self.0.summary.clone()]))
        }
    }

    #[test]
    fn unregister_removes_registration() {
        let registry = CommandRegistry::new();
        let token = registry.register(Rc::new(Fixed(CommandDescriptor::public("about", "a"))));
        assert_eq!(registry.len(), 1);
        registry.unregister(token);
        assert!(registry.is_empty());
        assert!(registry.resolve("about").is_none());
    }

    #[test]
    fn hidden_verbs_resolve_but_are_not_public() {
        let registry = CommandRegistry::new();
        registry.register(Rc::new(Fixed(CommandDescriptor::public("about", "a"))));
        registry.register(Rc::new(Fixed(CommandDescriptor::hidden("sudo"))));
        assert!(registry.resolve("sudo").is_some());
        let names: Vec<String> = registry
            .public_descriptors()
            .into_iter()
            .map(|descriptor| descriptor.name)
            .collect();
        assert_eq!(names, vec!["about"]);
    }

    #[test]
    fn later_registration_shadows_in_place() {
        let registry = CommandRegistry::new();
        registry.register(Rc::new(Fixed(CommandDescriptor::public("about", "first"))));
        registry.register(Rc::new(Fixed(CommandDescriptor::public("help", "h"))));
        let token = registry.register(Rc::new(Fixed(CommandDescriptor::public("about", "second"))));

        let (descriptor, _) = registry.resolve("about").expect("about registered");
        assert_eq!(descriptor.summary, "second");
        let summaries: Vec<String> = registry
            .descriptors()
            .into_iter()
            .map(|descriptor| descriptor.summary)
            .collect();
        assert_eq!(summaries, vec!["second", "h"]);

        registry.unregister(token);
        let (descriptor, _) = registry.resolve("about").expect("about registered");
        assert_eq!(descriptor.summary, "first");
    }
}
