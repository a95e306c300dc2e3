//! Headless command shell: registry-backed verb dispatch, prefix completion, and a session model
//! holding the command log, input buffer, history cursor, and hint list.
//!
//! The crate has no UI dependencies. The terminal app owns a [`ShellSession`] and renders its
//! [`ShellSession::render_log`] output; side-effect intents leave the session as
//! [`system_shell_contract::ShellEffect`] values for the host to execute.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod completion;
mod dispatch;
mod keymap;
mod registry;
mod session;

use serde::{Deserialize, Serialize};

pub use completion::{complete_line, Completion};
pub use dispatch::{dispatch_entry, DispatchOutcome};
pub use keymap::ShellKey;
pub use registry::{CommandRegistry, ContentRenderer, RenderContext};
pub use session::{RenderedEntry, ShellSession};

/// Session configuration for the terminal shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Entries placed in the log before any user input. They render but never fire effects.
    pub seed_commands: Vec<String>,
    /// User name shown in the prompt.
    pub prompt_user: String,
    /// Host name shown in the prompt.
    pub prompt_host: String,
    /// Logical working directory reported by `pwd`.
    pub home_dir: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed_commands: vec!["welcome".to_string(), "about".to_string()],
            prompt_user: "visitor".to_string(),
            prompt_host: "desktop".to_string(),
            home_dir: "/home/visitor".to_string(),
        }
    }
}

impl ShellConfig {
    /// Prompt prefix rendered before every log entry and the live input.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", self.prompt_user, self.prompt_host)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_seeds_welcome_then_about() {
        let config = ShellConfig::default();
        assert_eq!(config.seed_commands, vec!["welcome", "about"]);
        assert_eq!(config.prompt(), "visitor@desktop:~$");
    }
}
