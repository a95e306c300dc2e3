/// Shell key bindings recognized by [`crate::ShellSession::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKey {
    /// Enter.
    Submit,
    /// Tab or Ctrl+I.
    Complete,
    /// Ctrl+L.
    ClearScreen,
    /// ArrowUp.
    HistoryPrevious,
    /// ArrowDown.
    HistoryNext,
    /// Any other key; dismisses the hint list.
    Other,
}

impl ShellKey {
    /// Maps a DOM `KeyboardEvent.key` value and the Ctrl modifier to a binding.
    pub fn from_key_event(key: &str, ctrl: bool) -> Self {
        match (key, ctrl) {
            ("Enter", _) => Self::Submit,
            ("Tab", _) => Self::Complete,
            ("i" | "I", true) => Self::Complete,
            ("l" | "L", true) => Self::ClearScreen,
            ("ArrowUp", _) => Self::HistoryPrevious,
            ("ArrowDown", _) => Self::HistoryNext,
            _ => Self::Other,
        }
    }

    /// Returns whether the browser's default action should be suppressed.
    pub fn consumes_default(self) -> bool {
        !matches!(self, Self::Other)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn maps_dom_keys() {
        assert_eq!(ShellKey::from_key_event("Tab", false), ShellKey::Complete);
        assert_eq!(ShellKey::from_key_event("i", true), ShellKey::Complete);
        assert_eq!(ShellKey::from_key_event("i", false), ShellKey::Other);
        assert_eq!(ShellKey::from_key_event("l", true), ShellKey::ClearScreen);
        assert_eq!(ShellKey::from_key_event("ArrowUp", false), ShellKey::HistoryPrevious);
        assert_eq!(ShellKey::from_key_event("ArrowDown", false), ShellKey::HistoryNext);
        assert_eq!(ShellKey::from_key_event("Enter", false), ShellKey::Submit);
        assert_eq!(ShellKey::from_key_event("a", false), ShellKey::Other);
    }

    #[test]
    fn only_bound_keys_suppress_default() {
        assert!(ShellKey::Complete.consumes_default());
        assert!(!ShellKey::Other.consumes_default());
    }
}
