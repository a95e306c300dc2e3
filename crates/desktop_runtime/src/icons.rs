//! Icon catalog for the desktop shell.
//!
//! Shell components refer to icons by [`IconName`] and render them through [`FluentIcon`]. The
//! document, terminal, and window-control glyphs use Fluent UI System Icons (regular 24px).

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Browser window and shortcut.
    Globe,
    /// Terminal window and shortcut.
    Terminal,
    /// Resume window and shortcut.
    DocumentText,
    /// External link shortcut.
    Link,
    /// Enter fullscreen.
    FullScreenMaximize,
    /// Leave fullscreen.
    FullScreenMinimize,
    /// Window minimize control icon.
    WindowMinimize,
    /// Window maximize control icon.
    WindowMaximize,
    /// Window restore control icon.
    WindowRestore,
    /// Dismiss/close icon.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Globe => "globe",
            Self::Terminal => "terminal",
            Self::DocumentText => "document-text",
            Self::Link => "link",
            Self::FullScreenMaximize => "full-screen-maximize",
            Self::FullScreenMinimize => "full-screen-minimize",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Resolves a shortcut icon key from the window catalog. Unknown keys render as links.
    pub fn from_shortcut_key(key: &str) -> Self {
        match key {
            "browser" => Self::Globe,
            "terminal" => Self::Terminal,
            "document" | "resume" => Self::DocumentText,
            _ => Self::Link,
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Globe => {
                r#"<path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Zm6.92 6h-3.04a15.7 15.7 0 0 0-1.3-4.03A8.53 8.53 0 0 1 18.92 8ZM12 3.55c.78 1.03 1.5 2.56 1.9 4.45h-3.8c.4-1.89 1.12-3.42 1.9-4.45ZM3.68 13.5a8.6 8.6 0 0 1 0-3h3.39a17.8 17.8 0 0 0 0 3H3.68Zm1.4 2.5h3.04c.29 1.52.74 2.9 1.3 4.03A8.53 8.53 0 0 1 5.08 16Zm3.04-8H5.08a8.53 8.53 0 0 1 4.34-4.03A15.7 15.7 0 0 0 8.12 8ZM12 20.45c-.78-1.03-1.5-2.56-1.9-4.45h3.8c-.4 1.89-1.12 3.42-1.9 4.45Zm2.14-6.95H9.86a16 16 0 0 1 0-3h4.28a16 16 0 0 1 0 3Zm.44 6.53c.56-1.13 1.01-2.51 1.3-4.03h3.04a8.53 8.53 0 0 1-4.34 4.03Zm2.35-6.53a17.8 17.8 0 0 0 0-3h3.39a8.6 8.6 0 0 1 0 3h-3.39Z"/>"#
            }
            Self::Terminal => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v5.66a1.4 1.4 0 0 0-.99-.8 5.08 5.08 0 0 0-.51-.08V8.5h-15v9.25c0 .97.78 1.75 1.75 1.75h5.68l-.19.19c-.37.37-.6.83-.7 1.31H6.25A3.25 3.25 0 0 1 3 17.75V6.25Zm13 5.68-1.72-1.71a.75.75 0 1 0-1.06 1.06l1.7 1.7a5.12 5.12 0 0 1 1.07-1.05ZM4.5 7h15v-.75c0-.97-.78-1.75-1.75-1.75H6.25c-.97 0-1.75.78-1.75 1.75V7Zm6.28 4.28a.75.75 0 1 0-1.06-1.06l-3 3c-.3.3-.3.77 0 1.06l3 3a.75.75 0 1 0 1.06-1.06l-2.47-2.47 2.47-2.47Zm9.02.81c.35.08.44.51.18.77l-1.9 1.9a1.53 1.53 0 0 0 2.16 2.16l1.9-1.9c.26-.26.69-.17.77.18a4.07 4.07 0 0 1-5.57 4.62l-2.73 2.73a1.53 1.53 0 0 1-2.16-2.16l2.73-2.73a4.07 4.07 0 0 1 4.62-5.57Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Link => {
                r#"<path d="M9.25 7a.75.75 0 0 1 0 1.5H7a3.5 3.5 0 0 0 0 7h2.25a.75.75 0 0 1 0 1.5H7A5 5 0 0 1 7 7h2.25ZM17 7a5 5 0 0 1 0 10h-2.25a.75.75 0 0 1 0-1.5H17a3.5 3.5 0 0 0 0-7h-2.25a.75.75 0 0 1 0-1.5H17Zm-9 4.25h8a.75.75 0 0 1 0 1.5H8a.75.75 0 0 1 0-1.5Z"/>"#
            }
            Self::FullScreenMaximize => {
                r#"<path d="M4.5 4.5h4.75a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0-.75.75v5.5a.75.75 0 0 0 1.5 0V4.5Zm10.25-1.5a.75.75 0 0 0 0 1.5h4.75v4.75a.75.75 0 0 0 1.5 0v-5.5a.75.75 0 0 0-.75-.75h-5.5ZM4.5 14.75a.75.75 0 0 0-1.5 0v5.5c0 .41.34.75.75.75h5.5a.75.75 0 0 0 0-1.5H4.5v-4.75Zm16.5 0a.75.75 0 0 0-1.5 0v4.75h-4.75a.75.75 0 0 0 0 1.5h5.5c.41 0 .75-.34.75-.75v-5.5Z"/>"#
            }
            Self::FullScreenMinimize => {
                r#"<path d="M9.5 3.75a.75.75 0 0 0-1.5 0V8H3.75a.75.75 0 0 0 0 1.5h5c.41 0 .75-.34.75-.75v-5Zm6.5 0a.75.75 0 0 0-1.5 0v5c0 .41.34.75.75.75h5a.75.75 0 0 0 0-1.5H16V3.75ZM3.75 14.5a.75.75 0 0 0 0 1.5H8v4.25a.75.75 0 0 0 1.5 0v-5a.75.75 0 0 0-.75-.75h-5Zm11.5 0a.75.75 0 0 0-.75.75v5a.75.75 0 0 0 1.5 0V16h4.25a.75.75 0 0 0 0-1.5h-5Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls).
    Xs,
    /// 16px standard icon (titlebar controls).
    #[default]
    Sm,
    /// 20px medium icon (window chrome / prominent controls).
    Md,
    /// 24px large icon (desktop launchers).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a Fluent UI System Icon SVG from the centralized shell icon catalog.
pub fn FluentIcon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
