//! Terminal desktop app: the content renderers behind every shell verb and the Leptos component
//! that binds a [`ShellSession`] to the DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod commands;

use std::rc::Rc;

use leptos::ev::KeyboardEvent;
use leptos::*;
use system_shell::{CommandRegistry, RenderedEntry, ShellKey, ShellSession};
use system_shell_contract::{OutputKind, OutputLine, OutputSegment, ShellEffect, UrlTarget};

pub use commands::{register_builtin_commands, EducationEntry, LinkEntry, TerminalContent};

/// DOM id of the terminal prompt input; the desktop focuses it when the window gains focus.
pub const TERMINAL_INPUT_DOM_ID: &str = "terminal-input";

/// Builds a session with every built-in verb registered.
pub fn builtin_session(content: TerminalContent) -> ShellSession {
    let registry = CommandRegistry::new();
    let config = content.shell.clone();
    register_builtin_commands(&registry, Rc::new(content));
    ShellSession::new(registry, &config)
}

fn link_target(url: &str) -> UrlTarget {
    if url.starts_with("mailto:") {
        UrlTarget::SameTab
    } else {
        UrlTarget::NewTab
    }
}

fn output_class(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Blank => "terminal-output terminal-output-blank",
        OutputKind::Content => "terminal-output",
        OutputKind::Usage => "terminal-output terminal-output-usage",
        OutputKind::NotFound => "terminal-output terminal-output-not-found",
    }
}

fn render_segment(
    segment: OutputSegment,
    replay: Callback<String>,
    on_effect: Callback<ShellEffect>,
) -> View {
    match segment {
        OutputSegment::Text { text } => view! { <span>{text}</span> }.into_view(),
        OutputSegment::Highlight { text } => {
            view! { <span class="terminal-highlight">{text}</span> }.into_view()
        }
        OutputSegment::Replay { label, command } => view! {
            <button
                type="button"
                class="terminal-replay"
                on:click=move |_| replay.call(command.clone())
            >
                {label}
            </button>
        }
        .into_view(),
        OutputSegment::Link { label, url } => {
            let href = url.clone();
            view! {
                <a
                    class="terminal-link"
                    href=href
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_effect.call(ShellEffect::OpenUrl {
                            url: url.clone(),
                            target: link_target(&url),
                        });
                    }
                >
                    {label}
                </a>
            }
            .into_view()
        }
    }
}

fn render_line(
    line: OutputLine,
    replay: Callback<String>,
    on_effect: Callback<ShellEffect>,
) -> impl IntoView {
    view! {
        <div class="terminal-line">
            {line
                .segments
                .into_iter()
                .map(|segment| render_segment(segment, replay, on_effect))
                .collect_view()}
        </div>
    }
}

#[component]
/// Terminal app window contents.
///
/// Keystrokes on the prompt input are mapped through [`ShellKey`]; effects produced by a fresh
/// submission, and by clicking a rendered link, are forwarded to `on_effect`.
pub fn TerminalApp(
    /// Profile text and shell configuration.
    content: TerminalContent,
    /// Receives URL-opening intents for the host to execute.
    on_effect: Callback<ShellEffect>,
) -> impl IntoView {
    let prompt = content.shell.prompt();
    let input_prompt = prompt.clone();
    let session = create_rw_signal(builtin_session(content));
    let entries = create_memo(move |_| session.with(ShellSession::render_log));
    let hints = create_memo(move |_| session.with(|session| session.hints().to_vec()));
    let screen_ref = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    let forward = move |effects: Vec<ShellEffect>| {
        for effect in effects {
            on_effect.call(effect);
        }
    };
    let replay = Callback::new(move |command: String| {
        let mut effects = Vec::new();
        session.update(|session| effects = session.replay(&command));
        forward(effects);
    });

    create_effect(move |_| {
        entries.with(|_| ());
        if let Some(screen) = screen_ref.get() {
            screen.set_scroll_top(screen.scroll_height());
        }
    });

    let render_entry = move |entry: RenderedEntry| {
        let prompt = prompt.clone();
        let class = output_class(entry.output.kind);
        view! {
            <div class="terminal-entry" class:terminal-entry-fresh=entry.fresh>
                <div class="terminal-entry-prompt">
                    <span class="terminal-prompt">{prompt}</span>
                    " "
                    <span class="terminal-command">{entry.raw}</span>
                </div>
                <div class=class>
                    {entry
                        .output
                        .lines
                        .into_iter()
                        .map(|line| render_line(line, replay, on_effect))
                        .collect_view()}
                </div>
            </div>
        }
    };

    view! {
        <div
            class="app-shell app-terminal-shell"
            on:click=move |_| {
                if let Some(input) = input_ref.get() {
                    let _ = input.focus();
                }
            }
        >
            <div class="terminal-screen" role="log" aria-live="polite" node_ref=screen_ref>
                {move || entries.get().into_iter().map(render_entry.clone()).collect_view()}
            </div>

            <Show when=move || { hints.with(|hints| hints.len() > 1) } fallback=|| ()>
                <div class="terminal-completions" role="listbox" aria-label="Completions">
                    <For each=move || hints.get() key=|item| item.value.clone() let:item>
                        <span class="terminal-completion" role="option">{item.label}</span>
                    </For>
                </div>
            </Show>

            <div class="terminal-input-row">
                <label class="terminal-prompt" for=TERMINAL_INPUT_DOM_ID>
                    {input_prompt}
                </label>
                <input
                    id=TERMINAL_INPUT_DOM_ID
                    class="terminal-input app-field"
                    type="text"
                    node_ref=input_ref
                    prop:value=move || session.with(|session| session.input().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|session| session.set_input(value));
                    }
                    on:keydown=move |ev: KeyboardEvent| {
                        let key = ShellKey::from_key_event(&ev.key(), ev.ctrl_key());
                        if key.consumes_default() {
                            ev.prevent_default();
                        }
                        let mut effects = Vec::new();
                        session.update(|session| effects = session.handle_key(key));
                        forward(effects);
                    }
                    autocomplete="off"
                    autocapitalize="off"
                    spellcheck="false"
                    autofocus=true
                />
            </div>

            <div class="app-statusbar">
                <span>"Shell ready"</span>
                <span>{move || format!("{} entries", entries.with(Vec::len))}</span>
            </div>
        </div>
    }
}
