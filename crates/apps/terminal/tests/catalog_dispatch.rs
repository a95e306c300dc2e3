use desktop_app_terminal::{builtin_session, TerminalContent};
use pretty_assertions::assert_eq;
use system_shell::ShellKey;
use system_shell_contract::{CompletionItem, OutputKind, OutputSegment, ShellEffect, UrlTarget};

fn submit(session: &mut system_shell::ShellSession, line: &str) -> Vec<ShellEffect> {
    session.set_input(line);
    session.handle_key(ShellKey::Submit)
}

fn last_output(session: &system_shell::ShellSession) -> (OutputKind, Vec<String>) {
    let entry = session
        .render_log()
        .pop()
        .expect("log has at least one entry");
    (entry.output.kind, entry.output.display_lines())
}

#[test]
fn seeded_entries_render_without_effects() {
    let session = builtin_session(TerminalContent::default());
    let rendered = session.render_log();
    assert_eq!(rendered.len(), 2);
    assert!(!rendered[0].output.display_lines()[0].is_empty());
    assert_eq!(
        rendered[1].output.display_lines()[0],
        "Hi, my name is Alex Doe."
    );
}

#[test]
fn e_prefix_lists_three_hints_and_keeps_buffer() {
    let mut session = builtin_session(TerminalContent::default());
    session.set_input("e");
    session.handle_key(ShellKey::Complete);
    assert_eq!(session.input(), "e");
    assert_eq!(
        session.hints(),
        [
            CompletionItem::plain("echo"),
            CompletionItem::plain("education"),
            CompletionItem::plain("email"),
        ]
    );
}

#[test]
fn hidden_verbs_are_never_completed() {
    let mut session = builtin_session(TerminalContent::default());
    session.set_input("neo");
    session.handle_key(ShellKey::Complete);
    assert_eq!(session.input(), "neo");
    assert!(session.hints().is_empty());
}

#[test]
fn projects_completion_walks_go_then_ids() {
    let mut session = builtin_session(TerminalContent::default());
    session.set_input("projects ");
    session.handle_key(ShellKey::Complete);
    assert_eq!(session.input(), "projects go");

    session.set_input("projects go ");
    session.handle_key(ShellKey::Complete);
    let labels: Vec<&str> = session
        .hints()
        .iter()
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(labels.len(), 4);
    assert_eq!(labels[0], "1. Blog");

    session.set_input("projects go 3");
    session.handle_key(ShellKey::Complete);
    assert_eq!(session.input(), "projects go 3");
    assert!(session.hints().is_empty());
}

#[test]
fn valid_project_opens_once_in_new_tab() {
    let content = TerminalContent::default();
    let url = content.projects[1].url.clone();
    let mut session = builtin_session(content);

    let effects = submit(&mut session, "projects go 2");
    assert_eq!(
        effects,
        vec![ShellEffect::OpenUrl {
            url,
            target: UrlTarget::NewTab,
        }]
    );

    // Later submissions re-render the entry without repeating its effect.
    assert!(submit(&mut session, "pwd").is_empty());
    let rendered = session.render_log();
    assert_eq!(rendered[2].raw, "projects go 2");
    assert!(!rendered[2].fresh);
}

#[test]
fn invalid_project_id_renders_usage_with_example_and_no_effect() {
    let mut session = builtin_session(TerminalContent::default());
    assert!(submit(&mut session, "projects go 9").is_empty());
    let (kind, lines) = last_output(&session);
    assert_eq!(kind, OutputKind::Usage);
    assert_eq!(
        lines,
        vec!["Usage: projects go <project-no>", "eg: projects go 4"]
    );

    let entry = session.render_log().pop().expect("entry");
    assert_eq!(
        entry.output.lines[1].segments[1],
        OutputSegment::Replay {
            label: "projects go 4".to_string(),
            command: "projects go 4".to_string(),
        }
    );
}

#[test]
fn socials_usage_uses_social_placeholder() {
    let mut session = builtin_session(TerminalContent::default());
    submit(&mut session, "socials open");
    let (_, lines) = last_output(&session);
    assert_eq!(lines, vec!["Usage: socials go <social-no>", "eg: socials go 1"]);
}

#[test]
fn non_argument_verb_with_args_renders_generic_usage() {
    let mut session = builtin_session(TerminalContent::default());
    assert!(submit(&mut session, "email now").is_empty());
    let (kind, lines) = last_output(&session);
    assert_eq!(kind, OutputKind::Usage);
    assert_eq!(lines, vec!["Usage: email"]);
}

#[test]
fn email_opens_mailto_in_same_tab() {
    let mut session = builtin_session(TerminalContent::default());
    assert_eq!(
        submit(&mut session, "email"),
        vec![ShellEffect::OpenUrl {
            url: "mailto:hello@example.dev".to_string(),
            target: UrlTarget::SameTab,
        }]
    );
}

#[test]
fn resume_opens_document_path() {
    let mut session = builtin_session(TerminalContent::with_resume_path("/docs/cv.pdf"));
    assert_eq!(
        submit(&mut session, "resume"),
        vec![ShellEffect::open_new_tab("/docs/cv.pdf")]
    );
}

#[test]
fn replaying_from_help_dispatches_like_typing() {
    let mut session = builtin_session(TerminalContent::default());
    submit(&mut session, "help");
    let help = session.render_log().pop().expect("help entry");
    let first = &help.output.lines[0].segments[0];
    let OutputSegment::Replay { command, .. } = first else {
        panic!("help should start with a replay link, got {first:?}");
    };
    assert_eq!(command, "about");
    assert!(session.replay(command).is_empty());
    assert_eq!(session.log().last().map(String::as_str), Some("about"));
}

#[test]
fn help_omits_hidden_verbs_and_lists_key_bindings() {
    let mut session = builtin_session(TerminalContent::default());
    submit(&mut session, "help");
    let (_, lines) = last_output(&session);
    assert_eq!(lines.len(), 13 + 1 + 4);
    assert!(lines.iter().all(|line| !line.starts_with("sudo")));
    assert!(lines[0].starts_with("about"));
    assert!(lines[0].ends_with("- about Alex Doe"));
    assert_eq!(lines[17], "Click on any command above to execute it");
}

#[test]
fn history_lists_newest_first_up_to_its_entry() {
    let mut session = builtin_session(TerminalContent::default());
    submit(&mut session, "pwd");
    submit(&mut session, "history");
    submit(&mut session, "whoami");
    let rendered = session.render_log();
    assert_eq!(
        rendered[3].output.display_lines(),
        vec!["history", "pwd", "about", "welcome"]
    );
}

#[test]
fn clear_empties_the_log() {
    let mut session = builtin_session(TerminalContent::default());
    assert!(submit(&mut session, "clear").is_empty());
    assert!(session.log().is_empty());
    assert!(session.render_log().is_empty());
}

#[test]
fn echo_joins_arguments() {
    let mut session = builtin_session(TerminalContent::default());
    submit(&mut session, "echo  hello   world ");
    assert_eq!(last_output(&session).1, vec!["hello world"]);
}

#[test]
fn sudo_with_arguments_renders_usage() {
    let mut session = builtin_session(TerminalContent::default());
    submit(&mut session, "sudo rm");
    assert_eq!(
        last_output(&session),
        (OutputKind::Usage, vec!["Usage: sudo".to_string()])
    );
}

#[test]
fn bare_sudo_renders_the_easter_egg() {
    let mut session = builtin_session(TerminalContent::default());
    submit(&mut session, "sudo");
    let (kind, lines) = last_output(&session);
    assert_eq!(kind, OutputKind::Content);
    assert_eq!(lines[0], "sudo: command not found");
    assert_eq!(lines.len(), 3);
}

#[test]
fn unknown_verb_echoes_raw_line() {
    let mut session = builtin_session(TerminalContent::default());
    submit(&mut session, "foo bar");
    assert_eq!(
        last_output(&session),
        (OutputKind::NotFound, vec!["command not found: foo bar".to_string()])
    );
}

#[test]
fn whoami_and_pwd_follow_shell_config() {
    let mut session = builtin_session(TerminalContent::default());
    submit(&mut session, "whoami");
    assert_eq!(last_output(&session).1, vec!["visitor"]);
    submit(&mut session, "pwd");
    assert_eq!(last_output(&session).1, vec!["/home/visitor"]);
}
