// tests/session_tests.rs

use std::io::Cursor;
use std::io::Write;

use stepwalker::Guide;
use stepwalker::cli::{self, CliError, Command, Session, SessionEnd, SessionOptions};
use tempfile::NamedTempFile;

fn run_session(guide: Guide, input: &str) -> (SessionEnd, isize, String) {
    let mut session = Session::new(guide, Vec::new(), SessionOptions::default()).unwrap();
    let end = session.run(Cursor::new(input)).unwrap();
    let cursor = session.walker().cursor();
    let out = String::from_utf8(session.into_output()).unwrap();
    (end, cursor, out)
}

// ============================================================================
// Command Parsing
// ============================================================================

#[test]
fn test_parse_next_keywords() {
    for input in ["", "   ", "next", "Suivant", "ok", "c'est fait", "Terminé", "TERMINÉ"] {
        assert_eq!(Command::parse(input), Command::Next, "input: {:?}", input);
    }
}

#[test]
fn test_parse_other_commands() {
    let test_cases = vec![
        ("guide", Command::Outline),
        ("montre le parcours", Command::Outline),
        ("étapes", Command::Outline),
        ("aide pour le guide", Command::Outline),
        ("ok, où suis-je ?", Command::Progress),
        ("ok aide", Command::Next),
        ("où suis-je ?", Command::Progress),
        ("état", Command::Progress),
        ("progress", Command::Progress),
        ("quelle étape ?", Command::Progress),
        ("aide", Command::Help),
        ("HELP", Command::Help),
        ("q", Command::Quit),
        ("exit", Command::Quit),
    ];

    for (input, expected) in test_cases {
        assert_eq!(Command::parse(input), expected, "input: {:?}", input);
    }
}

#[test]
fn test_parse_unknown() {
    assert_eq!(
        Command::parse("  bonjour  "),
        Command::Unknown("bonjour".to_string())
    );
    // keywords only match whole words
    assert_eq!(Command::parse("book"), Command::Unknown("book".to_string()));
}

// ============================================================================
// Session Loop
// ============================================================================

#[test]
fn test_session_walks_to_completion() {
    let (end, cursor, out) = run_session(Guide::builtin(), "\n\n\n\n\n\n");

    assert_eq!(end, SessionEnd::Completed);
    assert_eq!(cursor, 5);
    assert!(out.contains("Étape 1 : Ouvre PowerShell."));
    assert!(out.contains("Étape 5 : Connecte-toi à GitHub"));
    assert!(out.contains("🎉 Félicitations ! Tu es prêt à coder sur Pi Network."));
    assert!(out.contains("[ ✅ Terminé ]"));
}

#[test]
fn test_session_stops_reading_after_completion() {
    let (end, cursor, out) = run_session(Guide::builtin(), "\n\n\n\n\n\naide\n");

    assert_eq!(end, SessionEnd::Completed);
    assert_eq!(cursor, 5);
    assert!(!out.contains("COMMANDES DISPONIBLES"));
}

#[test]
fn test_session_end_of_input() {
    let (end, cursor, out) = run_session(Guide::builtin(), "suivant\nsuivant\n");

    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(cursor, 1);
    assert!(out.contains("Étape 2 : Tape 'cd Documents'"));
    assert!(!out.contains("Étape 3"));
}

#[test]
fn test_session_quit() {
    let (end, cursor, _) = run_session(Guide::builtin(), "\nq\n\n");
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(cursor, 0);
}

#[test]
fn test_session_progress_and_outline() {
    let (_, _, out) = run_session(Guide::builtin(), "\n\noù suis-je\nguide\n");

    assert!(out.contains("📍 Progression : 2/5"));
    assert!(out.contains("   ✅ Étape 1 : Ouvre PowerShell."));
    assert!(out.contains("   🟡 Étape 2 : Tape 'cd Documents'"));
    assert!(out.contains("   ⚪ Étape 3"));
}

#[test]
fn test_session_help_and_unknown() {
    let (_, cursor, out) = run_session(Guide::builtin(), "aide\nbonjour\n");

    assert_eq!(cursor, -1);
    assert!(out.contains("COMMANDES DISPONIBLES"));
    assert!(out.contains("Commande inconnue : 'bonjour'"));
}

#[test]
fn test_session_welcome_and_prompt() {
    let options = SessionOptions {
        color: false,
        prompt: true,
    };
    let mut session = Session::new(Guide::builtin(), Vec::new(), options).unwrap();
    session.run(Cursor::new("")).unwrap();
    let out = String::from_utf8(session.into_output()).unwrap();

    assert!(out.starts_with("🚀 Guide pas à pas\n5 étapes."));
    assert!(out.contains("[ ▶️ Commencer ]"));
    assert!(out.ends_with("> "));
}

// ============================================================================
// Guide Helpers
// ============================================================================

#[test]
fn test_load_guide_defaults_to_builtin() {
    let guide = cli::load_guide(None).unwrap();
    assert_eq!(guide, Guide::builtin());
}

#[test]
fn test_check_guide() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"steps": ["a", "b", "c"]}"#).unwrap();
    assert_eq!(cli::check_guide(file.path()).unwrap(), 3);

    let mut bad = NamedTempFile::new().unwrap();
    bad.write_all(b"{}").unwrap();
    let err = cli::check_guide(bad.path()).unwrap_err();
    assert!(matches!(err, CliError::Guide(_)));
    assert_eq!(err.to_string(), "Guide error: guide has no steps");
}
