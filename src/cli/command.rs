//! Parse one line of session input into a command

use std::sync::LazyLock;

use regex::Regex;

/// A command typed during an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate the trigger control
    Next,
    /// Show every step with its status
    Outline,
    /// Show how many steps have been seen
    Progress,
    Help,
    Quit,
    /// Anything else, trimmed
    Unknown(String),
}

static QUIT: LazyLock<Regex> = LazyLock::new(|| keywords(r"^(?:q|quit|exit|quitter)$"));
static HELP: LazyLock<Regex> = LazyLock::new(|| keywords(r"\b(?:aide|help)\b"));
static OUTLINE: LazyLock<Regex> = LazyLock::new(|| keywords(r"\b(?:guide|parcours|étapes)\b"));
static PROGRESS: LazyLock<Regex> =
    LazyLock::new(|| keywords(r"\b(?:où suis-je|état|progress|étape)\b"));
static NEXT: LazyLock<Regex> =
    LazyLock::new(|| keywords(r"\b(?:next|suivant|ok|fait|terminé)\b"));

fn keywords(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){}", pattern)).expect("keyword pattern must compile")
}

impl Command {
    /// Parse a raw input line. An empty line means "next".
    ///
    /// Earlier matches win: outline, then progress, then next, then help.
    /// So `étapes` is the outline and not the progress keyword `étape`, and
    /// `aide pour le guide` shows the outline.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return Command::Next;
        }

        [
            (&QUIT, Command::Quit),
            (&OUTLINE, Command::Outline),
            (&PROGRESS, Command::Progress),
            (&NEXT, Command::Next),
            (&HELP, Command::Help),
        ]
        .into_iter()
        .find(|(re, _)| re.is_match(line))
        .map(|(_, command)| command)
        .unwrap_or_else(|| Command::Unknown(line.to_string()))
    }
}
