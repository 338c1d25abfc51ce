//! Guide files: step sequences loaded from JSON.
//!
//! A guide groups steps into titled sections and may override the control
//! labels and the completion message. When no guide file is given, the
//! built-in guide ([`Guide::builtin`]) is used.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::surface::Labels;
use crate::walker::{Step, StepWalker, WalkState};

pub const DEFAULT_COMPLETION: &str = "🎉 Félicitations ! Tu es prêt à coder sur Pi Network.";

const BUILTIN_STEPS: [&str; 5] = [
    "Étape 1 : Ouvre PowerShell.",
    "Étape 2 : Tape 'cd Documents'",
    "Étape 3 : Crée un nouveau projet avec 'npm create vite@latest'",
    "Étape 4 : Installe Git si ce n'est pas fait",
    "Étape 5 : Connecte-toi à GitHub",
];

/// Errors that can occur while loading a guide.
#[derive(Debug, Error)]
pub enum GuideError {
    #[error("cannot read guide: {0}")]
    Io(#[from] io::Error),

    #[error("invalid guide JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("guide has no steps")]
    Empty,

    #[error("step {index} has no text")]
    BlankStep { index: usize },

    #[error("duplicate step id '{0}'")]
    DuplicateId(String),
}

#[derive(Debug, Deserialize)]
struct GuideFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    sections: Vec<SectionFile>,
    /// Shorthand: plain step texts, appended after the sections
    #[serde(default)]
    steps: Vec<String>,
    #[serde(default)]
    labels: Labels,
    #[serde(default)]
    completion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SectionFile {
    #[serde(default)]
    title: Option<String>,
    steps: Vec<StepFile>,
}

#[derive(Debug, Deserialize)]
struct StepFile {
    #[serde(default)]
    id: Option<String>,
    desc: String,
    #[serde(default)]
    command: Option<String>,
}

impl From<StepFile> for Step {
    fn from(file: StepFile) -> Self {
        Step {
            id: file.id,
            text: file.desc,
            command: file.command,
        }
    }
}

/// A titled group of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: Option<String>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guide {
    pub title: Option<String>,
    pub sections: Vec<Section>,
    pub labels: Labels,
    pub completion: String,
}

impl Guide {
    /// The five-step getting-started walk.
    pub fn builtin() -> Self {
        Guide {
            title: None,
            sections: vec![Section {
                title: None,
                steps: BUILTIN_STEPS.iter().map(|s| Step::new(*s)).collect(),
            }],
            labels: Labels::default(),
            completion: DEFAULT_COMPLETION.to_string(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, GuideError> {
        let file: GuideFile = serde_json::from_str(json)?;

        let mut sections: Vec<Section> = file
            .sections
            .into_iter()
            .map(|s| Section {
                title: s.title,
                steps: s.steps.into_iter().map(Step::from).collect(),
            })
            .collect();

        if !file.steps.is_empty() {
            sections.push(Section {
                title: None,
                steps: file.steps.into_iter().map(Step::new).collect(),
            });
        }

        let guide = Guide {
            title: file.title,
            sections,
            labels: file.labels,
            completion: file
                .completion
                .unwrap_or_else(|| DEFAULT_COMPLETION.to_string()),
        };
        guide.validate()?;
        Ok(guide)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GuideError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading guide");
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), GuideError> {
        let mut ids = HashSet::new();
        let mut count = 0;

        for (index, step) in self.steps().enumerate() {
            if step.text.trim().is_empty() {
                return Err(GuideError::BlankStep { index });
            }
            if let Some(id) = &step.id {
                if !ids.insert(id.as_str()) {
                    return Err(GuideError::DuplicateId(id.clone()));
                }
            }
            count += 1;
        }

        if count == 0 {
            return Err(GuideError::Empty);
        }
        Ok(())
    }

    /// All steps in walk order, across sections.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.sections.iter().flat_map(|s| s.steps.iter())
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.steps.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A fresh walker over this guide's steps.
    pub fn walker(&self) -> StepWalker {
        StepWalker::new(self.steps().cloned(), self.completion.clone())
    }

    /// Render every step with a status mark relative to `walker`:
    /// `✅` passed, `🟡` current, `⚪` pending.
    pub fn outline(&self, walker: &StepWalker) -> String {
        let mut out = format!("📋 {}\n", self.title.as_deref().unwrap_or("Guide"));
        let mut index = 0;

        for section in &self.sections {
            out.push('\n');
            if let Some(title) = &section.title {
                out.push_str(&format!("🔹 {}\n", title));
            }
            for step in &section.steps {
                let mark = match walker.state() {
                    WalkState::Terminal => "✅",
                    WalkState::InProgress(current) if index < current => "✅",
                    WalkState::InProgress(current) if index == current => "🟡",
                    _ => "⚪",
                };
                out.push_str(&format!("   {} {}\n", mark, step.text));
                index += 1;
            }
        }
        out
    }
}

impl Default for Guide {
    fn default() -> Self {
        Self::builtin()
    }
}
