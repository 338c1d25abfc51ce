//! The step walker: a linear cursor over a fixed step sequence.
//!
//! A [`StepWalker`] starts before its first step. Every call to
//! [`StepWalker::advance`] moves the cursor forward by one; once the cursor
//! runs past the last step the walker is terminal and shows its completion
//! message. A terminal walker ignores further advances.
//!
//! # Examples
//!
//! ```
//! use stepwalker::{Advance, StepWalker, View};
//!
//! let mut walker = StepWalker::new(["first", "second"], "done!");
//! assert_eq!(walker.cursor(), -1);
//!
//! assert_eq!(walker.advance(), Advance::Shown(0));
//! assert_eq!(walker.advance(), Advance::Shown(1));
//! assert_eq!(walker.advance(), Advance::Completed);
//! assert_eq!(walker.current_display(), View::Complete("done!"));
//!
//! // Terminal: nothing moves any more.
//! assert_eq!(walker.advance(), Advance::Inert);
//! assert_eq!(walker.cursor(), 2);
//! ```

use std::fmt;

use tracing::{debug, info, warn};

/// A single instruction in a step sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Stable identifier, when the step came from a guide file
    pub id: Option<String>,
    /// The message shown while this step is current
    pub text: String,
    /// Shell command the reader is expected to run, if any
    pub command: Option<String>,
}

impl Step {
    pub fn new(text: impl Into<String>) -> Self {
        Step {
            id: None,
            text: text.into(),
            command: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

impl From<&str> for Step {
    fn from(text: &str) -> Self {
        Step::new(text)
    }
}

impl From<String> for Step {
    fn from(text: String) -> Self {
        Step::new(text)
    }
}

/// Where the walker currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// No step shown yet (cursor is -1)
    NotStarted,
    /// Showing the step at this index
    InProgress(usize),
    /// All steps exhausted; the completion message is shown
    Terminal,
}

/// Outcome of a single [`StepWalker::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The step at this index is now current
    Shown(usize),
    /// The cursor ran past the last step; the walker is now terminal
    Completed,
    /// The walker was already terminal; nothing changed
    Inert,
}

/// What the text region holds at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// Nothing shown yet
    Empty,
    /// The current step
    Step { index: usize, step: &'a Step },
    /// The completion message
    Complete(&'a str),
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Empty => Ok(()),
            View::Step { step, .. } => write!(f, "{}", step.text),
            View::Complete(message) => write!(f, "{}", message),
        }
    }
}

/// Aggregated view of how far along the walk is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Steps displayed so far
    pub shown: usize,
    /// Length of the step sequence
    pub total: usize,
    pub is_complete: bool,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.shown, self.total)
    }
}

/// Walks a fixed sequence of steps one activation at a time.
#[derive(Debug, Clone)]
pub struct StepWalker {
    steps: Vec<Step>,
    completion: String,
    /// Number of meaningful activations so far; the cursor is `activations - 1`
    activations: usize,
}

impl StepWalker {
    pub fn new<I, S>(steps: I, completion: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Step>,
    {
        StepWalker {
            steps: steps.into_iter().map(Into::into).collect(),
            completion: completion.into(),
            activations: 0,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn completion(&self) -> &str {
        &self.completion
    }

    /// The cursor: -1 before the first advance, `len()` once terminal.
    pub fn cursor(&self) -> isize {
        // activations never exceeds len() + 1, which fits comfortably
        self.activations as isize - 1
    }

    pub fn state(&self) -> WalkState {
        match self.activations {
            0 => WalkState::NotStarted,
            n if n <= self.steps.len() => WalkState::InProgress(n - 1),
            _ => WalkState::Terminal,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == WalkState::Terminal
    }

    /// Move the cursor forward by one.
    ///
    /// Once terminal, further calls are no-ops that return [`Advance::Inert`]:
    /// the cursor stays at `len()` and the display is left untouched.
    pub fn advance(&mut self) -> Advance {
        if self.is_complete() {
            warn!(cursor = self.cursor(), "advance on a completed walk ignored");
            return Advance::Inert;
        }

        self.activations += 1;

        match self.state() {
            WalkState::InProgress(index) => {
                debug!(cursor = index, total = self.steps.len(), "advanced to step");
                Advance::Shown(index)
            }
            _ => {
                info!(total = self.steps.len(), "walk completed");
                Advance::Completed
            }
        }
    }

    pub fn current_display(&self) -> View<'_> {
        match self.state() {
            WalkState::NotStarted => View::Empty,
            WalkState::InProgress(index) => View::Step {
                index,
                step: &self.steps[index],
            },
            WalkState::Terminal => View::Complete(&self.completion),
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            shown: self.activations.min(self.steps.len()),
            total: self.steps.len(),
            is_complete: self.is_complete(),
        }
    }
}
