//! Presentation surfaces: where a walk gets rendered.
//!
//! A surface has two capabilities, matching a text region plus a single
//! button: show the current [`View`] and update the trigger [`Control`].

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use serde::Deserialize;

use crate::walker::View;

/// Colour of the completion message.
pub const SUCCESS_COLOR: Color = Color::Rgb {
    r: 0xA0,
    g: 0xE7,
    b: 0xA5,
};

/// Labels the trigger control cycles through.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Shown before the first activation
    pub start: String,
    /// Shown while steps remain
    pub next: String,
    /// Shown once the walk is complete
    pub done: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            start: "▶️ Commencer".to_string(),
            next: "➡️ Suivant".to_string(),
            done: "✅ Terminé".to_string(),
        }
    }
}

/// State of the trigger control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub enabled: bool,
}

impl Control {
    pub fn enabled(label: impl Into<String>) -> Self {
        Control {
            label: label.into(),
            enabled: true,
        }
    }

    pub fn disabled(label: impl Into<String>) -> Self {
        Control {
            label: label.into(),
            enabled: false,
        }
    }
}

pub trait Surface {
    /// Replace the content of the text region.
    fn show(&mut self, view: &View<'_>) -> io::Result<()>;

    /// Relabel and enable/disable the trigger control.
    fn set_control(&mut self, control: &Control) -> io::Result<()>;
}

/// In-memory surface that keeps the latest render and counts calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    /// Text currently shown (empty before the first render)
    pub message: String,
    /// Whether the current message is the completion message
    pub complete: bool,
    pub control: Option<Control>,
    /// Number of `show` calls received
    pub renders: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn show(&mut self, view: &View<'_>) -> io::Result<()> {
        self.message = view.to_string();
        self.complete = matches!(view, View::Complete(_));
        self.renders += 1;
        Ok(())
    }

    fn set_control(&mut self, control: &Control) -> io::Result<()> {
        self.control = Some(control.clone());
        Ok(())
    }
}

/// Renders to a terminal (or any writer), optionally with colour.
pub struct TerminalSurface<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, color: bool) -> Self {
        TerminalSurface { out, color }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn show(&mut self, view: &View<'_>) -> io::Result<()> {
        match view {
            View::Empty => Ok(()),
            View::Step { step, .. } => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", step.text)?;
                if let Some(command) = &step.command {
                    writeln!(self.out)?;
                    writeln!(self.out, "🔧 Commande :")?;
                    if self.color {
                        writeln!(self.out, "    {}", command.as_str().bold())?;
                    } else {
                        writeln!(self.out, "    {}", command)?;
                    }
                }
                Ok(())
            }
            View::Complete(message) => {
                writeln!(self.out)?;
                if self.color {
                    writeln!(self.out, "{}", message.with(SUCCESS_COLOR))
                } else {
                    writeln!(self.out, "{}", message)
                }
            }
        }
    }

    fn set_control(&mut self, control: &Control) -> io::Result<()> {
        let button = format!("[ {} ]", control.label);
        match (self.color, control.enabled) {
            (true, false) => writeln!(self.out, "{}", button.dim())?,
            _ => writeln!(self.out, "{}", button)?,
        }
        self.out.flush()
    }
}
