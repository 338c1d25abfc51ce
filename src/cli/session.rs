//! Interactive terminal session: the host that wires user input to a widget

use std::io::{BufRead, Write};

use tracing::debug;

use super::{CliError, Command, get_help_content, get_welcome_content};
use crate::guide::Guide;
use crate::surface::TerminalSurface;
use crate::walker::{StepWalker, View};
use crate::widget::Widget;

/// Options for an interactive session
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Style output with colours
    pub color: bool,
    /// Print a `> ` prompt before reading each line
    pub prompt: bool,
}

/// Why a session stopped reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The walk reached its completion message
    Completed,
    /// The user typed a quit command
    Quit,
    /// Input ran out before the walk completed
    EndOfInput,
}

pub struct Session<W: Write> {
    guide: Guide,
    widget: Widget<TerminalSurface<W>>,
    prompt: bool,
}

impl<W: Write> Session<W> {
    /// Print the welcome banner and the initial control to `out`.
    pub fn new(guide: Guide, out: W, options: SessionOptions) -> Result<Self, CliError> {
        let mut surface = TerminalSurface::new(out, options.color);
        surface
            .writer_mut()
            .write_all(get_welcome_content(guide.title.as_deref(), guide.len()).as_bytes())?;

        let widget = Widget::new(guide.walker(), guide.labels.clone(), surface)?;

        Ok(Session {
            guide,
            widget,
            prompt: options.prompt,
        })
    }

    /// Read commands line by line until the walk completes, the user quits,
    /// or input runs out.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<SessionEnd, CliError> {
        loop {
            self.write_prompt()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                return Ok(SessionEnd::EndOfInput);
            }

            match Command::parse(&line) {
                Command::Next => {
                    self.widget.activate()?;
                    if self.widget.walker().is_complete() {
                        return Ok(SessionEnd::Completed);
                    }
                }
                Command::Outline => {
                    let outline = self.guide.outline(self.widget.walker());
                    self.out().write_all(outline.as_bytes())?;
                }
                Command::Progress => self.write_progress()?,
                Command::Help => self.out().write_all(get_help_content().as_bytes())?,
                Command::Quit => return Ok(SessionEnd::Quit),
                Command::Unknown(text) => {
                    debug!(input = %text, "unknown command");
                    writeln!(
                        self.out(),
                        "Commande inconnue : '{}'. Tape 'aide' pour la liste des commandes.",
                        text
                    )?;
                }
            }
        }
    }

    pub fn walker(&self) -> &StepWalker {
        self.widget.walker()
    }

    pub fn into_output(self) -> W {
        self.widget.into_surface().into_inner()
    }

    fn out(&mut self) -> &mut W {
        self.widget.surface_mut().writer_mut()
    }

    fn write_prompt(&mut self) -> Result<(), CliError> {
        if self.prompt {
            let out = self.out();
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }

    fn write_progress(&mut self) -> Result<(), CliError> {
        let progress = self.widget.walker().progress();
        let current = match self.widget.walker().current_display() {
            View::Step { step, .. } => Some(step.text.clone()),
            _ => None,
        };

        let out = self.out();
        writeln!(out, "📍 Progression : {}", progress)?;
        if let Some(text) = current {
            writeln!(out, "   {}", text)?;
        } else if progress.is_complete {
            writeln!(out, "   Parcours terminé.")?;
        }
        Ok(())
    }
}
