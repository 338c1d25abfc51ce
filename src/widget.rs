//! Binds a [`StepWalker`] to a [`Surface`], the way a host page binds a
//! button's click handler to the walker.

use std::io;

use tracing::debug;

use crate::surface::{Control, Labels, Surface};
use crate::walker::{Advance, StepWalker};

/// A walker wired to a presentation surface through a single trigger control.
///
/// The control is the only guard against advancing a finished walk: once the
/// walk completes it is disabled and [`Widget::activate`] stops reaching the
/// walker.
///
/// ```
/// use stepwalker::{Labels, RecordingSurface, StepWalker, Widget};
///
/// let walker = StepWalker::new(["only step"], "bravo");
/// let mut widget = Widget::new(walker, Labels::default(), RecordingSurface::new()).unwrap();
///
/// assert!(widget.activate().unwrap());
/// assert_eq!(widget.surface().message, "only step");
/// assert!(widget.activate().unwrap());
/// assert_eq!(widget.surface().message, "bravo");
/// assert!(!widget.control().enabled);
/// assert!(!widget.activate().unwrap());
/// ```
pub struct Widget<S: Surface> {
    walker: StepWalker,
    labels: Labels,
    control: Control,
    surface: S,
}

impl<S: Surface> Widget<S> {
    /// Create the widget and push the initial control state to the surface.
    pub fn new(walker: StepWalker, labels: Labels, mut surface: S) -> io::Result<Self> {
        let control = if walker.is_complete() {
            Control::disabled(labels.done.clone())
        } else {
            Control::enabled(labels.start.clone())
        };
        surface.set_control(&control)?;

        Ok(Widget {
            walker,
            labels,
            control,
            surface,
        })
    }

    /// Handle one trigger activation.
    ///
    /// Returns `Ok(false)` when the control is disabled and the activation
    /// never reached the walker.
    pub fn activate(&mut self) -> io::Result<bool> {
        if !self.control.enabled {
            debug!(label = %self.control.label, "activation on disabled control");
            return Ok(false);
        }

        let control = match self.walker.advance() {
            Advance::Shown(_) => Control::enabled(self.labels.next.clone()),
            Advance::Completed => Control::disabled(self.labels.done.clone()),
            Advance::Inert => return Ok(false),
        };

        // the control only changes once the surface has taken both renders
        self.surface.show(&self.walker.current_display())?;
        self.surface.set_control(&control)?;
        self.control = control;
        Ok(true)
    }

    pub fn walker(&self) -> &StepWalker {
        &self.walker
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
