pub mod cli;
pub mod guide;
#[cfg(feature = "cli")]
pub mod logging;
pub mod surface;
pub mod walker;
pub mod widget;

pub use guide::{Guide, GuideError, Section};
pub use surface::{Control, Labels, RecordingSurface, Surface, TerminalSurface};
pub use walker::{Advance, Progress, Step, StepWalker, View, WalkState};
pub use widget::Widget;
