use crate::guides::controller::PointerEvent;
use crate::guides::model::{GuideColor, LineStyle, Orientation};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

/// Requests flowing from the controller, the control panel and shortcuts
/// into [`crate::guides::state::OverlayState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideCommand {
    /// Pointer input for the interaction controller, queued with everything
    /// else so it is handled in delivery order.
    Pointer(PointerEvent),
    /// Add a guide styled with the ambient defaults.
    AddGuide {
        orientation: Orientation,
        position: i32,
    },
    RemoveGuide {
        index: usize,
    },
    ClearGuides,
    SetDefaultColor(GuideColor),
    SetDefaultThickness(u32),
    SetDefaultLineStyle(LineStyle),
    ToggleSettingsMode,
    SetSettingsMode(bool),
    ToggleGuidesVisible,
    SaveNow,
    Quit,
}

/// Side effects the host window has to carry out after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEffect {
    ApplyWindowMode { interactive: bool },
    Save,
    Quit,
}

/// FIFO command queue drained once per frame.
#[derive(Debug)]
pub struct CommandQueue {
    tx: Sender<GuideCommand>,
    rx: Receiver<GuideCommand>,
}

impl Default for CommandQueue {
    fn default() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sender(&self) -> Sender<GuideCommand> {
        self.tx.clone()
    }

    pub fn push(&self, command: GuideCommand) {
        // The queue owns a receiver, so the channel cannot be disconnected here.
        let _ = self.tx.send(command);
    }

    /// Drains queued commands in delivery order, handing each to `apply`.
    pub fn pump<F>(&self, mut apply: F)
    where
        F: FnMut(GuideCommand),
    {
        loop {
            match self.rx.try_recv() {
                Ok(command) => apply(command),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }
}
