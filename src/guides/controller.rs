use crate::guides::commands::GuideCommand;
use crate::guides::hit_test::{HitRadius, HitTestConfig};
use crate::guides::model::{Orientation, SurfaceSize};
use crate::guides::store::GuideStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerModifiers {
    pub shift: bool,
}

/// Pointer input in surface-local physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    ButtonDown {
        button: PointerButton,
        point: (i32, i32),
        modifiers: PointerModifiers,
    },
    ButtonUp {
        button: PointerButton,
        point: (i32, i32),
    },
    Move {
        point: (i32, i32),
    },
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging(usize),
}

/// Hover/drag state machine over a [`GuideStore`].
///
/// Dragging is click-to-start, click-to-finish: button release never ends a
/// drag. While not interactive every pointer event is ignored and the store
/// carries no interaction indices.
#[derive(Debug, Clone)]
pub struct InteractionController {
    interactive: bool,
    hit_test: HitTestConfig,
    surface: SurfaceSize,
    last_pointer: Option<(i32, i32)>,
}

impl InteractionController {
    pub fn new(hit_test: HitTestConfig, surface: SurfaceSize) -> Self {
        Self {
            interactive: false,
            hit_test,
            surface,
            last_pointer: None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_surface(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }

    pub fn last_pointer(&self) -> Option<(i32, i32)> {
        self.last_pointer
    }

    pub fn drag_state(&self, store: &GuideStore) -> DragState {
        match store.positioning_index() {
            Some(index) => DragState::Dragging(index),
            None => DragState::Idle,
        }
    }

    pub fn set_interactive(&mut self, store: &mut GuideStore, interactive: bool) {
        if self.interactive != interactive {
            tracing::debug!(from = self.interactive, to = interactive, "interactive mode changed");
        }
        self.interactive = interactive;
        if !interactive {
            store.clear_interaction();
        }
    }

    /// Runs one event through the state machine. Returns a command when the
    /// event asks the host to do something the controller is not allowed to
    /// decide itself (adding a guide needs the ambient style defaults).
    pub fn handle_event(
        &mut self,
        store: &mut GuideStore,
        event: PointerEvent,
    ) -> Option<GuideCommand> {
        if !self.interactive {
            return None;
        }

        match event {
            PointerEvent::ButtonDown {
                button,
                point,
                modifiers,
            } => {
                self.last_pointer = Some(point);
                self.button_down(store, button, point, modifiers)
            }
            PointerEvent::ButtonUp { point, .. } => {
                self.last_pointer = Some(point);
                None
            }
            PointerEvent::Move { point } => {
                self.last_pointer = Some(point);
                self.pointer_moved(store, point);
                None
            }
            PointerEvent::Leave => {
                if store.positioning_index().is_none() {
                    store.clear_interaction();
                }
                None
            }
        }
    }

    fn button_down(
        &mut self,
        store: &mut GuideStore,
        button: PointerButton,
        point: (i32, i32),
        modifiers: PointerModifiers,
    ) -> Option<GuideCommand> {
        match button {
            PointerButton::Primary => {
                if store.positioning_index().is_some() {
                    tracing::debug!("guide positioning finished");
                    store.clear_interaction();
                } else if let Some(hit) = self.hit_test.find(store.guides(), point, HitRadius::Drag)
                {
                    tracing::debug!(index = hit, "guide positioning started");
                    // `hit` came from the live collection, so both writes are in range.
                    let _ = store.set_positioning_index(Some(hit));
                    let _ = store.set_hover_index(Some(hit));
                }
                None
            }
            PointerButton::Secondary => {
                let hit = self.hit_test.find(store.guides(), point, HitRadius::Drag)?;
                if store.positioning_index() == Some(hit) {
                    let _ = store.set_positioning_index(None);
                }
                if let Err(err) = store.remove_at(hit) {
                    tracing::warn!(%err, "guide removal failed");
                }
                None
            }
            PointerButton::Middle => {
                let orientation = if modifiers.shift {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let position = self
                    .surface
                    .clamp_position(orientation, orientation.axis_coord(point));
                Some(GuideCommand::AddGuide {
                    orientation,
                    position,
                })
            }
        }
    }

    fn pointer_moved(&mut self, store: &mut GuideStore, point: (i32, i32)) {
        if let Some(index) = store.positioning_index() {
            let Some(guide) = store.get(index).copied() else {
                tracing::warn!(index, len = store.len(), "stale positioning index, aborting drag");
                store.clear_interaction();
                return;
            };
            let position = self
                .surface
                .clamp_position(guide.orientation, guide.orientation.axis_coord(point));
            if let Err(err) = store.set_position_at(index, position) {
                tracing::warn!(%err, "failed to reposition guide");
                store.clear_interaction();
            }
            return;
        }

        let hit = self.hit_test.find(store.guides(), point, HitRadius::Hover);
        if hit != store.hover_index() {
            let _ = store.set_hover_index(hit);
        }
    }
}
