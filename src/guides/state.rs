use crate::guides::commands::{GuideCommand, HostEffect};
use crate::guides::controller::{InteractionController, PointerEvent};
use crate::guides::hit_test::HitTestConfig;
use crate::guides::model::{clamp_thickness, Guide, GuideStyle, SurfaceSize};
use crate::guides::store::GuideStore;
use crate::settings::PersistedSettings;

/// Everything the overlay knows at runtime: guides, interaction state,
/// ambient style defaults and the two mode toggles.
#[derive(Debug)]
pub struct OverlayState {
    pub store: GuideStore,
    pub controller: InteractionController,
    defaults: GuideStyle,
    guides_visible: bool,
}

impl OverlayState {
    pub fn new(hit_test: HitTestConfig, surface: SurfaceSize) -> Self {
        Self {
            store: GuideStore::new(),
            controller: InteractionController::new(hit_test, surface),
            defaults: GuideStyle::default(),
            guides_visible: true,
        }
    }

    /// Seeds the state from a loaded settings document. Settings mode always
    /// starts off.
    pub fn from_persisted(
        persisted: PersistedSettings,
        hit_test: HitTestConfig,
        surface: SurfaceSize,
    ) -> Self {
        let mut state = Self::new(hit_test, surface);
        state.store.replace_all(persisted.guides);
        state.defaults = persisted.defaults;
        state.guides_visible = persisted.show_guides;
        state
    }

    pub fn to_persisted(&self) -> PersistedSettings {
        PersistedSettings {
            guides: self.store.guides().to_vec(),
            defaults: self.defaults,
            show_guides: self.guides_visible,
        }
    }

    pub fn defaults(&self) -> GuideStyle {
        self.defaults
    }

    pub fn guides_visible(&self) -> bool {
        self.guides_visible
    }

    pub fn settings_mode(&self) -> bool {
        self.controller.is_interactive()
    }

    /// Feeds a pointer event to the controller and returns its follow-up
    /// request, if any. Hidden guides receive no pointer input.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<GuideCommand> {
        if !self.guides_visible {
            return None;
        }
        self.controller.handle_event(&mut self.store, event)
    }

    pub fn apply(&mut self, command: GuideCommand) -> Option<HostEffect> {
        match command {
            GuideCommand::Pointer(event) => {
                let follow_up = self.handle_pointer(event)?;
                self.apply(follow_up)
            }
            GuideCommand::AddGuide {
                orientation,
                position,
            } => {
                let position = position.max(0);
                self.store.add(Guide::new(orientation, position, self.defaults));
                None
            }
            GuideCommand::RemoveGuide { index } => {
                if let Err(err) = self.store.remove_at(index) {
                    tracing::warn!(%err, "ignoring remove request");
                }
                None
            }
            GuideCommand::ClearGuides => {
                self.store.clear();
                None
            }
            GuideCommand::SetDefaultColor(color) => {
                self.defaults.color = color;
                None
            }
            GuideCommand::SetDefaultThickness(thickness) => {
                self.defaults.thickness = clamp_thickness(thickness);
                None
            }
            GuideCommand::SetDefaultLineStyle(line_style) => {
                self.defaults.line_style = line_style;
                None
            }
            GuideCommand::ToggleSettingsMode => {
                let next = !self.settings_mode();
                self.set_settings_mode(next)
            }
            GuideCommand::SetSettingsMode(enabled) => self.set_settings_mode(enabled),
            GuideCommand::ToggleGuidesVisible => {
                self.guides_visible = !self.guides_visible;
                if !self.guides_visible {
                    self.store.clear_interaction();
                }
                tracing::debug!(visible = self.guides_visible, "guide visibility toggled");
                None
            }
            GuideCommand::SaveNow => Some(HostEffect::Save),
            GuideCommand::Quit => Some(HostEffect::Quit),
        }
    }

    fn set_settings_mode(&mut self, enabled: bool) -> Option<HostEffect> {
        if self.settings_mode() == enabled {
            return None;
        }
        self.controller.set_interactive(&mut self.store, enabled);
        tracing::info!(settings_mode = enabled, "settings mode changed");
        Some(HostEffect::ApplyWindowMode {
            interactive: enabled,
        })
    }
}
