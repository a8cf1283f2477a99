use crate::guides::commands::GuideCommand;
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    F1,
    F2,
    Escape,
}

pub const GLOBAL_KEY_COUNT: usize = 2;

/// Keys watched system-wide so they work while the overlay is click-through.
pub const GLOBAL_KEYS: [ShortcutKey; GLOBAL_KEY_COUNT] = [ShortcutKey::F1, ShortcutKey::F2];

pub fn map_shortcut(key: ShortcutKey) -> GuideCommand {
    match key {
        ShortcutKey::F1 => GuideCommand::ToggleSettingsMode,
        ShortcutKey::F2 => GuideCommand::ToggleGuidesVisible,
        ShortcutKey::Escape => GuideCommand::Quit,
    }
}

/// Shortcut carried by a key press the overlay window received while focused.
/// Key repeats are ignored.
pub fn shortcut_for_event(event: &egui::Event) -> Option<ShortcutKey> {
    let egui::Event::Key {
        key,
        pressed: true,
        repeat: false,
        ..
    } = event
    else {
        return None;
    };
    match key {
        // F1/F2 come from the global poller where one exists.
        egui::Key::F1 if !cfg!(windows) => Some(ShortcutKey::F1),
        egui::Key::F2 if !cfg!(windows) => Some(ShortcutKey::F2),
        egui::Key::Escape => Some(ShortcutKey::Escape),
        _ => None,
    }
}

/// `GetAsyncKeyState` reports a held key through the sign bit.
pub fn key_state_is_down(state: i16) -> bool {
    state < 0
}

/// Edge detector over polled key states: reports a key once per press.
#[derive(Debug, Default)]
pub struct ShortcutPoller {
    held: [bool; GLOBAL_KEY_COUNT],
}

impl ShortcutPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the current down/up state of each key in [`GLOBAL_KEYS`].
    pub fn update(&mut self, down: [bool; GLOBAL_KEY_COUNT]) -> Vec<ShortcutKey> {
        let mut pressed = Vec::new();
        for (i, key) in GLOBAL_KEYS.iter().enumerate() {
            if down[i] && !self.held[i] {
                pressed.push(*key);
            }
            self.held[i] = down[i];
        }
        pressed
    }

    pub fn poll(&mut self) -> Vec<ShortcutKey> {
        #[cfg(windows)]
        {
            let down = GLOBAL_KEYS.map(platform::is_key_down);
            self.update(down)
        }
        #[cfg(not(windows))]
        {
            Vec::new()
        }
    }
}

#[cfg(windows)]
mod platform {
    use super::ShortcutKey;
    use windows::Win32::UI::Input::KeyboardAndMouse::{GetAsyncKeyState, VK_ESCAPE, VK_F1, VK_F2};

    pub fn is_key_down(key: ShortcutKey) -> bool {
        let vk = match key {
            ShortcutKey::F1 => VK_F1,
            ShortcutKey::F2 => VK_F2,
            ShortcutKey::Escape => VK_ESCAPE,
        };
        let state = unsafe { GetAsyncKeyState(vk.0 as i32) };
        super::key_state_is_down(state)
    }
}
