pub mod paint;
pub mod panel;

use crate::config::AppConfig;
use crate::guides::commands::{CommandQueue, GuideCommand, HostEffect};
use crate::guides::controller::{PointerButton, PointerEvent, PointerModifiers};
use crate::guides::highlight::resolve_highlight;
use crate::guides::model::SurfaceSize;
use crate::guides::state::OverlayState;
use crate::settings_store::{LoadReport, SettingsStore};
use crate::shortcuts::{map_shortcut, shortcut_for_event, ShortcutPoller};
use crate::toast_log::append_toast_log;
use crate::window_mode::apply_window_mode;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use paint::GuidePainter;
use panel::ControlPanel;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

const SHORTCUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
const TOAST_SECONDS: f64 = 4.0;

/// Converts an egui position (points) into surface pixels.
pub fn to_pixels(pos: egui::Pos2, pixels_per_point: f32) -> (i32, i32) {
    (
        (pos.x * pixels_per_point).floor() as i32,
        (pos.y * pixels_per_point).floor() as i32,
    )
}

pub fn surface_from_rect(rect: egui::Rect, pixels_per_point: f32) -> SurfaceSize {
    SurfaceSize::new(
        (rect.width() * pixels_per_point).round() as i32,
        (rect.height() * pixels_per_point).round() as i32,
    )
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

fn pointer_event(
    event: &egui::Event,
    pixels_per_point: f32,
    over_panel: bool,
) -> Option<PointerEvent> {
    match event {
        egui::Event::PointerMoved(pos) => Some(PointerEvent::Move {
            point: to_pixels(*pos, pixels_per_point),
        }),
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers,
        } => {
            let button = map_button(*button)?;
            let point = to_pixels(*pos, pixels_per_point);
            if *pressed {
                if over_panel {
                    return None;
                }
                Some(PointerEvent::ButtonDown {
                    button,
                    point,
                    modifiers: PointerModifiers {
                        shift: modifiers.shift,
                    },
                })
            } else {
                Some(PointerEvent::ButtonUp { button, point })
            }
        }
        egui::Event::PointerGone => Some(PointerEvent::Leave),
        _ => None,
    }
}

/// Translates one frame's raw egui events into commands, keeping the order
/// they were delivered in. Presses that land on an egui window (the control
/// panel) are dropped.
pub fn translate_input_events(
    events: &[egui::Event],
    pixels_per_point: f32,
    over_panel: bool,
) -> Vec<GuideCommand> {
    events
        .iter()
        .filter_map(|event| {
            shortcut_for_event(event).map(map_shortcut).or_else(|| {
                pointer_event(event, pixels_per_point, over_panel).map(GuideCommand::Pointer)
            })
        })
        .collect()
}

pub struct GuideOverlayApp {
    state: OverlayState,
    queue: CommandQueue,
    panel: ControlPanel,
    settings_store: SettingsStore,
    shortcuts: ShortcutPoller,
    toasts: Toasts,
    toast_log_path: PathBuf,
    dirty: Rc<Cell<bool>>,
    applied_mode: Option<bool>,
    closing: bool,
}

impl GuideOverlayApp {
    pub fn new(config: &AppConfig, settings_store: SettingsStore, report: LoadReport) -> Self {
        let LoadReport { loaded, error } = report;
        let mut state = OverlayState::from_persisted(
            loaded.settings,
            config.hit_test,
            SurfaceSize::new(0, 0),
        );

        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        state.store.subscribe(move || flag.set(true));

        let mut app = Self {
            panel: ControlPanel::new(state.defaults()),
            state,
            queue: CommandQueue::new(),
            settings_store,
            shortcuts: ShortcutPoller::new(),
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            toast_log_path: config.toast_log_path(),
            dirty,
            applied_mode: None,
            closing: false,
        };

        if let Some(err) = error {
            app.notify(ToastKind::Error, format!("Settings could not be loaded: {err}"));
        }
        if !loaded.skipped.is_empty() {
            app.notify(
                ToastKind::Warning,
                format!("Skipped {} malformed guide(s) from settings", loaded.skipped.len()),
            );
        }
        if loaded.defaults_rejected {
            app.notify(ToastKind::Warning, "Saved style defaults were invalid and reset");
        }
        app
    }

    fn notify(&mut self, kind: ToastKind, text: impl Into<String>) {
        let text = text.into();
        append_toast_log(&self.toast_log_path, &text);
        self.toasts.add(Toast {
            text: text.into(),
            kind,
            options: ToastOptions::default().duration_in_seconds(TOAST_SECONDS),
        });
    }

    fn save(&mut self) -> bool {
        match self.settings_store.save(&self.state.to_persisted()) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(%err, "failed to save settings");
                self.notify(ToastKind::Error, format!("Saving failed: {err}"));
                false
            }
        }
    }

    /// Queues globally polled shortcuts, then this frame's window input.
    fn collect_input(&mut self, ctx: &egui::Context) {
        for key in self.shortcuts.poll() {
            self.queue.push(map_shortcut(key));
        }

        let ppp = ctx.pixels_per_point();
        self.state
            .controller
            .set_surface(surface_from_rect(ctx.screen_rect(), ppp));

        let events = ctx.input(|i| i.events.clone());
        let over_panel = ctx.is_pointer_over_area();
        for command in translate_input_events(&events, ppp, over_panel) {
            self.queue.push(command);
        }
    }

    fn run_commands(&mut self, ctx: &egui::Context, frame: &eframe::Frame) {
        let mut effects = Vec::new();
        let state = &mut self.state;
        self.queue.pump(|command| {
            tracing::trace!(?command, "dispatching command");
            if let Some(effect) = state.apply(command) {
                effects.push(effect);
            }
        });

        for effect in effects {
            match effect {
                HostEffect::ApplyWindowMode { interactive } => {
                    self.apply_mode(ctx, frame, interactive);
                }
                HostEffect::Save => {
                    if self.save() {
                        self.notify(ToastKind::Success, "Settings saved");
                    }
                }
                HostEffect::Quit => self.close(ctx),
            }
        }
    }

    fn apply_mode(&mut self, ctx: &egui::Context, frame: &eframe::Frame, interactive: bool) {
        if self.applied_mode == Some(interactive) {
            return;
        }
        apply_window_mode(ctx, frame, interactive);
        self.applied_mode = Some(interactive);
        self.dirty.set(true);
    }

    fn close(&mut self, ctx: &egui::Context) {
        if self.closing {
            return;
        }
        self.closing = true;
        self.save();
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for GuideOverlayApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if self.applied_mode.is_none() {
            let interactive = self.state.settings_mode();
            self.apply_mode(ctx, frame, interactive);
        }

        self.collect_input(ctx);
        self.run_commands(ctx, frame);

        if ctx.input(|i| i.viewport().close_requested()) && !self.closing {
            self.closing = true;
            self.save();
        }

        if self.state.guides_visible() {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let highlight = resolve_highlight(&self.state.store, self.state.settings_mode());
            GuidePainter::new(&painter, ctx.pixels_per_point())
                .paint(self.state.store.guides(), highlight);
        }

        if self.state.settings_mode() {
            let cursor = self.state.controller.last_pointer();
            for command in self.panel.show(ctx, cursor) {
                self.queue.push(command);
                self.dirty.set(true);
            }
        }

        self.toasts.show(ctx);

        if self.dirty.replace(false) {
            ctx.request_repaint();
        }
        ctx.request_repaint_after(SHORTCUT_POLL_INTERVAL);
    }
}
