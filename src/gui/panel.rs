use crate::guides::commands::GuideCommand;
use crate::guides::model::{
    GuideColor, GuideStyle, LineStyle, Orientation, MAX_THICKNESS, MIN_THICKNESS,
};
use eframe::egui::{self, color_picker, Color32};

pub const HELP_TEXT: &str = "Normal mode is click-through. In Settings mode:\n\
    \u{2022} Left-click guide to start moving, click again to finish\n\
    \u{2022} Right-click guide to delete\n\
    \u{2022} Middle-click to add guide (Shift+Middle = horizontal)";

/// Floating settings window shown while the overlay is interactive.
pub struct ControlPanel {
    color: Color32,
    thickness: u32,
    line_style: LineStyle,
}

impl ControlPanel {
    pub fn new(defaults: GuideStyle) -> Self {
        let c = defaults.color;
        Self {
            color: Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a),
            thickness: defaults.thickness,
            line_style: defaults.line_style,
        }
    }

    /// Emits commands for everything the user changed or clicked this frame.
    /// `cursor` is the last pointer position in surface pixels.
    pub fn show(&mut self, ctx: &egui::Context, cursor: Option<(i32, i32)>) -> Vec<GuideCommand> {
        let mut commands = Vec::new();
        egui::Window::new("Inkguiding Settings")
            .default_pos([60.0, 60.0])
            .default_width(320.0)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                egui::Grid::new("inkguiding_settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Guide Color:");
                        if color_picker::color_edit_button_srgba(
                            ui,
                            &mut self.color,
                            color_picker::Alpha::OnlyBlend,
                        )
                        .changed()
                        {
                            let [r, g, b, a] = self.color.to_srgba_unmultiplied();
                            commands.push(GuideCommand::SetDefaultColor(GuideColor::rgba(r, g, b, a)));
                        }
                        ui.end_row();

                        ui.label("Thickness (px):");
                        if ui
                            .add(egui::Slider::new(
                                &mut self.thickness,
                                MIN_THICKNESS..=MAX_THICKNESS,
                            ))
                            .changed()
                        {
                            commands.push(GuideCommand::SetDefaultThickness(self.thickness));
                        }
                        ui.end_row();

                        ui.label("Style:");
                        let before = self.line_style;
                        egui::ComboBox::from_id_source("inkguiding_style")
                            .selected_text(self.line_style.label())
                            .show_ui(ui, |ui| {
                                for style in LineStyle::ALL {
                                    ui.selectable_value(&mut self.line_style, style, style.label());
                                }
                            });
                        if self.line_style != before {
                            commands.push(GuideCommand::SetDefaultLineStyle(self.line_style));
                        }
                        ui.end_row();
                    });

                ui.separator();
                let full_width = egui::vec2(ui.available_width(), 0.0);
                if ui
                    .add_sized(full_width, egui::Button::new("Add Vertical @ Cursor"))
                    .clicked()
                {
                    commands.extend(add_at_cursor(Orientation::Vertical, cursor));
                }
                if ui
                    .add_sized(full_width, egui::Button::new("Add Horizontal @ Cursor"))
                    .clicked()
                {
                    commands.extend(add_at_cursor(Orientation::Horizontal, cursor));
                }
                if ui.add_sized(full_width, egui::Button::new("Clear All")).clicked() {
                    commands.push(GuideCommand::ClearGuides);
                }
                if ui.add_sized(full_width, egui::Button::new("Save Now")).clicked() {
                    commands.push(GuideCommand::SaveNow);
                }
                if ui
                    .add_sized(full_width, egui::Button::new("Close Settings"))
                    .clicked()
                {
                    commands.push(GuideCommand::SetSettingsMode(false));
                }
                ui.separator();
                ui.label(HELP_TEXT);
            });
        commands
    }
}

fn add_at_cursor(orientation: Orientation, cursor: Option<(i32, i32)>) -> Option<GuideCommand> {
    let cursor = cursor?;
    Some(GuideCommand::AddGuide {
        orientation,
        position: orientation.axis_coord(cursor).max(0),
    })
}
