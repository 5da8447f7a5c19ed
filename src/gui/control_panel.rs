//! Control Panel Widget
//! Left side panel with file selection, column selectors, filter and summary.

use crate::state::AppState;
use egui::{Color32, ComboBox, RichText};

/// Left side control panel.
pub struct ControlPanel {
    pub filter_input: String,
    pub status: String,
    pub is_loading: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            filter_input: String::new(),
            status: "Ready".to_string(),
            is_loading: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🧮 CSV Summarizer")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let file_name = state.loaded.as_ref().and_then(|l| l.file_name());
                    let has_file = file_name.is_some();
                    let path_text = file_name.unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(if has_file {
                        Color32::WHITE
                    } else {
                        Color32::GRAY
                    }));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled_ui(!self.is_loading, |ui| {
                            if ui.button("📂 Browse").clicked() {
                                action = ControlPanelAction::BrowseCsv;
                            }
                        });
                        if self.is_loading {
                            ui.spinner();
                        }
                    });
                });
            });

        ui.add_space(5.0);
        ui.label(format!("Records: {}", state.row_count()));

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Column Configuration Section =====
        ui.label(RichText::new("🔧 Summary Columns").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 110.0;
        let combo_width = 150.0;
        let fields = state.field_choices();

        ui.add_enabled_ui(!fields.is_empty(), |ui| {
            ui.horizontal(|ui| {
                ui.add_sized([label_width, 20.0], egui::Label::new("Total Column:"));
                ComboBox::from_id_salt("total_field")
                    .width(combo_width)
                    .selected_text(&state.settings.total_field)
                    .show_ui(ui, |ui| {
                        for field in &fields {
                            if ui
                                .selectable_label(state.settings.total_field == *field, field)
                                .clicked()
                            {
                                action = ControlPanelAction::TotalFieldChanged(field.clone());
                            }
                        }
                    });
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.add_sized([label_width, 20.0], egui::Label::new("Sub Column:"));
                ComboBox::from_id_salt("sub_field")
                    .width(combo_width)
                    .selected_text(&state.settings.sub_field)
                    .show_ui(ui, |ui| {
                        for field in &fields {
                            if ui
                                .selectable_label(state.settings.sub_field == *field, field)
                                .clicked()
                            {
                                action = ControlPanelAction::SubFieldChanged(field.clone());
                            }
                        }
                    });
            });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Filter Text:"));
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.filter_input)
                    .desired_width(combo_width)
                    .hint_text("substring"),
            );
            if response.changed() {
                action = ControlPanelAction::FilterChanged(self.filter_input.clone());
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Summary Section =====
        ui.horizontal(|ui| {
            ui.label(RichText::new("📋 Summary").size(14.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled_ui(!state.summary.is_empty(), |ui| {
                    if ui.button("Copy").clicked() {
                        action = ControlPanelAction::CopySummary;
                    }
                });
            });
        });
        ui.add_space(5.0);

        let mut summary = state.summary.as_str();
        ui.add(
            egui::TextEdit::multiline(&mut summary)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Monospace),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.starts_with("Loaded") || self.status.starts_with("Copied") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    TotalFieldChanged(String),
    SubFieldChanged(String),
    FilterChanged(String),
    CopySummary,
}
