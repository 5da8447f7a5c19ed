//! Table Viewer Widget
//! Central panel showing the loaded records as a scrollable grid.

use crate::data::{HeaderField, Table};
use egui::{Color32, RichText, ScrollArea};

const ROW_HEIGHT: f32 = 22.0;
const CELL_SPACING: f32 = 6.0;

/// Virtualised grid. Only visible rows are laid out.
#[derive(Default)]
pub struct TableViewer;

impl TableViewer {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, table: Option<&Table>) {
        let Some(table) = table.filter(|t| !t.header.is_empty()) else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::horizontal()
            .id_salt("table_h")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    Self::draw_header_row(ui, &table.header);
                    ui.separator();

                    ScrollArea::vertical()
                        .id_salt("table_v")
                        .auto_shrink([false, false])
                        .show_rows(ui, ROW_HEIGHT, table.row_count(), |ui, row_range| {
                            for record in &table.records[row_range] {
                                ui.horizontal(|ui| {
                                    ui.spacing_mut().item_spacing.x = CELL_SPACING;
                                    for column in &table.header {
                                        let text = record.get(&column.field).unwrap_or_default();
                                        Self::draw_cell(ui, column, RichText::new(text));
                                    }
                                });
                            }
                        });
                });
            });
    }

    fn draw_header_row(ui: &mut egui::Ui, header: &[HeaderField]) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = CELL_SPACING;
            for column in header {
                Self::draw_cell(
                    ui,
                    column,
                    RichText::new(&column.display_name)
                        .strong()
                        .color(Color32::from_rgb(100, 149, 237)),
                );
            }
        });
    }

    fn draw_cell(ui: &mut egui::Ui, column: &HeaderField, text: RichText) {
        ui.add_sized(
            [column.width as f32, ROW_HEIGHT],
            egui::Label::new(text).truncate(),
        );
    }
}
