//! CSV Summarizer Main Application
//! Main window with control panel and table viewer.

use crate::data::DataLoader;
use crate::gui::{ControlPanel, ControlPanelAction, TableViewer};
use crate::state::AppState;
use egui::SidePanel;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{info, warn};

/// File reading result from background thread
enum LoadResult {
    Complete { path: PathBuf, text: String },
    Error(String),
}

/// Main application window.
pub struct SummarizerApp {
    state: AppState,
    control_panel: ControlPanel,
    table_viewer: TableViewer,

    // Async file reading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl SummarizerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, initial_file: Option<PathBuf>) -> Self {
        let mut app = Self {
            state: AppState::new(),
            control_panel: ControlPanel::new(),
            table_viewer: TableViewer::new(),
            load_rx: None,
            is_loading: false,
        };
        if let Some(path) = initial_file {
            app.start_loading(path);
        }
        app
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_loading(path);
        }
    }

    /// Read the file on a background thread. Parsing happens on the UI
    /// thread once the text arrives.
    fn start_loading(&mut self, path: PathBuf) {
        info!(path = %path.display(), "loading csv");
        self.control_panel.set_status("Reading CSV file...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match DataLoader::read_text(&path) {
                Ok(text) => LoadResult::Complete { path, text },
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for file reading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete { path, text }) => {
                match self.state.apply_csv_text(Some(path), &text) {
                    Ok(()) => {
                        let status = format!(
                            "Loaded {} rows, {} columns",
                            self.state.row_count(),
                            self.state.field_choices().len()
                        );
                        self.control_panel.set_status(&status);
                    }
                    Err(e) => self.control_panel.set_status(&format!("Error: {}", e)),
                }
                self.is_loading = false;
            }
            Ok(LoadResult::Error(error)) => {
                warn!(%error, "csv read failed");
                self.control_panel.set_status(&format!("Error: {}", error));
                self.is_loading = false;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                warn!("csv reader thread exited without a result");
                self.control_panel.set_status("Error: file read aborted");
                self.is_loading = false;
            }
        }
    }

    fn handle_copy_summary(&mut self, ctx: &egui::Context) {
        if self.state.summary.is_empty() {
            return;
        }
        ctx.copy_text(self.state.summary.clone());
        info!("summary copied to clipboard");
        self.control_panel.set_status("Copied summary to clipboard");
    }
}

impl eframe::App for SummarizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();
        self.control_panel.is_loading = self.is_loading;

        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, &self.state);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::TotalFieldChanged(field) => {
                            self.state.set_total_field(field)
                        }
                        ControlPanelAction::SubFieldChanged(field) => {
                            self.state.set_sub_field(field)
                        }
                        ControlPanelAction::FilterChanged(text) => {
                            self.state.set_filter_text(text)
                        }
                        ControlPanelAction::CopySummary => self.handle_copy_summary(ctx),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Table Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            let table = self.state.loaded.as_ref().map(|l| &l.table);
            self.table_viewer.show(ui, table);
        });
    }
}
