// MedConnect - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and drives the record source worker.

use crate::app::source::SourceWorker;
use crate::app::state::{AppState, PendingRequest};
use crate::ui;
use crate::util::constants;
use std::time::Duration;

/// The MedConnect application.
pub struct MedConnectApp {
    pub state: AppState,
    pub worker: SourceWorker,
}

impl MedConnectApp {
    /// Create the application and start the initial provider fetch.
    pub fn new(mut state: AppState, worker: SourceWorker) -> Self {
        let request = state.begin_fetch();
        let app = Self { state, worker };
        app.submit(request);
        app
    }

    fn submit(&self, request: PendingRequest) {
        self.worker.submit(request.id, request.kind);
    }
}

impl eframe::App for MedConnectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for source replies.
        for response in self.worker.poll_responses() {
            self.state.handle_response(response);
        }
        if self.state.loading {
            ctx.request_repaint_after(Duration::from_millis(constants::SOURCE_POLL_INTERVAL_MS));
        }

        // Header
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::header::render(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.all_providers.len();
                    if total > 0 {
                        ui.label(format!("{}/{total} doctors", self.state.view.len()));
                    }
                    if self.state.debug_mode {
                        ui.label(egui::RichText::new("DEBUG").small().weak());
                    }
                });
            });
        });

        // Left sidebar: filter controls.
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_filters")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::filters::render(ui, &mut self.state);
                    });
            });

        // Central panel: heading, search box, results.
        let mut submitted = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Find the Right Doctor for You");
                ui.label(egui::RichText::new(constants::APP_TAGLINE).color(ui::theme::MUTED));
            });
            ui.add_space(8.0);
            submitted = ui::panels::search::render(ui, &mut self.state);
            ui.add_space(8.0);
            ui.separator();
            ui::panels::provider_list::render(ui, &mut self.state);
        });

        if let Some(query) = submitted {
            tracing::debug!(query = %query, "Search submitted");
            if let Some(request) = self.state.begin_search(&query) {
                self.submit(request);
            }
            ctx.request_repaint();
        }

        // Favorites window
        ui::panels::favorites::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Favorites are written on every toggle; this is a final flush.
        if let Err(e) = self.state.favorites.persist() {
            tracing::warn!(error = %e, "Failed to persist favorites on exit");
        }
        tracing::info!("MedConnect exiting");
    }
}
