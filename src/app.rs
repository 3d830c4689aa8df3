use std::sync::mpsc::Receiver;

use eframe::egui;

use crate::data::loader::PublicSeries;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SstDashboardApp {
    pub state: AppState,
    /// Delivers the startup fetch result from the worker thread.
    public_rx: Receiver<PublicSeries>,
}

impl SstDashboardApp {
    pub fn new(state: AppState, public_rx: Receiver<PublicSeries>) -> Self {
        Self { state, public_rx }
    }

    /// Take the fetch result once it arrives. The base series is loaded
    /// exactly once per process; later frames only redraw.
    fn poll_public_series(&mut self) {
        if self.state.loading {
            if let Ok(loaded) = self.public_rx.try_recv() {
                self.state.set_public(loaded);
            }
        }
    }
}

impl eframe::App for SstDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_public_series();

        // ---- Top panel: title and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: region filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts, downloads, conclusion ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::dashboard_body(ui, &mut self.state);
        });
    }
}
