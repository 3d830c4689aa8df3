mod app;
mod color;
mod data;
mod state;
mod ui;

use std::sync::mpsc;
use std::thread;

use app::SstDashboardApp;
use chrono::Local;
use eframe::egui;

use crate::data::loader;
use crate::state::AppState;

const WINDOW_TITLE: &str = "해수온 상승 대시보드";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| {
            ui::fonts::install_korean_font(&cc.egui_ctx);

            let today = Local::now().date_naive();

            // Fetch the public series off the UI thread; the result lands in
            // AppState via the channel and triggers a repaint.
            let (tx, rx) = mpsc::channel();
            let repaint_ctx = cc.egui_ctx.clone();
            thread::spawn(move || {
                let loaded = loader::load_public_series(loader::PUBLIC_DATA_URL, today);
                if tx.send(loaded).is_ok() {
                    repaint_ctx.request_repaint();
                }
            });

            let state = AppState::new(loader::sample_series(today));
            Ok(Box::new(SstDashboardApp::new(state, rx)))
        }),
    )
}
