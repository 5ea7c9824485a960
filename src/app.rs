use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, tabs};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ReviewBrowserApp {
    pub state: AppState,
}

impl ReviewBrowserApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ReviewBrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title, authors, tab bar ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui);
            panels::tab_bar(ui, &mut self.state);
        });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| {
            tabs::active_tab(ui, &mut self.state);
        });
    }
}
