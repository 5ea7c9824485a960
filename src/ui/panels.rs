use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Tab};
use crate::ui::widgets::{notice, NoticeKind};

const TITLE: &str = "Machine Learning and Natural Language Processing in Clinical Trial \
                     Eligibility Criteria Parsing";

const AUTHORS: [(&str, &str); 2] = [
    (
        "Klaudia Kantor",
        "Roche Poland & Doctoral School of Poznan University of Technology",
    ),
    ("Mikołaj Morzy", "Poznan University of Technology"),
];

const ABOUT: &str = "This page contains supplementary material to the paper 'Machine Learning \
and Natural Language Processing in Clinical Trial Eligibility Criteria Parsing'. The tabs below \
offer access to three tables containing list of all papers included in the scoping review, \
breakdown of papers by the country of author/research and general type of publication, and the \
full feature extraction from all included studies.";

// ---------------------------------------------------------------------------
// Header – title, authors, description
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.add_space(6.0);
    ui.heading(RichText::new(TITLE).strong());
    ui.label(RichText::new("A Scoping Review").size(18.0));
    ui.add_space(4.0);

    for (name, affiliation) in AUTHORS {
        ui.horizontal(|ui: &mut Ui| {
            ui.label("•");
            ui.strong(name);
            ui.label(format!(", {affiliation}"));
        });
    }

    ui.add_space(4.0);
    notice(ui, NoticeKind::Success, ABOUT);
    ui.separator();
}

// ---------------------------------------------------------------------------
// Tab bar + status line
// ---------------------------------------------------------------------------

pub fn tab_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            let text = RichText::new(tab.title()).color(Color32::from_rgb(128, 61, 236));
            ui.selectable_value(&mut state.active_tab, tab, text);
        }

        if let Some(msg) = &state.status_message {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
                ui.label(RichText::new(msg).italics());
            });
        }
    });
    ui.separator();
}
