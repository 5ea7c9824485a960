use eframe::egui::Ui;

use crate::config::ExportTarget;
use crate::data::facet::Facet;
use crate::state::{AppState, Tab};
use crate::ui::table::data_table;
use crate::ui::widgets::{
    download_button, multi_select, notice, year_range_slider, MultiSelectEvent, NoticeKind,
};

// ---------------------------------------------------------------------------
// Tab bodies
// ---------------------------------------------------------------------------

pub fn active_tab(ui: &mut Ui, state: &mut AppState) {
    match state.active_tab {
        Tab::Articles => articles_tab(ui, state),
        Tab::Countries => countries_tab(ui, state),
        Tab::Features => features_tab(ui, state),
    }
}

fn articles_tab(ui: &mut Ui, state: &mut AppState) {
    notice(
        ui,
        NoticeKind::Info,
        "Use the slider to limit the year range of publications",
    );
    ui.add_space(4.0);

    let years = year_range_slider(ui, &state.year_domain, state.years);
    state.set_year_range(years);

    export_row(ui, state, Tab::Articles);
    let (table, view) = state.table_view(Tab::Articles);
    data_table(ui, "articles_table", table, view);
}

fn countries_tab(ui: &mut Ui, state: &mut AppState) {
    notice(
        ui,
        NoticeKind::Info,
        "If you want to limit the list articles to a specific country, therapeutic area \
         or general publication type, simply use the widgets below to enter filtering criteria.",
    );
    ui.add_space(4.0);

    for facet in Facet::ALL {
        let events = {
            let options = state.tables.facets.options(facet);
            let selected = state.facets.selected(facet).cloned().unwrap_or_default();
            multi_select(ui, facet.label(), options, &selected)
        };
        for event in events {
            match event {
                MultiSelectEvent::Toggled(option) => state.toggle_facet_option(facet, &option),
                MultiSelectEvent::Cleared => state.clear_facet(facet),
            }
        }
    }

    if state.facets.active_facets() > 1 && ui.small_button("Clear all filters").clicked() {
        state.clear_all_facets();
    }

    export_row(ui, state, Tab::Countries);
    let (table, view) = state.table_view(Tab::Countries);
    data_table(ui, "countries_table", table, view);
}

fn features_tab(ui: &mut Ui, state: &AppState) {
    let (table, view) = state.table_view(Tab::Features);
    data_table(ui, "features_table", table, view);
}

// ---------------------------------------------------------------------------
// Download
// ---------------------------------------------------------------------------

fn export_row(ui: &mut Ui, state: &mut AppState, tab: Tab) {
    let Some(target) = tab.export_target() else {
        return;
    };
    ui.add_space(4.0);
    if download_button(ui, &target) {
        save_export(state, tab, &target);
    }
    ui.add_space(4.0);
    ui.separator();
}

/// Ask where to save, then write the tab's current view there.
pub fn save_export(state: &mut AppState, tab: Tab, target: &ExportTarget) {
    let file = rfd::FileDialog::new()
        .set_title("Download table")
        .set_file_name(target.file_name)
        .add_filter("CSV", &["csv"])
        .save_file();

    let Some(path) = file else {
        return;
    };
    if let Err(e) = state.export_to(tab, target, &path) {
        log::error!("Failed to export {}: {e:#}", target.file_name);
        state.status_message = Some(format!("Error: {e}"));
    }
}
