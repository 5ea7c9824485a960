use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{CellValue, FilteredView, Table, YEAR_COLUMN};

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Table renderer
// ---------------------------------------------------------------------------

/// Cell text as shown on screen. The year column is printed as a bare
/// integer even when the source stored it as a float.
pub fn display_cell(column: &str, value: &CellValue) -> String {
    if column == YEAR_COLUMN {
        if let Some(year) = value.as_i64() {
            return year.to_string();
        }
    }
    value.to_string()
}

/// Render `view` of `table` as a striped, scrollable grid.
pub fn data_table(ui: &mut Ui, id: &str, table: &Table, view: &FilteredView) {
    ui.label(format!("{} of {} rows", view.len(), table.len()));

    if table.columns.is_empty() {
        return;
    }
    if view.is_empty() && !table.is_empty() {
        ui.weak("No rows match the current filters.");
    }

    ui.push_id(id, |ui: &mut Ui| {
        egui::ScrollArea::horizontal()
            .auto_shrink([false, false])
            .show(ui, |ui: &mut Ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .columns(
                        Column::initial(160.0).at_least(40.0).clip(true),
                        table.columns.len(),
                    )
                    .min_scrolled_height(0.0)
                    .header(ROW_HEIGHT, |mut header| {
                        for col in &table.columns {
                            header.col(|ui: &mut Ui| {
                                ui.strong(col);
                            });
                        }
                    })
                    .body(|body| {
                        let rows = view.indices();
                        body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                            let source_row = rows[row.index()];
                            for col in &table.columns {
                                let text = display_cell(col, table.cell(source_row, col));
                                row.col(|ui: &mut Ui| {
                                    ui.add(egui::Label::new(text.as_str()).truncate())
                                        .on_hover_text(text.as_str());
                                });
                            }
                        });
                    });
            });
    });
}
