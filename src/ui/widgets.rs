use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::config::ExportTarget;
use crate::data::filter::YearRange;

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub enum NoticeKind {
    Info,
    Success,
}

/// A tinted box of explanatory text.
pub fn notice(ui: &mut Ui, kind: NoticeKind, text: &str) {
    let (fill, stroke) = match kind {
        NoticeKind::Info => (
            Color32::from_rgb(226, 236, 250),
            Color32::from_rgb(28, 79, 140),
        ),
        NoticeKind::Success => (
            Color32::from_rgb(224, 243, 229),
            Color32::from_rgb(23, 107, 52),
        ),
    };
    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(text).color(stroke));
    });
}

// ---------------------------------------------------------------------------
// Paired year slider
// ---------------------------------------------------------------------------

/// Two linked sliders over `domain`. Each slider's range ends at the other
/// handle, so the returned range always has `lower <= upper`.
pub fn year_range_slider(
    ui: &mut Ui,
    domain: &RangeInclusive<i32>,
    current: YearRange,
) -> YearRange {
    let mut lower = current.lower;
    let mut upper = current.upper;

    ui.horizontal(|ui: &mut Ui| {
        ui.add(egui::Slider::new(&mut lower, *domain.start()..=upper).text("from"));
        ui.add(egui::Slider::new(&mut upper, lower..=*domain.end()).text("to"));
        if ui
            .add_enabled(
                current != YearRange::new(*domain.start(), *domain.end()),
                egui::Button::new("Reset"),
            )
            .clicked()
        {
            lower = *domain.start();
            upper = *domain.end();
        }
    });

    YearRange::new(lower.min(upper), upper)
}

// ---------------------------------------------------------------------------
// Multi-select
// ---------------------------------------------------------------------------

/// What the user did to a multi-select this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiSelectEvent {
    Toggled(String),
    Cleared,
}

fn summary(selected: &BTreeSet<String>) -> String {
    match selected.len() {
        0 => "Choose options".to_string(),
        1..=3 => selected.iter().cloned().collect::<Vec<_>>().join(", "),
        n => format!("{n} selected"),
    }
}

/// Drop-down of checkboxes over `options`. `selected` is read-only here;
/// changes come back as events for the caller to apply.
pub fn multi_select(
    ui: &mut Ui,
    label: &str,
    options: &BTreeSet<String>,
    selected: &BTreeSet<String>,
) -> Vec<MultiSelectEvent> {
    let mut events = Vec::new();

    ui.horizontal(|ui: &mut Ui| {
        ui.strong(label);
        egui::ComboBox::from_id_salt(label)
            .width(260.0)
            .selected_text(summary(selected))
            .close_behavior(egui::PopupCloseBehavior::CloseOnClickOutside)
            .show_ui(ui, |ui: &mut Ui| {
                for option in options {
                    let mut checked = selected.contains(option);
                    if ui.checkbox(&mut checked, option).changed() {
                        events.push(MultiSelectEvent::Toggled(option.clone()));
                    }
                }
            });
        if ui
            .add_enabled(!selected.is_empty(), egui::Button::new("✕").small())
            .on_hover_text("Clear selection")
            .clicked()
        {
            events.push(MultiSelectEvent::Cleared);
        }
    });

    events
}

// ---------------------------------------------------------------------------
// Download button
// ---------------------------------------------------------------------------

/// "Download table" button with its own widget identity. Returns `true`
/// when clicked.
pub fn download_button(ui: &mut Ui, target: &ExportTarget) -> bool {
    ui.push_id(target.key, |ui: &mut Ui| {
        ui.button("Download table")
            .on_hover_text(format!("{} ({})", target.file_name, target.mime))
            .clicked()
    })
    .inner
}
