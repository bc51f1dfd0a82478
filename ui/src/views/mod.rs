use egui::{Color32, RichText, Stroke, vec2};
use egui_material_icons::icons;

use crate::TEXT_DIM;

mod backup;
mod dashboard;
mod files;
mod peers;
mod settings;

/// Solid pill with small white text, the "badge" of the web dashboard.
pub(crate) fn badge(ui: &mut egui::Ui, text: &str, fill: Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(vec2(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(Color32::WHITE).size(10.0));
        });
}

/// Outlined pill for low-emphasis chips like peer ids.
pub(crate) fn outline_badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .stroke(Stroke::new(1.0, Color32::from_rgb(70, 70, 75)))
        .corner_radius(8.0)
        .inner_margin(vec2(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(TEXT_DIM).size(9.0));
        });
}

pub(crate) fn mime_icon(mime: &str) -> &'static str {
    if mime.starts_with("image/") {
        icons::ICON_IMAGE
    } else if mime.starts_with("video/") {
        icons::ICON_MOVIE
    } else if mime.starts_with("audio/") {
        icons::ICON_MUSIC_NOTE
    } else {
        icons::ICON_DESCRIPTION
    }
}
