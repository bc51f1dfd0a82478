use egui::{Color32, ProgressBar, RichText, Stroke, Widget, vec2};
use egui_material_icons::{icon_text, icons};
use shared::backend::Backend;
use shared::ui_events::UIEvent;
use shared::upload::{UploadId, UploadStatus};

use crate::{ACCENT, BG_TILE, GREEN, RED, TEXT_DIM, UI, card, format};

use super::{mime_icon, outline_badge};

const SUMMARY_TINT: Color32 = Color32::from_rgb(32, 46, 37);

impl<B: Backend> UI<B> {
    pub(crate) fn backup_page(&mut self, ui: &mut egui::Ui) {
        // upload area
        card().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(icon_text(icons::ICON_UPLOAD).size(16.0));
                ui.label(RichText::new("File Upload").strong().size(14.0));
            });
            ui.label(
                RichText::new("Drag and drop files or click to select files for backup")
                    .color(TEXT_DIM)
                    .size(11.0),
            );
            ui.add_space(8.0);

            egui::Frame::new()
                .stroke(Stroke::new(2.0, Color32::from_rgb(60, 60, 60)))
                .corner_radius(12.0)
                .inner_margin(24.0)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(140.0);
                    ui.vertical_centered(|ui| {
                        ui.add_space(12.0);
                        ui.label(
                            icon_text(icons::ICON_CLOUD_UPLOAD)
                                .color(TEXT_DIM)
                                .size(40.0),
                        );
                        ui.add_space(8.0);
                        ui.label(RichText::new("Drop files here").strong().size(16.0));
                        ui.label(
                            RichText::new("or click to browse your computer")
                                .color(TEXT_DIM)
                                .size(12.0),
                        );
                        ui.add_space(12.0);
                        let select = egui::Button::new(
                            RichText::new("Select Files").color(Color32::WHITE).size(13.0),
                        )
                        .fill(ACCENT)
                        .corner_radius(6.0)
                        .min_size(vec2(130.0, 34.0));
                        if ui.add(select).clicked() {
                            self.backend.submit(UIEvent::PickFiles).ok();
                        }
                    });
                });
        });

        // per-task progress
        if !self.uploads.is_empty() {
            ui.add_space(12.0);
            card().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(icon_text(icons::ICON_SHIELD).size(16.0));
                    ui.label(RichText::new("Upload Progress").strong().size(14.0));
                });
                ui.label(
                    RichText::new("Files are being encrypted and distributed to peers")
                        .color(TEXT_DIM)
                        .size(11.0),
                );
                ui.add_space(8.0);

                let mut to_remove: Option<UploadId> = None;
                for task in &self.uploads {
                    egui::Frame::new()
                        .fill(BG_TILE)
                        .corner_radius(10.0)
                        .inner_margin(12.0)
                        .show(ui, |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(icon_text(mime_icon(&task.mime)).size(16.0));
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(&task.name).size(13.0));
                                    ui.label(
                                        RichText::new(format::format_bytes(task.size))
                                            .color(TEXT_DIM)
                                            .size(11.0),
                                    );
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        // completed backups can no longer be cancelled
                                        if task.status != UploadStatus::Completed
                                            && ui
                                                .small_button(
                                                    RichText::new("×").color(RED).size(14.0),
                                                )
                                                .on_hover_text("Remove")
                                                .clicked()
                                        {
                                            to_remove = Some(task.id);
                                        }
                                        ui.label(
                                            RichText::new(task.status.label())
                                                .color(status_color(task.status))
                                                .size(11.0),
                                        );
                                    },
                                );
                            });

                            ProgressBar::new(task.progress / 100.0)
                                .show_percentage()
                                .ui(ui);

                            if task.status == UploadStatus::Completed
                                && let Some(chunks) = task.chunk_count
                                && !task.distributed_peers.is_empty()
                            {
                                ui.add_space(6.0);
                                egui::Frame::new()
                                    .fill(SUMMARY_TINT)
                                    .corner_radius(8.0)
                                    .inner_margin(10.0)
                                    .show(ui, |ui| {
                                        ui.set_min_width(ui.available_width());
                                        ui.horizontal(|ui| {
                                            ui.label(
                                                RichText::new(format!(
                                                    "✓ {chunks} chunks created"
                                                ))
                                                .color(GREEN)
                                                .size(11.0),
                                            );
                                            ui.label(
                                                RichText::new(format!(
                                                    "✓ Distributed to {} peers",
                                                    task.distributed_peers.len()
                                                ))
                                                .color(GREEN)
                                                .size(11.0),
                                            );
                                            for peer in &task.distributed_peers {
                                                outline_badge(ui, peer);
                                            }
                                        });
                                    });
                            }
                        });
                    ui.add_space(6.0);
                }

                if let Some(id) = to_remove {
                    self.remove_upload(id);
                }
            });
        }

        ui.add_space(12.0);

        // info cards
        ui.columns(2, |cols| {
            card().show(&mut cols[0], |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(icon_text(icons::ICON_SHIELD).color(GREEN).size(16.0));
                    ui.label(RichText::new("Encryption").strong().size(14.0));
                });
                ui.label(
                    RichText::new(
                        "All files are encrypted with AES-256 before being split into chunks \
                         and distributed across the peer network. Only you have the decryption \
                         key.",
                    )
                    .color(TEXT_DIM)
                    .size(11.0),
                );
            });
            card().show(&mut cols[1], |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(icon_text(icons::ICON_GROUP).color(ACCENT).size(16.0));
                    ui.label(RichText::new("Distribution").strong().size(14.0));
                });
                ui.label(
                    RichText::new(
                        "Files are automatically distributed across multiple peers for \
                         redundancy. Each chunk is stored on at least 3 different peers for \
                         maximum availability.",
                    )
                    .color(TEXT_DIM)
                    .size(11.0),
                );
            });
        });
    }
}

fn status_color(status: UploadStatus) -> Color32 {
    match status {
        UploadStatus::Completed => GREEN,
        UploadStatus::Error => RED,
        _ => ACCENT,
    }
}
