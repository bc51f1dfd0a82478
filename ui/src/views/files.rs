use egui::{Color32, RichText, TextEdit};
use egui_material_icons::{icon_text, icons};
use shared::backend::Backend;
use shared::demo::FileAvailability;

use crate::{BG_TILE, GREEN, RED, TEXT_DIM, UI, card, format};

use super::{badge, mime_icon, outline_badge};

const GRAY: Color32 = Color32::from_rgb(95, 95, 105);

impl<B: Backend> UI<B> {
    pub(crate) fn files_page(&mut self, ui: &mut egui::Ui) {
        let total_files = self.catalog.len();
        let total_size: u64 = self.catalog.iter().map(|f| f.size).sum();
        let available = self
            .catalog
            .iter()
            .filter(|f| f.availability == FileAvailability::Available)
            .count();

        ui.columns(3, |cols| {
            stat_card(
                &mut cols[0],
                "Total Files",
                icons::ICON_DESCRIPTION,
                &total_files.to_string(),
                None,
            );
            stat_card(
                &mut cols[1],
                "Total Size",
                icons::ICON_STORAGE,
                &format::format_bytes(total_size),
                None,
            );
            let pct = if total_files == 0 {
                0
            } else {
                (available as f32 / total_files as f32 * 100.0).round() as u32
            };
            stat_card(
                &mut cols[2],
                "Available",
                icons::ICON_GROUP,
                &available.to_string(),
                Some(format!("{pct}% of files")),
            );
        });

        ui.add_space(12.0);

        let mut restored: Option<String> = None;
        let mut to_delete: Option<u32> = None;

        card().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("File Management").strong().size(14.0));
            ui.label(
                RichText::new("Search and filter your backed up files")
                    .color(TEXT_DIM)
                    .size(11.0),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(icon_text(icons::ICON_SEARCH).color(TEXT_DIM).size(14.0));
                TextEdit::singleline(&mut self.file_search)
                    .hint_text("Search files...")
                    .desired_width(ui.available_width() - 140.0)
                    .show(ui);

                let filter_label = match self.file_filter {
                    None => "Filter: All Files".to_string(),
                    Some(f) => format!("Filter: {}", f.label()),
                };
                ui.menu_button(filter_label, |ui| {
                    if ui.button("All Files").clicked() {
                        self.file_filter = None;
                        ui.close();
                    }
                    for choice in [
                        FileAvailability::Available,
                        FileAvailability::Partial,
                        FileAvailability::Unavailable,
                    ] {
                        if ui.button(choice.label()).clicked() {
                            self.file_filter = Some(choice);
                            ui.close();
                        }
                    }
                });
            });

            ui.add_space(8.0);

            let needle = self.file_search.to_lowercase();
            let filtered: Vec<_> = self
                .catalog
                .iter()
                .filter(|f| f.name.to_lowercase().contains(&needle))
                .filter(|f| self.file_filter.is_none_or(|wanted| f.availability == wanted))
                .collect();

            if filtered.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(
                        icon_text(icons::ICON_DESCRIPTION)
                            .color(TEXT_DIM)
                            .size(36.0),
                    );
                    ui.label(RichText::new("No files found").strong().size(14.0));
                    let hint = if needle.is_empty() {
                        "Start by backing up some files"
                    } else {
                        "Try adjusting your search terms"
                    };
                    ui.label(RichText::new(hint).color(TEXT_DIM).size(11.0));
                    ui.add_space(24.0);
                });
                return;
            }

            egui::Grid::new("files_table")
                .num_columns(7)
                .striped(true)
                .spacing([16.0, 10.0])
                .show(ui, |ui| {
                    for head in ["File", "Date Added", "Size", "Chunks", "Peers", "Status", "Actions"]
                    {
                        ui.label(RichText::new(head).color(TEXT_DIM).size(11.0).strong());
                    }
                    ui.end_row();

                    for file in filtered {
                        ui.horizontal(|ui| {
                            ui.label(icon_text(mime_icon(&file.mime)).size(14.0));
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&file.name).size(12.0));
                                ui.label(RichText::new(&file.mime).color(TEXT_DIM).size(10.0));
                            });
                        });
                        ui.horizontal(|ui| {
                            ui.label(icon_text(icons::ICON_SCHEDULE).color(TEXT_DIM).size(12.0));
                            ui.label(RichText::new(&file.date_added).size(12.0));
                        });
                        ui.label(RichText::new(format::format_bytes(file.size)).size(12.0));
                        ui.label(RichText::new(file.chunks.to_string()).size(12.0));
                        ui.horizontal(|ui| {
                            // fixture ids all carry the peer_ prefix, the chips
                            // only show the distinctive tail
                            for peer in file.peers.iter().take(2) {
                                let tail = &peer[peer.len().saturating_sub(6)..];
                                outline_badge(ui, tail);
                            }
                            if file.peers.len() > 2 {
                                outline_badge(ui, &format!("+{}", file.peers.len() - 2));
                            }
                        });
                        badge(
                            ui,
                            file.availability.label(),
                            availability_color(file.availability),
                        );
                        ui.horizontal(|ui| {
                            let can_restore = file.availability != FileAvailability::Unavailable;
                            let restore = egui::Button::new(
                                icon_text(icons::ICON_DOWNLOAD).size(13.0),
                            )
                            .fill(BG_TILE);
                            if ui
                                .add_enabled(can_restore, restore)
                                .on_hover_text("Restore")
                                .clicked()
                            {
                                restored = Some(file.name.clone());
                            }
                            let delete =
                                egui::Button::new(icon_text(icons::ICON_DELETE).color(RED).size(13.0))
                                    .fill(BG_TILE);
                            if ui.add(delete).on_hover_text("Delete").clicked() {
                                to_delete = Some(file.id);
                            }
                        });
                        ui.end_row();
                    }
                });
        });

        if let Some(name) = restored {
            log::info!("restoring {name} from the network");
            self.show_toast(format!("Restoring {name}"), egui_toast::ToastKind::Info);
        }
        if let Some(id) = to_delete {
            self.catalog.retain(|f| f.id != id);
        }
    }
}

fn availability_color(availability: FileAvailability) -> Color32 {
    match availability {
        FileAvailability::Available => GREEN,
        FileAvailability::Partial => GRAY,
        FileAvailability::Unavailable => RED,
    }
}

fn stat_card(
    ui: &mut egui::Ui,
    title: &str,
    icon: &str,
    value: &str,
    caption: Option<String>,
) {
    card().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(title).color(TEXT_DIM).size(12.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(icon_text(icon).color(TEXT_DIM).size(14.0));
            });
        });
        ui.label(RichText::new(value).strong().size(22.0));
        if let Some(caption) = caption {
            ui.label(RichText::new(caption).color(TEXT_DIM).size(10.0));
        }
    });
}
