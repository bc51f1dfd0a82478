use egui::{Color32, ProgressBar, RichText, Widget};
use egui_material_icons::{icon_text, icons};
use shared::peer::{Peer, PeerStatus};

use crate::notifications::kind_color;
use crate::{ACCENT, BG_CARD, BG_TILE, GREEN, RED, TEXT_DIM, UI, card};

use super::badge;

const GREEN_TINT: Color32 = Color32::from_rgb(32, 46, 37);
const RED_TINT: Color32 = Color32::from_rgb(48, 32, 32);

impl<B> UI<B> {
    pub(crate) fn dashboard_page(&mut self, ui: &mut egui::Ui) {
        // headline stats
        ui.columns(3, |cols| {
            stat_card(&mut cols[0], ACCENT, icons::ICON_GROUP, "Connected Peers", |ui| {
                ui.label(
                    RichText::new(self.stats.connected_peers.to_string())
                        .strong()
                        .color(Color32::WHITE)
                        .size(26.0),
                );
                ui.horizontal(|ui| {
                    ui.label(
                        icon_text(icons::ICON_TRENDING_UP)
                            .color(Color32::WHITE)
                            .size(12.0),
                    );
                    ui.label(
                        RichText::new("+2 from last hour")
                            .color(Color32::from_rgb(220, 230, 255))
                            .size(10.0),
                    );
                });
            });
            stat_card(
                &mut cols[1],
                ACCENT,
                icons::ICON_DESCRIPTION,
                "Files Backed Up",
                |ui| {
                    ui.label(
                        RichText::new(self.stats.files_backed_up.to_string())
                            .strong()
                            .color(Color32::WHITE)
                            .size(26.0),
                    );
                    ui.horizontal(|ui| {
                        ui.label(
                            icon_text(icons::ICON_TRENDING_UP)
                                .color(Color32::WHITE)
                                .size(12.0),
                        );
                        ui.label(
                            RichText::new("+12 from yesterday")
                                .color(Color32::from_rgb(220, 230, 255))
                                .size(10.0),
                        );
                    });
                },
            );
            stat_card(
                &mut cols[2],
                BG_CARD,
                icons::ICON_STORAGE,
                "Storage Used",
                |ui| {
                    ui.label(
                        RichText::new(format!("{:.1}GB", self.stats.storage_used_gb))
                            .strong()
                            .size(26.0),
                    );
                    ProgressBar::new(self.stats.storage_used_gb / 100.0).ui(ui);
                    ui.label(
                        RichText::new("of 100GB available")
                            .color(TEXT_DIM)
                            .size(10.0),
                    );
                },
            );
        });

        ui.add_space(12.0);

        // peer grid
        card().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(icon_text(icons::ICON_SHOW_CHART).size(16.0));
                ui.label(RichText::new("Peer Network Status").strong().size(14.0));
            });
            ui.label(
                RichText::new("Real-time status of connected peers in your network")
                    .color(TEXT_DIM)
                    .size(11.0),
            );
            ui.add_space(8.0);

            for row in self.dashboard_peers.chunks(3) {
                ui.columns(3, |cols| {
                    for (i, peer) in row.iter().enumerate() {
                        peer_tile(&mut cols[i], peer);
                    }
                });
            }
        });

        ui.add_space(12.0);

        // activity log
        card().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(icon_text(icons::ICON_SCHEDULE).size(16.0));
                ui.label(RichText::new("System Logs").strong().size(14.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.show_logs { "Hide Logs" } else { "Show Logs" };
                    if ui.button(RichText::new(label).size(11.0)).clicked() {
                        self.show_logs = !self.show_logs;
                    }
                });
            });
            ui.label(
                RichText::new("Recent activity and system events")
                    .color(TEXT_DIM)
                    .size(11.0),
            );

            if self.show_logs {
                ui.add_space(8.0);
                egui::ScrollArea::vertical().max_height(256.0).show(ui, |ui| {
                    for entry in &self.logs {
                        egui::Frame::new()
                            .fill(BG_TILE)
                            .corner_radius(8.0)
                            .inner_margin(10.0)
                            .show(ui, |ui| {
                                ui.set_min_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    ui.label(
                                        RichText::new(&entry.time)
                                            .monospace()
                                            .color(TEXT_DIM)
                                            .size(10.0),
                                    );
                                    badge(ui, entry.level.label(), kind_color(entry.level));
                                    ui.label(RichText::new(&entry.message).size(11.0));
                                });
                            });
                        ui.add_space(4.0);
                    }
                });
            }
        });
    }
}

fn stat_card(
    ui: &mut egui::Ui,
    fill: Color32,
    icon: &str,
    title: &str,
    body: impl FnOnce(&mut egui::Ui),
) {
    let title_color = if fill == BG_CARD { TEXT_DIM } else { Color32::WHITE };
    egui::Frame::new()
        .fill(fill)
        .corner_radius(12.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(title).color(title_color).size(11.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(icon_text(icon).color(title_color).size(14.0));
                });
            });
            body(ui);
        });
}

fn peer_tile(ui: &mut egui::Ui, peer: &Peer) {
    let online = peer.status == PeerStatus::Online;
    egui::Frame::new()
        .fill(if online { GREEN_TINT } else { RED_TINT })
        .corner_radius(10.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                if online {
                    ui.label(icon_text(icons::ICON_WIFI).color(GREEN).size(16.0));
                } else {
                    ui.label(icon_text(icons::ICON_WIFI_OFF).color(RED).size(16.0));
                }
                ui.vertical(|ui| {
                    ui.label(RichText::new(&peer.id).size(12.0));
                    if let Some(latency) = peer.latency {
                        ui.horizontal(|ui| {
                            ui.label(icon_text(icons::ICON_BOLT).color(TEXT_DIM).size(10.0));
                            ui.label(
                                RichText::new(format!("{latency}ms"))
                                    .color(TEXT_DIM)
                                    .size(10.0),
                            );
                        });
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    badge(
                        ui,
                        if online { "online" } else { "offline" },
                        if online { GREEN } else { Color32::from_rgb(90, 90, 95) },
                    );
                });
            });
        });
    ui.add_space(4.0);
}
