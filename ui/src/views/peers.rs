use egui::{Color32, RichText, TextEdit};
use egui_material_icons::{icon_text, icons};
use shared::backend::Backend;
use shared::peer::{self, Peer, PeerStatus};
use shared::ui_events::UIEvent;

use crate::{GREEN, RED, TEXT_DIM, UI, YELLOW, card, format};

use super::badge;

const GRAY: Color32 = Color32::from_rgb(95, 95, 105);

impl<B: Backend> UI<B> {
    pub(crate) fn peers_page(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let label = if self.refreshing_peers {
                "Refreshing..."
            } else {
                "Refresh"
            };
            let refresh = egui::Button::new(
                RichText::new(format!("{} {label}", icons::ICON_REFRESH)).size(12.0),
            );
            if ui.add_enabled(!self.refreshing_peers, refresh).clicked() {
                self.refreshing_peers = true;
                self.backend.submit(UIEvent::FetchPeers).ok();
            }
        });

        let total = self.peers.len();
        let online = peer::online_count(&self.peers);
        let (offered, used) = peer::storage_totals(&self.peers);
        let latency = peer::average_latency(&self.peers).unwrap_or(0);

        ui.columns(4, |cols| {
            stat_card(&mut cols[0], "Total Peers", icons::ICON_GROUP, TEXT_DIM, |ui| {
                ui.label(RichText::new(total.to_string()).strong().size(22.0));
            });
            stat_card(&mut cols[1], "Online", icons::ICON_WIFI, GREEN, |ui| {
                ui.label(
                    RichText::new(online.to_string())
                        .strong()
                        .color(GREEN)
                        .size(22.0),
                );
                let pct = if total == 0 {
                    0
                } else {
                    (online as f32 / total as f32 * 100.0).round() as u32
                };
                ui.label(RichText::new(format!("{pct}% connected")).color(TEXT_DIM).size(10.0));
            });
            stat_card(
                &mut cols[2],
                "Total Storage",
                icons::ICON_STORAGE,
                TEXT_DIM,
                |ui| {
                    ui.label(
                        RichText::new(format::format_bytes(offered))
                            .strong()
                            .size(22.0),
                    );
                    ui.label(
                        RichText::new(format!("{} used", format::format_bytes(used)))
                            .color(TEXT_DIM)
                            .size(10.0),
                    );
                },
            );
            stat_card(&mut cols[3], "Avg Latency", icons::ICON_BOLT, TEXT_DIM, |ui| {
                ui.label(RichText::new(format!("{latency}ms")).strong().size(22.0));
            });
        });

        ui.add_space(12.0);

        card().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(icon_text(icons::ICON_SHOW_CHART).size(16.0));
                ui.label(RichText::new("Connected Peers").strong().size(14.0));
            });
            ui.label(
                RichText::new("Live status of all peers in your network")
                    .color(TEXT_DIM)
                    .size(11.0),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(icon_text(icons::ICON_SEARCH).color(TEXT_DIM).size(14.0));
                TextEdit::singleline(&mut self.peer_search)
                    .hint_text("Search peers...")
                    .desired_width(ui.available_width())
                    .show(ui);
            });

            ui.add_space(8.0);

            let needle = self.peer_search.to_lowercase();
            let filtered: Vec<&Peer> = self
                .peers
                .iter()
                .filter(|p| {
                    p.id.to_lowercase().contains(&needle)
                        || p.address.to_lowercase().contains(&needle)
                })
                .collect();

            if filtered.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(icon_text(icons::ICON_GROUP).color(TEXT_DIM).size(36.0));
                    ui.label(RichText::new("No peers found").strong().size(14.0));
                    let hint = if needle.is_empty() {
                        "No peers are currently connected"
                    } else {
                        "Try adjusting your search terms"
                    };
                    ui.label(RichText::new(hint).color(TEXT_DIM).size(11.0));
                    ui.add_space(24.0);
                });
                return;
            }

            egui::Grid::new("peers_table")
                .num_columns(8)
                .striped(true)
                .spacing([16.0, 10.0])
                .show(ui, |ui| {
                    for head in [
                        "Peer ID", "Address", "Status", "Latency", "Storage", "Files",
                        "Reputation", "Last Seen",
                    ] {
                        ui.label(RichText::new(head).color(TEXT_DIM).size(11.0).strong());
                    }
                    ui.end_row();

                    for p in filtered {
                        ui.horizontal(|ui| {
                            ui.label(
                                icon_text(status_icon(p.status))
                                    .color(status_icon_color(p.status))
                                    .size(14.0),
                            );
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&p.id).monospace().size(12.0));
                                ui.label(
                                    RichText::new(format!("v{}", p.version))
                                        .color(TEXT_DIM)
                                        .size(10.0),
                                );
                            });
                        });
                        ui.label(RichText::new(&p.address).monospace().size(11.0));
                        badge(ui, p.status.label(), status_color(p.status));
                        match p.latency {
                            Some(ms) => ui.label(RichText::new(format!("{ms}ms")).size(12.0)),
                            None => ui.label(RichText::new("-").color(TEXT_DIM).size(12.0)),
                        };
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!(
                                    "{} / {}",
                                    format::format_bytes(p.storage_used),
                                    format::format_bytes(p.storage_offered)
                                ))
                                .size(11.0),
                            );
                            let pct = if p.storage_offered == 0 {
                                0
                            } else {
                                (p.storage_used as f64 / p.storage_offered as f64 * 100.0).round()
                                    as u32
                            };
                            ui.label(
                                RichText::new(format!("{pct}% used")).color(TEXT_DIM).size(10.0),
                            );
                        });
                        ui.label(RichText::new(p.files_shared.to_string()).size(12.0));
                        ui.horizontal(|ui| {
                            let color = reputation_color(p.reputation);
                            ui.label(icon_text(icons::ICON_SHIELD).color(color).size(13.0));
                            ui.label(
                                RichText::new(format!("{}%", p.reputation))
                                    .color(color)
                                    .size(12.0),
                            );
                        });
                        ui.horizontal(|ui| {
                            ui.label(icon_text(icons::ICON_SCHEDULE).color(TEXT_DIM).size(11.0));
                            ui.label(RichText::new(format::clock_time(&p.last_seen)).size(11.0));
                        });
                        ui.end_row();
                    }
                });
        });
    }
}

fn status_icon(status: PeerStatus) -> &'static str {
    match status {
        PeerStatus::Online => icons::ICON_WIFI,
        PeerStatus::Offline => icons::ICON_WIFI_OFF,
        PeerStatus::Connecting => icons::ICON_SHOW_CHART,
    }
}

fn status_icon_color(status: PeerStatus) -> Color32 {
    match status {
        PeerStatus::Online => GREEN,
        PeerStatus::Offline => RED,
        PeerStatus::Connecting => YELLOW,
    }
}

fn status_color(status: PeerStatus) -> Color32 {
    match status {
        PeerStatus::Online => GREEN,
        PeerStatus::Offline => GRAY,
        PeerStatus::Connecting => YELLOW,
    }
}

fn reputation_color(reputation: u8) -> Color32 {
    if reputation >= 95 {
        GREEN
    } else if reputation >= 85 {
        YELLOW
    } else {
        RED
    }
}

fn stat_card(
    ui: &mut egui::Ui,
    title: &str,
    icon: &str,
    icon_color: Color32,
    body: impl FnOnce(&mut egui::Ui),
) {
    card().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(title).color(TEXT_DIM).size(12.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(icon_text(icon).color(icon_color).size(14.0));
            });
        });
        body(ui);
    });
}
