use egui::{Color32, DragValue, Id, Modal, RichText, Slider, TextEdit, TextStyle, vec2};
use egui_material_icons::{icon_text, icons};
use egui_toast::ToastKind;
use shared::backend::Backend;
use shared::identity;
use shared::ui_events::UIEvent;

use crate::{ACCENT, BG_TILE, GREEN, RED, TEXT_DIM, UI, YELLOW, card};

impl<B: Backend> UI<B> {
    pub(crate) fn settings_page(&mut self, ui: &mut egui::Ui) {
        self.identity_card(ui);
        ui.add_space(12.0);
        self.storage_card(ui);
        ui.add_space(12.0);
        self.network_card(ui);
        ui.add_space(12.0);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let save = egui::Button::new(
                RichText::new("Save Settings").color(Color32::WHITE).size(13.0),
            )
            .fill(ACCENT)
            .corner_radius(6.0)
            .min_size(vec2(130.0, 34.0));
            if ui.add(save).clicked() {
                self.settings.bootstrap_nodes = self
                    .bootstrap_text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect();
                self.backend
                    .submit(UIEvent::SaveSettings(self.settings.clone()))
                    .ok();
                self.show_toast("Settings saved", ToastKind::Success);
            }
        });

        self.regenerate_key_modal(ui);
    }

    fn identity_card(&mut self, ui: &mut egui::Ui) {
        card().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(icon_text(icons::ICON_KEY).size(16.0));
                ui.label(RichText::new("Identity Management").strong().size(14.0));
            });
            ui.label(
                RichText::new("Manage your cryptographic identity and private keys")
                    .color(TEXT_DIM)
                    .size(11.0),
            );
            ui.add_space(8.0);

            info_alert(
                ui,
                icons::ICON_SHIELD,
                TEXT_DIM,
                "Your private key is used to encrypt and decrypt your files. Keep it secure \
                 and never share it with anyone.",
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Private Key").size(12.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let eye = if self.show_key {
                        icons::ICON_VISIBILITY_OFF
                    } else {
                        icons::ICON_VISIBILITY
                    };
                    if ui.small_button(icon_text(eye).size(13.0)).clicked() {
                        self.show_key = !self.show_key;
                    }
                });
            });

            TextEdit::multiline(&mut self.key_text)
                .font(TextStyle::Monospace)
                .password(!self.show_key)
                .desired_rows(6)
                .desired_width(ui.available_width())
                .show(ui);

            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                if ui
                    .button(RichText::new(format!("{} Generate New Key", icons::ICON_REFRESH)).size(12.0))
                    .clicked()
                {
                    self.confirm_regenerate = true;
                }
                if ui
                    .button(RichText::new(format!("{} Import Key", icons::ICON_UPLOAD)).size(12.0))
                    .clicked()
                {
                    self.backend.submit(UIEvent::ImportKey).ok();
                }
                if ui
                    .button(RichText::new(format!("{} Export Key", icons::ICON_DOWNLOAD)).size(12.0))
                    .clicked()
                {
                    self.backend
                        .submit(UIEvent::ExportKey(self.key_text.clone()))
                        .ok();
                }
                if ui
                    .button(
                        RichText::new(format!("{} Copy to Clipboard", icons::ICON_CONTENT_COPY))
                            .size(12.0),
                    )
                    .clicked()
                {
                    ui.ctx().copy_text(self.key_text.clone());
                    self.show_toast("Key copied to clipboard", ToastKind::Success);
                }
            });
        });
    }

    fn storage_card(&mut self, ui: &mut egui::Ui) {
        card().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(icon_text(icons::ICON_STORAGE).size(16.0));
                ui.label(RichText::new("Storage Settings").strong().size(14.0));
            });
            ui.label(
                RichText::new("Configure how much storage you want to offer to the network")
                    .color(TEXT_DIM)
                    .size(11.0),
            );
            ui.add_space(8.0);

            ui.label(
                RichText::new(format!("Storage Quota: {} GB", self.settings.storage_quota_gb))
                    .size(12.0),
            );
            ui.spacing_mut().slider_width = ui.available_width() - 80.0;
            ui.add(Slider::new(&mut self.settings.storage_quota_gb, 1..=500).show_value(false));
            ui.horizontal(|ui| {
                ui.label(RichText::new("1 GB").color(TEXT_DIM).size(10.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new("500 GB").color(TEXT_DIM).size(10.0));
                });
            });
            ui.add_space(8.0);

            info_alert(
                ui,
                icons::ICON_CHECK_CIRCLE,
                GREEN,
                &format!(
                    "You are currently offering {} GB of storage to the network. This helps \
                     other users backup their files while earning you network reputation.",
                    self.settings.storage_quota_gb
                ),
            );
        });
    }

    fn network_card(&mut self, ui: &mut egui::Ui) {
        card().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(icon_text(icons::ICON_SETTINGS).size(16.0));
                ui.label(RichText::new("Network Settings").strong().size(14.0));
            });
            ui.label(
                RichText::new("Configure network and connection preferences")
                    .color(TEXT_DIM)
                    .size(11.0),
            );
            ui.add_space(8.0);

            ui.label(RichText::new("API Endpoint").size(12.0));
            TextEdit::singleline(&mut self.settings.api_url)
                .desired_width(ui.available_width())
                .show(ui);
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Listen Port").size(12.0));
                ui.add(DragValue::new(&mut self.settings.listen_port).range(1..=65535));
                ui.add_space(24.0);
                ui.label(RichText::new("Max Peers").size(12.0));
                ui.add(DragValue::new(&mut self.settings.max_peers).range(1..=500));
            });
            ui.add_space(4.0);

            ui.label(RichText::new("Bootstrap Nodes").size(12.0));
            TextEdit::multiline(&mut self.bootstrap_text)
                .hint_text("Enter bootstrap node addresses, one per line...")
                .desired_rows(4)
                .desired_width(ui.available_width())
                .show(ui);
        });
    }

    fn regenerate_key_modal(&mut self, ui: &egui::Ui) {
        if !self.confirm_regenerate {
            return;
        }

        Modal::new(Id::new("regenerate_key_modal")).show(ui.ctx(), |ui| {
            ui.set_max_width(380.0);
            ui.horizontal(|ui| {
                ui.label(icon_text(icons::ICON_WARNING).color(YELLOW).size(18.0));
                ui.label(RichText::new("Generate New Private Key").strong().size(14.0));
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(
                    "This will generate a new private key and replace your current one. You \
                     will lose access to all previously encrypted files unless you have backed \
                     up your current key.",
                )
                .color(TEXT_DIM)
                .size(12.0),
            );
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let generate = egui::Button::new(
                    RichText::new("Generate New Key").color(Color32::WHITE).size(12.0),
                )
                .fill(RED)
                .corner_radius(6.0);
                if ui.add(generate).clicked() {
                    self.key_text = identity::placeholder_key(&mut rand::rng());
                    self.confirm_regenerate = false;
                    self.show_toast("New key generated", ToastKind::Success);
                }
                if ui.button(RichText::new("Cancel").size(12.0)).clicked() {
                    self.confirm_regenerate = false;
                }
            });
        });
    }
}

fn info_alert(ui: &mut egui::Ui, icon: &str, icon_color: Color32, text: &str) {
    egui::Frame::new()
        .fill(BG_TILE)
        .corner_radius(8.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(icon_text(icon).color(icon_color).size(14.0));
                ui.add(egui::Label::new(RichText::new(text).size(11.0)).wrap());
            });
        });
}
