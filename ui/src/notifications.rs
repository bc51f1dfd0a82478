use egui::{Color32, RichText};
use egui_material_icons::{icon_text, icons};
use shared::notification::{NotificationId, NotificationKind};
use shared::page::Page;

use crate::{ACCENT, BG_TILE, GREEN, RED, TEXT_DIM, UI, YELLOW, format};

/// Background tint for entries the user hasn't read yet.
const UNREAD_TINT: Color32 = Color32::from_rgb(40, 50, 74);

pub(crate) fn kind_color(kind: NotificationKind) -> Color32 {
    match kind {
        NotificationKind::Info => ACCENT,
        NotificationKind::Success => GREEN,
        NotificationKind::Warning => YELLOW,
        NotificationKind::Error => RED,
    }
}

pub(crate) fn kind_icon(kind: NotificationKind) -> RichText {
    let icon = match kind {
        NotificationKind::Info => icons::ICON_INFO,
        NotificationKind::Success => icons::ICON_CHECK_CIRCLE,
        NotificationKind::Warning => icons::ICON_WARNING,
        NotificationKind::Error => icons::ICON_CANCEL,
    };
    icon_text(icon).color(kind_color(kind)).size(14.0)
}

impl<B> UI<B> {
    /// Body of the bell dropdown in the header.
    pub(crate) fn notification_panel(&mut self, ui: &mut egui::Ui) {
        ui.set_min_width(320.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Notifications").strong().size(14.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !self.notifications.is_empty()
                    && ui
                        .small_button(icon_text(icons::ICON_DELETE).size(12.0))
                        .on_hover_text("Clear all notifications")
                        .clicked()
                {
                    self.notifications.clear();
                }
                if self.notifications.unread() > 0
                    && ui
                        .small_button(icon_text(icons::ICON_DONE_ALL).size(12.0))
                        .on_hover_text("Mark all as read")
                        .clicked()
                {
                    self.notifications.mark_all_read();
                }
            });
        });
        ui.separator();

        if self.notifications.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(icon_text(icons::ICON_NOTIFICATIONS).color(TEXT_DIM).size(32.0));
                ui.add_space(8.0);
                ui.label(RichText::new("No notifications yet").color(TEXT_DIM).size(12.0));
                ui.add_space(24.0);
            });
            return;
        }

        let mut mark_read: Option<NotificationId> = None;
        let mut remove: Option<NotificationId> = None;
        let mut go_to: Option<Page> = None;

        egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
            for entry in self.notifications.iter() {
                let fill = if entry.read { BG_TILE } else { UNREAD_TINT };
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(8.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(kind_icon(entry.kind));
                            ui.vertical(|ui| {
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(&entry.title).strong().size(12.0));
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            ui.label(
                                                RichText::new(format::relative(
                                                    entry.created_at.elapsed(),
                                                ))
                                                .color(TEXT_DIM)
                                                .size(10.0),
                                            );
                                        },
                                    );
                                });
                                ui.label(
                                    RichText::new(&entry.message).color(TEXT_DIM).size(11.0),
                                );

                                ui.horizontal(|ui| {
                                    if let Some(action) = &entry.action
                                        && ui
                                            .small_button(
                                                RichText::new(&action.label).size(11.0),
                                            )
                                            .clicked()
                                    {
                                        go_to = Some(action.go_to);
                                    }
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            if ui
                                                .small_button(
                                                    RichText::new(icons::ICON_DELETE)
                                                        .color(RED)
                                                        .size(11.0),
                                                )
                                                .on_hover_text("Remove notification")
                                                .clicked()
                                            {
                                                remove = Some(entry.id);
                                            }
                                            if !entry.read
                                                && ui
                                                    .small_button(
                                                        RichText::new(icons::ICON_CHECK)
                                                            .size(11.0),
                                                    )
                                                    .on_hover_text("Mark as read")
                                                    .clicked()
                                            {
                                                mark_read = Some(entry.id);
                                            }
                                        },
                                    );
                                });
                            });
                        });
                    });
                ui.add_space(4.0);
            }
        });

        if let Some(id) = mark_read {
            self.notifications.mark_read(id);
        }
        if let Some(id) = remove {
            self.notifications.remove(id);
        }
        if let Some(page) = go_to {
            self.page = page;
            ui.close();
        }
    }
}
