use eframe::CreationContext;
use egui::{Align2, Color32, CornerRadius, Id, LayerId, RichText, Stroke, vec2};
use egui_material_icons::{icon_text, icons};
use egui_toast::{ToastKind, Toasts};
use shared::app_events::AppEvent;
use shared::backend::Backend;
use shared::demo::{self, BackedUpFile, FileAvailability, LogEntry};
use shared::notification::{NotificationAction, NotificationKind, NotificationStore};
use shared::page::Page;
use shared::peer::{self, Peer};
use shared::settings::Settings;
use shared::ui_events::UIEvent;
use shared::upload::{SelectedFile, UploadId, UploadStatus, UploadTask};

mod format;
mod notifications;
mod toast;
mod views;

pub(crate) const ACCENT: Color32 = Color32::from_rgb(79, 140, 255);
pub(crate) const BG_DARK: Color32 = Color32::from_rgb(30, 30, 30);
pub(crate) const BG_CARD: Color32 = Color32::from_rgb(40, 40, 40);
pub(crate) const BG_TILE: Color32 = Color32::from_rgb(45, 45, 50);
pub(crate) const TEXT_DIM: Color32 = Color32::from_rgb(140, 140, 140);
pub(crate) const GREEN: Color32 = Color32::from_rgb(80, 200, 120);
pub(crate) const YELLOW: Color32 = Color32::from_rgb(230, 180, 80);
pub(crate) const RED: Color32 = Color32::from_rgb(200, 80, 80);

/// Headline numbers on the dashboard, refreshed by the runtime.
pub(crate) struct NetStats {
    pub(crate) connected_peers: usize,
    pub(crate) files_backed_up: u32,
    pub(crate) storage_used_gb: f32,
}

pub struct UI<B> {
    backend: B,
    page: Page,
    notifications: NotificationStore,
    toasts: Toasts,

    // Backup page
    uploads: Vec<UploadTask>,
    next_upload_id: u64,

    // Peers page (live list; empty until a fetch succeeds)
    peers: Vec<Peer>,
    peer_search: String,
    refreshing_peers: bool,

    // Dashboard
    dashboard_peers: Vec<Peer>,
    logs: Vec<LogEntry>,
    show_logs: bool,
    stats: NetStats,

    // Files page
    catalog: Vec<BackedUpFile>,
    file_search: String,
    file_filter: Option<FileAvailability>,

    // Settings page
    settings: Settings,
    bootstrap_text: String,
    key_text: String,
    show_key: bool,
    confirm_regenerate: bool,
}

impl<B: Backend> UI<B> {
    pub fn new(cc: &CreationContext, settings: Settings, backend: B) -> Self {
        egui_material_icons::initialize(&cc.egui_ctx);

        let toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10., 10.))
            .order(egui::Order::Tooltip);

        let dashboard_peers = demo::sample_peers();
        let stats = NetStats {
            connected_peers: peer::online_count(&dashboard_peers),
            files_backed_up: 167,
            storage_used_gb: 28.5,
        };
        let bootstrap_text = settings.bootstrap_nodes.join("\n");

        Self {
            backend,
            page: Page::Dashboard,
            notifications: NotificationStore::new(),
            toasts,
            uploads: Vec::new(),
            next_upload_id: 0,
            peers: Vec::new(),
            peer_search: String::new(),
            refreshing_peers: false,
            dashboard_peers,
            logs: demo::sample_logs(),
            show_logs: false,
            stats,
            catalog: demo::sample_files(),
            file_search: String::new(),
            file_filter: None,
            settings,
            bootstrap_text,
            key_text: shared::identity::placeholder_key(&mut rand::rng()),
            show_key: false,
            confirm_regenerate: false,
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::PeersUpdated(peers) => {
                self.peers = peers;
                self.refreshing_peers = false;
            }
            AppEvent::FilesSelected(files) => self.enqueue_uploads(files),
            AppEvent::UploadUpdated(task) => self.apply_upload_snapshot(task),
            AppEvent::NetworkStats {
                connected_peers,
                files_backed_up,
                storage_used_gb,
            } => {
                if connected_peers > self.stats.connected_peers {
                    self.notifications.add(
                        NotificationKind::Success,
                        "New Peer Connected",
                        format!("A new peer has joined your network. Total: {connected_peers}"),
                    );
                }
                self.stats = NetStats {
                    connected_peers,
                    files_backed_up,
                    storage_used_gb,
                };
            }
            AppEvent::KeyImported(text) => {
                self.key_text = text;
                self.show_toast("Key imported", ToastKind::Success);
            }
            AppEvent::KeyExported(path) => {
                self.show_toast(
                    format!("Key exported to {}", path.display()),
                    ToastKind::Success,
                );
            }
            AppEvent::FatalError(e) => {
                self.show_toast(format!("{e:#}"), ToastKind::Error);
            }
        }
    }

    /// Replaces the task with the driver's latest snapshot. A snapshot
    /// for a task the user already removed is dropped on the floor.
    fn apply_upload_snapshot(&mut self, task: UploadTask) {
        let Some(slot) = self.uploads.iter_mut().find(|t| t.id == task.id) else {
            return;
        };
        let completed_now =
            task.status == UploadStatus::Completed && slot.status != UploadStatus::Completed;
        let name = task.name.clone();
        *slot = task;

        if completed_now {
            self.notifications.add_with_action(
                NotificationKind::Success,
                "Backup Completed",
                format!("{name} has been successfully backed up to the network."),
                NotificationAction {
                    label: "View Files".into(),
                    go_to: Page::Files,
                },
            );
        }
    }

    pub(crate) fn enqueue_uploads(&mut self, files: Vec<SelectedFile>) {
        for file in files {
            let id = UploadId(self.next_upload_id);
            self.next_upload_id += 1;
            let task = UploadTask::new(id, file);

            if let Err(e) = self.backend.submit(UIEvent::StartUpload(task.clone())) {
                self.backend
                    .send(AppEvent::FatalError(e.context("failed to start upload")))
                    .ok();
                continue;
            }
            self.uploads.push(task);
        }
    }

    pub(crate) fn remove_upload(&mut self, id: UploadId) {
        self.backend.submit(UIEvent::CancelUpload(id)).ok();
        self.uploads.retain(|t| t.id != id);
    }
}

impl<B: Backend> eframe::App for UI<B> {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = vec2(8.0, 8.0);
        style.visuals.widgets.noninteractive.corner_radius = CornerRadius::same(8);
        style.visuals.widgets.inactive.corner_radius = CornerRadius::same(8);
        style.visuals.widgets.hovered.corner_radius = CornerRadius::same(8);
        style.visuals.widgets.active.corner_radius = CornerRadius::same(8);
        ctx.set_style(style);

        while let Some(event) = self.backend.try_recv() {
            self.handle_event(event);
        }

        let online_icon = status_dot(GREEN);

        // sidebar
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(200.0)
            .frame(egui::Frame::new().fill(BG_DARK).inner_margin(12.0))
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(ACCENT)
                    .corner_radius(10.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(
                                icon_text(icons::ICON_SHIELD)
                                    .color(Color32::WHITE)
                                    .size(22.0),
                            );
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new("MirrorNet")
                                        .strong()
                                        .color(Color32::WHITE)
                                        .size(16.0),
                                );
                                ui.label(
                                    RichText::new("Decentralized Backup")
                                        .color(Color32::from_rgb(220, 230, 255))
                                        .size(10.0),
                                );
                            });
                        });
                    });

                ui.add_space(16.0);

                for page in Page::ALL {
                    if nav_button(ui, nav_icon(page), page.nav_label(), self.page == page) {
                        self.page = page;
                    }
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    egui::Frame::new()
                        .fill(BG_CARD)
                        .corner_radius(8.0)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(online_icon.clone());
                                ui.label(
                                    RichText::new("System Online").color(TEXT_DIM).size(12.0),
                                );
                            });
                        });
                });
            });

        // header
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(BG_DARK).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(self.page.title()).strong().size(18.0));
                        ui.label(
                            RichText::new(self.page.subtitle()).color(TEXT_DIM).size(11.0),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let unread = self.notifications.unread();
                        let bell = if unread == 0 {
                            icons::ICON_NOTIFICATIONS.to_string()
                        } else if unread > 9 {
                            format!("{} 9+", icons::ICON_NOTIFICATIONS)
                        } else {
                            format!("{} {unread}", icons::ICON_NOTIFICATIONS)
                        };
                        let bell_color = if unread > 0 { ACCENT } else { TEXT_DIM };
                        ui.menu_button(RichText::new(bell).color(bell_color).size(14.0), |ui| {
                            self.notification_panel(ui);
                        });

                        ui.label(icon_text(icons::ICON_SHIELD).color(GREEN).size(14.0));

                        egui::Frame::new()
                            .fill(BG_CARD)
                            .corner_radius(12.0)
                            .inner_margin(vec2(8.0, 4.0))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(icon_text(icons::ICON_WIFI).color(GREEN).size(12.0));
                                    ui.label(
                                        RichText::new("Network Online").color(GREEN).size(11.0),
                                    );
                                });
                            });
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BG_DARK).inner_margin(16.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    match self.page {
                        Page::Dashboard => self.dashboard_page(ui),
                        Page::Backup => self.backup_page(ui),
                        Page::Files => self.files_page(ui),
                        Page::Peers => self.peers_page(ui),
                        Page::Settings => self.settings_page(ui),
                    }
                });
            });

        // drag and drop lands on the backup page only
        if self.page == Page::Backup {
            preview_files_being_dropped(ctx);
            let dropped: Vec<SelectedFile> = ctx.input(|i| {
                i.raw
                    .dropped_files
                    .iter()
                    .filter_map(|d| d.path.as_deref().and_then(SelectedFile::from_path))
                    .collect()
            });
            if !dropped.is_empty() {
                self.enqueue_uploads(dropped);
            }
        }

        self.toasts.show(ctx);
        ctx.request_repaint();
    }
}

pub(crate) fn status_dot(color: Color32) -> RichText {
    icon_text(icons::ICON_CIRCLE).color(color).size(10.0)
}

/// Card frame shared by every page.
pub(crate) fn card() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .corner_radius(12.0)
        .inner_margin(16.0)
}

fn nav_icon(page: Page) -> &'static str {
    match page {
        Page::Dashboard => icons::ICON_HOME,
        Page::Backup => icons::ICON_UPLOAD,
        Page::Files => icons::ICON_FOLDER,
        Page::Peers => icons::ICON_GROUP,
        Page::Settings => icons::ICON_SETTINGS,
    }
}

fn nav_button(ui: &mut egui::Ui, icon: &str, label: &str, selected: bool) -> bool {
    let text = RichText::new(format!("{icon}  {label}"))
        .size(13.0)
        .color(if selected { Color32::WHITE } else { TEXT_DIM });
    let button = egui::Button::new(text)
        .fill(if selected { ACCENT } else { Color32::TRANSPARENT })
        .corner_radius(6.0)
        .min_size(vec2(ui.available_width(), 32.0));
    ui.add(button).clicked()
}

fn preview_files_being_dropped(ctx: &egui::Context) {
    use std::fmt::Write as _;

    if !ctx.input(|i| i.raw.hovered_files.is_empty()) {
        let text = ctx.input(|i| {
            let mut text = String::new();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path
                    && let Some(name) = path.file_name()
                {
                    writeln!(text, "{}", name.to_string_lossy()).ok();
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(
            egui::Order::Foreground,
            Id::new("file_drop_overlay"),
        ));
        let screen_rect = ctx.viewport_rect();

        painter.rect_filled(
            screen_rect,
            0.0,
            Color32::from_rgba_unmultiplied(30, 30, 30, 230),
        );

        let center = screen_rect.center();

        let inner_rect = screen_rect.shrink(24.0);
        painter.rect_stroke(
            inner_rect,
            12.0,
            Stroke::new(2.0, ACCENT),
            egui::StrokeKind::Inside,
        );

        let icon_pos = center - egui::vec2(0.0, 30.0);
        painter.text(
            icon_pos,
            Align2::CENTER_CENTER,
            "📁",
            egui::FontId::proportional(48.0),
            Color32::WHITE,
        );

        let text_pos = center + egui::vec2(0.0, 30.0);
        painter.text(
            text_pos,
            Align2::CENTER_CENTER,
            if text.is_empty() {
                "Drop files here".to_string()
            } else {
                text
            },
            egui::FontId::proportional(16.0),
            Color32::WHITE,
        );
    }
}
