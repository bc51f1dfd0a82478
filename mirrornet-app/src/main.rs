use anyhow::{Context, Result};
use shared::app_events::AppEvent;
use shared::backend::Backend;
use shared::settings::Settings;
use shared::ui_events::UIEvent;
use tokio::sync::mpsc;
use ui::UI;

mod config;
mod runtime;
mod uploads;

/// Channel pair glueing the egui thread to the tokio runtime. Events
/// flow runtime -> UI, commands flow UI -> runtime.
pub struct NativeBackend {
    tx: mpsc::UnboundedSender<AppEvent>,
    rx: mpsc::UnboundedReceiver<AppEvent>,
    commands: mpsc::UnboundedSender<UIEvent>,
}

impl NativeBackend {
    fn new(settings: Settings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<AppEvent>();
        let (commands, from_ui) = mpsc::unbounded_channel::<UIEvent>();

        tokio::spawn(runtime::run_loop(settings, tx.clone(), from_ui));

        Self { tx, rx, commands }
    }
}

impl Backend for NativeBackend {
    fn send(&self, event: AppEvent) -> Result<()> {
        self.tx.send(event).context("receiver is closed")
    }

    fn submit(&self, command: UIEvent) -> Result<()> {
        self.commands.send(command).context("runtime is gone")
    }

    fn try_recv(&mut self) -> Option<AppEvent> {
        self.rx.try_recv().ok()
    }
}

#[tokio::main]
async fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_active(true)
            .with_inner_size([1180.0, 780.0]),
        ..Default::default()
    };

    let settings = config::load_settings();
    let backend = NativeBackend::new(settings.clone());

    eframe::run_native(
        "MirrorNet",
        native_options,
        Box::new(|cc| Ok(Box::new(UI::new(cc, settings, backend)))),
    )
}
