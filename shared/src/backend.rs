use anyhow::Result;

use crate::{app_events::AppEvent, ui_events::UIEvent};

/// Seam between the egui frontend and whatever drives it. The UI only
/// ever drains events and submits commands; it never blocks.
pub trait Backend {
    fn send(&self, event: AppEvent) -> Result<()>;
    fn submit(&self, command: UIEvent) -> Result<()>;
    fn try_recv(&mut self) -> Option<AppEvent>;
}
