use crate::settings::Settings;
use crate::upload::{UploadId, UploadTask};

/// UI-to-runtime commands.
#[derive(Debug, Clone)]
pub enum UIEvent {
    FetchPeers,
    PickFiles,
    StartUpload(UploadTask),
    CancelUpload(UploadId),
    ImportKey,
    ExportKey(String),
    SaveSettings(Settings),
}
