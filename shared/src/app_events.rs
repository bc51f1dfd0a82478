use std::path::PathBuf;

use crate::peer::Peer;
use crate::upload::{SelectedFile, UploadTask};

/// Runtime-to-UI messages, drained once per frame.
pub enum AppEvent {
    PeersUpdated(Vec<Peer>),
    FilesSelected(Vec<SelectedFile>),
    UploadUpdated(UploadTask),
    NetworkStats {
        connected_peers: usize,
        files_backed_up: u32,
        storage_used_gb: f32,
    },
    KeyImported(String),
    KeyExported(PathBuf),

    FatalError(anyhow::Error),
}
