use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use rand::Rng;
use shared::app_events::AppEvent;
use shared::peer::{Peer, PeerListResponse};
use shared::settings::Settings;
use shared::ui_events::UIEvent;
use shared::upload::{SelectedFile, TICK_MILLIS, UploadId};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::{config, uploads};

const STATS_INTERVAL: Duration = Duration::from_secs(10);

/// Runtime half of the app: owns the settings, the HTTP client and one
/// driver task per in-flight upload, and serves commands until the UI
/// side hangs up.
pub async fn run_loop(
    mut settings: Settings,
    tx: mpsc::UnboundedSender<AppEvent>,
    mut from_ui: mpsc::UnboundedReceiver<UIEvent>,
) {
    let client = reqwest::Client::new();
    let mut drivers: HashMap<UploadId, JoinHandle<()>> = HashMap::new();

    tokio::spawn(stats_loop(tx.clone()));
    tokio::spawn(fetch_peers(
        client.clone(),
        settings.peers_endpoint(),
        tx.clone(),
    ));

    while let Some(command) = from_ui.recv().await {
        match command {
            UIEvent::FetchPeers => {
                tokio::spawn(fetch_peers(
                    client.clone(),
                    settings.peers_endpoint(),
                    tx.clone(),
                ));
            }
            UIEvent::PickFiles => {
                tokio::spawn(pick_files(tx.clone()));
            }
            UIEvent::StartUpload(task) => {
                // finished drivers hold no timer, just sweep the handles
                drivers.retain(|_, handle| !handle.is_finished());
                let id = task.id;
                let handle =
                    uploads::spawn_driver(task, tx.clone(), Duration::from_millis(TICK_MILLIS));
                drivers.insert(id, handle);
            }
            UIEvent::CancelUpload(id) => {
                if let Some(handle) = drivers.remove(&id) {
                    handle.abort();
                }
            }
            UIEvent::ImportKey => {
                tokio::spawn(import_key(tx.clone()));
            }
            UIEvent::ExportKey(key) => {
                tokio::spawn(export_key(key, tx.clone()));
            }
            UIEvent::SaveSettings(new_settings) => {
                settings = new_settings;
                if let Err(e) = config::save_settings(&settings) {
                    tx.send(AppEvent::FatalError(e.context("failed to save settings")))
                        .ok();
                }
            }
        }
    }
}

async fn fetch_peers(
    client: reqwest::Client,
    endpoint: String,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    let peers = match fetch_peer_list(&client, &endpoint).await {
        Ok(peers) => peers,
        Err(e) => {
            // a dead or misbehaving registry just means an empty list
            log::warn!("peer fetch from {endpoint} failed: {e:#}");
            Vec::new()
        }
    };
    tx.send(AppEvent::PeersUpdated(peers)).ok();
}

async fn fetch_peer_list(client: &reqwest::Client, endpoint: &str) -> Result<Vec<Peer>> {
    let response = client.get(endpoint).send().await.context("request failed")?;
    let body = response
        .text()
        .await
        .context("failed to read response body")?;
    let parsed: PeerListResponse =
        serde_json::from_str(&body).context("failed to parse peer list")?;
    Ok(parsed.peers)
}

/// Headline-number churn for the dashboard, every ten seconds.
async fn stats_loop(tx: mpsc::UnboundedSender<AppEvent>) {
    let mut timer = tokio::time::interval(STATS_INTERVAL);
    timer.tick().await; // fires immediately, the UI already has numbers

    loop {
        timer.tick().await;
        let (connected_peers, files_backed_up, storage_used_gb) = {
            let mut rng = rand::rng();
            (
                rng.random_range(3..=5),
                rng.random_range(150..200),
                rng.random_range(250..350) as f32 / 10.0,
            )
        };
        let event = AppEvent::NetworkStats {
            connected_peers,
            files_backed_up,
            storage_used_gb,
        };
        if tx.send(event).is_err() {
            break;
        }
    }
}

async fn pick_files(tx: mpsc::UnboundedSender<AppEvent>) {
    let Some(handles) = rfd::AsyncFileDialog::new().pick_files().await else {
        return;
    };
    let files: Vec<SelectedFile> = handles
        .iter()
        .filter_map(|h| SelectedFile::from_path(h.path()))
        .collect();
    if !files.is_empty() {
        tx.send(AppEvent::FilesSelected(files)).ok();
    }
}

async fn import_key(tx: mpsc::UnboundedSender<AppEvent>) {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .add_filter("key", &["pem", "key", "txt"])
        .pick_file()
        .await
    else {
        return;
    };
    match tokio::fs::read_to_string(handle.path()).await {
        Ok(text) => {
            tx.send(AppEvent::KeyImported(text)).ok();
        }
        Err(e) => {
            tx.send(AppEvent::FatalError(
                anyhow!(e).context("failed to read key file"),
            ))
            .ok();
        }
    }
}

async fn export_key(key: String, tx: mpsc::UnboundedSender<AppEvent>) {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_file_name("mirrornet-private-key.pem")
        .save_file()
        .await
    else {
        return;
    };
    let path = handle.path().to_path_buf();
    match tokio::fs::write(&path, key).await {
        Ok(()) => {
            tx.send(AppEvent::KeyExported(path)).ok();
        }
        Err(e) => {
            tx.send(AppEvent::FatalError(
                anyhow!(e).context("failed to write key file"),
            ))
            .ok();
        }
    }
}
