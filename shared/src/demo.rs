//! Canned data rendered wherever the real network would be. The
//! dashboard is a client for a backend that mostly doesn't exist yet,
//! so the peer grid, the file catalog and the activity log all start
//! from these fixtures.

use serde::{Deserialize, Serialize};

use crate::notification::NotificationKind;
use crate::peer::{Peer, PeerStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAvailability {
    Available,
    Partial,
    Unavailable,
}

impl FileAvailability {
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Partial => "Partial",
            Self::Unavailable => "Unavailable",
        }
    }
}

/// Catalog row on the "My Files" page.
#[derive(Debug, Clone)]
pub struct BackedUpFile {
    pub id: u32,
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub date_added: String,
    pub chunks: u32,
    pub peers: Vec<String>,
    pub availability: FileAvailability,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: NotificationKind,
    pub message: String,
}

pub fn sample_peers() -> Vec<Peer> {
    fn peer(
        id: &str,
        address: &str,
        status: PeerStatus,
        latency: Option<u32>,
        last_seen: &str,
        storage_offered: u64,
        storage_used: u64,
        files_shared: u64,
        reputation: u8,
        version: &str,
    ) -> Peer {
        Peer {
            id: id.to_owned(),
            address: address.to_owned(),
            status,
            latency,
            last_seen: last_seen.to_owned(),
            storage_offered,
            storage_used,
            files_shared,
            reputation,
            version: version.to_owned(),
        }
    }

    vec![
        peer(
            "peer_1a2b3c",
            "/ip4/192.168.1.42/tcp/4001",
            PeerStatus::Online,
            Some(45),
            "2024-01-15T14:32:15Z",
            53_687_091_200,
            12_884_901_888,
            23,
            98,
            "1.2.3",
        ),
        peer(
            "peer_4d5e6f",
            "/ip4/192.168.1.87/tcp/4001",
            PeerStatus::Online,
            Some(78),
            "2024-01-15T14:31:42Z",
            107_374_182_400,
            34_359_738_368,
            41,
            96,
            "1.2.3",
        ),
        peer(
            "peer_7g8h9i",
            "/ip4/10.0.0.23/tcp/4001",
            PeerStatus::Offline,
            None,
            "2024-01-15T11:05:09Z",
            21_474_836_480,
            0,
            0,
            71,
            "1.1.0",
        ),
        peer(
            "peer_0j1k2l",
            "/ip4/172.16.4.9/tcp/4001",
            PeerStatus::Online,
            Some(123),
            "2024-01-15T14:30:18Z",
            80_530_636_800,
            8_589_934_592,
            12,
            88,
            "1.2.2",
        ),
        peer(
            "peer_3m4n5o",
            "/ip4/192.168.1.105/tcp/4001",
            PeerStatus::Online,
            Some(67),
            "2024-01-15T14:29:55Z",
            53_687_091_200,
            21_474_836_480,
            30,
            97,
            "1.2.3",
        ),
    ]
}

pub fn sample_files() -> Vec<BackedUpFile> {
    fn file(
        id: u32,
        name: &str,
        mime: &str,
        size: u64,
        date_added: &str,
        chunks: u32,
        peers: &[&str],
        availability: FileAvailability,
    ) -> BackedUpFile {
        BackedUpFile {
            id,
            name: name.to_owned(),
            mime: mime.to_owned(),
            size,
            date_added: date_added.to_owned(),
            chunks,
            peers: peers.iter().map(|p| (*p).to_owned()).collect(),
            availability,
        }
    }

    vec![
        file(
            1,
            "presentation.pdf",
            "application/pdf",
            2_048_000,
            "2024-01-15",
            8,
            &["peer_1a2b3c", "peer_4d5e6f", "peer_0j1k2l"],
            FileAvailability::Available,
        ),
        file(
            2,
            "vacation_photos.zip",
            "application/zip",
            15_728_640,
            "2024-01-14",
            15,
            &["peer_1a2b3c", "peer_7g8h9i", "peer_3m4n5o"],
            FileAvailability::Partial,
        ),
        file(
            3,
            "demo_video.mp4",
            "video/mp4",
            52_428_800,
            "2024-01-13",
            25,
            &["peer_4d5e6f", "peer_0j1k2l", "peer_3m4n5o"],
            FileAvailability::Available,
        ),
        file(
            4,
            "music_collection.mp3",
            "audio/mp3",
            8_388_608,
            "2024-01-12",
            12,
            &["peer_1a2b3c", "peer_4d5e6f"],
            FileAvailability::Unavailable,
        ),
        file(
            5,
            "project_backup.tar.gz",
            "application/gzip",
            104_857_600,
            "2024-01-11",
            42,
            &["peer_1a2b3c", "peer_4d5e6f", "peer_0j1k2l", "peer_3m4n5o"],
            FileAvailability::Available,
        ),
    ]
}

pub fn sample_logs() -> Vec<LogEntry> {
    fn log(time: &str, level: NotificationKind, message: &str) -> LogEntry {
        LogEntry {
            time: time.to_owned(),
            level,
            message: message.to_owned(),
        }
    }

    vec![
        log(
            "14:32:15",
            NotificationKind::Info,
            "File 'document.pdf' successfully backed up to 3 peers",
        ),
        log(
            "14:31:42",
            NotificationKind::Success,
            "New peer peer_3m4n5o connected",
        ),
        log(
            "14:30:18",
            NotificationKind::Warning,
            "Peer peer_7g8h9i disconnected",
        ),
        log(
            "14:29:55",
            NotificationKind::Info,
            "Chunk verification completed for 'image.jpg'",
        ),
        log("14:28:33", NotificationKind::Info, "Storage quota updated to 50GB"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_ids_are_unique() {
        let peers = sample_peers();
        let mut ids: Vec<&str> = peers.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), peers.len());

        let files = sample_files();
        let mut file_ids: Vec<u32> = files.iter().map(|f| f.id).collect();
        file_ids.sort_unstable();
        file_ids.dedup();
        assert_eq!(file_ids.len(), files.len());
    }

    #[test]
    fn offline_peers_report_no_latency() {
        for p in sample_peers() {
            if p.status == PeerStatus::Offline {
                assert_eq!(p.latency, None);
            } else {
                assert!(p.latency.is_some());
            }
        }
    }

    #[test]
    fn catalog_spans_all_availability_states() {
        let files = sample_files();
        assert_eq!(files.len(), 5);
        let available = files
            .iter()
            .filter(|f| f.availability == FileAvailability::Available)
            .count();
        assert_eq!(available, 3);
        assert!(files.iter().any(|f| f.availability == FileAvailability::Partial));
        assert!(
            files
                .iter()
                .any(|f| f.availability == FileAvailability::Unavailable)
        );
        let total: u64 = files.iter().map(|f| f.size).sum();
        assert_eq!(total, 183_451_648);
    }
}
