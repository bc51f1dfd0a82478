use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeerStatus {
    Online,
    Offline,
    Connecting,
}

impl PeerStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Connecting => "Connecting",
        }
    }
}

/// One row of the registry payload. The backend speaks camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    pub id: String,
    pub address: String,
    pub status: PeerStatus,
    /// Milliseconds; null for peers we can't reach.
    pub latency: Option<u32>,
    /// ISO-8601, displayed as-is if it fails to parse.
    pub last_seen: String,
    pub storage_offered: u64,
    pub storage_used: u64,
    pub files_shared: u64,
    /// 0-100.
    pub reputation: u8,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerListResponse {
    pub peers: Vec<Peer>,
}

pub fn online_count(peers: &[Peer]) -> usize {
    peers.iter().filter(|p| p.status == PeerStatus::Online).count()
}

/// Mean over peers that report a latency; None when nobody does.
pub fn average_latency(peers: &[Peer]) -> Option<u32> {
    let samples: Vec<u32> = peers.iter().filter_map(|p| p.latency).collect();
    if samples.is_empty() {
        return None;
    }
    let sum: u64 = samples.iter().map(|&l| u64::from(l)).sum();
    Some((sum as f64 / samples.len() as f64).round() as u32)
}

/// (offered, used) across the whole list.
pub fn storage_totals(peers: &[Peer]) -> (u64, u64) {
    peers.iter().fold((0, 0), |(offered, used), p| {
        (offered + p.storage_offered, used + p.storage_used)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registry_payload() {
        let body = r#"{
            "peers": [
                {
                    "id": "peer_1a2b3c",
                    "address": "/ip4/10.0.0.12/tcp/4001",
                    "status": "online",
                    "latency": 45,
                    "lastSeen": "2025-06-01T12:00:00Z",
                    "storageOffered": 53687091200,
                    "storageUsed": 12884901888,
                    "filesShared": 23,
                    "reputation": 98,
                    "version": "1.2.3"
                },
                {
                    "id": "peer_7g8h9i",
                    "address": "/ip4/10.0.0.77/tcp/4001",
                    "status": "offline",
                    "latency": null,
                    "lastSeen": "2025-05-30T08:15:00Z",
                    "storageOffered": 21474836480,
                    "storageUsed": 0,
                    "filesShared": 0,
                    "reputation": 71,
                    "version": "1.1.0"
                }
            ]
        }"#;

        let parsed: PeerListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.peers.len(), 2);

        let first = &parsed.peers[0];
        assert_eq!(first.status, PeerStatus::Online);
        assert_eq!(first.latency, Some(45));
        assert_eq!(first.storage_offered, 53687091200);
        assert_eq!(first.files_shared, 23);

        let second = &parsed.peers[1];
        assert_eq!(second.status, PeerStatus::Offline);
        assert_eq!(second.latency, None);
    }

    #[test]
    fn rejects_malformed_payload() {
        assert!(serde_json::from_str::<PeerListResponse>("not json").is_err());
        // Field renamed to snake_case is a different wire shape.
        assert!(
            serde_json::from_str::<PeerListResponse>(
                r#"{"peers":[{"id":"x","address":"y","status":"online","latency":1,
                "last_seen":"now","storage_offered":1,"storage_used":0,
                "files_shared":0,"reputation":1,"version":"1"}]}"#
            )
            .is_err()
        );
    }

    #[test]
    fn aggregates_over_mixed_statuses() {
        let peers = crate::demo::sample_peers();
        assert_eq!(peers.len(), 5);
        assert_eq!(online_count(&peers), 4);

        // 45, 78, 123, 67 reported; the offline peer has none.
        assert_eq!(average_latency(&peers), Some(78));

        let (offered, used) = storage_totals(&peers);
        assert!(offered > used);
        assert!(used > 0);
    }

    #[test]
    fn average_latency_empty_when_nobody_reports() {
        let mut peers = crate::demo::sample_peers();
        for p in &mut peers {
            p.latency = None;
        }
        assert_eq!(average_latency(&peers), None);
        assert_eq!(average_latency(&[]), None);
    }
}
