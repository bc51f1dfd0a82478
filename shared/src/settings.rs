use serde::{Deserialize, Serialize};

/// User-tunable node configuration, persisted as JSON. Unknown fields
/// in an old file are ignored and missing ones fall back to defaults,
/// so upgrades never refuse to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_url: String,
    pub storage_quota_gb: u32,
    pub listen_port: u16,
    pub max_peers: u32,
    pub bootstrap_nodes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_owned(),
            storage_quota_gb: 50,
            listen_port: 8080,
            max_peers: 50,
            bootstrap_nodes: vec![
                "bootstrap1.mirrornet.io:8080".to_owned(),
                "bootstrap2.mirrornet.io:8080".to_owned(),
                "bootstrap3.mirrornet.io:8080".to_owned(),
            ],
        }
    }
}

impl Settings {
    pub fn peers_endpoint(&self) -> String {
        format!("{}/api/peers", self.api_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let s = Settings::default();
        assert_eq!(s.peers_endpoint(), "http://localhost:8080/api/peers");
        assert_eq!(s.storage_quota_gb, 50);
        assert_eq!(s.listen_port, 8080);
        assert_eq!(s.max_peers, 50);
        assert_eq!(s.bootstrap_nodes.len(), 3);
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let s = Settings {
            api_url: "http://10.0.0.5:9000/".to_owned(),
            ..Settings::default()
        };
        assert_eq!(s.peers_endpoint(), "http://10.0.0.5:9000/api/peers");
    }

    #[test]
    fn partial_config_file_falls_back_to_defaults() {
        let s: Settings = serde_json::from_str(r#"{"storage_quota_gb": 120}"#).unwrap();
        assert_eq!(s.storage_quota_gb, 120);
        assert_eq!(s.listen_port, 8080);
        assert_eq!(s.api_url, "http://localhost:8080");
    }

    #[test]
    fn round_trips_through_json() {
        let s = Settings {
            api_url: "http://backup.lan:8080".to_owned(),
            storage_quota_gb: 200,
            listen_port: 4001,
            max_peers: 128,
            bootstrap_nodes: vec!["seed.backup.lan:4001".to_owned()],
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
