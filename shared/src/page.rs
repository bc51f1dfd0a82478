#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Backup,
    Files,
    Peers,
    Settings,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Backup,
        Page::Files,
        Page::Peers,
        Page::Settings,
    ];

    /// Short label used in the sidebar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Backup => "Backup",
            Self::Files => "My Files",
            Self::Peers => "Peers",
            Self::Settings => "Settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Backup => "Backup Files",
            Self::Files => "My Files",
            Self::Peers => "Peer Network",
            Self::Settings => "Settings",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Dashboard => "Welcome back to MirrorNet. Your files are secure and distributed.",
            Self::Backup => {
                "Upload and encrypt your files for distributed backup across the peer network."
            }
            Self::Files => "Manage and restore your backed up files from the distributed network.",
            Self::Peers => "Monitor and manage connections to peers in the distributed network.",
            Self::Settings => "Configure your MirrorNet client and manage your identity.",
        }
    }
}
