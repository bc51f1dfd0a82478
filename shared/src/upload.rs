use std::path::Path;

use rand::Rng;

/// Cadence of the per-task simulation driver.
pub const TICK_MILLIS: u64 = 200;

/// Per-tick progress increment, sampled uniformly from [5, 20).
pub const STEP_MIN: f32 = 5.0;
pub const STEP_MAX: f32 = 20.0;

/// Chunk count fabricated at completion, sampled from [5, 15).
pub const CHUNKS_MIN: u32 = 5;
pub const CHUNKS_MAX: u32 = 15;

/// Every completed backup reports this many synthetic peers.
pub const DISTRIBUTED_PEER_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UploadId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Uploading,
    Encrypting,
    Distributing,
    Completed,
    /// Reserved for a real failure path; nothing transitions here yet.
    Error,
}

impl UploadStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Uploading => "Uploading...",
            Self::Encrypting => "Encrypting...",
            Self::Distributing => "Distributing to peers...",
            Self::Completed => "Backup completed",
            Self::Error => "Upload failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }

    fn next_phase(self) -> Self {
        match self {
            Self::Uploading => Self::Encrypting,
            Self::Encrypting => Self::Distributing,
            Self::Distributing => Self::Completed,
            terminal => terminal,
        }
    }
}

/// What a file picker or drop handler hands us: just enough metadata
/// to describe the file, never its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl SelectedFile {
    /// None for anything that is not a readable regular file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let meta = std::fs::metadata(path).ok()?;
        if !meta.is_file() {
            return None;
        }
        let name = path.file_name()?.to_string_lossy().into_owned();
        let mime = mime_for_path(path).to_owned();
        Some(Self {
            name,
            size: meta.len(),
            mime,
        })
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" | "tgz" => "application/gzip",
        "tar" => "application/x-tar",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "mkv" | "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "ogg" => "audio/ogg",
        "txt" | "md" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Outcome of a single simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running,
    /// Terminal state reached; the driver must stop ticking this task.
    Done,
}

/// Per-file backup progress record. Mutated only by [`UploadTask::advance`],
/// which the driver calls once per tick; everyone else sees snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadTask {
    pub id: UploadId,
    pub name: String,
    pub size: u64,
    pub mime: String,
    /// 0.0..=100.0 within the current phase.
    pub progress: f32,
    pub status: UploadStatus,
    pub chunk_count: Option<u32>,
    /// Empty until the task completes.
    pub distributed_peers: Vec<String>,
}

impl UploadTask {
    pub fn new(id: UploadId, file: SelectedFile) -> Self {
        Self {
            id,
            name: file.name,
            size: file.size,
            mime: file.mime,
            progress: 0.0,
            status: UploadStatus::Uploading,
            chunk_count: None,
            distributed_peers: Vec::new(),
        }
    }

    /// One simulation step: bump progress by a random increment and,
    /// on crossing 100, either advance to the next phase (progress
    /// resets to 0) or finish. Finishing pins progress at 100, rolls
    /// the chunk count, fabricates the distributed peer set and
    /// reports [`Tick::Done`].
    pub fn advance(&mut self, rng: &mut impl Rng) -> Tick {
        if self.status.is_terminal() {
            return Tick::Done;
        }

        self.progress += rng.random_range(STEP_MIN..STEP_MAX);
        if self.progress >= 100.0 {
            let next = self.status.next_phase();
            if next == UploadStatus::Completed {
                self.progress = 100.0;
                self.status = UploadStatus::Completed;
                self.chunk_count = Some(rng.random_range(CHUNKS_MIN..CHUNKS_MAX));
                self.distributed_peers = (0..DISTRIBUTED_PEER_COUNT)
                    .map(|_| synthetic_peer_id(rng))
                    .collect();
                return Tick::Done;
            }
            self.progress = 0.0;
            self.status = next;
        }
        Tick::Running
    }
}

/// Ids in the style the network hands out: "peer_" plus six
/// lowercase base-36 characters.
pub fn synthetic_peer_id(rng: &mut impl Rng) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let suffix: String = (0..6)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("peer_{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn task(name: &str, size: u64, mime: &str) -> UploadTask {
        UploadTask::new(
            UploadId(1),
            SelectedFile {
                name: name.into(),
                size,
                mime: mime.into(),
            },
        )
    }

    #[test]
    fn starts_in_uploading_with_zero_progress() {
        let t = task("notes.txt", 1234, "text/plain");
        assert_eq!(t.status, UploadStatus::Uploading);
        assert_eq!(t.progress, 0.0);
        assert_eq!(t.chunk_count, None);
        assert!(t.distributed_peers.is_empty());
    }

    #[test]
    fn progress_never_exceeds_100_and_never_regresses_within_a_phase() {
        for seed in 0..32u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut t = task("clip.mp4", 4_000_000, "video/mp4");
            let mut prev = (t.status, t.progress);

            for _ in 0..10_000 {
                let outcome = t.advance(&mut rng);
                assert!(t.progress <= 100.0, "seed {seed}: progress {}", t.progress);
                let (prev_status, prev_progress) = prev;
                if t.status == prev_status {
                    assert!(
                        t.progress >= prev_progress,
                        "seed {seed}: {:?} went {prev_progress} -> {}",
                        t.status,
                        t.progress
                    );
                }
                prev = (t.status, t.progress);
                if outcome == Tick::Done {
                    break;
                }
            }
            assert_eq!(t.status, UploadStatus::Completed);
        }
    }

    #[test]
    fn phases_run_in_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut t = task("archive.zip", 9_999, "application/zip");
        let mut seen = vec![t.status];

        while t.advance(&mut rng) == Tick::Running {
            if seen.last() != Some(&t.status) {
                seen.push(t.status);
            }
        }
        if seen.last() != Some(&t.status) {
            seen.push(t.status);
        }

        assert_eq!(
            seen,
            vec![
                UploadStatus::Uploading,
                UploadStatus::Encrypting,
                UploadStatus::Distributing,
                UploadStatus::Completed,
            ]
        );
    }

    #[test]
    fn completion_fabricates_chunks_and_peers() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut t = task("report.pdf", 10 * 1024 * 1024, "application/pdf");
        while t.advance(&mut rng) == Tick::Running {}

        assert_eq!(t.status, UploadStatus::Completed);
        assert_eq!(t.progress, 100.0);
        let chunks = t.chunk_count.unwrap();
        assert!((CHUNKS_MIN..CHUNKS_MAX).contains(&chunks), "chunks {chunks}");
        assert_eq!(t.distributed_peers.len(), DISTRIBUTED_PEER_COUNT);
        for peer in &t.distributed_peers {
            let suffix = peer.strip_prefix("peer_").unwrap();
            assert_eq!(suffix.len(), 6);
            assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn advance_after_completion_is_a_pinned_noop() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut t = task("a.bin", 1, "application/octet-stream");
        while t.advance(&mut rng) == Tick::Running {}
        let done = t.clone();

        for _ in 0..10 {
            assert_eq!(t.advance(&mut rng), Tick::Done);
        }
        assert_eq!(t, done);
    }

    #[test]
    fn each_phase_needs_multiple_ticks() {
        // Increments live in [5, 20), so a phase takes at least 6
        // ticks (5 ticks strictly under 20 sum to under 100) and at
        // most 20.
        let mut rng = StdRng::seed_from_u64(42);
        let mut t = task("b.bin", 1, "application/octet-stream");
        let mut ticks_in_phase = 0u32;
        let mut phase = t.status;

        loop {
            let outcome = t.advance(&mut rng);
            ticks_in_phase += 1;
            if t.status != phase {
                assert!((6..=20).contains(&ticks_in_phase), "{ticks_in_phase} ticks");
                phase = t.status;
                ticks_in_phase = 0;
            }
            if outcome == Tick::Done {
                break;
            }
        }
    }

    #[test]
    fn mime_guesses_from_extension() {
        assert_eq!(mime_for_path(Path::new("report.pdf")), "application/pdf");
        assert_eq!(mime_for_path(Path::new("photos.ZIP")), "application/zip");
        assert_eq!(mime_for_path(Path::new("song.mp3")), "audio/mpeg");
        assert_eq!(mime_for_path(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(mime_for_path(Path::new("pic.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("mystery")), "application/octet-stream");
    }

    #[test]
    fn synthetic_ids_have_the_network_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let id = synthetic_peer_id(&mut rng);
            assert!(id.starts_with("peer_"));
            assert_eq!(id.len(), "peer_".len() + 6);
        }
    }
}
