use std::time::Instant;

use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

/// Optional call-to-action rendered at the bottom of an entry,
/// e.g. "View Files" on a completed backup.
#[derive(Debug, Clone)]
pub struct NotificationAction {
    pub label: String,
    pub go_to: Page,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: Instant,
    pub read: bool,
    pub action: Option<NotificationAction>,
}

/// In-memory notification feed, newest first. Ids are never reused.
///
/// The unread tally is kept alongside the entries so the bell badge
/// doesn't rescan the whole list every frame.
#[derive(Debug, Default)]
pub struct NotificationStore {
    entries: Vec<Notification>,
    unread: usize,
    next_id: u64,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.push(kind, title.into(), message.into(), None)
    }

    pub fn add_with_action(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        action: NotificationAction,
    ) -> NotificationId {
        self.push(kind, title.into(), message.into(), Some(action))
    }

    fn push(
        &mut self,
        kind: NotificationKind,
        title: String,
        message: String,
        action: Option<NotificationAction>,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            0,
            Notification {
                id,
                kind,
                title,
                message,
                created_at: Instant::now(),
                read: false,
                action,
            },
        );
        self.unread += 1;
        id
    }

    /// No-op if the id is unknown or the entry is already read.
    pub fn mark_read(&mut self, id: NotificationId) {
        if let Some(entry) = self.entries.iter_mut().find(|n| n.id == id)
            && !entry.read
        {
            entry.read = true;
            self.unread -= 1;
        }
    }

    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
        self.unread = 0;
    }

    /// No-op if the id is unknown (e.g. removed twice).
    pub fn remove(&mut self, id: NotificationId) {
        if let Some(index) = self.entries.iter().position(|n| n.id == id) {
            if !self.entries[index].read {
                self.unread -= 1;
            }
            self.entries.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.unread = 0;
    }

    pub fn unread(&self) -> usize {
        self.unread
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn add_one(store: &mut NotificationStore, kind: NotificationKind) -> NotificationId {
        store.add(kind, "title", "message")
    }

    #[test]
    fn add_prepends_unread_entries() {
        let mut store = NotificationStore::new();
        let first = add_one(&mut store, NotificationKind::Info);
        let second = add_one(&mut store, NotificationKind::Success);

        let order: Vec<_> = store.iter().map(|n| n.id).collect();
        assert_eq!(order, vec![second, first]);
        assert!(store.iter().all(|n| !n.read));
        assert_eq!(store.unread(), 2);
    }

    #[test]
    fn ids_are_unique_even_after_clear() {
        let mut store = NotificationStore::new();
        let a = add_one(&mut store, NotificationKind::Info);
        store.clear();
        let b = add_one(&mut store, NotificationKind::Info);
        assert_ne!(a, b);
    }

    #[test]
    fn mark_read_updates_count_once() {
        let mut store = NotificationStore::new();
        let id = add_one(&mut store, NotificationKind::Warning);
        assert_eq!(store.unread(), 1);

        store.mark_read(id);
        assert_eq!(store.unread(), 0);

        // Marking again must not underflow the tally.
        store.mark_read(id);
        assert_eq!(store.unread(), 0);
    }

    #[test]
    fn mark_read_on_unknown_id_is_noop() {
        let mut store = NotificationStore::new();
        let id = add_one(&mut store, NotificationKind::Info);
        store.remove(id);
        store.mark_read(id);
        assert_eq!(store.unread(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn mark_all_read_is_idempotent() {
        let mut store = NotificationStore::new();
        add_one(&mut store, NotificationKind::Info);
        add_one(&mut store, NotificationKind::Error);

        store.mark_all_read();
        assert_eq!(store.unread(), 0);
        store.mark_all_read();
        assert_eq!(store.unread(), 0);
        assert!(store.iter().all(|n| n.read));
    }

    #[test]
    fn remove_twice_is_noop() {
        let mut store = NotificationStore::new();
        let keep = add_one(&mut store, NotificationKind::Info);
        let gone = add_one(&mut store, NotificationKind::Success);

        store.remove(gone);
        store.remove(gone);

        assert_eq!(store.len(), 1);
        assert_eq!(store.unread(), 1);
        assert_eq!(store.iter().next().map(|n| n.id), Some(keep));
    }

    #[test]
    fn clear_empties_everything() {
        let mut store = NotificationStore::new();
        add_one(&mut store, NotificationKind::Info);
        add_one(&mut store, NotificationKind::Warning);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.unread(), 0);
        // Clearing an empty store should also be fine.
        store.clear();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn mixed_kinds_scenario() {
        let mut store = NotificationStore::new();
        add_one(&mut store, NotificationKind::Info);
        let success = add_one(&mut store, NotificationKind::Success);
        add_one(&mut store, NotificationKind::Warning);
        assert_eq!(store.unread(), 3);

        store.mark_read(success);
        assert_eq!(store.unread(), 2);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.unread(), 0);
    }

    #[test]
    fn action_is_carried_through() {
        let mut store = NotificationStore::new();
        store.add_with_action(
            NotificationKind::Success,
            "Backup Completed",
            "report.pdf has been successfully backed up to the network.",
            NotificationAction {
                label: "View Files".into(),
                go_to: Page::Files,
            },
        );
        let entry = store.iter().next().unwrap();
        let action = entry.action.as_ref().unwrap();
        assert_eq!(action.label, "View Files");
        assert_eq!(action.go_to, Page::Files);
    }

    // Drives a few hundred random operations and checks the cached
    // unread tally against a full rescan after every step.
    #[test]
    fn unread_tally_matches_rescan_under_random_ops() {
        let mut rng = StdRng::seed_from_u64(0xB4CC_0FFE);
        let mut store = NotificationStore::new();
        let mut issued: Vec<NotificationId> = Vec::new();

        for _ in 0..400 {
            match rng.random_range(0..6) {
                0 | 1 => {
                    let kind = match rng.random_range(0..4) {
                        0 => NotificationKind::Info,
                        1 => NotificationKind::Success,
                        2 => NotificationKind::Warning,
                        _ => NotificationKind::Error,
                    };
                    issued.push(store.add(kind, "t", "m"));
                }
                2 => {
                    if let Some(&id) = pick(&mut rng, &issued) {
                        store.mark_read(id);
                    }
                }
                3 => {
                    if let Some(&id) = pick(&mut rng, &issued) {
                        store.remove(id);
                    }
                }
                4 => store.mark_all_read(),
                _ => {
                    // Rare full clear.
                    if rng.random_range(0..10) == 0 {
                        store.clear();
                    }
                }
            }

            let rescan = store.iter().filter(|n| !n.read).count();
            assert_eq!(store.unread(), rescan);
        }
    }

    fn pick<'a>(rng: &mut StdRng, ids: &'a [NotificationId]) -> Option<&'a NotificationId> {
        if ids.is_empty() {
            None
        } else {
            ids.get(rng.random_range(0..ids.len()))
        }
    }
}
