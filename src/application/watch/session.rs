//! Watch session over the page and layout directories
//!
//! One `notify` watcher per root, on the root itself or on its nearest
//! existing ancestor while it is missing. Events are filtered on the notify
//! thread and forwarded as plain paths through an mpsc channel; the session
//! owner drains that channel from its own loop.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use crate::error::GenResult;

use super::{ChangePoll, ChangeSource};

/// Where the watcher for one root is currently attached
#[derive(Debug, Clone, PartialEq, Eq)]
enum Attachment {
    /// Recursive watch on the root itself
    Root,
    /// Non-recursive watch on the nearest existing ancestor until the root
    /// appears
    Ancestor(PathBuf),
    /// Nothing on the root's path exists
    Detached,
}

/// Watcher state for one configured root
struct RootWatch {
    /// Canonical form of the root; the root itself may not exist yet
    resolved: PathBuf,
    attachment: Attachment,
    watcher: Option<RecommendedWatcher>,
}

impl RootWatch {
    fn new(root: &Path) -> Self {
        Self {
            resolved: resolve_root(root),
            attachment: Attachment::Detached,
            watcher: None,
        }
    }

    /// Move the watcher to where it belongs for the current file tree
    ///
    /// Returns true when the attachment changed.
    fn sync(&mut self, tx: &Sender<PathBuf>) -> GenResult<bool> {
        let desired = desired_attachment(&self.resolved);
        if desired == self.attachment {
            return Ok(false);
        }

        self.watcher = None;
        self.attachment = Attachment::Detached;
        self.watcher = match &desired {
            Attachment::Root => Some(spawn_watcher(
                &self.resolved,
                &self.resolved,
                RecursiveMode::Recursive,
                tx,
            )?),
            Attachment::Ancestor(dir) => Some(spawn_watcher(
                dir,
                &self.resolved,
                RecursiveMode::NonRecursive,
                tx,
            )?),
            Attachment::Detached => None,
        };
        self.attachment = desired;
        Ok(true)
    }
}

/// Live set of file-system watchers
///
/// A root that does not exist is watched through its nearest existing
/// ancestor and picked up once it is created. A root that is deleted falls
/// back to its ancestor the same way.
pub struct WatchSession {
    roots: Vec<PathBuf>,
    watches: Vec<RootWatch>,
    tx: Option<Sender<PathBuf>>,
    rx: Option<Receiver<PathBuf>>,
}

impl WatchSession {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut unique: Vec<PathBuf> = Vec::new();
        for root in roots {
            if !unique.contains(&root) {
                unique.push(root);
            }
        }
        Self {
            roots: unique,
            watches: Vec::new(),
            tx: None,
            rx: None,
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn is_active(&self) -> bool {
        self.rx.is_some()
    }

    /// Number of roots watched directly (they exist)
    pub fn watched_count(&self) -> usize {
        self.watches
            .iter()
            .filter(|w| w.attachment == Attachment::Root)
            .count()
    }

    /// Number of roots still waiting to be created
    pub fn waiting_count(&self) -> usize {
        self.watches
            .iter()
            .filter(|w| w.attachment != Attachment::Root)
            .count()
    }

    /// Register watchers for every root
    ///
    /// Calling `start` on an active session does nothing. Roots that do not
    /// exist yet are logged and watched through their nearest existing
    /// ancestor.
    pub fn start(&mut self) -> GenResult<()> {
        if self.is_active() {
            return Ok(());
        }

        let (tx, rx) = channel();
        let mut watches = Vec::with_capacity(self.roots.len());

        for root in &self.roots {
            let mut watch = RootWatch::new(root);
            watch.sync(&tx)?;
            match &watch.attachment {
                Attachment::Root => debug!(root = %watch.resolved.display(), "watching"),
                Attachment::Ancestor(dir) => warn!(
                    root = %root.display(),
                    via = %dir.display(),
                    "watch root does not exist yet, waiting for it"
                ),
                Attachment::Detached => {
                    warn!(root = %root.display(), "watch root has no existing ancestor")
                }
            }
            watches.push(watch);
        }

        self.watches = watches;
        self.tx = Some(tx);
        self.rx = Some(rx);
        Ok(())
    }

    /// Drop every watcher handle
    ///
    /// Safe to call repeatedly and on a session that never started.
    pub fn stop(&mut self) {
        if !self.is_active() {
            return;
        }
        self.watches.clear();
        self.tx = None;
        self.rx = None;
        debug!("watch session stopped");
    }

    /// Re-attach roots that appeared or disappeared since the last poll
    ///
    /// Returns a root that appeared or disappeared, if any. Moving between
    /// ancestors of a still-missing root is not reported.
    fn reattach(&mut self) -> Option<PathBuf> {
        let tx = self.tx.as_ref()?;
        let mut changed = None;
        for watch in &mut self.watches {
            let was_root = watch.attachment == Attachment::Root;
            match watch.sync(tx) {
                Ok(true) => {
                    let is_root = watch.attachment == Attachment::Root;
                    if is_root == was_root {
                        continue;
                    }
                    if is_root {
                        info!(root = %watch.resolved.display(), "watch root appeared");
                    } else {
                        info!(root = %watch.resolved.display(), "watch root removed");
                    }
                    changed.get_or_insert_with(|| watch.resolved.clone());
                }
                Ok(false) => {}
                Err(e) => {
                    warn!(root = %watch.resolved.display(), error = %e, "failed to re-attach watcher")
                }
            }
        }
        changed
    }

    fn is_under_root(&self, path: &Path) -> bool {
        self.watches.iter().any(|w| path.starts_with(&w.resolved))
    }
}

impl ChangeSource for WatchSession {
    fn next_change(&mut self, timeout: Duration) -> ChangePoll {
        let Some(rx) = &self.rx else {
            return ChangePoll::Closed;
        };
        let polled = rx.recv_timeout(timeout);
        let reattached = self.reattach();

        match polled {
            Ok(path) if self.is_under_root(&path) => ChangePoll::Changed(path),
            Ok(_) | Err(RecvTimeoutError::Timeout) => {
                reattached.map(ChangePoll::Changed).unwrap_or(ChangePoll::Idle)
            }
            Err(RecvTimeoutError::Disconnected) => ChangePoll::Closed,
        }
    }
}

impl Drop for WatchSession {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Canonical root path, canonicalizing the longest existing prefix when the
/// root itself is missing
fn resolve_root(root: &Path) -> PathBuf {
    if let Ok(canonical) = root.canonicalize() {
        return canonical;
    }
    for ancestor in root.ancestors().skip(1) {
        if let Ok(canonical) = ancestor.canonicalize() {
            if let Ok(rest) = root.strip_prefix(ancestor) {
                return canonical.join(rest);
            }
        }
    }
    root.to_path_buf()
}

fn desired_attachment(root: &Path) -> Attachment {
    if root.exists() {
        return Attachment::Root;
    }
    root.ancestors()
        .skip(1)
        .find(|a| a.is_dir())
        .map(|a| Attachment::Ancestor(a.to_path_buf()))
        .unwrap_or(Attachment::Detached)
}

/// Watch `target`, forwarding paths at or below `root` and paths on the way
/// to it (an ancestor of `root` being created or removed)
fn spawn_watcher(
    target: &Path,
    root: &Path,
    mode: RecursiveMode,
    tx: &Sender<PathBuf>,
) -> GenResult<RecommendedWatcher> {
    let tx = tx.clone();
    let filter_root = root.to_path_buf();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(event.kind, EventKind::Access(_)) {
                    return;
                }
                for path in event.paths {
                    let below = path.starts_with(&filter_root) && !is_hidden(&filter_root, &path);
                    let on_the_way = filter_root.starts_with(&path);
                    if below || on_the_way {
                        let _ = tx.send(path);
                    }
                }
            }
            Err(e) => warn!(error = %e, "watch error"),
        },
        Config::default(),
    )?;
    watcher.watch(target, mode)?;
    Ok(watcher)
}

/// True when any component of `path` below `root` starts with a dot
///
/// Paths outside `root` are judged by their file name alone.
pub fn is_hidden(root: &Path, path: &Path) -> bool {
    let is_dot = |c: &std::ffi::OsStr| c.to_string_lossy().starts_with('.');
    match path.strip_prefix(root) {
        Ok(rel) => rel.components().any(|c| is_dot(c.as_os_str())),
        Err(_) => path.file_name().map(is_dot).unwrap_or(false),
    }
}
