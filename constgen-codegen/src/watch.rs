//! Change notification driving the automatic trigger.

use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::{Duration, SystemTime},
};

use notify::{Event, RecursiveMode, Watcher};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Source of "the project changed" notifications.
pub trait ChangeNotifier {
    /// Block, calling `on_change` after every detected change. Returns when
    /// the notifier is exhausted or fails.
    fn listen(&mut self, on_change: &mut dyn FnMut()) -> Result<(), WatchError>;
}

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("cannot read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot start the file watcher")]
    Start(#[source] notify::Error),

    #[error("cannot watch '{path}'")]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("the file watcher stopped unexpectedly")]
    Disconnected,
}

/// Observable state of one watched file. Missing files are a state too.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fingerprint {
    path: PathBuf,
    modified: Option<SystemTime>,
    len: Option<u64>,
}

impl Fingerprint {
    fn of(path: &Path) -> Result<Self, WatchError> {
        match fs::metadata(path) {
            Ok(meta) => Ok(Self {
                path: path.to_path_buf(),
                modified: meta.modified().ok(),
                len: Some(meta.len()),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self {
                path: path.to_path_buf(),
                modified: None,
                len: None,
            }),
            Err(e) => Err(WatchError::Read {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}

fn fingerprints(paths: &[PathBuf]) -> Result<Vec<Fingerprint>, WatchError> {
    paths.iter().map(|path| Fingerprint::of(path)).collect()
}

fn changed_paths(current: &[Fingerprint], last: &[Fingerprint]) -> Vec<String> {
    current
        .iter()
        .zip(last)
        .filter(|(now, before)| now != before)
        .map(|(now, _)| now.path.display().to_string())
        .collect()
}

/// Directory to register for a watched file: its parent, or the closest
/// ancestor that exists when the parent has not been created yet.
fn watch_root(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    parent
        .ancestors()
        .find(|dir| dir.is_dir())
        .unwrap_or(parent)
        .to_path_buf()
}

/// Filesystem events from the platform watcher.
///
/// Events only wake the watcher up: a burst is allowed to settle for the
/// debounce window, then the watched files are fingerprinted and compared
/// with the state after the previous callback. What the callback writes
/// therefore never comes back as a change.
#[derive(Debug, Clone)]
pub struct FileWatcher {
    paths: Vec<PathBuf>,
    debounce: Duration,
    idle_limit: Option<Duration>,
}

impl FileWatcher {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            debounce: Duration::from_millis(200),
            idle_limit: None,
        }
    }

    /// Quiet period that ends a burst of events.
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Return once no event arrived for `idle` instead of running forever.
    pub fn stop_when_idle(mut self, idle: Duration) -> Self {
        self.idle_limit = Some(idle);
        self
    }

    fn next_event(
        &self,
        rx: &Receiver<notify::Result<Event>>,
    ) -> Result<Option<notify::Result<Event>>, WatchError> {
        match self.idle_limit {
            Some(idle) => match rx.recv_timeout(idle) {
                Ok(event) => Ok(Some(event)),
                Err(RecvTimeoutError::Timeout) => Ok(None),
                Err(RecvTimeoutError::Disconnected) => Err(WatchError::Disconnected),
            },
            None => rx.recv().map(Some).map_err(|_| WatchError::Disconnected),
        }
    }
}

impl ChangeNotifier for FileWatcher {
    fn listen(&mut self, on_change: &mut dyn FnMut()) -> Result<(), WatchError> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx).map_err(WatchError::Start)?;

        let roots: BTreeSet<PathBuf> = self.paths.iter().map(|p| watch_root(p)).collect();
        for root in &roots {
            watcher
                .watch(root, RecursiveMode::NonRecursive)
                .map_err(|source| WatchError::Watch {
                    path: root.clone(),
                    source,
                })?;
        }

        let mut last = fingerprints(&self.paths)?;
        debug!(files = self.paths.len(), dirs = roots.len(), "watching");

        loop {
            let Some(event) = self.next_event(&rx)? else {
                debug!("idle, stopping");
                return Ok(());
            };
            match event {
                Ok(event) if event.kind.is_access() => continue,
                Ok(event) => trace!(kind = ?event.kind, paths = ?event.paths, "file event"),
                Err(e) => warn!(error = %e, "file watcher reported an error"),
            }

            // Saves arrive as bursts of create/modify/rename events.
            while rx.recv_timeout(self.debounce).is_ok() {}

            let current = fingerprints(&self.paths)?;
            if current == last {
                trace!("no change to watched files");
                continue;
            }
            debug!(changed = ?changed_paths(&current, &last), "change detected");
            on_change();
            last = fingerprints(&self.paths)?;
        }
    }
}

/// Polls file metadata at a fixed interval. A fallback for filesystems that
/// do not deliver change events, such as some network shares.
///
/// Files are fingerprinted again after each callback, so what the callback
/// writes is not reported back as a change.
#[derive(Debug, Clone)]
pub struct PollingNotifier {
    paths: Vec<PathBuf>,
    interval: Duration,
    max_polls: Option<usize>,
}

impl PollingNotifier {
    pub fn new(paths: Vec<PathBuf>, interval: Duration) -> Self {
        Self {
            paths,
            interval,
            max_polls: None,
        }
    }

    /// Stop after `polls` rounds instead of running forever.
    pub fn max_polls(mut self, polls: usize) -> Self {
        self.max_polls = Some(polls);
        self
    }
}

impl ChangeNotifier for PollingNotifier {
    fn listen(&mut self, on_change: &mut dyn FnMut()) -> Result<(), WatchError> {
        let mut last = fingerprints(&self.paths)?;
        let mut polls = 0;
        debug!(files = self.paths.len(), interval = ?self.interval, "polling");

        while self.max_polls.is_none_or(|max| polls < max) {
            thread::sleep(self.interval);
            polls += 1;

            let current = fingerprints(&self.paths)?;
            if current != last {
                debug!(changed = ?changed_paths(&current, &last), "change detected");
                on_change();
                last = fingerprints(&self.paths)?;
            } else {
                trace!(polls, "no change");
            }
        }
        Ok(())
    }
}
