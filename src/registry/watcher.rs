//! Config file watcher for hot reload.

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use super::store::Registry;

/// Outcome of one reload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadEvent {
    /// Every value in the file was accepted.
    Applied,
    /// The load failed; the message lists what went wrong.
    Rejected(String),
}

/// Re-applies a config file to a registry whenever the file changes.
pub struct RegistryWatcher {
    path: PathBuf,
    registry: Arc<Registry>,
    events_tx: mpsc::UnboundedSender<ReloadEvent>,
}

impl RegistryWatcher {
    /// Create a new RegistryWatcher.
    ///
    /// Returns the watcher and a receiver for reload outcomes.
    pub fn new(
        path: &Path,
        registry: Arc<Registry>,
    ) -> (Self, mpsc::UnboundedReceiver<ReloadEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                registry,
                events_tx,
            },
            events_rx,
        )
    }

    /// Re-run the load once and publish the outcome.
    pub fn reload(&self) -> ReloadEvent {
        reload(&self.registry, &self.path, &self.events_tx)
    }

    /// Start watching the file. Events arrive on notify's background thread;
    /// keep the returned handle alive for as long as reloads are wanted.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self {
            path,
            registry,
            events_tx,
        } = self;
        let watched = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        reload(&registry, &path, &events_tx);
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&watched, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?watched, "Config watcher started");
        Ok(watcher)
    }
}

fn reload(
    registry: &Registry,
    path: &Path,
    events_tx: &mpsc::UnboundedSender<ReloadEvent>,
) -> ReloadEvent {
    let event = match registry.load_from_file(path) {
        Ok(()) => ReloadEvent::Applied,
        Err(e) => {
            tracing::error!("Failed to reload config: {}", e);
            ReloadEvent::Rejected(e.to_string())
        }
    };
    let _ = events_tx.send(event.clone());
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::presets;
    use crate::variable::Variable;
    use std::fs;
    use tokio::time::{Instant, timeout};

    #[test]
    fn test_reload_publishes_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"server": {"port": 9000}}"#).unwrap();

        let registry = Arc::new(Registry::new());
        registry.register(Variable::new("server.port", 8080, presets::int_ranged(1, 65535)));

        let (watcher, mut events) = RegistryWatcher::new(&path, registry.clone());
        assert_eq!(watcher.reload(), ReloadEvent::Applied);
        assert_eq!(events.try_recv().unwrap(), ReloadEvent::Applied);
        assert_eq!(registry.get::<i32>("server.port"), Some(9000));

        fs::write(&path, r#"{"server": {"port": 0}}"#).unwrap();
        match watcher.reload() {
            ReloadEvent::Rejected(message) => assert!(message.contains("server.port")),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(matches!(events.try_recv().unwrap(), ReloadEvent::Rejected(_)));
        assert_eq!(registry.get::<i32>("server.port"), Some(9000));
    }

    #[tokio::test]
    async fn test_run_reloads_on_file_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"server": {"port": 8080}}"#).unwrap();

        let registry = Arc::new(Registry::new());
        registry.register(Variable::new("server.port", 8080, presets::int_ranged(1, 65535)));

        let (watcher, mut events) = RegistryWatcher::new(&path, registry.clone());
        let _handle = watcher.run().unwrap();

        fs::write(&path, r#"{"server": {"port": 9100}}"#).unwrap();

        // A write can surface as several events, some seeing a half-written file.
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match timeout(remaining, events.recv()).await {
                Ok(Some(ReloadEvent::Applied))
                    if registry.get::<i32>("server.port") == Some(9100) =>
                {
                    break;
                }
                Ok(Some(_)) => continue,
                Ok(None) => panic!("watcher dropped its sender"),
                Err(_) => panic!("no reload observed after the file changed"),
            }
        }
    }
}
