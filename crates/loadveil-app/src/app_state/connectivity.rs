//! Connectivity probe: a background task that periodically opens a TCP
//! connection to the resource host and reports reachability changes.
//!
//! Runs on a tokio runtime and talks back to the event loop over a
//! `std::sync::mpsc` channel. Only changes are sent, so the first report
//! after startup is always delivered.

use std::sync::mpsc;
use std::time::Duration;

use tokio::net::TcpStream;
use tracing::{debug, info, warn};

use loadveil_config::ResourceEndpoint;

use super::core::LoadveilApp;

/// Remembers the last reachability and reports only transitions.
#[derive(Debug, Default)]
pub(super) struct EdgeDetector {
    last: Option<bool>,
}

impl EdgeDetector {
    pub(super) fn observe(&mut self, reachable: bool) -> Option<bool> {
        if self.last == Some(reachable) {
            return None;
        }
        self.last = Some(reachable);
        Some(reachable)
    }
}

/// One reachability check.
pub(super) async fn probe_once(target: &ResourceEndpoint, timeout: Duration) -> bool {
    let connect = TcpStream::connect((target.host.as_str(), target.port));
    match tokio::time::timeout(timeout, connect).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            debug!(host = %target.host, port = target.port, error = %e, "probe connect failed");
            false
        }
        Err(_) => {
            debug!(host = %target.host, port = target.port, "probe timed out");
            false
        }
    }
}

/// Probe forever, sending every reachability change. Returns once the
/// receiving side is gone.
pub(super) async fn run_probe(
    target: ResourceEndpoint,
    interval: Duration,
    timeout: Duration,
    tx: mpsc::Sender<bool>,
) {
    let mut edges = EdgeDetector::default();
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let reachable = probe_once(&target, timeout).await;
        if let Some(change) = edges.observe(reachable) {
            info!(host = %target.host, reachable = change, "connectivity changed");
            if tx.send(change).is_err() {
                debug!("connectivity receiver dropped, stopping probe");
                return;
            }
        }
    }
}

impl LoadveilApp {
    /// Spawn the probe task. No-op when disabled, forced offline, or the
    /// resource URL has no probe-able host.
    pub(super) fn start_connectivity_probe(&mut self) {
        if self.forced_offline {
            info!("Starting offline, connectivity probe not started");
            return;
        }
        let cfg = &self.config.connectivity;
        if !cfg.probe_enabled {
            info!("Connectivity probe disabled");
            return;
        }
        let target = match ResourceEndpoint::parse(&self.config.resource.url) {
            Ok(target) => target,
            Err(e) => {
                warn!(url = %self.config.resource.url, "Resource URL {e}, connectivity probe not started");
                return;
            }
        };

        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build();
        let rt = match rt {
            Ok(rt) => rt,
            Err(e) => {
                warn!("Failed to create tokio runtime for connectivity probe: {e}");
                return;
            }
        };

        let (tx, rx) = mpsc::channel();
        let interval = Duration::from_secs(u64::from(cfg.probe_interval_secs));
        let timeout = Duration::from_millis(u64::from(cfg.probe_timeout_ms));
        info!(host = %target.host, port = target.port, ?interval, "Connectivity probe started");
        rt.spawn(run_probe(target, interval, timeout, tx));

        self.connectivity_rx = Some(rx);
        self.tokio_runtime = Some(rt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadveil_config::schema::LoadveilConfig;

    #[test]
    fn unparseable_url_skips_probe() {
        let mut config = LoadveilConfig::default();
        config.resource.url = "https://exa mple.com/".into();
        let mut app = LoadveilApp::new(config, false);
        app.start_connectivity_probe();
        assert!(app.connectivity_rx.is_none());
        assert!(app.tokio_runtime.is_none());
    }

    #[test]
    fn edge_detector_reports_only_changes() {
        let mut edges = EdgeDetector::default();
        assert_eq!(edges.observe(true), Some(true));
        assert_eq!(edges.observe(true), None);
        assert_eq!(edges.observe(false), Some(false));
        assert_eq!(edges.observe(false), None);
        assert_eq!(edges.observe(true), Some(true));
    }

    #[test]
    fn edge_detector_reports_initial_offline() {
        let mut edges = EdgeDetector::default();
        assert_eq!(edges.observe(false), Some(false));
    }

    #[tokio::test]
    async fn probe_succeeds_against_listening_socket() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let target = ResourceEndpoint {
            host: "127.0.0.1".into(),
            port,
        };
        assert!(probe_once(&target, Duration::from_secs(2)).await);
    }

    #[tokio::test]
    async fn probe_fails_against_closed_port() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let target = ResourceEndpoint {
            host: "127.0.0.1".into(),
            port,
        };
        assert!(!probe_once(&target, Duration::from_secs(2)).await);
    }

    #[tokio::test]
    async fn run_probe_sends_initial_state_once() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let target = ResourceEndpoint {
            host: "127.0.0.1".into(),
            port,
        };
        let (tx, rx) = mpsc::channel();
        let task = tokio::spawn(run_probe(
            target,
            Duration::from_millis(10),
            Duration::from_secs(1),
            tx,
        ));

        let (first, second) = tokio::task::spawn_blocking(move || {
            let first = rx.recv_timeout(Duration::from_secs(5));
            let second = rx.recv_timeout(Duration::from_millis(100));
            (first, second)
        })
        .await
        .unwrap();

        assert_eq!(first, Ok(true));
        assert!(second.is_err());
        task.abort();
        drop(listener);
    }

    #[test]
    fn forced_offline_skips_probe() {
        let mut app = LoadveilApp::new(LoadveilConfig::default(), true);
        app.start_connectivity_probe();
        assert!(app.connectivity_rx.is_none());
        assert!(app.tokio_runtime.is_none());
    }

    #[test]
    fn disabled_probe_is_not_started() {
        let mut config = LoadveilConfig::default();
        config.connectivity.probe_enabled = false;
        let mut app = LoadveilApp::new(config, false);
        app.start_connectivity_probe();
        assert!(app.connectivity_rx.is_none());
    }

    #[test]
    fn enabled_probe_opens_channel_and_runtime() {
        let mut app = LoadveilApp::new(LoadveilConfig::default(), false);
        app.start_connectivity_probe();
        assert!(app.connectivity_rx.is_some());
        assert!(app.tokio_runtime.is_some());
        app.shutdown();
        assert!(app.tokio_runtime.is_none());
    }
}
