//! Boundary to the host's OS theme capability.
//!
//! The bridge offers two primitives: an asynchronous query for the current
//! OS theme and a subscription to OS theme changes. Answers and notifications
//! are delivered as [`ThemeEvent`]s through an [`EventSink`], so they are
//! handled on the UI thread like any other message.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::app::domain::messages::{Message, QueryTicket, SubscriptionId, ThemeEvent};
use crate::app::domain::settings::ShellConfig;
use crate::app::domain::theme::EffectiveTheme;

use super::error::BridgeError;

/// Environment variable that disables the host bridge.
pub const NO_BRIDGE_ENV: &str = "LUMENSHELL_NO_BRIDGE";

pub trait ThemeBridge {
    /// Start an OS theme query. The answer arrives later as
    /// [`ThemeEvent::QueryResolved`] carrying `ticket`.
    fn query_os_theme(&self, ticket: QueryTicket) -> Result<(), BridgeError>;

    /// Register for [`ThemeEvent::OsThemeChanged`] notifications tagged with `id`.
    fn subscribe_os_theme(&self, id: SubscriptionId) -> Result<Subscription, BridgeError>;
}

/// Where bridge events are delivered. Implementations must be callable from
/// worker threads.
pub trait EventSink: Send + Sync + 'static {
    fn emit(&self, event: ThemeEvent);
}

impl EventSink for fltk::app::Sender<Message> {
    fn emit(&self, event: ThemeEvent) {
        self.send(event.into());
    }
}

impl EventSink for std::sync::mpsc::Sender<ThemeEvent> {
    fn emit(&self, event: ThemeEvent) {
        // Receiver gone means the app is shutting down.
        let _ = self.send(event);
    }
}

/// Handle to a live subscription. Releasing it, explicitly or by dropping,
/// stops the source of notifications for its id. Anything already queued is
/// dropped by the provider, which only acts on its active id.
pub struct Subscription {
    id: SubscriptionId,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(id: SubscriptionId, release: impl FnOnce() + 'static) -> Self {
        Self {
            id,
            release: Some(Box::new(release)),
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

type Detector = Arc<dyn Fn() -> Result<EffectiveTheme, BridgeError> + Send + Sync>;

/// Bridge backed by the host OS, queried on worker threads.
pub struct HostBridge {
    sink: Arc<dyn EventSink>,
    interval: Duration,
    detector: Detector,
}

impl HostBridge {
    /// Capability check: returns the bridge only when the host bridge is enabled.
    pub fn connect(sink: impl EventSink, config: &ShellConfig) -> Option<Self> {
        if !config.host_bridge {
            log::info!("Host theme bridge disabled in config");
            return None;
        }
        if std::env::var_os(NO_BRIDGE_ENV).is_some() {
            log::info!("Host theme bridge disabled by {}", NO_BRIDGE_ENV);
            return None;
        }
        Some(Self::with_detector(sink, config.watch_interval(), detect_os_theme))
    }

    pub fn with_detector(
        sink: impl EventSink,
        interval: Duration,
        detector: impl Fn() -> Result<EffectiveTheme, BridgeError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            sink: Arc::new(sink),
            interval,
            detector: Arc::new(detector),
        }
    }
}

impl ThemeBridge for HostBridge {
    fn query_os_theme(&self, ticket: QueryTicket) -> Result<(), BridgeError> {
        let sink = Arc::clone(&self.sink);
        let detector = Arc::clone(&self.detector);

        thread::Builder::new()
            .name("theme-query".to_string())
            .spawn(move || {
                let result = run_detector(&detector);
                sink.emit(ThemeEvent::QueryResolved { ticket, result });
            })
            .map_err(|e| BridgeError::Unavailable(e.to_string()))?;
        Ok(())
    }

    fn subscribe_os_theme(&self, id: SubscriptionId) -> Result<Subscription, BridgeError> {
        let sink = Arc::clone(&self.sink);
        let detector = Arc::clone(&self.detector);
        let interval = self.interval;
        let stop = Arc::new(AtomicBool::new(false));
        let stop_watcher = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("theme-watch".to_string())
            .spawn(move || {
                let mut last: Option<EffectiveTheme> = None;
                while !stop_watcher.load(Ordering::Acquire) {
                    match run_detector(&detector) {
                        Ok(theme) => {
                            // The first reading is emitted too; the OS may have
                            // changed since any query answered.
                            if last != Some(theme) && !stop_watcher.load(Ordering::Acquire)
                            {
                                sink.emit(ThemeEvent::OsThemeChanged {
                                    subscription: id,
                                    theme,
                                });
                            }
                            last = Some(theme);
                        }
                        Err(e) => log::debug!("Theme watcher poll failed: {}", e),
                    }
                    thread::park_timeout(interval);
                }
            })
            .map_err(|e| BridgeError::Unavailable(e.to_string()))?;

        // The watcher is not joined: it may be inside a slow detection, and
        // the UI thread must not wait for it. It exits on its next check.
        let watcher = handle.thread().clone();
        Ok(Subscription::new(id, move || {
            stop.store(true, Ordering::Release);
            watcher.unpark();
        }))
    }
}

fn run_detector(detector: &Detector) -> Result<EffectiveTheme, BridgeError> {
    panic::catch_unwind(AssertUnwindSafe(|| (**detector)()))
        .unwrap_or_else(|_| Err(BridgeError::Detection("detector panicked".to_string())))
}

/// Ask the OS for its current theme.
///
/// `dark_light` 0.2 always answers, so this never returns `Err`. The real
/// bridge only reports a failure when the detector panics or a worker
/// thread cannot be spawned.
pub fn detect_os_theme() -> Result<EffectiveTheme, BridgeError> {
    Ok(match dark_light::detect() {
        dark_light::Mode::Dark => EffectiveTheme::Dark,
        dark_light::Mode::Light => EffectiveTheme::Light,
    })
}
