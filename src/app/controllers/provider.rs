//! Theme resolution and propagation.
//!
//! [`ThemeProvider`] owns the user's [`ThemePreference`], derives the
//! [`EffectiveTheme`] from it and applies that to a [`ThemeRoot`].
//!
//! # States
//!
//! - `Light` / `Dark`: the marker is fixed, no OS subscription is held.
//! - `System`: exactly one OS subscription is held (when a bridge exists) and
//!   the marker follows the OS.
//!
//! # Stale answers
//!
//! OS queries are asynchronous. Every query carries a [`QueryTicket`] and only
//! the single pending ticket is accepted; changing preference, or receiving an
//! OS notification, invalidates it. Late answers are dropped, never applied.

use crate::app::domain::messages::{QueryTicket, SubscriptionId, ThemeEvent};
use crate::app::domain::root::ThemeRoot;
use crate::app::domain::settings::ShellConfig;
use crate::app::domain::theme::{EffectiveTheme, ThemePreference};
use crate::app::infrastructure::bridge::{Subscription, ThemeBridge};
use crate::app::infrastructure::error::ThemeError;
use crate::app::infrastructure::platform::SystemProbe;
use crate::app::infrastructure::storage::PreferenceStore;

pub struct ThemeProvider {
    storage_key: String,
    store: Box<dyn PreferenceStore>,
    root: Box<dyn ThemeRoot>,
    bridge: Option<Box<dyn ThemeBridge>>,
    probe: Box<dyn SystemProbe>,
    preference: ThemePreference,
    subscription: Option<Subscription>,
    pending: Option<QueryTicket>,
    next_ticket: u64,
    next_subscription: u64,
}

impl ThemeProvider {
    /// Read the stored preference and resolve it once.
    ///
    /// `bridge` is `None` when the host has no theme bridge; the provider then
    /// probes the system directly and never subscribes.
    pub fn new(
        config: &ShellConfig,
        store: impl PreferenceStore + 'static,
        root: impl ThemeRoot + 'static,
        bridge: Option<Box<dyn ThemeBridge>>,
        probe: impl SystemProbe + 'static,
    ) -> Self {
        let preference = read_preference(&store, &config.storage_key, config.default_theme);

        let mut provider = Self {
            storage_key: config.storage_key.clone(),
            store: Box::new(store),
            root: Box::new(root),
            bridge,
            probe: Box::new(probe),
            preference,
            subscription: None,
            pending: None,
            next_ticket: 0,
            next_subscription: 0,
        };
        log::debug!("Initial theme preference: {}", preference);
        provider.transition(preference);
        provider
    }

    /// The active preference (not the effective theme).
    pub fn theme(&self) -> ThemePreference {
        self.preference
    }

    /// The theme currently applied to the root, once resolved.
    pub fn effective_theme(&self) -> Option<EffectiveTheme> {
        self.root.marker()
    }

    /// Persist `preference`, then switch to it.
    ///
    /// On a storage failure nothing changes and the error is returned.
    pub fn set_theme(&mut self, preference: ThemePreference) -> Result<(), ThemeError> {
        self.store.set(&self.storage_key, preference.as_str())?;
        log::info!("Theme preference set to {}", preference);
        self.transition(preference);
        Ok(())
    }

    /// Feed a bridge answer or OS notification back in.
    pub fn handle_event(&mut self, event: ThemeEvent) {
        match event {
            ThemeEvent::QueryResolved { ticket, result } => {
                if self.pending != Some(ticket) {
                    log::debug!("Discarding stale OS theme answer {:?}", ticket);
                    return;
                }
                self.pending = None;
                match result {
                    Ok(theme) => self.apply(theme),
                    Err(e) => {
                        log::warn!("Failed to get system theme from bridge, falling back to probe: {}", e);
                        self.apply_probe();
                    }
                }
            }
            ThemeEvent::OsThemeChanged {
                subscription,
                theme,
            } => {
                if self.active_subscription() != Some(subscription) {
                    log::debug!("Ignoring notification for released {:?}", subscription);
                    return;
                }
                // Newer than any answer still in flight.
                self.pending = None;
                self.apply(theme);
            }
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn active_subscription(&self) -> Option<SubscriptionId> {
        self.subscription.as_ref().map(Subscription::id)
    }

    pub fn pending_query(&self) -> Option<QueryTicket> {
        self.pending
    }

    pub fn has_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn transition(&mut self, preference: ThemePreference) {
        self.preference = preference;
        self.pending = None;

        match preference.fixed() {
            Some(theme) => {
                self.release_subscription();
                self.apply(theme);
            }
            None => {
                self.ensure_subscription();
                self.resolve_system();
            }
        }
    }

    fn ensure_subscription(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let Some(bridge) = &self.bridge else {
            return;
        };

        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        match bridge.subscribe_os_theme(id) {
            Ok(subscription) => {
                log::debug!("Subscribed to OS theme changes ({:?})", id);
                self.subscription = Some(subscription);
            }
            Err(e) => log::warn!("Could not subscribe to OS theme changes: {}", e),
        }
    }

    fn release_subscription(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            log::debug!("Releasing OS theme subscription ({:?})", subscription.id());
            subscription.unsubscribe();
        }
    }

    fn resolve_system(&mut self) {
        self.next_ticket += 1;
        let ticket = QueryTicket(self.next_ticket);

        let started = match &self.bridge {
            Some(bridge) => bridge.query_os_theme(ticket),
            None => {
                self.apply_probe();
                return;
            }
        };

        match started {
            Ok(()) => self.pending = Some(ticket),
            Err(e) => {
                log::warn!("Failed to get system theme from bridge, falling back to probe: {}", e);
                self.apply_probe();
            }
        }
    }

    fn apply_probe(&mut self) {
        let theme = EffectiveTheme::from_dark(self.probe.prefers_dark());
        self.apply(theme);
    }

    fn apply(&mut self, theme: EffectiveTheme) {
        if self.root.marker() != Some(theme) {
            log::debug!("Applying {} theme", theme);
        }
        self.root.apply_marker(theme);
    }
}

fn read_preference(
    store: &dyn PreferenceStore,
    key: &str,
    default: ThemePreference,
) -> ThemePreference {
    match store.get(key) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
            log::warn!("Ignoring stored theme preference: {}", e);
            default
        }),
        Ok(None) => default,
        Err(e) => {
            log::warn!("Failed to read theme preference: {}", e);
            default
        }
    }
}
