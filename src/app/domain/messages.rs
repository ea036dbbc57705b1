use crate::app::infrastructure::error::BridgeError;

use super::theme::{EffectiveTheme, ThemePreference};

/// Identifies one OS theme query. Answers carrying a ticket that is no
/// longer pending are stale and get dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryTicket(pub u64);

/// Identifies one OS theme subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Events the theme bridge delivers back to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeEvent {
    QueryResolved {
        ticket: QueryTicket,
        result: Result<EffectiveTheme, BridgeError>,
    },
    OsThemeChanged {
        subscription: SubscriptionId,
        theme: EffectiveTheme,
    },
}

/// All messages that can be sent through the FLTK channel.
/// Menu callbacks and bridge threads send these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SetTheme(ThemePreference),
    Theme(ThemeEvent),
    Quit,
}

impl From<ThemeEvent> for Message {
    fn from(event: ThemeEvent) -> Self {
        Message::Theme(event)
    }
}
