//! Weather panel state
//!
//! Lookups are numbered. Only the completion of the most recently issued
//! lookup is applied, so a slow answer for an earlier click cannot replace
//! the weather of a later one.

use shared::WeatherSnapshot;

use crate::error::ClientResult;

/// Handle for one weather lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherTicket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherState {
    #[default]
    Idle,
    Loading,
    Ready(WeatherSnapshot),
    Unavailable,
}

#[derive(Debug, Clone, Default)]
pub struct WeatherPanel {
    label: String,
    state: WeatherState,
    issued: u64,
}

impl WeatherPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the place the panel shows
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> &WeatherState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match &self.state {
            WeatherState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Start a lookup for `label`, superseding any lookup in flight
    pub fn begin(&mut self, label: impl Into<String>) -> WeatherTicket {
        self.issued += 1;
        self.label = label.into();
        self.state = WeatherState::Loading;
        WeatherTicket(self.issued)
    }

    /// Apply a lookup's result. Returns `false` when the ticket is stale.
    pub fn complete(&mut self, ticket: WeatherTicket, result: ClientResult<WeatherSnapshot>) -> bool {
        if ticket.0 != self.issued {
            tracing::debug!(ticket = ticket.0, latest = self.issued, "stale weather response dropped");
            return false;
        }
        self.state = match result {
            Ok(snapshot) => WeatherState::Ready(snapshot),
            Err(e) => {
                tracing::warn!(label = %self.label, error = %e, "weather lookup failed");
                WeatherState::Unavailable
            }
        };
        true
    }
}
