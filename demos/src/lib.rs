// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared data for the `understory_virtual_window` demos.
//!
//! Run:
//! - `cargo run -p understory_virtual_window_demos --example notifications`
//! - `cargo run -p understory_virtual_window_demos --example hundred_thousand`
//!
//! Set `RUST_LOG=trace` to see the controller recompute its window.

use std::fmt;

/// Severity of a [`Notification`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// Something failed.
    Error,
    /// Informational.
    Info,
    /// Needs attention.
    Warning,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        })
    }
}

/// One row of the notifications feed.
#[derive(Clone, Debug)]
pub struct Notification {
    /// Stable identifier.
    pub id: u32,
    /// Headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Severity.
    pub kind: NotificationKind,
    /// Creation time as an RFC 3339 timestamp.
    pub created_at: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}, {})",
            self.title, self.message, self.kind, self.created_at
        )
    }
}

/// Builds `count` notifications, cycling through the kinds.
pub fn sample_notifications(count: u32) -> Vec<Notification> {
    const KINDS: [NotificationKind; 3] = [
        NotificationKind::Error,
        NotificationKind::Info,
        NotificationKind::Warning,
    ];
    (1..=count)
        .map(|id| Notification {
            id,
            title: format!("Notification #{id}"),
            message: "Test message".to_owned(),
            kind: KINDS[id as usize % KINDS.len()],
            created_at: format!(
                "19{:02}-{:02}-{:02}T{:02}:{:02}:00Z",
                70 + id % 30,
                1 + id % 12,
                1 + id % 28,
                id % 24,
                id % 60
            ),
        })
        .collect()
}

/// Lifecycle of the feed as seen by the list host.
#[derive(Clone, Debug)]
pub enum FeedState {
    /// Items are still being fetched.
    Loading,
    /// Fetching failed; the list is not shown.
    Failed(String),
    /// Items are available for windowing.
    Ready(Vec<Notification>),
}

impl FeedState {
    /// Resolves a finished fetch into a feed state.
    pub fn from_fetch(result: Result<Vec<Notification>, String>) -> Self {
        match result {
            Ok(items) => Self::Ready(items),
            Err(err) => {
                log::error!("failed to load notifications: {err}");
                Self::Failed(err)
            }
        }
    }

    /// Placeholder text for states that have no list to window.
    pub fn placeholder(&self) -> Option<String> {
        match self {
            Self::Loading => Some("Loading items...".to_owned()),
            Self::Failed(err) => Some(format!("Error: {err}")),
            Self::Ready(_) => None,
        }
    }
}

/// Installs `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::{FeedState, NotificationKind, sample_notifications};

    #[test]
    fn sample_rows_carry_all_fields() {
        let items = sample_notifications(3);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].kind, NotificationKind::Info);
        assert_eq!(items[0].created_at, "1971-02-02T01:01:00Z");
        assert_eq!(
            items[2].to_string(),
            "Notification #3 - Test message (error, 1973-04-04T03:03:00Z)"
        );
    }

    #[test]
    fn only_ready_feeds_skip_the_placeholder() {
        assert_eq!(
            FeedState::Loading.placeholder().as_deref(),
            Some("Loading items...")
        );
        let failed = FeedState::from_fetch(Err("Failed to load items".to_owned()));
        assert_eq!(
            failed.placeholder().as_deref(),
            Some("Error: Failed to load items")
        );
        let ready = FeedState::from_fetch(Ok(sample_notifications(2)));
        assert!(ready.placeholder().is_none());
    }
}
