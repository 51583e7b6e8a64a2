// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Transient notification banner state.
//!
//! At most one notification is visible at a time. Each show restarts the
//! auto-dismiss clock, so a newer notification preempts the pending dismissal
//! of an older one instead of queueing behind it. There is no timer thread:
//! the deadline is an [`Instant`] checked from the application tick event,
//! which makes "cancelling the timer" a plain replacement of the deadline.

use std::time::{Duration, Instant};

/// How long a notification stays on screen after its most recent show.
pub(crate) const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(2200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Info,
    Success,
}

struct Notice {
    text: String,
    kind: NoticeKind,
    shown_at: Instant,
}

pub(crate) struct Notifier {
    current: Option<Notice>,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        Self { current: None }
    }

    /// Shows a notification, replacing whatever is currently visible and
    /// restarting the dismissal clock.
    pub(crate) fn show(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.show_at(text, kind, Instant::now());
    }

    /// Dismisses the current notification once its time is up.
    pub(crate) fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub(crate) fn current(&self) -> Option<(&str, NoticeKind)> {
        self.current
            .as_ref()
            .map(|notice| (notice.text.as_str(), notice.kind))
    }

    fn show_at(&mut self, text: impl Into<String>, kind: NoticeKind, now: Instant) {
        self.current = Some(Notice {
            text: text.into(),
            kind,
            shown_at: now,
        });
    }

    fn tick_at(&mut self, now: Instant) {
        if let Some(notice) = &self.current {
            if now.duration_since(notice.shown_at) >= NOTIFICATION_TIMEOUT {
                self.current = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let notifier = Notifier::new();
        assert!(notifier.current().is_none());
    }

    #[test]
    fn clears_after_the_timeout() {
        let mut notifier = Notifier::new();
        let start = Instant::now();

        notifier.show_at("Nominations saved!", NoticeKind::Success, start);
        assert_eq!(
            notifier.current(),
            Some(("Nominations saved!", NoticeKind::Success))
        );

        notifier.tick_at(start + NOTIFICATION_TIMEOUT - Duration::from_millis(1));
        assert!(notifier.current().is_some());

        notifier.tick_at(start + NOTIFICATION_TIMEOUT);
        assert!(notifier.current().is_none());
    }

    #[test]
    fn a_new_notification_restarts_the_clock() {
        let mut notifier = Notifier::new();
        let start = Instant::now();

        notifier.show_at("first", NoticeKind::Info, start);

        // Just before the first would clear, a second one preempts it.
        let later = start + NOTIFICATION_TIMEOUT - Duration::from_millis(100);
        notifier.show_at("second", NoticeKind::Info, later);

        // The old deadline passing must not clear the new notification.
        notifier.tick_at(start + NOTIFICATION_TIMEOUT);
        assert_eq!(notifier.current(), Some(("second", NoticeKind::Info)));

        notifier.tick_at(later + NOTIFICATION_TIMEOUT);
        assert!(notifier.current().is_none());
    }

    #[test]
    fn tick_while_idle_is_a_no_op() {
        let mut notifier = Notifier::new();
        notifier.tick_at(Instant::now() + NOTIFICATION_TIMEOUT);
        assert!(notifier.current().is_none());
    }
}
