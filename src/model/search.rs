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

//! Catalog search session management.
//!
//! This module provides state for the search view: the most recent result
//! set, the query that produced it, and a sequence counter that pairs each
//! in-flight lookup with its completion. Lookups run on the background
//! worker; by the time a response arrives the user may have issued a newer
//! search, so completions carry the sequence number they were issued under
//! and stale ones are discarded without touching state.

use crate::model::MovieRecord;

pub(crate) struct SearchSession {
    results: Vec<MovieRecord>,
    active_query: Option<String>,
    seq: u64,
}

impl SearchSession {
    pub(crate) fn new() -> Self {
        Self {
            results: vec![],
            active_query: None,
            seq: 0,
        }
    }

    /// Starts a lookup for `query`, returning the sequence number the
    /// completion must present.
    ///
    /// A blank query performs no lookup at all: the session is cleared and
    /// `None` is returned. Existing results are kept on screen while a real
    /// lookup is in flight.
    pub(crate) fn begin_search(&mut self, query: &str) -> Option<u64> {
        if query.trim().is_empty() {
            self.clear();
            return None;
        }

        self.seq += 1;
        Some(self.seq)
    }

    /// Applies a completed lookup that produced at least one result.
    ///
    /// Results replace the previous set wholesale, in the order the external
    /// source returned them, and `query` becomes the active query. Returns
    /// `false` for a stale completion, which is ignored entirely.
    pub(crate) fn complete(
        &mut self,
        seq: u64,
        query: String,
        results: Vec<MovieRecord>,
    ) -> bool {
        if seq != self.seq {
            return false;
        }

        self.results = results;
        self.active_query = Some(query);
        true
    }

    /// Applies a completed lookup that produced nothing, either a genuine
    /// "no match" or a failed transport: both clear the session. Returns
    /// `false` for a stale completion.
    pub(crate) fn complete_empty(&mut self, seq: u64) -> bool {
        if seq != self.seq {
            return false;
        }

        self.clear();
        true
    }

    /// Empties the results and active query. The pending query text lives in
    /// the input widget and is untouched.
    ///
    /// Clearing also invalidates any lookup still in flight: the user just
    /// emptied the session, so a completion for an earlier query must not
    /// repopulate it.
    pub(crate) fn clear(&mut self) {
        self.seq += 1;
        self.results.clear();
        self.active_query = None;
    }

    pub(crate) fn results(&self) -> &[MovieRecord] {
        &self.results
    }

    pub(crate) fn active_query(&self) -> Option<&str> {
        self.active_query.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MovieKind;

    fn movie(id: &str) -> MovieRecord {
        MovieRecord {
            id: id.to_string(),
            title: id.to_string(),
            year: "2000".to_string(),
            kind: MovieKind::Movie,
            poster_url: None,
        }
    }

    #[test]
    fn empty_query_clears_without_issuing_a_lookup() {
        let mut session = SearchSession::new();
        let seq = session.begin_search("star wars").unwrap();
        assert!(session.complete(seq, "star wars".to_string(), vec![movie("tt1")]));

        assert_eq!(session.begin_search(""), None);
        assert!(session.results().is_empty());
        assert_eq!(session.active_query(), None);

        assert_eq!(session.begin_search("   "), None);
    }

    #[test]
    fn completion_replaces_results_and_sets_active_query() {
        let mut session = SearchSession::new();
        let seq = session.begin_search("alien").unwrap();
        assert!(session.complete(
            seq,
            "alien".to_string(),
            vec![movie("tt1"), movie("tt2")]
        ));

        assert_eq!(session.results().len(), 2);
        assert_eq!(session.active_query(), Some("alien"));

        let seq = session.begin_search("blade runner").unwrap();
        assert!(session.complete(seq, "blade runner".to_string(), vec![movie("tt3")]));

        // Replaced wholesale, never merged.
        assert_eq!(session.results().len(), 1);
        assert_eq!(session.results()[0].id, "tt3");
        assert_eq!(session.active_query(), Some("blade runner"));
    }

    #[test]
    fn results_are_kept_while_a_lookup_is_in_flight() {
        let mut session = SearchSession::new();
        let seq = session.begin_search("alien").unwrap();
        session.complete(seq, "alien".to_string(), vec![movie("tt1")]);

        session.begin_search("aliens");
        assert_eq!(session.results().len(), 1);
        assert_eq!(session.active_query(), Some("alien"));
    }

    #[test]
    fn stale_completions_are_discarded() {
        let mut session = SearchSession::new();
        let first = session.begin_search("alien").unwrap();
        let second = session.begin_search("aliens").unwrap();

        assert!(!session.complete(first, "alien".to_string(), vec![movie("tt1")]));
        assert!(session.results().is_empty());

        assert!(session.complete(second, "aliens".to_string(), vec![movie("tt2")]));
        assert_eq!(session.active_query(), Some("aliens"));

        // A stale empty completion must not wipe the newer results either.
        assert!(!session.complete_empty(first));
        assert_eq!(session.results().len(), 1);
    }

    #[test]
    fn completion_arriving_after_clear_is_stale() {
        let mut session = SearchSession::new();
        let seq = session.begin_search("alien").unwrap();

        session.clear();

        assert!(!session.complete(seq, "alien".to_string(), vec![movie("tt1")]));
        assert!(session.results().is_empty());
        assert_eq!(session.active_query(), None);
    }

    #[test]
    fn completion_arriving_after_an_empty_search_is_stale() {
        let mut session = SearchSession::new();
        let seq = session.begin_search("alien").unwrap();

        assert_eq!(session.begin_search(""), None);

        assert!(!session.complete(seq, "alien".to_string(), vec![movie("tt1")]));
        assert!(session.results().is_empty());
        assert_eq!(session.active_query(), None);

        // The empty outcome of the same lookup is equally ignored.
        assert!(!session.complete_empty(seq));
    }

    #[test]
    fn empty_completion_clears_the_session() {
        let mut session = SearchSession::new();
        let seq = session.begin_search("alien").unwrap();
        session.complete(seq, "alien".to_string(), vec![movie("tt1")]);

        let seq = session.begin_search("xyzzyNotAMovie").unwrap();
        assert!(session.complete_empty(seq));
        assert!(session.results().is_empty());
        assert_eq!(session.active_query(), None);
    }

    #[test]
    fn clear_empties_results_and_active_query() {
        let mut session = SearchSession::new();
        let seq = session.begin_search("alien").unwrap();
        session.complete(seq, "alien".to_string(), vec![movie("tt1")]);

        session.clear();
        assert!(session.results().is_empty());
        assert_eq!(session.active_query(), None);
    }
}
