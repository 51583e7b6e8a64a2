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

//! Nomination shortlist management.
//!
//! This module provides the capped, deduplicated shortlist of movies the
//! user has nominated. All mutation funnels through [`NominationSet::toggle`]
//! so the capacity and uniqueness invariants hold for every possible call
//! sequence, and so the UI never has to choose between an insert and a
//! delete path.

use crate::model::MovieRecord;

/// The fixed shortlist capacity.
pub(crate) const MAX_NOMINATIONS: usize = 5;

/// The result of a toggle, reported back to the caller so it can drive
/// user-facing signalling without inspecting the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToggleOutcome {
    /// The record was inserted at the end of the shortlist.
    Added,
    /// The record was already nominated and has been removed.
    Removed,
    /// The shortlist is full; the set is unchanged.
    Rejected,
}

/// An ordered sequence of nominated movies, unique by id, never more than
/// [`MAX_NOMINATIONS`] long.
pub(crate) struct NominationSet {
    movies: Vec<MovieRecord>,
}

impl NominationSet {
    pub(crate) fn new() -> Self {
        Self { movies: vec![] }
    }

    /// Replaces the shortlist with a previously persisted snapshot.
    ///
    /// The snapshot is re-checked against the invariants rather than trusted:
    /// duplicate ids are dropped (first occurrence wins) and anything past
    /// the capacity is truncated, so a tampered or stale payload can never
    /// produce an invalid set.
    pub(crate) fn seed(&mut self, snapshot: Vec<MovieRecord>) {
        self.movies.clear();
        for movie in snapshot {
            if self.movies.len() == MAX_NOMINATIONS {
                break;
            }
            if !self.is_selected(&movie.id) {
                self.movies.push(movie);
            }
        }
    }

    /// Adds the movie to the shortlist, or removes it if it is already there.
    ///
    /// Membership is keyed by id. An addition that would exceed the capacity
    /// is rejected and leaves the set untouched; removal always succeeds.
    /// Insertion order is preserved.
    pub(crate) fn toggle(&mut self, movie: MovieRecord) -> ToggleOutcome {
        if let Some(index) = self.movies.iter().position(|m| m.id == movie.id) {
            self.movies.remove(index);
            return ToggleOutcome::Removed;
        }

        if self.is_full() {
            return ToggleOutcome::Rejected;
        }

        self.movies.push(movie);
        ToggleOutcome::Added
    }

    /// Clears the shortlist unconditionally.
    pub(crate) fn reset(&mut self) {
        self.movies.clear();
    }

    pub(crate) fn is_selected(&self, id: &str) -> bool {
        self.movies.iter().any(|m| m.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.movies.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.movies.len() == MAX_NOMINATIONS
    }

    pub(crate) fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// An owned copy of the current shortlist, in order, for persistence.
    pub(crate) fn snapshot(&self) -> Vec<MovieRecord> {
        self.movies.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MovieKind;

    fn movie(id: &str, title: &str) -> MovieRecord {
        MovieRecord {
            id: id.to_string(),
            title: title.to_string(),
            year: "2000".to_string(),
            kind: MovieKind::Movie,
            poster_url: None,
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = NominationSet::new();

        assert_eq!(set.toggle(movie("tt1", "One")), ToggleOutcome::Added);
        assert_eq!(set.len(), 1);
        assert!(set.is_selected("tt1"));

        assert_eq!(set.toggle(movie("tt1", "One")), ToggleOutcome::Removed);
        assert!(set.is_empty());
        assert!(!set.is_selected("tt1"));
    }

    #[test]
    fn toggling_twice_restores_the_prior_state() {
        let mut set = NominationSet::new();
        set.toggle(movie("tt1", "One"));
        set.toggle(movie("tt2", "Two"));

        set.toggle(movie("tt3", "Three"));
        set.toggle(movie("tt3", "Three"));

        let ids: Vec<&str> = set.movies().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["tt1", "tt2"]);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut set = NominationSet::new();
        set.toggle(movie("tt3", "Three"));
        set.toggle(movie("tt1", "One"));
        set.toggle(movie("tt2", "Two"));

        let ids: Vec<&str> = set.movies().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["tt3", "tt1", "tt2"]);
    }

    #[test]
    fn toggle_at_capacity_is_rejected_and_leaves_the_set_unchanged() {
        let mut set = NominationSet::new();
        for i in 0..MAX_NOMINATIONS {
            assert_eq!(
                set.toggle(movie(&format!("tt{i}"), "Movie")),
                ToggleOutcome::Added
            );
        }
        assert!(set.is_full());

        assert_eq!(set.toggle(movie("tt99", "Extra")), ToggleOutcome::Rejected);
        assert_eq!(set.len(), MAX_NOMINATIONS);
        assert!(!set.is_selected("tt99"));
    }

    #[test]
    fn removal_is_still_possible_when_full() {
        let mut set = NominationSet::new();
        for i in 0..MAX_NOMINATIONS {
            set.toggle(movie(&format!("tt{i}"), "Movie"));
        }

        assert_eq!(set.toggle(movie("tt0", "Movie")), ToggleOutcome::Removed);
        assert_eq!(set.len(), MAX_NOMINATIONS - 1);
    }

    #[test]
    fn no_toggle_sequence_breaks_capacity_or_uniqueness() {
        let mut set = NominationSet::new();

        // Deterministic churn over a pool of ids larger than the capacity.
        for round in 0..100usize {
            let id = format!("tt{}", round % 9);
            set.toggle(movie(&id, "Movie"));

            assert!(set.len() <= MAX_NOMINATIONS);
            let mut ids: Vec<&str> = set.movies().iter().map(|m| m.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), set.len());
        }
    }

    #[test]
    fn reset_clears_unconditionally() {
        let mut set = NominationSet::new();
        set.toggle(movie("tt1", "One"));
        set.toggle(movie("tt2", "Two"));

        set.reset();
        assert!(set.is_empty());

        set.reset();
        assert!(set.is_empty());
    }

    #[test]
    fn seed_enforces_invariants_on_restored_snapshots() {
        let mut set = NominationSet::new();
        set.seed(vec![
            movie("tt1", "One"),
            movie("tt1", "Dupe"),
            movie("tt2", "Two"),
            movie("tt3", "Three"),
            movie("tt4", "Four"),
            movie("tt5", "Five"),
            movie("tt6", "Six"),
        ]);

        let ids: Vec<&str> = set.movies().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["tt1", "tt2", "tt3", "tt4", "tt5"]);
        assert_eq!(set.movies()[0].title, "One");
    }

    #[test]
    fn full_shortlist_scenario() {
        let mut set = NominationSet::new();

        assert_eq!(
            set.toggle(movie("tt0076759", "Star Wars")),
            ToggleOutcome::Added
        );
        assert_eq!(set.len(), 1);

        for i in 0..4 {
            assert_eq!(
                set.toggle(movie(&format!("tt000{i}"), "Filler")),
                ToggleOutcome::Added
            );
        }
        assert_eq!(set.len(), 5);
        assert!(set.is_full());

        assert_eq!(set.toggle(movie("tt9999", "Sixth")), ToggleOutcome::Rejected);
        assert_eq!(set.len(), 5);

        assert_eq!(
            set.toggle(movie("tt0076759", "Star Wars")),
            ToggleOutcome::Removed
        );
        assert_eq!(set.len(), 4);
        assert!(!set.is_full());
    }
}
