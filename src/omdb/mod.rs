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

//! Remote movie catalog client.
//!
//! This module talks to an OMDb-compatible title search API over HTTP. It
//! runs exclusively on the background worker thread, so the blocking
//! `reqwest` client is used directly.
//!
//! The API reports "no match" in-band (`"Response": "False"` and no `Search`
//! array) rather than through the HTTP status; callers receive that as an
//! empty entry list. Transport and decode failures surface as
//! [`LookupError`], which the worker folds into the same no-results path.

mod model;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::AppConfig;

pub(crate) use model::RawMovie;
use model::SearchResponse;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub(crate) enum LookupError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub(crate) struct OmdbClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Builds a client from the application configuration.
    ///
    /// The API key is not validated here; a missing or wrong key makes every
    /// lookup fail, which the caller already treats as "no results".
    pub(crate) fn new(config: &AppConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Searches the catalog by title.
    ///
    /// Returns the raw entries in the order the API produced them; an empty
    /// list means the API found no match.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Transport`] if the request cannot be sent, the
    /// server answers with an error status, or the payload does not decode.
    pub(crate) fn search_titles(&self, title: &str) -> Result<Vec<RawMovie>, LookupError> {
        let response: SearchResponse = self
            .http
            .get(&self.api_url)
            .query(&[("apikey", self.api_key.as_str()), ("s", title)])
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response.search.unwrap_or_default())
    }
}
