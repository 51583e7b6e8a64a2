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

//! Durable local storage.
//!
//! This module persists the nomination shortlist across sessions. The
//! backing store is a small SQLite key-value table; the shortlist is written
//! as a single JSON document under one fixed key, preserving order.
//!
//! Loading is deliberately forgiving: a missing database, a missing key, or
//! a payload that no longer parses all yield an empty shortlist rather than
//! an error, so a damaged store can never prevent startup.

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use crate::model::MovieRecord;

const NOMINATION_KEY: &str = "nominations";

/// Opens the store, creating the schema on first use.
///
/// Uses WAL journaling like the rest of the SQLite ecosystem here expects;
/// the store sees a single writer (the worker thread) so no further tuning
/// is needed.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened or the schema
/// cannot be created.
pub(crate) fn open_store(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)?;

    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
    ",
    )?;

    create_schema(&conn)?;

    Ok(conn)
}

fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )
    .context("Failed to create schema")
}

/// Reads the value stored under `key`, if any.
pub(crate) fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
    let value = stmt
        .query_row(params![key], |row| row.get(0))
        .optional()?;

    Ok(value)
}

/// Writes `value` under `key`, overwriting any prior value.
pub(crate) fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO kv (key, value) VALUES (?1, ?2)
         ON CONFLICT (key) DO UPDATE SET value = excluded.value",
    )?;
    stmt.execute(params![key, value])?;

    Ok(())
}

/// Returns the previously saved shortlist, or an empty one.
///
/// Any failure along the way (read error, absent key, unparseable payload)
/// degrades to empty; the set is re-validated by the caller on seed anyway.
pub(crate) fn load_nominations(conn: &Connection) -> Vec<MovieRecord> {
    get(conn, NOMINATION_KEY)
        .ok()
        .flatten()
        .and_then(|payload| serde_json::from_str(&payload).ok())
        .unwrap_or_default()
}

/// Persists the shortlist, in order, under the fixed key.
pub(crate) fn save_nominations(conn: &Connection, movies: &[MovieRecord]) -> Result<()> {
    let payload = serde_json::to_string(movies).context("Failed to serialize nominations")?;
    set(conn, NOMINATION_KEY, &payload)
}
