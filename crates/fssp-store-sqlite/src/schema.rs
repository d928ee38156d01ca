//! SQL schema for the debtor store.
//!
//! Executed once at connection startup. There is no migration path; the
//! `user_version` pragma only records which layout created the file.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS debtors (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    client_id   TEXT NOT NULL,
    debtor_name TEXT NOT NULL,
    debtor_dob  TEXT NOT NULL,   -- as submitted, never parsed
    ip_number   TEXT,
    status      TEXT NOT NULL DEFAULT 'unverified',
    created_at  TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS debtors_client_idx ON debtors(client_id);

PRAGMA user_version = 1;
";
