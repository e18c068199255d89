//! Persistent storage.
//!
//! The bot keeps a single SQLite database under the dynamic data directory.
//! Writes are batched in one open transaction that the scheduler commits
//! every minute.

pub mod database;
