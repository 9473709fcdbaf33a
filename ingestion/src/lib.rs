//! ingestion : turns the bus-monitor output stream into a change-only log


// crate-specific lint exceptions:
#![allow(clippy::missing_errors_doc)]


pub mod change_store;
pub mod collector_service;
pub mod config;
pub mod line_parser;
pub mod sql_log_db;
pub mod sql_migration;
pub mod test_utils;
