//! Core types shared by every tank-report crate.
//!
//! Holds the typed heating-cycle record, the error taxonomy, timestamp
//! helpers, report cell formatting and the command-line settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
