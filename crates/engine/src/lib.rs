//! Agenda Engine library.
//!
//! This crate contains all server-side code for the agenda.
//!
//! ## Structure
//!
//! - `use_cases/` - Entry operations combining validation and storage
//! - `infrastructure/` - Configuration, SQLite storage, port traits
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
