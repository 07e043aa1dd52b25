//! Use cases - User story orchestration.
//!
//! Use cases combine domain validation with the storage ports.

pub mod entries;

pub use entries::{EntryError, EntryOps};
