//! Domain entities - Core business objects with identity

mod entry;

pub use entry::{ContactDetails, ContactInput, Entry};
