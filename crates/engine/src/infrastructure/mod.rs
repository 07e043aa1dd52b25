//! Infrastructure implementations.
//!
//! Contains configuration, storage, and port trait implementations.

pub mod config;
pub mod entry_repository;
pub mod ports;
pub mod storage;
