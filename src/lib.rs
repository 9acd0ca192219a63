//! Rolo - an interactive command-line contact manager.
//!
//! This library holds the in-memory data model and its validation and
//! query logic: validated field values, contact records, the name-keyed
//! book, the upcoming-birthday computation, and JSON snapshot
//! persistence. The binary wraps it in an interactive command loop.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the contact record and the book that holds them
//! - **storage**: JSON snapshot persistence for the book
//! - **error**: custom error types for storage and configuration
//! - **config**: configuration management from environment variables
//! - **repl**: the interactive command loop

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{ConfigError, StorageError};
pub use models::{ContactBook, Record};
pub use repl::{Command, Session};
pub use storage::{BookStore, JsonFileStore};
