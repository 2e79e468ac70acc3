//! Core functionality for the modlint JavaScript lint task
//!
//! This crate provides:
//! - Module selection and file discovery
//! - Tokenization and rule checking
//! - Finding generation and streaming
//! - Configuration management

pub mod analyzer;
pub mod checker;
pub mod config;
pub mod discovery;
pub mod emitter;
pub mod error;
pub mod finding;
pub mod lexer;
pub mod lints;
pub mod location;
pub mod rule_set;
pub mod selector;
pub mod settings;
pub mod stream;
pub mod suppression;
pub mod task;
pub mod toml;
pub mod utils;
