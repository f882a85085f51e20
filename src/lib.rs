//! lexmerge: English and Bangla word lookup.
//!
//! A thin front end over [`lexmerge_sources`], which fetches three
//! dictionary sources concurrently and merges them into one entry:
//! - **English**: a JSON dictionary API (phonetic, meanings, examples)
//! - **Bangla**: a translation site scraped for meanings and pronunciation
//! - **Cambridge**: a dictionary site scraped for definitions by part of speech
//!
//! This crate adds input validation, a TOML configuration file and a
//! plain-text renderer used by the `lexmerge` binary.

pub mod config;
pub mod error;
pub mod render;
pub mod validate;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use render::render_text;
pub use validate::validate_word;

pub use lexmerge_sources::{
    LookupConfig, MergedEntry, MergedMeaning, SourceError, WordLookup, lookup, spawn_lookup,
};
