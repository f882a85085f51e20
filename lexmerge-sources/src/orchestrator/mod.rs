//! Lookup orchestrator: concurrent fetches and the merge engine.
//!
//! This module fans a word out to the three sources concurrently, parses
//! whatever came back, and reconciles the records into one bounded,
//! part-of-speech-grouped entry.

pub mod lookup;
pub mod merge;
