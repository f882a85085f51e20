//! Dictionary source implementations.
//!
//! Each module provides a struct implementing
//! [`crate::source::DictionarySource`] together with a pure parser function
//! that can be exercised against fixture payloads.

pub mod bangla;
pub mod cambridge;
pub mod english;
pub mod text;

pub use bangla::BanglaSource;
pub use cambridge::CambridgeSource;
pub use english::EnglishSource;
