//! Shared test utilities for the locale-config workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`source`]: [`FakeSource`], an in-memory locale source that records calls
//! - [`tree`]: [`LocaleTree`], a temporary on-disk locale directory builder

pub mod source;
pub mod tree;

pub use source::FakeSource;
pub use tree::LocaleTree;
