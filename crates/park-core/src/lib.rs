//! Core types for the Profile Park user directory.
//!
//! This crate is deliberately free of HTTP and terminal dependencies. It owns
//! the fetch lifecycle ([`loader`]), the query filter ([`filter`]) and the
//! mapping from loader state to what the presentation layer should draw
//! ([`view`]). The actual transport is plugged in through [`UserSource`].

pub mod error;
pub mod filter;
pub mod loader;
pub mod source;
pub mod user;
pub mod view;

pub use error::{FetchError, Result};
pub use filter::filter;
pub use loader::{LoadState, Loader};
pub use source::UserSource;
pub use user::{Company, Directory, UserRecord};
pub use view::{Summary, ViewMode};
