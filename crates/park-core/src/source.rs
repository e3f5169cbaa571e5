//! The `UserSource` trait.
//!
//! The loader depends on this abstraction, not on any transport. `park-cli`
//! implements it over HTTP; tests implement it in-process.

use std::future::Future;

use crate::{error::FetchError, user::Directory};

/// Something that can produce the directory with a single request.
///
/// The returned future must be `Send` because the loader runs it on a
/// spawned tokio task.
pub trait UserSource: Send + Sync + 'static {
  /// Fetch the whole directory once. Implementations classify failures into
  /// [`FetchError`] variants and must not retry.
  fn fetch_users(&self) -> impl Future<Output = Result<Directory, FetchError>> + Send + '_;
}
