//! Error types for `park-core`.

use thiserror::Error;

/// Shown when a failure carries no usable text of its own.
pub const GENERIC_FETCH_MESSAGE: &str = "An error occurred while fetching users";

/// Why the directory fetch failed.
///
/// The variants only matter at the point of classification. Downstream the
/// loader collapses all of them into a single failed state carrying
/// [`FetchError::user_message`].
#[derive(Debug, Error)]
pub enum FetchError {
  /// The request could not be sent or no response was received.
  #[error("transport error: {0}")]
  Transport(String),

  /// A response arrived with a non-success status code.
  #[error("Failed to fetch users (HTTP {status})")]
  Status { status: u16 },

  /// The body did not match the expected shape.
  #[error("malformed response: {0}")]
  Format(String),
}

impl FetchError {
  /// The most specific human-readable text for this failure.
  pub fn user_message(&self) -> String {
    let detail = match self {
      Self::Transport(detail) | Self::Format(detail) => detail.trim(),
      Self::Status { .. } => return self.to_string(),
    };
    if detail.is_empty() {
      GENERIC_FETCH_MESSAGE.to_string()
    } else {
      detail.to_string()
    }
  }
}

impl From<serde_json::Error> for FetchError {
  fn from(err: serde_json::Error) -> Self { Self::Format(err.to_string()) }
}

pub type Result<T, E = FetchError> = std::result::Result<T, E>;
