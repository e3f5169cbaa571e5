//! The one-shot directory fetch lifecycle.
//!
//! ```text
//! Idle ──start()──▶ Loading ──settle──▶ Loaded(Directory)
//!                           └─────────▶ Failed(message)
//! ```
//!
//! `start()` flips the state to `Loading` synchronously and spawns exactly one
//! fetch task. The outcome comes back over a one-shot channel and is applied
//! by [`Loader::try_settle`] or [`Loader::settle`]. Terminal states are never
//! left. Dropping the loader aborts the task and drops the receiver, so a late
//! response has nowhere to land.

use std::sync::Arc;

use tokio::{
  sync::oneshot::{self, error::TryRecvError},
  task::JoinHandle,
};
use tracing::{debug, warn};

use crate::{
  error::{FetchError, GENERIC_FETCH_MESSAGE},
  source::UserSource,
  user::Directory,
};

// ─── State ───────────────────────────────────────────────────────────────────

/// Where the fetch lifecycle currently stands. Exactly one variant holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
  /// Created, `start()` not yet called.
  #[default]
  Idle,
  /// The request is in flight.
  Loading,
  /// The fetch succeeded.
  Loaded(Directory),
  /// The fetch failed; carries a human-readable message.
  Failed(String),
}

impl LoadState {
  /// `true` for `Loaded` and `Failed`.
  pub fn is_terminal(&self) -> bool { matches!(self, Self::Loaded(_) | Self::Failed(_)) }

  pub fn directory(&self) -> Option<&Directory> {
    match self {
      Self::Loaded(directory) => Some(directory),
      _ => None,
    }
  }
}

// ─── Loader ──────────────────────────────────────────────────────────────────

type Outcome = Result<Directory, FetchError>;

/// The in-flight half of a fetch: the task and the slot its result lands in.
struct Pending {
  outcome: oneshot::Receiver<Outcome>,
  task:    JoinHandle<()>,
}

/// Owns the [`LoadState`] and performs the fetch at most once.
pub struct Loader<S> {
  source:  Arc<S>,
  state:   LoadState,
  pending: Option<Pending>,
}

impl<S: UserSource> Loader<S> {
  pub fn new(source: S) -> Self { Self::with_shared(Arc::new(source)) }

  pub fn with_shared(source: Arc<S>) -> Self {
    Self {
      source,
      state: LoadState::Idle,
      pending: None,
    }
  }

  pub fn state(&self) -> &LoadState { &self.state }

  /// Begin the fetch. Returns `false` without doing anything unless the
  /// loader is still `Idle`.
  ///
  /// Must be called from within a tokio runtime.
  pub fn start(&mut self) -> bool {
    if self.state != LoadState::Idle {
      debug!(state = ?self.state, "start ignored; fetch already issued");
      return false;
    }

    let (tx, rx) = oneshot::channel();
    let source = Arc::clone(&self.source);
    let task = tokio::spawn(async move {
      let outcome = source.fetch_users().await;
      if tx.send(outcome).is_err() {
        debug!("loader gone; discarding fetch outcome");
      }
    });

    self.state = LoadState::Loading;
    self.pending = Some(Pending { outcome: rx, task });
    debug!("directory fetch started");
    true
  }

  /// Apply the outcome if it has arrived. Returns `true` if the state
  /// changed.
  pub fn try_settle(&mut self) -> bool {
    let Some(pending) = self.pending.as_mut() else {
      return false;
    };
    let outcome = match pending.outcome.try_recv() {
      Ok(outcome) => Some(outcome),
      Err(TryRecvError::Empty) => return false,
      Err(TryRecvError::Closed) => None,
    };
    self.finish(outcome);
    true
  }

  /// Wait for the outstanding fetch, apply it, and return the final state.
  /// Returns immediately when nothing is pending.
  pub async fn settle(&mut self) -> &LoadState {
    if let Some(pending) = self.pending.as_mut() {
      let outcome = (&mut pending.outcome).await.ok();
      self.finish(outcome);
    }
    &self.state
  }

  /// Tear down a pending fetch. The state is left as it is and any later
  /// response is dropped.
  pub fn cancel(&mut self) {
    if let Some(pending) = self.pending.take() {
      pending.task.abort();
      debug!("directory fetch cancelled");
    }
  }

  /// `None` means the task ended without reporting (panicked or aborted).
  fn finish(&mut self, outcome: Option<Outcome>) {
    self.pending = None;
    self.state = match outcome {
      Some(Ok(directory)) => {
        debug!(count = directory.len(), "directory loaded");
        LoadState::Loaded(directory)
      }
      Some(Err(err)) => {
        warn!(error = %err, "directory fetch failed");
        LoadState::Failed(err.user_message())
      }
      None => {
        warn!("directory fetch ended without an outcome");
        LoadState::Failed(GENERIC_FETCH_MESSAGE.to_string())
      }
    };
  }
}

impl<S> Drop for Loader<S> {
  fn drop(&mut self) {
    if let Some(pending) = self.pending.take() {
      pending.task.abort();
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
