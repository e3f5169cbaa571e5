//! Mapping from `(LoadState, query)` to the one thing the renderer draws.

use crate::{
  filter::filter,
  loader::LoadState,
  user::{Directory, UserRecord},
};

/// Counts shown alongside a loaded directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
  /// Size of the whole directory.
  pub total:    usize,
  /// Size of the filtered view; `None` while the query is empty.
  pub filtered: Option<usize>,
}

/// The four mutually exclusive render states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode<'a> {
  /// Nothing to show yet.
  Loading,
  /// The fetch failed; no list is drawn.
  Error { message: &'a str },
  /// Loaded, but the query matched nothing.
  NoResults { summary: Summary },
  /// One card per matching record, in directory order.
  Results {
    users:   Vec<&'a UserRecord>,
    summary: Summary,
  },
}

impl<'a> ViewMode<'a> {
  /// Select the view for the current state and query.
  ///
  /// `Idle` renders as loading: it only exists between construction and the
  /// first `start()`.
  pub fn select(state: &'a LoadState, query: &str) -> Self {
    match state {
      LoadState::Idle | LoadState::Loading => Self::Loading,
      LoadState::Failed(message) => Self::Error {
        message: message.as_str(),
      },
      LoadState::Loaded(directory) => Self::for_directory(directory, query),
    }
  }

  fn for_directory(directory: &'a Directory, query: &str) -> Self {
    let users = filter(directory, query);
    let summary = Summary {
      total:    directory.len(),
      filtered: (!query.is_empty()).then_some(users.len()),
    };
    if users.is_empty() {
      Self::NoResults { summary }
    } else {
      Self::Results { users, summary }
    }
  }

  /// Records to draw as cards; empty outside [`ViewMode::Results`].
  pub fn users(&self) -> &[&'a UserRecord] {
    match self {
      Self::Results { users, .. } => users.as_slice(),
      _ => &[],
    }
  }

  pub fn summary(&self) -> Option<Summary> {
    match self {
      Self::NoResults { summary } | Self::Results { summary, .. } => Some(*summary),
      Self::Loading | Self::Error { .. } => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::user::fixture;

  #[test]
  fn idle_and_loading_show_loading() {
    assert_eq!(ViewMode::select(&LoadState::Idle, "x"), ViewMode::Loading);
    assert_eq!(ViewMode::select(&LoadState::Loading, ""), ViewMode::Loading);
  }

  #[test]
  fn failure_shows_error_and_no_cards() {
    let state = LoadState::Failed("Failed to fetch users (HTTP 500)".into());
    let view = ViewMode::select(&state, "");
    assert_eq!(
      view,
      ViewMode::Error {
        message: "Failed to fetch users (HTTP 500)",
      }
    );
    assert!(view.users().is_empty());
    assert_eq!(view.summary(), None);
  }

  #[test]
  fn unmatched_query_is_no_results() {
    let state = LoadState::Loaded(fixture());
    let view = ViewMode::select(&state, "zzz");
    assert_eq!(
      view,
      ViewMode::NoResults {
        summary: Summary {
          total:    2,
          filtered: Some(0),
        },
      }
    );
  }

  #[test]
  fn empty_query_lists_everything_without_filtered_count() {
    let state = LoadState::Loaded(fixture());
    let view = ViewMode::select(&state, "");
    assert_eq!(view.users().len(), 2);
    assert_eq!(
      view.summary(),
      Some(Summary {
        total:    2,
        filtered: None,
      })
    );
  }

  #[test]
  fn active_query_reports_filtered_count() {
    let state = LoadState::Loaded(fixture());
    let view = ViewMode::select(&state, "ant");
    let names: Vec<_> = view.users().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Ervin Howell"]);
    assert_eq!(view.summary().and_then(|s| s.filtered), Some(1));
  }

  #[test]
  fn empty_directory_is_no_results() {
    let state = LoadState::Loaded(Directory::default());
    assert!(matches!(
      ViewMode::select(&state, ""),
      ViewMode::NoResults { .. }
    ));
  }
}
