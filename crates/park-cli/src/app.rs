//! Application state and key dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use park_core::{Loader, UserRecord, UserSource, ViewMode};

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<S> {
  /// Owns the fetch lifecycle and the directory once it arrives.
  pub loader: Loader<S>,

  /// Current search text. Never normalised; the filter lower-cases it.
  pub query: String,

  /// Whether keystrokes are going into the search bar.
  pub search_active: bool,

  /// Cursor position within the *filtered* user list.
  pub list_cursor: usize,
}

impl<S: UserSource> App<S> {
  pub fn new(source: S) -> Self {
    Self {
      loader:        Loader::new(source),
      query:         String::new(),
      search_active: false,
      list_cursor:   0,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Kick off the directory fetch. Safe to call repeatedly.
  pub fn start(&mut self) -> bool { self.loader.start() }

  /// Apply a finished fetch, if any. Returns `true` when the state changed.
  pub fn tick(&mut self) -> bool {
    let changed = self.loader.try_settle();
    if changed {
      self.list_cursor = 0;
    }
    changed
  }

  // ── Derived view ──────────────────────────────────────────────────────────

  /// What to draw for the current state and query.
  pub fn view(&self) -> ViewMode<'_> { ViewMode::select(self.loader.state(), &self.query) }

  /// The user under the list cursor in the filtered view, if any.
  pub fn selected_user(&self) -> Option<&UserRecord> {
    self.view().users().get(self.list_cursor).copied()
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    if self.search_active {
      self.handle_search_key(key);
      return true;
    }
    self.handle_browse_key(key)
  }

  fn handle_search_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.search_active = false;
        self.clear_query();
      }
      KeyCode::Enter => self.search_active = false,
      KeyCode::Backspace => {
        self.query.pop();
        self.list_cursor = 0;
      }
      KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => self.clear_query(),
      KeyCode::Char(c) => {
        self.query.push(c);
        self.list_cursor = 0;
      }
      _ => {}
    }
  }

  fn handle_browse_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.view().users().len();
        if self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      // Search keeps the existing query so it can be refined.
      KeyCode::Char('/') => self.search_active = true,
      KeyCode::Esc => self.clear_query(),

      _ => {}
    }
    true
  }

  fn clear_query(&mut self) {
    self.query.clear();
    self.list_cursor = 0;
  }
}

// ─── Test support ─────────────────────────────────────────────────────────────


#[cfg(test)]
mod tests {
  use park_core::LoadState;

  use super::{testing::StaticSource, *};

  fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  fn ctrl(c: char) -> KeyEvent { KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL) }

  async fn loaded_app() -> App<StaticSource> {
    let mut app = App::new(StaticSource::Users);
    app.start();
    app.loader.settle().await;
    app
  }

  fn type_str(app: &mut App<StaticSource>, text: &str) {
    for c in text.chars() {
      assert!(app.handle_key(key(KeyCode::Char(c))));
    }
  }

  #[tokio::test]
  async fn view_is_loading_until_settled() {
    let mut app = App::new(StaticSource::Users);
    assert_eq!(app.view(), ViewMode::Loading);
    app.start();
    assert_eq!(app.view(), ViewMode::Loading);
    app.loader.settle().await;
    assert_eq!(app.view().users().len(), 3);
  }

  #[tokio::test]
  async fn tick_applies_outcome_eventually() {
    let mut app = App::new(StaticSource::Users);
    app.start();
    let mut settled = false;
    for _ in 0..10 {
      tokio::task::yield_now().await;
      if app.tick() {
        settled = true;
        break;
      }
    }
    assert!(settled);
    assert!(matches!(app.loader.state(), LoadState::Loaded(_)));
  }

  #[tokio::test]
  async fn typing_filters_and_resets_cursor() {
    let mut app = loaded_app().await;
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.list_cursor, 1);

    app.handle_key(key(KeyCode::Char('/')));
    assert!(app.search_active);
    type_str(&mut app, "ANT");
    assert_eq!(app.query, "ANT");
    assert_eq!(app.list_cursor, 0);
    assert_eq!(app.selected_user().map(|u| u.username.as_str()), Some("Antonette"));
  }

  #[tokio::test]
  async fn backspace_widens_the_filter() {
    let mut app = loaded_app().await;
    app.handle_key(key(KeyCode::Char('/')));
    type_str(&mut app, "samx");
    assert!(matches!(app.view(), ViewMode::NoResults { .. }));
    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.view().users().len(), 1);
  }

  #[tokio::test]
  async fn escape_in_search_clears_and_leaves() {
    let mut app = loaded_app().await;
    app.handle_key(key(KeyCode::Char('/')));
    type_str(&mut app, "bret");
    app.handle_key(key(KeyCode::Esc));
    assert!(!app.search_active);
    assert!(app.query.is_empty());
  }

  #[tokio::test]
  async fn enter_keeps_query_and_q_is_text_while_searching() {
    let mut app = loaded_app().await;
    app.handle_key(key(KeyCode::Char('/')));
    type_str(&mut app, "q");
    app.handle_key(key(KeyCode::Enter));
    assert!(!app.search_active);
    assert_eq!(app.query, "q");

    // Browsing again: `q` quits, Esc clears the kept query.
    app.handle_key(key(KeyCode::Esc));
    assert!(app.query.is_empty());
    assert!(!app.handle_key(key(KeyCode::Char('q'))));
  }

  #[tokio::test]
  async fn ctrl_u_clears_query() {
    let mut app = loaded_app().await;
    app.handle_key(key(KeyCode::Char('/')));
    type_str(&mut app, "ervin");
    app.handle_key(ctrl('u'));
    assert!(app.query.is_empty());
    assert!(app.search_active);
  }

  #[tokio::test]
  async fn ctrl_c_quits_from_search() {
    let mut app = loaded_app().await;
    app.handle_key(key(KeyCode::Char('/')));
    assert!(!app.handle_key(ctrl('c')));
  }

  #[tokio::test]
  async fn cursor_stays_within_filtered_list() {
    let mut app = loaded_app().await;
    for _ in 0..10 {
      app.handle_key(key(KeyCode::Char('j')));
    }
    assert_eq!(app.list_cursor, 2);
    for _ in 0..10 {
      app.handle_key(key(KeyCode::Char('k')));
    }
    assert_eq!(app.list_cursor, 0);
  }

  #[tokio::test]
  async fn failed_fetch_selects_error_view() {
    let mut app = App::new(StaticSource::Status(500));
    app.start();
    app.loader.settle().await;
    assert!(matches!(app.view(), ViewMode::Error { .. }));
    assert!(app.selected_user().is_none());
    // Navigation on an error view is inert.
    assert!(app.handle_key(key(KeyCode::Down)));
    assert_eq!(app.list_cursor, 0);
  }
}
