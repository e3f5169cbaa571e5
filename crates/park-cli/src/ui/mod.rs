//! TUI rendering — orchestrates all panes.

pub mod user_card;
pub mod user_list;

use chrono::Local;
use park_core::{Summary, UserSource, ViewMode};
use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub const TITLE: &str = "PROFILE PARK";
const SUBTITLE: &str = "Browse and search through our user directory";
const PLACEHOLDER: &str = "Search users by name or username...";

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<S: UserSource>(f: &mut Frame, app: &App<S>) {
  let area = f.area();
  let view = app.view();

  // Vertical stack: header, search bar, stats, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(3), // search bar
      Constraint::Length(1), // stats
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_search(f, rows[1], app);
  if let Some(summary) = view.summary() {
    draw_stats(f, rows[2], summary);
  }
  draw_body(f, rows[3], app, &view);
  draw_status(f, rows[4], app, &view);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = vec![
    Span::styled(
      format!(" {TITLE} "),
      Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(format!(" {SUBTITLE}"), Style::default().fg(Color::Gray)),
  ];
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::Gray));

  // Simple left-right header: pad the middle.
  let left_width: usize = left.iter().map(|s| s.content.chars().count()).sum();
  let right_width = right.content.len();
  let pad = (area.width as usize)
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let mut spans = left;
  spans.push(Span::raw(" ".repeat(pad)));
  spans.push(right);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

// ─── Search bar ───────────────────────────────────────────────────────────────

fn draw_search<S: UserSource>(f: &mut Frame, area: Rect, app: &App<S>) {
  let border = if app.search_active {
    Style::default().fg(Color::Blue)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  let block = Block::default()
    .title(" Search ")
    .borders(Borders::ALL)
    .border_style(border);

  let line = if app.query.is_empty() && !app.search_active {
    Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
  } else {
    let cursor = if app.search_active { "_" } else { "" };
    Line::from(vec![
      Span::styled("/", Style::default().fg(Color::DarkGray)),
      Span::styled(
        format!("{}{cursor}", app.query),
        Style::default().fg(Color::Yellow),
      ),
    ])
  };

  f.render_widget(Paragraph::new(line).block(block), area);
}

// ─── Stats ────────────────────────────────────────────────────────────────────

fn draw_stats(f: &mut Frame, area: Rect, summary: Summary) {
  let chip = Style::default().fg(Color::Black).bg(Color::Gray);
  let mut spans = vec![Span::styled(format!(" Total Users: {} ", summary.total), chip)];
  if let Some(filtered) = summary.filtered {
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
      format!(" Filtered: {filtered} "),
      Style::default().fg(Color::Black).bg(Color::LightBlue),
    ));
  }
  f.render_widget(
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
    area,
  );
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body<S: UserSource>(f: &mut Frame, area: Rect, app: &App<S>, view: &ViewMode<'_>) {
  match view {
    ViewMode::Loading => draw_loading(f, area),
    ViewMode::Error { message } => draw_error(f, area, message),
    ViewMode::NoResults { .. } => draw_no_results(f, area),
    ViewMode::Results { users, .. } => {
      // Split into left list pane (40%) and right card pane (60%).
      let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

      user_list::draw(f, cols[0], users, app.list_cursor);
      match app.selected_user() {
        Some(user) => user_card::draw(f, cols[1], user),
        None => draw_placeholder(f, cols[1], "Select a user."),
      }
    }
  }
}

fn draw_loading(f: &mut Frame, area: Rect) {
  let para = Paragraph::new(Line::from(Span::styled(
    "Loading users…",
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  )))
  .alignment(Alignment::Center)
  .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
  f.render_widget(para, area);
}

fn draw_error(f: &mut Frame, area: Rect, message: &str) {
  let block = Block::default()
    .title(" Error ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let lines = vec![
    Line::from(Span::styled(
      "Oops! Something went wrong",
      Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD),
    )),
    Line::from(""),
    Line::from(message.to_string()),
  ];
  f.render_widget(
    Paragraph::new(lines)
      .alignment(Alignment::Center)
      .wrap(Wrap { trim: true })
      .block(block),
    area,
  );
}

fn draw_no_results(f: &mut Frame, area: Rect) {
  let lines = vec![
    Line::from(Span::styled(
      "No users found",
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled(
      "Try adjusting your search query",
      Style::default().fg(Color::DarkGray),
    )),
  ];
  f.render_widget(
    Paragraph::new(lines)
      .alignment(Alignment::Center)
      .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray))),
    area,
  );
}

fn draw_placeholder(f: &mut Frame, area: Rect, hint: &str) {
  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  f.render_widget(
    Paragraph::new(Span::styled(hint.to_string(), Style::default().fg(Color::DarkGray))).block(block),
    area,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<S: UserSource>(f: &mut Frame, area: Rect, app: &App<S>, view: &ViewMode<'_>) {
  let (mode_label, hints) = match view {
    _ if app.search_active => ("SEARCH", "Type to filter  Ctrl-U clear  Esc cancel  Enter done"),
    ViewMode::Loading => ("LOADING", "q quit"),
    ViewMode::Error { .. } => ("ERROR", "q quit"),
    ViewMode::NoResults { .. } | ViewMode::Results { .. } => (
      "BROWSE",
      "↑↓/jk navigate  / search  Esc clear  q quit",
    ),
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {hints}"), Style::default().fg(Color::DarkGray));

  f.render_widget(
    Paragraph::new(Line::from(vec![mode_span, hint_span])).style(Style::default().bg(Color::Black)),
    area,
  );
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
  use ratatui::{Terminal, backend::TestBackend};

  use super::*;
  use crate::app::testing::StaticSource;

  fn render(app: &App<StaticSource>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
      for x in 0..buffer.area.width {
        text.push_str(buffer[(x, y)].symbol());
      }
      text.push('\n');
    }
    text
  }

  async fn settled(source: StaticSource) -> App<StaticSource> {
    let mut app = App::new(source);
    app.start();
    app.loader.settle().await;
    app
  }

  #[tokio::test]
  async fn loading_indicator_before_settle() {
    let mut app = App::new(StaticSource::Users);
    app.start();
    let screen = render(&app);
    assert!(screen.contains(TITLE));
    assert!(screen.contains("Loading users"));
    assert!(!screen.contains("Total Users"));
  }

  #[tokio::test]
  async fn cards_and_total_when_loaded() {
    let app = settled(StaticSource::Users).await;
    let screen = render(&app);
    assert!(screen.contains("Total Users: 3"));
    assert!(!screen.contains("Filtered:"));
    assert!(screen.contains("Leanne Graham"));
    assert!(screen.contains("Clementine Bauch"));
    assert!(screen.contains("Sincere@april.biz"));
  }

  #[tokio::test]
  async fn filtered_count_with_active_query() {
    let mut app = settled(StaticSource::Users).await;
    app.handle_key(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE));
    for c in "bret".chars() {
      app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    let screen = render(&app);
    assert!(screen.contains("Filtered: 1"));
    assert!(screen.contains("Leanne Graham"));
    assert!(!screen.contains("Ervin Howell"));
  }

  #[tokio::test]
  async fn no_results_message() {
    let mut app = settled(StaticSource::Users).await;
    app.query = "zzz".into();
    let screen = render(&app);
    assert!(screen.contains("No users found"));
    assert!(screen.contains("Filtered: 0"));
  }

  #[tokio::test]
  async fn error_panel_without_cards() {
    let app = settled(StaticSource::Status(500)).await;
    let screen = render(&app);
    assert!(screen.contains("Failed to fetch users (HTTP 500)"));
    assert!(!screen.contains("Total Users"));
    assert!(!screen.contains("Leanne Graham"));
  }
}
