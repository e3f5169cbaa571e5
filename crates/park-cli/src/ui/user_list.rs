//! User list pane — left panel, one row per card.

use park_core::UserRecord;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState},
};

/// Render `users` (already filtered) into `area` with the cursor on `cursor`.
pub fn draw(f: &mut Frame, area: Rect, users: &[&UserRecord], cursor: usize) {
  let block = Block::default()
    .title(" Users ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let items: Vec<ListItem> = users
    .iter()
    .map(|user| {
      ListItem::new(Line::from(vec![
        Span::styled(user.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  @{}", user.username), Style::default().fg(Color::DarkGray)),
      ]))
    })
    .collect();

  // Scrollable list with cursor tracking.
  let mut state = ListState::default();
  state.select((!users.is_empty()).then(|| cursor.min(users.len() - 1)));

  f.render_stateful_widget(
    List::new(items)
      .block(block)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("▌"),
    area,
    &mut state,
  );
}
