//! User card pane — right panel, the record under the cursor.

use park_core::UserRecord;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the card for `user` into `area`.
pub fn draw(f: &mut Frame, area: Rect, user: &UserRecord) {
  let block = Block::default()
    .title(format!(" {} ", user.name))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut lines = vec![
    Line::from(Span::styled(
      format!("@{}", user.username),
      Style::default().fg(Color::Cyan),
    )),
    Line::from(""),
  ];
  lines.push(row("email", &user.email, &user.mailto_href()));
  lines.push(row("phone", &user.phone, &user.tel_href()));
  lines.push(row("website", &user.website, &user.website_href()));
  lines.push(Line::from(""));
  lines.push(Line::from(vec![
    Span::styled(
      format!("{:<10}", "company"),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::raw(user.company.name.clone()),
  ]));

  f.render_widget(
    Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
    area,
  );
}

/// `label  value  <link>`
fn row(label: &str, value: &str, href: &str) -> Line<'static> {
  Line::from(vec![
    Span::styled(
      format!("{label:<10}"),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::raw(value.to_string()),
    Span::styled(format!("  {href}"), Style::default().fg(Color::DarkGray)),
  ])
}
