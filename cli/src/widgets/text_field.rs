use ratatui::style::{ Color, Modifier, Style };
use ratatui::text::{ Line, Span };

/// Render `label: [value]`, with a cursor and highlight while editing
pub fn text_field<'a>(label: &'a str, value: &'a str, editing: bool) -> Line<'a> {
  let value_style = if editing {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
  } else {
    Style::default()
  };

  let mut spans = vec![
    Span::raw(format!("{}: [", label)),
    Span::styled(value, value_style),
  ];
  if editing {
    spans.push(Span::styled("▏", value_style));
  }
  spans.push(Span::raw("]"));

  Line::from(spans)
}
