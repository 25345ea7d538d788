use crossterm::event::KeyEvent;
use ratatui::{ layout::Alignment, text::Text, widgets::Paragraph, Frame };

use crate::state::store::Store;
use crate::widgets::{ logo::logo, util };

use super::{ Intent, View };

/// Shown while the first fetch is in flight
pub struct StartupView;

impl StartupView {
  pub fn new() -> Self {
    Self
  }

  fn get_status_message(&self, store: &Store) -> String {
    store.with_state(|state| format!("connecting to {}...", state.address))
  }
}

impl View for StartupView {
  fn render(&mut self, frame: &mut Frame, store: &Store) {
    let logo = logo();
    let body = Text::from(self.get_status_message(store));

    let rows = util::centered_rows(frame.area(), &[5, 1, 1]);

    let logo_paragraph = Paragraph::new(logo).alignment(Alignment::Center);
    frame.render_widget(logo_paragraph, rows[0]);

    let body_paragraph = Paragraph::new(body).alignment(Alignment::Center);
    frame.render_widget(body_paragraph, rows[2]);
  }

  fn handle_input(&mut self, _key_event: KeyEvent, _store: &Store) -> Option<Intent> {
    None
  }
}
