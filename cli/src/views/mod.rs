pub mod control;
pub mod startup;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::state::store::Store;
use crate::worker::Command;

/// Work a view asks the app to carry out on its behalf
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
  Submit(Command),
  ChangeAddress(String),
}

pub trait View {
  fn render(&mut self, frame: &mut Frame, store: &Store);
  fn handle_input(&mut self, key_event: KeyEvent, store: &Store) -> Option<Intent>;
}
