use std::sync::{ Arc, Mutex };
use yamaha::VolumeRaw;

use crate::input::EditField;
use super::reducers::{ self, AppAction };

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewType {
  Startup,
  Control,
}

pub struct AppState {
  pub view: ViewType,
  pub address: String,
  pub volume: Option<VolumeRaw>,
  pub db_field: String,
  pub percent_field: String,
  pub editing: Option<EditField>,
  pub input: String,
  pub pending_requests: usize,
  pub status_message: String,
  pub exit: bool,
}

impl Default for AppState {
  fn default() -> Self {
    Self {
      view: ViewType::Startup,
      address: String::new(),
      volume: None,
      db_field: String::new(),
      percent_field: String::new(),
      editing: None,
      input: String::new(),
      pending_requests: 0,
      status_message: String::new(),
      exit: false,
    }
  }
}

pub struct Store {
  state: Arc<Mutex<AppState>>,
}

impl Store {
  pub fn new() -> Self {
    Self {
      state: Arc::new(Mutex::new(AppState::default())),
    }
  }

  pub fn dispatch(&self, action: AppAction) {
    let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    reducers::app_reducer(&mut state, action);
  }

  pub fn with_state<F, T>(&self, f: F) -> T
  where
    F: FnOnce(&AppState) -> T
  {
    let state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&state)
  }
}

impl Default for Store {
  fn default() -> Self {
    Self::new()
  }
}
