use yamaha::volume::format_db;
use yamaha::VolumeRaw;

use crate::input::EditField;
use super::store::{ AppState, ViewType };

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
  SetAddress(String),
  RequestStarted,
  VolumeConfirmed(VolumeRaw),
  RequestFailed(String),
  StartEditing(EditField),
  InputChar(char),
  InputBackspace,
  CancelEditing,
  FinishEditing,
  SetStatusMessage(String),
  Quit,
}

pub fn app_reducer(state: &mut AppState, action: AppAction) {
  match action {
    AppAction::SetAddress(address) => {
      log::debug!("SetAddress action received: {}", address);
      state.address = address;
    }
    AppAction::RequestStarted => {
      state.pending_requests += 1;
    }
    AppAction::VolumeConfirmed(volume) => {
      log::debug!("VolumeConfirmed action received: {}", volume.value());
      state.pending_requests = state.pending_requests.saturating_sub(1);
      state.volume = Some(volume);
      state.db_field = format_db(volume.db());
      state.percent_field = volume.percent().to_string();
      state.status_message = format!("Volume {}", volume.value());
      state.view = ViewType::Control;
    }
    AppAction::RequestFailed(message) => {
      log::debug!("RequestFailed action received: {}", message);
      state.pending_requests = state.pending_requests.saturating_sub(1);
      state.status_message = message;
      state.view = ViewType::Control;
    }
    AppAction::StartEditing(field) => {
      state.input = match field {
        EditField::Db => state.db_field.clone(),
        EditField::Percent => state.percent_field.clone(),
        EditField::Address => state.address.clone(),
      };
      state.editing = Some(field);
    }
    AppAction::InputChar(c) => {
      if state.editing.is_some() {
        state.input.push(c);
      }
    }
    AppAction::InputBackspace => {
      state.input.pop();
    }
    AppAction::CancelEditing | AppAction::FinishEditing => {
      state.editing = None;
      state.input.clear();
    }
    AppAction::SetStatusMessage(message) => {
      state.status_message = message;
    }
    AppAction::Quit => {
      state.exit = true;
    }
  }
}
