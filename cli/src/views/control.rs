use crossterm::event::{ KeyCode, KeyEvent };
use ratatui::layout::{ Alignment, Constraint, Direction, Layout };
use ratatui::style::{ Color, Modifier, Style };
use ratatui::text::{ Line, Span };
use ratatui::widgets::{ Block, Gauge, Paragraph };
use ratatui::Frame;
use yamaha::volume::MAX_RAW;

use crate::input::{ self, EditField };
use crate::state::reducers::AppAction;
use crate::state::store::{ AppState, Store };
use crate::widgets::text_field::text_field;
use crate::worker::Command;

use super::{ Intent, View };

const SMALL_STEP: i32 = 1;
const LARGE_STEP: i32 = 5;
const UNKNOWN_VOLUME: &str = "Volume unknown, press r to refresh";
const HELP: &str = "←/→ ±1  ↓/↑ ±5  d dB  p %  i IP  r refresh  q quit";

pub struct ControlView;

impl ControlView {
  pub fn new() -> Self {
    Self
  }

  fn field_value<'a>(state: &'a AppState, field: EditField, idle: &'a str) -> &'a str {
    if state.editing == Some(field) {
      &state.input
    } else {
      idle
    }
  }

  fn readout(state: &AppState) -> String {
    match state.volume {
      Some(volume) => volume.to_string(),
      None => "-- dB (--%)".to_string(),
    }
  }

  fn handle_editing(field: EditField, key_event: KeyEvent, store: &Store) -> Option<Intent> {
    match key_event.code {
      KeyCode::Esc => {
        store.dispatch(AppAction::CancelEditing);
        None
      }
      KeyCode::Backspace => {
        store.dispatch(AppAction::InputBackspace);
        None
      }
      KeyCode::Char(c) => {
        store.dispatch(AppAction::InputChar(c));
        None
      }
      KeyCode::Enter => {
        let text = store.with_state(|state| state.input.clone());
        store.dispatch(AppAction::FinishEditing);
        Self::commit(field, &text, store)
      }
      _ => None,
    }
  }

  fn commit(field: EditField, text: &str, store: &Store) -> Option<Intent> {
    let intent = match field {
      EditField::Db => input::parse_db(text).map(|db| Intent::Submit(Command::SetDb(db))),
      EditField::Percent => {
        input::parse_percent(text).map(|percent| Intent::Submit(Command::SetPercent(percent)))
      }
      EditField::Address => Some(Intent::ChangeAddress(text.to_string())),
    };

    if intent.is_none() {
      store.dispatch(AppAction::SetStatusMessage(format!(
        "Invalid {} value: {:?}",
        field.label(),
        text
      )));
    }
    intent
  }
}

impl View for ControlView {
  fn render(&mut self, frame: &mut Frame, store: &Store) {
    store.with_state(|state| {
      let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
          Constraint::Length(1),
          Constraint::Length(1),
          Constraint::Length(3),
          Constraint::Length(1),
          Constraint::Length(1),
          Constraint::Length(1),
          Constraint::Min(0),
          Constraint::Length(1),
        ])
        .split(frame.area());

      let title = Paragraph::new("Yamaha V6A Volume")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
      frame.render_widget(title, chunks[0]);

      let address = text_field(
        EditField::Address.label(),
        Self::field_value(state, EditField::Address, &state.address),
        state.editing == Some(EditField::Address),
      );
      frame.render_widget(Paragraph::new(address), chunks[1]);

      let raw = state.volume.map(|volume| volume.value()).unwrap_or(0);
      let gauge = Gauge::default()
        .block(Block::bordered().title("Volume"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(raw as f64 / MAX_RAW as f64)
        .label(format!("{}/{}", raw, MAX_RAW));
      frame.render_widget(gauge, chunks[2]);

      let readout = Paragraph::new(Self::readout(state)).alignment(Alignment::Center);
      frame.render_widget(readout, chunks[3]);

      let fields = Line::from(
        [
          text_field(
            EditField::Db.label(),
            Self::field_value(state, EditField::Db, &state.db_field),
            state.editing == Some(EditField::Db),
          )
          .spans,
          vec![Span::raw("   ")],
          text_field(
            EditField::Percent.label(),
            Self::field_value(state, EditField::Percent, &state.percent_field),
            state.editing == Some(EditField::Percent),
          )
          .spans,
        ]
        .concat(),
      );
      frame.render_widget(Paragraph::new(fields).alignment(Alignment::Center), chunks[4]);

      let status = if state.pending_requests > 0 {
        format!("{} (working...)", state.status_message)
      } else {
        state.status_message.clone()
      };
      frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
        chunks[5],
      );

      frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        chunks[7],
      );
    });
  }

  fn handle_input(&mut self, key_event: KeyEvent, store: &Store) -> Option<Intent> {
    if let Some(field) = store.with_state(|state| state.editing) {
      return Self::handle_editing(field, key_event, store);
    }

    let volume_known = store.with_state(|state| state.volume.is_some());

    match key_event.code {
      KeyCode::Left | KeyCode::Right | KeyCode::Down | KeyCode::Up if !volume_known => {
        store.dispatch(AppAction::SetStatusMessage(UNKNOWN_VOLUME.to_string()));
        None
      }
      KeyCode::Left => Some(Intent::Submit(Command::Step(-SMALL_STEP))),
      KeyCode::Right => Some(Intent::Submit(Command::Step(SMALL_STEP))),
      KeyCode::Down => Some(Intent::Submit(Command::Step(-LARGE_STEP))),
      KeyCode::Up => Some(Intent::Submit(Command::Step(LARGE_STEP))),
      KeyCode::Char('r') => Some(Intent::Submit(Command::Refresh)),
      KeyCode::Char('d') => {
        store.dispatch(AppAction::StartEditing(EditField::Db));
        None
      }
      KeyCode::Char('p') => {
        store.dispatch(AppAction::StartEditing(EditField::Percent));
        None
      }
      KeyCode::Char('i') => {
        store.dispatch(AppAction::StartEditing(EditField::Address));
        None
      }
      _ => None,
    }
  }
}
