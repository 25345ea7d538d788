use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{ self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers };
use ratatui::{ DefaultTerminal, Frame };
use tokio::sync::mpsc::UnboundedReceiver;
use yamaha::{ ConfigStore, HttpTransport };

use crate::state::reducers::AppAction;
use crate::state::store::{ Store, ViewType };
use crate::views::control::ControlView;
use crate::views::startup::StartupView;
use crate::views::{ Intent, View };
use crate::worker::{ Command, Worker };

const TICK: Duration = Duration::from_millis(100);

pub struct App<T, S> {
  store: Arc<Store>,
  worker: Worker<T, S>,
  actions: UnboundedReceiver<AppAction>,
  startup: StartupView,
  control: ControlView,
}

impl<T, S> App<T, S>
where
  T: HttpTransport + 'static,
  S: ConfigStore + 'static,
{
  pub fn new(worker: Worker<T, S>, actions: UnboundedReceiver<AppAction>) -> Self {
    let store = Arc::new(Store::new());
    store.dispatch(AppAction::SetAddress(worker.controller().address().to_string()));

    Self {
      store,
      worker,
      actions,
      startup: StartupView::new(),
      control: ControlView::new(),
    }
  }

  pub fn store(&self) -> &Store {
    &self.store
  }

  /// Kick off the initial fetch
  pub fn start(&self) {
    self.worker.submit(Command::Refresh);
  }

  pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
    self.start();

    while !self.store.with_state(|state| state.exit) {
      self.drain_actions();
      terminal.draw(|frame| self.draw(frame))?;
      self.handle_events()?;
    }
    Ok(())
  }

  /// Apply every result that has arrived from the worker
  pub fn drain_actions(&mut self) -> usize {
    let mut applied = 0;
    while let Ok(action) = self.actions.try_recv() {
      self.store.dispatch(action);
      applied += 1;
    }
    applied
  }

  fn draw(&mut self, frame: &mut Frame) {
    match self.store.with_state(|state| state.view) {
      ViewType::Startup => self.startup.render(frame, &self.store),
      ViewType::Control => self.control.render(frame, &self.store),
    }
  }

  fn handle_events(&mut self) -> io::Result<()> {
    if event::poll(TICK)? {
      if let Event::Key(key_event) = event::read()? {
        if key_event.kind == KeyEventKind::Press {
          self.handle_key(key_event);
        }
      }
    }
    Ok(())
  }

  pub fn handle_key(&mut self, key_event: KeyEvent) {
    if self.handle_shared_event(key_event) {
      return;
    }

    let intent = match self.store.with_state(|state| state.view) {
      ViewType::Startup => self.startup.handle_input(key_event, &self.store),
      ViewType::Control => self.control.handle_input(key_event, &self.store),
    };

    if let Some(intent) = intent {
      self.apply(intent);
    }
  }

  fn handle_shared_event(&mut self, key_event: KeyEvent) -> bool {
    let editing = self.store.with_state(|state| state.editing.is_some());

    match key_event.code {
      KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
        self.store.dispatch(AppAction::Quit);
        true
      }
      KeyCode::Char('q') if !editing => {
        self.store.dispatch(AppAction::Quit);
        true
      }
      _ => false,
    }
  }

  fn apply(&mut self, intent: Intent) {
    match intent {
      Intent::Submit(command) => {
        self.worker.submit(command);
      }
      Intent::ChangeAddress(input) => match self.worker.controller().set_address(&input) {
        Ok(address) => {
          self.store.dispatch(AppAction::SetAddress(address.to_string()));
          self.store.dispatch(AppAction::SetStatusMessage(format!("Address set to {}", address)));
          self.worker.submit(Command::Refresh);
        }
        Err(e) => {
          log::error!("Address change failed: {}", e);
          self.store.dispatch(AppAction::SetStatusMessage(e.to_string()));
        }
      },
    }
  }
}
