use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use yamaha::{ ConfigStore, HttpTransport, VolumeController };

use crate::state::reducers::AppAction;

/// Volume requests the panel can issue
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
  Refresh,
  SetRaw(i32),
  SetDb(f64),
  SetPercent(i32),
  Step(i32),
}

impl Command {
  pub fn name(&self) -> &'static str {
    match self {
      Command::Refresh => "Refresh",
      Command::SetRaw(_) => "Set volume",
      Command::SetDb(_) => "Set dB",
      Command::SetPercent(_) => "Set percent",
      Command::Step(_) => "Adjust volume",
    }
  }
}

/// Runs each command as its own task and reports back through `actions`.
///
/// Nothing is cancelled or ordered: results are dispatched in the order the
/// amplifier answers.
pub struct Worker<T, S> {
  controller: VolumeController<T, S>,
  runtime: Handle,
  actions: UnboundedSender<AppAction>,
}

impl<T, S> Worker<T, S>
where
  T: HttpTransport + 'static,
  S: ConfigStore + 'static,
{
  pub fn new(controller: VolumeController<T, S>, runtime: Handle, actions: UnboundedSender<AppAction>) -> Self {
    Self { controller, runtime, actions }
  }

  pub fn controller(&self) -> &VolumeController<T, S> {
    &self.controller
  }

  pub fn submit(&self, command: Command) -> JoinHandle<()> {
    log::debug!("Submitting {:?}", command);
    let _ = self.actions.send(AppAction::RequestStarted);

    let controller = self.controller.clone();
    let actions = self.actions.clone();

    self.runtime.spawn(async move {
      let result = match command {
        Command::Refresh => controller.refresh().await,
        Command::SetRaw(raw) => controller.set_raw(raw).await,
        Command::SetDb(db) => controller.set_db(db).await,
        Command::SetPercent(percent) => controller.set_percent(percent).await,
        Command::Step(delta) => controller.step(delta).await,
      };

      let action = match result {
        Ok(volume) => AppAction::VolumeConfirmed(volume),
        Err(e) => {
          log::error!("{} failed: {}", command.name(), e);
          AppAction::RequestFailed(format!("{} failed: {}", command.name(), e))
        }
      };

      if actions.send(action).is_err() {
        log::debug!("Panel closed before {} finished", command.name());
      }
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use yamaha::config::mock::MockConfigStoreBuilder;
  use yamaha::{ AmplifierClient, ClientError, HttpResponse, VolumeRaw, VolumeState };
  use tokio::sync::mpsc;

  struct FixedAmp {
    status: Option<&'static str>,
  }

  impl HttpTransport for FixedAmp {
    async fn get(&self, url: &str) -> Result<HttpResponse, ClientError> {
      match self.status {
        Some(body) if url.ends_with("getStatus") => Ok(HttpResponse::new(200, body)),
        Some(_) => Ok(HttpResponse::new(200, "")),
        None => Err(ClientError::Network("connection refused".to_string())),
      }
    }
  }

  fn worker(status: Option<&'static str>) -> (Worker<FixedAmp, yamaha::config::mock::MockConfigStore>, mpsc::UnboundedReceiver<AppAction>) {
    let controller = VolumeController::new(
      AmplifierClient::with_transport(FixedAmp { status }),
      MockConfigStoreBuilder::new().address("10.0.0.3").build(),
      VolumeState::new(),
    )
    .unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    (Worker::new(controller, Handle::current(), tx), rx)
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn test_refresh_reports_volume() {
    let (worker, mut rx) = worker(Some(r#"{"volume":120}"#));

    worker.submit(Command::Refresh).await.unwrap();

    assert_eq!(rx.recv().await, Some(AppAction::RequestStarted));
    assert_eq!(rx.recv().await, Some(AppAction::VolumeConfirmed(VolumeRaw::new(120))));
    assert_eq!(worker.controller().volume(), Some(VolumeRaw::new(120)));
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn test_set_commands_report_clamped_volume() {
    let (worker, mut rx) = worker(Some("{}"));

    worker.submit(Command::SetRaw(400)).await.unwrap();
    worker.submit(Command::SetDb(-30.5)).await.unwrap();
    worker.submit(Command::SetPercent(0)).await.unwrap();

    let mut confirmed = Vec::new();
    while let Ok(action) = rx.try_recv() {
      if let AppAction::VolumeConfirmed(volume) = action {
        confirmed.push(volume.value());
      }
    }
    assert_eq!(confirmed, vec![161, 100, 0]);
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn test_step_from_confirmed_volume() {
    let (worker, mut rx) = worker(Some(r#"{"volume":10}"#));

    worker.submit(Command::Refresh).await.unwrap();
    worker.submit(Command::Step(-5)).await.unwrap();

    let last = std::iter::from_fn(|| rx.try_recv().ok()).last();
    assert_eq!(last, Some(AppAction::VolumeConfirmed(VolumeRaw::new(5))));
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn test_failure_is_reported_not_fatal() {
    let (worker, mut rx) = worker(None);
    worker.controller().state().set(VolumeRaw::new(77));

    worker.submit(Command::SetRaw(10)).await.unwrap();

    assert_eq!(rx.recv().await, Some(AppAction::RequestStarted));
    match rx.recv().await {
      Some(AppAction::RequestFailed(message)) => {
        assert!(message.starts_with("Set volume failed: Network communication error"));
      }
      other => panic!("unexpected action {:?}", other),
    }
    assert_eq!(worker.controller().volume(), Some(VolumeRaw::new(77)));
  }
}
