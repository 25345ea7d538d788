use std::env;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ Config, WriteLogger };
use tokio::sync::mpsc;
use yamaha::{ AmplifierClient, FileStore, VolumeController, VolumeState };

use yamaha_volume::worker::Worker;
use yamaha_volume::App;

const CONFIG_ENV: &str = "YAMAHA_VOLUME_CONFIG";
const CONFIG_FILE: &str = "yamaha-volume.toml";
const LOG_FILE: &str = "yamaha-volume.log";

fn main() -> Result<(), Box<dyn Error>> {
  init_logging();

  let runtime = tokio::runtime::Runtime::new()?;

  let controller = build_controller()?;

  let (tx, rx) = mpsc::unbounded_channel();
  let worker = Worker::new(controller, runtime.handle().clone(), tx);
  let mut app = App::new(worker, rx);

  let mut terminal = ratatui::init();
  let app_result = app.run(&mut terminal);
  ratatui::restore();

  log::info!("Exiting");
  Ok(app_result?)
}

fn build_controller() -> yamaha::Result<VolumeController> {
  let client = AmplifierClient::new()?;
  let store = FileStore::new(config_path());
  Ok(VolumeController::new(client, store, VolumeState::new())?)
}

fn config_path() -> PathBuf {
  env::var_os(CONFIG_ENV)
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

// The terminal belongs to ratatui, so logs go to a file
fn init_logging() {
  let level = if cfg!(debug_assertions) {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };

  if let Ok(file) = File::create(LOG_FILE) {
    let _ = WriteLogger::init(level, Config::default(), file);
  }
}
