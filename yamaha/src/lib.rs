//! Volume control for Yamaha amplifiers speaking the Yamaha Extended Control
//! HTTP API.
//!
//! [`volume`] converts between the amplifier's raw 0..=161 scale, decibels and
//! percent. [`AmplifierClient`] reads and writes the raw value over HTTP.
//! [`VolumeController`] ties a client to a persisted address and a shared
//! [`VolumeState`].

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod transport;
pub mod volume;

// Re-export key types for easier access
pub use client::AmplifierClient;
pub use config::{AmplifierAddress, ConfigError, ConfigStore, FileStore, MemoryStore};
pub use controller::VolumeController;
pub use error::{ClientError, Result, YamahaError};
pub use state::VolumeState;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use volume::VolumeRaw;
