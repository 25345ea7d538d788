use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

use crate::volume::VolumeRaw;

/// Holds the one authoritative volume value.
///
/// `None` until the first successful call. Writes are plain overwrites, so the
/// last writer wins. Clones share the same value.
#[derive(Debug, Clone)]
pub struct VolumeState {
    sender: Arc<watch::Sender<Option<VolumeRaw>>>,
}

impl VolumeState {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Start from a known value
    pub fn with_volume(volume: VolumeRaw) -> Self {
        let state = Self::new();
        state.set(volume);
        state
    }

    /// Poll the current value
    pub fn get(&self) -> Option<VolumeRaw> {
        *self.sender.borrow()
    }

    /// Overwrite the current value and wake subscribers
    pub fn set(&self, volume: VolumeRaw) {
        debug!("Volume state updated to {}", volume.value());
        self.sender.send_replace(Some(volume));
    }

    /// Receive a notification on every write
    pub fn subscribe(&self) -> watch::Receiver<Option<VolumeRaw>> {
        self.sender.subscribe()
    }
}

impl Default for VolumeState {
    fn default() -> Self {
        Self::new()
    }
}
