use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use log::{debug, info};

use crate::client::AmplifierClient;
use crate::config::{self, AmplifierAddress, ConfigError, ConfigStore, FileStore};
use crate::error::ClientError;
use crate::state::VolumeState;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::volume::{self, VolumeRaw};

/// Volume control for the configured amplifier.
///
/// Owns the amplifier address (persisted through a [`ConfigStore`]) and writes
/// every confirmed volume into a shared [`VolumeState`]. Failed calls leave the
/// state untouched. Clones share client, store, address and state, so calls
/// can be spawned onto separate tasks; whichever response lands last wins.
///
/// Steps build on the target of the latest set still awaiting its response,
/// so repeated steps accumulate instead of all starting from the last
/// confirmed value.
pub struct VolumeController<T = ReqwestTransport, S = FileStore> {
    client: Arc<AmplifierClient<T>>,
    store: Arc<S>,
    state: VolumeState,
    address: Arc<RwLock<AmplifierAddress>>,
    requested: Arc<Mutex<Option<VolumeRaw>>>,
}

impl<T, S> Clone for VolumeController<T, S> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            store: Arc::clone(&self.store),
            state: self.state.clone(),
            address: Arc::clone(&self.address),
            requested: Arc::clone(&self.requested),
        }
    }
}

impl<T: HttpTransport, S: ConfigStore> VolumeController<T, S> {
    /// Load the address from `store` once and wire everything together
    pub fn new(
        client: AmplifierClient<T>,
        store: S,
        state: VolumeState,
    ) -> Result<Self, ConfigError> {
        let address = config::load_address(&store)?;
        info!("Controlling amplifier at {}", address);

        Ok(Self {
            client: Arc::new(client),
            store: Arc::new(store),
            state,
            address: Arc::new(RwLock::new(address)),
            requested: Arc::new(Mutex::new(None)),
        })
    }

    pub fn state(&self) -> &VolumeState {
        &self.state
    }

    /// Last confirmed volume, if any
    pub fn volume(&self) -> Option<VolumeRaw> {
        self.state.get()
    }

    pub fn address(&self) -> AmplifierAddress {
        self.address
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Validate and persist a new address, then use it for later calls
    pub fn set_address(&self, input: &str) -> Result<AmplifierAddress, ConfigError> {
        let address = AmplifierAddress::parse(input)?;
        config::save_address(self.store.as_ref(), &address)?;

        *self
            .address
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = address.clone();

        info!("Amplifier address changed to {}", address);
        Ok(address)
    }

    /// Fetch the volume from the amplifier.
    ///
    /// A successful fetch replaces any pending step target.
    pub async fn refresh(&self) -> Result<VolumeRaw, ClientError> {
        let address = self.address();
        let volume = self.client.fetch_volume(address.as_str()).await?;
        *self.lock_requested() = None;
        Ok(self.confirm(volume))
    }

    /// Set the raw volume; out-of-range values are clamped
    pub async fn set_raw(&self, raw: i32) -> Result<VolumeRaw, ClientError> {
        let target = VolumeRaw::new(raw);
        *self.lock_requested() = Some(target);
        self.send(target).await
    }

    pub async fn set_db(&self, db: f64) -> Result<VolumeRaw, ClientError> {
        self.set_raw(volume::from_db(db)).await
    }

    pub async fn set_percent(&self, percent: i32) -> Result<VolumeRaw, ClientError> {
        self.set_raw(volume::from_percent(percent)).await
    }

    /// Step by `delta` raw units.
    ///
    /// The base is the pending target if a set is in flight, else the last
    /// confirmed volume, else [`VolumeRaw::FALLBACK`].
    pub async fn step(&self, delta: i32) -> Result<VolumeRaw, ClientError> {
        let target = {
            let mut requested = self.lock_requested();
            let base = requested
                .or_else(|| self.state.get())
                .unwrap_or(VolumeRaw::FALLBACK);
            let target = base.offset(delta);
            *requested = Some(target);
            target
        };
        self.send(target).await
    }

    /// Target of the latest set that has not been superseded by a fetch
    pub fn requested(&self) -> Option<VolumeRaw> {
        *self.lock_requested()
    }

    async fn send(&self, target: VolumeRaw) -> Result<VolumeRaw, ClientError> {
        let address = self.address();
        match self.client.set_volume(address.as_str(), target.value()).await {
            Ok(volume) => Ok(self.confirm(volume)),
            Err(e) => {
                let mut requested = self.lock_requested();
                if *requested == Some(target) {
                    *requested = None;
                }
                Err(e)
            }
        }
    }

    fn lock_requested(&self) -> MutexGuard<'_, Option<VolumeRaw>> {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn confirm(&self, volume: VolumeRaw) -> VolumeRaw {
        debug!("Amplifier confirmed volume {}", volume);
        self.state.set(volume);
        volume
    }
}
