use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::volume::{self, VolumeRaw};

/// Path prefix of the Yamaha Extended Control API for the main zone
pub const MAIN_ZONE_PATH: &str = "/YamahaExtendedControl/v1/main";

/// Build the status URL for an amplifier address
pub fn status_url(address: &str) -> String {
    format!("http://{}{}/getStatus", address, MAIN_ZONE_PATH)
}

/// Build the set-volume URL. `raw` must already be clamped.
pub fn set_volume_url(address: &str, raw: VolumeRaw) -> String {
    format!(
        "http://{}{}/setVolume?volume={}",
        address,
        MAIN_ZONE_PATH,
        raw.value()
    )
}

/// Stateless client for one amplifier's volume endpoints.
///
/// Every call performs exactly one outbound request. There are no retries.
#[derive(Debug, Clone)]
pub struct AmplifierClient<T = ReqwestTransport> {
    transport: T,
}

impl AmplifierClient<ReqwestTransport> {
    /// Client over a default reqwest transport
    pub fn new() -> Result<Self, ClientError> {
        Ok(Self::with_transport(ReqwestTransport::new()?))
    }
}

impl<T: HttpTransport> AmplifierClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Get a reference to the transport used by this client
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Read the current volume from `getStatus`
    pub async fn fetch_volume(&self, address: &str) -> Result<VolumeRaw, ClientError> {
        let url = status_url(address);
        debug!("Fetching volume from {}", url);

        let response = self.transport.get(&url).await?;
        parse_volume(&response.body)
    }

    /// Set the raw volume, clamping into range first.
    ///
    /// Success is transport-level only: the body of the response is ignored and
    /// the clamped value is returned as confirmed.
    pub async fn set_volume(&self, address: &str, raw: i32) -> Result<VolumeRaw, ClientError> {
        let clamped = VolumeRaw::new(raw);
        let url = set_volume_url(address, clamped);
        debug!("Setting volume via {}", url);

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            debug!("setVolume answered with status {}", response.status);
        }

        Ok(clamped)
    }

    /// Set the volume in decibels
    pub async fn set_volume_db(&self, address: &str, db: f64) -> Result<VolumeRaw, ClientError> {
        self.set_volume(address, volume::from_db(db)).await
    }

    /// Set the volume as percent of full scale
    pub async fn set_volume_percent(
        &self,
        address: &str,
        percent: i32,
    ) -> Result<VolumeRaw, ClientError> {
        self.set_volume(address, volume::from_percent(percent)).await
    }
}

/// The part of a `getStatus` body we read; other fields are ignored
#[derive(Debug, Deserialize)]
struct MainZoneStatus {
    volume: i64,
}

/// Extract the integer `volume` field from a `getStatus` body
pub fn parse_volume(body: &str) -> Result<VolumeRaw, ClientError> {
    let json: Value = serde_json::from_str(body)?;
    if !json.is_object() {
        return Err(ClientError::Parse("status body is not a JSON object".to_string()));
    }

    let raw = MainZoneStatus::deserialize(json)?.volume;

    let clamped = raw.clamp(volume::MIN_RAW as i64, volume::MAX_RAW as i64) as i32;
    if clamped as i64 != raw {
        warn!("Amplifier reported out-of-range volume {}, clamped to {}", raw, clamped);
    }

    Ok(VolumeRaw::new(clamped))
}
