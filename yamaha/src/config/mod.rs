mod address;
mod store;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use address::{AmplifierAddress, DEFAULT_ADDRESS};
pub use store::{FileStore, MemoryStore};

/// Preference key holding the amplifier address
pub const ADDRESS_KEY: &str = "yamahaAmpIP";

/// Errors from reading or writing preferences
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid amplifier address: {0:?}")]
    InvalidAddress(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse preferences: {0}")]
    Parse(String),

    #[error("Failed to serialize preferences: {0}")]
    Serialize(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err.to_string())
    }
}

/// A string key/value preference store
pub trait ConfigStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, ConfigError>;
    fn save(&self, key: &str, value: &str) -> Result<(), ConfigError>;
}

/// Read the amplifier address, falling back to [`DEFAULT_ADDRESS`]
pub fn load_address<S: ConfigStore + ?Sized>(store: &S) -> Result<AmplifierAddress, ConfigError> {
    match store.load(ADDRESS_KEY)? {
        Some(value) => AmplifierAddress::parse(&value),
        None => Ok(AmplifierAddress::default()),
    }
}

/// Persist the amplifier address
pub fn save_address<S: ConfigStore + ?Sized>(
    store: &S,
    address: &AmplifierAddress,
) -> Result<(), ConfigError> {
    store.save(ADDRESS_KEY, address.as_str())
}
