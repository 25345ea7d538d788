use mockall::mock;

use super::{ConfigError, ConfigStore, ADDRESS_KEY};

mock! {
    pub ConfigStore {}

    impl ConfigStore for ConfigStore {
        fn load(&self, key: &str) -> Result<Option<String>, ConfigError>;
        fn save(&self, key: &str, value: &str) -> Result<(), ConfigError>;
    }
}

pub struct MockConfigStoreBuilder {
    address: Option<String>,
    failing_load: bool,
    failing_save: bool,
}

impl MockConfigStoreBuilder {
    pub fn new() -> Self {
        Self {
            address: None,
            failing_load: false,
            failing_save: false,
        }
    }

    /// Value returned for the address key
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn failing_load(mut self) -> Self {
        self.failing_load = true;
        self
    }

    pub fn failing_save(mut self) -> Self {
        self.failing_save = true;
        self
    }

    pub fn build(self) -> MockConfigStore {
        let mut store = MockConfigStore::new();

        let address = self.address;
        if self.failing_load {
            store.expect_load().returning(|_| {
                Err(ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "preferences unreadable",
                )))
            });
        } else {
            store.expect_load().returning(move |key| match key {
                ADDRESS_KEY => Ok(address.clone()),
                _ => Ok(None),
            });
        }

        if self.failing_save {
            store.expect_save().returning(|_, _| {
                Err(ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "preferences read-only",
                )))
            });
        } else {
            store.expect_save().returning(|_, _| Ok(()));
        }

        store
    }
}

impl Default for MockConfigStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
