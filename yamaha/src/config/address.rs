use std::fmt;

use super::ConfigError;

/// Address used when nothing has been saved yet
pub const DEFAULT_ADDRESS: &str = "192.168.10.107";

/// Host name or IP of the amplifier, optionally with `:port`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AmplifierAddress(String);

impl AmplifierAddress {
    /// Trim and validate a user supplied address
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let trimmed = input.trim();

        let is_valid = !trimmed.is_empty()
            && !trimmed
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'));

        if !is_valid {
            return Err(ConfigError::InvalidAddress(input.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AmplifierAddress {
    fn default() -> Self {
        Self(DEFAULT_ADDRESS.to_string())
    }
}

impl fmt::Display for AmplifierAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AmplifierAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_hosts() {
        assert_eq!(AmplifierAddress::parse("192.168.1.20").unwrap().as_str(), "192.168.1.20");
        assert_eq!(AmplifierAddress::parse("amp.local").unwrap().as_str(), "amp.local");
        assert_eq!(AmplifierAddress::parse("127.0.0.1:8080").unwrap().as_str(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_trims() {
        assert_eq!(AmplifierAddress::parse("  10.0.0.2\n").unwrap().as_str(), "10.0.0.2");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for input in ["", "   ", "amp local", "10.0.0.2/path", "amp?x=1", "amp#frag"] {
            assert!(
                matches!(AmplifierAddress::parse(input), Err(ConfigError::InvalidAddress(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(AmplifierAddress::default().to_string(), DEFAULT_ADDRESS);
    }
}
