//! Secret configuration values
//!
//! Connection strings carry credentials, so they are held in a
//! `secrecy::Secret` that zeroizes on drop and redacts itself in `Debug`
//! output. The raw value is only reachable through `expose_secret()`.
//!
//! ```rust
//! use docscan::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let conn = secret_string("postgresql://scanner:pw@db/docscan".to_string());
//! assert!(conn.expose_secret().starts_with("postgresql://"));
//! assert!(!format!("{conn:?}").contains("pw@db"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String payload of a [`SecretString`]
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Parse the secret value into another type
    pub fn parse<F: std::str::FromStr>(&self) -> Result<F, F::Err> {
        self.0.parse()
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// A zeroizing, debug-redacted string
pub type SecretString = Secret<SecretValue>;

/// Wrap a plain string as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_creation() {
        let secret = secret_string("postgresql://localhost/docscan".to_string());
        assert_eq!(secret.expose_secret(), "postgresql://localhost/docscan");
        assert!(secret.expose_secret().starts_with("postgresql://"));
        assert!(!secret.expose_secret().is_empty());
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("postgresql://scanner:hunter2@db/docscan".to_string());
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("hunter2"));
        assert!(debug_output.contains("REDACTED") || debug_output.contains("Secret"));
    }

    #[test]
    fn test_secret_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Section {
            connection_string: SecretString,
        }

        let section: Section =
            toml::from_str("connection_string = \"postgres://db/docscan\"").unwrap();
        assert_eq!(
            section.connection_string.expose_secret(),
            "postgres://db/docscan"
        );
    }

    #[test]
    fn test_secret_parse() {
        let port = secret_string("5432".to_string());
        let parsed: u16 = port.expose_secret().parse().unwrap();
        assert_eq!(parsed, 5432);
    }
}
