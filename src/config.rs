//! Settings consumed by the examples that talk to (simulated) external
//! services. Loaded from TOML; every field has a default.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub sms: SmsGatewayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsGatewayConfig {
    pub jio: JioConfig,
    pub vodafone: VodafoneConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JioConfig {
    pub hostname: String,
    pub port: u16,
    pub api_key: String,
    pub max_retry: u32,
    pub max_recipients: usize,
}

impl Default for JioConfig {
    fn default() -> Self {
        Self {
            hostname: "https://jio.com/sms-gateway".to_string(),
            port: 5000,
            api_key: "x32jfu-bjdjk3-fhdks-3493nnwj".to_string(),
            max_retry: 3,
            max_recipients: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VodafoneConfig {
    pub hostname: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub license_key: String,
    pub auto_retry: bool,
}

impl Default for VodafoneConfig {
    fn default() -> Self {
        Self {
            hostname: "sock://10.100.34.10".to_string(),
            port: 3010,
            username: "some-user".to_string(),
            password: "some-passowrd".to_string(),
            license_key: "ABDS-EFG-HIJK-LM-NOPQRS".to_string(),
            auto_retry: true,
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CatalogConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.sms.jio.max_recipients == 0 {
            return Err(PatternError::Config(
                "sms.jio.max_recipients must be at least 1".to_string(),
            ));
        }
        if self.sms.jio.hostname.is_empty() || self.sms.vodafone.hostname.is_empty() {
            return Err(PatternError::Config("gateway hostname cannot be empty".to_string()));
        }
        Ok(())
    }
}

// Short secrets are masked entirely; longer ones keep a 4-char prefix.
const REDACT_MIN_LEN: usize = 9;

fn redact(secret: &str) -> String {
    if secret.chars().count() < REDACT_MIN_LEN {
        return "****".to_string();
    }
    let visible: String = secret.chars().take(4).collect();
    format!("{visible}****")
}

impl fmt::Display for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let jio = &self.sms.jio;
        let vodafone = &self.sms.vodafone;
        writeln!(f, "[sms.jio]")?;
        writeln!(f, "  endpoint: {}:{}", jio.hostname, jio.port)?;
        writeln!(f, "  api_key: {}", redact(&jio.api_key))?;
        writeln!(f, "  max_retry: {}", jio.max_retry)?;
        writeln!(f, "  max_recipients: {}", jio.max_recipients)?;
        writeln!(f, "[sms.vodafone]")?;
        writeln!(f, "  endpoint: {}:{}", vodafone.hostname, vodafone.port)?;
        writeln!(f, "  username: {}", vodafone.username)?;
        writeln!(f, "  password: {}", redact(&vodafone.password))?;
        writeln!(f, "  license_key: {}", redact(&vodafone.license_key))?;
        write!(f, "  auto_retry: {}", vodafone.auto_retry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.sms.jio.port, 5000);
        assert_eq!(config.sms.vodafone.hostname, "sock://10.100.34.10");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = CatalogConfig::from_toml_str(
            r#"
            [sms.jio]
            port = 6000
            max_recipients = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.sms.jio.port, 6000);
        assert_eq!(config.sms.jio.max_recipients, 2);
        assert_eq!(config.sms.jio.max_retry, 3);
        assert!(config.sms.vodafone.auto_retry);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = CatalogConfig::from_toml_str("[sms.jio]\nmax_recipients = 0").unwrap_err();
        assert!(matches!(err, PatternError::Config(_)));

        let err = CatalogConfig::from_toml_str("[sms.jio]\nport = \"high\"").unwrap_err();
        assert!(matches!(err, PatternError::Config(_)));
    }

    #[test]
    fn test_display_redacts_secrets() {
        let rendered = CatalogConfig::default().to_string();
        assert!(rendered.contains("api_key: x32j****"));
        assert!(rendered.contains("password: some****"));
        assert!(!rendered.contains("3493nnwj"));
    }

    #[test]
    fn test_display_masks_short_secrets() {
        let mut config = CatalogConfig::default();
        config.sms.vodafone.password = "pw1".to_string();
        config.sms.jio.api_key = "abcdefgh".to_string();
        config.sms.vodafone.license_key = String::new();

        let rendered = config.to_string();
        assert!(rendered.contains("  password: ****\n"));
        assert!(rendered.contains("  api_key: ****\n"));
        assert!(rendered.contains("  license_key: ****\n"));
        assert!(!rendered.contains("pw1"));
        assert!(!rendered.contains("abcd"));
    }
}
