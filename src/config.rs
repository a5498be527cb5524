//! WAF Configuration Types
//!
//! Configuration for the classification engine: per-family signature toggles.
//! Everything is enabled by default, reproducing the full signature set.

use serde::{Deserialize, Serialize};

/// WAF configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WafConfig {
    /// Enable SQL injection signatures
    #[serde(default = "default_true")]
    pub sqli_enabled: bool,
    /// Enable XSS signatures
    #[serde(default = "default_true")]
    pub xss_enabled: bool,
    /// Enable command injection signatures
    #[serde(default = "default_true")]
    pub command_injection_enabled: bool,
    /// Enable path traversal signatures
    #[serde(default = "default_true")]
    pub path_traversal_enabled: bool,
    /// Enable embedded-URL (RFI/SSRF) signatures
    #[serde(default = "default_true")]
    pub remote_inclusion_enabled: bool,
    /// Enable XML external entity signatures
    #[serde(default = "default_true")]
    pub xxe_enabled: bool,
    /// Enable OS-level admin command signatures
    #[serde(default = "default_true")]
    pub admin_command_enabled: bool,
}

impl Default for WafConfig {
    fn default() -> Self {
        Self {
            sqli_enabled: true,
            xss_enabled: true,
            command_injection_enabled: true,
            path_traversal_enabled: true,
            remote_inclusion_enabled: true,
            xxe_enabled: true,
            admin_command_enabled: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let config = WafConfig::default();
        assert!(config.sqli_enabled);
        assert!(config.xss_enabled);
        assert!(config.command_injection_enabled);
        assert!(config.path_traversal_enabled);
        assert!(config.remote_inclusion_enabled);
        assert!(config.xxe_enabled);
        assert!(config.admin_command_enabled);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: WafConfig = serde_json::from_str(r#"{"sqli-enabled": false}"#).unwrap();
        assert!(!config.sqli_enabled);
        assert!(config.xss_enabled);
    }
}
