//! Signature Registry
//!
//! Detection signatures organized by attack family. The load order is a fixed
//! contract: classification reports the first matching signature, so the
//! relative position of every signature below is observable behavior.

pub mod signature;

// Signature family modules, in load order
pub mod sqli;
pub mod xss;
pub mod command;
pub mod traversal;
pub mod remote;
pub mod admin;

pub use signature::{AttackType, Severity, Signature, SignatureBuilder};

use crate::config::WafConfig;
use anyhow::Result;

/// Load the signature set in its fixed order, honoring family toggles.
///
/// Disabling a family removes its signatures; the relative order of the
/// remaining signatures is unchanged.
pub fn load_signatures(config: &WafConfig) -> Result<Vec<Signature>> {
    let mut signatures = Vec::new();

    if config.sqli_enabled {
        signatures.extend(sqli::signatures()?);
    }
    if config.xss_enabled {
        signatures.extend(xss::signatures()?);
    }
    if config.command_injection_enabled {
        signatures.extend(command::signatures()?);
    }
    if config.path_traversal_enabled {
        signatures.extend(traversal::signatures()?);
    }
    if config.remote_inclusion_enabled {
        signatures.extend(remote::url_signatures()?);
    }
    if config.xxe_enabled {
        signatures.extend(remote::xxe_signatures()?);
    }
    if config.admin_command_enabled {
        signatures.extend(admin::signatures()?);
    }

    Ok(signatures)
}

/// Get a signature by ID
pub fn get_signature<'a>(signatures: &'a [Signature], id: &str) -> Option<&'a Signature> {
    signatures.iter().find(|s| s.id == id)
}

/// Get signatures by attack family
pub fn get_signatures_by_type(
    signatures: &[Signature],
    attack_type: AttackType,
) -> Vec<&Signature> {
    signatures
        .iter()
        .filter(|s| s.attack_type == attack_type)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_signatures_default_config() {
        let config = WafConfig::default();
        let signatures = load_signatures(&config).unwrap();

        let ids: Vec<&str> = signatures.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "sql_union_select",
                "sql_drop_table",
                "sql_boolean_tautology",
                "sql_dangerous_keyword",
                "xss_script_tag",
                "xss_img_onerror",
                "xss_svg_onload",
                "xss_javascript_uri",
                "cmd_shell_recon",
                "cmd_dangerous_exec",
                "path_dotdot_repeat",
                "path_etc_passwd",
                "path_windows_system32",
                "remote_url_reference",
                "xxe_entity_system",
                "admin_xp_cmdshell",
                "admin_net_user",
            ]
        );
    }

    #[test]
    fn test_ids_unique() {
        let signatures = load_signatures(&WafConfig::default()).unwrap();
        let mut ids: Vec<&str> = signatures.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), signatures.len());
    }

    #[test]
    fn test_load_signatures_sqli_disabled() {
        let config = WafConfig {
            sqli_enabled: false,
            ..Default::default()
        };
        let signatures = load_signatures(&config).unwrap();

        let sqli = get_signatures_by_type(&signatures, AttackType::SqlInjection);
        assert!(sqli.is_empty());
        // Remaining families keep their relative order
        assert_eq!(signatures[0].id, "xss_script_tag");
    }

    #[test]
    fn test_get_signature() {
        let signatures = load_signatures(&WafConfig::default()).unwrap();
        assert!(get_signature(&signatures, "xxe_entity_system").is_some());
        assert!(get_signature(&signatures, "no_such_rule").is_none());
    }
}
