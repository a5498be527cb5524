//! OS-Level Admin Command Detection Signatures
//!
//! Covers database-to-shell escapes and Windows account manipulation.

use super::{AttackType, Severity, Signature, SignatureBuilder};
use anyhow::Result;

pub fn signatures() -> Result<Vec<Signature>> {
    Ok(vec![
        SignatureBuilder::new("admin_xp_cmdshell", "Admin: xp_cmdshell")
            .description("SQL Server xp_cmdshell shell escape")
            .attack_type(AttackType::AdminCommand)
            .severity(Severity::Critical)
            .pattern(r"xp_cmdshell")
            .build()?,
        SignatureBuilder::new("admin_net_user", "Admin: net user")
            .description("Windows net user account manipulation")
            .attack_type(AttackType::AdminCommand)
            .severity(Severity::High)
            .pattern(r"net\s+user")
            .build()?,
    ])
}
