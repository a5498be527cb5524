//! Remote Reference and XXE Detection Signatures
//!
//! Covers embedded URLs (potential remote file inclusion / SSRF vectors) and
//! XML external entity declarations.

use super::{AttackType, Severity, Signature, SignatureBuilder};
use anyhow::Result;

pub fn url_signatures() -> Result<Vec<Signature>> {
    Ok(vec![
        // Deliberately broad: any http(s)/ftp URL in a payload is flagged as
        // a potential RFI/SSRF vector.
        SignatureBuilder::new("remote_url_reference", "RFI: embedded URL")
            .description("http://, https://, or ftp:// URL embedded in the payload")
            .attack_type(AttackType::RemoteInclusion)
            .severity(Severity::Medium)
            .pattern(r"(http|https|ftp)://[^\s]+")
            .build()?,
    ])
}

pub fn xxe_signatures() -> Result<Vec<Signature>> {
    Ok(vec![
        SignatureBuilder::new("xxe_entity_system", "XXE: external SYSTEM entity")
            .description("<!ENTITY ... SYSTEM external entity declaration")
            .attack_type(AttackType::XmlExternalEntity)
            .severity(Severity::High)
            .pattern(r"<!entity\s+.*?system")
            .build()?,
    ])
}
