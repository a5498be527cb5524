//! Path Traversal Detection Signatures
//!
//! Covers repeated ../ sequences and direct references to sensitive system
//! paths on Unix and Windows.

use super::{AttackType, Severity, Signature, SignatureBuilder};
use anyhow::Result;

pub fn signatures() -> Result<Vec<Signature>> {
    Ok(vec![
        // Listed before the /etc/passwd signature: for a payload matching
        // both (e.g. "../../../../etc/passwd") this one wins.
        SignatureBuilder::new("path_dotdot_repeat", "Traversal: repeated ../")
            .description("Two or more ../ sequences climbing out of the web root")
            .attack_type(AttackType::PathTraversal)
            .severity(Severity::High)
            .pattern(r"(\.\./){2,}")
            .build()?,
        SignatureBuilder::new("path_etc_passwd", "Traversal: /etc/passwd")
            .description("Direct reference to the Unix password file")
            .attack_type(AttackType::PathTraversal)
            .severity(Severity::High)
            .pattern(r"/etc/passwd")
            .build()?,
        SignatureBuilder::new("path_windows_system32", "Traversal: windows system32")
            .description("Direct reference to the Windows system directory")
            .attack_type(AttackType::PathTraversal)
            .severity(Severity::High)
            .pattern(r"c:\\windows\\system32")
            .build()?,
    ])
}
