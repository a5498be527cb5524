//! Cross-Site Scripting Detection Signatures
//!
//! Covers script blocks, event-handler injection on img/svg elements, and the
//! javascript: URI scheme.

use super::{AttackType, Severity, Signature, SignatureBuilder};
use anyhow::Result;

pub fn signatures() -> Result<Vec<Signature>> {
    Ok(vec![
        SignatureBuilder::new("xss_script_tag", "XSS: script tag")
            .description("Inline <script>...</script> block")
            .attack_type(AttackType::Xss)
            .severity(Severity::Critical)
            .pattern(r"<script.*?>.*?</script>")
            .build()?,
        SignatureBuilder::new("xss_img_onerror", "XSS: img onerror handler")
            .description("onerror= event handler on an <img> element")
            .attack_type(AttackType::Xss)
            .severity(Severity::High)
            .pattern(r"<img\s+.*?onerror\s*=.*?>")
            .build()?,
        SignatureBuilder::new("xss_svg_onload", "XSS: svg onload handler")
            .description("onload= event handler on an <svg> element")
            .attack_type(AttackType::Xss)
            .severity(Severity::High)
            .pattern(r"<svg\s+.*?onload\s*=.*?>")
            .build()?,
        SignatureBuilder::new("xss_javascript_uri", "XSS: javascript URI")
            .description("javascript: URI scheme in an attribute or link")
            .attack_type(AttackType::Xss)
            .severity(Severity::High)
            .pattern(r"javascript:")
            .build()?,
    ])
}
