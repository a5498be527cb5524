//! WAF Engine
//!
//! The core classification engine: normalizes a payload and scans the fixed
//! signature set in order, reporting the first match. Stateless per call and
//! safe for unsynchronized concurrent use; the signature set is never mutated
//! after construction.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::WafConfig;
use crate::detection::Verdict;
use crate::normalize::normalize;
use crate::rules::{self, Signature};

/// WAF engine - the core classification component
pub struct WafEngine {
    /// Active signatures in fixed match order
    signatures: Vec<Signature>,
    /// Current configuration
    pub config: WafConfig,
}

impl WafEngine {
    /// Create a new engine with the given configuration.
    ///
    /// Compiles every enabled signature; a pattern that fails to compile
    /// surfaces here, never during classification.
    pub fn new(config: WafConfig) -> Result<Self> {
        let signatures = rules::load_signatures(&config)?;

        info!(
            signature_count = signatures.len(),
            sqli = config.sqli_enabled,
            xss = config.xss_enabled,
            command_injection = config.command_injection_enabled,
            path_traversal = config.path_traversal_enabled,
            remote_inclusion = config.remote_inclusion_enabled,
            xxe = config.xxe_enabled,
            admin_command = config.admin_command_enabled,
            "WAF engine initialized"
        );

        Ok(Self { signatures, config })
    }

    /// Get the active signature set in match order
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Get a signature by ID
    pub fn get_signature(&self, id: &str) -> Option<&Signature> {
        rules::get_signature(&self.signatures, id)
    }

    /// Classify a raw payload.
    ///
    /// Normalizes the payload, then scans the signature set in order. The
    /// first match wins and short-circuits the scan; if multiple signatures
    /// would match, only the earliest in load order is reported. Total over
    /// all string inputs: never fails, including on the empty string.
    pub fn classify(&self, raw: &str) -> Verdict {
        let normalized = normalize(raw);

        for signature in &self.signatures {
            if signature.matches(&normalized) {
                warn!(
                    signature_id = %signature.id,
                    signature_name = %signature.name,
                    attack_type = %signature.attack_type,
                    severity = %signature.severity,
                    "attack payload detected"
                );
                return Verdict::attack(&signature.id);
            }
        }

        debug!(payload_len = raw.len(), "payload classified safe");
        Verdict::safe()
    }
}
